mod context;
mod middleware;

pub use context::{AuthContext, SessionAuth};
pub use middleware::{reject_anonymous_users, reject_non_admin_users, AuthenticatedUser};
