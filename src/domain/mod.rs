mod credentials;
mod login_email;
mod login_password;
mod product;
mod user;

pub use credentials::Credentials;
pub use login_email::{LoginEmail, LoginEmailError};
pub use login_password::{LoginPassword, LoginPasswordError};
pub use product::{format_price, Product};
pub use user::{Role, User};
