use super::{LoginEmail, LoginPassword};

/// Credentials that passed client-side validation and can be sent to the backend.
#[derive(Debug)]
pub struct Credentials {
    pub email: LoginEmail,
    pub password: LoginPassword,
}
