use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginEmail(String);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("{0} is not a valid email address.")]
pub struct LoginEmailError(String);

impl LoginEmail {
    /// Accepts `local@domain.tld` shaped input: no whitespace, a single `@`
    /// and a dotted domain.
    pub fn parse(s: String) -> Result<Self, LoginEmailError> {
        if s.chars().any(char::is_whitespace) || !s.validate_email() || !has_dotted_domain(&s) {
            return Err(LoginEmailError(s));
        }
        Ok(Self(s))
    }

    /// The part before the `@`.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or_default()
    }
}

fn has_dotted_domain(s: &str) -> bool {
    match s.rsplit_once('@') {
        Some((_, domain)) => {
            domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
        }
        None => false,
    }
}

impl AsRef<str> for LoginEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
