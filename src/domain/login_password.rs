use secrecy::{ExposeSecret, SecretString};
use std::fmt::Debug;
use unicode_segmentation::UnicodeSegmentation;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A password that is long enough and mixes letters with digits.
#[derive(Debug)]
pub struct LoginPassword(SecretString);

impl LoginPassword {
    /// Length is checked before complexity, so a short password only ever
    /// reports [`LoginPasswordError::TooShort`].
    pub fn parse(s: SecretString) -> Result<Self, LoginPasswordError> {
        let raw = s.expose_secret();

        if raw.graphemes(true).count() < MIN_PASSWORD_LENGTH {
            return Err(LoginPasswordError::TooShort);
        }

        let has_letter = raw.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = raw.chars().any(|c| c.is_ascii_digit());
        if !(has_letter && has_digit) {
            return Err(LoginPasswordError::MissingLetterOrDigit);
        }

        Ok(Self(s))
    }
}

impl AsRef<SecretString> for LoginPassword {
    fn as_ref(&self) -> &SecretString {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LoginPasswordError {
    #[error("Passwords must be at least {} characters long.", MIN_PASSWORD_LENGTH)]
    TooShort,
    #[error("Passwords must contain both letters and digits.")]
    MissingLetterOrDigit,
}
