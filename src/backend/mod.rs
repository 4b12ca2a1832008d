mod api_client;
mod demo;
mod error;

pub use api_client::ApiClient;
pub use demo::DemoBackend;
pub use error::ApiError;

use crate::domain::{Credentials, Product, User};
use reqwest::StatusCode;
use secrecy::SecretString;
use std::cell::Cell;

/// What a successful login hands back.
#[derive(Debug)]
pub struct SignedIn {
    pub access_token: SecretString,
    pub user: User,
}

/// The product backend the app talks to.
#[derive(Debug)]
pub enum Backend {
    Remote(ApiClient),
    Demo(DemoBackend),
}

impl Backend {
    pub fn is_demo(&self) -> bool {
        matches!(self, Self::Demo(_))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<SignedIn, ApiError> {
        match self {
            Self::Remote(client) => client.login(credentials).await,
            Self::Demo(demo) => demo.login(credentials),
        }
    }

    pub async fn get_products(&self, token: &SecretString) -> Result<Vec<Product>, ApiError> {
        match self {
            Self::Remote(client) => client.get_products(token).await,
            Self::Demo(demo) => demo.get_products(token),
        }
    }
}

/// Source of the product list shown on the dashboard.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    async fn get_products(&self) -> Result<Vec<Product>, ApiError>;
}

/// [`ProductApi`] that calls the backend with the session's access token.
///
/// Remembers whether the backend refused the token so the caller can expire
/// the session.
pub struct AuthorizedProducts<'a> {
    backend: &'a Backend,
    token: Option<SecretString>,
    rejected: Cell<bool>,
}

impl<'a> AuthorizedProducts<'a> {
    pub fn new(backend: &'a Backend, token: Option<SecretString>) -> Self {
        Self {
            backend,
            token,
            rejected: Cell::new(false),
        }
    }

    pub fn token_rejected(&self) -> bool {
        self.rejected.get()
    }
}

impl ProductApi for AuthorizedProducts<'_> {
    async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let Some(token) = &self.token else {
            self.rejected.set(true);
            return Err(ApiError::Response {
                status: StatusCode::UNAUTHORIZED,
                message: None,
            });
        };

        let result = self.backend.get_products(token).await;
        if matches!(&result, Err(e) if e.is_unauthorized()) {
            self.rejected.set(true);
        }
        result
    }
}
