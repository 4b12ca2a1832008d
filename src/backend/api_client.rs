use super::{ApiError, SignedIn};
use crate::domain::{Credentials, Product};
use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;

/// HTTP client for the product backend.
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(mut base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        // `Url::join` replaces the last path segment unless the base ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    #[tracing::instrument(
        name = "Log in against the backend",
        skip(self, credentials),
        fields(email = %credentials.email.as_ref())
    )]
    pub async fn login(&self, credentials: &Credentials) -> Result<SignedIn, ApiError> {
        let body = LoginRequest {
            email: credentials.email.as_ref(),
            password: credentials.password.as_ref().expose_secret(),
        };

        let response = self
            .client
            .post(self.endpoint("auth/login")?)
            .json(&body)
            .send()
            .await?;

        let LoginResponse { token, user } = read_json(response).await?;
        Ok(SignedIn {
            access_token: SecretString::from(token),
            user,
        })
    }

    #[tracing::instrument(name = "Fetch products from the backend", skip_all)]
    pub async fn get_products(&self, token: &SecretString) -> Result<Vec<Product>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("products")?)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        read_json(response).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let url = self
            .base_url
            .join(path)
            .with_context(|| format!("Failed to build the url of the `{path}` endpoint."))?;
        Ok(url)
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::from_response(response).await);
    }
    let body = response
        .json::<T>()
        .await
        .context("The backend sent a malformed response body.")?;
    Ok(body)
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
    user: crate::domain::User,
}
