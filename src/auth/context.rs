use crate::{
    backend::{ApiError, Backend, SignedIn},
    domain::{Credentials, User},
    session_state::SessionState,
};
use actix_session::SessionGetError;
use actix_web::web;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};

/// Everything a page may know or do about the signed-in user.
#[allow(async_fn_in_trait)]
pub trait AuthContext {
    fn user(&self) -> Option<&User>;

    fn is_authenticated(&self) -> bool {
        self.user().is_some()
    }

    async fn login(&mut self, credentials: Credentials) -> Result<(), ApiError>;

    fn logout(&mut self);

    /// One-shot notice left behind when a session was dropped by the backend.
    fn auth_expired_message(&self) -> Option<&str>;

    fn clear_auth_expired_message(&mut self);
}

/// [`AuthContext`] backed by the session cookie and the configured backend.
pub struct SessionAuth {
    session: SessionState,
    backend: web::Data<Backend>,
    user: Option<User>,
    expired_message: Option<String>,
}

impl SessionAuth {
    pub fn load(
        session: SessionState,
        backend: web::Data<Backend>,
        flash_messages: &IncomingFlashMessages,
    ) -> Result<Self, SessionGetError> {
        let user = session.user().get()?;
        let expired_message = flash_messages
            .iter()
            .filter(|m| matches!(m.level(), Level::Warning))
            .map(|m| m.content().to_owned())
            .last();

        Ok(Self {
            session,
            backend,
            user,
            expired_message,
        })
    }

    pub fn access_token(&self) -> Result<Option<SecretString>, SessionGetError> {
        Ok(self.session.access_token().get()?.map(SecretString::from))
    }

    /// Drops the session and leaves the notice for the next login page.
    pub fn expire_session(&mut self, notice: &str) {
        self.session.purge();
        self.user = None;
        FlashMessage::warning(notice).send();
    }

    fn store(&self, signed_in: &SignedIn) -> anyhow::Result<()> {
        self.session.renew();
        self.session
            .user()
            .insert(signed_in.user.clone())
            .context("Failed to store the user in the session.")?;
        self.session
            .access_token()
            .insert(signed_in.access_token.expose_secret().to_owned())
            .context("Failed to store the access token in the session.")?;
        Ok(())
    }
}

impl AuthContext for SessionAuth {
    fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[tracing::instrument(
        name = "Log in",
        skip_all,
        fields(email = %credentials.email.as_ref(), username = tracing::field::Empty)
    )]
    async fn login(&mut self, credentials: Credentials) -> Result<(), ApiError> {
        let signed_in = self.backend.login(&credentials).await?;
        self.store(&signed_in)?;
        tracing::Span::current().record(
            "username",
            tracing::field::display(&signed_in.user.username),
        );
        self.user = Some(signed_in.user);
        Ok(())
    }

    fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(username = %user.username, "Logging out");
        }
        self.session.purge();
    }

    fn auth_expired_message(&self) -> Option<&str> {
        self.expired_message.as_deref()
    }

    fn clear_auth_expired_message(&mut self) {
        self.expired_message = None;
    }
}
