use crate::{
    auth::{reject_anonymous_users, reject_non_admin_users},
    backend::Backend,
    config::Settings,
    locale::Locale,
    routes::*,
};
use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::{
    cookie::Key, dev::Server, middleware::from_fn as mw_fn, web, web::Data, HttpServer,
};
use actix_web_flash_messages::{storage::CookieMessageStore, FlashMessagesFramework};
use anyhow::Context;
use core::net::SocketAddr;
use secrecy::{ExposeSecret, SecretString};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct App {
    server: Server,
    socket_addr: SocketAddr,
}

impl App {
    pub fn build(config: &Settings) -> anyhow::Result<Self> {
        let listener =
            TcpListener::bind((config.application.host.clone(), config.application.port))
                .context("Failed to bind the listener.")?;
        let socket_addr = listener.local_addr()?;
        let backend = config.backend.backend()?;
        if backend.is_demo() {
            tracing::warn!("No backend url configured, serving the demo backend");
        }

        let server = Self::get_server_runner(
            listener,
            backend,
            config.application.locale,
            &config.application.hmac_secret,
        )?;

        Ok(Self {
            server,
            socket_addr,
        })
    }

    fn get_server_runner(
        listener: TcpListener,
        backend: Backend,
        locale: Locale,
        hmac_secret: &SecretString,
    ) -> anyhow::Result<Server> {
        let backend = Data::new(backend);
        let locale = Data::new(locale);
        let secret_key = Key::try_from(hmac_secret.expose_secret().as_bytes())
            .context("The hmac secret must be at least 64 bytes long.")?;
        let message_framework = {
            let store = CookieMessageStore::builder(secret_key.clone()).build();
            FlashMessagesFramework::builder(store).build()
        };
        let server = HttpServer::new(move || {
            actix_web::App::new()
                .wrap(message_framework.clone())
                .wrap(SessionMiddleware::new(
                    CookieSessionStore::default(),
                    secret_key.clone(),
                ))
                .wrap(TracingLogger::default())
                .service(health_check)
                .service(login_form)
                .service(login)
                .service(log_out)
                .service(
                    web::scope("/dashboard")
                        .wrap(mw_fn(reject_anonymous_users))
                        .service(dashboard),
                )
                .service(
                    web::scope("/admin")
                        .wrap(mw_fn(reject_non_admin_users))
                        .wrap(mw_fn(reject_anonymous_users))
                        .service(admin_page),
                )
                .app_data(Data::clone(&backend))
                .app_data(Data::clone(&locale))
        })
        .listen(listener)?
        .run();

        Ok(server)
    }

    pub fn addr(&self) -> SocketAddr {
        self.socket_addr
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        self.server.await?;
        Ok(())
    }
}
