use crate::{
    auth::SessionAuth, backend::Backend, navigation::Redirect, pages, session_state::SessionState,
    utils,
};
use actix_web::{post, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

#[post("/logout")]
#[tracing::instrument(name = "Log out", skip_all)]
pub async fn log_out(
    session: SessionState,
    backend: web::Data<Backend>,
    flash_messages: IncomingFlashMessages,
) -> actix_web::Result<HttpResponse> {
    let mut auth = SessionAuth::load(session, backend, &flash_messages).map_err(utils::e500)?;
    let mut nav = Redirect::default();

    pages::log_out(&mut auth, &mut nav);

    Ok(nav
        .into_response()
        .unwrap_or_else(|| utils::see_other("/login")))
}
