use crate::{
    auth::SessionAuth, backend::Backend, locale::Locale, navigation::Redirect, pages::AdminPage,
    session_state::SessionState, utils,
};
use actix_web::{get, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

#[get("")]
#[tracing::instrument(name = "Render the admin page", skip_all)]
pub async fn admin_page(
    session: SessionState,
    backend: web::Data<Backend>,
    locale: web::Data<Locale>,
    flash_messages: IncomingFlashMessages,
) -> actix_web::Result<HttpResponse> {
    let auth = SessionAuth::load(session, backend, &flash_messages).map_err(utils::e500)?;
    let mut nav = Redirect::default();

    match AdminPage::mount(&auth, &mut nav, locale.messages()) {
        Some(page) => Ok(utils::html(page.render())),
        None => Ok(nav
            .into_response()
            .unwrap_or_else(|| utils::see_other("/login"))),
    }
}
