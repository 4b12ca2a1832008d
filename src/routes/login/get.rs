use crate::{
    auth::SessionAuth, backend::Backend, locale::Locale, navigation::Redirect, pages::LoginPage,
    session_state::SessionState, utils,
};
use actix_web::{get, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

#[get("/login")]
#[tracing::instrument(name = "Render the login page", skip_all)]
pub async fn login_form(
    session: SessionState,
    backend: web::Data<Backend>,
    locale: web::Data<Locale>,
    flash_messages: IncomingFlashMessages,
) -> actix_web::Result<HttpResponse> {
    let show_demo_hint = backend.is_demo();
    let mut auth = SessionAuth::load(session, backend, &flash_messages).map_err(utils::e500)?;
    let mut nav = Redirect::default();

    let mut page = LoginPage::new(locale.messages(), show_demo_hint);
    page.mount(&mut auth, &mut nav);

    Ok(nav
        .into_response()
        .unwrap_or_else(|| utils::html(page.render())))
}
