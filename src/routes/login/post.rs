use crate::{
    auth::SessionAuth, backend::Backend, locale::Locale, navigation::Redirect, pages::LoginPage,
    session_state::SessionState, utils,
};
use actix_web::{post, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use secrecy::SecretString;

#[derive(serde::Deserialize)]
pub struct FormData {
    email: String,
    password: SecretString,
}

#[post("/login")]
#[tracing::instrument(
    name = "Submit the login form",
    skip_all,
    fields(email = %form.email)
)]
pub async fn login(
    form: web::Form<FormData>,
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

    let FormData { email, password } = form.into_inner();
    page.set_email(email);
    page.set_password(password);
    page.submit(&mut auth, &mut nav).await;

    Ok(nav
        .into_response()
        .unwrap_or_else(|| utils::html(page.render())))
}
