use crate::{
    auth::SessionAuth,
    backend::{AuthorizedProducts, Backend},
    locale::Locale,
    navigation::Redirect,
    pages::DashboardPage,
    session_state::SessionState,
    utils,
};
use actix_web::{get, web, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;

#[get("")]
#[tracing::instrument(name = "Render the dashboard", skip_all)]
pub async fn dashboard(
    session: SessionState,
    backend: web::Data<Backend>,
    locale: web::Data<Locale>,
    flash_messages: IncomingFlashMessages,
) -> actix_web::Result<HttpResponse> {
    let messages = locale.messages();
    let mut auth =
        SessionAuth::load(session, backend.clone(), &flash_messages).map_err(utils::e500)?;
    let mut nav = Redirect::default();

    let Some(mut page) = DashboardPage::mount(&auth, &mut nav, messages) else {
        return Ok(nav
            .into_response()
            .unwrap_or_else(|| utils::see_other("/login")));
    };

    let token = auth.access_token().map_err(utils::e500)?;
    let products = AuthorizedProducts::new(&backend, token);
    page.load(&products).await;

    if products.token_rejected() {
        tracing::info!(
            username = %page.user().username,
            "The backend refused the access token, expiring the session"
        );
        auth.expire_session(messages.session_expired);
        return Ok(utils::see_other("/login"));
    }

    Ok(utils::html(page.render()))
}
