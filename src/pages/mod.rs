//! Page components.
//!
//! A page owns its view state, receives its collaborators ([`AuthContext`],
//! [`ProductApi`](crate::backend::ProductApi), [`Navigator`]) as parameters
//! and renders itself to HTML. The HTTP layer in [`crate::routes`] mounts one
//! page per request.

mod admin;
mod dashboard;
mod login;

pub use admin::AdminPage;
pub use dashboard::{DashboardPage, LoadState};
pub use login::{FormState, LoginPage};

use crate::{
    auth::AuthContext,
    domain::Role,
    locale::Messages,
    navigation::{NavigateOptions, Navigator},
};
use htmlescape::encode_minimal;

/// Signs out and leaves for the login page without carrying any state.
pub fn log_out<A: AuthContext, N: Navigator>(auth: &mut A, nav: &mut N) {
    auth.logout();
    nav.navigate(
        "/login",
        NavigateOptions {
            replace: true,
            state: None,
        },
    );
}

fn layout(messages: &Messages, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        lang = messages.html_lang,
        title = encode_minimal(title),
    )
}

fn role_badge(messages: &Messages, role: Role) -> String {
    format!(
        r#"<span class="{class}">{label}</span>"#,
        class = role.badge_class(),
        label = messages.role_label(role),
    )
}

fn logout_form(messages: &Messages) -> String {
    format!(
        r#"<form class="logout-form" action="/logout" method="post">
                <button type="submit" class="logout-button">{}</button>
            </form>"#,
        messages.logout_button
    )
}
