use super::{layout, log_out, logout_form, role_badge};
use crate::{
    auth::AuthContext,
    domain::User,
    locale::Messages,
    navigation::{NavigateOptions, Navigator},
};

/// Static page for administrators. Access control happens in the router.
pub struct AdminPage {
    messages: &'static Messages,
    user: User,
}

impl AdminPage {
    pub fn mount<A: AuthContext, N: Navigator>(
        auth: &A,
        nav: &mut N,
        messages: &'static Messages,
    ) -> Option<Self> {
        let Some(user) = auth.user() else {
            nav.navigate("/login", NavigateOptions::replace());
            return None;
        };
        Some(Self {
            messages,
            user: user.clone(),
        })
    }

    pub fn logout<A: AuthContext, N: Navigator>(&self, auth: &mut A, nav: &mut N) {
        log_out(auth, nav);
    }

    pub fn render(&self) -> String {
        let m = self.messages;
        let body = format!(
            r#"    <main class="admin-page">
        <header class="admin-header">
            <a href="/dashboard" class="back-link">{back}</a>
            <h1>{heading}</h1>
            {badge}
            {logout}
        </header>
        <section class="admin-content">
            <p>{admin_only}</p>
        </section>
    </main>"#,
            back = m.back_link,
            heading = m.admin_heading,
            badge = role_badge(m, self.user.role),
            logout = logout_form(m),
            admin_only = m.admin_only,
        );

        layout(m, m.admin_heading, &body)
    }
}
