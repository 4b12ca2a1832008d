use super::{layout, log_out, logout_form, role_badge};
use crate::{
    auth::AuthContext,
    backend::{ApiError, ProductApi},
    domain::{Product, User},
    locale::Messages,
    navigation::{NavigateOptions, Navigator},
};
use htmlescape::encode_minimal;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Success(Vec<Product>),
    Failure(String),
}

pub struct DashboardPage {
    messages: &'static Messages,
    user: User,
    state: LoadState,
    fetch_issued: bool,
    mounted: bool,
}

impl DashboardPage {
    /// Mounts the page for the signed-in user, or sends anonymous visitors to
    /// the login page.
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
            state: LoadState::Loading,
            fetch_issued: false,
            mounted: true,
        })
    }

    /// Fetches the product list. Only the first call per instance fetches.
    #[tracing::instrument(name = "Load dashboard products", skip_all, fields(username = %self.user.username))]
    pub async fn load<P: ProductApi>(&mut self, api: &P) {
        if !self.begin_fetch() {
            return;
        }
        let result = api.get_products().await;
        self.resolve(result);
    }

    /// Claims the single fetch this instance is allowed to issue.
    pub fn begin_fetch(&mut self) -> bool {
        if self.fetch_issued || !self.mounted {
            return false;
        }
        self.fetch_issued = true;
        true
    }

    pub fn resolve(&mut self, result: Result<Vec<Product>, ApiError>) {
        if !self.mounted {
            tracing::debug!("Discarding a product fetch that settled after unmount");
            return;
        }
        if self.state != LoadState::Loading {
            return;
        }

        self.state = match result {
            Ok(products) => LoadState::Success(products),
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Failed to load products");
                LoadState::Failure(e.display_message(self.messages.products_failed))
            }
        };
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn logout<A: AuthContext, N: Navigator>(&mut self, auth: &mut A, nav: &mut N) {
        self.unmount();
        log_out(auth, nav);
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn render(&self) -> String {
        let m = self.messages;
        let admin_link = if self.user.role.is_admin() {
            format!(r#"<a href="/admin" class="admin-link">{}</a>"#, m.admin_heading)
        } else {
            String::new()
        };

        let body = format!(
            r#"    <main class="dashboard-page">
        <header class="dashboard-header">
            <h1>{heading}</h1>
            <div class="user-info">
                <p class="greeting">{greeting}</p>
                {badge}
                {admin_link}
                {logout}
            </div>
        </header>
        <section class="products">
            {products}
        </section>
    </main>"#,
            heading = m.dashboard_heading,
            greeting = encode_minimal(&m.greeting(&self.user.username)),
            badge = role_badge(m, self.user.role),
            logout = logout_form(m),
            products = self.render_products(),
        );

        layout(m, m.dashboard_heading, &body)
    }

    fn render_products(&self) -> String {
        let m = self.messages;
        match &self.state {
            LoadState::Loading => format!(
                r#"<div class="loading"><div class="spinner"></div><p>{}</p></div>"#,
                m.products_loading
            ),
            LoadState::Success(products) => {
                let items: String = products
                    .iter()
                    .map(|p| {
                        format!(
                            r#"
                <li class="product-card">
                    <h3>{name}</h3>
                    <p class="description">{description}</p>
                    <p class="price">{price}</p>
                </li>"#,
                            name = encode_minimal(&p.name),
                            description = encode_minimal(&p.description),
                            price = p.formatted_price(),
                        )
                    })
                    .collect();
                format!(
                    r#"<h2>{}</h2>
            <ul class="product-list">{items}
            </ul>"#,
                    m.products_heading
                )
            }
            LoadState::Failure(message) => format!(
                r#"<h2>{}</h2>
            <p class="error" role="alert">{}</p>"#,
                m.products_heading,
                encode_minimal(message)
            ),
        }
    }
}
