use rbac_dashboard::{
    config::{self, Settings},
    startup::App,
    telemetry,
};
use reqwest::{redirect, Client, Response};
use serde::Serialize;
use std::{env, io, sync::LazyLock};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

const RQST_FAIL: &str = "Failed to execute request.";

const LOGGER_NAME: &str = "test";
const LOGGER_FILTER_LEVEL: &str = "info";

static TRACING: LazyLock<()> = LazyLock::new(TestApp::init_logging);

pub const TEST_TOKEN: &str = "test-access-token";
pub const TEST_PASSWORD: &str = "password123";

pub struct TestApp {
    pub addr: String,
    pub backend_server: MockServer,
    pub api_client: Client,
}

impl TestApp {
    /// Runs the app in the background at a random port, talking to a mock backend.
    pub async fn spawn() -> TestApp {
        let backend_server = MockServer::start().await;
        let uri = backend_server.uri();
        Self::spawn_with(backend_server, |config| config.backend.base_url = Some(uri)).await
    }

    /// Runs the app in the background against the built-in demo backend.
    pub async fn spawn_demo() -> TestApp {
        let backend_server = MockServer::start().await;
        Self::spawn_with(backend_server, |config| config.backend.base_url = None).await
    }

    async fn spawn_with(backend_server: MockServer, configure: impl FnOnce(&mut Settings)) -> TestApp {
        LazyLock::force(&TRACING);

        // Randomise configuration to ensure test isolation
        let config = {
            let mut raw = config::get().expect("Failed to read configuration");
            // Use a random OS port
            raw.application.port = 0;
            raw.backend.timeout_milliseconds = 2_000;
            configure(&mut raw);
            raw
        };

        let app = App::build(&config).expect("Failed to build application.");
        let addr = format!("http://127.0.0.1:{}", app.addr().port());

        // Run the application as a background task
        tokio::spawn(app.run_until_stopped());

        let api_client = Client::builder()
            .redirect(redirect::Policy::none())
            .cookie_store(true)
            .build()
            .unwrap();

        TestApp {
            addr,
            backend_server,
            api_client,
        }
    }

    fn init_logging() {
        let subscriber: Box<dyn tracing::subscriber::Subscriber + Send + Sync> =
            if env::var("TEST_LOG").is_ok() {
                Box::new(telemetry::get_subscriber(
                    LOGGER_NAME,
                    LOGGER_FILTER_LEVEL,
                    io::stdout,
                ))
            } else {
                Box::new(telemetry::get_subscriber(
                    LOGGER_NAME,
                    LOGGER_FILTER_LEVEL,
                    io::sink,
                ))
            };

        telemetry::init_subscriber(subscriber)
    }

    /// Makes the mock backend accept any login as `username` with `role`.
    pub async fn mock_backend_login(&self, username: &str, role: &str) {
        Mock::given(matchers::path("/auth/login"))
            .and(matchers::method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "token": TEST_TOKEN,
                "user": { "username": username, "role": role },
            })))
            .mount(&self.backend_server)
            .await;
    }

    /// Makes the mock backend answer the product list with `status` and `body`.
    pub async fn mock_backend_products(&self, status: u16, body: serde_json::Value) {
        Mock::given(matchers::path("/products"))
            .and(matchers::method("GET"))
            .and(matchers::header(
                "Authorization",
                format!("Bearer {TEST_TOKEN}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.backend_server)
            .await;
    }

    pub async fn login_as(&self, username: &str, role: &str) -> Response {
        self.mock_backend_login(username, role).await;
        self.post_login(&serde_json::json!({
            "email": format!("{username}@example.com"),
            "password": TEST_PASSWORD,
        }))
        .await
    }

    pub async fn get_login(&self) -> Response {
        self.get("/login").await
    }

    pub async fn get_login_html(&self) -> String {
        self.get_login().await.text().await.unwrap()
    }

    pub async fn post_login<Body: Serialize>(&self, body: &Body) -> Response {
        self.api_client
            .post(format!("{}/login", self.addr))
            .form(body)
            .send()
            .await
            .expect(RQST_FAIL)
    }

    pub async fn get_dashboard(&self) -> Response {
        self.get("/dashboard").await
    }

    pub async fn get_dashboard_html(&self) -> String {
        self.get_dashboard().await.text().await.unwrap()
    }

    pub async fn get_admin(&self) -> Response {
        self.get("/admin").await
    }

    pub async fn get_admin_html(&self) -> String {
        self.get_admin().await.text().await.unwrap()
    }

    pub async fn post_logout(&self) -> Response {
        self.api_client
            .post(format!("{}/logout", self.addr))
            .send()
            .await
            .expect(RQST_FAIL)
    }

    async fn get(&self, path: &str) -> Response {
        self.api_client
            .get(format!("{}{path}", self.addr))
            .send()
            .await
            .expect(RQST_FAIL)
    }
}

pub fn assert_redirects_to(resp: &Response, location: &str) {
    assert_eq!(resp.status().as_u16(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), location);
}
