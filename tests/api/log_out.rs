use crate::helpers::{self, TestApp};

#[tokio::test]
async fn logout_clears_session_state() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mock_backend_products(200, serde_json::json!([])).await;

    // Act 1: Login
    let resp = app.login_as("admin", "admin").await;
    helpers::assert_redirects_to(&resp, "/dashboard");

    // Act 2: Follow the redirect
    let html = app.get_dashboard_html().await;
    assert!(html.contains("Welcome, admin 👋"));

    // Act 3: Logout
    let resp = app.post_logout().await;
    helpers::assert_redirects_to(&resp, "/login");

    // Act 4: The login page no longer redirects
    let resp = app.get_login().await;
    assert_eq!(resp.status().as_u16(), 200);

    // Act 5: Attempt to load the protected pages
    helpers::assert_redirects_to(&app.get_dashboard().await, "/login");
    helpers::assert_redirects_to(&app.get_admin().await, "/login");
}

#[tokio::test]
async fn anonymous_logout_goes_to_the_login_page() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let resp = app.post_logout().await;

    // Assert
    helpers::assert_redirects_to(&resp, "/login");
}
