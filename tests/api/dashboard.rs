use crate::helpers::{self, TestApp};

#[tokio::test]
async fn you_must_be_logged_in_to_access_the_dashboard() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let resp = app.get_dashboard().await;

    // Assert
    helpers::assert_redirects_to(&resp, "/login");
}

#[tokio::test]
async fn the_dashboard_lists_the_products() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mock_backend_products(
        200,
        serde_json::json!([
            { "id": 1, "name": "Prod A", "price": 100, "description": "Desc A" },
            { "id": 2, "name": "Prod B", "price": 200, "description": "Desc B" },
        ]),
    )
    .await;
    app.login_as("testuser", "user").await;

    // Act
    let html = app.get_dashboard_html().await;

    // Assert
    assert!(html.contains("<h1>儀表板</h1>"));
    assert!(html.contains(r#"<span class="role-badge user">一般用戶</span>"#));
    assert!(html.contains("<h2>商品列表</h2>"));
    assert!(html.contains("<h3>Prod A</h3>"));
    assert!(html.contains("<h3>Prod B</h3>"));
    assert!(html.contains("NT$ 100"));
    assert!(html.contains("NT$ 200"));
    assert!(!html.contains("載入商品中..."));
}

#[tokio::test]
async fn the_dashboard_shows_the_backend_error_message() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mock_backend_products(500, serde_json::json!({ "message": "Error fetching data" }))
        .await;
    app.login_as("testuser", "user").await;

    // Act
    let resp = app.get_dashboard().await;

    // Assert
    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Error fetching data"));
    // Logout is still offered
    assert!(html.contains(r#"<form class="logout-form" action="/logout" method="post">"#));
}

#[tokio::test]
async fn only_admins_see_the_admin_link() {
    // Arrange
    let admin_app = TestApp::spawn().await;
    admin_app.mock_backend_products(200, serde_json::json!([])).await;
    admin_app.login_as("admin", "admin").await;

    let user_app = TestApp::spawn().await;
    user_app.mock_backend_products(200, serde_json::json!([])).await;
    user_app.login_as("user", "user").await;

    // Act
    let admin_html = admin_app.get_dashboard_html().await;
    let user_html = user_app.get_dashboard_html().await;

    // Assert
    assert!(admin_html.contains(r#"<a href="/admin" class="admin-link">🛠️ 管理後台</a>"#));
    assert!(!user_html.contains("🛠️ 管理後台"));
}

#[tokio::test]
async fn a_refused_token_expires_the_session_with_a_one_shot_notice() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mock_backend_products(401, serde_json::json!({ "message": "Token expired" }))
        .await;
    app.login_as("testuser", "user").await;

    // Act
    let resp = app.get_dashboard().await;

    // Assert
    helpers::assert_redirects_to(&resp, "/login");

    // Act 2: Follow the redirect
    let html = app.get_login_html().await;

    // Assert 2
    assert!(html.contains("登入已過期，請重新登入"));

    // Act 3: Reload the login page
    let html = app.get_login_html().await;

    // Assert 3
    assert!(!html.contains("登入已過期，請重新登入"));

    // Act 4: The session is gone
    let resp = app.get_dashboard().await;

    // Assert 4
    helpers::assert_redirects_to(&resp, "/login");
}
