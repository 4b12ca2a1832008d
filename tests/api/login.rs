use crate::helpers::{self, TestApp, TEST_PASSWORD};
use wiremock::{matchers, Mock, ResponseTemplate};

#[tokio::test]
async fn the_login_form_renders_its_fields() {
    // Arrange
    let app = TestApp::spawn().await;

    // Act
    let html = app.get_login_html().await;

    // Assert
    assert!(html.contains("<h1>歡迎回來</h1>"));
    assert!(html.contains(r#"<input type="text" id="email" name="email""#));
    assert!(html.contains(r#"<input type="password" id="password" name="password""#));
    assert!(html.contains(r#"<button type="submit">登入</button>"#));
    assert!(!html.contains("測試帳號"));
}

#[tokio::test]
async fn the_demo_backend_shows_the_test_account_hint() {
    // Arrange
    let app = TestApp::spawn_demo().await;

    // Act
    let html = app.get_login_html().await;

    // Assert
    assert!(html.contains("測試帳號：任意 email 格式 / 密碼需包含英數且8位以上"));
}

#[tokio::test]
async fn an_invalid_form_is_rejected_without_calling_the_backend() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend_server)
        .await;

    let test_cases = vec![
        ("invalid-email", TEST_PASSWORD, "請輸入有效的 Email 格式"),
        ("test@example.com", "12345", "密碼必須至少 8 個字元"),
        ("test@example.com", "12345678", "密碼必須包含英文字母和數字"),
        ("test@example.com", "abcdefgh", "密碼必須包含英文字母和數字"),
    ];

    for (email, password, error_message) in test_cases {
        // Act
        let resp = app
            .post_login(&serde_json::json!({ "email": email, "password": password }))
            .await;

        // Assert
        assert_eq!(resp.status().as_u16(), 200);
        let html = resp.text().await.unwrap();
        assert!(
            html.contains(error_message),
            "The page did not show `{error_message}` for {email} / {password}."
        );
    }
}

#[tokio::test]
async fn redirect_to_the_dashboard_after_login_success() {
    // Arrange
    let app = TestApp::spawn().await;
    app.mock_backend_products(200, serde_json::json!([])).await;

    // Act
    let resp = app.login_as("testuser", "user").await;

    // Assert
    helpers::assert_redirects_to(&resp, "/dashboard");

    // Act 2: Follow the redirect
    let html = app.get_dashboard_html().await;

    // Assert 2
    assert!(html.contains("Welcome, testuser 👋"));
}

#[tokio::test]
async fn signed_in_users_are_sent_from_the_login_page_to_the_dashboard() {
    // Arrange
    let app = TestApp::spawn().await;
    app.login_as("testuser", "user").await;

    // Act
    let resp = app.get_login().await;

    // Assert
    helpers::assert_redirects_to(&resp, "/dashboard");
}

#[tokio::test]
async fn a_rejected_login_shows_the_backend_message() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(matchers::path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&app.backend_server)
        .await;

    // Act
    let resp = app
        .post_login(&serde_json::json!({
            "email": "test@example.com",
            "password": TEST_PASSWORD,
        }))
        .await;

    // Assert
    assert_eq!(resp.status().as_u16(), 200);
    let html = resp.text().await.unwrap();
    assert!(html.contains("Invalid credentials"));
    assert!(html.contains(r#"<button type="submit">登入</button>"#));
    assert!(!html.contains("登入中..."));
    assert!(html.contains(&format!(
        r#"value="{}""#,
        htmlescape::encode_attribute("test@example.com")
    )));

    // Act 2: The session was not created
    let resp = app.get_dashboard().await;

    // Assert 2
    helpers::assert_redirects_to(&resp, "/login");
}

#[tokio::test]
async fn an_unreachable_backend_shows_the_generic_message() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(matchers::path("/auth/login"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&app.backend_server)
        .await;

    // Act
    let resp = app
        .post_login(&serde_json::json!({
            "email": "test@example.com",
            "password": TEST_PASSWORD,
        }))
        .await;

    // Assert
    let html = resp.text().await.unwrap();
    assert!(html.contains("登入失敗，請稍後再試"));
}

#[tokio::test]
async fn the_demo_backend_signs_in_the_admin_mailbox_as_admin() {
    // Arrange
    let app = TestApp::spawn_demo().await;

    // Act
    let resp = app
        .post_login(&serde_json::json!({
            "email": "admin@example.com",
            "password": TEST_PASSWORD,
        }))
        .await;

    // Assert
    helpers::assert_redirects_to(&resp, "/dashboard");

    // Act 2: Follow the redirect
    let html = app.get_dashboard_html().await;

    // Assert 2
    assert!(html.contains("Welcome, admin 👋"));
    assert!(html.contains(r#"<a href="/admin" class="admin-link">🛠️ 管理後台</a>"#));
    assert!(html.contains("NT$ 2,490"));
}
