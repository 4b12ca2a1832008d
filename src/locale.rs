use crate::domain::Role;
use serde::Deserialize;

/// Languages the pages can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-TW", alias = "zh-tw")]
    ZhTw,
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::ZhTw => &ZH_TW,
            Self::En => &EN,
        }
    }
}

/// Every piece of text a page renders.
#[derive(Debug)]
pub struct Messages {
    pub html_lang: &'static str,

    pub login_heading: &'static str,
    pub login_subheading: &'static str,
    pub email_label: &'static str,
    pub email_placeholder: &'static str,
    pub password_label: &'static str,
    pub password_placeholder: &'static str,
    pub login_button: &'static str,
    pub login_pending: &'static str,
    pub demo_hint: &'static str,
    pub invalid_email: &'static str,
    pub password_too_short: &'static str,
    pub password_too_simple: &'static str,
    pub login_failed: &'static str,
    pub session_expired: &'static str,

    pub dashboard_heading: &'static str,
    pub products_heading: &'static str,
    pub products_loading: &'static str,
    pub products_failed: &'static str,

    pub admin_heading: &'static str,
    pub back_link: &'static str,
    pub admin_only: &'static str,

    pub logout_button: &'static str,
    pub admin_role: &'static str,
    pub user_role: &'static str,
}

impl Messages {
    pub fn greeting(&self, username: &str) -> String {
        format!("Welcome, {username} 👋")
    }

    pub fn role_label(&self, role: Role) -> &'static str {
        match role {
            Role::Admin => self.admin_role,
            Role::User => self.user_role,
        }
    }
}

static ZH_TW: Messages = Messages {
    html_lang: "zh-TW",

    login_heading: "歡迎回來",
    login_subheading: "請登入您的帳號",
    email_label: "電子郵件",
    email_placeholder: "name@example.com",
    password_label: "密碼",
    password_placeholder: "請輸入密碼",
    login_button: "登入",
    login_pending: "登入中...",
    demo_hint: "測試帳號：任意 email 格式 / 密碼需包含英數且8位以上",
    invalid_email: "請輸入有效的 Email 格式",
    password_too_short: "密碼必須至少 8 個字元",
    password_too_simple: "密碼必須包含英文字母和數字",
    login_failed: "登入失敗，請稍後再試",
    session_expired: "登入已過期，請重新登入",

    dashboard_heading: "儀表板",
    products_heading: "商品列表",
    products_loading: "載入商品中...",
    products_failed: "無法載入商品，請稍後再試",

    admin_heading: "🛠️ 管理後台",
    back_link: "← 返回",
    admin_only: "管理員專屬頁面",

    logout_button: "登出",
    admin_role: "管理員",
    user_role: "一般用戶",
};

static EN: Messages = Messages {
    html_lang: "en",

    login_heading: "Welcome back",
    login_subheading: "Sign in to your account",
    email_label: "Email",
    email_placeholder: "name@example.com",
    password_label: "Password",
    password_placeholder: "Enter your password",
    login_button: "Login",
    login_pending: "Logging in...",
    demo_hint: "Test account: any email address / password with letters and digits, at least 8 characters",
    invalid_email: "Please enter a valid email address",
    password_too_short: "Password must be at least 8 characters",
    password_too_simple: "Password must contain both letters and digits",
    login_failed: "Login failed, please try again later",
    session_expired: "Your session has expired, please log in again",

    dashboard_heading: "Dashboard",
    products_heading: "Products",
    products_loading: "Loading products...",
    products_failed: "Failed to load products, please try again later",

    admin_heading: "🛠️ Admin Panel",
    back_link: "← Back",
    admin_only: "Administrators only",

    logout_button: "Logout",
    admin_role: "Administrator",
    user_role: "User",
};
