use super::layout;
use crate::{
    auth::AuthContext,
    backend::ApiError,
    domain::{Credentials, LoginEmail, LoginPassword, LoginPasswordError},
    locale::Messages,
    navigation::{NavigateOptions, Navigator},
};
use htmlescape::{encode_attribute, encode_minimal};
use secrecy::SecretString;

#[derive(Debug)]
pub struct FormState {
    pub email: String,
    pub password: SecretString,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub submit_error: Option<String>,
    /// True between dispatching `login` and its settlement.
    pub is_submitting: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: SecretString::from(""),
            email_error: None,
            password_error: None,
            submit_error: None,
            is_submitting: false,
        }
    }
}

pub struct LoginPage {
    messages: &'static Messages,
    show_demo_hint: bool,
    form: FormState,
    expired_notice: Option<String>,
    /// Last expired notice this instance cleared.
    cleared_notice: Option<String>,
    navigated: bool,
}

impl LoginPage {
    pub fn new(messages: &'static Messages, show_demo_hint: bool) -> Self {
        Self {
            messages,
            show_demo_hint,
            form: FormState::default(),
            expired_notice: None,
            cleared_notice: None,
            navigated: false,
        }
    }

    pub fn mount<A: AuthContext, N: Navigator>(&mut self, auth: &mut A, nav: &mut N) {
        self.sync_with_auth(auth, nav);
    }

    /// Reacts to the auth state: leaves for the dashboard when signed in and
    /// takes over a non-empty expired notice, clearing it once per value.
    ///
    /// Safe to run on every render.
    pub fn sync_with_auth<A: AuthContext, N: Navigator>(&mut self, auth: &mut A, nav: &mut N) {
        if auth.is_authenticated() {
            self.navigate_to_dashboard(nav);
        }

        let notice = auth
            .auth_expired_message()
            .filter(|m| !m.is_empty())
            .map(str::to_owned);
        if let Some(notice) = notice {
            if self.cleared_notice.as_deref() != Some(notice.as_str()) {
                self.expired_notice = Some(notice.clone());
                self.cleared_notice = Some(notice);
                auth.clear_auth_expired_message();
            }
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
        self.form.email_error = None;
    }

    pub fn set_password(&mut self, password: SecretString) {
        self.form.password = password;
        self.form.password_error = None;
    }

    /// Validates the form and, when it is valid, marks the page as submitting
    /// and hands back the credentials to log in with.
    ///
    /// Returns `None` while a submission is in flight or after navigating away.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.form.is_submitting || self.navigated {
            return None;
        }
        let m = self.messages;

        let email = LoginEmail::parse(self.form.email.clone());
        let password = LoginPassword::parse(self.form.password.clone());

        self.form.email_error = email.as_ref().err().map(|_| m.invalid_email.to_owned());
        self.form.password_error = password.as_ref().err().map(|e| {
            let message = match e {
                LoginPasswordError::TooShort => m.password_too_short,
                LoginPasswordError::MissingLetterOrDigit => m.password_too_simple,
            };
            message.to_owned()
        });

        let (Ok(email), Ok(password)) = (email, password) else {
            tracing::debug!("The login form failed validation");
            return None;
        };

        self.form.submit_error = None;
        self.form.is_submitting = true;
        Some(Credentials { email, password })
    }

    pub fn finish_submit<N: Navigator>(&mut self, outcome: Result<(), ApiError>, nav: &mut N) {
        self.form.is_submitting = false;
        match outcome {
            Ok(()) => self.navigate_to_dashboard(nav),
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Login was rejected");
                self.form.submit_error = Some(e.display_message(self.messages.login_failed));
            }
        }
    }

    pub async fn submit<A: AuthContext, N: Navigator>(&mut self, auth: &mut A, nav: &mut N) {
        let Some(credentials) = self.begin_submit() else {
            return;
        };
        let outcome = auth.login(credentials).await;
        self.finish_submit(outcome, nav);
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn expired_notice(&self) -> Option<&str> {
        self.expired_notice.as_deref()
    }

    pub fn is_submit_disabled(&self) -> bool {
        self.form.is_submitting
    }

    pub fn has_navigated(&self) -> bool {
        self.navigated
    }

    fn navigate_to_dashboard<N: Navigator>(&mut self, nav: &mut N) {
        if !self.navigated {
            self.navigated = true;
            nav.navigate("/dashboard", NavigateOptions::replace());
        }
    }

    pub fn render(&self) -> String {
        let m = self.messages;
        let paragraph = |class: &str, role: &str, text: &Option<String>| {
            text.as_deref()
                .map(|t| format!(r#"<p class="{class}" role="{role}">{}</p>"#, encode_minimal(t)))
                .unwrap_or_default()
        };
        let field_error = |text: &Option<String>| {
            text.as_deref()
                .map(|t| format!(r#"<span class="field-error">{}</span>"#, encode_minimal(t)))
                .unwrap_or_default()
        };

        let notice = paragraph("notice", "status", &self.expired_notice);
        let submit_error = paragraph("form-error", "alert", &self.form.submit_error);
        let email_error = field_error(&self.form.email_error);
        let password_error = field_error(&self.form.password_error);
        let (disabled, button_label) = if self.is_submit_disabled() {
            (" disabled", m.login_pending)
        } else {
            ("", m.login_button)
        };
        let demo_hint = if self.show_demo_hint {
            format!(r#"<p class="demo-hint">{}</p>"#, m.demo_hint)
        } else {
            String::new()
        };

        let body = format!(
            r#"    <main class="login-page">
        <h1>{heading}</h1>
        <p class="subtitle">{subheading}</p>
        {notice}
        {submit_error}
        <form action="/login" method="post" novalidate>
            <div class="form-group">
                <label for="email">{email_label}</label>
                <input type="text" id="email" name="email" value="{email}" placeholder="{email_placeholder}" autocomplete="email">
                {email_error}
            </div>
            <div class="form-group">
                <label for="password">{password_label}</label>
                <input type="password" id="password" name="password" placeholder="{password_placeholder}" autocomplete="current-password">
                {password_error}
            </div>
            <button type="submit"{disabled}>{button_label}</button>
        </form>
        {demo_hint}
    </main>"#,
            heading = m.login_heading,
            subheading = m.login_subheading,
            email_label = m.email_label,
            email = encode_attribute(&self.form.email),
            email_placeholder = m.email_placeholder,
            password_label = m.password_label,
            password_placeholder = m.password_placeholder,
        );

        layout(m, m.login_heading, &body)
    }
}
