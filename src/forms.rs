// Form state for the two interactive flows (login, quick-add) plus
// registration. Forms hold named fields, validate the required ones locally
// and turn every outcome into a one-line status message. Errors never
// escape a form's `submit`.
//
// `submit` takes `&mut self`, so one form can only have one request in
// flight. Forms do not coordinate with each other.

use tracing::info;

use crate::api::ApiClient;
use crate::types::{ContentSubmission, ContentType, Credentials, RegisterRequest};

pub const DEMO_EMAIL: &str = "demo@smartcurator.ai";
pub const DEMO_PASSWORD: &str = "demo1234!";

pub const TOKEN_READY_MESSAGE: &str = "토큰 발급 완료! 이제 컨텐츠를 바로 추가해보세요.";
pub const LOGIN_REQUIRED_MESSAGE: &str = "먼저 위에서 JWT 토큰을 발급받아 주세요.";
pub const QUEUED_MESSAGE: &str = "컨텐츠가 백엔드 큐에 등록되었습니다!";
pub const REGISTERED_MESSAGE: &str = "회원가입 완료! 이제 로그인해 주세요.";
pub const CREDENTIALS_REQUIRED_MESSAGE: &str = "이메일과 비밀번호를 입력해 주세요.";
pub const TITLE_REQUIRED_MESSAGE: &str = "제목을 입력해 주세요.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// Transient line shown under a form after it settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn success(text: impl Into<String>) -> Self {
        StatusLine { kind: StatusKind::Success, text: text.into() }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        StatusLine { kind: StatusKind::Failure, text: text.into() }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// Result of a login attempt: the token on success, and the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: Option<String>,
    pub status: StatusLine,
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Default for LoginForm {
    /// Prefilled with the demo account.
    fn default() -> Self {
        LoginForm {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }
}

impl LoginForm {
    pub fn submit(&mut self, api: &ApiClient) -> LoginOutcome {
        if blank(&self.email) || blank(&self.password) {
            return LoginOutcome {
                token: None,
                status: StatusLine::failure(CREDENTIALS_REQUIRED_MESSAGE),
            };
        }
        let credentials = Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        };
        match api.login(&credentials) {
            Ok(token) => {
                info!(token_type = %token.token_type, "login succeeded");
                LoginOutcome {
                    token: Some(token.access_token),
                    status: StatusLine::success(TOKEN_READY_MESSAGE),
                }
            }
            Err(e) => LoginOutcome {
                token: None,
                status: StatusLine::failure(e.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl RegisterForm {
    pub fn submit(&mut self, api: &ApiClient) -> StatusLine {
        if blank(&self.email) || blank(&self.password) {
            return StatusLine::failure(CREDENTIALS_REQUIRED_MESSAGE);
        }
        let req = RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            full_name: non_empty(&self.full_name),
        };
        match api.register(&req) {
            Ok(_) => StatusLine::success(REGISTERED_MESSAGE),
            Err(e) => StatusLine::failure(e.to_string()),
        }
    }
}

/// Quick-add form. `url` and `content` are sent only when filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickAddForm {
    pub title: String,
    pub url: String,
    pub content: String,
    pub content_type: ContentType,
    pub is_public: bool,
}

impl Default for QuickAddForm {
    fn default() -> Self {
        QuickAddForm {
            title: String::new(),
            url: String::new(),
            content: String::new(),
            content_type: ContentType::Url,
            is_public: true,
        }
    }
}

impl QuickAddForm {
    pub fn submission(&self) -> ContentSubmission {
        ContentSubmission {
            title: self.title.clone(),
            url: non_empty(&self.url),
            raw_content: non_empty(&self.content),
            content_type: self.content_type,
            is_public: self.is_public,
        }
    }

    /// Submit with the session token, if there is one. Without a token no
    /// request is made. On success the form resets to its defaults; on
    /// failure it keeps what was typed.
    pub fn submit(&mut self, api: &ApiClient, token: Option<&str>) -> StatusLine {
        let Some(token) = token else {
            return StatusLine::failure(LOGIN_REQUIRED_MESSAGE);
        };
        if blank(&self.title) {
            return StatusLine::failure(TITLE_REQUIRED_MESSAGE);
        }
        match api.quick_add_content(&self.submission(), token) {
            Ok(_) => {
                info!(title = %self.title, content_type = %self.content_type, "content queued");
                *self = QuickAddForm::default();
                StatusLine::success(QUEUED_MESSAGE)
            }
            Err(e) => StatusLine::failure(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_form_starts_with_demo_account() {
        let form = LoginForm::default();
        assert_eq!(form.email, "demo@smartcurator.ai");
        assert_eq!(form.password, "demo1234!");
    }

    #[test]
    fn quick_add_defaults() {
        let form = QuickAddForm::default();
        assert!(form.title.is_empty());
        assert_eq!(form.content_type, ContentType::Url);
        assert!(form.is_public);
    }

    #[test]
    fn empty_optional_fields_are_omitted() {
        let form = QuickAddForm {
            title: "Ownership".to_string(),
            ..QuickAddForm::default()
        };
        let submission = form.submission();
        assert!(submission.url.is_none());
        assert!(submission.raw_content.is_none());

        let form = QuickAddForm {
            title: "Ownership".to_string(),
            url: "https://doc.rust-lang.org/book/".to_string(),
            content: "chapter 4".to_string(),
            ..QuickAddForm::default()
        };
        let submission = form.submission();
        assert_eq!(submission.url.as_deref(), Some("https://doc.rust-lang.org/book/"));
        assert_eq!(submission.raw_content.as_deref(), Some("chapter 4"));
    }
}
