//! Login and quick-add flows end to end against a mock backend.

mod common;

use common::MockBackend;
use serde_json::json;
use smartcurator_cli::forms::{
    LoginForm, QuickAddForm, RegisterForm, StatusKind, LOGIN_REQUIRED_MESSAGE, QUEUED_MESSAGE,
    TITLE_REQUIRED_MESSAGE, TOKEN_READY_MESSAGE,
};
use smartcurator_cli::types::ContentType;
use smartcurator_cli::ApiClient;

fn client(backend: &MockBackend) -> ApiClient {
    ApiClient::new(&backend.base_url).unwrap()
}

#[test]
fn demo_login_yields_access_token() {
    let backend = MockBackend::fixed(200, r#"{"access_token":"abc","token_type":"bearer"}"#);
    let mut form = LoginForm {
        email: "demo@smartcurator.ai".to_string(),
        password: "demo1234!".to_string(),
    };

    let outcome = form.submit(&client(&backend));
    assert_eq!(outcome.token.as_deref(), Some("abc"));
    assert_eq!(outcome.status.kind, StatusKind::Success);
    assert_eq!(outcome.status.text, TOKEN_READY_MESSAGE);

    let req = backend.only_request();
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/auth/login");
    assert!(req.header("authorization").is_none());
    assert_eq!(
        req.json(),
        json!({"email": "demo@smartcurator.ai", "password": "demo1234!"})
    );
}

#[test]
fn rejected_login_shows_backend_detail() {
    let backend = MockBackend::fixed(401, r#"{"detail":"Invalid credentials"}"#);
    let mut form = LoginForm::default();

    let outcome = form.submit(&client(&backend));
    assert!(outcome.token.is_none());
    assert_eq!(outcome.status.kind, StatusKind::Failure);
    assert_eq!(outcome.status.text, "Invalid credentials");
}

#[test]
fn blank_credentials_skip_the_network() {
    let backend = MockBackend::fixed(200, r#"{"access_token":"abc","token_type":"bearer"}"#);
    let mut form = LoginForm {
        email: String::new(),
        password: "demo1234!".to_string(),
    };

    let outcome = form.submit(&client(&backend));
    assert!(outcome.token.is_none());
    assert!(!outcome.status.is_success());
    assert!(backend.requests().is_empty());
}

#[test]
fn quick_add_without_token_issues_no_request() {
    let backend = MockBackend::fixed(200, r#"{"id":1}"#);
    let mut form = QuickAddForm {
        title: "Interior mutability".to_string(),
        ..QuickAddForm::default()
    };

    let status = form.submit(&client(&backend), None);
    assert_eq!(status.kind, StatusKind::Failure);
    assert_eq!(status.text, LOGIN_REQUIRED_MESSAGE);
    assert!(backend.requests().is_empty());
    assert_eq!(form.title, "Interior mutability");
}

#[test]
fn quick_add_requires_title() {
    let backend = MockBackend::fixed(200, r#"{"id":1}"#);
    let mut form = QuickAddForm::default();

    let status = form.submit(&client(&backend), Some("abc"));
    assert_eq!(status.text, TITLE_REQUIRED_MESSAGE);
    assert!(backend.requests().is_empty());
}

#[test]
fn token_from_login_flows_into_quick_add() {
    let backend = MockBackend::start(|req| match req.path.as_str() {
        "/auth/login" => (200, r#"{"access_token":"session-1","token_type":"bearer"}"#.to_string()),
        "/contents/" => (200, r#"{"id":42,"status":"pending"}"#.to_string()),
        _ => (404, r#"{"detail":"Not Found"}"#.to_string()),
    });
    let api = client(&backend);

    let token = LoginForm::default().submit(&api).token;
    let mut form = QuickAddForm {
        title: "Async Rust".to_string(),
        content: "notes from the book".to_string(),
        content_type: ContentType::Text,
        is_public: false,
        ..QuickAddForm::default()
    };
    let status = form.submit(&api, token.as_deref());

    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.text, QUEUED_MESSAGE);
    assert_eq!(form, QuickAddForm::default(), "form resets after success");

    let requests = backend.requests();
    assert_eq!(requests.len(), 2);
    let add = &requests[1];
    assert_eq!(add.path, "/contents/");
    assert_eq!(add.header("authorization"), Some("Bearer session-1"));
    assert_eq!(
        add.json(),
        json!({
            "title": "Async Rust",
            "raw_content": "notes from the book",
            "content_type": "text",
            "is_public": false
        })
    );
}

#[test]
fn failed_quick_add_keeps_form_values() {
    let backend = MockBackend::fixed(401, r#"{"detail":"Could not validate credentials"}"#);
    let mut form = QuickAddForm {
        title: "Lifetimes".to_string(),
        url: "https://doc.rust-lang.org/nomicon/".to_string(),
        content_type: ContentType::Url,
        ..QuickAddForm::default()
    };
    let before = form.clone();

    let status = form.submit(&client(&backend), Some("expired"));
    assert_eq!(status.kind, StatusKind::Failure);
    assert_eq!(status.text, "Could not validate credentials");
    assert_eq!(form, before);
}

#[test]
fn register_sends_full_name_when_given() {
    let backend = MockBackend::fixed(200, r#"{"id":5}"#);
    let mut form = RegisterForm {
        email: "kim@smartcurator.ai".to_string(),
        password: "pw".to_string(),
        full_name: "Kim".to_string(),
    };

    let status = form.submit(&client(&backend));
    assert!(status.is_success());
    assert_eq!(backend.only_request().json()["full_name"], "Kim");
}
