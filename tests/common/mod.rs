//! Mock SmartCurator backend for integration tests.
//!
//! Binds an axum app to a random local port on its own tokio runtime thread
//! and records every request it receives. Responses come from a closure so
//! each test scripts exactly the status and body it needs.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path plus query string.
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

type Responder = dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responder: Arc<Responder>,
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    /// Start a backend that answers every request via `responder`.
    pub fn start(responder: impl Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            requests: requests.clone(),
            responder: Arc::new(responder),
        };
        let app = Router::new().fallback(record).with_state(state);

        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                axum::serve(listener, app).await
            })
            .unwrap();
        });

        MockBackend {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    /// Start a backend that always answers `status` with `body`.
    pub fn fixed(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::start(move |_| (status, body.clone()))
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn only_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {requests:?}");
        requests.into_iter().next().unwrap()
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    let request = RecordedRequest {
        method,
        path,
        headers,
        body,
    };
    let (status, body) = (state.responder)(&request);
    state.requests.lock().unwrap().push(request);

    let status = StatusCode::from_u16(status).unwrap();
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}
