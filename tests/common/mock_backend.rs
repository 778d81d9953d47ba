//! Scriptable summarize backend for client-side tests.
//!
//! Captures every request it receives and answers from a queue of scripted
//! responses, so tests can assert both what was sent and how the client
//! reacts to what comes back.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

/// A request the mock received.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    /// Body parsed as JSON, `Null` when it is not JSON.
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

/// A scripted response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl MockResponse {
    /// Contract success: transport 200, body `{"status":200,"summary":…}`.
    pub fn summary(text: &str) -> Self {
        Self::json(200, serde_json::json!({"status": 200, "summary": text}))
    }

    /// Contract failure with the transport status mirroring the body.
    pub fn failure(status: u16, message: &str) -> Self {
        Self::json(status, serde_json::json!({"status": status, "error": message}))
    }

    /// Contract failure where transport and body status disagree; only the
    /// body status should matter to the client.
    pub fn failure_with_transport(transport: u16, body_status: u16, message: &str) -> Self {
        Self::json(
            transport,
            serde_json::json!({"status": body_status, "error": message}),
        )
    }

    /// Contract success carried on a failing transport status; only the
    /// body status should matter to the client.
    pub fn summary_with_transport(transport: u16, text: &str) -> Self {
        Self::json(transport, serde_json::json!({"status": 200, "summary": text}))
    }

    /// A body that is not JSON at all, like an error page from a proxy.
    pub fn html_error_page() -> Self {
        Self {
            status: 200,
            content_type: "text/html".to_string(),
            body: b"<!doctype html><h1>Bad Gateway</h1>".to_vec(),
        }
    }

    /// Valid JSON that is not a contract payload.
    pub fn off_contract_json() -> Self {
        Self::json(200, serde_json::json!({"unexpected": true}))
    }

    fn json(status: u16, value: serde_json::Value) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: serde_json::to_vec(&value).expect("serializable body"),
        }
    }
}

#[derive(Clone)]
struct MockState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// The running mock server.
pub struct MockBackend {
    addr: SocketAddr,
    state: MockState,
    shutdown_tx: watch::Sender<bool>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState {
            captured: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let router = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind mock backend");
        let addr = listener.local_addr().expect("mock backend local addr");

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await;
        });

        Self {
            addr,
            state,
            shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn enqueue_response(&self, response: MockResponse) {
        self.state.responses.lock().await.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().await.clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

async fn handle_request(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    state.captured.lock().await.push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type,
        body: body.to_vec(),
    });

    let scripted = state.responses.lock().await.pop_front();
    let response = scripted.unwrap_or_else(|| MockResponse::failure(500, "no scripted response"));

    Response::builder()
        .status(response.status)
        .header(CONTENT_TYPE, response.content_type)
        .body(Body::from(response.body))
        .expect("valid mock response")
}
