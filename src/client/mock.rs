//! In-process stand-in for the remote services, for tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::config::Config;

use super::ApiClient;

/// Canned answer for one path.
#[derive(Clone, Debug)]
pub enum MockReply {
    Json(Value),
    Status(u16),
    Bytes(Vec<u8>),
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, MockReply>>,
    requests: Arc<Mutex<Vec<String>>>,
}

async fn handle(State(state): State<MockState>, uri: Uri) -> Response {
    state.requests.lock().unwrap().push(uri.to_string());

    match state.replies.get(uri.path()) {
        Some(MockReply::Json(value)) => Json(value.clone()).into_response(),
        Some(MockReply::Status(code)) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Some(MockReply::Bytes(bytes)) => bytes.clone().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub struct MockApi {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl MockApi {
    /// Serve `replies` (path → reply) on an ephemeral local port.
    pub async fn start(replies: Vec<(&str, MockReply)>) -> Self {
        let state = MockState {
            replies: Arc::new(
                replies
                    .into_iter()
                    .map(|(path, reply)| (path.to_string(), reply))
                    .collect(),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();
        let app = Router::new().fallback(handle).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .ok();
        });

        Self {
            addr,
            requests,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// Base URL of the server.
    pub fn address(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client pointed at this server for both hosts.
    pub fn client(&self) -> ApiClient {
        let config = Config::default().with_overrides(Some(self.address()), Some(self.address()));
        ApiClient::new(&config).unwrap()
    }

    /// Path and query of every request received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            tx.send(()).ok();
        }
    }
}
