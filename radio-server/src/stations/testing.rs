//! In-process mock upstream for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;

/// A stub station-list upstream served over a real socket.
///
/// Body and status can be swapped between requests, and every request is
/// counted so tests can assert how often the cache went to the network.
#[derive(Clone)]
pub(crate) struct MockUpstream {
    hits: Arc<AtomicUsize>,
    body: Arc<Mutex<String>>,
    status: Arc<Mutex<StatusCode>>,
}

impl MockUpstream {
    pub(crate) fn new(body: impl Into<String>) -> Self {
        Self {
            hits: Arc::new(AtomicUsize::new(0)),
            body: Arc::new(Mutex::new(body.into())),
            status: Arc::new(Mutex::new(StatusCode::OK)),
        }
    }

    /// Serve on an ephemeral local port, returning the URL to fetch.
    pub(crate) async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/", get(serve))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{addr}/")
    }

    /// How many requests have reached the upstream.
    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub(crate) fn set_body(&self, body: impl Into<String>) {
        *self.body.lock().unwrap() = body.into();
    }

    pub(crate) fn set_status(&self, status: StatusCode) {
        *self.status.lock().unwrap() = status;
    }
}

async fn serve(State(mock): State<MockUpstream>) -> (StatusCode, String) {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    let status = *mock.status.lock().unwrap();
    let body = mock.body.lock().unwrap().clone();
    (status, body)
}
