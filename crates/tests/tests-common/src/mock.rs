//! An in-process HTTP backend that serves canned responses and records what it receives.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;

/// A request as the backend received it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Header names are lowercase.
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl MockResponse {
    /// A 200 response with a JSON body.
    pub fn json(body: &serde_json::Value) -> Self {
        MockResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    /// A response with the given status and a plain body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse {
            status,
            headers: vec![],
            body: body.to_string(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

#[derive(Debug)]
struct Route {
    method: String,
    path: String,
    response: MockResponse,
}

#[derive(Debug, Default)]
struct MockState {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// A running mock backend. The server stops when this is dropped.
pub struct MockBackend {
    base_url: String,
    state: Arc<MockState>,
    server: tokio::task::JoinHandle<()>,
}

impl MockBackend {
    /// Start a backend on a free local port.
    pub async fn start() -> anyhow::Result<Self> {
        let state = Arc::new(MockState::default());

        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let address = listener.local_addr()?;

        let router = Router::<Arc<MockState>>::new()
            .fallback(handle)
            .with_state(state.clone());
        let server = axum::Server::from_tcp(listener)?.serve(router.into_make_service());

        let server = tokio::spawn(async move {
            if let Err(err) = server.await {
                tracing::error!("mock backend stopped: {err}");
            }
        });

        Ok(MockBackend {
            base_url: format!("http://{address}"),
            state,
            server,
        })
    }

    /// The root URL of the backend, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Serve `response` for requests with this method and path. Later routes for the
    /// same method and path take precedence.
    pub fn on(&self, method: &str, path: &str, response: MockResponse) {
        self.state.routes.lock().unwrap().push(Route {
            method: method.to_ascii_uppercase(),
            path: path.to_string(),
            response,
        });
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle(State(state): State<Arc<MockState>>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let body = hyper::body::to_bytes(body)
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();

    let recorded = RecordedRequest {
        method: parts.method.to_string(),
        path: parts.uri.path().to_string(),
        query: parts.uri.query().map(str::to_string),
        headers: parts
            .headers
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body,
    };

    let response = state
        .routes
        .lock()
        .unwrap()
        .iter()
        .rev()
        .find(|route| route.method == recorded.method && route.path == recorded.path)
        .map(|route| route.response.clone());

    state.requests.lock().unwrap().push(recorded);

    match response {
        None => (StatusCode::NOT_FOUND, "no route").into_response(),
        Some(response) => {
            let mut headers = HeaderMap::new();
            for (name, value) in &response.headers {
                headers.insert(
                    HeaderName::from_str(name).unwrap(),
                    HeaderValue::from_str(value).unwrap(),
                );
            }
            (
                StatusCode::from_u16(response.status).unwrap(),
                headers,
                response.body,
            )
                .into_response()
        }
    }
}
