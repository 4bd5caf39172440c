//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, Request, Response, StatusCode};
use axum::Router;
use edge_router::{HttpServer, RouterConfig, Shutdown};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by a mock origin.
#[derive(Debug, Clone)]
pub struct Captured {
    pub method: Method,
    pub uri: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
struct OriginState {
    status: StatusCode,
    body: &'static str,
    headers: &'static [(&'static str, &'static str)],
    requests: Arc<Mutex<Vec<Captured>>>,
}

/// A running mock origin that records every request it receives.
pub struct MockOrigin {
    pub addr: SocketAddr,
    requests: Arc<Mutex<Vec<Captured>>>,
}

impl MockOrigin {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.requests.lock().unwrap().clone()
    }
}

async fn capture(State(state): State<OriginState>, request: Request<Body>) -> Response<Body> {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    state.requests.lock().unwrap().push(Captured {
        method: parts.method,
        uri: parts.uri.to_string(),
        headers: parts.headers,
        body,
    });

    let mut response = Response::builder()
        .status(state.status)
        .header("content-type", "text/plain");
    for (name, value) in state.headers {
        response = response.header(*name, *value);
    }
    response.body(Body::from(state.body)).unwrap()
}

/// Start a mock origin answering every request with `status` and `body`.
pub async fn start_origin(status: u16, body: &'static str) -> MockOrigin {
    start_origin_with(status, body, &[]).await
}

/// Start a mock origin that also sets the given response headers.
pub async fn start_origin_with(
    status: u16,
    body: &'static str,
    headers: &'static [(&'static str, &'static str)],
) -> MockOrigin {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = OriginState {
        status: StatusCode::from_u16(status).unwrap(),
        body,
        headers,
        requests: requests.clone(),
    };
    let app = Router::new().fallback(capture).with_state(state);

    let addr = serve(app).await;
    MockOrigin { addr, requests }
}

/// Serve an axum app on an ephemeral loopback port.
pub async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An origin URL nothing listens on.
pub async fn dead_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Config pointing at the given origins, everything else default.
pub fn config_for(frontend: &str, backend: &str) -> RouterConfig {
    let mut config = RouterConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.origins.frontend = frontend.into();
    config.origins.backend = backend.into();
    config
}

/// Start the router; returns its base URL and the shutdown handle.
pub async fn start_router(config: RouterConfig) -> (String, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (format!("http://{}", addr), shutdown)
}

/// A client that neither follows redirects nor uses a proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// Write `request` verbatim to the router and read until it closes.
///
/// Bypasses any HTTP client so no default headers are added. The request
/// should carry `connection: close`.
pub async fn send_raw(router: &str, request: &str) -> String {
    let addr = router.trim_start_matches("http://");
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

/// Build a header map from `(name, value)` pairs, keeping repeats.
pub fn header_map(pairs: &[(&'static str, &str)]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (name, value) in pairs {
        headers.append(*name, value.parse().unwrap());
    }
    headers
}
