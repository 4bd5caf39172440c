//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all forwarding handler
//! - Wire up middleware (request span with ID)
//! - Bind server to listener
//! - Classify requests and forward them to the matching origin
//! - Observability (metrics, structured logs)

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{Request, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{FailurePolicy, RouterConfig};
use crate::http::request::{read_body, RequestSpan};
use crate::http::response::{backend_response, frontend_response, FailureBody, Outcome};
use crate::observability::metrics;
use crate::routing::{Destination, Router as PathRouter};
use crate::upstream::{ForwardError, Origin, UpstreamClient};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<PathRouter>,
    pub upstream: UpstreamClient,
    pub frontend: Arc<Origin>,
    pub backend: Arc<Origin>,
    pub failure_policy: FailurePolicy,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn from_config(config: &RouterConfig) -> Result<Self, ForwardError> {
        Ok(Self {
            router: Arc::new(PathRouter::from_config(&config.routing)),
            upstream: UpstreamClient::new(&config.forwarding, &config.timeouts)?,
            frontend: Arc::new(Origin::parse(&config.origins.frontend)?),
            backend: Arc::new(Origin::parse(&config.origins.backend)?),
            failure_policy: config.failures.policy,
            max_body_bytes: config.forwarding.max_body_bytes,
        })
    }

    fn origin(&self, destination: Destination) -> &Origin {
        match destination {
            Destination::Backend => &self.backend,
            Destination::Frontend => &self.frontend,
        }
    }
}

/// HTTP server for the edge router.
pub struct HttpServer {
    router: Router,
    config: RouterConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RouterConfig) -> Result<Self, ForwardError> {
        let state = AppState::from_config(&config)?;
        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(proxy_handler))
            .route("/", any(proxy_handler))
            .with_state(state)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http().make_span_with(RequestSpan)))
    }

    /// The assembled application, for driving in-process.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            frontend = %self.config.origins.frontend,
            backend = %self.config.origins.backend,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }
}

/// Main proxy handler.
/// Classifies the path, forwards to the matching origin, and applies the
/// failure policy on the way back.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response<Body> {
    let start_time = Instant::now();
    let path = request.uri().path().to_string();
    let destination = state.router.classify(&path);
    let origin = state.origin(destination);

    match destination {
        Destination::Backend => tracing::info!(path = %path, "Backend request"),
        Destination::Frontend => tracing::info!(path = %path, "Frontend request"),
    }

    let (parts, body) = request.into_parts();
    let body = match read_body(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(path = %path, error = %err, "Rejecting request");
            let response = FailureBody::rejected(origin, &path, err.detail())
                .into_response_with(err.status_code());
            metrics::record_request(destination, Outcome::Rejected, response.status().as_u16(), start_time);
            return response;
        }
    };

    let result = state.upstream.forward(origin, &parts, body).await;

    let (response, outcome) = match destination {
        Destination::Backend => backend_response(result, origin),
        Destination::Frontend => frontend_response(result, origin, &path, state.failure_policy),
    };

    tracing::debug!(
        destination = %destination,
        outcome = outcome.as_str(),
        status = response.status().as_u16(),
        "Request complete"
    );
    metrics::record_request(destination, outcome, response.status().as_u16(), start_time);

    response
}
