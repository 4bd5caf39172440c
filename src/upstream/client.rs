//! Outbound forwarding to an origin.
//!
//! # Responsibilities
//! - Rebuild the inbound request against an origin base URL
//! - Pass method, headers and body through unchanged
//! - Hand the origin's status, headers and body back untouched
//!
//! # Design Decisions
//! - hyper's pooled client sends exactly the header map it is given;
//!   only `Host` is filled in, and only when it was dropped
//! - No retries and no redirect following; the origin's answer is final
//! - Response bodies are streamed, request bodies are buffered
//! - Timeouts are only applied when configured

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::http::{Request, Response};
use http_body_util::Full;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::config::{ForwardingConfig, TimeoutConfig};
use crate::upstream::error::ForwardError;
use crate::upstream::origin::Origin;

type OriginClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// Forwards requests to origins over a shared, pooled client.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: OriginClient,
    preserve_host: bool,
    request_timeout: Option<Duration>,
}

impl UpstreamClient {
    pub fn new(forwarding: &ForwardingConfig, timeouts: &TimeoutConfig) -> Result<Self, ForwardError> {
        let mut http = HttpConnector::new();
        http.enforce_http(false);
        http.set_connect_timeout(timeouts.connect_secs.map(Duration::from_secs));

        let https = HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(rustls::crypto::ring::default_provider())
            .map_err(ForwardError::Tls)?
            .https_or_http()
            .enable_http1()
            .wrap_connector(http);

        let client = Client::builder(TokioExecutor::new()).build(https);

        Ok(Self {
            client,
            preserve_host: forwarding.preserve_host,
            request_timeout: timeouts.request_secs.map(Duration::from_secs),
        })
    }

    /// Send the request described by `parts` and `body` to `origin`.
    ///
    /// Any status the origin answers with is a success here; only
    /// transport failures (including the request timeout, which covers
    /// everything up to the response head) are errors.
    pub async fn forward(
        &self,
        origin: &Origin,
        parts: &Parts,
        body: Bytes,
    ) -> Result<Response<Body>, ForwardError> {
        let path_and_query = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = origin.join(path_and_query);

        let mut request = Request::builder()
            .method(parts.method.clone())
            .uri(url.as_str())
            .body(Full::new(body))
            .map_err(ForwardError::Request)?;

        let headers = request.headers_mut();
        *headers = parts.headers.clone();
        if !self.preserve_host {
            headers.remove(HOST);
        }

        tracing::debug!(url = %url, method = %parts.method, "Sending upstream request");

        let transport = |source: Box<dyn std::error::Error + Send + Sync>| ForwardError::Transport {
            origin: origin.to_string(),
            source,
        };

        let pending = self.client.request(request);
        let upstream = match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .map_err(|elapsed| transport(elapsed.into()))?
                .map_err(|err| transport(err.into()))?,
            None => pending.await.map_err(|err| transport(err.into()))?,
        };

        Ok(upstream.map(Body::new))
    }
}
