//! # HTTP Transport
//!
//! The transport seam between the dispatcher and the network: an
//! object-safe async trait executing one HTTP exchange, plus the production
//! implementation over reqwest.
//!
//! The trait exists so the dispatcher's retry/decoding behavior is testable
//! against a scripted transport, and so embedders can substitute their own
//! HTTP stack. Timeouts live here, configured once at construction and
//! applied uniformly to every call; the connection pool is reqwest's.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::config::ClientConfig;

// =============================================================================
// Transport Contract
// =============================================================================

/// HTTP method. The platform's RPC surface only POSTs, but the transport
/// contract stays general.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// One outgoing HTTP exchange.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// (name, value) pairs, applied in order.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// The raw result of an exchange. Status is carried for logging; the
/// envelope body is what decides the call.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Transport-level failure: the exchange itself did not complete. These are
/// the only failures the dispatcher retries.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established or was reset mid-exchange.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The configured timeout elapsed.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// Any other failure below the envelope layer.
    #[error("transport error: {0}")]
    Other(String),
}

/// An HTTP request executor. Implementations must be safe for concurrent
/// use through a shared reference; the dispatcher holds one instance for
/// the client's lifetime.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

// =============================================================================
// Reqwest Transport
// =============================================================================

/// Production transport over a pooled reqwest client.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    request_timeout: Duration,
}

impl ReqwestTransport {
    /// Builds the underlying client with the configured connect/read
    /// timeouts.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| TransportError::Other(err.to_string()))?;

        Ok(ReqwestTransport {
            client,
            request_timeout: config.request_timeout,
        })
    }

    fn map_error(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.request_timeout)
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .body(request.body)
            .send()
            .await
            .map_err(|err| self.map_error(err))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| self.map_error(err))?
            .to_vec();

        Ok(HttpResponse { status, body })
    }
}
