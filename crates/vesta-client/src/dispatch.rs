//! # RPC Dispatcher
//!
//! Turns a typed [`Request`] into an HTTP call and the response into the
//! caller's expected shape or a typed error.
//!
//! ## Call Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  dispatch(request)                                                │
//! │      │                                                            │
//! │      ▼ serialize (type-tagged JSON)                               │
//! │  ┌──────────────── attempt loop (retries + 1) ─────────────────┐  │
//! │  │  transport.execute(POST endpoint)                           │  │
//! │  │     │                        │                              │  │
//! │  │     │ transport error        │ response                     │  │
//! │  │     ▼                        ▼                              │  │
//! │  │  attempts left? ──yes──►   decode envelope                  │  │
//! │  │     │ no                     │            │                 │  │
//! │  └─────┼────────────────────────┼────────────┼─────────────────┘  │
//! │        ▼                        ▼            ▼                    │
//! │   Communication            Ok(data)   Service / Protocol         │
//! │                                        (NEVER retried)           │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Retries apply to transport failures only. A well-formed envelope -
//! success or error - is authoritative: retrying a non-idempotent submit
//! because the server said "invalid" could duplicate an order.
//!
//! The dispatcher is stateless across calls (no session, no cache) and
//! takes `&self` everywhere, so one configured instance is safe for
//! concurrent use; the connection pool inside the transport is the only
//! shared resource.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::envelope;
use crate::error::{ApiError, ApiResult};
use crate::requests::Request;
use crate::transport::{HttpRequest, HttpTransport, Method};

/// Dispatches typed requests over a shared transport.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn HttpTransport>,
    endpoint: Url,
    retries: u32,
}

impl Dispatcher {
    /// `retries` counts re-attempts after the first: every call makes at
    /// most `retries + 1` transport attempts.
    pub fn new(transport: Arc<dyn HttpTransport>, endpoint: Url, retries: u32) -> Self {
        Dispatcher {
            transport,
            endpoint,
            retries,
        }
    }

    /// Executes one RPC round trip, decoding the envelope into `T`.
    pub async fn dispatch<T: DeserializeOwned>(&self, request: &Request) -> ApiResult<T> {
        let body = serde_json::to_vec(request)
            .map_err(|err| ApiError::Protocol(format!("failed to encode request: {err}")))?;

        let request_type = request.type_tag();
        debug!(request_type, endpoint = %self.endpoint, "dispatching");

        let mut attempt = 0u32;
        loop {
            attempt += 1;
            let exchange = HttpRequest {
                method: Method::Post,
                url: self.endpoint.as_str().to_string(),
                headers: vec![("Content-Type".to_string(), "application/json".to_string())],
                body: body.clone(),
            };

            match self.transport.execute(exchange).await {
                Ok(response) => {
                    debug!(request_type, status = response.status, attempt, "response received");
                    // The envelope decides the call from here on; whatever
                    // it says is final.
                    return envelope::decode(&response.body);
                }
                Err(err) if attempt <= self.retries => {
                    warn!(
                        request_type,
                        attempt,
                        max_attempts = self.retries + 1,
                        error = %err,
                        "transport failure, retrying"
                    );
                }
                Err(err) => {
                    warn!(request_type, attempts = attempt, error = %err, "transport failed");
                    return Err(ApiError::Communication {
                        attempts: attempt,
                        source: err,
                    });
                }
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("endpoint", &self.endpoint.as_str())
            .field("retries", &self.retries)
            .finish_non_exhaustive()
    }
}
