//! # vesta-client: HTTP RPC Client for the Vesta Orders Platform
//!
//! Dispatches typed requests to the platform's single RPC endpoint, decodes
//! the generic success/error envelope, and surfaces failures as one typed,
//! inspectable error value.
//!
//! ## Layering
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  VestaClient      one method per operation (orders, search,      │
//! │   (client.rs)     reservations); populates Request values        │
//! │        │                                                          │
//! │        ▼                                                          │
//! │  Dispatcher       serialize → POST → bounded retry on transport  │
//! │   (dispatch.rs)   failure only → decode envelope                  │
//! │        │                                                          │
//! │        ▼                                                          │
//! │  HttpTransport    reqwest with connect/read timeouts; trait      │
//! │   (transport.rs)  seam for scripted transports in tests          │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Domain types (orders, menus, money, builders) live in [`vesta_core`];
//! this crate only adds the wire and error layers.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod codes;
pub mod config;
pub mod dispatch;
pub mod envelope;
pub mod error;
pub mod requests;
pub mod transport;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use client::VestaClient;
pub use config::{ClientConfig, ConfigError};
pub use dispatch::Dispatcher;
pub use envelope::{Envelope, ErrorBody};
pub use error::{ApiError, ApiResult, ErrorKind};
pub use requests::{Actor, Filter, OrderConfirmation, Ordering, Request, SearchResult};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
