//! # Typed Client
//!
//! The high-level API surface: one method per platform operation. Each
//! method populates the matching [`Request`], dispatches it, and unwraps
//! the operation's response shape.
//!
//! Construction happens once; the client (and its connection pool) is then
//! shared freely - every method takes `&self` and the dispatcher is
//! stateless across calls.

use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

use vesta_core::menu::RestaurantFullInfo;
use vesta_core::order::{Order, OrderStatus};
use vesta_core::reservation::{Reservation, ReservationStatus};

use crate::config::{ClientConfig, ConfigError};
use crate::dispatch::Dispatcher;
use crate::error::ApiResult;
use crate::requests::{
    Actor, Filter, OrderConfirmation, Ordering, OrdersResponse, Request, SearchResponse,
    SearchResult,
};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Client for the Vesta Orders platform.
///
/// ## Example
/// ```rust,no_run
/// use vesta_client::client::VestaClient;
/// use vesta_client::config::ClientConfig;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = VestaClient::new(ClientConfig::default())?;
/// let info = client.retrieve_restaurant_info("the-testaurant").await?;
/// println!("menu has {} items", info.menu.items.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VestaClient {
    dispatcher: Dispatcher,
}

impl VestaClient {
    /// Builds a client over the production reqwest transport.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let endpoint = config.endpoint()?;
        let transport =
            ReqwestTransport::new(&config).map_err(|err| ConfigError::Transport(err.to_string()))?;
        Ok(Self::with_transport(Arc::new(transport), endpoint, config.retries))
    }

    /// Builds a client over a caller-supplied transport. This is how tests
    /// inject a scripted transport and how embedders reuse their own HTTP
    /// stack.
    pub fn with_transport(
        transport: Arc<dyn HttpTransport>,
        endpoint: Url,
        retries: u32,
    ) -> Self {
        VestaClient {
            dispatcher: Dispatcher::new(transport, endpoint, retries),
        }
    }

    // =========================================================================
    // Restaurant Info
    // =========================================================================

    /// Retrieves a restaurant record together with its menu snapshot.
    pub async fn retrieve_restaurant_info(
        &self,
        restaurant_id: impl Into<String>,
    ) -> ApiResult<RestaurantFullInfo> {
        self.dispatcher
            .dispatch(&Request::GetOrganizationFull {
                organization_id: restaurant_id.into(),
            })
            .await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Submits a locally built order. The server re-prices and may reject;
    /// the confirmed order comes back with `id`, `status`, and
    /// `owner_token` assigned.
    pub async fn submit_order(
        &self,
        access_token: Option<&str>,
        order: Order,
    ) -> ApiResult<Order> {
        let confirmation: OrderConfirmation = self
            .dispatcher
            .dispatch(&Request::SubmitOrder {
                access_token: access_token.map(str::to_string),
                order,
            })
            .await?;
        Ok(confirmation.order)
    }

    /// Retrieves an order as its anonymous owner, using the owner token
    /// returned at submission.
    pub async fn retrieve_order_as_owner(
        &self,
        order_id: impl Into<String>,
        owner_token: impl Into<String>,
    ) -> ApiResult<Order> {
        self.dispatcher
            .dispatch(&Request::GetOrder {
                access_token: None,
                owner_token: Some(owner_token.into()),
                order_id: order_id.into(),
                view_mode: Actor::Customer,
            })
            .await
    }

    /// Retrieves an order as restaurant staff.
    pub async fn retrieve_order_as_restaurant(
        &self,
        access_token: impl Into<String>,
        order_id: impl Into<String>,
    ) -> ApiResult<Order> {
        self.dispatcher
            .dispatch(&Request::GetOrder {
                access_token: Some(access_token.into()),
                owner_token: None,
                order_id: order_id.into(),
                view_mode: Actor::Restaurant,
            })
            .await
    }

    /// Retrieves a restaurant's not-yet-handled orders, oldest first.
    pub async fn retrieve_new_orders(
        &self,
        access_token: impl Into<String>,
        restaurant_id: impl Into<String>,
    ) -> ApiResult<Vec<Order>> {
        let response: OrdersResponse = self
            .dispatcher
            .dispatch(&Request::GetOrders {
                access_token: access_token.into(),
                restaurant_ids: vec![restaurant_id.into()],
                view_mode: Actor::Restaurant,
                status: Some(OrderStatus::New),
                ordering: Some(Ordering::Asc),
                limit: None,
                modified_since: None,
            })
            .await?;
        Ok(response.orders)
    }

    /// Marks an order accepted, attaching external system references (e.g.
    /// the POS order id) for later cross-referencing. Pass an empty map if
    /// there is none.
    pub async fn accept_order(
        &self,
        access_token: impl Into<String>,
        order_id: impl Into<String>,
        external_ids: BTreeMap<String, String>,
    ) -> ApiResult<Order> {
        self.dispatcher
            .dispatch(&Request::SetOrderStatus {
                access_token: access_token.into(),
                order_id: order_id.into(),
                status: OrderStatus::Accepted,
                external_ids,
                comment: None,
            })
            .await
    }

    /// Rejects (cancels) an order with an optional reason shown to the
    /// customer.
    pub async fn reject_order(
        &self,
        access_token: impl Into<String>,
        order_id: impl Into<String>,
        comment: Option<&str>,
    ) -> ApiResult<Order> {
        self.dispatcher
            .dispatch(&Request::SetOrderStatus {
                access_token: access_token.into(),
                order_id: order_id.into(),
                status: OrderStatus::Canceled,
                external_ids: BTreeMap::new(),
                comment: comment.map(str::to_string),
            })
            .await
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Finds restaurants matching a geographic filter.
    pub async fn search(&self, filter: Filter, limit: u32) -> ApiResult<Vec<SearchResult>> {
        let response: SearchResponse = self
            .dispatcher
            .dispatch(&Request::Search { filter, limit })
            .await?;
        Ok(response.results)
    }

    // =========================================================================
    // Reservations
    // =========================================================================

    /// Submits a table reservation. Like orders, the confirmed reservation
    /// returns with server-assigned `id`, `status`, and `owner_token`.
    pub async fn submit_reservation(
        &self,
        access_token: Option<&str>,
        reservation: Reservation,
    ) -> ApiResult<Reservation> {
        self.dispatcher
            .dispatch(&Request::SubmitReservation {
                access_token: access_token.map(str::to_string),
                reservation,
            })
            .await
    }

    /// Retrieves a reservation as its anonymous owner.
    pub async fn retrieve_reservation_as_owner(
        &self,
        reservation_id: impl Into<String>,
        owner_token: impl Into<String>,
    ) -> ApiResult<Reservation> {
        self.dispatcher
            .dispatch(&Request::GetReservation {
                access_token: None,
                owner_token: Some(owner_token.into()),
                reservation_id: reservation_id.into(),
                view_mode: Actor::Customer,
            })
            .await
    }

    /// Retrieves a reservation as restaurant staff.
    pub async fn retrieve_reservation_as_restaurant(
        &self,
        access_token: impl Into<String>,
        reservation_id: impl Into<String>,
    ) -> ApiResult<Reservation> {
        self.dispatcher
            .dispatch(&Request::GetReservation {
                access_token: Some(access_token.into()),
                owner_token: None,
                reservation_id: reservation_id.into(),
                view_mode: Actor::Restaurant,
            })
            .await
    }

    /// Updates a reservation's status as restaurant staff.
    pub async fn set_reservation_status_as_restaurant(
        &self,
        access_token: impl Into<String>,
        reservation_id: impl Into<String>,
        status: ReservationStatus,
        comment: Option<&str>,
    ) -> ApiResult<Reservation> {
        self.dispatcher
            .dispatch(&Request::SetReservationStatus {
                access_token: Some(access_token.into()),
                owner_token: None,
                reservation_id: reservation_id.into(),
                status,
                comment: comment.map(str::to_string),
            })
            .await
    }

    /// Updates a reservation's status as its anonymous owner (e.g. the
    /// customer canceling their own booking).
    pub async fn set_reservation_status_as_owner(
        &self,
        owner_token: impl Into<String>,
        reservation_id: impl Into<String>,
        status: ReservationStatus,
        comment: Option<&str>,
    ) -> ApiResult<Reservation> {
        self.dispatcher
            .dispatch(&Request::SetReservationStatus {
                access_token: None,
                owner_token: Some(owner_token.into()),
                reservation_id: reservation_id.into(),
                status,
                comment: comment.map(str::to_string),
            })
            .await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_api_url_fails_construction() {
        let config = ClientConfig::default().with_api_url("::not a url::");
        assert!(matches!(
            VestaClient::new(config),
            Err(ConfigError::InvalidApiUrl { .. })
        ));
    }
}
