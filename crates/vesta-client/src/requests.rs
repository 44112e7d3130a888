//! # Request and Response Shapes
//!
//! The platform exposes one RPC endpoint: every operation POSTs a
//! `type`-tagged request object and receives the generic envelope back.
//! This module is the complete catalogue of request shapes plus the
//! operation-specific response payloads.
//!
//! Credentials: each request carries at most one of `access_token`
//! (restaurant-staff calls) or `owner_token` (the anonymous owner of a
//! submitted order/reservation).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vesta_core::order::{Order, OrderStatus};
use vesta_core::reservation::{Reservation, ReservationStatus};
use vesta_core::types::{Address, Contact, LatLng, LocalizedString};

// =============================================================================
// Common Request Fragments
// =============================================================================

/// Whose view of an order/reservation is requested. Restaurants see
/// operational fields the anonymous owner does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    Customer,
    Restaurant,
}

/// Sort direction for order queries, by modification date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ordering {
    Asc,
    Desc,
}

/// Geographic search filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat_lng: Option<LatLng>,

    /// Search radius in meters around `lat_lng`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

// =============================================================================
// Requests
// =============================================================================

/// Every RPC request the client can dispatch, tagged on the wire by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Restaurant record + menu snapshot.
    #[serde(rename_all = "camelCase")]
    GetOrganizationFull { organization_id: String },

    /// Submit a locally built and priced order. The server re-prices and
    /// may reject.
    #[serde(rename_all = "camelCase")]
    SubmitOrder {
        #[serde(skip_serializing_if = "Option::is_none")]
        access_token: Option<String>,

        order: Order,
    },

    /// Fetch one order.
    #[serde(rename_all = "camelCase")]
    GetOrder {
        #[serde(skip_serializing_if = "Option::is_none")]
        access_token: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        owner_token: Option<String>,

        order_id: String,

        view_mode: Actor,
    },

    /// Query a restaurant's orders.
    #[serde(rename_all = "camelCase")]
    GetOrders {
        access_token: String,

        restaurant_ids: Vec<String>,

        view_mode: Actor,

        #[serde(skip_serializing_if = "Option::is_none")]
        status: Option<OrderStatus>,

        #[serde(skip_serializing_if = "Option::is_none")]
        ordering: Option<Ordering>,

        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<u32>,

        /// Minimum modification date; pages forward when combined with
        /// `ordering: Asc` and `limit`.
        #[serde(
            default,
            with = "chrono::serde::ts_milliseconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        modified_since: Option<DateTime<Utc>>,
    },

    /// Accept/reject/cancel an order.
    #[serde(rename_all = "camelCase")]
    SetOrderStatus {
        access_token: String,

        order_id: String,

        status: OrderStatus,

        /// External system references to attach (e.g. POS order id).
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        external_ids: BTreeMap<String, String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },

    /// Find restaurants near a location.
    Search {
        filter: Filter,

        limit: u32,
    },

    /// Submit a table reservation.
    #[serde(rename_all = "camelCase")]
    SubmitReservation {
        #[serde(skip_serializing_if = "Option::is_none")]
        access_token: Option<String>,

        reservation: Reservation,
    },

    /// Fetch one reservation.
    #[serde(rename_all = "camelCase")]
    GetReservation {
        #[serde(skip_serializing_if = "Option::is_none")]
        access_token: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        owner_token: Option<String>,

        reservation_id: String,

        view_mode: Actor,
    },

    /// Update a reservation's status (accept, cancel).
    #[serde(rename_all = "camelCase")]
    SetReservationStatus {
        #[serde(skip_serializing_if = "Option::is_none")]
        access_token: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        owner_token: Option<String>,

        reservation_id: String,

        status: ReservationStatus,

        #[serde(skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
    },
}

impl Request {
    /// The wire tag, for logging.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Request::GetOrganizationFull { .. } => "get_organization_full",
            Request::SubmitOrder { .. } => "submit_order",
            Request::GetOrder { .. } => "get_order",
            Request::GetOrders { .. } => "get_orders",
            Request::SetOrderStatus { .. } => "set_order_status",
            Request::Search { .. } => "search",
            Request::SubmitReservation { .. } => "submit_reservation",
            Request::GetReservation { .. } => "get_reservation",
            Request::SetReservationStatus { .. } => "set_reservation_status",
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Envelope data for `submit_order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order: Order,
}

/// Envelope data for `get_orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// One hit from `search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,

    #[serde(default)]
    pub title: LocalizedString,

    #[serde(default)]
    pub address: Address,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(default)]
    pub locale: String,

    #[serde(default)]
    pub timezone: String,

    #[serde(default)]
    pub currency: String,
}

/// Envelope data for `search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

// =============================================================================
// Unit Tests
// =============================================================================
