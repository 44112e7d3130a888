//! # Order Aggregate
//!
//! The order tree as submitted to the platform.
//!
//! ## Shape
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Order                                                            │
//! │   ├── dispatch (pickup / delivery / takeout, with charge)         │
//! │   ├── payments [cash | cardToken | portalCredit]                  │
//! │   └── items: [OrderItem]                     ◄── roots            │
//! │         OrderItem "Coke" (count 2)                                │
//! │          └── choices[0] = slot for variation "Size"               │
//! │                └── selections: [OrderItem "Large" (+50)]          │
//! │                      └── choices: ...recursive...                 │
//! │                                                                   │
//! │  One choice slot per variation of the referenced item, in the     │
//! │  item's variation order. Slots carry the variation id; their      │
//! │  position in `choices` mirrors the variation's position in        │
//! │  `MenuItem::variations` (the wire format is positional).          │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invariant: `Order::price` equals the sum over root items of their
//! recursive price times count, plus the dispatch charge. The builders in
//! [`crate::builder`] are the only writers; mutating price fields directly
//! voids the invariant.
//!
//! Lifecycle: an Order is created fresh per submission attempt and discarded
//! after the RPC call returns. Server-assigned fields (`id`, `status`,
//! `owner_token`) are `None` until the platform echoes the order back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::{Address, Contact};

// =============================================================================
// Order Items
// =============================================================================

/// One order line: a selected menu item, its resolved price, and the
/// customer's choices for each of the item's variations.
///
/// This is a tree node - choices hold further `OrderItem`s recursively.
/// Owned exclusively by the `Order` that contains it; no sharing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// The referenced menu item.
    pub item_id: String,

    /// Price in effect, resolved at construction time: the item's base price
    /// at the root, or the enclosing variation's override (zero if none)
    /// when this item was reached as a choice.
    pub price: Money,

    /// How many of this line, >= 1. The builder rejects zero.
    pub count: u32,

    /// Free-text customer note ("extra cheese please").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// One slot per variation of the referenced item, in variation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<ChoiceSlot>,
}

/// The per-variation container holding the customer's selections for that
/// variation. Slot position is meaningful: slot `i` corresponds to the i-th
/// variation of the referenced menu item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceSlot {
    /// The variation this slot answers, for readers that do not want to
    /// re-derive it positionally.
    pub variation_id: String,

    /// Selected child order items, in selection order. May legitimately
    /// exceed the variation's declared maximum; the server decides.
    #[serde(default)]
    pub selections: Vec<OrderItem>,
}

// =============================================================================
// Dispatch
// =============================================================================

/// How a scheduled time is to be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeGuarantee {
    /// Deliver/ready before the stated time; with no time, "as soon as
    /// possible".
    #[default]
    Before,

    /// Around the stated time (future orders).
    Approximate,
}

/// The fulfillment method of an order. A closed variant set; every variant
/// carries its charge in minor units (zero for self-service methods unless
/// the restaurant says otherwise).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Dispatch {
    /// Customer picks the order up at the restaurant.
    #[serde(rename_all = "camelCase")]
    Pickup {
        #[serde(default)]
        charge: Money,

        #[serde(default)]
        time_guarantee: TimeGuarantee,

        /// Scheduled time (epoch millis on the wire); absent = asap.
        #[serde(
            default,
            with = "chrono::serde::ts_milliseconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        time: Option<DateTime<Utc>>,
    },

    /// Restaurant delivers to an address.
    #[serde(rename_all = "camelCase")]
    Delivery {
        #[serde(default)]
        charge: Money,

        #[serde(default)]
        time_guarantee: TimeGuarantee,

        #[serde(
            default,
            with = "chrono::serde::ts_milliseconds_option",
            skip_serializing_if = "Option::is_none"
        )]
        time: Option<DateTime<Utc>>,

        address: Address,
    },

    /// Order is packed to go, no delivery and no scheduled pickup window.
    #[serde(rename_all = "camelCase")]
    Takeout {
        #[serde(default)]
        charge: Money,
    },
}

impl Dispatch {
    /// The dispatch charge added to the order total.
    pub fn charge(&self) -> Money {
        match self {
            Dispatch::Pickup { charge, .. }
            | Dispatch::Delivery { charge, .. }
            | Dispatch::Takeout { charge } => *charge,
        }
    }
}

// =============================================================================
// Payments
// =============================================================================

/// A payment attached to an order. Payments never affect the order price;
/// the server validates sufficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Payment {
    /// Cash on pickup/delivery.
    Cash { amount: Money },

    /// Tokenized card payment.
    #[serde(rename_all = "camelCase")]
    CardToken {
        amount: Money,

        #[serde(skip_serializing_if = "Option::is_none")]
        token: Option<String>,
    },

    /// Settled off-system through an external ordering portal. The customer
    /// pays the portal; the order just records the portal's reference,
    /// keyed by payment-type tag.
    #[serde(rename_all = "camelCase")]
    PortalCredit {
        amount: Money,

        #[serde(default)]
        external_ids: BTreeMap<String, String>,
    },
}

impl Payment {
    /// The amount this payment covers, in minor units.
    pub fn amount(&self) -> Money {
        match self {
            Payment::Cash { amount }
            | Payment::CardToken { amount, .. }
            | Payment::PortalCredit { amount, .. } => *amount,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// Order lifecycle status, server-assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    Accepted,
    Canceled,

    /// A status this client version does not know. Kept decodable so new
    /// server statuses never fail deserialization.
    #[serde(other)]
    Unknown,
}

/// The order aggregate: line items, fulfillment, payments, and the running
/// total. Owns all `OrderItem`s transitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned on submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Integrating developer tag, e.g. "org.example".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    /// Ordering platform tag (see [`platforms`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Traffic source tag, e.g. a portal id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub restaurant_id: String,

    /// Customer locale, e.g. "en_US".
    #[serde(default)]
    pub locale: String,

    /// ISO 4217 code the prices are denominated in. Carried, not enforced:
    /// cross-currency mismatches are a server-side validation concern.
    #[serde(default)]
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch: Option<Dispatch>,

    /// Root order items, in the order the customer added them.
    #[serde(default)]
    pub items: Vec<OrderItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<Payment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Running total in minor units: Σ item totals + dispatch charge.
    #[serde(default)]
    pub price: Money,

    /// Server-assigned on submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    /// Server-assigned anonymous-owner credential, echoed back on
    /// submission and required to query the order as its owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_token: Option<String>,

    /// External system references (e.g. a POS order id), keyed by system
    /// tag. Populated by the restaurant when accepting.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub external_ids: BTreeMap<String, String>,
}

/// Well-known ordering platform tags.
pub mod platforms {
    pub const WEB: &str = "web";
    pub const MOBILE_WEB: &str = "mobileweb";
    pub const IOS: &str = "ios";
    pub const ANDROID: &str = "android";
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_is_type_tagged() {
        let dispatch = Dispatch::Takeout {
            charge: Money::from_minor(150),
        };
        let json = serde_json::to_value(&dispatch).unwrap();
        assert_eq!(json["type"], "takeout");
        assert_eq!(json["charge"], 150);
    }

    #[test]
    fn test_delivery_time_serializes_as_epoch_millis() {
        use chrono::TimeZone;

        let dispatch = Dispatch::Delivery {
            charge: Money::from_minor(700),
            time_guarantee: TimeGuarantee::Approximate,
            time: Some(Utc.timestamp_millis_opt(1_500_000_000_000).unwrap()),
            address: Address::default(),
        };
        let json = serde_json::to_value(&dispatch).unwrap();
        assert_eq!(json["time"], 1_500_000_000_000i64);
        assert_eq!(json["timeGuarantee"], "approximate");

        let back: Dispatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, dispatch);
    }

    #[test]
    fn test_payment_tags_and_amounts() {
        let mut external_ids = BTreeMap::new();
        external_ids.insert("portalCredit".to_string(), "ref-1".to_string());
        let payment = Payment::PortalCredit {
            amount: Money::from_minor(2500),
            external_ids,
        };

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["type"], "portalCredit");
        assert_eq!(json["externalIds"]["portalCredit"], "ref-1");
        assert_eq!(payment.amount(), Money::from_minor(2500));
    }

    #[test]
    fn test_unknown_status_is_decodable() {
        let status: OrderStatus = serde_json::from_str("\"superseded\"").unwrap();
        assert_eq!(status, OrderStatus::Unknown);

        let known: OrderStatus = serde_json::from_str("\"accepted\"").unwrap();
        assert_eq!(known, OrderStatus::Accepted);
    }

    #[test]
    fn test_order_item_tree_round_trips() {
        let item = OrderItem {
            item_id: "coke".to_string(),
            price: Money::from_minor(300),
            count: 2,
            comment: None,
            choices: vec![ChoiceSlot {
                variation_id: "size".to_string(),
                selections: vec![OrderItem {
                    item_id: "large".to_string(),
                    price: Money::from_minor(50),
                    count: 1,
                    comment: None,
                    choices: Vec::new(),
                }],
            }],
        };

        let json = serde_json::to_string(&item).unwrap();
        let back: OrderItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
