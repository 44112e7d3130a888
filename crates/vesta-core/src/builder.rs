//! # Order Construction Builders
//!
//! Staged builders that assemble order-item trees, orders, and reservations.
//!
//! ## Construction Flow
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  MenuIndex ──get──► MenuItem                                      │
//! │                        │                                          │
//! │                        ▼                                          │
//! │  OrderItemBuilder::new(item)          (root: base price)          │
//! │  OrderItemBuilder::as_choice(item, variation)                     │
//! │                        │              (choice: override or free)  │
//! │                        │ .count(n) .comment(..) .choice(i, ..)    │
//! │                        ▼                                          │
//! │                    OrderItem ──► OrderBuilder ──► Order           │
//! │                                   .dispatch(..)  adds charge      │
//! │                                   .item(..)      adds item total  │
//! │                                   .payment(..)   price-neutral    │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every builder consumes and returns itself by value; the aggregate is
//! only observable through `build()`, so a half-built order can never
//! escape. Fallible steps return `CoreResult<Self>` and compose with `?`.
//!
//! There is deliberately no removal operation anywhere: a changed selection
//! means building a fresh order from the same menu snapshot.

use crate::error::{CoreError, CoreResult};
use crate::menu::{MenuItem, Variation};
use crate::money::Money;
use crate::order::{ChoiceSlot, Dispatch, Order, OrderItem, Payment};
use crate::pricing::item_total;
use crate::reservation::{Reservation, ReservationStatus};
use crate::types::Contact;
use crate::validation::{validate_count, validate_party_size};
use chrono::{DateTime, Utc};

// =============================================================================
// Order Item Builder
// =============================================================================

/// Builds one [`OrderItem`] from a menu item, pre-allocating a choice slot
/// per variation.
///
/// ## Price Resolution
/// - [`new`](Self::new): the item's own base price (root of an order line).
/// - [`as_choice`](Self::as_choice): the enclosing variation's override for
///   this item id if present, otherwise **zero** - an item listed as a
///   choice without an explicit override price is free as a choice.
///
/// ## Example
/// ```rust
/// use vesta_core::builder::OrderItemBuilder;
/// use vesta_core::menu::{MenuItem, Variation};
/// use vesta_core::money::Money;
///
/// let small = MenuItem { id: "small".into(), price: Money::from_minor(250), ..Default::default() };
/// let size = Variation { id: "size".into(), item_ids: vec!["small".into()], ..Default::default() };
/// let coke = MenuItem {
///     id: "coke".into(),
///     price: Money::from_minor(300),
///     variations: vec![size.clone()],
///     ..Default::default()
/// };
///
/// let order_item = OrderItemBuilder::new(&coke)
///     .choice(0, OrderItemBuilder::as_choice(&small, &size).build())?
///     .build();
/// // "small" has no override under "size": free as a choice.
/// assert_eq!(order_item.choices[0].selections[0].price, Money::zero());
/// # Ok::<(), vesta_core::error::CoreError>(())
/// ```
#[derive(Debug)]
pub struct OrderItemBuilder {
    item: OrderItem,
}

impl OrderItemBuilder {
    /// Starts an order line for `menu_item` at its base price.
    pub fn new(menu_item: &MenuItem) -> Self {
        Self::with_price(menu_item, menu_item.price)
    }

    /// Starts an order line for `menu_item` selected as a choice through
    /// `context`: priced at the context's override, or zero if none.
    pub fn as_choice(menu_item: &MenuItem, context: &Variation) -> Self {
        Self::with_price(menu_item, context.choice_price(&menu_item.id))
    }

    fn with_price(menu_item: &MenuItem, price: Money) -> Self {
        // One empty slot per variation, in the item's variation order. Slot
        // position i corresponds to variations[i]; the slot also records the
        // variation id so consumers need not re-derive the correspondence.
        let choices = menu_item
            .variations
            .iter()
            .map(|variation| ChoiceSlot {
                variation_id: variation.id.clone(),
                selections: Vec::new(),
            })
            .collect();

        OrderItemBuilder {
            item: OrderItem {
                item_id: menu_item.id.clone(),
                price,
                count: 1,
                comment: None,
                choices,
            },
        }
    }

    /// Sets the line count. Must be >= 1; zero is rejected, not clamped.
    pub fn count(mut self, count: u32) -> CoreResult<Self> {
        self.item.count = validate_count(count)?;
        Ok(self)
    }

    /// Attaches a free-text customer note.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.item.comment = Some(comment.into());
        self
    }

    /// Appends a selection to the choice slot at `index` (0-based, matching
    /// the menu item's variation order).
    ///
    /// No upper bound is enforced even if the variation declares a maximum -
    /// the client records customer intent as-is and the server is
    /// authoritative. An out-of-range index is a typed error.
    pub fn choice(mut self, index: usize, selection: OrderItem) -> CoreResult<Self> {
        let slots = self.item.choices.len();
        let slot = self
            .item
            .choices
            .get_mut(index)
            .ok_or_else(|| CoreError::NoSuchChoiceSlot {
                item_id: self.item.item_id.clone(),
                index,
                slots,
            })?;
        slot.selections.push(selection);
        Ok(self)
    }

    /// Finishes construction, yielding the immutable order item.
    pub fn build(self) -> OrderItem {
        self.item
    }
}

// =============================================================================
// Order Builder
// =============================================================================

/// Accumulates line items, dispatch, and payments into a priced [`Order`].
///
/// The builder is the single writer of `Order::price`:
/// - [`dispatch`](Self::dispatch) adds the dispatch charge,
/// - [`item`](Self::item) adds the item's recursive, count-scaled total
///   (computed by [`crate::pricing::item_total`]) exactly once,
/// - [`payment`](Self::payment) appends without touching the price.
///
/// Nothing ever subtracts. A caller that needs to change a selection builds
/// a fresh order.
#[derive(Debug, Default)]
pub struct OrderBuilder {
    order: Order,
}

impl OrderBuilder {
    pub fn new() -> Self {
        OrderBuilder {
            order: Order {
                price: Money::zero(),
                ..Default::default()
            },
        }
    }

    /// Integrating developer tag, e.g. "org.example".
    pub fn developer(mut self, developer: impl Into<String>) -> Self {
        self.order.developer = Some(developer.into());
        self
    }

    /// Ordering platform tag (see [`crate::order::platforms`]).
    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.order.platform = Some(platform.into());
        self
    }

    /// Traffic source tag, e.g. a portal id.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.order.source = Some(source.into());
        self
    }

    pub fn restaurant(mut self, restaurant_id: impl Into<String>) -> Self {
        self.order.restaurant_id = restaurant_id.into();
        self
    }

    /// Customer locale, e.g. "en_US".
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.order.locale = locale.into();
        self
    }

    /// ISO 4217 currency code. Carried verbatim; not checked against item
    /// prices (a server-side concern).
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.order.currency = currency.into();
        self
    }

    pub fn contact(mut self, contact: Contact) -> Self {
        self.order.contact = Some(contact);
        self
    }

    /// Sets the fulfillment method and adds its charge to the total.
    pub fn dispatch(mut self, dispatch: Dispatch) -> Self {
        self.order.price += dispatch.charge();
        self.order.dispatch = Some(dispatch);
        self
    }

    /// Appends a line item and adds its (already count-scaled) total.
    pub fn item(mut self, item: OrderItem) -> Self {
        self.order.price += item_total(&item);
        self.order.items.push(item);
        self
    }

    /// Appends a payment. Payments never affect the order price; the server
    /// validates sufficiency.
    pub fn payment(mut self, payment: Payment) -> Self {
        self.order.payments.push(payment);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.order.comment = Some(comment.into());
        self
    }

    /// Finishes construction, yielding the immutable priced order.
    pub fn build(self) -> Order {
        self.order
    }
}

// =============================================================================
// Reservation Builder
// =============================================================================

/// Builds a [`Reservation`] in the same staged style. Status defaults to
/// [`ReservationStatus::New`].
#[derive(Debug)]
pub struct ReservationBuilder {
    reservation: Reservation,
}

impl Default for ReservationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationBuilder {
    pub fn new() -> Self {
        ReservationBuilder {
            reservation: Reservation {
                status: Some(ReservationStatus::New),
                ..Default::default()
            },
        }
    }

    pub fn developer(mut self, developer: impl Into<String>) -> Self {
        self.reservation.developer = Some(developer.into());
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.reservation.platform = Some(platform.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.reservation.source = Some(source.into());
        self
    }

    pub fn restaurant(mut self, restaurant_id: impl Into<String>) -> Self {
        self.reservation.restaurant_id = restaurant_id.into();
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.reservation.locale = locale.into();
        self
    }

    pub fn contact(mut self, contact: Contact) -> Self {
        self.reservation.contact = Some(contact);
        self
    }

    /// Seats requested. Must be 1..=100.
    pub fn party_size(mut self, party_size: u32) -> CoreResult<Self> {
        self.reservation.party_size = validate_party_size(party_size)?;
        Ok(self)
    }

    /// The reserved time.
    pub fn time(mut self, time: DateTime<Utc>) -> Self {
        self.reservation.time = Some(time);
        self
    }

    /// How long the table is held past the reserved time.
    pub fn held_until(mut self, held_until: DateTime<Utc>) -> Self {
        self.reservation.held_until = Some(held_until);
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.reservation.comment = Some(comment.into());
        self
    }

    pub fn build(self) -> Reservation {
        self.reservation
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::order::TimeGuarantee;
    use crate::types::Address;
    use std::collections::BTreeMap;

    fn item(id: &str, price: i64, variations: Vec<Variation>) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            price: Money::from_minor(price),
            variations,
            ..Default::default()
        }
    }

    fn size_variation(overrides: &[(&str, i64)]) -> Variation {
        let mut prices = BTreeMap::new();
        for (id, price) in overrides {
            prices.insert(id.to_string(), Money::from_minor(*price));
        }
        Variation {
            id: "size".to_string(),
            item_ids: vec!["small".to_string(), "large".to_string()],
            prices,
            min_num_allowed: 1,
            max_num_allowed: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_root_item_uses_base_price() {
        let coke = item("coke", 300, Vec::new());
        let built = OrderItemBuilder::new(&coke).build();

        assert_eq!(built.price, Money::from_minor(300));
        assert_eq!(built.count, 1);
        assert!(built.choices.is_empty());
    }

    #[test]
    fn test_choice_without_override_is_free() {
        // Base price 3.00, but chosen through a context with no override:
        // contributes 0, not 300.
        let small = item("small", 300, Vec::new());
        let context = size_variation(&[("large", 50)]);

        let built = OrderItemBuilder::as_choice(&small, &context).build();
        assert_eq!(built.price, Money::zero());
    }

    #[test]
    fn test_choice_with_override_uses_it() {
        let large = item("large", 300, Vec::new());
        let context = size_variation(&[("large", 50)]);

        let built = OrderItemBuilder::as_choice(&large, &context).build();
        assert_eq!(built.price, Money::from_minor(50));
    }

    #[test]
    fn test_slots_preallocated_in_variation_order() {
        let coke = item(
            "coke",
            300,
            vec![size_variation(&[]), Variation {
                id: "ice".to_string(),
                ..Default::default()
            }],
        );
        let built = OrderItemBuilder::new(&coke).build();

        assert_eq!(built.choices.len(), 2);
        assert_eq!(built.choices[0].variation_id, "size");
        assert_eq!(built.choices[1].variation_id, "ice");
        assert!(built.choices.iter().all(|slot| slot.selections.is_empty()));
    }

    #[test]
    fn test_zero_count_rejected_not_clamped() {
        let coke = item("coke", 300, Vec::new());
        let err = OrderItemBuilder::new(&coke).count(0).unwrap_err();

        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { field: "count" })
        ));
    }

    #[test]
    fn test_choice_slot_index_out_of_range() {
        let small = item("small", 0, Vec::new());
        let context = size_variation(&[]);
        let coke = item("coke", 300, vec![context.clone()]);

        let err = OrderItemBuilder::new(&coke)
            .choice(1, OrderItemBuilder::as_choice(&small, &context).build())
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::NoSuchChoiceSlot { index: 1, slots: 1, .. }
        ));
    }

    #[test]
    fn test_choices_exceeding_max_are_recorded() {
        // max_num_allowed is 1, but the client records intent as-is.
        let small = item("small", 0, Vec::new());
        let context = size_variation(&[]);
        let coke = item("coke", 300, vec![context.clone()]);

        let built = OrderItemBuilder::new(&coke)
            .choice(0, OrderItemBuilder::as_choice(&small, &context).build())
            .unwrap()
            .choice(0, OrderItemBuilder::as_choice(&small, &context).build())
            .unwrap()
            .build();

        assert_eq!(built.choices[0].selections.len(), 2);
    }

    #[test]
    fn test_order_total_is_items_plus_dispatch_charge() {
        let carpaccio = item("carpaccio", 2400, Vec::new());
        let coke = item("coke", 300, Vec::new());

        let order = OrderBuilder::new()
            .restaurant("r-1")
            .currency("USD")
            .dispatch(Dispatch::Delivery {
                charge: Money::from_minor(700),
                time_guarantee: TimeGuarantee::Before,
                time: None,
                address: Address::default(),
            })
            .item(OrderItemBuilder::new(&carpaccio).build())
            .item(
                OrderItemBuilder::new(&coke)
                    .count(2)
                    .unwrap()
                    .build(),
            )
            .build();

        assert_eq!(order.price, Money::from_minor(700 + 2400 + 600));
        assert_eq!(order.items.len(), 2);
    }

    #[test]
    fn test_payments_do_not_affect_price() {
        let coke = item("coke", 300, Vec::new());

        let order = OrderBuilder::new()
            .restaurant("r-1")
            .item(OrderItemBuilder::new(&coke).build())
            .payment(Payment::Cash {
                amount: Money::from_minor(10_000),
            })
            .build();

        assert_eq!(order.price, Money::from_minor(300));
        assert_eq!(order.payments.len(), 1);
    }

    #[test]
    fn test_item_total_counted_once_in_order() {
        // item() adds the already-count-scaled total exactly once.
        let coke = item("coke", 300, Vec::new());
        let line = OrderItemBuilder::new(&coke).count(3).unwrap().build();

        let order = OrderBuilder::new().item(line).build();
        assert_eq!(order.price, Money::from_minor(900));
    }

    #[test]
    fn test_reservation_builder() {
        let reservation = ReservationBuilder::new()
            .developer("org.example")
            .restaurant("r-1")
            .party_size(2)
            .unwrap()
            .comment("Non-smoking please!")
            .build();

        assert_eq!(reservation.party_size, 2);
        assert_eq!(reservation.status, Some(ReservationStatus::New));
        assert!(ReservationBuilder::new().party_size(0).is_err());
    }
}
