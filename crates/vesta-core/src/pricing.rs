//! # Price Calculator
//!
//! Exact recursive pricing of order-item trees, in integer minor units.
//!
//! ## Algorithm
//! ```text
//! item_total(item) = (item.price + Σ slots Σ selections item_total(sel))
//!                    × item.count
//! ```
//!
//! Every intermediate sum stays in [`Money`] - integer minor units, never
//! binary floating point. Orders can nest choices arbitrarily deep, and
//! repeated float rounding would silently drift from the server's own total
//! by fractions of a cent, causing spurious rejections. The only float exit
//! is `Money::to_major_units`, at the display edge.
//!
//! These are pure functions: no side effects, no hidden state, trivially
//! safe for concurrent reuse across orders.

use crate::money::Money;
use crate::order::OrderItem;

/// Price of one order item: resolved price plus all selected choices,
/// recursively, times count.
///
/// ## Example
/// ```rust
/// use vesta_core::money::Money;
/// use vesta_core::order::{ChoiceSlot, OrderItem};
/// use vesta_core::pricing::item_total;
///
/// // 5.00 base + 1.50 choice, twice = 13.00
/// let item = OrderItem {
///     item_id: "burger".to_string(),
///     price: Money::from_minor(500),
///     count: 2,
///     comment: None,
///     choices: vec![ChoiceSlot {
///         variation_id: "extras".to_string(),
///         selections: vec![OrderItem {
///             item_id: "bacon".to_string(),
///             price: Money::from_minor(150),
///             count: 1,
///             comment: None,
///             choices: Vec::new(),
///         }],
///     }],
/// };
/// assert_eq!(item_total(&item).minor_units(), 1300);
/// ```
pub fn item_total(item: &OrderItem) -> Money {
    let choices_total: Money = item
        .choices
        .iter()
        .flat_map(|slot| slot.selections.iter())
        .map(item_total)
        .sum();
    (item.price + choices_total).scale(item.count)
}

/// Price of a sequence of root order items.
pub fn items_total(items: &[OrderItem]) -> Money {
    items.iter().map(item_total).sum()
}

// =============================================================================
// Unit Tests
// =============================================================================
