//! # Menu Item Graph
//!
//! The read-only menu snapshot as retrieved from the platform, plus the
//! `MenuIndex` that turns its flat item list into an O(1) id lookup.
//!
//! ## Shape
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Menu Snapshot                              │
//! │                                                                   │
//! │  Menu.items: FLAT list of every MenuItem (dishes AND choices)     │
//! │                                                                   │
//! │  MenuItem "Coke" ── variations ──► Variation "Size"               │
//! │                                      item_ids:  [small, large]    │
//! │                                      prices:    {large: +50}      │
//! │                                                                   │
//! │  "small"/"large" are themselves MenuItems in Menu.items; the      │
//! │  graph is referenced by id, which is why the index exists.        │
//! │                                                                   │
//! │  Menu.sections: display-only hierarchy (titles + item id lists)   │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The graph is immutable once loaded: one snapshot per retrieval, discarded
//! with the orders built from it.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::LocalizedString;

// =============================================================================
// Menu Records
// =============================================================================

/// A single menu item: a dish, a drink, or a selectable choice under some
/// variation (the platform does not distinguish - both live in the same flat
/// item list).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Platform-assigned identifier.
    pub id: String,

    /// Localized display title.
    #[serde(default)]
    pub title: LocalizedString,

    /// Base price in minor units. Zero is common for items that only ever
    /// appear as choices.
    #[serde(default)]
    pub price: Money,

    /// Option groups, in display order. The order matters: order items
    /// allocate one choice slot per variation, positionally.
    #[serde(default)]
    pub variations: Vec<Variation>,
}

/// A named option group on a menu item (e.g. "Size", "Toppings").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// Platform-assigned identifier.
    pub id: String,

    /// Localized display title.
    #[serde(default)]
    pub title: LocalizedString,

    /// Selectable child items, by id, in display order.
    #[serde(default)]
    pub item_ids: Vec<String>,

    /// Price overrides by child item id, in minor units. An absent entry
    /// means the child is free when chosen through this variation.
    #[serde(default)]
    pub prices: BTreeMap<String, Money>,

    /// Minimum number of selections the platform will accept.
    #[serde(default)]
    pub min_num_allowed: u32,

    /// Maximum number of selections the platform will accept. Not enforced
    /// client-side; the server is authoritative.
    #[serde(default)]
    pub max_num_allowed: u32,
}

impl Variation {
    /// The price a child item carries when chosen through this variation:
    /// the override if present, otherwise zero. An item listed as a choice
    /// without an explicit override price is free as a choice.
    pub fn choice_price(&self, item_id: &str) -> Money {
        self.prices.get(item_id).copied().unwrap_or(Money::zero())
    }
}

/// A display-only grouping of menu items (a menu page or a section within
/// one). Sections reference items by id; pricing never consults them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    #[serde(default)]
    pub title: LocalizedString,

    #[serde(default)]
    pub children: Vec<MenuSection>,

    #[serde(default)]
    pub item_ids: Vec<String>,
}

/// The complete menu snapshot: a flat item collection plus the section
/// hierarchy used for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    #[serde(default)]
    pub items: Vec<MenuItem>,

    #[serde(default)]
    pub sections: Vec<MenuSection>,
}

// =============================================================================
// Restaurant Records
// =============================================================================

/// The restaurant a menu belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,

    #[serde(default)]
    pub title: LocalizedString,

    /// Default locale, e.g. "en_US". Used as the localization fallback.
    #[serde(default)]
    pub locale: String,

    /// ISO 4217 currency code all menu prices are denominated in.
    #[serde(default)]
    pub currency: String,

    /// IANA timezone name, e.g. "America/Chicago".
    #[serde(default)]
    pub timezone: String,
}

/// Restaurant record together with its menu - the menu retrieval
/// collaborator's full payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFullInfo {
    pub restaurant: Restaurant,

    #[serde(default)]
    pub menu: Menu,
}

// =============================================================================
// Menu Index
// =============================================================================

/// O(1) lookup from item id to `MenuItem`, built once per menu snapshot.
///
/// The server returns items as a flat collection, not pre-indexed; order
/// construction needs to chase variation `item_ids` references, so the index
/// is built eagerly up front. Borrows the menu - the snapshot outlives every
/// index and order built from it.
#[derive(Debug)]
pub struct MenuIndex<'a> {
    items: HashMap<&'a str, &'a MenuItem>,
}

impl<'a> MenuIndex<'a> {
    /// Indexes a menu's flat item list.
    pub fn new(menu: &'a Menu) -> Self {
        Self::from_items(&menu.items)
    }

    /// Indexes any flat item slice. Later duplicates win, matching the
    /// platform's last-write semantics for re-sent items.
    pub fn from_items(items: &'a [MenuItem]) -> Self {
        let mut map = HashMap::with_capacity(items.len());
        for item in items {
            map.insert(item.id.as_str(), item);
        }
        MenuIndex { items: map }
    }

    /// Looks up an item by id. Absent ids are an expected condition (orders
    /// reference items by id before the graph is consulted), hence `Option`
    /// rather than a panic.
    pub fn get(&self, item_id: &str) -> Option<&'a MenuItem> {
        self.items.get(item_id).copied()
    }

    /// Like [`get`](Self::get), as a fallible operation for builder
    /// pipelines.
    pub fn require(&self, item_id: &str) -> CoreResult<&'a MenuItem> {
        self.get(item_id)
            .ok_or_else(|| CoreError::ItemNotFound(item_id.to_string()))
    }

    /// Case-insensitive substring search across every locale of every item
    /// title. Results are ordered by item id.
    pub fn search(&self, text: &str) -> Vec<&'a MenuItem> {
        let needle = text.to_lowercase();
        let mut results: Vec<&'a MenuItem> = self
            .items
            .values()
            .filter(|item| {
                item.title
                    .values()
                    .any(|title| title.to_lowercase().contains(&needle))
            })
            .copied()
            .collect();
        // HashMap iteration order is arbitrary; present results stably.
        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }

    /// First search hit, if any.
    pub fn find_first(&self, text: &str) -> Option<&'a MenuItem> {
        self.search(text).into_iter().next()
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the menu had no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(id: &str, title_en: &str, price: i64) -> MenuItem {
        let mut title = LocalizedString::new();
        title.insert("en_US".to_string(), title_en.to_string());
        MenuItem {
            id: id.to_string(),
            title,
            price: Money::from_minor(price),
            variations: Vec::new(),
        }
    }

    #[test]
    fn test_index_lookup() {
        let menu = Menu {
            items: vec![titled("1", "Carpaccio", 2400), titled("2", "Coke", 300)],
            sections: Vec::new(),
        };
        let index = MenuIndex::new(&menu);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("2").unwrap().price, Money::from_minor(300));
        assert!(index.get("999").is_none());
    }

    #[test]
    fn test_require_absent_is_error_not_panic() {
        let menu = Menu::default();
        let index = MenuIndex::new(&menu);

        let err = index.require("missing").unwrap_err();
        assert!(matches!(err, CoreError::ItemNotFound(ref id) if id == "missing"));
    }

    #[test]
    fn test_search_is_case_insensitive_across_locales() {
        let mut coke = titled("5", "Coca-Cola", 300);
        coke.title.insert("es_MX".to_string(), "Refresco".to_string());
        let menu = Menu {
            items: vec![titled("4", "Carpaccio", 2400), coke],
            sections: Vec::new(),
        };
        let index = MenuIndex::new(&menu);

        assert_eq!(index.search("COLA").len(), 1);
        assert_eq!(index.find_first("refresco").unwrap().id, "5");
        assert!(index.find_first("sushi").is_none());
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let items = vec![titled("1", "Old", 100), titled("1", "New", 200)];
        let index = MenuIndex::from_items(&items);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("1").unwrap().price, Money::from_minor(200));
    }

    #[test]
    fn test_choice_price_defaults_to_zero() {
        let mut variation = Variation::default();
        variation.prices.insert("large".to_string(), Money::from_minor(50));

        assert_eq!(variation.choice_price("large"), Money::from_minor(50));
        assert_eq!(variation.choice_price("small"), Money::zero());
    }
}
