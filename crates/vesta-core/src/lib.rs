//! # vesta-core: Pure Domain Logic for the Vesta Orders SDK
//!
//! This crate is the **heart** of the SDK. It contains the order
//! construction and pricing engine as pure functions and value types with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                     Vesta Orders Architecture                     │
//! │                                                                   │
//! │  ┌─────────────────────────────────────────────────────────────┐  │
//! │  │                 ★ vesta-core (THIS CRATE) ★                 │  │
//! │  │                                                             │  │
//! │  │  ┌────────┐ ┌────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ │  │
//! │  │  │ money  │ │  menu  │ │  order  │ │ pricing │ │ builder │ │  │
//! │  │  │ Money  │ │ Index  │ │  tree   │ │  exact  │ │ staged  │ │  │
//! │  │  └────────┘ └────────┘ └─────────┘ └─────────┘ └─────────┘ │  │
//! │  │                                                             │  │
//! │  │  NO I/O • NO NETWORK • PURE FUNCTIONS                       │  │
//! │  └──────────────────────────────┬──────────────────────────────┘  │
//! │                                 │                                 │
//! │  ┌──────────────────────────────▼──────────────────────────────┐  │
//! │  │                  vesta-client (HTTP RPC layer)              │  │
//! │  │      request DTOs, envelope decoding, typed errors          │  │
//! │  └─────────────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: pricing is deterministic - same tree, same total
//! 2. **No I/O**: network access is FORBIDDEN here; that is vesta-client
//! 3. **Integer Money**: all monetary values are minor units (i64), never
//!    floating point
//! 4. **Explicit Errors**: construction failures are typed, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vesta_core::builder::{OrderBuilder, OrderItemBuilder};
//! use vesta_core::menu::{Menu, MenuIndex, MenuItem};
//! use vesta_core::money::Money;
//!
//! let menu = Menu {
//!     items: vec![MenuItem {
//!         id: "carpaccio".into(),
//!         price: Money::from_minor(2400),
//!         ..Default::default()
//!     }],
//!     sections: Vec::new(),
//! };
//! let index = MenuIndex::new(&menu);
//!
//! let order = OrderBuilder::new()
//!     .restaurant("the-testaurant")
//!     .currency("USD")
//!     .item(OrderItemBuilder::new(index.require("carpaccio")?).build())
//!     .build();
//!
//! assert_eq!(order.price, Money::from_minor(2400));
//! # Ok::<(), vesta_core::error::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod builder;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;
pub mod pricing;
pub mod reservation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vesta_core::Money` instead of
// `use vesta_core::money::Money`

pub use builder::{OrderBuilder, OrderItemBuilder, ReservationBuilder};
pub use error::{CoreError, CoreResult, ValidationError};
pub use menu::{Menu, MenuIndex, MenuItem, MenuSection, Restaurant, RestaurantFullInfo, Variation};
pub use money::Money;
pub use order::{ChoiceSlot, Dispatch, Order, OrderItem, OrderStatus, Payment, TimeGuarantee};
pub use reservation::{Reservation, ReservationStatus};
pub use types::{Address, Contact, LatLng, LocalizedString};
