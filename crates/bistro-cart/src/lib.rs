//! Interactive core of the Bistro ordering site.
//!
//! This crate holds the state behind the page's interactive widgets:
//!
//! - **Cart**: line items, quantities and derived totals ([`Cart`])
//! - **Store**: the cart plus render/notify side effects ([`CartStore`])
//! - **Menu**: catalog with category filtering ([`Menu`])
//! - **Carousel**: wrapping testimonial slides ([`Carousel`])
//!
//! Nothing here touches the DOM. Presentation surfaces implement
//! [`CartRenderer`] and toasts implement [`Notifier`].
//!
//! # Example
//!
//! ```
//! use bistro_cart::prelude::*;
//!
//! let mut store = CartStore::new(CartSettings::default(), Box::new(ToastQueue::default()));
//! store.add("1", "Burger", "5.00").unwrap();
//! store.add("1", "Burger", "5.00").unwrap();
//!
//! assert_eq!(store.item_count(), 2);
//! assert_eq!(store.subtotal().display(), "$10.00");
//! assert_eq!(store.total().display(), "$12.99");
//! ```

pub mod action;
pub mod carousel;
pub mod cart;
pub mod config;
pub mod error;
pub mod ids;
pub mod menu;
pub mod money;
pub mod observer;
pub mod pulse;
pub mod render;
pub mod store;
pub mod toast;

pub use action::CartAction;
pub use carousel::{Carousel, Testimonial};
pub use cart::{AddOutcome, Cart, CartTotals, CartVisibility, LineItem, QuantityChange, ScrollLock};
pub use config::{CartConfig, CartSettings};
pub use error::CartError;
pub use ids::{CategoryId, ItemId};
pub use menu::{CategoryFilter, Menu, MenuItem};
pub use money::{Currency, Money};
pub use observer::{CartRenderer, CartView, Notifier, ToastKind};
pub use render::HtmlCartRenderer;
pub use store::CartStore;
pub use toast::{Toast, ToastQueue};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::action::CartAction;
    pub use crate::carousel::{Carousel, Testimonial};
    pub use crate::cart::{
        AddOutcome, Cart, CartTotals, CartVisibility, LineItem, QuantityChange, ScrollLock,
    };
    pub use crate::config::{CartConfig, CartSettings};
    pub use crate::error::CartError;
    pub use crate::ids::{CategoryId, ItemId};
    pub use crate::menu::{CategoryFilter, Menu, MenuItem};
    pub use crate::money::{Currency, Money};
    pub use crate::observer::{CartRenderer, CartView, Notifier, SilentNotifier, ToastKind};
    pub use crate::render::HtmlCartRenderer;
    pub use crate::store::CartStore;
    pub use crate::toast::{Toast, ToastQueue};
}
