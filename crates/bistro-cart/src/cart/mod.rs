//! Shopping cart module.
//!
//! Contains the pure cart state, line items, derived totals, glyph lookup
//! and the drawer visibility state machine.

mod cart;
mod glyph;
mod pricing;
mod visibility;

pub use cart::{AddOutcome, Cart, LineItem, QuantityChange};
pub use glyph::{GlyphTable, DEFAULT_GLYPH};
pub use pricing::CartTotals;
pub use visibility::{CartVisibility, ScrollLock};
