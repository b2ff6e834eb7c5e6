//! Cart and line item types.

use crate::cart::{CartTotals, GlyphTable};
use crate::error::CartError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Result of a successful [`Cart::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was created with quantity 1.
    Inserted,
    /// An existing line item was bumped to `quantity`.
    Incremented { quantity: i64 },
}

/// Result of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The item now has `quantity`.
    Updated { quantity: i64 },
    /// The quantity reached zero or below and the item was removed.
    Removed,
    /// No item with that id; nothing changed.
    Missing,
}

/// A shopping cart: line items in first-add order.
///
/// Mutations reject any change whose item count, subtotal or total with
/// the delivery fee would overflow, so the derived queries never fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
    glyphs: GlyphTable,
    delivery_fee: Money,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self::with_glyphs(currency, GlyphTable::default())
    }

    /// Create an empty cart with a custom glyph table.
    pub fn with_glyphs(currency: Currency, glyphs: GlyphTable) -> Self {
        Self::configured(currency, glyphs, Money::zero(currency))
    }

    /// Create an empty cart that charges `delivery_fee` once it has items.
    pub fn configured(currency: Currency, glyphs: GlyphTable, delivery_fee: Money) -> Self {
        Self {
            items: Vec::new(),
            currency,
            glyphs,
            delivery_fee,
        }
    }

    /// Add one unit of an item.
    ///
    /// All three inputs are validated even when the item already exists.
    /// For an existing item the supplied name and price are ignored.
    pub fn add(&mut self, id: &str, name: &str, price: &str) -> Result<AddOutcome, CartError> {
        let id = ItemId::parse(id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CartError::invalid("item name must not be empty"));
        }
        let unit_price = Money::parse(price, self.currency)?;

        if let Some(index) = self.position(&id) {
            let quantity = self.items[index]
                .quantity
                .checked_add(1)
                .ok_or(CartError::Overflow)?;
            self.set_quantity_checked(index, quantity)?;
            return Ok(AddOutcome::Incremented { quantity });
        }

        let glyph = self.glyphs.lookup(&id).to_string();
        self.items.push(LineItem {
            id,
            name: name.to_string(),
            unit_price,
            quantity: 1,
            glyph,
        });
        if self.try_totals(self.delivery_fee).is_err() {
            self.items.pop();
            return Err(CartError::Overflow);
        }
        Ok(AddOutcome::Inserted)
    }

    /// Apply `delta` to an item's quantity, removing it at zero or below.
    pub fn change_quantity(&mut self, id: &ItemId, delta: i64) -> Result<QuantityChange, CartError> {
        let index = self
            .position(id)
            .ok_or_else(|| CartError::NotFound(id.clone()))?;
        let quantity = self.items[index]
            .quantity
            .checked_add(delta)
            .ok_or(CartError::Overflow)?;

        if quantity <= 0 {
            self.items.remove(index);
            return Ok(QuantityChange::Removed);
        }

        self.set_quantity_checked(index, quantity)?;
        Ok(QuantityChange::Updated { quantity })
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.totals().item_count
    }

    /// Sum of unit price times quantity over all items.
    pub fn subtotal(&self) -> Money {
        self.totals().subtotal
    }

    /// Subtotal plus the delivery fee, charged only when the cart has items.
    pub fn total(&self) -> Money {
        self.totals().total
    }

    /// Fee charged on a non-empty cart.
    pub fn delivery_fee(&self) -> Money {
        self.delivery_fee
    }

    /// Compute all derived totals at once.
    pub fn totals(&self) -> CartTotals {
        // Every mutation checked these against the cart's own fee.
        self.try_totals(self.delivery_fee).unwrap_or_else(|_| {
            let max = Money::new(i64::MAX, self.currency);
            CartTotals {
                item_count: i64::MAX,
                subtotal: max,
                delivery_fee: self.delivery_fee,
                total: max,
            }
        })
    }

    /// Totals with an arbitrary delivery fee.
    ///
    /// Fails with [`CartError::Overflow`] when the total does not fit.
    pub fn try_totals(&self, delivery_fee: Money) -> Result<CartTotals, CartError> {
        let item_count = self
            .items
            .iter()
            .try_fold(0_i64, |acc, item| acc.checked_add(item.quantity))
            .ok_or(CartError::Overflow)?;
        let subtotal = self.try_subtotal().ok_or(CartError::Overflow)?;
        let delivery_fee = if item_count > 0 {
            delivery_fee
        } else {
            Money::zero(self.currency)
        };
        let total = subtotal.try_add(&delivery_fee).ok_or(CartError::Overflow)?;
        Ok(CartTotals {
            item_count,
            subtotal,
            delivery_fee,
            total,
        })
    }

    /// Items in first-add order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|i| &i.id == id)
    }

    fn set_quantity_checked(&mut self, index: usize, quantity: i64) -> Result<(), CartError> {
        let previous = std::mem::replace(&mut self.items[index].quantity, quantity);
        if self.try_totals(self.delivery_fee).is_err() {
            self.items[index].quantity = previous;
            return Err(CartError::Overflow);
        }
        Ok(())
    }

    fn try_subtotal(&self) -> Option<Money> {
        self.items
            .iter()
            .try_fold(Money::zero(self.currency), |acc, item| {
                acc.try_add(&item.line_total()?)
            })
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    /// Item identifier, unique within the cart.
    pub id: ItemId,
    /// Display name from the first add.
    pub name: String,
    /// Unit price from the first add.
    pub unit_price: Money,
    /// Always at least 1.
    pub quantity: i64,
    /// Presentation symbol; not part of identity.
    pub glyph: String,
}

impl LineItem {
    /// Unit price times quantity, `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price.try_multiply(self.quantity)
    }
}
