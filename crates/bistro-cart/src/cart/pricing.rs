//! Cart totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Derived totals for a cart. Always recomputed, never stored on the cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of quantities.
    pub item_count: i64,
    /// Sum of unit price times quantity.
    pub subtotal: Money,
    /// Delivery fee actually charged (zero for an empty cart).
    pub delivery_fee: Money,
    /// Subtotal plus the charged delivery fee.
    pub total: Money,
}

impl CartTotals {
    /// Whether a delivery fee is being charged.
    pub fn charges_delivery(&self) -> bool {
        !self.delivery_fee.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_charges_delivery() {
        let zero = Money::zero(Currency::USD);
        let totals = CartTotals {
            item_count: 0,
            subtotal: zero,
            delivery_fee: zero,
            total: zero,
        };
        assert!(!totals.charges_delivery());

        let fee = Money::new(299, Currency::USD);
        let totals = CartTotals {
            item_count: 1,
            subtotal: Money::new(500, Currency::USD),
            delivery_fee: fee,
            total: Money::new(799, Currency::USD),
        };
        assert!(totals.charges_delivery());
    }
}
