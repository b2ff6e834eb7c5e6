//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Prices arriving as
//! strings (`data-price="5.00"`) are parsed exactly, never through `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CartError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    fn minor_units(&self) -> i64 {
        10_i64.pow(self.decimal_places())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (e.g., cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Parse a non-negative decimal string such as `"5.00"`, `"10"` or `".5"`.
    ///
    /// ```
    /// use bistro_cart::money::{Currency, Money};
    /// let price = Money::parse("12.99", Currency::USD).unwrap();
    /// assert_eq!(price.amount_cents, 1299);
    /// ```
    pub fn parse(raw: &str, currency: Currency) -> Result<Self, CartError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CartError::invalid("price must not be empty"));
        }

        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
            return Err(CartError::invalid(format!(
                "price '{}' is not a non-negative decimal",
                raw
            )));
        }

        let places = currency.decimal_places() as usize;
        if frac.len() > places {
            return Err(CartError::invalid(format!(
                "price '{}' has more than {} decimal places",
                raw, places
            )));
        }

        let out_of_range = || CartError::invalid(format!("price '{}' is out of range", raw));

        let whole_units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };
        let frac_units: i64 = if frac.is_empty() {
            0
        } else {
            // Right-pad so "5" after the point means 50 cents.
            format!("{:0<width$}", frac, width = places)
                .parse()
                .map_err(|_| out_of_range())?
        };

        let amount_cents = whole_units
            .checked_mul(currency.minor_units())
            .and_then(|cents| cents.checked_add(frac_units))
            .ok_or_else(out_of_range)?;

        Ok(Self::new(amount_cents, currency))
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let units = self.currency.minor_units();
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let abs = self.amount_cents.unsigned_abs();
        let places = self.currency.decimal_places() as usize;
        if places == 0 {
            return format!("{}{}", sign, abs);
        }
        let units = units as u64;
        format!("{}{}.{:0places$}", sign, abs / units, abs % units)
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount_cents
            .checked_add(other.amount_cents)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Try to multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount_cents
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
