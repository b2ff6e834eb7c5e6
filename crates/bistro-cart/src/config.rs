//! Site configuration.
//!
//! `CartConfig` is the serialized form (every field optional in the file);
//! `CartSettings` is the validated form the store runs on.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::cart::GlyphTable;
use crate::carousel::{default_testimonials, Carousel, Testimonial};
use crate::error::CartError;
use crate::menu::{default_menu_entries, Menu, MenuEntry};
use crate::money::{Currency, Money};
use crate::toast::DEFAULT_TOAST_CAPACITY;

/// Configuration file contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartConfig {
    /// Currency for every price on the site.
    #[serde(default)]
    pub currency: Currency,

    /// Flat delivery fee charged on non-empty carts (decimal string).
    #[serde(default = "default_delivery_fee")]
    pub delivery_fee: String,

    /// Length of the count badge bump in milliseconds.
    #[serde(default = "default_pulse_ms")]
    pub pulse_ms: u64,

    /// Toasts kept on screen at once.
    #[serde(default = "default_toast_capacity")]
    pub toast_capacity: usize,

    /// Glyph overrides keyed by item id.
    #[serde(default)]
    pub glyphs: BTreeMap<String, String>,

    /// Menu items.
    #[serde(default = "default_menu_entries")]
    pub menu: Vec<MenuEntry>,

    /// Testimonial slides.
    #[serde(default = "default_testimonials")]
    pub testimonials: Vec<Testimonial>,
}

fn default_delivery_fee() -> String {
    "2.99".to_string()
}

fn default_pulse_ms() -> u64 {
    300
}

fn default_toast_capacity() -> usize {
    DEFAULT_TOAST_CAPACITY
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            delivery_fee: default_delivery_fee(),
            pulse_ms: default_pulse_ms(),
            toast_capacity: default_toast_capacity(),
            glyphs: BTreeMap::new(),
            menu: default_menu_entries(),
            testimonials: default_testimonials(),
        }
    }
}

impl CartConfig {
    /// Validate and resolve the cart settings.
    pub fn settings(&self) -> Result<CartSettings, CartError> {
        let delivery_fee = Money::parse(&self.delivery_fee, self.currency)
            .map_err(|e| CartError::invalid(format!("delivery_fee: {}", e)))?;
        if self.toast_capacity == 0 {
            return Err(CartError::invalid("toast_capacity must be at least 1"));
        }
        if let Some((id, _)) = self.glyphs.iter().find(|(_, glyph)| glyph.trim().is_empty()) {
            return Err(CartError::invalid(format!("glyph for item '{}' is empty", id)));
        }
        Ok(CartSettings {
            currency: self.currency,
            delivery_fee,
            pulse: Duration::from_millis(self.pulse_ms),
            toast_capacity: self.toast_capacity,
            glyphs: GlyphTable::with_overrides(self.glyphs.clone()),
        })
    }

    /// Build the menu from the configured entries.
    pub fn menu(&self) -> Result<Menu, CartError> {
        Menu::from_entries(&self.menu, self.currency)
    }

    /// Build the testimonial carousel, rejecting ratings outside 1 to 5.
    pub fn carousel(&self) -> Result<Carousel<Testimonial>, CartError> {
        if let Some(bad) = self
            .testimonials
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(CartError::invalid(format!(
                "testimonial by '{}' has rating {}, expected 1 to 5",
                bad.author, bad.rating
            )));
        }
        Ok(Carousel::new(self.testimonials.clone()))
    }

    /// Validate every section of the configuration.
    pub fn validate(&self) -> Result<(), CartError> {
        self.settings()?;
        self.menu()?;
        self.carousel()?;
        Ok(())
    }
}

/// Validated runtime settings for a [`crate::CartStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct CartSettings {
    pub currency: Currency,
    pub delivery_fee: Money,
    pub pulse: Duration,
    pub toast_capacity: usize,
    pub glyphs: GlyphTable,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            delivery_fee: Money::new(299, Currency::USD),
            pulse: Duration::from_millis(default_pulse_ms()),
            toast_capacity: DEFAULT_TOAST_CAPACITY,
            glyphs: GlyphTable::default(),
        }
    }
}
