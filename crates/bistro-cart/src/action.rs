//! Delegated click handling: dataset attributes to cart operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CartError;

const ADD_TO_CART: &str = "add-to-cart";
const QTY_INCREASE: &str = "qty-increase";
const QTY_DECREASE: &str = "qty-decrease";
const OPEN_CART: &str = "open-cart";
const CLOSE_CART: &str = "close-cart";

/// A cart operation triggered from the page.
///
/// Serialized with the same `action` names the markup uses in
/// `data-action`, so replay scripts read like the page attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action")]
pub enum CartAction {
    #[serde(rename = "add-to-cart")]
    Add {
        id: String,
        name: String,
        price: String,
    },
    #[serde(rename = "qty-increase")]
    Increase { id: String },
    #[serde(rename = "qty-decrease")]
    Decrease { id: String },
    #[serde(rename = "open-cart")]
    Open,
    #[serde(rename = "close-cart")]
    Close,
}

impl CartAction {
    /// Parse the dataset of a clicked element (keys without the `data-` prefix).
    ///
    /// Returns `Ok(None)` for clicks that are not cart actions.
    pub fn from_dataset(dataset: &BTreeMap<String, String>) -> Result<Option<Self>, CartError> {
        let Some(action) = dataset.get("action") else {
            return Ok(None);
        };
        let field = |key: &str| {
            dataset
                .get(key)
                .cloned()
                .ok_or_else(|| CartError::invalid(format!("{} requires data-{}", action, key)))
        };

        let parsed = match action.as_str() {
            ADD_TO_CART => CartAction::Add {
                id: field("id")?,
                name: field("name")?,
                price: field("price")?,
            },
            QTY_INCREASE => CartAction::Increase { id: field("id")? },
            QTY_DECREASE => CartAction::Decrease { id: field("id")? },
            OPEN_CART => CartAction::Open,
            CLOSE_CART => CartAction::Close,
            _ => return Ok(None),
        };
        Ok(Some(parsed))
    }

    /// The `data-action` value for this action.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => ADD_TO_CART,
            CartAction::Increase { .. } => QTY_INCREASE,
            CartAction::Decrease { .. } => QTY_DECREASE,
            CartAction::Open => OPEN_CART,
            CartAction::Close => CLOSE_CART,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_add() {
        let ds = dataset(&[
            ("action", "add-to-cart"),
            ("id", "1"),
            ("name", "Burger"),
            ("price", "5.00"),
        ]);
        let action = CartAction::from_dataset(&ds).unwrap().unwrap();
        assert_eq!(
            action,
            CartAction::Add {
                id: "1".into(),
                name: "Burger".into(),
                price: "5.00".into(),
            }
        );
        assert_eq!(action.name(), "add-to-cart");
    }

    #[test]
    fn test_parse_quantity_buttons() {
        let ds = dataset(&[("action", "qty-decrease"), ("id", "2")]);
        assert_eq!(
            CartAction::from_dataset(&ds).unwrap(),
            Some(CartAction::Decrease { id: "2".into() })
        );
    }

    #[test]
    fn test_missing_attribute_is_invalid() {
        let ds = dataset(&[("action", "add-to-cart"), ("id", "1")]);
        assert!(matches!(
            CartAction::from_dataset(&ds),
            Err(CartError::InvalidInput(msg)) if msg.contains("data-name")
        ));
    }

    #[test]
    fn test_unrelated_clicks_are_ignored() {
        assert_eq!(CartAction::from_dataset(&dataset(&[])).unwrap(), None);
        assert_eq!(
            CartAction::from_dataset(&dataset(&[("action", "toggle-menu")])).unwrap(),
            None
        );
    }

    #[test]
    fn test_serde_uses_markup_names() {
        let json = r#"{"action":"qty-increase","id":"3"}"#;
        let action: CartAction = serde_json::from_str(json).unwrap();
        assert_eq!(action, CartAction::Increase { id: "3".into() });

        let open = serde_json::to_string(&CartAction::Open).unwrap();
        assert_eq!(open, r#"{"action":"open-cart"}"#);
    }
}
