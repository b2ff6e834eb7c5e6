//! Newtype IDs for type-safe identifiers.
//!
//! Ids come from page markup (`data-id`, `data-category`), so they are
//! opaque strings rather than generated values.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CartError;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident, $label:literal) => {
        /// An opaque identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Create an ID from untrusted input, rejecting blank values.
            pub fn parse(raw: &str) -> Result<Self, CartError> {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(CartError::invalid(concat!($label, " must not be empty")));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ItemId, "item id");
define_id!(CategoryId, "category");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ItemId::new("3");
        assert_eq!(id.as_str(), "3");
    }

    #[test]
    fn test_id_parse_trims() {
        let id = ItemId::parse("  burger-1 ").unwrap();
        assert_eq!(id.as_str(), "burger-1");
    }

    #[test]
    fn test_id_parse_rejects_blank() {
        assert!(matches!(ItemId::parse("   "), Err(CartError::InvalidInput(_))));
        assert!(matches!(CategoryId::parse(""), Err(CartError::InvalidInput(_))));
    }

    #[test]
    fn test_id_display() {
        let id: CategoryId = "pizza".into();
        assert_eq!(format!("{}", id), "pizza");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&ItemId::new("5")).unwrap();
        assert_eq!(json, "\"5\"");
    }
}
