//! Cart drawer visibility state machine and scroll lock.

use serde::{Deserialize, Serialize};

/// Whether the cart drawer is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartVisibility {
    #[default]
    Closed,
    Open,
}

impl CartVisibility {
    /// Transition to `Open`. Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        self.transition(CartVisibility::Open)
    }

    /// Transition to `Closed`. Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        self.transition(CartVisibility::Closed)
    }

    pub fn is_open(&self) -> bool {
        *self == CartVisibility::Open
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartVisibility::Closed => "closed",
            CartVisibility::Open => "open",
        }
    }

    fn transition(&mut self, to: CartVisibility) -> bool {
        if *self == to {
            return false;
        }
        *self = to;
        true
    }
}

/// Page scroll lock applied while the drawer is open.
///
/// The padding replaces the hidden scrollbar so content does not shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollLock {
    #[default]
    Released,
    Engaged { padding_right_px: u32 },
}

impl ScrollLock {
    /// Lock for the given visibility and measured scrollbar width.
    pub fn for_visibility(visibility: CartVisibility, scrollbar_width_px: u32) -> Self {
        match visibility {
            CartVisibility::Open => ScrollLock::Engaged {
                padding_right_px: scrollbar_width_px,
            },
            CartVisibility::Closed => ScrollLock::Released,
        }
    }

    pub fn is_engaged(&self) -> bool {
        matches!(self, ScrollLock::Engaged { .. })
    }

    /// Inline body style for this lock; empty when released.
    pub fn body_style(&self) -> String {
        match self {
            ScrollLock::Released => String::new(),
            ScrollLock::Engaged { padding_right_px } => {
                format!("overflow: hidden; padding-right: {}px", padding_right_px)
            }
        }
    }
}
