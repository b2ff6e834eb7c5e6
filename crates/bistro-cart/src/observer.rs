//! Capabilities the cart store drives on mutation: rendering and notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartTotals, CartVisibility, LineItem, ScrollLock};
use crate::ids::ItemId;
use crate::money::Money;

/// Kind of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Default,
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Default => "default",
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line item as the presentation surface sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemView {
    pub id: ItemId,
    pub name: String,
    pub glyph: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            glyph: item.glyph.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            line_total: item
                .line_total()
                .unwrap_or(Money::new(i64::MAX, item.unit_price.currency)),
        }
    }
}

/// Immutable projection of the cart handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<LineItemView>,
    pub totals: CartTotals,
    pub visibility: CartVisibility,
}

impl CartView {
    /// Project a cart and the drawer state.
    pub fn project(cart: &Cart, visibility: CartVisibility) -> Self {
        Self {
            items: cart.items().iter().map(LineItemView::from).collect(),
            totals: cart.totals(),
            visibility,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A presentation surface kept in sync with the cart.
///
/// `render` is called once per successful mutation with a fresh view.
pub trait CartRenderer {
    fn render(&mut self, view: &CartView);

    /// Called when the drawer opens or closes.
    fn visibility_changed(&mut self, _visibility: CartVisibility, _lock: ScrollLock) {}
}

/// User-facing notification sink (toasts).
pub trait Notifier {
    fn notify(&mut self, message: &str, kind: ToastKind);
}

impl<T: CartRenderer> CartRenderer for Rc<RefCell<T>> {
    fn render(&mut self, view: &CartView) {
        self.borrow_mut().render(view);
    }

    fn visibility_changed(&mut self, visibility: CartVisibility, lock: ScrollLock) {
        self.borrow_mut().visibility_changed(visibility, lock);
    }
}

impl<T: Notifier> Notifier for Rc<RefCell<T>> {
    fn notify(&mut self, message: &str, kind: ToastKind) {
        self.borrow_mut().notify(message, kind);
    }
}

/// Notifier that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&mut self, _message: &str, _kind: ToastKind) {}
}
