//! The cart store: cart state plus the side effects of mutating it.

use std::time::Instant;

use tracing::{debug, warn};

use crate::action::CartAction;
use crate::cart::{AddOutcome, Cart, CartTotals, CartVisibility, QuantityChange, ScrollLock};
use crate::config::CartSettings;
use crate::error::CartError;
use crate::ids::ItemId;
use crate::money::Money;
use crate::observer::{CartRenderer, CartView, Notifier, ToastKind};
use crate::pulse::CountPulse;

/// Owns a cart and keeps its presentation surfaces in sync.
///
/// Every successful mutation renders each subscriber exactly once.
/// Renderers and the notifier only ever see immutable data, so they
/// cannot re-enter the store mid-mutation.
pub struct CartStore {
    cart: Cart,
    settings: CartSettings,
    visibility: CartVisibility,
    scrollbar_width_px: u32,
    pulse: CountPulse,
    renderers: Vec<Box<dyn CartRenderer>>,
    notifier: Box<dyn Notifier>,
}

impl CartStore {
    /// Create an empty, closed store.
    pub fn new(settings: CartSettings, notifier: Box<dyn Notifier>) -> Self {
        Self {
            cart: Cart::configured(
                settings.currency,
                settings.glyphs.clone(),
                settings.delivery_fee,
            ),
            pulse: CountPulse::new(settings.pulse),
            settings,
            visibility: CartVisibility::Closed,
            scrollbar_width_px: 0,
            renderers: Vec::new(),
            notifier,
        }
    }

    /// Register a renderer and bring it in sync with the current state.
    pub fn subscribe(&mut self, mut renderer: Box<dyn CartRenderer>) {
        renderer.render(&self.view());
        renderer.visibility_changed(self.visibility, self.scroll_lock());
        self.renderers.push(renderer);
    }

    /// Add one unit of an item.
    ///
    /// Invalid input leaves the cart untouched and raises an error toast.
    pub fn add(&mut self, id: &str, name: &str, price: &str) -> Result<AddOutcome, CartError> {
        self.add_at(id, name, price, Instant::now())
    }

    /// [`CartStore::add`] with an explicit clock for the count pulse.
    pub fn add_at(
        &mut self,
        id: &str,
        name: &str,
        price: &str,
        now: Instant,
    ) -> Result<AddOutcome, CartError> {
        let outcome = match self.cart.add(id, name, price) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(id, price, error = %e, "rejected add to cart");
                self.notifier
                    .notify(&format!("Could not add item: {}", e), ToastKind::Error);
                return Err(e);
            }
        };

        debug!(id, ?outcome, "added to cart");
        self.render();
        let stored_name = self
            .cart
            .get(&ItemId::new(id.trim()))
            .map(|item| item.name.clone())
            .unwrap_or_else(|| name.trim().to_string());
        self.notifier
            .notify(&format!("{} added to cart", stored_name), ToastKind::Success);
        self.pulse.bump(now);
        Ok(outcome)
    }

    /// Apply `delta` to an item's quantity, removing it at zero or below.
    ///
    /// Unknown ids are ignored so stale buttons stay harmless.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> Result<QuantityChange, CartError> {
        let item_id = ItemId::new(id.trim());
        match self.cart.change_quantity(&item_id, delta) {
            Ok(change) => {
                debug!(id = %item_id, delta, ?change, "quantity changed");
                self.render();
                Ok(change)
            }
            Err(CartError::NotFound(_)) => {
                debug!(id = %item_id, delta, "quantity change for item not in cart");
                Ok(QuantityChange::Missing)
            }
            Err(e) => {
                warn!(id = %item_id, delta, error = %e, "rejected quantity change");
                Err(e)
            }
        }
    }

    /// Show the cart drawer and lock page scroll. No-op if already open.
    pub fn open(&mut self) {
        if self.visibility.open() {
            debug!("cart opened");
            self.broadcast_visibility();
        }
    }

    /// Hide the cart drawer and release the scroll lock. No-op if already closed.
    pub fn close(&mut self) {
        if self.visibility.close() {
            debug!("cart closed");
            self.broadcast_visibility();
        }
    }

    /// Record the page's scrollbar width, used to pad the body while locked.
    pub fn set_scrollbar_width(&mut self, px: u32) {
        self.scrollbar_width_px = px;
    }

    /// Route a page action to the matching operation.
    pub fn dispatch(&mut self, action: &CartAction) -> Result<(), CartError> {
        match action {
            CartAction::Add { id, name, price } => self.add(id, name, price).map(|_| ()),
            CartAction::Increase { id } => self.change_quantity(id, 1).map(|_| ()),
            CartAction::Decrease { id } => self.change_quantity(id, -1).map(|_| ()),
            CartAction::Open => {
                self.open();
                Ok(())
            }
            CartAction::Close => {
                self.close();
                Ok(())
            }
        }
    }

    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    pub fn subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    /// Total with the configured delivery fee.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    /// Total with an explicit delivery fee.
    pub fn total_with(&self, delivery_fee: Money) -> Result<Money, CartError> {
        Ok(self.cart.try_totals(delivery_fee)?.total)
    }

    pub fn totals(&self) -> CartTotals {
        self.cart.totals()
    }

    /// Current projection, as renderers receive it.
    pub fn view(&self) -> CartView {
        CartView::project(&self.cart, self.visibility)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn visibility(&self) -> CartVisibility {
        self.visibility
    }

    pub fn scroll_lock(&self) -> ScrollLock {
        ScrollLock::for_visibility(self.visibility, self.scrollbar_width_px)
    }

    /// Whether the count badge is mid-bump at `now`.
    pub fn pulse_active(&self, now: Instant) -> bool {
        self.pulse.is_active(now)
    }

    pub fn settings(&self) -> &CartSettings {
        &self.settings
    }

    fn render(&mut self) {
        let view = self.view();
        for renderer in &mut self.renderers {
            renderer.render(&view);
        }
    }

    fn broadcast_visibility(&mut self) {
        let lock = self.scroll_lock();
        for renderer in &mut self.renderers {
            renderer.visibility_changed(self.visibility, lock);
        }
    }
}
