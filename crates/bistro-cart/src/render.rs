//! HTML presentation surface for the cart drawer.

use crate::cart::{Cart, CartVisibility, ScrollLock};
use crate::observer::{CartRenderer, CartView, LineItemView};

/// Latest markup for each region of the cart drawer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartMarkup {
    /// Contents of the item list (or the empty state).
    pub items_html: String,
    /// Text of the count badge in the navbar.
    pub count_badge: String,
    pub subtotal: String,
    pub delivery: String,
    pub total: String,
    /// Class attribute of the drawer element.
    pub drawer_class: String,
    /// `aria-hidden` of the drawer element.
    pub aria_hidden: bool,
    /// Inline style of `<body>`.
    pub body_style: String,
}

/// Renders the cart drawer as HTML fragments.
#[derive(Debug, Clone)]
pub struct HtmlCartRenderer {
    markup: CartMarkup,
    renders: usize,
}

impl HtmlCartRenderer {
    /// A renderer showing an empty, closed cart.
    pub fn new() -> Self {
        let mut renderer = Self {
            markup: CartMarkup::default(),
            renders: 0,
        };
        renderer.apply(&CartView::project(&Cart::default(), CartVisibility::Closed));
        renderer.visibility_changed(CartVisibility::Closed, ScrollLock::Released);
        renderer
    }

    pub fn markup(&self) -> &CartMarkup {
        &self.markup
    }

    /// Number of `render` calls received.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Full drawer fragment built from the current markup.
    pub fn drawer_html(&self) -> String {
        let m = &self.markup;
        format!(
            r#"<aside class="{}" id="cart-drawer" aria-hidden="{}">
    <header class="cart-header">
        <h2>Your Order</h2>
        <button class="cart-close" data-action="close-cart" aria-label="Close cart">&times;</button>
    </header>
    <ul class="cart-items">
        {}
    </ul>
    <footer class="cart-summary">
        <div class="cart-row"><span>Subtotal</span><span class="cart-subtotal">{}</span></div>
        <div class="cart-row"><span>Delivery</span><span class="cart-delivery">{}</span></div>
        <div class="cart-row cart-total"><span>Total</span><span>{}</span></div>
    </footer>
</aside>"#,
            m.drawer_class, m.aria_hidden, m.items_html, m.subtotal, m.delivery, m.total
        )
    }
}

impl Default for HtmlCartRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl CartRenderer for HtmlCartRenderer {
    fn render(&mut self, view: &CartView) {
        self.renders += 1;
        self.apply(view);
    }

    fn visibility_changed(&mut self, visibility: CartVisibility, lock: ScrollLock) {
        self.markup.drawer_class = drawer_class(visibility);
        self.markup.aria_hidden = !visibility.is_open();
        self.markup.body_style = lock.body_style();
    }
}

impl HtmlCartRenderer {
    fn apply(&mut self, view: &CartView) {
        self.markup.items_html = if view.is_empty() {
            render_empty_state()
        } else {
            view.items.iter().map(render_line_item).collect()
        };
        self.markup.count_badge = view.totals.item_count.to_string();
        self.markup.subtotal = view.totals.subtotal.display();
        self.markup.delivery = view.totals.delivery_fee.display();
        self.markup.total = view.totals.total.display();
    }
}

fn drawer_class(visibility: CartVisibility) -> String {
    match visibility {
        CartVisibility::Open => "cart-drawer is-open".to_string(),
        CartVisibility::Closed => "cart-drawer".to_string(),
    }
}

fn render_line_item(item: &LineItemView) -> String {
    let id = html_escape(item.id.as_str());
    format!(
        r#"<li class="cart-item" data-id="{id}">
            <span class="cart-item-glyph">{}</span>
            <div class="cart-item-info">
                <div class="cart-item-name">{}</div>
                <div class="cart-item-price">{}</div>
            </div>
            <div class="cart-item-qty">
                <button data-action="qty-decrease" data-id="{id}" aria-label="Decrease quantity">&minus;</button>
                <span>{}</span>
                <button data-action="qty-increase" data-id="{id}" aria-label="Increase quantity">+</button>
            </div>
            <span class="cart-item-total">{}</span>
        </li>"#,
        html_escape(&item.glyph),
        html_escape(&item.name),
        item.unit_price.display(),
        item.quantity,
        item.line_total.display(),
    )
}

fn render_empty_state() -> String {
    r#"<li class="cart-empty">Your cart is empty</li>"#.to_string()
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::{Cart, GlyphTable};
    use crate::money::{Currency, Money};

    fn priced_cart() -> Cart {
        Cart::configured(
            Currency::USD,
            GlyphTable::default(),
            Money::new(299, Currency::USD),
        )
    }

    fn view_of(cart: &Cart) -> CartView {
        CartView::project(cart, CartVisibility::Closed)
    }

    #[test]
    fn test_initial_markup_is_empty_state() {
        let renderer = HtmlCartRenderer::new();
        assert!(renderer.markup().items_html.contains("Your cart is empty"));
        assert_eq!(renderer.markup().count_badge, "0");
        assert!(renderer.markup().aria_hidden);
        assert_eq!(renderer.render_count(), 0);
    }

    #[test]
    fn test_unsubscribed_drawer_shows_zero_amounts() {
        let renderer = HtmlCartRenderer::new();
        let m = renderer.markup();
        assert_eq!(m.subtotal, "$0.00");
        assert_eq!(m.delivery, "$0.00");
        assert_eq!(m.total, "$0.00");
        assert!(renderer
            .drawer_html()
            .contains(r#"<span class="cart-subtotal">$0.00</span>"#));
    }

    #[test]
    fn test_render_items_and_totals() {
        let mut cart = priced_cart();
        cart.add("1", "Burger", "5.00").unwrap();
        cart.add("1", "Burger", "5.00").unwrap();

        let mut renderer = HtmlCartRenderer::new();
        renderer.render(&view_of(&cart));

        let m = renderer.markup();
        assert!(m.items_html.contains(r#"data-action="qty-increase" data-id="1""#));
        assert!(m.items_html.contains("🍔"));
        assert_eq!(m.count_badge, "2");
        assert_eq!(m.subtotal, "$10.00");
        assert_eq!(m.delivery, "$2.99");
        assert_eq!(m.total, "$12.99");
        assert_eq!(renderer.render_count(), 1);
    }

    #[test]
    fn test_render_escapes_names() {
        let mut cart = Cart::default();
        cart.add("x\"1", "<b>Fish & Chips</b>", "9").unwrap();

        let mut renderer = HtmlCartRenderer::new();
        renderer.render(&view_of(&cart));

        let html = &renderer.markup().items_html;
        assert!(html.contains("&lt;b&gt;Fish &amp; Chips&lt;/b&gt;"));
        assert!(html.contains(r#"data-id="x&quot;1""#));
    }

    #[test]
    fn test_visibility_mirrors_attributes() {
        let mut renderer = HtmlCartRenderer::new();
        renderer.visibility_changed(
            CartVisibility::Open,
            ScrollLock::Engaged { padding_right_px: 17 },
        );
        let m = renderer.markup();
        assert_eq!(m.drawer_class, "cart-drawer is-open");
        assert!(!m.aria_hidden);
        assert_eq!(m.body_style, "overflow: hidden; padding-right: 17px");
        assert!(renderer.drawer_html().contains(r#"aria-hidden="false""#));

        renderer.visibility_changed(CartVisibility::Closed, ScrollLock::Released);
        assert_eq!(renderer.markup().body_style, "");
        assert!(renderer.markup().aria_hidden);
    }

    #[test]
    fn test_empty_cart_shows_zero_delivery() {
        let mut renderer = HtmlCartRenderer::new();
        renderer.render(&view_of(&Cart::default()));
        assert_eq!(renderer.markup().delivery, "$0.00");
        assert_eq!(renderer.markup().total, "$0.00");
    }
}
