//! End-to-end scenarios: page actions through the store to the HTML surface.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use bistro_cart::prelude::*;

fn fee() -> Money {
    Money::new(299, Currency::USD)
}

fn wired_store() -> (CartStore, Rc<RefCell<HtmlCartRenderer>>, Rc<RefCell<ToastQueue>>) {
    let toasts = Rc::new(RefCell::new(ToastQueue::new(5)));
    let html = Rc::new(RefCell::new(HtmlCartRenderer::new()));
    let mut store = CartStore::new(CartSettings::default(), Box::new(toasts.clone()));
    store.subscribe(Box::new(html.clone()));
    (store, html, toasts)
}

fn click(pairs: &[(&str, &str)]) -> Option<CartAction> {
    let dataset: BTreeMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    CartAction::from_dataset(&dataset).unwrap()
}

#[test]
fn burger_twice_then_totals() {
    let (mut store, html, _) = wired_store();
    store.add("1", "Burger", "5.00").unwrap();
    store.add("1", "Burger", "5.00").unwrap();

    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().items()[0].quantity, 2);
    assert_eq!(store.subtotal().amount_cents, 1000);
    assert_eq!(store.total_with(fee()).unwrap().amount_cents, 1299);
    assert_eq!(html.borrow().markup().total, "$12.99");
}

#[test]
fn pizza_added_then_removed() {
    let (mut store, html, _) = wired_store();
    store.add("2", "Pizza", "10").unwrap();
    store.change_quantity("2", -1).unwrap();

    assert!(store.cart().get(&ItemId::new("2")).is_none());
    assert_eq!(store.item_count(), 0);
    assert_eq!(store.total_with(fee()).unwrap().amount_cents, 0);
    assert!(html.borrow().markup().items_html.contains("Your cart is empty"));
}

#[test]
fn removing_full_quantity_always_removes() {
    let (mut store, _, _) = wired_store();
    for _ in 0..4 {
        store.add("6", "Carbonara", "13.75").unwrap();
    }
    let quantity = store.cart().get(&ItemId::new("6")).unwrap().quantity;
    assert_eq!(
        store.change_quantity("6", -quantity).unwrap(),
        QuantityChange::Removed
    );
    assert!(store.cart().is_empty());
}

#[test]
fn one_render_per_mutation() {
    let (mut store, html, _) = wired_store();
    store.add("1", "Burger", "5").unwrap();
    store.add("2", "Pizza", "10").unwrap();
    store.change_quantity("1", 1).unwrap();
    store.change_quantity("missing", 1).unwrap();
    let _ = store.add("3", "Tacos", "not-a-price");
    store.open();

    // initial sync + three successful mutations
    assert_eq!(html.borrow().render_count(), 4);
}

#[test]
fn clicks_drive_the_drawer() {
    let (mut store, html, toasts) = wired_store();
    store.set_scrollbar_width(12);

    let menu = CartConfig::default().menu().unwrap();
    let filter = CategoryFilter::parse("pizza").unwrap();
    let pizza = menu.filter(&filter).next().unwrap();
    store.dispatch(&pizza.add_action()).unwrap();

    let clicks = [
        click(&[("action", "qty-increase"), ("id", "2")]),
        click(&[("action", "open-cart")]),
        click(&[("action", "toggle-nav")]),
    ];
    for action in clicks.iter().flatten() {
        store.dispatch(action).unwrap();
    }

    let markup = html.borrow().markup().clone();
    assert_eq!(markup.count_badge, "2");
    assert_eq!(markup.subtotal, "$25.00");
    assert_eq!(markup.total, "$27.99");
    assert_eq!(markup.drawer_class, "cart-drawer is-open");
    assert_eq!(markup.body_style, "overflow: hidden; padding-right: 12px");
    assert_eq!(
        toasts.borrow().latest().unwrap().message,
        "Margherita Pizza added to cart"
    );

    store.dispatch(&click(&[("action", "close-cart")]).unwrap()).unwrap();
    assert_eq!(html.borrow().markup().body_style, "");
}

#[test]
fn independent_stores_do_not_share_state() {
    let (mut first, _, _) = wired_store();
    let mut second = CartStore::new(CartSettings::default(), Box::new(SilentNotifier));
    first.add("1", "Burger", "5").unwrap();
    second.add("2", "Pizza", "10").unwrap();

    assert!(first.cart().get(&ItemId::new("2")).is_none());
    assert!(second.cart().get(&ItemId::new("1")).is_none());
    assert_eq!(second.item_count(), 1);
}

#[test]
fn invalid_price_is_reported_not_stored() {
    let (mut store, _, toasts) = wired_store();
    let err = store.add("1", "Burger", "NaN").unwrap_err();

    assert!(matches!(err, CartError::InvalidInput(_)));
    assert!(store.cart().is_empty());
    let toast = toasts.borrow().latest().cloned().unwrap();
    assert_eq!(toast.kind, ToastKind::Error);
    assert!(toast.message.starts_with("Could not add item"));
}

#[test]
fn testimonial_carousel_wraps() {
    let mut carousel = CartConfig::default().carousel().unwrap();
    let first = carousel.current().unwrap().author.clone();
    for _ in 0..carousel.len() {
        carousel.next();
    }
    assert_eq!(carousel.current().unwrap().author, first);
}
