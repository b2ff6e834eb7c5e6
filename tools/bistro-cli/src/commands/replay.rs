//! Replay a script of page actions against a fresh cart.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context as _, Result};
use bistro_cart::{CartAction, CartStore, CartView, HtmlCartRenderer, Toast, ToastQueue};
use serde::{Deserialize, Serialize};

use super::ReplayArgs;
use crate::context::Context;
use crate::output::toast_badge;

/// A replay script: actions in click order.
#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub actions: Vec<CartAction>,
}

impl Script {
    /// Load a `.toml` or `.json` script.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        Self::parse(&content, path.extension().is_some_and(|ext| ext == "json"))
            .with_context(|| format!("Failed to parse script: {}", path.display()))
    }

    fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }
}

/// An action the store refused.
#[derive(Debug, Serialize)]
pub struct Rejection {
    /// 1-based position in the script.
    pub step: usize,
    pub action: &'static str,
    pub error: String,
}

/// Final state after a replay.
#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub cart: CartView,
    pub toasts: Vec<Toast>,
    pub rejected: Vec<Rejection>,
    #[serde(skip)]
    pub drawer_html: String,
}

/// Run the replay command.
pub fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let script_path = ctx.resolve_path(&args.script);
    let script = Script::load(&script_path)?;
    ctx.output.debug(&format!(
        "Replaying {} actions from {}",
        script.actions.len(),
        script_path.display()
    ));

    let report = replay(&script, ctx, args.scrollbar_width)?;

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    print_report(&report, ctx);
    if args.html {
        ctx.output.header("Drawer markup");
        ctx.output.raw(&report.drawer_html);
    }
    Ok(())
}

/// Drive a store wired to an HTML renderer and a toast queue.
pub fn replay(script: &Script, ctx: &Context, scrollbar_width: u32) -> Result<ReplayReport> {
    let settings = ctx.config.settings().context("Invalid cart configuration")?;
    let toasts = Rc::new(RefCell::new(ToastQueue::new(settings.toast_capacity)));
    let html = Rc::new(RefCell::new(HtmlCartRenderer::new()));

    let mut store = CartStore::new(settings, Box::new(toasts.clone()));
    store.set_scrollbar_width(scrollbar_width);
    store.subscribe(Box::new(html.clone()));

    let mut rejected = Vec::new();
    for (index, action) in script.actions.iter().enumerate() {
        tracing::debug!(step = index + 1, action = action.name(), "dispatching");
        if let Err(e) = store.dispatch(action) {
            ctx.output
                .warn(&format!("Step {} ({}) rejected: {}", index + 1, action.name(), e));
            rejected.push(Rejection {
                step: index + 1,
                action: action.name(),
                error: e.to_string(),
            });
        }
    }

    let drawer_html = html.borrow().drawer_html();
    let toasts = toasts.borrow_mut().drain();
    Ok(ReplayReport {
        cart: store.view(),
        toasts,
        rejected,
        drawer_html,
    })
}

fn print_report(report: &ReplayReport, ctx: &Context) {
    let out = &ctx.output;
    out.header("Cart");

    if report.cart.is_empty() {
        out.info("Cart is empty");
    } else {
        let widths = [4, 24, 10, 5, 10];
        out.table_row(&["", "ITEM", "PRICE", "QTY", "TOTAL"], &widths);
        for item in &report.cart.items {
            let price = item.unit_price.display();
            let quantity = item.quantity.to_string();
            let line_total = item.line_total.display();
            out.table_row(
                &[
                    item.glyph.as_str(),
                    item.name.as_str(),
                    price.as_str(),
                    quantity.as_str(),
                    line_total.as_str(),
                ],
                &widths,
            );
        }
    }

    let totals = &report.cart.totals;
    out.kv("Items", &totals.item_count.to_string());
    out.kv("Subtotal", &totals.subtotal.display());
    out.kv("Delivery", &totals.delivery_fee.display());
    out.kv("Total", &totals.total.display());
    out.kv("Drawer", report.cart.visibility.as_str());

    if !report.toasts.is_empty() {
        out.header("Toasts");
        for toast in &report.toasts {
            out.list_item(&format!("[{}] {}", toast_badge(toast.kind), toast.message));
        }
    }

    if report.rejected.is_empty() {
        out.success("All actions applied");
    } else {
        out.warn(&format!("{} action(s) rejected", report.rejected.len()));
    }
}
