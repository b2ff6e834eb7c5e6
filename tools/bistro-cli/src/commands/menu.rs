//! Menu listing with category filtering.

use anyhow::{Context as _, Result};
use bistro_cart::cart::GlyphTable;
use bistro_cart::{CategoryFilter, MenuItem};

use super::MenuArgs;
use crate::context::Context;

/// Run the menu command.
pub fn run(args: MenuArgs, ctx: &Context) -> Result<()> {
    let menu = ctx.config.menu().context("Invalid menu configuration")?;
    let settings = ctx.config.settings().context("Invalid cart configuration")?;
    let filter = CategoryFilter::parse(&args.category)?;

    let items: Vec<&MenuItem> = menu.filter(&filter).collect();

    if ctx.output.is_json() {
        ctx.output.json(&items);
        return Ok(());
    }

    let categories: Vec<&str> = menu.categories().iter().map(|c| c.as_str()).collect();
    ctx.output.header("Menu");
    ctx.output.kv("Categories", &format!("all, {}", categories.join(", ")));

    if items.is_empty() {
        ctx.output.info(&format!("No items in category '{}'", args.category));
        return Ok(());
    }

    print_items(&items, &settings.glyphs, ctx);
    Ok(())
}

fn print_items(items: &[&MenuItem], glyphs: &GlyphTable, ctx: &Context) {
    let widths = [4, 4, 20, 10, 10];
    ctx.output
        .table_row(&["ID", "", "NAME", "PRICE", "CATEGORY"], &widths);
    for item in items {
        let price = item.price.display();
        ctx.output.table_row(
            &[
                item.id.as_str(),
                glyphs.lookup(&item.id),
                item.name.as_str(),
                price.as_str(),
                item.category.as_str(),
            ],
            &widths,
        );
        if !item.description.is_empty() {
            ctx.output.kv("", &item.description);
        }
    }
}
