//! Menu catalog and category filtering.

use serde::{Deserialize, Serialize};

use crate::action::CartAction;
use crate::error::CartError;
use crate::ids::{CategoryId, ItemId};
use crate::money::{Currency, Money};

/// A menu entry as written in configuration (price as a decimal string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub category: String,
}

impl MenuEntry {
    fn new(id: &str, name: &str, description: &str, price: &str, category: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            price: price.to_string(),
            category: category.to_string(),
        }
    }
}

/// The menu shipped with the site.
pub fn default_menu_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("1", "Classic Burger", "Beef patty, cheddar, house sauce", "8.99", "burgers"),
        MenuEntry::new("2", "Margherita Pizza", "Tomato, mozzarella, basil", "12.50", "pizza"),
        MenuEntry::new("3", "Street Tacos", "Three corn tortillas, salsa verde", "9.25", "mexican"),
        MenuEntry::new("4", "Salmon Nigiri", "Six pieces, fresh wasabi", "14.00", "sushi"),
        MenuEntry::new("5", "Garden Salad", "Mixed greens, lemon vinaigrette", "7.50", "healthy"),
        MenuEntry::new("6", "Carbonara", "Guanciale, pecorino, egg yolk", "13.75", "pasta"),
        MenuEntry::new("7", "Tonkotsu Ramen", "Pork broth, chashu, soft egg", "13.00", "asian"),
        MenuEntry::new("8", "Cheesecake", "New York style, berry compote", "6.25", "desserts"),
    ]
}

/// A priced menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: CategoryId,
}

impl MenuItem {
    /// The action dispatched by this item's "add to cart" button.
    pub fn add_action(&self) -> CartAction {
        CartAction::Add {
            id: self.id.to_string(),
            name: self.name.clone(),
            price: self.price.display_amount(),
        }
    }
}

/// Which menu items a filter button shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryId),
}

impl CategoryFilter {
    /// Parse a filter button value; `"all"` (any case) shows everything.
    pub fn parse(raw: &str) -> Result<Self, CartError> {
        if raw.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        CategoryId::parse(raw).map(CategoryFilter::Only)
    }

    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => &item.category == category,
        }
    }
}

/// Menu items in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Build a menu from configured entries, validating ids and prices.
    pub fn from_entries(entries: &[MenuEntry], currency: Currency) -> Result<Self, CartError> {
        let mut items: Vec<MenuItem> = Vec::with_capacity(entries.len());
        for entry in entries {
            let id = ItemId::parse(&entry.id)?;
            if items.iter().any(|item| item.id == id) {
                return Err(CartError::invalid(format!("duplicate menu item id '{}'", id)));
            }
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(CartError::invalid(format!("menu item '{}' has no name", id)));
            }
            items.push(MenuItem {
                price: Money::parse(&entry.price, currency)?,
                category: CategoryId::parse(&entry.category)?,
                name: name.to_string(),
                description: entry.description.trim().to_string(),
                id,
            });
        }
        Ok(Self { items })
    }

    /// Items matching `filter`, in menu order.
    pub fn filter<'a>(&'a self, filter: &'a CategoryFilter) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |item| filter.matches(item))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&CategoryId> {
        let mut seen: Vec<&CategoryId> = Vec::new();
        for item in &self.items {
            if !seen.contains(&&item.category) {
                seen.push(&item.category);
            }
        }
        seen
    }

    pub fn get(&self, id: &ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Menu {
        Menu::from_entries(&default_menu_entries(), Currency::USD).unwrap()
    }

    #[test]
    fn test_default_menu_parses() {
        let menu = menu();
        assert_eq!(menu.len(), 8);
        assert_eq!(menu.get(&ItemId::new("2")).unwrap().price.amount_cents, 1250);
    }

    #[test]
    fn test_filter_all() {
        let menu = menu();
        assert_eq!(menu.filter(&CategoryFilter::All).count(), menu.len());
    }

    #[test]
    fn test_filter_category() {
        let menu = menu();
        let filter = CategoryFilter::parse("pizza").unwrap();
        let names: Vec<&str> = menu.filter(&filter).map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Margherita Pizza"]);

        let filter = CategoryFilter::parse("drinks").unwrap();
        assert_eq!(menu.filter(&filter).count(), 0);
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse(" ALL ").unwrap(), CategoryFilter::All);
        assert!(CategoryFilter::parse("").is_err());
    }

    #[test]
    fn test_categories_first_seen_order() {
        let entries = vec![
            MenuEntry::new("a", "A", "", "1", "pizza"),
            MenuEntry::new("b", "B", "", "1", "burgers"),
            MenuEntry::new("c", "C", "", "1", "pizza"),
        ];
        let menu = Menu::from_entries(&entries, Currency::USD).unwrap();
        let categories: Vec<&str> = menu.categories().iter().map(|c| c.as_str()).collect();
        assert_eq!(categories, vec!["pizza", "burgers"]);
    }

    #[test]
    fn test_rejects_bad_entries() {
        let dup = vec![
            MenuEntry::new("1", "A", "", "1", "x"),
            MenuEntry::new("1", "B", "", "1", "x"),
        ];
        assert!(Menu::from_entries(&dup, Currency::USD).is_err());

        let bad_price = vec![MenuEntry::new("1", "A", "", "free", "x")];
        assert!(Menu::from_entries(&bad_price, Currency::USD).is_err());
    }

    #[test]
    fn test_add_action_round_trips_price() {
        let menu = menu();
        let item = menu.get(&ItemId::new("1")).unwrap();
        assert_eq!(
            item.add_action(),
            CartAction::Add {
                id: "1".into(),
                name: "Classic Burger".into(),
                price: "8.99".into(),
            }
        );
    }
}
