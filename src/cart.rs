//! Shopping cart
//!
//! Lines keyed by catalog item id, with a one-level-per-add undo stack.

use crate::catalog::{Catalog, CatalogItem, format_price};
use crate::error::{Error, Result};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A catalog item with a quantity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub name: String,
    pub price_cents: u32,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartLine {
    /// Line with quantity 1
    pub fn new(item: &CatalogItem) -> Self {
        Self {
            item_id: item.id.clone(),
            name: item.name.clone(),
            price_cents: item.price_cents,
            quantity: 1,
        }
    }

    /// Price times quantity
    pub fn line_total_cents(&self) -> u32 {
        self.price_cents.saturating_mul(self.quantity)
    }
}

/// Toast shown after an item was added
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartNotice {
    pub item_id: String,
    pub message: String,
}

/// Read-only view of the cart for the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub item_count: usize,
    pub subtotal_cents: u32,
}

impl CartSnapshot {
    /// Subtotal formatted for display
    pub fn display_subtotal(&self) -> String {
        format_price(self.subtotal_cents)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Source of the cart contents shown in the header
pub trait CartStore {
    fn cart_snapshot(&self) -> CartSnapshot;
}

/// Shopping cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    undo_stack: Vec<String>,
}

impl Cart {
    /// Empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Cart pre-filled with the given lines; zero-quantity lines are dropped
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| l.quantity > 0).collect(),
            undo_stack: Vec::new(),
        }
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Add one unit of an item
    pub fn add(&mut self, item: &CatalogItem) -> CartNotice {
        match self.lines.iter_mut().find(|l| l.item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(item)),
        }
        self.undo_stack.push(item.id.clone());

        info!(item_id = %item.id, lines = self.lines.len(), "Added item to cart");

        CartNotice {
            item_id: item.id.clone(),
            message: t!("cart_added", name = item.name).to_string(),
        }
    }

    /// Add one unit of the catalog item with the given id
    pub fn add_by_id(&mut self, catalog: &Catalog, id: &str) -> Result<CartNotice> {
        let item = catalog
            .find(id)
            .ok_or_else(|| Error::UnknownItem(id.to_string()))?;
        Ok(self.add(item))
    }

    /// Revert the most recent add; returns the reverted item id
    pub fn undo_last_add(&mut self) -> Option<String> {
        while let Some(id) = self.undo_stack.pop() {
            // The line may have been removed since it was added
            let Some(pos) = self.lines.iter().position(|l| l.item_id == id) else {
                continue;
            };

            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
            debug!(item_id = %id, "Undid add to cart");
            return Some(id);
        }
        None
    }

    /// Remove a line entirely; returns whether it existed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.item_id != id);
        let removed = self.lines.len() != before;
        if removed {
            info!(item_id = %id, "Removed line from cart");
        }
        removed
    }

    /// Sum of price times quantity
    pub fn subtotal_cents(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.line_total_cents()))
    }

    /// Number of lines, not units
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty the cart and forget undo history
    pub fn clear(&mut self) {
        self.lines.clear();
        self.undo_stack.clear();
    }
}

impl CartStore for Cart {
    fn cart_snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
            item_count: self.item_count(),
            subtotal_cents: self.subtotal_cents(),
        }
    }
}

/// Lines the cart starts with when nothing is configured
pub fn default_seed_lines() -> Vec<CartLine> {
    vec![
        CartLine {
            item_id: "featured1".to_string(),
            name: "Stellar Steak Frites".to_string(),
            price_cents: 2999,
            quantity: 1,
        },
        CartLine {
            item_id: "main1".to_string(),
            name: "Cosmic Carbonara".to_string(),
            price_cents: 2250,
            quantity: 1,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::default()
    }

    #[test]
    fn test_add_increments_existing_line() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_by_id(&catalog, "app1").unwrap();
        cart.add_by_id(&catalog, "app1").unwrap();
        cart.add_by_id(&catalog, "drink1").unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.subtotal_cents(), 1450 * 2 + 1500);
    }

    #[test]
    fn test_notice_names_item() {
        let catalog = catalog();
        let mut cart = Cart::new();
        let notice = cart.add_by_id(&catalog, "main1").unwrap();
        assert_eq!(notice.item_id, "main1");
        assert!(notice.message.contains("Cosmic Carbonara"));
    }

    #[test]
    fn test_unknown_item() {
        let mut cart = Cart::new();
        let err = cart.add_by_id(&catalog(), "ghost").unwrap_err();
        assert!(matches!(err, Error::UnknownItem(id) if id == "ghost"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_undo_reverts_in_order() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_by_id(&catalog, "app1").unwrap();
        cart.add_by_id(&catalog, "app1").unwrap();
        cart.add_by_id(&catalog, "app2").unwrap();

        assert_eq!(cart.undo_last_add().as_deref(), Some("app2"));
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.undo_last_add().as_deref(), Some("app1"));
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.undo_last_add().as_deref(), Some("app1"));
        assert!(cart.is_empty());
        assert_eq!(cart.undo_last_add(), None);
    }

    #[test]
    fn test_undo_skips_removed_lines() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.add_by_id(&catalog, "app1").unwrap();
        cart.add_by_id(&catalog, "app2").unwrap();
        assert!(cart.remove("app2"));
        assert!(!cart.remove("app2"));

        assert_eq!(cart.undo_last_add().as_deref(), Some("app1"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_default_seed_snapshot() {
        let cart = Cart::from_lines(default_seed_lines());
        let snapshot = cart.cart_snapshot();
        assert_eq!(snapshot.item_count, 2);
        assert_eq!(snapshot.display_subtotal(), "$52.49");
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::from_lines(default_seed_lines());
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal_cents(), 0);
    }
}
