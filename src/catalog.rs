//! Menu catalog
//!
//! Categories, dishes and the featured selection shown on the home screen.

use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Image shown when an item has no picture
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/400x400.png/000000/FFFFFF?text=Ecliptic+Eats";

/// Format a price in cents as `$X.YY`
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Menu category, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizers,
    /// Tab selected when the menu opens
    #[default]
    Mains,
    Desserts,
    Drinks,
}

impl Category {
    /// Categories in tab order
    pub const ALL: [Category; 4] = [
        Category::Appetizers,
        Category::Mains,
        Category::Desserts,
        Category::Drinks,
    ];

    /// Tab position
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Category at a tab position, wrapping around
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Localized tab label
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Category::Appetizers => t!("category_appetizers"),
            Category::Mains => t!("category_mains"),
            Category::Desserts => t!("category_desserts"),
            Category::Drinks => t!("category_drinks"),
        }
    }
}

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Stable item identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Price in cents
    pub price_cents: u32,
    /// Picture URL, may be empty
    #[serde(default)]
    pub image_url: String,
    /// Menu category
    #[serde(default)]
    pub category: Category,
}

impl CatalogItem {
    /// Create an item
    pub fn new(id: &str, name: &str, price_cents: u32, category: Category, image_url: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            image_url: image_url.to_string(),
            category,
        }
    }

    /// Price formatted for display
    pub fn display_price(&self) -> String {
        format_price(self.price_cents)
    }

    /// Picture URL, falling back to the placeholder
    pub fn image_or_placeholder(&self) -> &str {
        if self.image_url.is_empty() {
            PLACEHOLDER_IMAGE_URL
        } else {
            &self.image_url
        }
    }
}

/// Full menu plus the home screen selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Items on the menu
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    /// Items featured on the home screen
    #[serde(default)]
    pub featured: Vec<CatalogItem>,
}

impl Catalog {
    /// Items of one category in catalog order
    pub fn items_in(&self, category: Category) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Find an item by id, menu first then featured
    pub fn find(&self, id: &str) -> Option<&CatalogItem> {
        self.items
            .iter()
            .chain(self.featured.iter())
            .find(|item| item.id == id)
    }
}

const PEXELS_QUERY: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

fn pexels(photo: u32) -> String {
    format!(
        "https://images.pexels.com/photos/{0}/pexels-photo-{0}.jpeg{1}",
        photo, PEXELS_QUERY
    )
}

impl Default for Catalog {
    fn default() -> Self {
        let item = |id: &str, name: &str, cents: u32, category: Category, photo: u32| {
            CatalogItem::new(id, name, cents, category, &pexels(photo))
        };

        Self {
            items: vec![
                item("app1", "Starlight Bruschetta", 1450, Category::Appetizers, 1437318),
                item("app2", "Galaxy Glazed Wings", 1600, Category::Appetizers, 2338407),
                item("main1", "Cosmic Carbonara", 2250, Category::Mains, 1279330),
                item("main2", "Nebula Steak Frites", 3400, Category::Mains, 3186654),
                item("main3", "Supernova Salmon", 2800, Category::Mains, 718742),
                item("main4", "Meteorite Margherita Pizza", 1900, Category::Mains, 2097090),
                item("dessert1", "Dark Matter Chocolate Cake", 1200, Category::Desserts, 1126359),
                item("dessert2", "Solar Flare Cheesecake", 1150, Category::Desserts, 2144112),
                item("drink1", "Orion Old Fashioned", 1500, Category::Drinks, 1200348),
            ],
            featured: vec![
                item("featured1", "Stellar Steak Frites", 2999, Category::Mains, 3662136),
                item("featured2", "Cosmic Carbonara", 2250, Category::Mains, 1279330),
                item("featured3", "Galaxy Glazed Salmon", 2675, Category::Mains, 3296279),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1450), "$14.50");
        assert_eq!(format_price(5), "$0.05");
        assert_eq!(format_price(2999), "$29.99");
    }

    #[test]
    fn test_items_in_category() {
        let catalog = Catalog::default();
        let mains: Vec<_> = catalog
            .items_in(Category::Mains)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(mains, vec!["main1", "main2", "main3", "main4"]);
        assert_eq!(catalog.items_in(Category::Drinks).len(), 1);
    }

    #[test]
    fn test_category_tabs() {
        assert_eq!(Category::default(), Category::Mains);
        assert_eq!(Category::Mains.index(), 1);
        assert_eq!(Category::from_index(4), Category::Appetizers);
    }

    #[test]
    fn test_find_and_placeholder() {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.find("featured3").unwrap().name, "Galaxy Glazed Salmon");
        assert!(catalog.find("nope").is_none());

        catalog.items[0].image_url.clear();
        assert_eq!(catalog.items[0].image_or_placeholder(), PLACEHOLDER_IMAGE_URL);
    }
}
