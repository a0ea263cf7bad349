//! Configuration types for the ordering client

use crate::cart::{CartLine, default_seed_lines};
use crate::catalog::Catalog;
use crate::order::DEFAULT_ESTIMATED_DELIVERY;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Restaurant branding and delivery estimate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    /// Name shown in the header and footer
    pub name: String,

    /// Footer tagline
    pub tagline: String,

    /// Hero headline on the home screen
    pub headline: String,

    /// Delivery estimate printed on the confirmation
    pub estimated_delivery: String,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: "Ecliptic Eats".to_string(),
            tagline: "A premium digital dining experience.".to_string(),
            headline: "A Culinary Journey Beyond the Stars".to_string(),
            estimated_delivery: DEFAULT_ESTIMATED_DELIVERY.to_string(),
        }
    }
}

/// Initial cart contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Lines present when the client starts
    pub lines: Vec<CartLine>,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            lines: default_seed_lines(),
        }
    }
}

/// Configuration for the ordering client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub restaurant: RestaurantConfig,

    /// Menu and featured items
    #[serde(default)]
    pub catalog: Catalog,

    /// Seeded cart
    #[serde(default)]
    pub cart: CartConfig,

    /// Account details, order history and addresses
    #[serde(default)]
    pub profile: Profile,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            source: e,
        })?;

        fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    /// Generate a sample configuration file content
    pub fn sample_config() -> String {
        r#"# Ecliptic Eats Configuration File
# This file uses TOML format (https://toml.io)
# Every section is optional; missing sections use the built-in defaults.

[restaurant]
name = "Ecliptic Eats"
tagline = "A premium digital dining experience."
headline = "A Culinary Journey Beyond the Stars"
# Shown on the order confirmation
estimated_delivery = "35-45 minutes"

# Menu items. Prices are in cents.
# category: "appetizers", "mains", "desserts" or "drinks"
# image_url may be empty; a placeholder image is shown instead
[[catalog.items]]
id = "main1"
name = "Cosmic Carbonara"
price_cents = 2250
category = "mains"
image_url = ""

[[catalog.featured]]
id = "featured1"
name = "Stellar Steak Frites"
price_cents = 2999
category = "mains"

# Lines in the cart when the client starts
[[cart.lines]]
item_id = "main1"
name = "Cosmic Carbonara"
price_cents = 2250
quantity = 1

[profile.details]
name = "John Doe"
email = "john.doe@example.com"

# status: "Delivered", "Processing" or "Cancelled"
[[profile.order_history]]
id = "ORD001"
date = "2023-10-26"
total_cents = 4250
status = "Delivered"

[[profile.addresses]]
label = "Home"
address = "123 Cosmic Lane, Galaxy City, 12345"
"#
        .to_string()
    }
}

/// Errors that can occur when loading or saving configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read configuration file
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse configuration file
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to write configuration file
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to serialize configuration
    SerializeError {
        source: toml::ser::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
            ConfigError::WriteError { path, source } => {
                write!(f, "Failed to write config file '{}': {}", path.display(), source)
            }
            ConfigError::SerializeError { source } => {
                write!(f, "Failed to serialize config: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::ReadError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::WriteError { source, .. } => Some(source),
            ConfigError::SerializeError { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Config").join("ecliptic.toml");

        let mut config = AppConfig::default();
        config.restaurant.estimated_delivery = "20-25 minutes".to_string();
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_sample_config_parses() {
        let config: AppConfig = toml::from_str(&AppConfig::sample_config()).unwrap();
        assert_eq!(config.catalog.items.len(), 1);
        assert_eq!(config.catalog.items[0].category, Category::Mains);
        assert!(config.catalog.items[0].image_url.is_empty());
        assert_eq!(config.cart.lines.len(), 1);
        assert_eq!(config.profile.order_history[0].total_cents, 4250);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = toml::from_str("[restaurant]\nname = \"Nova\"\n").unwrap();
        assert_eq!(config.restaurant.name, "Nova");
        assert_eq!(config.restaurant.estimated_delivery, DEFAULT_ESTIMATED_DELIVERY);
        assert_eq!(config.catalog.items.len(), 9);
        assert_eq!(config.cart.lines, default_seed_lines());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load_from_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
