//! Ecliptic Eats - terminal ordering client for a single restaurant
//!
//! This library provides:
//! - A menu catalog with categories and featured dishes
//! - A cart store with add, undo and subtotal
//! - A three-step checkout wizard (delivery, payment, confirm) with
//!   per-step field validation
//! - Order submission behind a trait, with a local stub submitter
//! - Profile details, order history and saved addresses
//! - An interactive Ratatui interface and a scriptable CLI

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod order;
pub mod profile;
pub mod tui;
pub mod validation;

pub use cart::{Cart, CartLine, CartSnapshot, CartStore};
pub use catalog::{Catalog, CatalogItem, Category, format_price};
pub use checkout::{
    CheckoutError, CheckoutField, CheckoutForm, CheckoutStep, CheckoutWizard, FieldError,
    LocalOrderSubmitter, OrderSubmitter, SubmitError, complete_checkout,
};
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use error::{Error, Result};
pub use i18n::init_locale;
pub use navigation::{Navigator, Route, RouteHistory};
pub use order::{OrderNumber, OrderReceipt};
pub use profile::Profile;
pub use tui::{TuiApp, TuiResult, should_run_interactive};
