//! CLI argument parsing with clap

use crate::catalog::Category;
use crate::checkout::{CheckoutField, CheckoutForm};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Ecliptic Eats - Terminal restaurant ordering client
///
/// Browse the menu, manage the cart and check out from the terminal.
/// Run without arguments for the interactive interface.
#[derive(Parser, Debug)]
#[command(name = "ecliptic-eats")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file (TOML format)
    ///
    /// Also accepts a bare name, resolved against the Config directory
    /// next to the executable.
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long, global = true)]
    pub json_log: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Non-interactive commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the menu
    Menu {
        /// Only print one category
        #[arg(short, long, value_enum)]
        category: Option<Category>,
    },
    /// Print the cart and subtotal
    Cart,
    /// Place an order without the interactive interface
    Checkout(CheckoutArgs),
    /// Print order history and saved addresses
    Profile,
}

/// Delivery and payment details for a headless checkout
#[derive(Args, Debug, Clone, Default)]
pub struct CheckoutArgs {
    /// Full name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Street address
    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub city: String,

    /// Five digit zip code
    #[arg(long, default_value = "")]
    pub zip_code: String,

    #[arg(long, default_value = "")]
    pub card_number: String,

    /// MM/YY
    #[arg(long, default_value = "")]
    pub expiry_date: String,

    #[arg(long, default_value = "")]
    pub cvc: String,
}

impl CheckoutArgs {
    /// Build a checkout form holding every argument
    pub fn to_form(&self) -> CheckoutForm {
        CheckoutForm::with_defaults([
            (CheckoutField::Name, self.name.clone()),
            (CheckoutField::Address, self.address.clone()),
            (CheckoutField::City, self.city.clone()),
            (CheckoutField::ZipCode, self.zip_code.clone()),
            (CheckoutField::CardNumber, self.card_number.clone()),
            (CheckoutField::ExpiryDate, self.expiry_date.clone()),
            (CheckoutField::Cvc, self.cvc.clone()),
        ])
    }
}

impl Cli {
    /// Get config file name (without extension) for log naming
    pub fn config_name(&self) -> Option<String> {
        self.config.as_ref().and_then(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_checkout() {
        let cli = Cli::parse_from([
            "ecliptic-eats",
            "--json",
            "checkout",
            "--name",
            "Jane Doe",
            "--zip-code",
            "98765",
            "--card-number",
            "4111111111111111",
        ]);
        assert!(cli.json);
        let Some(Command::Checkout(args)) = cli.command else {
            panic!("expected checkout command");
        };
        let form = args.to_form();
        assert_eq!(form.value(CheckoutField::Name), "Jane Doe");
        assert_eq!(form.value(CheckoutField::ZipCode), "98765");
        assert_eq!(form.value(CheckoutField::Cvc), "");
    }

    #[test]
    fn test_parse_menu_category() {
        let cli = Cli::parse_from(["ecliptic-eats", "menu", "--category", "desserts", "-C", "night"]);
        assert!(matches!(
            cli.command,
            Some(Command::Menu {
                category: Some(Category::Desserts)
            })
        ));
        assert_eq!(cli.config_name().as_deref(), Some("night"));
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::parse_from(["ecliptic-eats"]);
        assert!(cli.command.is_none());
    }
}
