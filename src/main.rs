//! Ecliptic Eats - terminal ordering client
//!
//! Without arguments the interactive interface is launched; subcommands
//! print the menu, cart or profile, or place an order headlessly.

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use ecliptic_eats::cli::{CheckoutArgs, Command};
use ecliptic_eats::{
    AppConfig, Cart, CartStore, Category, CheckoutError, Cli, Error, LocalOrderSubmitter,
    RouteHistory, TuiApp, complete_checkout, format_price, init_locale, should_run_interactive,
};
use rust_i18n::t;
use std::path::{Path, PathBuf};
use tracing::{Level, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// Initialize i18n for this binary
rust_i18n::i18n!("locales", fallback = "en");

/// Config loaded by the interactive interface when present
const DEFAULT_CONFIG_NAME: &str = "default";

// CLI Output Module
mod cli_output {
    //! CLI 输出美化模块
    //!
    //! 为命令行输出提供统一的颜色和格式样式。

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;
    use unicode_width::UnicodeWidthStr;

    /// 输出宽度
    const WIDTH: usize = 60;

    /// CLI 主题颜色
    pub struct CliTheme;

    impl CliTheme {
        pub const SUCCESS: Color = Color::Green;
        pub const ERROR: Color = Color::Red;
        pub const HINT: Color = Color::DarkGrey;
        /// 金色强调
        pub const ACCENT: Color = Color::Rgb {
            r: 212,
            g: 175,
            b: 55,
        };
    }

    /// 打印分隔线
    pub fn print_separator() {
        let _ = stdout().execute(Print(format!("{}\n", "─".repeat(WIDTH))));
    }

    /// 打印居中的标题
    pub fn print_title(title: &str) {
        let padding = WIDTH.saturating_sub(title.width()) / 2;
        let _ = stdout().execute(Print(" ".repeat(padding)));
        let _ = stdout().execute(Print(style(title).with(CliTheme::ACCENT).bold()));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印小节标题
    pub fn print_heading(heading: &str) {
        let _ = stdout().execute(Print(style(heading).bold()));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印成功消息
    pub fn print_success(msg: &str) {
        let _ = stdout().execute(Print(style("✓ ").with(CliTheme::SUCCESS).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印错误消息
    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印提示消息
    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// 打印键值对
    pub fn print_key_value(key: &str, value: &str, value_color: Option<Color>) {
        let key_styled = style(key).with(CliTheme::HINT);
        let value_styled = match value_color {
            Some(color) => style(value).with(color),
            None => style(value).bold(),
        };
        let _ = stdout().execute(Print("  "));
        let _ = stdout().execute(Print(key_styled));
        let _ = stdout().execute(Print(": "));
        let _ = stdout().execute(Print(value_styled));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印名称与右对齐价格
    pub fn print_price_row(name: &str, price: &str) {
        let gap = WIDTH.saturating_sub(name.width() + price.width() + 2);
        let _ = stdout().execute(Print(format!("  {}{}", name, " ".repeat(gap))));
        let _ = stdout().execute(Print(style(price).with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print("\n"));
    }

    /// 打印日志文件路径
    pub fn print_log_path(label: &str, path: &str) {
        let _ = stdout().execute(Print("\n"));
        let _ = stdout().execute(Print(style(format!("  {}: ", label)).with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", path)));
    }

    /// 打印空行
    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }
}

fn main() -> Result<()> {
    // Initialize locale based on system settings
    init_locale();

    if should_run_interactive() {
        return run_interactive_mode();
    }

    run_cli_mode()
}

/// Run the Ratatui interface
fn run_interactive_mode() -> Result<()> {
    let exe_dir = get_executable_dir()?;
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = exe_dir
        .join("Log")
        .join(format!("Interactive_{}.log", timestamp));

    // The terminal belongs to the TUI, so logs only go to the file
    let _guard = setup_file_only_logging(&log_path)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Ecliptic Eats starting in interactive mode"
    );

    let default_config = exe_dir
        .join("Config")
        .join(DEFAULT_CONFIG_NAME)
        .with_extension("toml");
    let config = if default_config.exists() {
        info!(config_file = %default_config.display(), "Loading configuration from file");
        AppConfig::load_from_file(&default_config)?
    } else {
        AppConfig::default()
    };

    let mut app = TuiApp::new(config)?;
    app.set_log_path(log_path.clone());
    let result = app.run()?;

    info!(
        orders = result.orders.len(),
        log_file = %log_path.display(),
        "Interactive session complete"
    );
    Ok(())
}

/// Run a single non-interactive command
fn run_cli_mode() -> Result<()> {
    let cli = Cli::parse();
    let exe_dir = get_executable_dir()?;
    let log_path = get_log_path(&exe_dir, &cli);
    let _guard = setup_logging(&cli, &log_path)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Ecliptic Eats starting");

    let config = load_config(&cli, &exe_dir)?;
    if cli.verbose {
        info!(
            restaurant = %config.restaurant.name,
            items = config.catalog.items.len(),
            "Configuration loaded"
        );
    }
    info!(log_file = %log_path.display(), "Log file location");

    match &cli.command {
        None => print_menu(&cli, &config, None)?,
        Some(Command::Menu { category }) => print_menu(&cli, &config, *category)?,
        Some(Command::Cart) => print_cart(&cli, &config)?,
        Some(Command::Checkout(args)) => run_checkout(&cli, &config, args)?,
        Some(Command::Profile) => print_profile(&cli, &config)?,
    }

    if cli.verbose && !cli.json {
        cli_output::print_log_path(&t!("cli_log_file"), &log_path.display().to_string());
    }
    Ok(())
}

fn print_menu(cli: &Cli, config: &AppConfig, category: Option<Category>) -> Result<()> {
    use cli_output::*;

    let categories: Vec<Category> = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    if cli.json {
        let items: Vec<_> = categories
            .iter()
            .flat_map(|c| config.catalog.items_in(*c))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    print_separator();
    print_title(&config.restaurant.name);
    print_separator();
    for category in categories {
        print_blank();
        print_heading(&category.label());
        let items = config.catalog.items_in(category);
        if items.is_empty() {
            print_hint(&t!("menu_category_empty"));
        }
        for item in items {
            print_price_row(&item.name, &item.display_price());
        }
    }
    print_blank();
    Ok(())
}

fn print_cart(cli: &Cli, config: &AppConfig) -> Result<()> {
    use cli_output::*;

    let snapshot = Cart::from_lines(config.cart.lines.clone()).cart_snapshot();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_separator();
    print_title(&t!("cart_title"));
    print_separator();
    if snapshot.is_empty() {
        print_hint(&t!("cart_empty"));
        return Ok(());
    }
    for line in &snapshot.lines {
        let name = format!("{} x{}", line.name, line.quantity);
        print_price_row(&name, &format_price(line.line_total_cents()));
    }
    print_separator();
    print_price_row(&t!("cart_subtotal"), &snapshot.display_subtotal());
    Ok(())
}

fn run_checkout(cli: &Cli, config: &AppConfig, args: &CheckoutArgs) -> Result<()> {
    use cli_output::*;

    let cart = Cart::from_lines(config.cart.lines.clone());
    if cart.is_empty() {
        return Err(Error::EmptyCart.into());
    }

    let mut submitter = LocalOrderSubmitter::new(config.restaurant.estimated_delivery.clone());
    let mut history = RouteHistory::new();

    match complete_checkout(args.to_form(), &mut submitter, &mut history) {
        Ok(receipt) => {
            info!(
                order_number = %receipt.order_number,
                total = %format_price(cart.subtotal_cents()),
                "Order placed"
            );
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
                return Ok(());
            }
            print_separator();
            print_success(&t!("confirmation_heading"));
            print_separator();
            print_key_value(
                &t!("confirmation_order_number"),
                receipt.order_number.as_str(),
                Some(CliTheme::ACCENT),
            );
            print_key_value(
                &t!("confirmation_estimated_delivery"),
                &receipt.estimated_delivery,
                None,
            );
            print_key_value(
                &t!("summary_total"),
                &format_price(cart.subtotal_cents()),
                None,
            );
            Ok(())
        }
        Err(CheckoutError::Invalid { step, errors }) => {
            warn!(?step, invalid = errors.len(), "Checkout input rejected");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
            } else {
                print_error(&t!("cli_checkout_invalid", step = step.title()));
                for e in &errors {
                    print_key_value(&e.field.label(), &e.message, Some(CliTheme::ERROR));
                }
            }
            std::process::exit(1);
        }
        Err(e) => {
            error!(error = %e, "Checkout failed");
            Err(Error::from(e).into())
        }
    }
}

fn print_profile(cli: &Cli, config: &AppConfig) -> Result<()> {
    use cli_output::*;

    let profile = &config.profile;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    print_separator();
    print_title(&profile.details.name);
    print_hint(&profile.details.email);
    print_separator();

    print_heading(&t!("profile_tab_history"));
    for order in &profile.order_history {
        let name = format!(
            "{}  {}  {}",
            order.id,
            order.date.format("%Y-%m-%d"),
            order.status.label()
        );
        print_price_row(&name, &order.display_total());
    }

    print_blank();
    print_heading(&t!("profile_saved_addresses"));
    for address in &profile.addresses {
        print_key_value(&address.label, &address.address, None);
    }
    Ok(())
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Determine the log file path based on config file or timestamp
fn get_log_path(exe_dir: &Path, cli: &Cli) -> PathBuf {
    let log_dir = exe_dir.join("Log");
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");

    if let Some(config_name) = cli.config_name() {
        log_dir
            .join(&config_name)
            .join(format!("{}_{}.log", config_name, timestamp))
    } else {
        log_dir.join(format!("CLIRun_{}.log", timestamp))
    }
}

/// Resolve config path - supports shorthand syntax
fn resolve_config_path(exe_dir: &Path, config_path: &Path) -> PathBuf {
    if config_path.exists() {
        return config_path.to_path_buf();
    }

    let with_extension = if config_path.extension().is_none() {
        config_path.with_extension("toml")
    } else {
        config_path.to_path_buf()
    };

    if with_extension.exists() {
        return with_extension;
    }

    let filename = config_path.file_name().unwrap_or(config_path.as_os_str());
    let mut in_config_dir = exe_dir.join("Config").join(filename);
    if in_config_dir.extension().is_none() {
        in_config_dir = in_config_dir.with_extension("toml");
    }

    if in_config_dir.exists() {
        return in_config_dir;
    }

    config_path.to_path_buf()
}

/// Load configuration from file, or fall back to the built-in defaults
fn load_config(cli: &Cli, exe_dir: &Path) -> Result<AppConfig> {
    match &cli.config {
        Some(config_path) => {
            let resolved_path = resolve_config_path(exe_dir, config_path);
            info!(config_file = %resolved_path.display(), "Loading configuration from file");
            Ok(AppConfig::load_from_file(&resolved_path)?)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Setup logging for CLI mode (file + stderr)
fn setup_logging(cli: &Cli, log_path: &Path) -> Result<WorkerGuard> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let (non_blocking, guard) = open_log_writer(log_path)?;
    let subscriber = tracing_subscriber::registry().with(env_filter);

    // Keep stdout clean for --json output
    if cli.json_log {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(guard)
}

/// Setup file-only logging for interactive mode
fn setup_file_only_logging(log_path: &Path) -> Result<WorkerGuard> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::DEBUG.into())
        .from_env_lossy();

    let (non_blocking, guard) = open_log_writer(log_path)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .init();

    Ok(guard)
}

fn open_log_writer(
    log_path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    Ok(tracing_appender::non_blocking(file))
}
