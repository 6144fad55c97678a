//! Kuroi Eats Cart CLI
//!
//! Drives a [`CartStore`] backed by a file slot, for trying the cart out from a terminal.

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rusty_money::iso;
use tracing_subscriber::EnvFilter;

use kuroi_cart::{
    menu::Menu,
    notices::Notice,
    pricing::format_price,
    storage::FileStorage,
    store::{CartStore, CheckoutError},
};

#[derive(Debug, Parser)]
#[command(name = "kuroi-cart", about = "Kuroi Eats cart", long_about = None)]
struct Cli {
    /// Directory holding the cart slot file
    #[arg(long, env = "KUROI_CART_DIR", default_value = ".kuroi-cart")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the cart (default)
    Show,

    /// Add one unit of a dish
    Add {
        /// Dish name
        name: String,

        /// Unit price; looked up on the menu when omitted
        price: Option<Decimal>,
    },

    /// Remove a dish from the cart
    Remove {
        /// Dish name
        name: String,
    },

    /// Empty the cart
    Clear,

    /// Place the order and empty the cart
    Checkout,

    /// List the menu
    Menu,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kuroi_cart=info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut impl Write) -> Result<(), String> {
    let mut store = CartStore::restore(FileStorage::new(&cli.data_dir), iso::USD);

    match cli.command.unwrap_or(Commands::Show) {
        Commands::Show => {}
        Commands::Add { name, price } => {
            let (name, price) = match price {
                Some(price) => (name, price),
                None => {
                    let menu = load_menu()?;
                    let dish = menu
                        .find(&name)
                        .ok_or_else(|| format!("{name} is not on the menu; pass a price"))?;

                    (dish.name.clone(), dish.price)
                }
            };

            store.add_item(&name, price);
            announce(out, &Notice::ItemAdded(name))?;
        }
        Commands::Remove { name } => {
            if store.remove_item(&name).is_some() {
                announce(out, &Notice::ItemRemoved(name))?;
            }
        }
        Commands::Clear => store.clear(),
        Commands::Checkout => {
            return match store.checkout() {
                Ok(receipt) => receipt
                    .write_to(&mut *out)
                    .map_err(|error| format!("failed to print receipt: {error}")),
                Err(error @ CheckoutError::EmptyCart) => announce(out, &Notice::from(&error)),
            };
        }
        Commands::Menu => return print_menu(out),
    }

    store
        .view()
        .write_to(&mut *out)
        .map_err(|error| format!("failed to print cart: {error}"))
}

fn load_menu() -> Result<Menu, String> {
    Menu::kuroi_eats().map_err(|error| format!("failed to load menu: {error}"))
}

fn announce(out: &mut impl Write, notice: &Notice) -> Result<(), String> {
    writeln!(out, "{notice}").map_err(|error| format!("failed to write output: {error}"))
}

fn print_menu(out: &mut impl Write) -> Result<(), String> {
    let menu = load_menu()?;
    let write_error = |error: io::Error| format!("failed to write output: {error}");

    for section in menu.sections() {
        writeln!(out, "\n\x1b[1m{}\x1b[0m", section.name).map_err(write_error)?;

        for dish in &section.dishes {
            writeln!(
                out,
                "  {:<24} {:>8}",
                dish.name,
                format_price(dish.price, menu.currency())
            )
            .map_err(write_error)?;

            if !dish.description.is_empty() {
                writeln!(out, "    \x1b[90m{}\x1b[0m", dish.description).map_err(write_error)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use testresult::TestResult;

    use super::*;

    fn run_with(data_dir: &Path, args: &[&str]) -> Result<String, String> {
        let data_dir = data_dir.to_string_lossy();
        let argv = ["kuroi-cart", "--data-dir", &*data_dir]
            .into_iter()
            .chain(args.iter().copied());

        let cli = Cli::try_parse_from(argv).map_err(|error| error.to_string())?;
        let mut out = Vec::new();

        run(cli, &mut out)?;

        String::from_utf8(out).map_err(|error| error.to_string())
    }

    #[test]
    fn add_then_checkout_round_trips_through_data_dir() -> TestResult {
        let dir = tempfile::tempdir()?;

        let output = run_with(dir.path(), &["add", "Gyoza"])?;

        assert!(output.contains("Gyoza added to cart!"), "missing notice: {output}");
        assert!(output.contains("Total: $6.00"), "missing total: {output}");

        let output = run_with(dir.path(), &["add", "Karaage", "7.25"])?;

        assert!(output.contains("Items: 2"), "missing count: {output}");

        let output = run_with(dir.path(), &["checkout"])?;

        assert!(
            output.contains("Order placed! Total: $13.25"),
            "missing confirmation: {output}"
        );

        let output = run_with(dir.path(), &["show"])?;

        assert_eq!(output, "Your cart is empty\n");

        Ok(())
    }

    #[test]
    fn checkout_on_empty_cart_prints_notice() -> TestResult {
        let dir = tempfile::tempdir()?;

        assert_eq!(run_with(dir.path(), &["checkout"])?, "Your cart is empty!\n");

        Ok(())
    }

    #[test]
    fn add_unknown_dish_without_price_fails() -> TestResult {
        let dir = tempfile::tempdir()?;

        let result = run_with(dir.path(), &["add", "Pizza"]);

        assert!(result.is_err(), "unknown dish should need a price");
        assert_eq!(run_with(dir.path(), &["show"])?, "Your cart is empty\n");

        Ok(())
    }
}
