//! Menu
//!
//! The dishes offered on the site, loaded from a YAML fixture. The menu only feeds the add
//! buttons; the cart never checks prices against it.

use std::str::FromStr;

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

/// The Kuroi Eats menu fixture.
pub const MENU_FIXTURE_YAML: &str = include_str!("../fixtures/menu.yml");

/// Errors that can occur while loading a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The YAML could not be parsed.
    #[error("failed to parse menu fixture")]
    Parse(#[from] serde_norway::Error),

    /// A price is not in `AMOUNT CURRENCY` form.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A price uses a currency code we do not know.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),

    /// A dish is priced in a different currency from the rest of the menu.
    #[error("dish {dish:?} is priced in {found}, but the menu uses {expected}")]
    CurrencyMismatch {
        /// Dish name
        dish: String,

        /// Currency of the first dish
        expected: &'static str,

        /// Currency of this dish
        found: &'static str,
    },

    /// The fixture contains no dishes.
    #[error("menu has no dishes")]
    Empty,
}

/// Wrapper for the menu in YAML
#[derive(Debug, Deserialize)]
struct MenuFixture {
    sections: Vec<SectionFixture>,
}

#[derive(Debug, Deserialize)]
struct SectionFixture {
    name: String,

    #[serde(default)]
    dishes: Vec<DishFixture>,
}

#[derive(Debug, Deserialize)]
struct DishFixture {
    name: String,

    #[serde(default)]
    description: String,

    /// Price (e.g., "12.50 USD")
    price: String,
}

/// A dish that can be added to the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    /// Dish name, used as the cart line key
    pub name: String,

    /// Short description, may be empty
    pub description: String,

    /// Unit price
    pub price: Decimal,
}

/// A titled group of dishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    /// Section title
    pub name: String,

    /// Dishes in display order
    pub dishes: Vec<Dish>,
}

/// The full menu, priced in a single currency.
#[derive(Debug, Clone)]
pub struct Menu {
    sections: Vec<MenuSection>,
    currency: &'static Currency,
}

impl Menu {
    /// Load the bundled Kuroi Eats menu.
    ///
    /// # Errors
    ///
    /// Returns a [`MenuError`] if the bundled fixture is invalid.
    pub fn kuroi_eats() -> Result<Self, MenuError> {
        Self::from_yaml(MENU_FIXTURE_YAML)
    }

    /// Parse a menu from YAML.
    ///
    /// # Errors
    ///
    /// Returns a [`MenuError`] when parsing fails, a price is invalid, currencies differ
    /// between dishes, or no dishes are present.
    pub fn from_yaml(yaml: &str) -> Result<Self, MenuError> {
        let fixture: MenuFixture = serde_norway::from_str(yaml)?;

        let mut currency: Option<&'static Currency> = None;
        let mut sections = Vec::with_capacity(fixture.sections.len());

        for section in fixture.sections {
            let mut dishes = Vec::with_capacity(section.dishes.len());

            for dish in section.dishes {
                let (price, dish_currency) = parse_price(&dish.price)?;

                if let Some(expected) = currency
                    && expected != dish_currency
                {
                    return Err(MenuError::CurrencyMismatch {
                        dish: dish.name,
                        expected: expected.iso_alpha_code,
                        found: dish_currency.iso_alpha_code,
                    });
                }

                currency = Some(dish_currency);

                dishes.push(Dish {
                    name: dish.name,
                    description: dish.description,
                    price,
                });
            }

            sections.push(MenuSection {
                name: section.name,
                dishes,
            });
        }

        Ok(Menu {
            sections,
            currency: currency.ok_or(MenuError::Empty)?,
        })
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[MenuSection] {
        &self.sections
    }

    /// Every dish, section by section.
    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        self.sections.iter().flat_map(|section| section.dishes.iter())
    }

    /// Look up a dish by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Dish> {
        self.dishes().find(|dish| dish.name.eq_ignore_ascii_case(name))
    }

    /// Currency all dishes are priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

/// Parse price string (e.g., "12.50 USD") into an amount and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY", if the amount is
/// not a decimal number, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), MenuError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(MenuError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = Decimal::from_str(amount).map_err(|_err| MenuError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(MenuError::UnknownCurrency(other.to_string())),
    };

    Ok((amount, currency))
}
