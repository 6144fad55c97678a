//! Cart View
//!
//! Pure projection of a cart into display strings. Everything the cart panel shows (count
//! badge, one row per line with its subtotal, grand total) comes from a [`CartView`], so a
//! view built right after a mutation always matches the store.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, pricing::format_price};

/// Placeholder shown in place of the line list when the cart is empty.
pub const EMPTY_CART_PLACEHOLDER: &str = "Your cart is empty";

/// Errors that can occur when writing a view to an output stream.
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error
    #[error("failed to write cart output")]
    Io(#[from] io::Error),
}

/// Display model for one cart line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    /// Dish name, also the key used for remove actions.
    pub name: String,

    /// Units ordered.
    pub quantity: u32,

    /// Formatted unit price.
    pub unit_price: String,

    /// Formatted `unit_price * quantity`.
    pub subtotal: String,
}

/// Display model for the whole cart panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// Value for the count badge: sum of quantities.
    pub item_count: u64,

    /// Lines in cart order.
    pub lines: Vec<CartLineView>,

    /// Formatted grand total.
    pub total: String,
}

impl CartView {
    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Writes the view as a table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if writing to `out` fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        if self.is_empty() {
            writeln!(out, "{EMPTY_CART_PLACEHOLDER}")?;
            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["Item", "Qty", "Price", "Subtotal"]);

        for line in &self.lines {
            builder.push_record([
                line.name.clone(),
                line.quantity.to_string(),
                line.unit_price.clone(),
                line.subtotal.clone(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "{table}")?;
        writeln!(out, " Items: {}", self.item_count)?;
        writeln!(out, " \x1b[1mTotal: {}\x1b[0m", self.total)?;

        Ok(())
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let currency = cart.currency();

        let lines = cart
            .iter()
            .map(|item| CartLineView {
                name: item.name().to_string(),
                quantity: item.quantity(),
                unit_price: format_price(item.unit_price(), currency),
                subtotal: format_price(item.subtotal(), currency),
            })
            .collect();

        CartView {
            item_count: cart.item_count(),
            lines,
            total: cart.formatted_total(),
        }
    }
}
