//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::iso::Currency;

use crate::{
    cart::Cart,
    items::LineItem,
    pricing::format_price,
    view::{CartView, RenderError},
};

/// Name used in the confirmation message.
pub const RESTAURANT_NAME: &str = "Kuroi Eats";

/// Confirmation of a completed checkout.
///
/// Holds a snapshot of the cart taken just before it was cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Cart contents at checkout
    cart: Cart,

    /// Total charged, rounded to two decimal places
    total: Decimal,
}

impl Receipt {
    /// Snapshot `cart` as a receipt.
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            cart: cart.clone(),
            total: cart.total(),
        }
    }

    /// Total amount charged
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Total formatted in the receipt currency.
    pub fn formatted_total(&self) -> String {
        format_price(self.total, self.cart.currency())
    }

    /// Number of units purchased.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Lines purchased, in cart order.
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Currency used for all monetary values.
    pub fn currency(&self) -> &'static Currency {
        self.cart.currency()
    }

    /// The confirmation shown to the customer.
    pub fn message(&self) -> String {
        format!(
            "Order placed! Total: {}\n\nThank you for ordering from {RESTAURANT_NAME}!",
            self.formatted_total()
        )
    }

    /// Prints the purchased lines followed by the confirmation.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), RenderError> {
        CartView::from(&self.cart).write_to(&mut out)?;

        writeln!(out, "\n{}", self.message())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    fn receipt() -> Receipt {
        let mut cart = Cart::new(iso::USD);

        cart.add_item("Ramen", Decimal::new(1250, 2));
        cart.add_item("Ramen", Decimal::new(1250, 2));
        cart.add_item("Gyoza", Decimal::new(600, 2));

        Receipt::from_cart(&cart)
    }

    #[test]
    fn snapshot_keeps_lines_and_total() {
        let receipt = receipt();

        assert_eq!(receipt.total(), Decimal::new(3100, 2));
        assert_eq!(receipt.item_count(), 3);
        assert_eq!(receipt.items().len(), 2);
        assert_eq!(receipt.currency(), iso::USD);
    }

    #[test]
    fn message_contains_total() {
        assert_eq!(
            receipt().message(),
            "Order placed! Total: $31.00\n\nThank you for ordering from Kuroi Eats!"
        );
    }

    #[test]
    fn write_to_includes_lines_and_message() -> TestResult {
        let mut out = Vec::new();

        receipt().write_to(&mut out)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Gyoza"), "missing line: {output}");
        assert!(output.contains("Order placed!"), "missing message: {output}");

        Ok(())
    }
}
