//! Items

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::line_subtotal;

/// One distinct dish in the cart, keyed by its name.
///
/// Serialized as `{ "name", "price", "quantity" }`. The quantity can never be zero; a line that
/// would reach zero is removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    name: String,

    #[serde(rename = "price")]
    unit_price: Decimal,

    quantity: NonZeroU32,
}

impl LineItem {
    /// Creates a line with a quantity of one.
    pub fn new(name: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Creates a line with an explicit quantity.
    pub fn with_quantity(
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: NonZeroU32,
    ) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Returns the name of the dish
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price of a single unit
    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    /// Returns the number of units ordered
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Returns `unit_price * quantity`, unrounded.
    pub fn subtotal(&self) -> Decimal {
        line_subtotal(self.unit_price, self.quantity())
    }

    /// Adds one unit and returns the new quantity.
    pub(crate) fn increment(&mut self) -> u32 {
        self.quantity = self.quantity.saturating_add(1);
        self.quantity.get()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_line_has_quantity_one() {
        let item = LineItem::new("Gyoza", Decimal::new(600, 2));

        assert_eq!(item.quantity(), 1);
        assert_eq!(item.subtotal(), Decimal::new(600, 2));
    }

    #[test]
    fn increment_adds_one_unit() {
        let mut item = LineItem::new("Ramen", Decimal::new(1250, 2));

        assert_eq!(item.increment(), 2);
        assert_eq!(item.subtotal(), Decimal::new(2500, 2));
    }

    #[test]
    fn deserializes_numeric_prices() -> TestResult {
        let item: LineItem =
            serde_json::from_str(r#"{"name":"Ramen","price":12.5,"quantity":2}"#)?;

        assert_eq!(item.name(), "Ramen");
        assert_eq!(item.unit_price(), Decimal::new(1250, 2));
        assert_eq!(item.quantity(), 2);

        Ok(())
    }

    #[test]
    fn rejects_zero_quantity() {
        let result = serde_json::from_str::<LineItem>(
            r#"{"name":"Ramen","price":"12.50","quantity":0}"#,
        );

        assert!(result.is_err(), "zero quantity must not deserialize");
    }
}
