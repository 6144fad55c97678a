//! Cart

use std::slice;

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    items::LineItem,
    pricing::{format_price, total_price},
};

/// Errors related to cart construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Two lines share a name (index of the second line, name).
    #[error("Item {0} duplicates the name {1:?}")]
    DuplicateItem(usize, String),
}

/// Ordered collection of line items, at most one per name.
///
/// Insertion order is preserved. The cart holds only data; persistence and rendering are
/// handled by [`crate::store::CartStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a cart holding the given lines, in order.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if two lines share a name.
    pub fn with_items(
        items: impl Into<Vec<LineItem>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let items = items.into();

        items.iter().enumerate().try_for_each(|(i, item)| {
            if items
                .iter()
                .take(i)
                .any(|earlier| earlier.name() == item.name())
            {
                Err(CartError::DuplicateItem(i, item.name().to_string()))
            } else {
                Ok(())
            }
        })?;

        Ok(Cart { items, currency })
    }

    /// Add one unit of `name`, returning the line's new quantity.
    ///
    /// A name already in the cart keeps its original price; `unit_price` only applies to new
    /// lines.
    pub fn add_item(&mut self, name: &str, unit_price: Decimal) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|item| item.name() == name) {
            return existing.increment();
        }

        self.items.push(LineItem::new(name, unit_price));

        1
    }

    /// Remove the line named `name`, returning it if it was present.
    pub fn remove_item(&mut self, name: &str) -> Option<LineItem> {
        let position = self.items.iter().position(|item| item.name() == name)?;

        Some(self.items.remove(position))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Look up the line named `name`.
    pub fn get(&self, name: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Sum of line subtotals, rounded to two decimal places.
    pub fn total(&self) -> Decimal {
        total_price(&self.items)
    }

    /// The total formatted in the cart currency, e.g. `$31.00`.
    pub fn formatted_total(&self) -> String {
        format_price(self.total(), self.currency)
    }

    /// The lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over the lines in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Get the number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
