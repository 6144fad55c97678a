//! Cart Observer

use rust_decimal::Decimal;

use crate::cart::Cart;

/// What changed in the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// The cart was loaded from storage (possibly empty).
    Restored,

    /// One unit of `name` was added; `quantity` is the line's new quantity.
    ItemAdded {
        /// Dish name
        name: String,

        /// Quantity after the add
        quantity: u32,
    },

    /// A remove was requested for `name`; `removed` is false when no such line existed.
    ItemRemoved {
        /// Dish name
        name: String,

        /// Whether a line was actually dropped
        removed: bool,
    },

    /// Every line was removed.
    Cleared,

    /// The cart was checked out for `total` and is now empty.
    CheckedOut {
        /// Rounded total charged at checkout
        total: Decimal,
    },
}

/// Callback invoked synchronously after every cart mutation.
///
/// The store calls [`CartObserver::on_change`] once the new state has been persisted, so an
/// observer that re-renders from `cart` can never fall behind the store.
pub trait CartObserver {
    /// Called with the cart as it is after `event`.
    fn on_change(&mut self, cart: &Cart, event: &CartEvent);
}

/// Observer that ignores every change.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_change(&mut self, _cart: &Cart, _event: &CartEvent) {}
}

impl<O: CartObserver + ?Sized> CartObserver for Box<O> {
    fn on_change(&mut self, cart: &Cart, event: &CartEvent) {
        (**self).on_change(cart, event);
    }
}
