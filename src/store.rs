//! Cart Store
//!
//! [`CartStore`] owns the cart, the storage slot it is mirrored to and the observer that renders
//! it. Every mutation runs the same sequence: change the cart, write the slot, notify the
//! observer. A failed write is logged and the in-memory cart stays authoritative, so no cart
//! operation can fail because of storage.

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartError},
    items::LineItem,
    notices::Notice,
    observer::{CartEvent, CartObserver, NoopObserver},
    receipt::Receipt,
    storage::{CartStorage, StorageError},
    view::CartView,
};

/// Slot key the cart is stored under.
pub const STORAGE_KEY: &str = "kuroiEatsCart";

/// Errors that can occur when reading or writing the cart slot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The storage backend failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The slot does not hold a JSON list of line items.
    #[error("cart slot is not valid JSON")]
    Json(#[from] serde_json::Error),

    /// The slot parsed but breaks a cart invariant.
    #[error("cart slot holds an invalid cart")]
    Invalid(#[from] CartError),
}

/// Errors that can occur at checkout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to check out.
    #[error("Your cart is empty!")]
    EmptyCart,
}

impl From<&CheckoutError> for Notice {
    fn from(error: &CheckoutError) -> Self {
        match error {
            CheckoutError::EmptyCart => Notice::EmptyCart,
        }
    }
}

/// The cart plus its storage slot and render callback.
#[derive(Debug)]
pub struct CartStore<S, O = NoopObserver> {
    cart: Cart,
    storage: S,
    observer: O,
}

impl<S: CartStorage> CartStore<S> {
    /// Restore the cart from `storage`, without an observer.
    pub fn restore(storage: S, currency: &'static Currency) -> Self {
        Self::restore_with_observer(storage, currency, NoopObserver)
    }
}

impl<S: CartStorage, O: CartObserver> CartStore<S, O> {
    /// Restore the cart from `storage` and notify `observer` with [`CartEvent::Restored`].
    ///
    /// A missing, unreadable or malformed slot yields an empty cart.
    pub fn restore_with_observer(storage: S, currency: &'static Currency, mut observer: O) -> Self {
        let cart = load_or_empty(&storage, currency);

        observer.on_change(&cart, &CartEvent::Restored);

        Self {
            cart,
            storage,
            observer,
        }
    }

    /// Reload the cart from storage, discarding the in-memory state.
    ///
    /// Falls back to an empty cart exactly like [`CartStore::restore_with_observer`].
    pub fn reload(&mut self) {
        self.cart = load_or_empty(&self.storage, self.cart.currency());

        self.observer.on_change(&self.cart, &CartEvent::Restored);
    }

    /// Write the current cart to the storage slot.
    ///
    /// # Errors
    ///
    /// Returns a [`PersistenceError`] if serialization or the storage write fails.
    pub fn persist(&mut self) -> Result<(), PersistenceError> {
        let value = serde_json::to_string(self.cart.items())?;

        self.storage.set(STORAGE_KEY, &value)?;

        Ok(())
    }

    /// Add one unit of `name` and return the line's new quantity.
    ///
    /// A dish already in the cart keeps the price it was first added at.
    pub fn add_item(&mut self, name: &str, unit_price: Decimal) -> u32 {
        let quantity = self.cart.add_item(name, unit_price);

        debug!(name, quantity, "added item to cart");

        self.commit(&CartEvent::ItemAdded {
            name: name.to_string(),
            quantity,
        });

        quantity
    }

    /// Remove the line named `name`. Removing a name that is not in the cart is not an error.
    pub fn remove_item(&mut self, name: &str) -> Option<LineItem> {
        let removed = self.cart.remove_item(name);

        debug!(name, removed = removed.is_some(), "removed item from cart");

        self.commit(&CartEvent::ItemRemoved {
            name: name.to_string(),
            removed: removed.is_some(),
        });

        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.cart.clear();

        self.commit(&CartEvent::Cleared);
    }

    /// Check out: snapshot the cart as a receipt, then clear it.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] and leaves the store untouched if there is nothing
    /// to check out.
    pub fn checkout(&mut self) -> Result<Receipt, CheckoutError> {
        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let receipt = Receipt::from_cart(&self.cart);

        self.cart.clear();

        debug!(total = %receipt.total(), "checked out cart");

        self.commit(&CartEvent::CheckedOut {
            total: receipt.total(),
        });

        Ok(receipt)
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    /// Grand total, rounded to two decimal places.
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Display projection of the current cart.
    pub fn view(&self) -> CartView {
        CartView::from(&self.cart)
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Split the store into its storage and observer.
    pub fn into_parts(self) -> (S, O) {
        (self.storage, self.observer)
    }

    fn commit(&mut self, event: &CartEvent) {
        if let Err(error) = self.persist() {
            warn!(%error, "failed to persist cart, keeping in-memory state");
        }

        self.observer.on_change(&self.cart, event);
    }
}

fn load_or_empty(storage: &impl CartStorage, currency: &'static Currency) -> Cart {
    match load(storage, currency) {
        Ok(Some(cart)) => {
            debug!(lines = cart.len(), "restored cart");
            cart
        }
        Ok(None) => Cart::new(currency),
        Err(error) => {
            warn!(%error, "discarding unreadable cart slot");
            Cart::new(currency)
        }
    }
}

/// Read the cart slot. `Ok(None)` means there is nothing stored.
///
/// A stored JSON `null` is treated like a missing slot.
fn load(
    storage: &impl CartStorage,
    currency: &'static Currency,
) -> Result<Option<Cart>, PersistenceError> {
    let Some(value) = storage.get(STORAGE_KEY)? else {
        return Ok(None);
    };

    let Some(items) = serde_json::from_str::<Option<Vec<LineItem>>>(&value)? else {
        return Ok(None);
    };

    Ok(Some(Cart::with_items(items, currency)?))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::storage::MemoryStorage;

    use super::*;

    #[derive(Debug, Default)]
    struct Recorder {
        events: Vec<(CartEvent, u64)>,
    }

    impl CartObserver for Recorder {
        fn on_change(&mut self, cart: &Cart, event: &CartEvent) {
            self.events.push((event.clone(), cart.item_count()));
        }
    }

    /// Storage that accepts reads but rejects every write.
    #[derive(Debug, Default)]
    struct ReadOnlyStorage;

    impl CartStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Rejected {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    fn ramen() -> Decimal {
        Decimal::new(1250, 2)
    }

    #[test]
    fn every_mutation_persists() -> TestResult {
        let mut store = CartStore::restore(MemoryStorage::new(), iso::USD);

        store.add_item("Ramen", ramen());

        let stored = store.storage().slot(STORAGE_KEY).ok_or("Expected slot")?;
        let items: Vec<LineItem> = serde_json::from_str(stored)?;

        assert_eq!(items, store.cart().items());

        store.remove_item("Ramen");

        assert_eq!(store.storage().slot(STORAGE_KEY), Some("[]"));

        Ok(())
    }

    #[test]
    fn observer_sees_every_mutation_in_order() {
        let mut store =
            CartStore::restore_with_observer(MemoryStorage::new(), iso::USD, Recorder::default());

        store.add_item("Ramen", ramen());
        store.add_item("Ramen", ramen());
        store.remove_item("Sushi");
        store.clear();

        assert_eq!(
            store.observer().events,
            [
                (CartEvent::Restored, 0),
                (
                    CartEvent::ItemAdded {
                        name: "Ramen".to_string(),
                        quantity: 1
                    },
                    1
                ),
                (
                    CartEvent::ItemAdded {
                        name: "Ramen".to_string(),
                        quantity: 2
                    },
                    2
                ),
                (
                    CartEvent::ItemRemoved {
                        name: "Sushi".to_string(),
                        removed: false
                    },
                    2
                ),
                (CartEvent::Cleared, 0),
            ]
        );
    }

    #[test]
    fn write_failure_keeps_in_memory_cart() {
        let mut store = CartStore::restore(ReadOnlyStorage, iso::USD);

        assert_eq!(store.add_item("Ramen", ramen()), 1);
        assert_eq!(store.item_count(), 1);
        assert!(store.persist().is_err(), "persist should surface the error");
    }

    #[test]
    fn checkout_on_empty_cart_does_not_notify() {
        let mut store =
            CartStore::restore_with_observer(MemoryStorage::new(), iso::USD, Recorder::default());

        let result = store.checkout();

        assert_eq!(result, Err(CheckoutError::EmptyCart));
        assert_eq!(Notice::from(&CheckoutError::EmptyCart), Notice::EmptyCart);
        assert_eq!(store.observer().events.len(), 1);
        assert_eq!(store.storage().slot(STORAGE_KEY), None);
    }

    #[test]
    fn checkout_reports_total_to_observer() -> TestResult {
        let mut store =
            CartStore::restore_with_observer(MemoryStorage::new(), iso::USD, Recorder::default());

        store.add_item("Ramen", ramen());

        let receipt = store.checkout()?;

        assert_eq!(receipt.total(), ramen());
        assert_eq!(
            store.observer().events.last(),
            Some(&(CartEvent::CheckedOut { total: ramen() }, 0))
        );

        Ok(())
    }

    #[test]
    fn restore_treats_null_as_empty() {
        let store = CartStore::restore(MemoryStorage::with_slot(STORAGE_KEY, "null"), iso::USD);

        assert!(store.cart().is_empty());
    }

    #[test]
    fn restore_rejects_duplicate_lines() {
        let stored = r#"[
            {"name":"Ramen","price":"12.50","quantity":1},
            {"name":"Ramen","price":"12.50","quantity":2}
        ]"#;

        let store = CartStore::restore(MemoryStorage::with_slot(STORAGE_KEY, stored), iso::USD);

        assert!(store.cart().is_empty());
    }

    #[test]
    fn reload_picks_up_external_writes() -> TestResult {
        let mut store = CartStore::restore(MemoryStorage::new(), iso::USD);

        store.add_item("Ramen", ramen());

        let (mut storage, _observer) = store.into_parts();
        storage.set(STORAGE_KEY, r#"[{"name":"Gyoza","price":6,"quantity":3}]"#)?;

        let mut store = CartStore::restore(storage, iso::USD);
        store.reload();

        assert_eq!(store.item_count(), 3);
        assert_eq!(store.cart().get("Gyoza").map(LineItem::quantity), Some(3));

        Ok(())
    }
}
