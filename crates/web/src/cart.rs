use std::fmt;

use leptos::prelude::*;
use rust_decimal::Decimal;
use rusty_money::iso::Currency;

use kuroi_cart::{
    cart::Cart,
    notices::Notice,
    observer::{CartEvent, CartObserver},
    receipt::Receipt,
    storage::CartStorage,
    store::{CartStore, CheckoutError},
    view::{CartLineView, CartView, EMPTY_CART_PLACEHOLDER},
};

use crate::{storage::BrowserStorage, toast::Toasts};

/// Pushes every cart change into the view signal and raises the add/remove toasts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ViewObserver {
    view: RwSignal<CartView>,
    toasts: Toasts,
}

impl CartObserver for ViewObserver {
    fn on_change(&mut self, cart: &Cart, event: &CartEvent) {
        self.view.set(CartView::from(cart));

        match event {
            CartEvent::ItemAdded { name, .. } => self.toasts.show(&Notice::ItemAdded(name.clone())),
            CartEvent::ItemRemoved {
                name,
                removed: true,
            } => self.toasts.show(&Notice::ItemRemoved(name.clone())),
            _ => {}
        }
    }
}

/// Copyable handle to the page's single cart store and its rendered view.
pub(crate) struct CartHandle<S: CartStorage + Send + Sync + 'static = BrowserStorage> {
    store: StoredValue<CartStore<S, ViewObserver>>,
    view: RwSignal<CartView>,
    toasts: Toasts,
}

impl<S: CartStorage + Send + Sync + 'static> Clone for CartHandle<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: CartStorage + Send + Sync + 'static> Copy for CartHandle<S> {}

impl<S: CartStorage + Send + Sync + 'static> fmt::Debug for CartHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartHandle")
            .field("view", &self.view.get_untracked())
            .finish_non_exhaustive()
    }
}

impl<S: CartStorage + Send + Sync + 'static> CartHandle<S> {
    /// Restore the cart from `storage`; the view signal is filled before this returns.
    pub(crate) fn restore(storage: S, currency: &'static Currency, toasts: Toasts) -> Self {
        let view = RwSignal::new(CartView::from(&Cart::new(currency)));
        let store =
            CartStore::restore_with_observer(storage, currency, ViewObserver { view, toasts });

        Self {
            store: StoredValue::new(store),
            view,
            toasts,
        }
    }

    pub(crate) fn add(self, name: &str, unit_price: Decimal) {
        self.store.update_value(|store| {
            store.add_item(name, unit_price);
        });
    }

    pub(crate) fn remove(self, name: &str) {
        self.store.update_value(|store| {
            store.remove_item(name);
        });
    }

    /// Check out, or show the empty-cart toast. Returns the receipt on success.
    pub(crate) fn checkout(self) -> Option<Receipt> {
        match self.store.try_update_value(|store| store.checkout())? {
            Ok(receipt) => Some(receipt),
            Err(error @ CheckoutError::EmptyCart) => {
                self.toasts.show(&Notice::from(&error));
                None
            }
        }
    }

    pub(crate) fn view(self) -> RwSignal<CartView> {
        self.view
    }
}

#[cfg(target_arch = "wasm32")]
fn show_confirmation(receipt: &Receipt) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Err(error) = window.alert_with_message(&receipt.message()) {
        tracing::warn!(
            error = %crate::storage::js_value_message(error, "alert failed"),
            "failed to show order confirmation"
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show_confirmation(_receipt: &Receipt) {}

#[component]
pub(crate) fn CartButton(cart: CartHandle, open: RwSignal<bool>) -> impl IntoView {
    let view = cart.view();

    view! {
        <button
            type="button"
            class="cart-button"
            aria-label="Open cart"
            on:click=move |_| open.set(true)
        >
            "CART"
            <span id="cartCount" class="cart-count">
                {move || view.with(|view| view.item_count)}
            </span>
        </button>
    }
}

#[component]
fn CartLine(line: CartLineView, cart: CartHandle) -> impl IntoView {
    let remove_name = line.name.clone();
    let remove_label = format!("Remove {} from cart", line.name);

    view! {
        <div class="cart-item">
            <div>
                <div class="cart-item-name">{line.name}</div>
                <div class="cart-item-qty">{format!("Qty: {}", line.quantity)}</div>
            </div>
            <div class="cart-item-price">{line.subtotal}</div>
            <button
                type="button"
                class="remove-item"
                aria-label=remove_label
                on:click=move |_| cart.remove(&remove_name)
            >
                "REMOVE"
            </button>
        </div>
    }
}

#[component]
pub(crate) fn CartModal(cart: CartHandle, open: RwSignal<bool>) -> impl IntoView {
    let view = cart.view();

    let on_checkout = move |_| {
        if let Some(receipt) = cart.checkout() {
            show_confirmation(&receipt);
            open.set(false);
        }
    };

    view! {
        <div
            id="cartModal"
            class="cart-modal"
            class:active=move || open.get()
            on:click=move |_| open.set(false)
        >
            <div class="cart-panel" on:click=|event| event.stop_propagation()>
                <div class="cart-header">
                    <h2>"YOUR ORDER"</h2>
                    <button
                        type="button"
                        class="close-cart"
                        aria-label="Close cart"
                        on:click=move |_| open.set(false)
                    >
                        "×"
                    </button>
                </div>
                <div id="cartItems" class="cart-items">
                    {move || {
                        let lines = view.with(|view| view.lines.clone());

                        if lines.is_empty() {
                            view! { <p class="empty-cart">{EMPTY_CART_PLACEHOLDER}</p> }.into_any()
                        } else {
                            lines
                                .into_iter()
                                .map(|line| view! { <CartLine line=line cart=cart /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
                <div class="cart-footer">
                    <p class="cart-total-row">
                        <span>"TOTAL"</span>
                        <span id="cartTotal">{move || view.with(|view| view.total.clone())}</span>
                    </p>
                    <button type="button" class="checkout-button" on:click=on_checkout>
                        "CHECKOUT"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use kuroi_cart::storage::MemoryStorage;
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    fn handle() -> CartHandle<MemoryStorage> {
        CartHandle::restore(MemoryStorage::new(), iso::USD, Toasts::new())
    }

    #[test]
    fn view_follows_every_mutation() {
        let cart = handle();

        cart.add("Ramen", Decimal::new(1250, 2));
        cart.add("Ramen", Decimal::new(1250, 2));
        cart.add("Gyoza", Decimal::new(600, 2));

        let view = cart.view().get_untracked();

        assert_eq!(view.item_count, 3);
        assert_eq!(view.total, "$31.00");

        cart.remove("Ramen");

        assert_eq!(cart.view().get_untracked().item_count, 1);
    }

    #[test]
    fn checkout_returns_receipt_and_empties_view() -> TestResult {
        let cart = handle();

        cart.add("Gyoza", Decimal::new(600, 2));

        let receipt = cart.checkout().ok_or("Expected a receipt")?;

        assert_eq!(receipt.total(), Decimal::new(600, 2));
        assert!(cart.view().get_untracked().is_empty());

        Ok(())
    }

    #[test]
    fn checkout_on_empty_cart_returns_nothing() {
        let cart = handle();

        assert_eq!(cart.checkout(), None);
        assert!(cart.view().get_untracked().is_empty());
    }
}
