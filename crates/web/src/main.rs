//! Kuroi Eats Web
//!
//! Client-side rendered front-end for the Kuroi Eats cart.

use leptos::prelude::*;
use rusty_money::iso;

use kuroi_cart::menu::Menu;

mod cart;
mod contact;
mod faq;
mod logging;
mod menu;
mod storage;
mod toast;

use cart::{CartButton, CartHandle, CartModal};
use contact::ContactPanel;
use faq::FaqPanel;
use menu::{MenuPanel, SectionCards, menu_cards};
use storage::BrowserStorage;
use toast::{Toast, Toasts};

/// Main page shell.
#[component]
fn App() -> impl IntoView {
    let toasts = Toasts::new();
    let cart = CartHandle::restore(BrowserStorage, iso::USD, toasts);
    let cart_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <a href="#" class="logo">"KUROI EATS"</a>
            <nav>
                <a href="#menu">"MENU"</a>
                <a href="#faq">"FAQ"</a>
                <a href="#contact">"CONTACT"</a>
            </nav>
            <CartButton cart=cart open=cart_open />
        </header>
        <main>
            {match load_menu() {
                Ok(sections) => view! { <MenuPanel sections=sections cart=cart /> }.into_any(),
                Err(error_message) => view! {
                    <div class="menu-error">
                        <p>{error_message}</p>
                    </div>
                }
                .into_any(),
            }}
            <FaqPanel />
            <ContactPanel toasts=toasts />
        </main>
        <CartModal cart=cart open=cart_open />
        <Toast toasts=toasts />
    }
}

fn load_menu() -> Result<Vec<SectionCards>, String> {
    let menu = Menu::kuroi_eats().map_err(|error| format!("Failed to load menu: {error}"))?;

    Ok(menu_cards(&menu))
}

/// Mounts the app
fn main() {
    console_error_panic_hook::set_once();
    logging::init_browser_logger();

    leptos::mount::mount_to_body(App);
}
