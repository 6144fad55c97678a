use leptos::prelude::*;

use kuroi_cart::{
    menu::{Dish, Menu},
    pricing::format_price,
};

use crate::cart::CartHandle;

/// UI model for a dish card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DishCard {
    dish: Dish,

    /// Display price.
    price: String,
}

/// UI model for a menu section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SectionCards {
    name: String,
    dishes: Vec<DishCard>,
}

/// Turn the menu into display cards, keeping section and dish order.
pub(crate) fn menu_cards(menu: &Menu) -> Vec<SectionCards> {
    menu.sections()
        .iter()
        .map(|section| SectionCards {
            name: section.name.clone(),
            dishes: section
                .dishes
                .iter()
                .map(|dish| DishCard {
                    dish: dish.clone(),
                    price: format_price(dish.price, menu.currency()),
                })
                .collect(),
        })
        .collect()
}

#[component]
fn DishCardView(card: DishCard, cart: CartHandle) -> impl IntoView {
    let add_label = format!("Add {} ({}) to cart", card.dish.name, card.price);
    let name = card.dish.name.clone();
    let price = card.dish.price;

    view! {
        <article class="menu-item-card">
            <div class="menu-item-header">
                <h4 class="menu-item-name">{card.dish.name}</h4>
                <span class="menu-item-price">{card.price}</span>
            </div>
            {(!card.dish.description.is_empty())
                .then(|| view! { <p class="menu-item-desc">{card.dish.description}</p> })}
            <button
                type="button"
                class="add-to-cart"
                aria-label=add_label
                on:click=move |_| cart.add(&name, price)
            >
                "ADD TO CART"
            </button>
        </article>
    }
}

#[component]
pub(crate) fn MenuPanel(sections: Vec<SectionCards>, cart: CartHandle) -> impl IntoView {
    view! {
        <section id="menu" class="menu">
            <h2 class="section-title">"MENU"</h2>
            {sections
                .into_iter()
                .map(|section| {
                    view! {
                        <div class="menu-category">
                            <h3 class="menu-category-title">{section.name}</h3>
                            <div class="menu-grid">
                                {section
                                    .dishes
                                    .into_iter()
                                    .map(|card| view! { <DishCardView card=card cart=cart /> })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
