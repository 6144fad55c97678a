use leptos::prelude::*;

use kuroi_cart::faq::FaqAccordion;

const FAQ_ENTRIES: [(&str, &str); 4] = [
    (
        "Do you take reservations?",
        "Walk-ins only for parties under four. Larger groups can book through the contact form.",
    ),
    (
        "Is there a vegetarian ramen?",
        "Yes. Ask for the shio broth with seasonal vegetables and a marinated tofu topping.",
    ),
    (
        "How long does pickup take?",
        "Most orders are ready within twenty minutes of checkout.",
    ),
    (
        "Where is my cart kept?",
        "Your cart is saved in this browser only, so it is still there if you reload the page.",
    ),
];

#[component]
pub(crate) fn FaqPanel() -> impl IntoView {
    let faq = RwSignal::new(FaqAccordion::new());

    view! {
        <section id="faq" class="faq">
            <h2 class="section-title">"FAQ"</h2>
            {FAQ_ENTRIES
                .into_iter()
                .enumerate()
                .map(|(index, (question, answer))| {
                    view! {
                        <div
                            class="faq-item"
                            class:active=move || faq.with(|faq| faq.is_open(index))
                        >
                            <button
                                type="button"
                                class="faq-question"
                                aria-expanded=move || faq.with(|faq| faq.is_open(index)).to_string()
                                on:click=move |_| faq.update(|faq| faq.toggle(index))
                            >
                                {question}
                            </button>
                            <div class="faq-answer">
                                <p>{answer}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
