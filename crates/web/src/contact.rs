use leptos::{ev::SubmitEvent, prelude::*};

use kuroi_cart::contact::{ContactField, ContactForm};

use crate::toast::Toasts;

#[component]
fn Field(
    label: &'static str,
    id: &'static str,
    field: ContactField,
    form: RwSignal<ContactForm>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|form| form.field(field).to_string());
    let on_input =
        move |event| form.update(|form| form.set_field(field, event_target_value(&event)));

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            {if multiline {
                view! { <textarea id=id rows="5" prop:value=value on:input=on_input></textarea> }
                    .into_any()
            } else {
                view! { <input id=id type="text" prop:value=value on:input=on_input /> }.into_any()
            }}
        </div>
    }
}

#[component]
pub(crate) fn ContactPanel(toasts: Toasts) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        if let Some(notice) = form.try_update(ContactForm::submit) {
            toasts.show(&notice);
        }
    };

    view! {
        <section id="contact" class="contact">
            <h2 class="section-title">"CONTACT"</h2>
            <form class="contact-form" on:submit=on_submit>
                <Field label="Name" id="name" field=ContactField::Name form=form />
                <Field label="Email" id="email" field=ContactField::Email form=form />
                <Field label="Subject" id="subject" field=ContactField::Subject form=form />
                <Field
                    label="Message"
                    id="message"
                    field=ContactField::Message
                    form=form
                    multiline=true
                />
                <button type="submit" class="submit-button">"SEND MESSAGE"</button>
            </form>
        </section>
    }
}
