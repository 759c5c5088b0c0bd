use shared::constants::{CONTACT_EMAIL, CONTACT_INVALID_MESSAGE, CONTACT_SENT_MESSAGE, CONTACT_TOAST_MS, LOSE_TOAST_MS};
use shared::contact::mailto_uri;
use shared::shared_reveal_flow::Notification;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::base::dispatch_notification;
use crate::hooks::{use_form_state, ContactField};
use crate::styles;

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let state = use_form_state();

    let onsubmit = {
        let validate = state.validate.clone();
        let reset = state.reset.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate.emit(()) {
                Ok(form) => {
                    let uri = mailto_uri(CONTACT_EMAIL, &form);
                    match web_sys::window().map(|w| w.location().set_href(&uri)) {
                        Some(Ok(())) => {
                            log::info!("Handed contact form to the mail client");
                            dispatch_notification(&Notification::success(CONTACT_SENT_MESSAGE, CONTACT_TOAST_MS));
                            reset.emit(());
                        }
                        Some(Err(e)) => log::error!("Failed to open mailto link: {:?}", e),
                        None => log::error!("No window to open mailto link from"),
                    }
                }
                Err(()) => {
                    dispatch_notification(&Notification::error(CONTACT_INVALID_MESSAGE, LOSE_TOAST_MS));
                }
            }
        })
    };

    let on_input = |field: ContactField| {
        let set_field = state.set_field.clone();
        move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field.emit((field, input.value()));
        }
    };

    let on_message = {
        let set_field = state.set_field.clone();
        move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set_field.emit((ContactField::Message, input.value()));
        }
    };

    let input_class = |field: ContactField| {
        if state.error(field).is_some() { styles::INPUT_ERROR } else { styles::INPUT }
    };

    let error = |field: ContactField| match state.error(field) {
        Some(message) => html! { <p class={styles::TEXT_ERROR}>{message}</p> },
        None => html! {},
    };

    html! {
        <form onsubmit={onsubmit} class="mt-8 space-y-5 max-w-lg mx-auto" novalidate={true}>
            <div>
                <label for="contact-name" class={styles::TEXT_LABEL}>{"Nimi"}</label>
                <input
                    id="contact-name"
                    type="text"
                    class={input_class(ContactField::Name)}
                    value={state.form.name.clone()}
                    oninput={on_input(ContactField::Name)}
                />
                {error(ContactField::Name)}
            </div>

            <div>
                <label for="contact-email" class={styles::TEXT_LABEL}>{"Sähköposti"}</label>
                <input
                    id="contact-email"
                    type="email"
                    class={input_class(ContactField::Email)}
                    value={state.form.email.clone()}
                    oninput={on_input(ContactField::Email)}
                />
                {error(ContactField::Email)}
            </div>

            <div>
                <label for="contact-message" class={styles::TEXT_LABEL}>{"Viesti"}</label>
                <textarea
                    id="contact-message"
                    rows="5"
                    class={input_class(ContactField::Message)}
                    value={state.form.message.clone()}
                    oninput={on_message}
                />
                {error(ContactField::Message)}
            </div>

            <button type="submit" class={styles::GOLD_BUTTON}>{"Lähetä viesti"}</button>
        </form>
    }
}
