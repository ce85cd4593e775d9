use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{ContactComponent, Msg};

pub fn view(component: &ContactComponent, ctx: &Context<ContactComponent>) -> Html {
    let link = ctx.link();
    let form = &component.form;

    html! {
        <form
            id="contactForm"
            class="contact-form"
            onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}
        >
            <input
                id="contactName"
                type="text"
                placeholder="Your Name"
                required=true
                value={form.name.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateName(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <input
                id="contactEmail"
                type="email"
                placeholder="Your Email"
                required=true
                value={form.email.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateEmail(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
            <textarea
                id="contactMessage"
                placeholder="Your Message"
                rows="5"
                required=true
                value={form.message.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateMessage(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
            <button type="submit" class="btn btn-primary">{"Send Message"}</button>
        </form>
    }
}
