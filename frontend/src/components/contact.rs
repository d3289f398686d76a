use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::icons::{ChromeIcon, UiIcon};
use crate::config;
use crate::content::ContactMode;
use crate::proposal::message::{contact_message, whatsapp_link};
use crate::state::{AppAction, ContactForm};
use crate::utils::dom::open_in_new_tab;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub mode: ContactMode,
    pub form: ContactForm,
    pub on_action: Callback<AppAction>,
}

fn send_to_whatsapp(form: &ContactForm) {
    let number = match config::get_whatsapp_number() {
        Ok(number) => number,
        Err(e) => {
            log::error!("Cannot open WhatsApp: {}", e);
            return;
        }
    };
    let text = contact_message(&form.name, &form.email, &form.message);
    if let Err(e) = open_in_new_tab(&whatsapp_link(number, &text)) {
        log::warn!("Failed to open WhatsApp: {:?}", e);
    }
}

fn social_link(href: String, label: &'static str, hover: &'static str, icon: UiIcon, size: u32) -> Html {
    html! {
        <a
            href={href}
            class="social-icon-link"
            style={format!("--hover-color: {};", hover)}
            aria-label={label}
            target="_blank"
            rel="noopener noreferrer"
        >
            <ChromeIcon {icon} style={format!("width: {size}px; height: {size}px;")} />
        </a>
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let on_name = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        AppAction::SetContactName(input.value())
    });
    let on_email = props.on_action.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        AppAction::SetContactEmail(input.value())
    });
    let on_message = props.on_action.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        AppAction::SetContactMessage(input.value())
    });

    let send_button = match props.mode {
        ContactMode::WhatsApp => {
            let form = props.form.clone();
            let onclick = Callback::from(move |_: MouseEvent| send_to_whatsapp(&form));
            html! {
                <button type="button" class="cta-button contact-send" {onclick}>
                    <ChromeIcon icon={UiIcon::WhatsApp} style="width: 20px; height: 20px;" />
                    {"ENVIAR POR WHATSAPP"}
                </button>
            }
        }
        ContactMode::Static => html! {
            <button type="button" class="cta-button contact-send">{"ENVIAR MENSAJE"}</button>
        },
    };

    let whatsapp_chat = config::get_whatsapp_number()
        .map(|number| format!("https://wa.me/{}", number))
        .unwrap_or_else(|_| "#".to_string());

    html! {
        <>
            <form class="contact-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                <input type="text" class="form-input" placeholder="Nombre" required=true
                    value={props.form.name.clone()} oninput={on_name} />
                <input type="email" class="form-input" placeholder="Email" required=true
                    value={props.form.email.clone()} oninput={on_email} />
                <textarea id="contact-message" class="form-textarea" placeholder="Tu mensaje" required=true
                    value={props.form.message.clone()} oninput={on_message} />
                { send_button }
            </form>
            <div class="social-icons">
                { social_link(config::get_instagram_url().to_string(), "Instagram", "#E4405F", UiIcon::Instagram, 28) }
                { social_link(whatsapp_chat, "WhatsApp", "#25D366", UiIcon::WhatsApp, 28) }
                { social_link(config::get_x_url().to_string(), "X", "#888", UiIcon::X, 26) }
            </div>
        </>
    }
}
