use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::forms::phone;

#[derive(Properties, PartialEq)]
pub struct PhoneInputProps {
    pub value: String,
    // receives the already normalized number
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PhoneInput)]
pub fn phone_input(props: &PhoneInputProps) -> Html {
    let onkeydown = Callback::from(|e: KeyboardEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let caret = input.selection_start().ok().flatten().unwrap_or(0);
        if phone::blocks_key(&e.key(), caret) {
            e.prevent_default();
        }
    });

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            let normalized = phone::normalize(&raw);
            // The vdom won't notice when the state doesn't change, so fix the DOM here
            if normalized != raw {
                input.set_value(&normalized);
            }
            on_change.emit(normalized);
        })
    };

    html! {
        <input
            type="tel"
            name="phone"
            autocomplete="tel"
            inputmode="numeric"
            maxlength={phone::FULL_LENGTH.to_string()}
            placeholder="+998 90 123 45 67"
            class={props.class.clone()}
            value={props.value.clone()}
            {oninput}
            {onkeydown}
        />
    }
}
