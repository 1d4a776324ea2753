use log::info;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::api::FormApi;
use crate::components::phone_input::PhoneInput;
use crate::forms::lead::{LeadAction, LeadForm};
use crate::forms::submission::run_submission;
use crate::forms::validation::Field;

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub on_success: Callback<()>,
}

#[function_component]
pub fn LeadModal(props: &LeadModalProps) -> Html {
    let name_param = use_search_param("name".to_string());
    let phone_param = use_search_param("phone".to_string());
    let form = use_reducer(move || LeadForm::prefilled(name_param.as_deref(), phone_param.as_deref()));
    let is_open = use_state(|| false);

    {
        let on_success = props.on_success.clone();
        use_effect_with_deps(
            move |succeeded| {
                if *succeeded {
                    info!("Lead accepted, switching landing to thank-you view");
                    on_success.emit(());
                }
                || ()
            },
            form.status.is_success(),
        );
    }

    let open = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(true);
        })
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(false);
        })
    };

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(LeadAction::SetName(input.value()));
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |phone: String| form.dispatch(LeadAction::SetPhone(phone)))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dispatcher = form.dispatcher();
            let api = FormApi::default();
            spawn_local(run_submission(
                form.begin_submit(),
                move |lead| async move { api.submit_lead(&lead).await },
                move |event| dispatcher.dispatch(LeadAction::Submit(event)),
            ));
        })
    };

    let pending = form.status.is_pending();
    let field_error = |field: Field| match form.status.errors.get(field) {
        Some(message) => html! { <span class="lead-field-error" data-field={field.name()}>{message}</span> },
        None => html! {},
    };

    html! {
        <>
            <button class="lead-trigger" onclick={open}>
                {"RO‘YXATDAN O‘TISH"}
            </button>
            if *is_open {
                <div class="lead-backdrop" onclick={close.clone()}>
                    <div class="lead-modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button class="lead-close" aria-label="Yopish" onclick={close}>{"×"}</button>
                        <form {onsubmit}>
                            <div class="lead-field">
                                <label>{"Ism"}</label>
                                <input
                                    name="name"
                                    type="text"
                                    autocomplete="name"
                                    placeholder="Ismingizni kiriting"
                                    value={form.name.clone()}
                                    oninput={on_name}
                                />
                                {field_error(Field::Name)}
                            </div>
                            <div class="lead-field">
                                <label>{"Telefon Raqam"}</label>
                                <PhoneInput value={form.phone.clone()} on_change={on_phone} />
                                {field_error(Field::Phone)}
                            </div>
                            <button type="submit" class="lead-submit" disabled={pending}>
                                {if pending { "Yuborilmoqda..." } else { "Yuborish" }}
                            </button>
                        </form>
                        if let Some(message) = form.status.server_error() {
                            <p class="lead-server-error">{message}</p>
                        }
                    </div>
                </div>
            }
            <style>
            {r#".lead-trigger {
                width: 100%;
                padding: 1.2rem 4rem;
                border: none;
                border-radius: 100px;
                color: white;
                font-weight: 600;
                font-size: 1.5rem;
                cursor: pointer;
                background: linear-gradient(90deg, #027D1D 0%, #31BA4F 48.08%, #007B1B 100%);
                transition: opacity 0.2s ease;
            }
            .lead-trigger:hover { opacity: 0.9; }
            .lead-backdrop {
                position: fixed;
                inset: 0;
                z-index: 100;
                display: flex;
                align-items: center;
                justify-content: center;
                background: rgba(0, 0, 0, 0.5);
                backdrop-filter: blur(4px);
            }
            .lead-modal {
                position: relative;
                width: 90%;
                max-width: 480px;
                padding: 2.5rem 2rem 2rem;
                border-radius: 12px;
                background: white;
            }
            .lead-close {
                position: absolute;
                top: 0.5rem;
                right: 0.75rem;
                border: none;
                background: none;
                font-size: 1.75rem;
                cursor: pointer;
            }
            .lead-field {
                display: flex;
                flex-direction: column;
                gap: 0.4rem;
                margin-bottom: 1rem;
            }
            .lead-field input {
                height: 2.75rem;
                padding: 0 0.75rem;
                border: 1px solid #d1d5db;
                border-radius: 6px;
                font-size: 1rem;
            }
            .lead-field-error, .lead-server-error {
                color: #ef4444;
                font-size: 0.875rem;
            }
            .lead-server-error { text-align: center; margin-top: 1rem; }
            .lead-submit {
                width: 100%;
                padding: 15px 0;
                border: none;
                border-radius: 100px;
                color: white;
                font-weight: 600;
                cursor: pointer;
                background: linear-gradient(90deg, #027D1D 0%, #31BA4F 48.08%, #007B1B 100%);
            }
            .lead-submit:disabled { opacity: 0.5; cursor: default; }"#}
            </style>
        </>
    }
}
