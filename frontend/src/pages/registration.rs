use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{window, HtmlInputElement, HtmlSelectElement, Window};
use yew::prelude::*;

use crate::api::FormApi;
use crate::components::phone_input::PhoneInput;
use crate::config;
use crate::forms::catalog::{EducationType, REGIONS};
use crate::forms::registration::{RegistrationAction, RegistrationForm};
use crate::forms::submission::run_submission;
use crate::forms::validation::Field;

fn is_large_screen(window: &Window) -> bool {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map_or(false, |w| w >= config::LARGE_SCREEN_MIN_WIDTH)
}

fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

#[function_component]
pub fn Registration() -> Html {
    let form = use_reducer(RegistrationForm::default);
    let large_screen = use_state(|| false);

    // Background art only fits next to the form on wide screens
    {
        let large_screen = large_screen.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window().map(|window| {
                    let update = {
                        let window = window.clone();
                        move || large_screen.set(is_large_screen(&window))
                    };
                    update();
                    let resize_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    );
                    (window, resize_callback)
                });

                move || {
                    if let Some((window, resize_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let on_full_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(RegistrationAction::SetFullName(input.value()));
        })
    };

    let on_phone = {
        let form = form.clone();
        Callback::from(move |phone: String| form.dispatch(RegistrationAction::SetPhone(phone)))
    };

    let on_region = {
        let form = form.clone();
        Callback::from(move |e: Event| form.dispatch(RegistrationAction::SetRegion(select_value(&e))))
    };

    let on_education_type = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let education_type = EducationType::from_label(&select_value(&e));
            form.dispatch(RegistrationAction::SetEducationType(education_type));
        })
    };

    let on_direction = {
        let form = form.clone();
        Callback::from(move |e: Event| form.dispatch(RegistrationAction::SetDirection(select_value(&e))))
    };

    let onclick = {
        let form = form.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let dispatcher = form.dispatcher();
            let api = FormApi::default();
            spawn_local(run_submission(
                form.begin_submit(),
                move |registration| async move { api.submit_registration(&registration).await },
                move |event| dispatcher.dispatch(RegistrationAction::Submit(event)),
            ));
        })
    };

    let pending = form.status.is_pending();
    let field_error = |field: Field| match form.status.errors.get(field) {
        Some(message) => html! { <span class="registration-error" data-field={field.name()}>{message}</span> },
        None => html! {},
    };

    let background = if *large_screen {
        "background-image: url('/assets/bg-reg.png');"
    } else {
        "background-image: none;"
    };

    html! {
        <div class="registration-page" style={background}>
            <div class="registration-panel">
                if form.status.is_success() {
                    <div class="registration-success">
                        <img src="/assets/logo.svg" alt="univer-logo" class="registration-logo" />
                        <p class="registration-title">
                            <strong>{"Tabriklaymiz"}</strong>
                            {" talaba bo'lish uchun arizani to'ldirdingiz"}
                        </p>
                    </div>
                } else {
                    <img src="/assets/logo.svg" alt="univer-logo" class="registration-logo" />
                    <p class="registration-title">
                        <strong>{"Nordik universitetida"}</strong>
                        {" talaba bo'lish uchun pastdagi formani to'ldiring"}
                    </p>
                    <div class="registration-fields">
                        <div class="registration-field">
                            <label>{"Ism"}</label>
                            <input
                                placeholder="Ismingizni kiriting"
                                value={form.full_name.clone()}
                                oninput={on_full_name}
                            />
                            {field_error(Field::Name)}
                        </div>
                        <div class="registration-field">
                            <label>{"Telefoningizni kiriting"}</label>
                            <PhoneInput value={form.phone.clone()} on_change={on_phone} />
                            {field_error(Field::Phone)}
                        </div>
                        <div class="registration-field">
                            <label>{"Qaysi viloyatdansiz"}</label>
                            <select onchange={on_region}>
                                <option value="" selected={form.region.is_empty()}>{"Viloyatni tanlang"}</option>
                                { for REGIONS.iter().map(|region| html! {
                                    <option key={*region} value={*region} selected={form.region == *region}>
                                        {*region}
                                    </option>
                                }) }
                            </select>
                            {field_error(Field::Region)}
                        </div>
                        <div class="registration-field">
                            <label>{"Ta'lim shakli"}</label>
                            <select onchange={on_education_type}>
                                <option value="" selected={form.education_type.is_none()}>{"Ta'lim turini tanlang"}</option>
                                { for EducationType::ALL.iter().map(|t| html! {
                                    <option key={t.label()} value={t.label()} selected={form.education_type == Some(*t)}>
                                        {t.label()}
                                    </option>
                                }) }
                            </select>
                            {field_error(Field::EducationType)}
                        </div>
                        <div class="registration-field">
                            <label>{"Yo'nalishni tanlang"}</label>
                            <select onchange={on_direction} disabled={form.education_type.is_none()}>
                                <option value="" selected={form.direction.is_empty()}>{"Yo'nalishni tanlang"}</option>
                                { for form.available_directions().iter().map(|direction| html! {
                                    <option key={*direction} value={*direction} selected={form.direction == *direction}>
                                        {*direction}
                                    </option>
                                }) }
                            </select>
                            {field_error(Field::Direction)}
                        </div>

                        if let Some(message) = form.status.server_error() {
                            <p class="registration-server-error">{message}</p>
                        }

                        <button class="registration-submit" {onclick} disabled={pending}>
                            {if pending { "Yuborilyapti" } else { "Yuborish" }}
                        </button>
                    </div>
                }
            </div>
            <div class="registration-art">
                <img src="/assets/people.png" alt="students" />
            </div>
            <style>
            {r#".registration-page {
                position: relative;
                display: flex;
                width: 100%;
                min-height: 100vh;
                background-size: cover;
                background-position: center;
            }
            .registration-panel {
                width: 50%;
                min-height: 100vh;
                padding: 2vw 6vw;
                background: white;
                box-sizing: border-box;
            }
            .registration-logo { width: 10vw; }
            .registration-title {
                font-family: 'Bebas Neue', sans-serif;
                font-size: 1.5vw;
                line-height: 120%;
                width: 75%;
                margin-top: 1vw;
            }
            .registration-title strong { color: #0B4075; }
            .registration-success {
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                min-height: 80vh;
            }
            .registration-success .registration-title { font-size: 4vw; text-align: center; }
            .registration-fields { display: flex; flex-direction: column; gap: 1vw; margin-top: 2vw; }
            .registration-field { display: flex; flex-direction: column; gap: 0.5vw; }
            .registration-field label { font-size: 1vw; }
            .registration-field input, .registration-field select {
                width: 100%;
                height: 3vw;
                padding: 0 1vw;
                font-size: 1vw;
                border: 1px solid #d1d5db;
                border-radius: 2px;
                box-sizing: border-box;
            }
            .registration-error { color: #ef4444; font-size: 1vw; }
            .registration-server-error { color: #f87171; text-align: center; }
            .registration-submit {
                margin-top: 2vw;
                height: 3vw;
                padding: 0 5vw;
                border: none;
                border-radius: 6px;
                color: white;
                font-size: 1vw;
                background: #0B4075;
                cursor: pointer;
            }
            .registration-submit:disabled { opacity: 0.6; cursor: default; }
            .registration-art { width: 50%; display: flex; align-items: flex-end; }
            .registration-art img { width: 100%; object-fit: cover; }
            @media (max-width: 640px) {
                .registration-page { display: block; }
                .registration-panel { width: 100%; padding: 2vw 6vw; }
                .registration-art { display: none; }
                .registration-logo { width: 30vw; }
                .registration-title { font-size: 8vw; width: 100%; }
                .registration-success .registration-title { font-size: 8vw; }
                .registration-fields { gap: 3vw; }
                .registration-field label,
                .registration-field input,
                .registration-field select,
                .registration-submit { font-size: 4vw; }
                .registration-field input,
                .registration-field select,
                .registration-submit { height: 10vw; }
                .registration-field input, .registration-field select { padding: 0 4vw; }
            }"#}
            </style>
        </div>
    }
}
