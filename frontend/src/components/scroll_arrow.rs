use web_sys::window;
use yew::prelude::*;

#[function_component(ScrollDownArrow)]
pub fn scroll_down_arrow() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = window() {
            let height = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(600.0);
            window.scroll_by_with_x_and_y(0.0, height);
        }
    });

    html! {
        <button class="scroll-down-arrow" aria-label="Pastga" {onclick}>
            <span class="scroll-down-chevron"></span>
            <style>
            {r#".scroll-down-arrow {
                position: absolute;
                left: 50%;
                bottom: 1.5rem;
                transform: translateX(-50%);
                background: none;
                border: none;
                cursor: pointer;
                animation: scroll-bounce 1.6s ease-in-out infinite;
            }
            .scroll-down-chevron {
                display: block;
                width: 18px;
                height: 18px;
                border-right: 3px solid #0B4075;
                border-bottom: 3px solid #0B4075;
                transform: rotate(45deg);
            }
            @keyframes scroll-bounce {
                0%, 100% { transform: translate(-50%, 0); }
                50% { transform: translate(-50%, 8px); }
            }
            @media (min-width: 640px) {
                .scroll-down-arrow { display: none; }
            }"#}
            </style>
        </button>
    }
}
