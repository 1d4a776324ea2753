use log::info;
use yew::prelude::*;

use crate::components::modal::LeadModal;
use crate::components::scroll_arrow::ScrollDownArrow;
use crate::config;

const BENEFITS: &[&str] = &[
    "Exchange dasturlari orqali qanday qilib Amerika - Koreya - Italiya kabi davlatlarda grandda o‘qish",
    "Work & Travel: Talabalik davrida qanday turar joy va daromad olish imkoniyatlari",
    "Arzon kontrakt bilan xalqaro diplom olish yo‘llari",
];

fn render_headline(extra: Option<&'static str>) -> Html {
    html! {
        <>
            <h1 class={classes!("landing-headline", extra)}>
                {"ABITURIYENTLIKDAN "}
                <span class="accent">{"YEVROPA DIPLOMINI"}</span>
                {" OLISHGACHA BARCHA QADAMLAR"}
            </h1>
            <p class={classes!("landing-lead", extra)}>
                <strong>{"Nordik International University"}</strong>
                {" arzon kontrakt evaziga chet elda o‘qish, Work & Travel dasturida qatnashish va xalqaro diplom olish imkoniyatlarini oching."}
            </p>
        </>
    }
}

fn render_thank_you() -> Html {
    html! {
        <div class="landing-column thank-you">
            <h1 class="landing-headline">
                {"Siz ro’yxatdan "}
                <span class="accent">{"muvaffaqiyatli o’tdingiz!"}</span>
            </h1>
            <p class="thank-you-text">
                {"Vebinarda qatnashish uchun, yopiq telegram kanalimizga obuna boling!"}
            </p>
            <img src="/assets/vector-five.svg" alt="vector" class="thank-you-vector" />
            <a href={config::TELEGRAM_CHANNEL_URL} target="_blank" class="telegram-cta">
                <img src="/assets/telegram.svg" alt="telegram-icon" />
                <span>{"OBUNA BO’LISH"}</span>
            </a>
        </div>
    }
}

#[function_component]
pub fn Home() -> Html {
    let is_success = use_state(|| false);

    let on_success = {
        let is_success = is_success.clone();
        Callback::from(move |_| {
            info!("Landing switched to thank-you view");
            is_success.set(true);
        })
    };

    let submitted = *is_success;

    html! {
        <div class={classes!("landing-page", submitted.then(|| "submitted"))}>
            <div class="event-banner">
                <img src="/assets/calendar.svg" alt="calendar" />
                <span class="event-date">{config::EVENT_DATE}</span>
                <span class="event-details">{config::EVENT_DETAILS}</span>
            </div>
            <div class="landing-content">
                if !submitted {
                    <div class="landing-column">
                        <div class="desktop-only">{render_headline(None)}</div>
                        <ul class="benefits">
                            { for BENEFITS.iter().map(|benefit| html! {
                                <li>
                                    <img src="/assets/checked.svg" alt="checked" />
                                    <span>{*benefit}</span>
                                </li>
                            }) }
                        </ul>
                        <div class="prize-note">
                            <img src="/assets/prize.svg" alt="prize" />
                            <p>{"Taqdimot qatnashchilari uchun grant va stipendiya imkoniyatlari haqida yopiq ma’lumotlar taqdim etiladi!"}</p>
                        </div>
                        <LeadModal {on_success} />
                        <div class="registration-warning">
                            <img src="/assets/warning.svg" alt="warning" />
                            <span>{"Faqat ro‘yxatdan o‘tganlar qatnasha oladi"}</span>
                        </div>
                    </div>
                }
                <div class="speaker-column">
                    if !submitted {
                        <div class="mobile-only">{render_headline(Some("centered"))}</div>
                    }
                    <img src="/assets/Sh-Mustafakulov.png" alt="Speaker" class="speaker-image" />
                    <img src="/assets/date.png" alt="date" class="speaker-date" />
                </div>
                if submitted {
                    {render_thank_you()}
                }
            </div>
            <ScrollDownArrow />
            <style>
            {r#".landing-page {
                position: relative;
                min-height: 100vh;
                overflow: hidden;
                background-image: url('/assets/bg-image.png');
                background-size: cover;
                background-position: center;
                font-family: 'Poppins', sans-serif;
            }
            .event-banner {
                display: inline-flex;
                align-items: center;
                gap: 0.75rem;
                margin: 0 0 2rem 6vw;
                padding: 0.8rem 2rem;
                background: white;
                border-radius: 0 0 30px 30px;
                box-shadow: 0px 4px 24px 0px #0000001F;
            }
            .event-banner img { width: 2rem; }
            .event-date { font-family: 'Bebas Neue', sans-serif; font-size: 1.5rem; }
            .event-details { color: #0B4075; }
            .landing-content {
                display: flex;
                justify-content: space-between;
                align-items: flex-start;
                gap: 2rem;
                margin: 0 6vw;
            }
            .landing-page.submitted .landing-content { align-items: center; min-height: 100vh; }
            .landing-page.submitted .event-banner { display: none; }
            .landing-column, .speaker-column { width: 50%; }
            .speaker-column { position: relative; }
            .speaker-image { width: 90%; }
            .speaker-date { position: absolute; left: 50%; bottom: 0; width: 40%; transform: translate(-66%, -66%); }
            .landing-headline {
                font-family: 'Bebas Neue', sans-serif;
                font-size: 2.8vw;
                line-height: 100%;
            }
            .accent { color: #0B4075; }
            .landing-lead { color: #374151; line-height: 150%; width: 70%; }
            .centered { text-align: center; width: 100%; }
            .benefits { list-style: none; padding: 0; }
            .benefits li { display: flex; align-items: flex-start; gap: 1rem; margin: 1.2rem 0; font-weight: 550; }
            .benefits img { width: 1.5rem; }
            .prize-note {
                display: flex;
                align-items: center;
                gap: 1rem;
                padding: 1rem;
                margin-bottom: 2rem;
                background: white;
                border-radius: 50px;
            }
            .prize-note img { width: 4.5rem; }
            .registration-warning { display: flex; align-items: center; gap: 1rem; margin-top: 2rem; font-weight: 550; }
            .registration-warning img { width: 1.5rem; }
            .thank-you { text-align: center; }
            .thank-you-text { color: #374151; font-size: 2vw; }
            .thank-you-vector { width: 30vw; margin: 1.5rem auto; display: block; }
            .telegram-cta {
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 2vw;
                padding: 1rem 6vw;
                border-radius: 100px;
                color: white;
                font-weight: 600;
                text-decoration: none;
                background: linear-gradient(90deg, #027D1D 0%, #31BA4F 48.08%, #007B1B 100%);
            }
            .telegram-cta img { width: 4vw; }
            .mobile-only { display: none; }
            @media (max-width: 640px) {
                .landing-content { flex-direction: column-reverse; }
                .landing-column, .speaker-column { width: 100%; }
                .desktop-only { display: none; }
                .mobile-only { display: block; }
                .landing-headline { font-size: 8vw; }
                .thank-you-text { font-size: 4vw; }
                .event-banner { display: flex; width: 95%; margin: 0 auto 2vw; justify-content: center; }
            }"#}
            </style>
        </div>
    }
}
