use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod api;
mod config;
mod forms {
    pub mod catalog;
    pub mod lead;
    pub mod phone;
    pub mod registration;
    pub mod submission;
    pub mod validation;
}
mod components {
    pub mod modal;
    pub mod phone_input;
    pub mod scroll_arrow;
}
mod pages {
    pub mod home;
    pub mod registration;
}

use pages::{
    home::Home,
    registration::Registration,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/registration")]
    Registration,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Registration => {
            info!("Rendering Registration page");
            html! { <Registration /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application, form API at {}", config::get_form_api_url());
    yew::Renderer::<App>::new().render();
}
