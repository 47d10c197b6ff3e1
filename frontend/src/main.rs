use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod styles;
mod components {
    pub mod animated_counter;
    pub mod icons;
}
mod pages {
    pub mod landing;
    pub mod signup;
}
mod services {
    pub mod carousel;
    pub mod clock;
    pub mod jitter;
    pub mod theme;
    pub mod weather;
}

use pages::{landing::Landing, signup::Signup};
use services::theme::BrowserThemeService;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/signup")]
    Signup,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Signup => {
            info!("Rendering Signup page");
            html! { <Signup /> }
        }
        Route::NotFound => {
            info!("Unknown route, back to landing");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{ styles::BASE_CSS }</style>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // Set the dark class before anything is drawn so the page never flashes
    // the wrong theme.
    let theme = BrowserThemeService::browser().apply_initial();
    info!("Starting RunCrew with {} theme", theme);

    yew::Renderer::<App>::new().render();
}
