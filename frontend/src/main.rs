use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod content;
mod hooks;
mod timers;

mod components {
    pub mod app_download;
    pub mod feature_highlights;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod pricing;
    pub mod site_link;
    pub mod testimonials;
}

mod pages {
    pub mod clients;
    pub mod home;
    pub mod not_found;
    pub mod professionals;
    pub mod sections;
}

use content::SiteContent;
use pages::{clients::Clients, home::Home, not_found::NotFound, professionals::Professionals};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/clients")]
    Clients,
    #[at("/professionals")]
    Professionals,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Clients => {
            info!("Rendering Clients page");
            html! { <Clients /> }
        }
        Route::Professionals => {
            info!("Rendering Professionals page");
            html! { <Professionals /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<SiteContent>> context={props.content.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<SiteContent>>>
    }
}

#[function_component]
fn ContentUnavailable() -> Html {
    html! {
        <div class="content-unavailable">
            <h1>{"We'll be right back"}</h1>
            <p>{"The site content failed to load. Please try again shortly."}</p>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::embedded() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => {
            error!("Failed to load site content: {}", err);
            yew::Renderer::<ContentUnavailable>::new().render();
        }
    }
}
