use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// The app route behind `href`, or `None` for destinations we don't render
/// (footer-only pages, `#` placeholders, external URLs).
pub fn internal_route(href: &str) -> Option<Route> {
    match Route::recognize(href) {
        Some(Route::NotFound) | None => None,
        route => route,
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteLinkProps {
    pub href: String,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub aria_label: Option<String>,
    #[prop_or_default]
    pub children: Children,
}

/// Router link for our own pages, plain anchor for everything else.
#[function_component(SiteLink)]
pub fn site_link(props: &SiteLinkProps) -> Html {
    match internal_route(&props.href) {
        Some(route) => html! {
            <Link<Route> to={route} classes={props.classes.clone()}>
                { for props.children.iter() }
            </Link<Route>>
        },
        None => html! {
            <a
                href={props.href.clone()}
                class={props.classes.clone()}
                aria-label={props.aria_label.clone()}
            >
                { for props.children.iter() }
            </a>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_pages_route_internally() {
        assert_eq!(internal_route("/"), Some(Route::Home));
        assert_eq!(internal_route("/clients"), Some(Route::Clients));
        assert_eq!(internal_route("/professionals"), Some(Route::Professionals));
    }

    #[test]
    fn other_destinations_stay_anchors() {
        assert_eq!(internal_route("/pricing"), None);
        assert_eq!(internal_route("/gift-cards"), None);
    }
}
