use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::hooks::use_scroll_to_top;
use crate::Route;

/// Footer-only destinations (`/pricing`, `/about`, ...) end up here.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page">
            <Header />
            <main class="section not-found">
                <div class="section__inner">
                    <h1>{"This page isn't available yet"}</h1>
                    <p>{"The page you're looking for is part of the full platform and isn't included in this demo."}</p>
                    <Link<Route> to={Route::Home} classes="button button--solid">
                        {"Back to home"}
                    </Link<Route>>
                </div>
            </main>
            <Footer />
        </div>
    }
}
