use yew::prelude::*;

use crate::components::{
    app_download::AppDownloadBanner, feature_highlights::FeatureHighlights, footer::Footer,
    header::Header, hero::HeroSection, pricing::Pricing, testimonials::Testimonials,
};
use crate::hooks::use_scroll_to_top;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();

    html! {
        <div class="page">
            <Header />
            <main>
                <HeroSection />
                <FeatureHighlights />
                <Testimonials />
                <Pricing />
                <AppDownloadBanner />
            </main>
            <Footer />
        </div>
    }
}
