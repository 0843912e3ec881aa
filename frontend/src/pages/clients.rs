use yew::prelude::*;

use crate::components::{
    app_download::AppDownloadBanner,
    feature_highlights::{SectionHeading, ServiceTiles},
    footer::Footer,
    header::Header,
    hero::HeroSection,
    testimonials::Testimonials,
};
use crate::content::use_site;
use crate::hooks::use_scroll_to_top;
use crate::pages::sections::{FeatureGrid, Steps};

#[function_component(Clients)]
pub fn clients() -> Html {
    use_scroll_to_top();
    let site = use_site();
    let clients = &site.clients;

    html! {
        <div class="page">
            <Header />
            <main>
                <HeroSection
                    title="Find and book your perfect appointment"
                    subtitle="Discover top-rated beauty and wellness professionals in your area. Book instantly, pay securely, and enjoy amazing services."
                    cta_text="Book Now"
                />

                <FeatureGrid
                    title="Why Clients Love Us"
                    subtitle="Experience the easiest way to book beauty and wellness appointments"
                    features={clients.features.clone()}
                />

                <section class="section">
                    <div class="section__inner">
                        <SectionHeading
                            title="How It Works"
                            subtitle="Booking your next appointment is easier than ever"
                        />
                        <Steps steps={clients.steps.clone()} />
                    </div>
                </section>

                <Testimonials />

                <section class="section section--muted">
                    <div class="section__inner">
                        <SectionHeading
                            title="Popular Services"
                            subtitle="Discover the most booked services in your area"
                        />
                        <ServiceTiles services={clients.services.clone()} />
                    </div>
                </section>

                <AppDownloadBanner />
            </main>
            <Footer />
        </div>
    }
}
