use yew::prelude::*;

use crate::components::{
    app_download::AppDownloadBanner, feature_highlights::SectionHeading, footer::Footer,
    header::Header, hero::HeroSection, pricing::Pricing, testimonials::Testimonials,
};
use crate::content::use_site;
use crate::hooks::use_scroll_to_top;
use crate::pages::sections::{FeatureGrid, Steps};

#[function_component(Professionals)]
pub fn professionals() -> Html {
    use_scroll_to_top();
    let site = use_site();
    let pros = &site.professionals;

    html! {
        <div class="page">
            <Header />
            <main>
                <HeroSection
                    title="Grow your business with powerful booking tools"
                    subtitle="Join thousands of professionals who trust us to manage their appointments, payments, and customer relationships."
                    cta_text="Start Free Trial"
                />

                <FeatureGrid
                    title="Everything You Need to Succeed"
                    subtitle="Powerful tools designed to help beauty and wellness professionals grow their business"
                    features={pros.features.clone()}
                />

                <section class="section">
                    <div class="section__inner">
                        <SectionHeading
                            title="Success Stories"
                            subtitle="See how professionals are growing their business with our platform"
                        />
                        <div class="stories">
                            { for pros.stories.iter().map(|story| html! {
                                <div class="story">
                                    <div class="avatar avatar--large">{&story.initials}</div>
                                    <h3>{&story.name}</h3>
                                    <div class="story__growth">{&story.growth}</div>
                                    <p>{&story.description}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section class="section section--muted">
                    <div class="section__inner">
                        <SectionHeading
                            title="Get Started in Minutes"
                            subtitle="Setting up your professional profile is quick and easy"
                        />
                        <Steps steps={pros.steps.clone()} compact={true} />
                        <div class="trial-cta">
                            <button class="button button--solid button--large">{"Start Your Free Trial"}</button>
                            <p>{"No credit card required • 30-day free trial"}</p>
                        </div>
                    </div>
                </section>

                <Testimonials />
                <Pricing />
                <AppDownloadBanner />
            </main>
            <Footer />

            <style>
                {r#"
                .stories {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .story {
                    background: #f9fafb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    text-align: center;
                }

                .story h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }

                .story__growth {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #16a34a;
                    margin-bottom: 0.5rem;
                }

                .story p {
                    color: #4b5563;
                }

                .trial-cta {
                    margin-top: 3rem;
                    text-align: center;
                }

                .trial-cta p {
                    margin-top: 0.5rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                @media (max-width: 768px) {
                    .stories {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
