use yew::prelude::*;

use crate::content::{use_site, Feature, ServiceTile};

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
    #[prop_or_default]
    pub learn_more: bool,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = &props.feature;
    let accent = feature
        .accent
        .as_ref()
        .map(|accent| format!("feature-card--{}", accent));

    html! {
        <div class={classes!("feature-card", accent)}>
            <div class="feature-card__icon">{&feature.icon}</div>
            <h3>{&feature.title}</h3>
            <p>{&feature.description}</p>
            {
                if props.learn_more {
                    html! { <button class="feature-card__more">{"Learn more →"}</button> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <h2>{&props.title}</h2>
            { for props.subtitle.iter().map(|subtitle| html! { <p>{subtitle}</p> }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceTilesProps {
    pub services: Vec<ServiceTile>,
}

#[function_component(ServiceTiles)]
pub fn service_tiles(props: &ServiceTilesProps) -> Html {
    html! {
        <div class="tile-grid">
            { for props.services.iter().map(|service| html! {
                <div class="tile">
                    <div class="tile__emoji">{&service.emoji}</div>
                    <div class="tile__name">{&service.name}</div>
                    { for service.bookings.iter().map(|bookings| html! {
                        <div class="tile__meta">{format!("{} bookings", bookings)}</div>
                    }) }
                </div>
            }) }
        </div>
    }
}

#[function_component(FeatureHighlights)]
pub fn feature_highlights() -> Html {
    let site = use_site();
    let highlights = &site.highlights;

    html! {
        <section class="section section--muted">
            <div class="section__inner">
                <SectionHeading
                    title="Why Choose Our Platform?"
                    subtitle="Discover the features that make booking beauty and wellness services easier than ever"
                />

                <div class="feature-grid">
                    { for highlights.features.iter().map(|feature| html! {
                        <FeatureCard feature={feature.clone()} learn_more={true} />
                    }) }
                </div>

                <div class="cta-card">
                    <h3>{"Ready to get started?"}</h3>
                    <p>{"Join thousands of satisfied customers who trust us with their beauty and wellness needs."}</p>
                    <div class="button-row">
                        <button class="button button--solid">{"Book Now"}</button>
                        <button class="button button--outline">{"Browse Services"}</button>
                    </div>
                </div>

                <div class="categories">
                    <h3>{"Popular Service Categories"}</h3>
                    <ServiceTiles services={highlights.categories.clone()} />
                </div>
            </div>

            <style>
                {r#"
                .cta-card {
                    margin-top: 4rem;
                    text-align: center;
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 2rem;
                }

                .cta-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .cta-card p {
                    color: #4b5563;
                    max-width: 28rem;
                    margin: 0 auto 1.5rem;
                }

                .categories {
                    margin-top: 4rem;
                }

                .categories h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </section>
    }
}
