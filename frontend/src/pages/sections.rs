//! Inline sections shared by the clients and professionals pages.

use yew::prelude::*;

use crate::components::feature_highlights::{FeatureCard, SectionHeading};
use crate::content::{Feature, Step};

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub features: Vec<Feature>,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    html! {
        <section class="section section--muted">
            <div class="section__inner">
                <SectionHeading title={props.title.clone()} subtitle={props.subtitle.clone()} />
                <div class="feature-grid">
                    { for props.features.iter().map(|feature| html! {
                        <FeatureCard feature={feature.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepsProps {
    pub steps: Vec<Step>,
    #[prop_or_default]
    pub compact: bool,
}

/// Numbered circles with a title and blurb, one column per step.
#[function_component(Steps)]
pub fn steps(props: &StepsProps) -> Html {
    let columns = format!("--step-columns: {};", props.steps.len().max(1));
    html! {
        <div class={classes!("steps", props.compact.then(|| "steps--compact"))} style={columns}>
            { for props.steps.iter().map(|step| html! {
                <div class="step">
                    <div class="step__number">{&step.step}</div>
                    <h3>{&step.title}</h3>
                    <p>{&step.description}</p>
                </div>
            }) }
        </div>
    }
}
