use yew::prelude::*;

use crate::components::feature_highlights::SectionHeading;
use crate::content::{use_site, PricingPlan};

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    plan: PricingPlan,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let plan = &props.plan;

    html! {
        <div class={classes!("plan-card", plan.popular.then(|| "plan-card--popular"))}>
            {
                if plan.popular {
                    html! { <div class="plan-card__badge"><span>{"Most Popular"}</span></div> }
                } else {
                    html! {}
                }
            }

            <div class="plan-card__header">
                <h3>{&plan.name}</h3>
                <div class="plan-card__price">
                    <span class="plan-card__amount">{&plan.price}</span>
                    { for plan.period.iter().map(|period| html! {
                        <span class="plan-card__period">{period}</span>
                    }) }
                </div>
                <p>{&plan.description}</p>
            </div>

            <ul class="plan-card__features">
                { for plan.features.iter().map(|feature| html! {
                    <li class="included">
                        <span class="plan-card__mark">{"✓"}</span>
                        <span>{feature}</span>
                    </li>
                }) }
                { for plan.not_included.iter().map(|feature| html! {
                    <li class="excluded">
                        <span class="plan-card__mark">{"✕"}</span>
                        <span>{feature}</span>
                    </li>
                }) }
            </ul>

            <button class={plan.cta_style.class()}>{&plan.cta_label}</button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    let site = use_site();
    let pricing = &site.pricing;

    html! {
        <section class="section section--muted">
            <div class="section__inner">
                <SectionHeading
                    title="Simple, Transparent Pricing"
                    subtitle="Choose the perfect plan for your business. Start free and upgrade as you grow."
                />

                <div class="plan-grid">
                    { for pricing.plans.iter().map(|plan| html! {
                        <PlanCard plan={plan.clone()} />
                    }) }
                </div>

                <div class="faq-list">
                    <h3>{"Frequently Asked Questions"}</h3>
                    { for pricing.faqs.iter().map(|faq| html! {
                        <div class="faq-entry">
                            <h4>{&faq.question}</h4>
                            <p>{&faq.answer}</p>
                        </div>
                    }) }
                </div>

                <div class="pricing-band">
                    <h3>{"Ready to grow your business?"}</h3>
                    <p>{"Join thousands of professionals who trust us to manage their bookings and grow their business."}</p>
                    <div class="button-row">
                        <button class="button button--light">{"Start Free Trial"}</button>
                        <button class="button button--ghost">{"Schedule Demo"}</button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .plan-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }

                .plan-card {
                    position: relative;
                    background: #ffffff;
                    border: 2px solid #e5e7eb;
                    border-radius: 1rem;
                    padding: 2rem;
                    transition: all 0.3s ease;
                }

                .plan-card:hover {
                    border-color: #d1d5db;
                }

                .plan-card--popular,
                .plan-card--popular:hover {
                    border-color: #000000;
                    transform: scale(1.05);
                }

                .plan-card__badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                }

                .plan-card__badge span {
                    background: #000000;
                    color: #ffffff;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .plan-card__header {
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .plan-card__header h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .plan-card__price {
                    margin-bottom: 1rem;
                }

                .plan-card__amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                }

                .plan-card__period {
                    color: #4b5563;
                    margin-left: 0.5rem;
                }

                .plan-card__header p {
                    color: #4b5563;
                }

                .plan-card__features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .plan-card__features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    color: #374151;
                }

                .plan-card__mark {
                    flex-shrink: 0;
                    width: 1.25rem;
                    height: 1.25rem;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.875rem;
                }

                .included .plan-card__mark {
                    background: #dcfce7;
                    color: #16a34a;
                }

                .excluded {
                    opacity: 0.5;
                }

                .excluded .plan-card__mark {
                    background: #f3f4f6;
                    color: #9ca3af;
                }

                .plan-cta {
                    width: 100%;
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }

                .plan-cta--solid {
                    background: #000000;
                    color: #ffffff;
                    border: none;
                }

                .plan-cta--solid:hover {
                    background: #1f2937;
                }

                .plan-cta--outline {
                    background: transparent;
                    color: #000000;
                    border: 2px solid #000000;
                }

                .plan-cta--outline:hover {
                    background: #000000;
                    color: #ffffff;
                }

                .faq-list {
                    max-width: 48rem;
                    margin: 4rem auto 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .faq-list h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .faq-entry {
                    background: #ffffff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                }

                .faq-entry h4 {
                    font-weight: 600;
                    margin: 0 0 0.5rem;
                }

                .faq-entry p {
                    color: #4b5563;
                    margin: 0;
                }

                .pricing-band {
                    margin-top: 4rem;
                    text-align: center;
                    background: #000000;
                    color: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                }

                .pricing-band h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .pricing-band p {
                    color: #d1d5db;
                    max-width: 28rem;
                    margin: 0 auto 1.5rem;
                }

                @media (max-width: 1024px) {
                    .plan-grid {
                        grid-template-columns: 1fr;
                    }

                    .plan-card--popular,
                    .plan-card--popular:hover {
                        transform: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
