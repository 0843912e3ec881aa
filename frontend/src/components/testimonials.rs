use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::{star_fill, CarouselAction, CarouselState, CarouselTimers};
use crate::components::feature_highlights::SectionHeading;
use crate::content::use_site;
use crate::timers::BrowserScheduler;

fn render_stars(rating: u8) -> Html {
    html! {
        <div class="stars" aria-label={format!("{} out of 5 stars", rating)}>
            { for star_fill(rating).iter().map(|filled| html! {
                <span class={classes!("star", filled.then(|| "star--filled"))}>{"★"}</span>
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let site = use_site();
    let entries = &site.testimonials.entries;
    let state = use_reducer({
        let len = entries.len();
        move || CarouselState::new(len)
    });

    let timers = {
        let state = state.clone();
        use_mut_ref(move || {
            let dispatch = Callback::from(move |action| state.dispatch(action));
            CarouselTimers::new(BrowserScheduler, dispatch)
        })
    };

    // Advance timer follows the autoplay flag.
    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |auto_playing| {
                timers.borrow_mut().sync_autoplay(*auto_playing);
                || ()
            },
            state.auto_playing(),
        );
    }

    // Nothing may fire after unmount.
    {
        let timers = timers.clone();
        use_effect_with_deps(
            move |_| move || timers.borrow_mut().cancel_all(),
            (),
        );
    }

    let navigate = {
        let state = state.clone();
        let timers = timers.clone();
        Callback::from(move |action: CarouselAction| {
            debug_assert!(action.is_manual());
            timers.borrow_mut().interrupt();
            state.dispatch(action);
        })
    };

    let on_previous = navigate.reform(|_: MouseEvent| CarouselAction::Previous);
    let on_next = navigate.reform(|_: MouseEvent| CarouselAction::Next);

    let current = entries.get(state.index());

    html! {
        <section class="section testimonials">
            <div class="section__inner">
                <SectionHeading
                    title="What Our Customers Say"
                    subtitle="Don't just take our word for it. Here's what real customers have to say about their experience."
                />

                <div class="carousel">
                    {
                        match current {
                            Some(t) => html! {
                                <div class="carousel__slide">
                                    { render_stars(t.rating) }
                                    <blockquote>{format!("\"{}\"", t.quote)}</blockquote>
                                    <div class="carousel__author">
                                        <div class="avatar">{&t.avatar}</div>
                                        <div>
                                            <div class="carousel__name">{&t.author}</div>
                                            <div class="carousel__meta">
                                                {format!("{} • {}", t.location, t.service)}
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            },
                            None => html! { <div class="carousel__slide"></div> },
                        }
                    }

                    <button
                        class="carousel__arrow carousel__arrow--prev"
                        onclick={on_previous}
                        aria-label="Previous testimonial"
                    >
                        {"←"}
                    </button>
                    <button
                        class="carousel__arrow carousel__arrow--next"
                        onclick={on_next}
                        aria-label="Next testimonial"
                    >
                        {"→"}
                    </button>
                </div>

                <div class="carousel__dots">
                    { for (0..entries.len()).map(|i| {
                        let onclick = navigate.reform(move |_: MouseEvent| CarouselAction::GoTo(i));
                        html! {
                            <button
                                class={classes!("carousel__dot", (i == state.index()).then(|| "active"))}
                                onclick={onclick}
                                aria-label={format!("Go to testimonial {}", i + 1)}
                            />
                        }
                    }) }
                </div>

                <div class="stat-grid stat-grid--four">
                    { for site.testimonials.stats.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat__value">{&stat.value}</div>
                            <div class="stat__label">{&stat.label}</div>
                        </div>
                    }) }
                </div>

                <div class="testimonials__cta">
                    <p>{"Ready to join thousands of satisfied customers?"}</p>
                    <button class="button button--solid">{"Book Your First Appointment"}</button>
                </div>
            </div>

            <style>
                {r#"
                .carousel {
                    position: relative;
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .carousel__slide {
                    min-height: 300px;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: center;
                    background: #f9fafb;
                    border-radius: 1rem;
                    padding: 3rem;
                }

                .stars {
                    margin-bottom: 1.5rem;
                }

                .star {
                    font-size: 1.125rem;
                    color: #d1d5db;
                }

                .star--filled {
                    color: #facc15;
                }

                .carousel__slide blockquote {
                    font-size: 1.5rem;
                    color: #1f2937;
                    line-height: 1.6;
                    margin: 0 0 2rem;
                }

                .carousel__author {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    text-align: left;
                }

                .carousel__name {
                    font-weight: 600;
                    color: #111827;
                }

                .carousel__meta {
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                .carousel__arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 9999px;
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    cursor: pointer;
                }

                .carousel__arrow:hover {
                    background: #f9fafb;
                }

                .carousel__arrow--prev { left: 1rem; }
                .carousel__arrow--next { right: 1rem; }

                .carousel__dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 2rem;
                }

                .carousel__dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: #d1d5db;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .carousel__dot.active {
                    background: #000000;
                }

                .testimonials .stat-grid {
                    margin-top: 4rem;
                }

                .testimonials__cta {
                    margin-top: 3rem;
                    text-align: center;
                }

                .testimonials__cta p {
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
