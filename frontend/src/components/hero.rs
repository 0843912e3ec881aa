use yew::prelude::*;

use crate::content::use_site;

fn default_title() -> String {
    "Book appointments with top-rated professionals".to_string()
}

fn default_subtitle() -> String {
    "Discover and book beauty & wellness services near you".to_string()
}

fn default_cta() -> String {
    "Find Services".to_string()
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or_else(default_title)]
    pub title: String,
    #[prop_or_else(default_subtitle)]
    pub subtitle: String,
    #[prop_or_else(default_cta)]
    pub cta_text: String,
    #[prop_or_default]
    pub background_image: Option<String>,
}

pub fn background_style(image: Option<&str>) -> Option<String> {
    image
        .filter(|url| !url.trim().is_empty())
        .map(|url| format!("background-image: url('{}');", url))
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let site = use_site();
    let style = background_style(props.background_image.as_deref());

    html! {
        <section class="hero" style={style}>
            <div class="hero__overlay"></div>

            <div class="hero__content">
                <h1 class="hero__title">{&props.title}</h1>
                <p class="hero__subtitle">{&props.subtitle}</p>

                <div class="hero-search">
                    <input type="text" placeholder="What service are you looking for?" />
                    <input type="text" placeholder="Where?" />
                    <button class="hero-search__button">{&props.cta_text}</button>
                </div>

                <div class="hero__popular">
                    <p>{"Popular services:"}</p>
                    <div class="hero__chips">
                        { for site.hero.popular_services.iter().map(|service| html! {
                            <button class="hero__chip">{service}</button>
                        }) }
                    </div>
                </div>

                <div class="hero__stats">
                    { for site.hero.stats.iter().map(|stat| html! {
                        <div class="hero__stat">
                            <div class="hero__stat-value">{&stat.value}</div>
                            <div class="hero__stat-label">{&stat.label}</div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="hero__scroll">
                <div class="hero__scroll-dot"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 600px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                    background: linear-gradient(135deg, #111827, #1f2937 50%, #000000);
                    background-size: cover;
                    background-position: center;
                }

                .hero__overlay {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.4);
                }

                .hero__content {
                    position: relative;
                    z-index: 1;
                    max-width: 56rem;
                    padding: 4rem 1.5rem;
                    text-align: center;
                }

                .hero__title {
                    font-size: 3.75rem;
                    font-weight: 700;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }

                .hero__subtitle {
                    font-size: 1.5rem;
                    color: #e5e7eb;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }

                .hero-search {
                    display: flex;
                    gap: 1rem;
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    padding: 0.5rem;
                    background: #ffffff;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }

                .hero-search input {
                    flex: 1;
                    padding: 0.75rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    color: #111827;
                }

                .hero-search__button {
                    background: #000000;
                    color: #ffffff;
                    border: none;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    white-space: nowrap;
                    cursor: pointer;
                }

                .hero-search__button:hover {
                    background: #1f2937;
                }

                .hero__popular p {
                    color: #d1d5db;
                    margin-bottom: 1rem;
                }

                .hero__chips {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }

                .hero__chip {
                    padding: 0.5rem 1rem;
                    background: rgba(255, 255, 255, 0.2);
                    color: #ffffff;
                    border: none;
                    border-radius: 9999px;
                    backdrop-filter: blur(4px);
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .hero__chip:hover {
                    background: rgba(255, 255, 255, 0.3);
                }

                .hero__stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    max-width: 48rem;
                    margin: 3rem auto 0;
                }

                .hero__stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .hero__stat-label {
                    color: #d1d5db;
                }

                .hero__scroll {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid #ffffff;
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                    animation: heroBounce 1s infinite;
                }

                .hero__scroll-dot {
                    width: 0.25rem;
                    height: 0.75rem;
                    margin-top: 0.5rem;
                    background: #ffffff;
                    border-radius: 9999px;
                }

                @keyframes heroBounce {
                    0%, 100% { transform: translate(-50%, -25%); }
                    50% { transform: translate(-50%, 0); }
                }

                @media (max-width: 768px) {
                    .hero__title {
                        font-size: 2.25rem;
                    }

                    .hero__subtitle {
                        font-size: 1.25rem;
                    }

                    .hero-search {
                        flex-direction: column;
                    }

                    .hero__stats {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_image_means_no_inline_style() {
        assert_eq!(background_style(None), None);
        assert_eq!(background_style(Some("  ")), None);
    }

    #[test]
    fn image_becomes_background_rule() {
        assert_eq!(
            background_style(Some("/assets/salon.jpg")).as_deref(),
            Some("background-image: url('/assets/salon.jpg');")
        );
    }

    #[test]
    fn defaults_match_home_copy() {
        assert_eq!(default_title(), "Book appointments with top-rated professionals");
        assert_eq!(default_cta(), "Find Services");
    }
}
