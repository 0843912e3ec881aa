use chrono::Datelike;
use log::info;
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::app_download::store_buttons;
use crate::components::site_link::SiteLink;
use crate::content::use_site;
use crate::Route;

const NEWSLETTER_ACK: &str = "Thanks for subscribing! Newsletter signup isn't connected yet, so nothing was saved.";

fn copyright(year: i32) -> String {
    format!("© {} Booksy Clone. All rights reserved.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let site = use_site();
    let footer = &site.footer;
    let year = chrono::Local::now().year();

    // Acknowledge locally; the address is neither stored nor sent.
    let on_subscribe = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Newsletter signup acknowledged");
        if let Some(window) = window() {
            let _ = window.alert_with_message(NEWSLETTER_ACK);
        }
    });

    html! {
        <footer class="site-footer">
            <div class="section__inner site-footer__main">
                <div class="site-footer__grid">
                    <div class="site-footer__about">
                        <Link<Route> to={Route::Home} classes="site-footer__brand">
                            {&site.brand}
                        </Link<Route>>
                        <p class="site-footer__tagline">{&footer.tagline}</p>

                        <h3>{"Stay Updated"}</h3>
                        <form class="newsletter" onsubmit={on_subscribe}>
                            <input type="email" placeholder="Enter your email" required={true} />
                            <button type="submit">{"Subscribe"}</button>
                        </form>

                        <h3>{"Follow Us"}</h3>
                        <div class="social-links">
                            { for footer.social.iter().map(|social| html! {
                                <SiteLink
                                    href={social.href.clone()}
                                    classes="social-link"
                                    aria_label={Some(social.name.clone())}
                                >
                                    {&social.icon}
                                </SiteLink>
                            }) }
                        </div>
                    </div>

                    { for footer.sections.iter().map(|section| html! {
                        <div class="site-footer__column">
                            <h3>{&section.title}</h3>
                            <ul>
                                { for section.links.iter().map(|link| html! {
                                    <li>
                                        <SiteLink href={link.href.clone()} classes="site-footer__link">
                                            {&link.label}
                                        </SiteLink>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class="site-footer__app">
                    <div>
                        <h3>{"Download Our App"}</h3>
                        <p>{"Book appointments on the go"}</p>
                    </div>
                    { store_buttons("store-button store-button--dark") }
                </div>
            </div>

            <div class="site-footer__bottom">
                <div class="section__inner">
                    <div class="site-footer__legal">
                        <div class="site-footer__copyright">{copyright(year)}</div>
                        <div class="site-footer__legal-links">
                            { for footer.legal.iter().map(|link| html! {
                                <SiteLink href={link.href.clone()} classes="site-footer__link">
                                    {&link.label}
                                </SiteLink>
                            }) }
                        </div>
                    </div>
                    <p class="site-footer__disclaimer">
                        {"This is a demo website created for educational purposes. All content is placeholder and not affiliated with the actual Booksy platform."}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #ffffff;
                }

                .site-footer__main {
                    padding-top: 3rem;
                    padding-bottom: 3rem;
                }

                .site-footer__grid {
                    display: grid;
                    grid-template-columns: 2fr repeat(4, 1fr);
                    gap: 2rem;
                }

                .site-footer h3 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem;
                }

                .site-footer__brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #ffffff;
                    text-decoration: none;
                }

                .site-footer__tagline {
                    margin: 1rem 0 1.5rem;
                    color: #9ca3af;
                    max-width: 28rem;
                }

                .newsletter {
                    display: flex;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                }

                .newsletter input {
                    flex: 1;
                    padding: 0.5rem 1rem;
                    background: #1f2937;
                    border: 1px solid #374151;
                    border-radius: 0.5rem;
                    color: #ffffff;
                }

                .newsletter button {
                    background: #ffffff;
                    color: #000000;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    border-radius: 0.5rem;
                    font-weight: 500;
                    white-space: nowrap;
                    cursor: pointer;
                }

                .newsletter button:hover {
                    background: #e5e7eb;
                }

                .social-links {
                    display: flex;
                    gap: 1rem;
                }

                .social-link {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #1f2937;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-size: 1.125rem;
                }

                .social-link:hover {
                    background: #374151;
                }

                .site-footer__column ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .site-footer__link {
                    color: #9ca3af;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .site-footer__link:hover {
                    color: #ffffff;
                }

                .site-footer__app {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .site-footer__app p {
                    color: #9ca3af;
                    margin: 0;
                }

                .site-footer__bottom {
                    border-top: 1px solid #1f2937;
                    padding: 1.5rem 0;
                }

                .site-footer__legal {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    font-size: 0.875rem;
                }

                .site-footer__copyright {
                    color: #9ca3af;
                }

                .site-footer__legal-links {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1.5rem;
                }

                .site-footer__disclaimer {
                    margin: 1rem 0 0;
                    padding-top: 1rem;
                    border-top: 1px solid #1f2937;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #6b7280;
                }

                @media (max-width: 1024px) {
                    .site-footer__grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .site-footer__about {
                        grid-column: span 2;
                    }
                }

                @media (max-width: 768px) {
                    .site-footer__grid {
                        grid-template-columns: 1fr;
                    }

                    .site-footer__about {
                        grid-column: auto;
                    }

                    .site-footer__app,
                    .site-footer__legal {
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .newsletter {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright(2026), "© 2026 Booksy Clone. All rights reserved.");
    }
}
