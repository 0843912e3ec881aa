use yew::prelude::*;

use crate::content::use_site;

/// App Store / Google Play buttons. Inert; there is no store listing.
pub fn store_buttons(class: &'static str) -> Html {
    html! {
        <div class="store-buttons">
            <button class={class}>
                <span class="store-button__icon">{"🍎"}</span>
                <span class="store-button__text">
                    <small>{"Download on the"}</small>
                    <strong>{"App Store"}</strong>
                </span>
            </button>
            <button class={class}>
                <span class="store-button__icon">{"📱"}</span>
                <span class="store-button__text">
                    <small>{"Get it on"}</small>
                    <strong>{"Google Play"}</strong>
                </span>
            </button>
        </div>
    }
}

#[function_component(AppDownloadBanner)]
pub fn app_download_banner() -> Html {
    let site = use_site();
    let app = &site.app;

    html! {
        <section class="app-banner">
            <div class="section__inner">
                <div class="app-banner__grid">
                    <div>
                        <h2>{"Take bookings with you everywhere"}</h2>
                        <p class="app-banner__lead">
                            {"Download our mobile app for the ultimate booking experience. Manage appointments, discover new services, and stay connected with your favorite professionals."}
                        </p>

                        <div class="app-banner__features">
                            { for app.features.iter().map(|feature| html! {
                                <div class="app-feature">
                                    <div class="app-feature__icon">{&feature.icon}</div>
                                    <div>
                                        <h3>{&feature.title}</h3>
                                        <p>{&feature.description}</p>
                                    </div>
                                </div>
                            }) }
                        </div>

                        { store_buttons("store-button store-button--light") }

                        <div class="app-banner__stats">
                            { for app.stats.iter().map(|stat| html! {
                                <div>
                                    <div class="app-banner__stat-value">{&stat.value}</div>
                                    <div class="app-banner__stat-label">{&stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="phone-wrap">
                        <div class="phone">
                            <div class="phone__screen">
                                <div class="phone__status">
                                    <span>{"9:41"}</span>
                                    <span>{"📶 📶 🔋"}</span>
                                </div>
                                <div class="phone__header">
                                    <div class="phone__brand">{&site.brand}</div>
                                    <div>{"Find & Book Services"}</div>
                                </div>
                                <div class="phone__search">{"Search services..."}</div>
                                <div class="phone__categories">
                                    { for app.phone_categories.iter().map(|category| html! {
                                        <div class="phone__category">
                                            <div>{&category.emoji}</div>
                                            <small>{&category.name}</small>
                                        </div>
                                    }) }
                                </div>
                                <div class="phone__bookings">
                                    <div class="phone__bookings-title">{"Recent Bookings"}</div>
                                    { for app.phone_bookings.iter().map(|booking| html! {
                                        <div class="phone__booking">
                                            <div>{&booking.name}</div>
                                            <small>{&booking.time}</small>
                                        </div>
                                    }) }
                                </div>
                            </div>
                        </div>
                        <div class="qr-placeholder">
                            <div class="qr-placeholder__code">{"QR Code"}<br/>{"Placeholder"}</div>
                            <div class="qr-placeholder__caption">{"Scan to download"}</div>
                        </div>
                    </div>
                </div>

                <div class="app-banner__band">
                    <h3>{"Join millions of satisfied users"}</h3>
                    <p>
                        {"Experience the convenience of mobile booking. Download the app today and discover why millions of users trust us for their beauty and wellness needs."}
                    </p>
                    <div class="app-banner__avatars">
                        { for (0..5).map(|_| html! { <div class="app-banner__avatar">{"👤"}</div> }) }
                        <span>{"+1M happy users"}</span>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .app-banner {
                    padding: 4rem 0;
                    color: #ffffff;
                    background: linear-gradient(135deg, #000000, #111827 50%, #1f2937);
                }

                .app-banner__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .app-banner h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }

                .app-banner__lead {
                    font-size: 1.25rem;
                    color: #d1d5db;
                    margin-bottom: 2rem;
                }

                .app-banner__features {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }

                .app-feature {
                    display: flex;
                    gap: 0.75rem;
                    align-items: flex-start;
                }

                .app-feature__icon {
                    font-size: 1.5rem;
                }

                .app-feature h3 {
                    font-weight: 600;
                    margin: 0 0 0.25rem;
                }

                .app-feature p {
                    color: #9ca3af;
                    font-size: 0.875rem;
                    margin: 0;
                }

                .app-banner__stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    margin-top: 2rem;
                    text-align: center;
                }

                .app-banner__stat-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .app-banner__stat-label {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }

                .phone-wrap {
                    position: relative;
                    display: flex;
                    justify-content: flex-end;
                }

                .phone {
                    width: 16rem;
                    height: 500px;
                    background: #111827;
                    border-radius: 3rem;
                    padding: 0.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .phone__screen {
                    height: 100%;
                    border-radius: 2.5rem;
                    overflow: hidden;
                    padding: 1.5rem;
                    box-sizing: border-box;
                    color: #000000;
                    background: linear-gradient(to bottom, #f9fafb, #ffffff);
                }

                .phone__status {
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }

                .phone__header {
                    text-align: center;
                    color: #4b5563;
                    margin-bottom: 1.5rem;
                }

                .phone__brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #000000;
                    margin-bottom: 0.5rem;
                }

                .phone__search {
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    color: #6b7280;
                    font-size: 0.875rem;
                    margin-bottom: 1.5rem;
                }

                .phone__categories {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                }

                .phone__category {
                    background: #f3f4f6;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    text-align: center;
                }

                .phone__bookings {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }

                .phone__bookings-title {
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                .phone__booking {
                    background: #000000;
                    color: #ffffff;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    font-size: 0.875rem;
                }

                .phone__booking small {
                    color: #d1d5db;
                }

                .qr-placeholder {
                    position: absolute;
                    right: -4rem;
                    top: 50%;
                    transform: translateY(-50%);
                    background: #ffffff;
                    padding: 1rem;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                }

                .qr-placeholder__code {
                    width: 6rem;
                    height: 6rem;
                    background: #000000;
                    color: #ffffff;
                    border-radius: 0.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    font-size: 0.75rem;
                    text-align: center;
                }

                .qr-placeholder__caption {
                    margin-top: 0.5rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #4b5563;
                }

                .app-banner__band {
                    margin-top: 4rem;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 2rem;
                    backdrop-filter: blur(4px);
                }

                .app-banner__band h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .app-banner__band p {
                    color: #d1d5db;
                    max-width: 42rem;
                    margin: 0 auto 1.5rem;
                }

                .app-banner__avatars {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                }

                .app-banner__avatar {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .app-banner__avatars span {
                    margin-left: 1rem;
                    font-size: 0.875rem;
                    color: #d1d5db;
                }

                @media (max-width: 1280px) {
                    .qr-placeholder {
                        display: none;
                    }
                }

                @media (max-width: 1024px) {
                    .app-banner__grid {
                        grid-template-columns: 1fr;
                    }

                    .phone-wrap {
                        justify-content: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
