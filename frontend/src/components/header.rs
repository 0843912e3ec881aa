use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::site_link::SiteLink;
use crate::content::use_site;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    Close,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let open = match action {
            MenuAction::Toggle => !self.open,
            MenuAction::Close => false,
        };
        if open == self.open {
            self
        } else {
            Rc::new(MenuState { open })
        }
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let site = use_site();
    let menu = use_reducer(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <header class="site-header">
            <div class="site-header__bar">
                <Link<Route> to={Route::Home} classes="site-logo">
                    {&site.brand}
                </Link<Route>>

                <div class="header-search">
                    <input type="text" placeholder="Search services or business..." />
                    <button class="header-search__button" aria-label="Search">{"🔍"}</button>
                </div>

                <nav class="header-nav">
                    { for site.nav.iter().map(|link| html! {
                        <SiteLink href={link.href.clone()} classes="header-nav__link">
                            {&link.label}
                        </SiteLink>
                    }) }
                    <button class="sign-in-button">{"Sign In"}</button>
                </nav>

                <button
                    class={classes!("burger-menu", menu.open.then(|| "open"))}
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if menu.open {
                    html! {
                        <div class="mobile-menu">
                            <input type="text" placeholder="Search services or business..." />
                            { for site.nav.iter().map(|link| html! {
                                <div onclick={close_menu.clone()}>
                                    <SiteLink href={link.href.clone()} classes="mobile-menu__link">
                                        {&link.label}
                                    </SiteLink>
                                </div>
                            }) }
                            <button class="sign-in-button mobile-menu__sign-in">{"Sign In"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: #ffffff;
                    border-bottom: 1px solid #e5e7eb;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .site-header__bar {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .site-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #000000;
                    text-decoration: none;
                }

                .header-search {
                    position: relative;
                    flex: 1;
                    max-width: 32rem;
                    margin: 0 2rem;
                }

                .header-search input,
                .mobile-menu input {
                    width: 100%;
                    padding: 0.5rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    box-sizing: border-box;
                }

                .header-search__button {
                    position: absolute;
                    right: 0.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .header-nav {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .header-nav__link {
                    color: #374151;
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .header-nav__link:hover {
                    color: #000000;
                }

                .sign-in-button {
                    background: #000000;
                    color: #ffffff;
                    border: none;
                    padding: 0.5rem 1rem;
                    border-radius: 0.5rem;
                    cursor: pointer;
                }

                .sign-in-button:hover {
                    background: #1f2937;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }

                .burger-menu span {
                    display: block;
                    width: 20px;
                    height: 2px;
                    background: #374151;
                    transition: transform 0.2s ease, opacity 0.2s ease;
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(6px) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-6px) rotate(-45deg);
                }

                .mobile-menu {
                    display: none;
                    border-top: 1px solid #e5e7eb;
                    padding: 1rem 1.5rem;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .mobile-menu__link {
                    display: block;
                    padding: 0.5rem 1rem;
                    color: #374151;
                    text-decoration: none;
                    border-radius: 0.5rem;
                }

                .mobile-menu__link:hover {
                    background: #f9fafb;
                    color: #000000;
                }

                .mobile-menu__sign-in {
                    text-align: left;
                    width: 100%;
                }

                @media (max-width: 768px) {
                    .header-search,
                    .header-nav {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }

                    .mobile-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: MenuState, action: MenuAction) -> MenuState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn starts_closed() {
        assert!(!MenuState::default().open);
    }

    #[test]
    fn toggle_flips() {
        let opened = reduce(MenuState::default(), MenuAction::Toggle);
        assert!(opened.open);
        assert!(!reduce(opened, MenuAction::Toggle).open);
    }

    #[test]
    fn link_tap_closes() {
        let opened = reduce(MenuState::default(), MenuAction::Toggle);
        assert!(!reduce(opened, MenuAction::Close).open);
        assert!(!reduce(MenuState::default(), MenuAction::Close).open);
    }
}
