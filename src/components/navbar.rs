use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::logo::Logo;
use crate::config::NAV_SCROLL_THRESHOLD_PX;
use crate::content::NAV_LINKS;
use crate::hooks::scroll::use_scrolled;
use crate::state::toggle::{MenuAction, MenuState};

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MenuState::default);
    let is_scrolled = use_scrolled(NAV_SCROLL_THRESHOLD_PX);

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| {
            debug!("nav: toggling mobile menu");
            menu.dispatch(MenuAction::Toggle);
        })
    };

    // Links still navigate; only the drawer closes
    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="container nav-content">
                <Logo />

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} class="nav-link">{link.label}</a>
                    }) }
                    <a href="#contact" class="nav-cta">{"Get Started"}</a>
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.open.to_string()}
                >
                    <Icon kind={if menu.open { IconKind::Close } else { IconKind::Menu }} />
                </button>
            </div>

            {
                if menu.open {
                    html! {
                        <div class="mobile-menu">
                            { for NAV_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href} class="mobile-link" onclick={close_menu.clone()}>
                                    {link.label}
                                </a>
                            }) }
                            <a href="#contact" class="mobile-cta" onclick={close_menu.clone()}>{"Get Started"}</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1.5rem 0;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(16px);
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.06);
                }

                .nav-content {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-links {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: rgba(15, 23, 42, 0.7);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .mobile-link:hover {
                    color: var(--primary);
                }

                .nav-cta {
                    padding: 0.625rem 1.5rem;
                    border-radius: 9999px;
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-decoration: none;
                    background: var(--gradient);
                    box-shadow: 0 10px 20px rgba(59, 130, 246, 0.25);
                    transition: transform 0.2s ease;
                }

                .nav-cta:hover {
                    transform: scale(1.05);
                }

                .burger-menu {
                    display: flex;
                    padding: 0.5rem;
                    background: none;
                    border: none;
                    color: var(--dark);
                    cursor: pointer;
                }

                .burger-menu .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .mobile-menu {
                    position: absolute;
                    top: 100%;
                    left: 0;
                    right: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    padding: 1.5rem;
                    background: #ffffff;
                    border-top: 1px solid #f1f5f9;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
                    animation: menuDrop 0.25s ease-out;
                }

                .mobile-link {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: rgba(15, 23, 42, 0.7);
                    text-decoration: none;
                }

                .mobile-cta {
                    width: 100%;
                    padding: 1rem 0;
                    border-radius: 0.75rem;
                    color: #ffffff;
                    font-weight: 700;
                    text-align: center;
                    text-decoration: none;
                    background: var(--gradient);
                }

                @keyframes menuDrop {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (min-width: 1024px) {
                    .nav-links {
                        display: flex;
                    }

                    .burger-menu,
                    .mobile-menu {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
