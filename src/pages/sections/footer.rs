use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::logo::Logo;
use crate::config::BRAND_NAME;
use crate::content::{FOOTER_QUICK_LINKS, FOOTER_SERVICES, SOCIAL_LINKS};
use crate::pages::sections::contact::suppress_submit;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <Logo class="footer-logo" />
                        <p class="footer-text">
                            {"Empowering brands with innovative digital solutions. We turn your vision into reality."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|(name, icon)| html! {
                                <a key={*name} href="#" aria-label={*name}><Icon kind={*icon} /></a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h5>{"Quick Links"}</h5>
                        <ul>
                            { for FOOTER_QUICK_LINKS.iter().map(|link| html! {
                                <li key={link.label}><a href={link.href}>{link.label}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h5>{"Services"}</h5>
                        <ul>
                            { for FOOTER_SERVICES.iter().map(|service| html! {
                                <li key={*service}><a href="#services">{*service}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h5>{"Newsletter"}</h5>
                        <p class="footer-text">{"Subscribe to get the latest news and updates."}</p>
                        <form class="newsletter" onsubmit={suppress_submit("newsletter")}>
                            <input type="email" placeholder="Email address" aria-label="Email address" />
                            <button type="submit">{"Join"}</button>
                        </form>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{format!("© 2026 {}. All rights reserved.", BRAND_NAME)}</p>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 5rem 0 2.5rem;
                }

                .footer-grid {
                    display: grid;
                    gap: 3rem;
                    margin-bottom: 5rem;
                }

                .footer-logo {
                    margin-bottom: 2rem;
                }

                .footer-text {
                    margin: 0 0 2rem;
                    line-height: 1.7;
                    color: rgba(15, 23, 42, 0.6);
                }

                .footer-social {
                    display: flex;
                    gap: 1rem;
                }

                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: #f1f5f9;
                    color: rgba(15, 23, 42, 0.6);
                    transition: all 0.2s ease;
                }

                .footer-social a:hover {
                    background: var(--primary);
                    color: #ffffff;
                }

                .footer-social .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .site-footer h5 {
                    margin: 0 0 2rem;
                    font-size: 1.125rem;
                    font-weight: 700;
                }

                .site-footer ul {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .site-footer ul a,
                .footer-legal a {
                    text-decoration: none;
                    color: rgba(15, 23, 42, 0.6);
                    transition: color 0.2s ease;
                }

                .site-footer ul a:hover,
                .footer-legal a:hover {
                    color: var(--primary);
                }

                .newsletter {
                    position: relative;
                }

                .newsletter input {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: #f1f5f9;
                    font: inherit;
                    outline: none;
                }

                .newsletter button {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    bottom: 0.5rem;
                    padding: 0 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    background: var(--gradient);
                    cursor: pointer;
                }

                .footer-bottom {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                    padding-top: 2.5rem;
                    border-top: 1px solid #f1f5f9;
                    font-size: 0.875rem;
                    color: rgba(15, 23, 42, 0.4);
                }

                .footer-bottom p {
                    margin: 0;
                }

                .footer-legal {
                    display: flex;
                    gap: 2rem;
                }

                .footer-legal a {
                    color: rgba(15, 23, 42, 0.4);
                }

                @media (min-width: 768px) {
                    .footer-grid { grid-template-columns: repeat(2, 1fr); }
                    .footer-bottom { flex-direction: row; }
                }

                @media (min-width: 1024px) {
                    .footer-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
        </footer>
    }
}
