use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config::{BRAND_NAME, PHONE_HREF};
use crate::content::{hero_avatar, HERO_IMAGE};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-glow hero-glow-left"></div>
            <div class="hero-glow hero-glow-right"></div>

            <div class="container hero-grid">
                <Reveal from={RevealFrom::Left}>
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        {"Digital Growth Agency"}
                    </div>
                    <h1 class="hero-title">
                        {"Grow Your Business "}<br />
                        <span class="gradient-text">{"Digitally"}</span>{" with "}<br />
                        {BRAND_NAME}
                    </h1>
                    <p class="hero-subtitle">
                        {"We help brands grow with web design, SEO, and digital marketing. Transform your online presence into a powerful growth engine."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="btn-gradient hero-cta">
                            {"Get Started"}
                            <Icon kind={IconKind::ArrowRight} />
                        </a>
                        <a href={PHONE_HREF} class="btn-outline">{"Contact Us"}</a>
                    </div>

                    <div class="hero-proof">
                        <div class="hero-avatars">
                            { for (1..=4).map(|seed| html! {
                                <img key={seed} src={hero_avatar(seed)} alt="User" referrerpolicy="no-referrer" />
                            }) }
                        </div>
                        <div>
                            <div class="stars">
                                { for (0..5).map(|i| html! { <Icon key={i} kind={IconKind::Star} /> }) }
                            </div>
                            <p class="hero-proof-text">{"Trusted by 500+ businesses"}</p>
                        </div>
                    </div>
                </Reveal>

                <Reveal from={RevealFrom::Center} delay_ms={200} class="hero-visual">
                    <div class="hero-image">
                        <img src={HERO_IMAGE} alt="Digital Growth" referrerpolicy="no-referrer" />
                    </div>
                    <div class="glass-card stat-card stat-card-top">
                        <div class="stat-icon stat-icon-green">
                            <Icon kind={IconKind::CheckCircle} />
                        </div>
                        <div>
                            <p class="stat-label">{"Conversion Rate"}</p>
                            <p class="stat-value">{"+145%"}</p>
                        </div>
                    </div>
                    <div class="glass-card stat-card stat-card-bottom">
                        <div class="stat-icon stat-icon-blue">
                            <Icon kind={IconKind::Search} />
                        </div>
                        <div>
                            <p class="stat-label">{"SEO Ranking"}</p>
                            <p class="stat-value">{"Top 3 Results"}</p>
                        </div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    padding-top: 5rem;
                    overflow: hidden;
                }

                .hero-backdrop {
                    position: absolute;
                    top: 0;
                    right: 0;
                    z-index: -1;
                    width: 50%;
                    height: 100%;
                    background: rgba(238, 242, 255, 0.5);
                    border-radius: 100px 0 0 100px;
                }

                .hero-glow {
                    position: absolute;
                    z-index: -1;
                    border-radius: 50%;
                    filter: blur(64px);
                }

                .hero-glow-left {
                    top: 25%;
                    left: -5rem;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(59, 130, 246, 0.1);
                }

                .hero-glow-right {
                    bottom: 25%;
                    right: 25%;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(139, 92, 246, 0.1);
                }

                .hero-grid {
                    display: grid;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(59, 130, 246, 0.1);
                    color: var(--primary);
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }

                .hero-badge-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    background: var(--primary);
                    animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                .hero-title {
                    margin: 0 0 1.5rem;
                    font-size: clamp(3rem, 7vw, 4.5rem);
                    font-weight: 800;
                    line-height: 1.1;
                }

                .hero-subtitle {
                    max-width: 32rem;
                    margin-bottom: 2.5rem;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: rgba(15, 23, 42, 0.6);
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-cta .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    transition: transform 0.2s ease;
                }

                .hero-cta:hover .icon {
                    transform: translateX(4px);
                }

                .hero-proof {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .hero-avatars {
                    display: flex;
                }

                .hero-avatars img {
                    width: 2.5rem;
                    height: 2.5rem;
                    margin-left: -0.75rem;
                    border: 2px solid #ffffff;
                    border-radius: 50%;
                }

                .hero-avatars img:first-child {
                    margin-left: 0;
                }

                .hero-proof-text {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 600;
                    color: rgba(15, 23, 42, 0.8);
                }

                .hero-visual {
                    position: relative;
                }

                .hero-image {
                    position: relative;
                    z-index: 10;
                    overflow: hidden;
                    border-radius: 40px;
                    box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
                }

                .hero-image img {
                    display: block;
                    width: 100%;
                    height: auto;
                }

                .stat-card {
                    position: absolute;
                    z-index: 20;
                    display: none;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: 1rem;
                }

                .stat-card-top {
                    top: -2.5rem;
                    right: -2.5rem;
                    animation: float 4s ease-in-out infinite;
                }

                .stat-card-bottom {
                    bottom: -2.5rem;
                    left: -2.5rem;
                    animation: float 5s ease-in-out 1s infinite reverse;
                }

                .stat-icon {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 0.75rem;
                }

                .stat-icon-green { background: #dcfce7; color: #16a34a; }
                .stat-icon-blue { background: #dbeafe; color: #2563eb; }

                .stat-label {
                    margin: 0;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: rgba(15, 23, 42, 0.5);
                }

                .stat-value {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 800;
                }

                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }

                @keyframes ping {
                    75%, 100% { transform: scale(2); opacity: 0; }
                }

                @media (min-width: 768px) {
                    .stat-card {
                        display: flex;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </header>
    }
}
