use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{stagger_delay, Reveal, RevealFrom};
use crate::config::BRAND_NAME;
use crate::content::{ABOUT_IMAGE, ABOUT_POINTS, ABOUT_SECTION};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={ABOUT_SECTION} class="section about">
            <div class="container about-grid">
                <Reveal from={RevealFrom::Left} class="about-visual">
                    <div class="about-image">
                        <img src={ABOUT_IMAGE} alt={format!("About {}", BRAND_NAME)} referrerpolicy="no-referrer" />
                    </div>
                    <div class="about-frame"></div>
                </Reveal>

                <Reveal from={RevealFrom::Right}>
                    <h2 class="eyebrow">{"About Us"}</h2>
                    <h3 class="section-title">
                        {"A Creative Agency That "}<br />
                        <span class="gradient-text">{"Empowers"}</span>{" Small Businesses"}
                    </h3>
                    <p class="section-lead about-lead">
                        {"Digital Mayur is a creative digital agency dedicated to helping small businesses and startups establish a powerful online presence. We believe that every brand has a story worth telling, and we use technology and design to tell it beautifully."}
                    </p>
                    <div class="about-points">
                        { for ABOUT_POINTS.iter().enumerate().map(|(i, point)| html! {
                            <Reveal key={*point} from={RevealFrom::Right} delay_ms={stagger_delay(i)} class="about-point">
                                <span class="about-check"><Icon kind={IconKind::CheckCircle} /></span>
                                <span>{*point}</span>
                            </Reveal>
                        }) }
                    </div>
                    <a href="#portfolio" class="btn-gradient">{"Discover Our Story"}</a>
                </Reveal>
            </div>

            <style>
                {r#"
                .about {
                    overflow: hidden;
                }

                .about-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }

                .about-visual {
                    position: relative;
                }

                .about-image {
                    position: relative;
                    z-index: 10;
                    overflow: hidden;
                    border-radius: 40px;
                }

                .about-image img {
                    display: block;
                    width: 100%;
                    height: auto;
                }

                .about-frame {
                    position: absolute;
                    inset: 0;
                    z-index: -1;
                    border: 2px solid rgba(59, 130, 246, 0.2);
                    border-radius: 40px;
                    transform: translate(1.5rem, 1.5rem);
                }

                .about-lead {
                    margin-bottom: 2rem;
                }

                .about-points {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-bottom: 2.5rem;
                }

                .about-point {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    font-weight: 600;
                    color: rgba(15, 23, 42, 0.8);
                }

                .about-check {
                    width: 1.5rem;
                    height: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.1);
                    color: var(--primary);
                }

                .about-check .icon {
                    width: 1rem;
                    height: 1rem;
                }

                @media (min-width: 1024px) {
                    .about-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
