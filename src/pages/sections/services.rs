use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{stagger_delay, Reveal};
use crate::content::{SERVICES, SERVICES_SECTION};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={SERVICES_SECTION} class="section section-muted">
            <div class="container">
                <Reveal class="section-heading">
                    <h2 class="eyebrow">{"Our Services"}</h2>
                    <h3 class="section-title">{"What We Do Best"}</h3>
                    <p class="section-lead">
                        {"We offer a comprehensive suite of digital services designed to help your business thrive in the modern online landscape."}
                    </p>
                </Reveal>

                <div class="services-grid">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal key={service.title} delay_ms={stagger_delay(i)} class="service-card">
                            <div class="service-icon" style={format!("background: {};", service.accent)}>
                                <Icon kind={service.icon} />
                            </div>
                            <h4>{service.title}</h4>
                            <p>{service.description}</p>
                            <a href="#contact" class="learn-more">
                                {"Learn More"}
                                <Icon kind={IconKind::ChevronRight} />
                            </a>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .services-grid {
                    display: grid;
                    gap: 2rem;
                }

                .service-card {
                    padding: 2.5rem;
                    border: 1px solid #f1f5f9;
                    border-radius: 32px;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                .service-card.revealed:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.1);
                }

                .service-icon {
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    color: #ffffff;
                    box-shadow: 0 10px 20px rgba(15, 23, 42, 0.15);
                    transition: transform 0.3s ease;
                }

                .service-card:hover .service-icon {
                    transform: scale(1.1);
                }

                .service-icon .icon {
                    width: 2rem;
                    height: 2rem;
                }

                .service-card h4 {
                    margin: 0 0 1rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .service-card p {
                    margin: 0 0 1.5rem;
                    line-height: 1.7;
                    color: rgba(15, 23, 42, 0.6);
                }

                .learn-more {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 700;
                    color: var(--primary);
                    text-decoration: none;
                    transition: gap 0.2s ease;
                }

                .learn-more:hover {
                    gap: 0.75rem;
                }

                .learn-more .icon {
                    width: 1rem;
                    height: 1rem;
                }

                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }

                @media (min-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
