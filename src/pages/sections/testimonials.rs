use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{stagger_delay, Reveal};
use crate::content::{TESTIMONIALS, TESTIMONIALS_SECTION};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section id={TESTIMONIALS_SECTION} class="section">
            <div class="container">
                <Reveal class="section-heading">
                    <h2 class="eyebrow">{"Testimonials"}</h2>
                    <h3 class="section-title">{"What Our Clients Say"}</h3>
                </Reveal>

                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                        <Reveal key={t.name} delay_ms={stagger_delay(i)} class="testimonial-card">
                            <div class="stars">
                                { for (0..5).map(|star| html! { <Icon key={star} kind={IconKind::Star} /> }) }
                            </div>
                            <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
                            <div class="testimonial-author">
                                <img src={t.avatar} alt={t.name} referrerpolicy="no-referrer" />
                                <div>
                                    <h5>{t.name}</h5>
                                    <p>{t.role}</p>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonial-grid {
                    display: grid;
                    gap: 2rem;
                }

                .testimonial-card {
                    position: relative;
                    padding: 2.5rem;
                    border: 1px solid #f1f5f9;
                    border-radius: 40px;
                    background: #f8fafc;
                }

                .testimonial-card .stars {
                    margin-bottom: 1.5rem;
                }

                .testimonial-quote {
                    margin: 0 0 2rem;
                    font-size: 1.125rem;
                    font-style: italic;
                    line-height: 1.7;
                    color: rgba(15, 23, 42, 0.7);
                }

                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .testimonial-author img {
                    width: 3.5rem;
                    height: 3.5rem;
                    border: 2px solid #ffffff;
                    border-radius: 50%;
                    box-shadow: 0 4px 6px rgba(15, 23, 42, 0.1);
                }

                .testimonial-author h5 {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 700;
                }

                .testimonial-author p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: rgba(15, 23, 42, 0.5);
                }

                @media (min-width: 768px) {
                    .testimonial-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
        </section>
    }
}
