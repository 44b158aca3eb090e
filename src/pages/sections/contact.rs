use log::debug;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::{Reveal, RevealFrom};
use crate::config::{CONTACT_EMAIL, OFFICE_ADDRESS, PHONE_DISPLAY, PHONE_HREF};
use crate::content::CONTACT_SECTION;

/// Blocks the browser's default form submission. Nothing is sent anywhere.
pub fn suppress_submit(form: &'static str) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        debug!("{} form submission suppressed", form);
    })
}

#[derive(Properties, PartialEq)]
struct ContactDetailProps {
    icon: IconKind,
    label: &'static str,
    children: Children,
}

#[function_component(ContactDetail)]
fn contact_detail(props: &ContactDetailProps) -> Html {
    html! {
        <div class="contact-detail">
            <div class="contact-icon"><Icon kind={props.icon} /></div>
            <div>
                <p class="contact-label">{props.label}</p>
                <div class="contact-value">{ for props.children.iter() }</div>
            </div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={CONTACT_SECTION} class="section section-muted">
            <div class="container contact-grid">
                <Reveal from={RevealFrom::Left}>
                    <h2 class="eyebrow">{"Contact Us"}</h2>
                    <h3 class="section-title">{"Let's Build Something "}<br />{"Great Together"}</h3>
                    <p class="section-lead contact-lead">
                        {"Have a project in mind? We'd love to hear from you. Fill out the form and our team will get back to you within 24 hours."}
                    </p>

                    <div class="contact-details">
                        <ContactDetail icon={IconKind::Mail} label="Email Us">
                            <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
                        </ContactDetail>
                        <ContactDetail icon={IconKind::Phone} label="Call Us">
                            <a href={PHONE_HREF}>{PHONE_DISPLAY}</a>
                        </ContactDetail>
                        <ContactDetail icon={IconKind::MapPin} label="Our Office">
                            {OFFICE_ADDRESS}
                        </ContactDetail>
                    </div>
                </Reveal>

                <Reveal from={RevealFrom::Right} class="contact-card">
                    <form class="contact-form" onsubmit={suppress_submit("contact")}>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="contact-name">{"Name"}</label>
                                <input id="contact-name" type="text" placeholder="John Doe" />
                            </div>
                            <div class="form-field">
                                <label for="contact-email">{"Email"}</label>
                                <input id="contact-email" type="email" placeholder="john@example.com" />
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="contact-phone">{"Phone"}</label>
                            <input id="contact-phone" type="tel" placeholder="+91 90111 40878" />
                        </div>
                        <div class="form-field">
                            <label for="contact-message">{"Message"}</label>
                            <textarea id="contact-message" rows="4" placeholder="Tell us about your project..." />
                        </div>
                        <button type="submit" class="btn-gradient form-submit">{"Send Message"}</button>
                    </form>
                </Reveal>
            </div>

            <style>
                {r#"
                .contact-grid {
                    display: grid;
                    gap: 4rem;
                    align-items: center;
                }

                .contact-lead {
                    margin-bottom: 3rem;
                }

                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .contact-detail {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .contact-icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 1rem;
                    background: #ffffff;
                    color: var(--primary);
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }

                .contact-label {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: rgba(15, 23, 42, 0.5);
                }

                .contact-value,
                .contact-value a {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: var(--dark);
                    text-decoration: none;
                }

                .contact-card {
                    padding: 2.5rem;
                    border-radius: 40px;
                    background: #ffffff;
                    box-shadow: 0 20px 40px rgba(59, 130, 246, 0.05);
                }

                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-row {
                    display: grid;
                    gap: 1.5rem;
                }

                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .form-field label {
                    margin-left: 0.25rem;
                    font-size: 0.875rem;
                    font-weight: 700;
                    color: rgba(15, 23, 42, 0.7);
                }

                .form-field input,
                .form-field textarea {
                    width: 100%;
                    padding: 1rem 1.5rem;
                    border: none;
                    border-radius: 1rem;
                    background: #f8fafc;
                    font: inherit;
                    outline: none;
                    resize: none;
                    transition: box-shadow 0.2s ease;
                }

                .form-field input:focus,
                .form-field textarea:focus {
                    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.2);
                }

                .form-submit {
                    justify-content: center;
                    width: 100%;
                    padding: 1.25rem 0;
                    border-radius: 1rem;
                }

                @media (min-width: 768px) {
                    .form-row { grid-template-columns: 1fr 1fr; }
                    .contact-card { padding: 3rem; }
                }

                @media (min-width: 1024px) {
                    .contact-grid { grid-template-columns: 1fr 1fr; }
                }
                "#}
            </style>
        </section>
    }
}
