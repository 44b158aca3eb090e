use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config::WHATSAPP_URL;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    html! {
        <>
            <a
                href={WHATSAPP_URL}
                target="_blank"
                rel="noopener noreferrer"
                class="whatsapp-button"
                aria-label="Chat with us on WhatsApp"
            >
                <Icon kind={IconKind::MessageCircle} />
                <span class="whatsapp-tooltip">{"Chat with us!"}</span>
            </a>
            <style>
                {r#"
                .whatsapp-button {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 50;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: #25D366;
                    color: #ffffff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 20px 40px rgba(37, 211, 102, 0.4);
                    animation: popIn 0.4s ease-out both;
                    transition: transform 0.2s ease;
                }

                .whatsapp-button:hover {
                    transform: scale(1.1);
                }

                .whatsapp-button:active {
                    transform: scale(0.9);
                }

                .whatsapp-button .icon {
                    width: 2rem;
                    height: 2rem;
                }

                .whatsapp-tooltip {
                    position: absolute;
                    right: 100%;
                    margin-right: 1rem;
                    padding: 0.5rem 1rem;
                    background: #ffffff;
                    color: var(--dark);
                    font-size: 0.875rem;
                    font-weight: 700;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.12);
                    white-space: nowrap;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.2s ease;
                }

                .whatsapp-button:hover .whatsapp-tooltip {
                    opacity: 1;
                }

                @keyframes popIn {
                    from { transform: scale(0); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }
                "#}
            </style>
        </>
    }
}
