use yew::prelude::*;

use crate::config::BRAND_NAME;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <a href="#" class={classes!("logo", props.class.clone())}>
            <svg class="logo-mark" viewBox="0 0 100 60" aria-hidden="true">
                // D
                <path d="M10 10 V50 H25 C40 50 50 40 50 30 C50 20 40 10 25 10 Z" fill="#3b82f6" />
                // M with wave
                <path
                    d="M55 50 V20 L75 40 L95 20 V50"
                    stroke="#8b5cf6"
                    stroke-width="10"
                    fill="none"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
                <path d="M20 35 Q45 15 70 35 T100 25" fill="none" stroke="white" stroke-width="3" opacity="0.8" />
                <rect x="85" y="5" width="4" height="4" fill="#8b5cf6" />
                <rect x="92" y="12" width="4" height="4" fill="#8b5cf6" />
                <rect x="88" y="18" width="3" height="3" fill="#8b5cf6" />
            </svg>
            <span class="gradient-text">{BRAND_NAME}</span>
        </a>
    }
}
