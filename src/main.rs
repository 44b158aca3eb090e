use log::info;
use yew::prelude::*;

mod config;
mod content;
mod styles;

mod state {
    pub mod selection;
    pub mod toggle;
}
mod hooks {
    pub mod escape;
    pub mod listener;
    pub mod reveal;
    pub mod scroll;
}
mod components {
    pub mod icons;
    pub mod logo;
    pub mod navbar;
    pub mod reveal;
    pub mod whatsapp_button;
}
mod pages {
    pub mod home;
    pub mod sections {
        pub mod about;
        pub mod contact;
        pub mod footer;
        pub mod hero;
        pub mod portfolio;
        pub mod services;
        pub mod testimonials;
    }
}

use pages::home::Home;
use styles::GlobalStyles;

#[function_component]
fn App() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                info!("Site mounted");
                || ()
            },
            (),
        );
    }

    html! {
        <>
            <GlobalStyles />
            <Home />
        </>
    }
}

fn main() {
    // Rust panics show up in the browser console instead of a bare wasm trap
    console_error_panic_hook::set_once();

    if console_log::init_with_level(config::log_level()).is_err() {
        gloo_console::warn!("console logger was already initialized");
    }

    info!("Starting {}", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
