use yew::prelude::*;

use crate::hooks::listener::WindowListener;
use crate::state::toggle::is_scrolled;

/// Tracks whether the window is scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let sample = {
                        let window = window.clone();
                        move || is_scrolled(window.scroll_y().unwrap_or_default(), threshold)
                    };
                    // Page can be restored mid-scroll on reload
                    scrolled.set(sample());
                    WindowListener::attach(&window, "scroll", move |_| scrolled.set(sample()))
                });
                move || drop(listener)
            },
            (),
        );
    }

    *scrolled
}
