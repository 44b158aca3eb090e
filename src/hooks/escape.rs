use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::listener::WindowListener;

pub fn is_escape(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Emits `on_escape` whenever Escape is pressed while the calling component
/// is mounted.
#[hook]
pub fn use_escape(on_escape: Callback<()>) {
    use_effect_with_deps(
        move |_| {
            let listener = web_sys::window().and_then(|window| {
                WindowListener::attach(&window, "keydown", move |event: Event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map_or(false, |key| is_escape(&key.key()));
                    if escape {
                        on_escape.emit(());
                    }
                })
            });
            move || drop(listener)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_keys() {
        assert!(is_escape("Escape"));
        assert!(is_escape("Esc"));
        assert!(!is_escape("Enter"));
        assert!(!is_escape("escape"));
    }
}
