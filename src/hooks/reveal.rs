use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Watches one element and fires `on_reveal` the first time it scrolls into
/// view. The element is unobserved afterwards; dropping disconnects.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe<F>(element: &Element, on_reveal: F) -> Result<Self, JsValue>
    where
        F: FnOnce() + 'static,
    {
        let mut on_reveal = Some(on_reveal);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .find(|entry| entry.is_intersecting());
            if let Some(entry) = visible {
                observer.unobserve(&entry.target());
                if let Some(on_reveal) = on_reveal.take() {
                    on_reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns true once the referenced element has been on screen.
///
/// If the browser cannot observe the element it is revealed right away, so
/// content is never left hidden.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let on_reveal = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    match RevealObserver::observe(&element, on_reveal) {
                        Ok(observer) => Some(observer),
                        Err(err) => {
                            warn!("reveal observer unavailable: {:?}", err);
                            None
                        }
                    }
                });
                if observer.is_none() {
                    revealed.set(true);
                }
                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}
