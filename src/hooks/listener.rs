use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

/// A window event listener that is removed again when dropped.
///
/// Hooks create one inside `use_effect_with_deps(.., ())` and drop it from
/// the effect destructor, so a listener never outlives its component.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn attach<F>(window: &Window, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                window: window.clone(),
                event,
                callback,
            }),
            Err(err) => {
                warn!("could not listen for {} events: {:?}", event, err);
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("could not remove {} listener: {:?}", self.event, err);
        }
    }
}
