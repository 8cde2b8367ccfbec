use parallax_core::EventSource;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM event target for [`parallax_core::listen`]. The listener closure is
/// owned by the caller's disposer until removal.
#[derive(Clone)]
pub struct DomTarget(pub web::EventTarget);

impl EventSource for DomTarget {
    type Listener = Closure<dyn FnMut()>;

    fn add_listener(
        &self,
        event_type: &'static str,
        passive: bool,
        handler: Box<dyn FnMut()>,
    ) -> Option<Self::Listener> {
        let closure = Closure::wrap(handler);
        let added = if passive {
            let options = web::AddEventListenerOptions::new();
            options.set_passive(true);
            self.0
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event_type,
                    closure.as_ref().unchecked_ref(),
                    &options,
                )
        } else {
            self.0
                .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
        };
        match added {
            Ok(()) => Some(closure),
            Err(e) => {
                log::warn!("[events] could not listen for {}: {:?}", event_type, e);
                None
            }
        }
    }

    fn remove_listener(&self, event_type: &'static str, listener: Self::Listener) {
        _ = self
            .0
            .remove_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref());
    }
}
