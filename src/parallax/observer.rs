use super::SharedStates;
use crate::constants::{OBSERVER_ROOT_MARGIN, OBSERVER_THRESHOLD};
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Reports layers entering and leaving the viewport. It records visibility on
/// the shared states and forwards the change; starting or stopping the
/// simulation is up to `on_change`.
pub struct LayerObserver {
    layers: Rc<[web::HtmlElement]>,
    states: SharedStates,
    on_change: Rc<dyn Fn(usize, bool)>,
    observer: Option<web::IntersectionObserver>,
    callback: Option<EntriesCallback>,
}

impl LayerObserver {
    pub fn new(
        layers: Rc<[web::HtmlElement]>,
        states: SharedStates,
        on_change: Rc<dyn Fn(usize, bool)>,
    ) -> Self {
        Self {
            layers,
            states,
            on_change,
            observer: None,
            callback: None,
        }
    }

    /// Start a fresh observation session over every layer, replacing any
    /// previous one. Without `IntersectionObserver` layers stay visible.
    pub fn observe_all(&mut self) {
        self.disconnect();
        if !dom::has_global("IntersectionObserver") {
            log::debug!("[parallax] IntersectionObserver unavailable; layers stay visible");
            return;
        }

        let layers = self.layers.clone();
        let states = self.states.clone();
        let on_change = self.on_change.clone();
        let callback: EntriesCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let target: web::Node = entry.target().into();
                    let Some(idx) = layers
                        .iter()
                        .position(|layer| layer.is_same_node(Some(&target)))
                    else {
                        continue;
                    };
                    let visible = entry.is_intersecting();
                    let known = states.borrow_mut().mark_visible(idx, visible);
                    if known {
                        on_change(idx, visible);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_root_margin(OBSERVER_ROOT_MARGIN);
        options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
        let observer = match web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("[parallax] IntersectionObserver failed: {:?}", e);
                return;
            }
        };
        for layer in self.layers.iter() {
            observer.observe(layer);
        }
        self.observer = Some(observer);
        self.callback = Some(callback);
    }

    /// End the current session, if any. Safe to call repeatedly.
    pub fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}
