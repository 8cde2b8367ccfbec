use crate::dom;
use crate::frame;
use parallax_core::{FrameTrigger, LayerConfig, LayerTransform, ParallaxConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

#[derive(Default)]
struct ScrollState {
    ticking: FrameTrigger<i32>,
    latest_scroll: f64,
}

/// Scroll-driven layer transforms, throttled to one update per frame.
#[derive(Clone)]
pub struct ParallaxScroller {
    state: Rc<RefCell<ScrollState>>,
    update: Rc<Closure<dyn FnMut()>>,
}

impl ParallaxScroller {
    pub fn new(
        layers: Rc<[web::HtmlElement]>,
        config: Rc<ParallaxConfig>,
        get_scroll_ratio: impl Fn() -> f64 + 'static,
        set_container_size: impl Fn(f64) + 'static,
    ) -> Self {
        let state = Rc::new(RefCell::new(ScrollState::default()));
        let update_state = state.clone();
        let update = Closure::wrap(Box::new(move || {
            let scroll = {
                let mut state = update_state.borrow_mut();
                if !state.ticking.consume() {
                    return;
                }
                state.latest_scroll
            };
            let ratio = get_scroll_ratio();
            set_container_size(ratio);
            apply_transforms(&layers, &config, scroll, ratio);
        }) as Box<dyn FnMut()>);
        Self {
            state,
            update: Rc::new(update),
        }
    }

    /// Record the scroll offset and schedule an update unless one is pending.
    pub fn apply(&self) {
        let mut state = self.state.borrow_mut();
        state.latest_scroll = dom::scroll_y();
        let update = &self.update;
        state.ticking.signal(|| frame::request_frame(update));
    }

    pub fn cancel(&self) {
        if let Some(id) = self.state.borrow_mut().ticking.cancel() {
            frame::cancel_frame(id);
        }
    }
}

fn apply_transforms(
    layers: &[web::HtmlElement],
    config: &ParallaxConfig,
    scroll: f64,
    ratio: f64,
) {
    let front = layers.len().saturating_sub(1);
    for (idx, layer) in layers.iter().enumerate() {
        let layer_config = LayerConfig::from_attributes(|name| layer.get_attribute(name), config);
        let transform = LayerTransform::compute(
            scroll,
            ratio,
            layer_config.speed,
            layer_config.shrink,
            config.motion.max_shrink,
            idx == front,
        );
        _ = layer.style().set_property("transform", &transform.to_css());
    }
}
