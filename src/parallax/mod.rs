//! Scroll parallax background: one force-simulated dot field per layer.

mod controller;
mod layer;
mod observer;
mod scroll;

pub use controller::ParallaxController;

use crate::dom;
use parallax_core::{LayerLifecycle, ParallaxConfig};
use std::cell::RefCell;
use std::rc::Rc;

/// Layer states keyed by the layer's index in document order.
pub(crate) type SharedStates = Rc<RefCell<LayerLifecycle<usize, layer::LayerSimulation>>>;

/// Mount the parallax background. `None` when the page has no parallax
/// container or the container has no layers.
pub fn init_parallax(config: Rc<ParallaxConfig>) -> Option<ParallaxController> {
    let document = dom::window_document()?;
    let Some(container) = dom::query_html(&document, &config.container_selector) else {
        log::debug!("[parallax] no {} on this page", config.container_selector);
        return None;
    };
    let layers = dom::query_all_html(&container, &config.layer_selector);
    if layers.is_empty() {
        log::debug!("[parallax] container has no {}", config.layer_selector);
        return None;
    }

    let controller = ParallaxController::new(container, layers, dom::motion_query(), config);
    log::info!("[parallax] mounted {} layers", controller.layer_count());
    Some(controller)
}
