use super::layer::{build_layer, remove_surface, LayerSimulation};
use super::observer::LayerObserver;
use super::scroll::ParallaxScroller;
use super::SharedStates;
use crate::constants::CONTAINER_SIZE_VAR;
use crate::dom;
use crate::events::DomTarget;
use crate::frame;
use parallax_core::{
    wire_page_events, ContainerSizeBounds, Disposer, FrameTrigger, LayerLifecycle, PageHandlers,
    ParallaxConfig,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Writes the scroll-interpolated container size as a CSS variable.
struct ContainerSizer {
    container: web::HtmlElement,
    config: Rc<ParallaxConfig>,
    bounds: ContainerSizeBounds,
}

impl ContainerSizer {
    /// Re-resolve the size endpoints against the current viewport.
    fn refresh(&mut self) {
        self.bounds = ContainerSizeBounds::resolve(&self.config.container_size, dom::viewport());
    }

    fn apply(&self, ratio: f64) {
        let Some(px) = self.bounds.size_at(ratio) else {
            return;
        };
        _ = self
            .container
            .style()
            .set_property(CONTAINER_SIZE_VAR, &format!("{}px", px));
    }
}

struct ControllerInner {
    config: Rc<ParallaxConfig>,
    layers: Rc<[web::HtmlElement]>,
    motion_query: Option<web::MediaQueryList>,
    states: SharedStates,
    sizer: Rc<RefCell<ContainerSizer>>,
    observer: LayerObserver,
    scroller: ParallaxScroller,
    resize: FrameTrigger<i32>,
    resize_cb: Option<Closure<dyn FnMut()>>,
    disposer: Disposer,
    destroyed: bool,
}

impl ControllerInner {
    /// Stop and destroy every layer, then build each one afresh.
    fn rebuild(&mut self) {
        let motion = dom::motion(self.motion_query.as_ref());
        {
            let mut sizer = self.sizer.borrow_mut();
            sizer.refresh();
            sizer.apply(dom::scroll_ratio());
        }

        let layers = self.layers.clone();
        let config = self.config.clone();
        self.states
            .borrow_mut()
            .rebuild(0..layers.len(), motion, |idx| {
                let layer = &layers[idx];
                remove_surface(layer, &config);
                match build_layer(layer, &config) {
                    Ok(state) => Some(state),
                    Err(e) => {
                        log::warn!("[parallax] skipping layer {}: {:#}", idx, e);
                        None
                    }
                }
            });
        self.observer.observe_all();
        log::debug!(
            "[parallax] rebuilt {} of {} layers ({:?})",
            self.states.borrow().len(),
            self.layers.len(),
            motion
        );
    }

    /// Debounce: only the last resize within a frame triggers a rebuild.
    fn schedule_resize(&mut self) {
        let Some(cb) = self.resize_cb.as_ref() else {
            return;
        };
        if let Some(previous) = self.resize.reschedule(|| frame::request_frame(cb)) {
            frame::cancel_frame(previous);
        }
    }

    fn handle_motion_change(&mut self) {
        log::info!(
            "[parallax] reduced motion {}",
            if dom::motion(self.motion_query.as_ref()).should_animate() {
                "off"
            } else {
                "on"
            }
        );
        self.rebuild();
    }

    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        if let Some(id) = self.resize.cancel() {
            frame::cancel_frame(id);
        }
        self.scroller.cancel();
        self.observer.disconnect();
        self.states.borrow_mut().clear();
        self.disposer.dispose_all();
        self.resize_cb = None;
        log::debug!("[parallax] destroyed");
    }
}

impl Drop for ControllerInner {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn resize_callback(weak: Weak<RefCell<ControllerInner>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        if !inner.resize.consume() {
            return;
        }
        inner.rebuild();
        inner.scroller.apply();
    }) as Box<dyn FnMut()>)
}

/// Owns every layer's lifecycle for one parallax container.
pub struct ParallaxController {
    inner: Rc<RefCell<ControllerInner>>,
}

impl ParallaxController {
    pub fn new(
        container: web::HtmlElement,
        layers: Vec<web::HtmlElement>,
        motion_query: Option<web::MediaQueryList>,
        config: Rc<ParallaxConfig>,
    ) -> Self {
        let layers: Rc<[web::HtmlElement]> = layers.into();
        let states: SharedStates = Rc::new(RefCell::new(LayerLifecycle::<usize, LayerSimulation>::new(
            config.simulation.alpha,
        )));

        let on_change: Rc<dyn Fn(usize, bool)> = {
            let states = states.clone();
            let query = motion_query.clone();
            Rc::new(move |idx: usize, visible: bool| {
                states
                    .borrow_mut()
                    .apply_visibility(idx, visible, dom::motion(query.as_ref()));
            })
        };
        let observer = LayerObserver::new(layers.clone(), states.clone(), on_change);

        let sizer = Rc::new(RefCell::new(ContainerSizer {
            container,
            config: config.clone(),
            bounds: ContainerSizeBounds::default(),
        }));
        let scroller = {
            let sizer = sizer.clone();
            ParallaxScroller::new(layers.clone(), config.clone(), dom::scroll_ratio, move |ratio| {
                sizer.borrow().apply(ratio)
            })
        };

        let inner = Rc::new(RefCell::new(ControllerInner {
            config,
            layers,
            motion_query,
            states,
            sizer,
            observer,
            scroller,
            resize: FrameTrigger::new(),
            resize_cb: None,
            disposer: Disposer::new(),
            destroyed: false,
        }));

        {
            let mut guard = inner.borrow_mut();
            let this = &mut *guard;
            this.resize_cb = Some(resize_callback(Rc::downgrade(&inner)));
            this.rebuild();
            this.scroller.apply();

            let window = web::window().map(|w| DomTarget(w.into()));
            let query = this.motion_query.clone().map(|q| DomTarget(q.into()));
            let scroller = this.scroller.clone();
            let resize_weak = Rc::downgrade(&inner);
            let motion_weak = Rc::downgrade(&inner);
            let handlers = PageHandlers {
                on_scroll: Box::new(move || scroller.apply()),
                on_resize: Box::new(move || {
                    if let Some(inner) = resize_weak.upgrade() {
                        inner.borrow_mut().schedule_resize();
                    }
                }),
                on_motion_change: Box::new(move || {
                    if let Some(inner) = motion_weak.upgrade() {
                        inner.borrow_mut().handle_motion_change();
                    }
                }),
            };
            let attached =
                wire_page_events(&mut this.disposer, window.as_ref(), query.as_ref(), handlers);
            log::debug!("[parallax] {} page listeners attached", attached);
        }

        Self { inner }
    }

    /// Stop every layer, drop the observers and remove all listeners.
    /// Later calls do nothing.
    pub fn destroy(&self) {
        self.inner.borrow_mut().destroy();
    }

    pub fn layer_count(&self) -> usize {
        self.inner.borrow().states.borrow().len()
    }
}
