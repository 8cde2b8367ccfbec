use crate::constants::*;
use crate::dom;
use crate::frame;
use anyhow::anyhow;
use parallax_core::{
    translate_attr, CircleStyle, DotStyle, Force, FrameTrigger, LayerConfig, LayerModel,
    LayerState, ParallaxConfig, Simulation, StepEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use web_sys as web;

struct LayerRuntime {
    model: LayerModel<StdRng>,
    dots: Vec<web::Element>,
    latest_time: f64,
    // Physics timer and render request; each holds at most one frame id.
    timer: FrameTrigger<i32>,
    render: FrameTrigger<i32>,
    step_cb: Option<Closure<dyn FnMut()>>,
    render_cb: Option<Closure<dyn FnMut()>>,
}

impl LayerRuntime {
    fn schedule_step(&mut self) {
        if !self.model.simulation().is_active() {
            return;
        }
        if let Some(cb) = self.step_cb.as_ref() {
            self.timer.signal(|| frame::request_frame(cb));
        }
    }

    fn on_tick(&mut self) {
        self.latest_time = frame::now_sec();
        if let Some(cb) = self.render_cb.as_ref() {
            self.render.signal(|| frame::request_frame(cb));
        }
    }

    fn draw(&self) {
        for (dot, p) in self.dots.iter().zip(self.model.positions_at(self.latest_time)) {
            _ = dot.set_attribute("transform", &translate_attr(p));
        }
    }

    fn cancel_render(&mut self) {
        if let Some(id) = self.render.cancel() {
            frame::cancel_frame(id);
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer.cancel() {
            frame::cancel_frame(id);
        }
    }
}

impl Drop for LayerRuntime {
    fn drop(&mut self) {
        // Pending frames would call into closures freed with this struct.
        self.cancel_timer();
        self.cancel_render();
    }
}

/// Browser-driven handle to one layer's simulation. Steps run on animation
/// frames while active; every tick requests at most one redraw.
pub struct LayerSimulation {
    runtime: Rc<RefCell<LayerRuntime>>,
}

impl Simulation for LayerSimulation {
    fn tick(&mut self) {
        let mut rt = self.runtime.borrow_mut();
        rt.model.simulation_mut().tick();
        rt.model.wrap_nodes();
        rt.on_tick();
    }

    fn force(&mut self, name: &'static str, force: Box<dyn Force>) {
        self.runtime
            .borrow_mut()
            .model
            .simulation_mut()
            .force(name, force);
    }

    fn alpha(&self) -> f64 {
        self.runtime.borrow().model.simulation().alpha()
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.runtime
            .borrow_mut()
            .model
            .simulation_mut()
            .set_alpha(alpha);
    }

    fn restart(&mut self) {
        let mut rt = self.runtime.borrow_mut();
        rt.model.simulation_mut().restart();
        rt.schedule_step();
    }

    fn stop(&mut self) {
        let mut rt = self.runtime.borrow_mut();
        rt.model.simulation_mut().stop();
        rt.cancel_timer();
    }
}

fn step_callback(weak: Weak<RefCell<LayerRuntime>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        let mut rt = runtime.borrow_mut();
        if !rt.timer.consume() {
            return;
        }
        match rt.model.step() {
            StepEvent::Idle => {}
            StepEvent::Tick => {
                rt.on_tick();
                rt.schedule_step();
            }
            StepEvent::End => {
                rt.on_tick();
                log::debug!("[parallax] layer simulation cooled down");
            }
        }
    }) as Box<dyn FnMut()>)
}

fn render_callback(weak: Weak<RefCell<LayerRuntime>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || {
        let Some(runtime) = weak.upgrade() else {
            return;
        };
        let mut rt = runtime.borrow_mut();
        if rt.render.consume() {
            rt.draw();
        }
    }) as Box<dyn FnMut()>)
}

fn set_attrs(el: &web::Element, attrs: &[(&str, &str)]) -> anyhow::Result<()> {
    for (name, value) in attrs {
        el.set_attribute(name, value)
            .map_err(|e| anyhow!("set {}: {:?}", name, e))?;
    }
    Ok(())
}

fn create_svg(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow!("create <{}>: {:?}", tag, e))
}

/// Reuse the layer's surface when present, otherwise create it; either way
/// it is emptied and sized to the layer.
fn ensure_surface(
    document: &web::Document,
    layer: &web::HtmlElement,
    class_name: &str,
    width: f64,
    height: f64,
) -> anyhow::Result<web::Element> {
    let existing = layer
        .query_selector(&format!("svg.{}", class_name))
        .ok()
        .flatten();
    let svg = match existing {
        Some(svg) => {
            svg.set_text_content(None);
            svg
        }
        None => {
            let svg = create_svg(document, "svg")?;
            layer
                .append_child(&svg)
                .map_err(|e| anyhow!("append svg: {:?}", e))?;
            svg
        }
    };
    let (w, h) = (width.to_string(), height.to_string());
    let view_box = format!("0 0 {} {}", w, h);
    set_attrs(
        &svg,
        &[
            ("class", class_name),
            ("width", w.as_str()),
            ("height", h.as_str()),
            ("viewBox", view_box.as_str()),
            ("preserveAspectRatio", "none"),
        ],
    )?;
    Ok(svg)
}

fn create_circle(
    document: &web::Document,
    class_name: &str,
    fill: &str,
    style: CircleStyle,
) -> anyhow::Result<web::Element> {
    let circle = create_svg(document, "circle")?;
    let (r, opacity) = (style.r.to_string(), style.opacity.to_string());
    set_attrs(
        &circle,
        &[
            ("class", class_name),
            ("r", r.as_str()),
            ("fill", fill),
            ("opacity", opacity.as_str()),
            ("cx", "0"),
            ("cy", "0"),
        ],
    )?;
    Ok(circle)
}

fn create_dot(
    document: &web::Document,
    svg: &web::Element,
    style: &DotStyle,
) -> anyhow::Result<web::Element> {
    let group = create_svg(document, "g")?;
    set_attrs(&group, &[("class", DOT_CLASS)])?;

    let outer = create_circle(document, DOT_OUTER_CLASS, &style.fill, style.outer)?;
    let inner = create_circle(document, DOT_INNER_CLASS, &style.fill, style.inner)?;
    for child in [&outer, &inner] {
        group
            .append_child(child)
            .map_err(|e| anyhow!("append circle: {:?}", e))?;
    }
    svg.append_child(&group)
        .map_err(|e| anyhow!("append dot: {:?}", e))?;
    Ok(group)
}

/// Remove a previously rendered surface so the next build starts clean.
pub fn remove_surface(layer: &web::HtmlElement, config: &ParallaxConfig) {
    if let Ok(Some(svg)) = layer.query_selector(&format!("svg.{}", config.svg_class_name)) {
        svg.remove();
    }
}

/// Spawn the layer's dots, render them into its SVG surface and start the
/// simulation timer. The returned state's destroy callback cancels a pending
/// redraw; stopping the simulation is left to the caller.
pub fn build_layer(
    layer: &web::HtmlElement,
    config: &ParallaxConfig,
) -> anyhow::Result<LayerState<LayerSimulation>> {
    let document = layer
        .owner_document()
        .ok_or_else(|| anyhow!("layer has no owner document"))?;
    let layer_config = LayerConfig::from_attributes(|name| layer.get_attribute(name), config);
    let size = dom::layer_size(layer);
    let svg = ensure_surface(&document, layer, &config.svg_class_name, size.x, size.y)?;

    let model = LayerModel::build(&layer_config, size, config, StdRng::from_entropy());
    let dots = model
        .dot_styles()
        .map(|style| create_dot(&document, &svg, &style))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let runtime = Rc::new(RefCell::new(LayerRuntime {
        model,
        dots,
        latest_time: frame::now_sec(),
        timer: FrameTrigger::new(),
        render: FrameTrigger::new(),
        step_cb: None,
        render_cb: None,
    }));
    {
        let mut rt = runtime.borrow_mut();
        rt.step_cb = Some(step_callback(Rc::downgrade(&runtime)));
        rt.render_cb = Some(render_callback(Rc::downgrade(&runtime)));
        // First frame is drawn now so static (reduced-motion) layers show dots.
        rt.draw();
        rt.schedule_step();
    }
    log::debug!(
        "[parallax] built layer: {} dots, {:.0}x{:.0}px",
        layer_config.count,
        size.x,
        size.y
    );

    let weak = Rc::downgrade(&runtime);
    Ok(LayerState::new(LayerSimulation { runtime }, move || {
        if let Some(runtime) = weak.upgrade() {
            runtime.borrow_mut().cancel_render();
        }
    }))
}
