use crate::constants::REDUCED_MOTION_QUERY;
use glam::DVec2;
use parallax_core::{scroll_ratio as ratio_of, Motion, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector` in the document, if it is an HTML element.
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// All HTML elements under `root` matching `selector`, in document order.
pub fn query_all_html(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// True when `name` exists on the global object (capability check).
pub fn has_global(name: &str) -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(1.0, 1.0);
    };
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Viewport::new(read(w.inner_width()), read(w.inner_height()))
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// 0..1 progress through the scrollable height of the page.
pub fn scroll_ratio() -> f64 {
    let scroll_height = window_document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    ratio_of(scroll_y(), scroll_height, viewport().height)
}

/// Layer size in CSS px: the larger of client and bounding size, falling
/// back to the viewport when the layer has not been laid out.
pub fn layer_size(layer: &web::HtmlElement) -> DVec2 {
    let rect = layer.get_bounding_client_rect();
    let raw = DVec2::new(
        (layer.client_width() as f64).max(rect.width()),
        (layer.client_height() as f64).max(rect.height()),
    );
    let vp = viewport();
    DVec2::new(
        if raw.x > 1.0 { raw.x } else { vp.width },
        if raw.y > 1.0 { raw.y } else { vp.height },
    )
    .max(DVec2::ONE)
}

/// The reduced-motion media query, when `matchMedia` is available.
pub fn motion_query() -> Option<web::MediaQueryList> {
    if !has_global("matchMedia") {
        return None;
    }
    web::window()?.match_media(REDUCED_MOTION_QUERY).ok().flatten()
}

/// Current motion preference; full motion when the query is unavailable.
#[inline]
pub fn motion(query: Option<&web::MediaQueryList>) -> Motion {
    Motion::from_reduced(query.map(|q| q.matches()).unwrap_or(false))
}
