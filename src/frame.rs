use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Request `callback` on the next animation frame. `None` when there is no
/// window or the request was refused.
pub fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
    let window = web::window()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

pub fn cancel_frame(id: i32) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(id);
    }
}

/// Seconds on the page clock, used as the orbit time base.
#[inline]
pub fn now_sec() -> f64 {
    instant::now() / 1000.0
}
