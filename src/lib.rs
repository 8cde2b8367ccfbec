#![cfg(target_arch = "wasm32")]
use parallax_core::{Disposer, ParallaxConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod parallax;

pub use parallax::{init_parallax, ParallaxController};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = Rc::new(ParallaxConfig::default());
    let level = if config.debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
    log::info!("[bootstrap] starting");

    if let Err(e) = init(config) {
        log::error!("[bootstrap] init error: {:?}", e);
    }
    Ok(())
}

/// Mount every page feature and tear them all down together on `pagehide`.
fn init(config: Rc<ParallaxConfig>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    let features = Rc::new(RefCell::new(Disposer::new()));
    if let Some(controller) = init_parallax(config) {
        features.borrow_mut().add(move || controller.destroy());
    }
    if features.borrow().is_empty() {
        log::debug!("[bootstrap] no features mounted");
        return Ok(());
    }

    let on_hide = Closure::wrap(Box::new(move || {
        log::debug!("[bootstrap] page hidden, disposing features");
        features.borrow_mut().dispose_all();
    }) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback(
            constants::PAGE_HIDE_EVENT,
            on_hide.as_ref().unchecked_ref(),
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    on_hide.forget();
    Ok(())
}
