#![cfg(target_arch = "wasm32")]

//! WASM entry point: canvas setup, resize handling, and the frame loop.

mod dom;
mod frame;
mod surface;

use frame::FrameContext;
use heart_core::{AnimationParams, HeartAnimation};
use std::cell::RefCell;
use std::rc::Rc;
use surface::CanvasSurface;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const CANVAS_ID: &str = "heart-canvas";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("heart-web starting");

    // If the surface is unavailable the animation silently never starts;
    // there is no recovery path and no user-facing error surface.
    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (canvas, ctx) = dom::canvas_2d(&document, CANVAS_ID)?;
    dom::fit_canvas_to_window(&canvas);

    // Keep the backing size in sync with the window. The responsive scale is
    // re-derived from the canvas inside every tick, so the listener only has
    // to resize the backing store.
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::fit_canvas_to_window(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        resize_closure.forget();
    }

    let animation = HeartAnimation::new(AnimationParams::default());
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        animation,
        canvas,
        CanvasSurface::new(ctx),
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
