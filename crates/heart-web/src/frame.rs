//! requestAnimationFrame loop driving the animation.

use crate::surface::CanvasSurface;
use heart_core::{HeartAnimation, Viewport};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_INTERVAL_SEC: f32 = 5.0;

pub struct FrameContext {
    animation: HeartAnimation,
    canvas: web::HtmlCanvasElement,
    surface: CanvasSurface,
    last_stats: Instant,
    frames_since_stats: u32,
}

impl FrameContext {
    pub fn new(
        animation: HeartAnimation,
        canvas: web::HtmlCanvasElement,
        surface: CanvasSurface,
    ) -> Self {
        Self {
            animation,
            canvas,
            surface,
            last_stats: Instant::now(),
            frames_since_stats: 0,
        }
    }

    pub fn frame(&mut self) {
        // The canvas backing size is the viewport; the resize listener keeps
        // it current between ticks.
        let viewport = Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32);
        self.animation.tick(viewport, &mut self.surface);

        self.frames_since_stats += 1;
        let elapsed = self.last_stats.elapsed().as_secs_f32();
        if elapsed >= STATS_INTERVAL_SEC {
            log::debug!(
                "{:.1} fps, {} live particles",
                self.frames_since_stats as f32 / elapsed,
                self.animation.particle_count()
            );
            self.last_stats = Instant::now();
            self.frames_since_stats = 0;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
