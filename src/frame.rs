use std::cell::{Cell, RefCell};
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::DT_CLAMP_SEC;
use crate::core::effects;
use crate::core::{Animator, ScrollSource};
use crate::render;

/// Everything one mounted view owns. Dropping it (or clearing `gpu`)
/// releases the surface and buffers.
pub struct FrameContext {
    pub gpu: Option<render::GpuState>,
    pub scroll: Rc<dyn ScrollSource>,
    pub animator: Animator,
    pub canvas: web::HtmlCanvasElement,
    start_instant: Instant,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        scroll: Rc<dyn ScrollSource>,
        gpu: Option<render::GpuState>,
    ) -> Self {
        let now = Instant::now();
        Self {
            gpu,
            scroll,
            animator: Animator::new(),
            canvas,
            start_instant: now,
            last_instant: now,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let t = (now - self.start_instant).as_secs_f32();
        let dt = (now - self.last_instant).as_secs_f32().min(DT_CLAMP_SEC);
        self.last_instant = now;

        let scroll = self.scroll.current();
        let pose = self.animator.advance(t, dt, &scroll);
        let sway = effects::float_sway(t);
        let rings = effects::ring_orientations(t);
        let cloud = effects::cloud_orientation(t);
        let stars = effects::star_orientation(t);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.apply_figure(&sway, &pose);
            g.apply_effects(&rings, cloud, stars);
            match g.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                    g.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[render] surface out of memory, releasing GPU state");
                    self.gpu = None;
                }
                // Timeout and the rest: skip the frame
                Err(e) => log::warn!("[render] surface error: {:?}", e),
            }
        }
    }
}

/// Owner of a running animation loop. `stop` is synchronous and
/// idempotent: after it returns no further frame runs and the GPU
/// resources are gone.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    ctx: Rc<RefCell<FrameContext>>,
}

impl LoopHandle {
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // The tick closure holds an Rc to itself; dropping it here
        // breaks the cycle.
        self.tick.borrow_mut().take();
        self.ctx.borrow_mut().gpu = None;
        log::info!("[frame] loop stopped");
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[init] WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(ctx: FrameContext) -> LoopHandle {
    let ctx = Rc::new(RefCell::new(ctx));
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let ctx_tick = ctx.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // A frame queued before stop() may still fire once
        if !running_tick.get() {
            return;
        }
        ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => raf_tick.set(Some(id)),
                Err(_) => running_tick.set(false),
            }
        }
    }) as Box<dyn FnMut()>));

    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            raf_id.set(Some(id));
        }
    }
    log::info!("[frame] loop started");

    LoopHandle {
        running,
        raf_id,
        tick,
        ctx,
    }
}
