#![cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::constants::{CANVAS_ID, VIEW_MEDIA_QUERY};
use crate::core::{ScrollSource, SharedScroll};

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Mount while the breakpoint query matches, unmount when it stops.
/// Each mount builds a fresh context; unmount stops the loop and frees
/// the GPU state.
fn wire_view_mount(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    scroll: &SharedScroll,
) -> anyhow::Result<()> {
    let mql = window
        .match_media(VIEW_MEDIA_QUERY)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("matchMedia unavailable"))?;

    let active: Rc<RefCell<Option<frame::LoopHandle>>> = Rc::new(RefCell::new(None));
    let mounting = Rc::new(Cell::new(false));

    let apply: Rc<dyn Fn()> = {
        let canvas = canvas.clone();
        let scroll = scroll.clone();
        let active = active.clone();
        let mounting = mounting.clone();
        let mql = mql.clone();
        Rc::new(move || {
            if mql.matches() {
                if active.borrow().is_some() || mounting.get() {
                    return;
                }
                mounting.set(true);
                log::info!("[init] breakpoint matched, mounting view");
                let canvas = canvas.clone();
                let scroll = scroll.clone();
                let active = active.clone();
                let mounting = mounting.clone();
                let mql = mql.clone();
                spawn_local(async move {
                    let gpu = frame::init_gpu(&canvas).await;
                    mounting.set(false);
                    // The breakpoint may have flipped back while the
                    // adapter request was in flight
                    if !mql.matches() {
                        return;
                    }
                    if gpu.is_none() {
                        log::warn!("[init] WebGPU unavailable, view stays degraded");
                        return;
                    }
                    let source: Rc<dyn ScrollSource> = Rc::new(scroll.clone());
                    let ctx = frame::FrameContext::new(canvas.clone(), source, gpu);
                    *active.borrow_mut() = Some(frame::start_loop(ctx));
                });
            } else if let Some(handle) = active.borrow_mut().take() {
                log::info!("[init] breakpoint left, unmounting view");
                handle.stop();
            }
        })
    };

    apply();
    let apply_on_change = apply.clone();
    let change = Closure::wrap(Box::new(move || {
        apply_on_change();
    }) as Box<dyn FnMut()>);
    mql.add_event_listener_with_callback("change", change.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    change.forget();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("guide-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("[init] {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // Scroll state feeds the animator; listeners publish into it
    let scroll = SharedScroll::default();
    events::wire_scroll(&window, &scroll).map_err(|e| anyhow::anyhow!("{:?}", e))?;

    wire_view_mount(&window, &canvas, &scroll)?;

    Ok(())
}
