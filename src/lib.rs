#![cfg(target_arch = "wasm32")]
use crate::constants::{view_box_center, EXIT_URL, FILL_SELECTOR, PATH_SELECTOR, SVG_SELECTOR};
use elastic_core::{EventQueue, HintStyle, Simulation, SimulationConfig};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod contour;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("elastic-logo starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
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
    let svg: web::SvgsvgElement = dom::query(&document, SVG_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("missing inline <svg>"))?;

    dom::apply_zoom(&svg);

    let path_elements: Vec<web::SvgPathElement> = dom::query_all(&svg, PATH_SELECTOR);
    if path_elements.is_empty() {
        anyhow::bail!("svg has no <path> to animate");
    }
    let contours: Vec<contour::SvgContour> = path_elements
        .iter()
        .cloned()
        .map(contour::SvgContour::new)
        .collect();

    let [cx, cy] = view_box_center();
    let config = SimulationConfig {
        collapse_center: Some(Vec2::new(cx, cy)),
        exit_url: EXIT_URL.to_string(),
        ..Default::default()
    };
    let hint_style = if dom::is_touch_device(&window) {
        HintStyle::Swipe
    } else {
        HintStyle::Scroll
    };
    let started = Instant::now();
    let sim = Simulation::from_contours(config, &contours, 0.0, hint_style)?;

    let queue = Rc::new(RefCell::new(EventQueue::default()));
    let overlay = overlay::Overlay::find(&document);
    overlay.set_hint_style(hint_style);
    overlay.show_hint(sim.state().hint.view());

    events::wire_input_handlers(events::InputWiring {
        svg: svg.clone(),
        queue: queue.clone(),
    });
    events::wire_pressure_sources(&window, queue.clone());
    events::wire_scroll_reset_on_unload(&window);
    events::wire_hint_click(&overlay.hint_targets(), queue.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        queue,
        svg,
        paths: path_elements.into_iter().map(Into::into).collect(),
        fills: dom::query_all_in_document(&document, FILL_SELECTOR),
        body: document.body(),
        overlay,
        started,
        captured_pointer: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
