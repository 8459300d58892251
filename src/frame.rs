use crate::overlay::Overlay;
use elastic_core::{to_svg_path, EventQueue, FrameOutput, Simulation};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Simulation,
    pub queue: Rc<RefCell<EventQueue>>,

    pub svg: web::SvgsvgElement,
    /// One `<path>` per mesh, in mesh order.
    pub paths: Vec<web::Element>,
    pub fills: Vec<web::Element>,
    pub body: Option<web::HtmlElement>,
    pub overlay: Overlay,

    pub started: Instant,
    pub captured_pointer: Option<i32>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_sec = self.started.elapsed().as_secs_f64();
        let output = {
            let mut queue = self.queue.borrow_mut();
            self.sim.frame(now_sec, &mut queue)
        };
        self.sync_pointer_capture();
        self.paint(&output);

        if let Some(url) = &output.navigate_to {
            if let Some(w) = web::window() {
                if let Err(e) = w.location().set_href(url) {
                    log::error!("[exit] navigation failed: {:?}", e);
                }
            }
        }
    }

    fn paint(&self, output: &FrameOutput) {
        debug_assert_eq!(self.paths.len(), output.paths.len());
        for (el, commands) in self.paths.iter().zip(&output.paths) {
            _ = el.set_attribute("d", &to_svg_path(commands));
        }

        let fill = output.fill.to_string();
        for el in &self.fills {
            _ = el.set_attribute("fill", &fill);
        }
        if let Some(body) = &self.body {
            crate::dom::set_style(body, "background-color", &output.background.to_string());
        }

        self.overlay.set_hint_color(&fill);
        self.overlay.set_progress(output.progress_percent);
        if let Some(style) = output.hint_style {
            self.overlay.set_hint_style(style);
        }
        if let Some(view) = output.hint {
            log::info!("[hint] {:?}", view);
            self.overlay.show_hint(view);
        }
    }

    /// Captures the pointer that won a grab this frame and drops stale captures.
    fn sync_pointer_capture(&mut self) {
        let active = self.sim.state().interaction.active_pointer();
        if active == self.captured_pointer {
            return;
        }
        if let Some(old) = self.captured_pointer {
            if self.svg.has_pointer_capture(old) {
                _ = self.svg.release_pointer_capture(old);
            }
        }
        if let Some(id) = active {
            // fails harmlessly when the pointer is already gone
            _ = self.svg.set_pointer_capture(id);
        }
        self.captured_pointer = active;
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
