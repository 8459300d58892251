use crate::dom;
use elastic_core::pressure::scroll_pressure;
use elastic_core::{EventQueue, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Scroll position drives pressure when the page scrolls; otherwise wheel
/// deltas accumulate into it.
pub fn wire_pressure_sources(window: &web::Window, queue: Rc<RefCell<EventQueue>>) {
    let queue_scroll = queue.clone();
    let scroll_closure = Closure::wrap(Box::new(move || {
        let Some(w) = web::window() else {
            return;
        };
        let scroll_y = w.scroll_y().unwrap_or(0.0);
        if let Some(p) = scroll_pressure(scroll_y, dom::scroll_max(&w)) {
            queue_scroll.borrow_mut().push(InputEvent::Pressure(p));
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", scroll_closure.as_ref().unchecked_ref());
    scroll_closure.forget();

    let wheel_closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let scrollable = web::window()
            .map(|w| dom::scroll_max(&w) > 0.0)
            .unwrap_or(false);
        if !scrollable {
            queue
                .borrow_mut()
                .push(InputEvent::WheelDelta(ev.delta_y() as f32));
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("wheel", wheel_closure.as_ref().unchecked_ref());
    wheel_closure.forget();
}

/// A reload starts from zero pressure rather than the restored scroll offset.
pub fn wire_scroll_reset_on_unload(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move || {
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Clicking the hint scrolls to the bottom and dismisses it.
pub fn wire_hint_click(targets: &[web::HtmlElement], queue: Rc<RefCell<EventQueue>>) {
    for el in targets {
        let queue = queue.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            if let Some(w) = web::window() {
                let bottom = w
                    .document()
                    .and_then(|d| d.body())
                    .map(|b| b.scroll_height() as f64)
                    .unwrap_or(0.0);
                let opts = web::ScrollToOptions::new();
                opts.set_top(bottom);
                opts.set_behavior(web::ScrollBehavior::Smooth);
                w.scroll_to_with_scroll_to_options(&opts);
            }
            queue.borrow_mut().push(InputEvent::HintDismissed);
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
