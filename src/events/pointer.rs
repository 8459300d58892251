use crate::input;
use elastic_core::{EventQueue, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer listeners only stage events; the frame loop applies them.
#[derive(Clone)]
pub struct InputWiring {
    pub svg: web::SvgsvgElement,
    pub queue: Rc<RefCell<EventQueue>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_release(&w, "pointerup", InputEvent::PointerUp);
    wire_release(&w, "pointercancel", InputEvent::PointerCancel);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let svg_for_listener = w.svg.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(sample) = input::pointer_sample(&ev, &w.svg) {
            w.queue.borrow_mut().push(InputEvent::PointerDown(sample));
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = svg_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(sample) = input::pointer_sample(&ev, &w.svg) {
            w.queue.borrow_mut().push(InputEvent::PointerMove(sample));
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_release(
    w: &InputWiring,
    event_name: &'static str,
    to_event: fn(elastic_core::PointerSample) -> InputEvent,
) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let id = ev.pointer_id();
        // releasing a capture we never took is a no-op
        if w.svg.has_pointer_capture(id) {
            _ = w.svg.release_pointer_capture(id);
        }
        let sample = input::release_sample(&ev, &w.svg);
        w.queue.borrow_mut().push(to_event(sample));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
