use crate::constants::zoomed_view_box;
use wasm_bindgen::JsCast;
use web_sys as web;

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(root: &web::Document, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Every element under `root` matching `selector` that casts to `T`.
pub fn query_all<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    root.query_selector_all(selector)
        .map(nodes_of)
        .unwrap_or_default()
}

pub fn query_all_in_document<T: JsCast>(document: &web::Document, selector: &str) -> Vec<T> {
    document
        .query_selector_all(selector)
        .map(nodes_of)
        .unwrap_or_default()
}

fn nodes_of<T: JsCast>(list: web::NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Narrows the SVG viewBox to the zoomed square around the logo.
pub fn apply_zoom(svg: &web::SvgsvgElement) {
    let (offset, size) = zoomed_view_box();
    _ = svg.set_attribute("viewBox", &format!("{offset} {offset} {size} {size}"));
}

/// Scrollable distance of the document, 0 when it does not scroll.
pub fn scroll_max(window: &web::Window) -> f64 {
    let doc_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let inner = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (doc_height - inner).max(0.0)
}

pub fn is_touch_device(window: &web::Window) -> bool {
    let has_touch_handler = js_sys::Reflect::has(window, &"ontouchstart".into()).unwrap_or(false);
    has_touch_handler || window.navigator().max_touch_points() > 0
}
