use elastic_core::{PointerKind, PointerSample};
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
/// Maps client coordinates into the SVG user space (the mesh space).
pub fn pointer_svg_position(ev: &web::PointerEvent, svg: &web::SvgsvgElement) -> Option<Vec2> {
    let inverse = svg.get_screen_ctm()?.inverse().ok()?;
    let pt = svg.create_svg_point();
    pt.set_x(ev.client_x() as f32);
    pt.set_y(ev.client_y() as f32);
    let m = pt.matrix_transform(&inverse);
    let pos = Vec2::new(m.x(), m.y());
    pos.is_finite().then_some(pos)
}

#[inline]
pub fn pointer_kind(pointer_type: &str) -> PointerKind {
    match pointer_type {
        "touch" => PointerKind::Touch,
        "pen" => PointerKind::Pen,
        _ => PointerKind::Mouse,
    }
}

pub fn pointer_sample(ev: &web::PointerEvent, svg: &web::SvgsvgElement) -> Option<PointerSample> {
    Some(PointerSample {
        pointer_id: ev.pointer_id(),
        kind: pointer_kind(&ev.pointer_type()),
        position: pointer_svg_position(ev, svg)?,
    })
}

/// Release events still need an id when the position cannot be mapped.
pub fn release_sample(ev: &web::PointerEvent, svg: &web::SvgsvgElement) -> PointerSample {
    pointer_sample(ev, svg).unwrap_or(PointerSample {
        pointer_id: ev.pointer_id(),
        kind: pointer_kind(&ev.pointer_type()),
        position: Vec2::ZERO,
    })
}
