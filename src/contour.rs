use elastic_core::Contour;
use glam::Vec2;
use web_sys as web;

/// An SVG `<path>` queried through the browser's geometry API.
pub struct SvgContour {
    path: web::SvgPathElement,
}

impl SvgContour {
    pub fn new(path: web::SvgPathElement) -> Self {
        Self { path }
    }
}

impl Contour for SvgContour {
    fn total_length(&self) -> f32 {
        self.path.get_total_length()
    }

    fn point_at_length(&self, distance: f32) -> Option<Vec2> {
        self.path
            .get_point_at_length(distance)
            .ok()
            .map(|p| Vec2::new(p.x(), p.y()))
    }
}
