//! Arc-length sampling of closed contours into rings of [`SamplePoint`]s.

use crate::error::CoreError;
use crate::mesh::SamplePoint;
use glam::Vec2;

/// A continuous closed outline that can be queried by arc length.
///
/// Frontends implement this over their geometry source (an SVG path element
/// on the web); [`Polyline`] covers plain vertex lists.
pub trait Contour {
    fn total_length(&self) -> f32;
    /// Point at `distance` along the outline, `None` if the host query fails.
    fn point_at_length(&self, distance: f32) -> Option<Vec2>;
}

/// Closed polygon contour. The last vertex connects back to the first.
#[derive(Clone, Debug)]
pub struct Polyline {
    vertices: Vec<Vec2>,
    cumulative: Vec<f32>,
}

impl Polyline {
    pub fn new(vertices: Vec<Vec2>) -> Self {
        let n = vertices.len();
        let mut cumulative = Vec::with_capacity(n + 1);
        let mut acc = 0.0;
        cumulative.push(acc);
        for i in 0..n {
            acc += vertices[i].distance(vertices[(i + 1) % n]);
            cumulative.push(acc);
        }
        Self {
            vertices,
            cumulative,
        }
    }

    /// Regular polygon approximating a circle.
    pub fn circle(center: Vec2, radius: f32, segments: usize) -> Self {
        let vertices = (0..segments)
            .map(|i| {
                let a = i as f32 / segments as f32 * std::f32::consts::TAU;
                center + Vec2::new(a.cos(), a.sin()) * radius
            })
            .collect();
        Self::new(vertices)
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
}

impl Contour for Polyline {
    fn total_length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, distance: f32) -> Option<Vec2> {
        let n = self.vertices.len();
        if n == 0 || !distance.is_finite() {
            return None;
        }
        let total = self.total_length();
        if total <= 0.0 {
            return Some(self.vertices[0]);
        }
        let d = distance.clamp(0.0, total);
        // first edge whose end lies at or past d
        let edge = self.cumulative[1..]
            .partition_point(|&c| c < d)
            .min(n - 1);
        let start = self.cumulative[edge];
        let len = self.cumulative[edge + 1] - start;
        let t = if len > 0.0 { (d - start) / len } else { 0.0 };
        Some(self.vertices[edge].lerp(self.vertices[(edge + 1) % n], t))
    }
}

/// Sample `count` points evenly by arc length (`i / count` of the total).
///
/// A zero-length contour yields a single point at its start so the mesh built
/// from it stays stationary.
pub fn sample_contour<C: Contour + ?Sized>(
    contour: &C,
    count: usize,
) -> Result<Vec<SamplePoint>, CoreError> {
    if count == 0 {
        return Err(CoreError::EmptySampleCount);
    }
    let total = contour.total_length();
    if !(total.is_finite() && total > 0.0) {
        log::warn!("[sample] degenerate contour (length {}), using one point", total);
        let start = contour
            .point_at_length(0.0)
            .ok_or(CoreError::ContourQuery { distance: 0.0 })?;
        return Ok(vec![SamplePoint::new(start)]);
    }
    (0..count)
        .map(|i| {
            let distance = i as f32 / count as f32 * total;
            contour
                .point_at_length(distance)
                .map(SamplePoint::new)
                .ok_or(CoreError::ContourQuery { distance })
        })
        .collect()
}
