//! Deformable ring of sample points and its per-frame integration.

use crate::error::CoreError;
use crate::sampler::{sample_contour, Contour};
use glam::Vec2;

/// One vertex of a deformable contour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SamplePoint {
    rest: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    /// Equals `rest` whenever no drag influences this point.
    pub drag_target: Vec2,
}

impl SamplePoint {
    pub fn new(rest: Vec2) -> Self {
        Self {
            rest,
            position: rest,
            velocity: Vec2::ZERO,
            drag_target: rest,
        }
    }

    /// Original sampled coordinate, fixed for the lifetime of the point.
    #[inline]
    pub fn rest(&self) -> Vec2 {
        self.rest
    }

    #[inline]
    pub fn release(&mut self) {
        self.drag_target = self.rest;
    }
}

/// Frame-global inputs for [`Mesh::step`], derived from pressure and drag state.
#[derive(Clone, Copy, Debug, Default)]
pub struct StepParams {
    pub stiffness: f32,
    pub damping: f32,
    pub neighbor_force: f32,
    /// Blend weight from live position toward `drag_target`, clamped to 1.
    pub grab_strength: f32,
    /// Springs and cohesion are suspended while a drag is in progress.
    pub springs_active: bool,
    /// `pressure² × cone_intensity × pull_multiplier`.
    pub collapse_pull: f32,
    /// Extra pull toward the centroid while fading.
    pub fade_inward: f32,
    pub breath_phase: f32,
    pub breath_amplitude: f32,
    pub breath_frequency: f32,
}

/// Ordered, cyclic ring of samples for one contour.
#[derive(Clone, Debug)]
pub struct Mesh {
    points: Vec<SamplePoint>,
    centroid: Vec2,
}

impl Mesh {
    /// Builds a mesh whose collapse center is the mean rest coordinate.
    pub fn new(points: Vec<SamplePoint>) -> Self {
        let centroid = if points.is_empty() {
            Vec2::ZERO
        } else {
            points.iter().map(|p| p.rest).sum::<Vec2>() / points.len() as f32
        };
        Self { points, centroid }
    }

    pub fn from_contour<C: Contour + ?Sized>(contour: &C, count: usize) -> Result<Self, CoreError> {
        sample_contour(contour, count).map(Self::new)
    }

    /// Replaces the collapse center, e.g. with one shared by every contour of a logo.
    pub fn with_centroid(mut self, centroid: Vec2) -> Self {
        self.centroid = centroid;
        self
    }

    #[inline]
    pub fn centroid(&self) -> Vec2 {
        self.centroid
    }

    #[inline]
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [SamplePoint] {
        &mut self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Degenerate meshes (fewer than two samples) never move.
    #[inline]
    pub fn is_stationary(&self) -> bool {
        self.points.len() < 2
    }

    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn release_drag_targets(&mut self) {
        for p in &mut self.points {
            p.release();
        }
    }

    /// Where the spring pulls the sample at `index` this frame.
    pub fn rest_target(&self, index: usize, params: &StepParams) -> Vec2 {
        rest_target(self.centroid, self.points[index].rest, params)
    }

    /// Advances the ring by one frame: drag blend, then damped spring and cohesion.
    pub fn step(&mut self, params: &StepParams) {
        if self.is_stationary() {
            return;
        }
        let centroid = self.centroid;
        let blend = params.grab_strength.clamp(0.0, 1.0);
        for p in &mut self.points {
            p.position = p.position.lerp(p.drag_target, blend);
        }
        // a drag owns the ring; velocities stay frozen until release
        if !params.springs_active {
            return;
        }
        for p in &mut self.points {
            let target = rest_target(centroid, p.rest, params);
            p.velocity = (p.velocity + (target - p.position) * params.stiffness) * params.damping;
            p.position += p.velocity;
        }
        self.apply_cohesion(params.neighbor_force);
    }

    /// One forward sweep over every cyclic pair `(i, i + 1 mod n)`.
    fn apply_cohesion(&mut self, neighbor_force: f32) {
        let n = self.points.len();
        for i in 0..n {
            let j = (i + 1) % n;
            let impulse = cohesion_impulse(&self.points[i], &self.points[j], neighbor_force);
            self.points[i].velocity += impulse;
            self.points[j].velocity -= impulse;
        }
    }
}

fn rest_target(centroid: Vec2, rest: Vec2, params: &StepParams) -> Vec2 {
    let to_center = centroid - rest;
    rest + to_center * (params.collapse_pull + params.fade_inward)
        + breath_offset(
            rest,
            params.breath_phase,
            params.breath_amplitude,
            params.breath_frequency,
        )
}

/// Idle breathing displacement for a sample resting at `rest`.
#[inline]
pub fn breath_offset(rest: Vec2, phase: f32, amplitude: f32, frequency: f32) -> Vec2 {
    Vec2::new(
        (phase + rest.x * frequency).sin(),
        (phase + rest.y * frequency).cos(),
    ) * amplitude
}

/// Velocity impulse added to `a`; `b` receives the exact negation.
#[inline]
pub fn cohesion_impulse(a: &SamplePoint, b: &SamplePoint, neighbor_force: f32) -> Vec2 {
    ((b.position - a.position) - (b.rest - a.rest)) * neighbor_force
}
