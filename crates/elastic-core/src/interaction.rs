//! Pointer hit-testing and the single-pointer drag state machine.
//!
//! Handlers only stage `drag_target`s; live positions and velocities belong to
//! the integrator and are never touched here.

use crate::mesh::Mesh;
use glam::Vec2;

/// Identity of a sample inside a mesh list. The meshes own the points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointRef {
    pub mesh: usize,
    pub index: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
    Pen,
}

/// One normalized pointer sample, already in mesh space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub kind: PointerKind,
    pub position: Vec2,
}

/// Outcome of a pointer-down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GrabOutcome {
    Grabbed { point: PointRef, distance: f32 },
    /// Nearest sample lies outside the capture radius (or there are none).
    Missed,
    /// Terminal fade in progress, grabs are refused.
    Suppressed,
    /// Another pointer already owns the drag.
    Busy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrabSettings {
    pub grab_radius: f32,
    pub capture_radius: f32,
    pub max_stretch: f32,
    pub ramp_per_frame: f32,
}

/// Drag lifecycle: idle until a grab binds `dragged`, dragging until release.
#[derive(Clone, Debug, Default)]
pub struct InteractionState {
    dragged: Option<PointRef>,
    active_pointer: Option<i32>,
    grab_strength: f32,
    latched: bool,
}

impl InteractionState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    #[inline]
    pub fn dragged_point(&self) -> Option<PointRef> {
        self.dragged
    }

    /// Pointer that owns the current drag.
    #[inline]
    pub fn active_pointer(&self) -> Option<i32> {
        self.active_pointer
    }

    #[inline]
    pub fn grab_strength(&self) -> f32 {
        self.grab_strength
    }

    #[inline]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    /// Weight the mesh step blends toward drag targets with. A latch has
    /// released every target, so while latched the springs alone drive the ring.
    #[inline]
    pub fn blend_weight(&self) -> f32 {
        if self.latched {
            0.0
        } else {
            self.grab_strength
        }
    }

    pub fn on_pointer_down(
        &mut self,
        meshes: &[Mesh],
        sample: &PointerSample,
        settings: &GrabSettings,
        fade_active: bool,
    ) -> GrabOutcome {
        if fade_active || self.latched {
            return GrabOutcome::Suppressed;
        }
        if !sample.position.is_finite() {
            return GrabOutcome::Missed;
        }
        if self.is_dragging() {
            log::debug!(
                "[drag] ignoring pointer {} while pointer {:?} drags",
                sample.pointer_id,
                self.active_pointer
            );
            return GrabOutcome::Busy;
        }
        match nearest_point(meshes, sample.position) {
            Some((point, distance)) if distance <= settings.capture_radius => {
                self.dragged = Some(point);
                self.active_pointer = Some(sample.pointer_id);
                self.grab_strength = 0.0;
                log::info!(
                    "[drag] grab mesh {} point {} (d={:.1})",
                    point.mesh,
                    point.index,
                    distance
                );
                GrabOutcome::Grabbed { point, distance }
            }
            _ => GrabOutcome::Missed,
        }
    }

    /// Restages drag targets around the dragged sample's rest position.
    pub fn on_pointer_move(
        &self,
        meshes: &mut [Mesh],
        sample: &PointerSample,
        settings: &GrabSettings,
    ) {
        let Some(dragged) = self.dragged else {
            return;
        };
        // a non-finite target would spread through cohesion and never recover
        if self.active_pointer != Some(sample.pointer_id) || !sample.position.is_finite() {
            return;
        }
        debug_assert!(dragged.mesh < meshes.len(), "stale drag reference");
        let Some(anchor) = meshes
            .get(dragged.mesh)
            .and_then(|m| m.points().get(dragged.index))
            .map(|p| p.rest())
        else {
            return;
        };
        for mesh in meshes.iter_mut() {
            for p in mesh.points_mut() {
                let d = p.rest().distance(anchor);
                if d < settings.grab_radius {
                    p.drag_target =
                        p.rest() + drag_offset(p.rest(), sample.position, d, settings);
                }
            }
        }
    }

    /// Ends the drag owned by `pointer_id`. Events from other pointers are ignored
    /// while a drag is live; when idle the release still runs and is a no-op.
    pub fn on_pointer_up(&mut self, meshes: &mut [Mesh], pointer_id: i32) -> bool {
        if self.is_dragging() && self.active_pointer != Some(pointer_id) {
            return false;
        }
        let was_dragging = self.is_dragging();
        self.release(meshes);
        if was_dragging {
            log::info!("[drag] release pointer {}", pointer_id);
        }
        was_dragging
    }

    /// Cancellation leaves exactly the state a pointer-up would.
    pub fn on_pointer_cancel(&mut self, meshes: &mut [Mesh], pointer_id: i32) -> bool {
        self.on_pointer_up(meshes, pointer_id)
    }

    /// Per-frame ramp of the blend weight consumed by the mesh step.
    pub fn advance_grab(&mut self, ramp_per_frame: f32) {
        if self.latched {
            return;
        }
        self.grab_strength = if self.is_dragging() {
            (self.grab_strength + ramp_per_frame).min(1.0)
        } else {
            0.0
        };
    }

    /// Drops any drag and pins the blend weight at `strength` until [`unlatch`](Self::unlatch).
    pub fn latch(&mut self, meshes: &mut [Mesh], strength: f32) {
        self.release(meshes);
        self.latched = true;
        self.grab_strength = strength;
    }

    pub fn unlatch(&mut self) {
        self.latched = false;
        self.grab_strength = 0.0;
    }

    fn release(&mut self, meshes: &mut [Mesh]) {
        self.dragged = None;
        self.active_pointer = None;
        if !self.latched {
            self.grab_strength = 0.0;
        }
        for mesh in meshes.iter_mut() {
            mesh.release_drag_targets();
        }
    }
}

/// Closest sample (by live position) across all meshes, with its distance.
/// Ties keep the first sample in mesh order.
pub fn nearest_point(meshes: &[Mesh], position: Vec2) -> Option<(PointRef, f32)> {
    let mut best: Option<(PointRef, f32)> = None;
    for (mi, mesh) in meshes.iter().enumerate() {
        for (pi, p) in mesh.points().iter().enumerate() {
            let d = p.position.distance(position);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => {
                    best = Some((PointRef { mesh: mi, index: pi }, d));
                }
            }
        }
    }
    best
}

/// Displacement from `rest` toward `pointer`, weighted by falloff from the
/// anchor (`distance_to_anchor`) and softened by stretch resistance.
#[inline]
pub fn drag_offset(
    rest: Vec2,
    pointer: Vec2,
    distance_to_anchor: f32,
    settings: &GrabSettings,
) -> Vec2 {
    let weight = 1.0 - distance_to_anchor / settings.grab_radius;
    let displacement = pointer - rest;
    let resistance = 1.0 / (1.0 + displacement.length() / settings.max_stretch);
    displacement * weight * resistance
}
