use crate::constants::*;
use crate::error::CoreError;
use crate::palette::Rgb;
use glam::Vec2;

/// Tunables for one simulation. `Default` mirrors `constants.rs`.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub points_per_contour: usize,
    pub stiffness: f32,
    pub neighbor_force: f32,
    pub stiffness_gain_max: f32,
    pub neighbor_gain_min: f32,
    pub damping_min: f32,
    pub damping_max: f32,
    pub grab_radius: f32,
    pub capture_radius: f32,
    pub max_stretch: f32,
    pub grab_ramp_per_frame: f32,
    pub cone_intensity: f32,
    pub breath_amplitude: f32,
    pub breath_frequency: f32,
    pub breath_phase_step: f32,
    pub fade_threshold: f32,
    pub fade_duration_sec: f64,
    pub fade_decay_per_frame: f32,
    pub fade_inward_bias: f32,
    pub wheel_pressure_scale: f32,
    pub hint_icon_delay_sec: f64,
    pub hint_idle_delay_sec: f64,
    pub base_color: Rgb,
    pub highlight_color: Rgb,
    pub fade_color: Rgb,
    /// Shared collapse center; `None` keeps each mesh's own rest centroid.
    pub collapse_center: Option<Vec2>,
    /// Navigation target emitted once when the fade completes.
    pub exit_url: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            points_per_contour: POINTS_PER_CONTOUR,
            stiffness: STIFFNESS,
            neighbor_force: NEIGHBOR_FORCE,
            stiffness_gain_max: STIFFNESS_GAIN_MAX,
            neighbor_gain_min: NEIGHBOR_GAIN_MIN,
            damping_min: DAMPING_MIN,
            damping_max: DAMPING_MAX,
            grab_radius: GRAB_RADIUS,
            capture_radius: CAPTURE_RADIUS,
            max_stretch: MAX_STRETCH,
            grab_ramp_per_frame: GRAB_RAMP_PER_FRAME,
            cone_intensity: CONE_INTENSITY,
            breath_amplitude: BREATH_AMPLITUDE,
            breath_frequency: BREATH_FREQUENCY,
            breath_phase_step: BREATH_PHASE_STEP,
            fade_threshold: FADE_THRESHOLD,
            fade_duration_sec: FADE_DURATION_SEC,
            fade_decay_per_frame: FADE_DECAY_PER_FRAME,
            fade_inward_bias: FADE_INWARD_BIAS,
            wheel_pressure_scale: WHEEL_PRESSURE_SCALE,
            hint_icon_delay_sec: HINT_ICON_DELAY_SEC,
            hint_idle_delay_sec: HINT_IDLE_DELAY_SEC,
            base_color: Rgb::from(BASE_COLOR),
            highlight_color: Rgb::from(HIGHLIGHT_COLOR),
            fade_color: Rgb::from(FADE_COLOR),
            collapse_center: None,
            exit_url: String::from("/next-page.html"),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.points_per_contour == 0 {
            return Err(CoreError::EmptySampleCount);
        }
        positive("stiffness", self.stiffness as f64)?;
        positive("grab_radius", self.grab_radius as f64)?;
        positive("capture_radius", self.capture_radius as f64)?;
        positive("max_stretch", self.max_stretch as f64)?;
        positive("grab_ramp_per_frame", self.grab_ramp_per_frame as f64)?;
        positive("fade_duration_sec", self.fade_duration_sec)?;
        positive("fade_decay_per_frame", self.fade_decay_per_frame as f64)?;
        if !(self.neighbor_force >= 0.0) {
            return Err(invalid("neighbor_force", self.neighbor_force as f64));
        }
        if !(self.fade_threshold > 0.0 && self.fade_threshold <= 1.0) {
            return Err(invalid("fade_threshold", self.fade_threshold as f64));
        }
        for (field, d) in [("damping_min", self.damping_min), ("damping_max", self.damping_max)] {
            if !(d > 0.0 && d < 1.0) {
                return Err(invalid(field, d as f64));
            }
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), CoreError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, value))
    }
}

fn invalid(field: &'static str, value: f64) -> CoreError {
    CoreError::InvalidConfig { field, value }
}
