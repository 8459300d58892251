//! Pressure-driven modulation of the membrane and the fade/exit state machine.
//!
//! `Normal -> Fading -> Exited`, with `Fading -> Normal` when pressure drops
//! below the threshold before the fade completes. `Exited` is terminal.

use crate::config::SimulationConfig;
use crate::math::{clamp01, ease_in_out_cubic, lerp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FadePhase {
    #[default]
    Normal,
    Fading,
    Exited,
}

/// Transition taken by one [`PressureState::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressureTransition {
    None,
    FadeStarted,
    FadeAborted,
    Exited,
}

/// Frame-global spring parameters derived from pressure and fade progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PressureParams {
    pub stiffness: f32,
    pub neighbor_force: f32,
    pub damping: f32,
    pub collapse_pull: f32,
    pub fade_inward: f32,
}

#[derive(Clone, Debug)]
pub struct PressureState {
    pressure: f32,
    phase: FadePhase,
    fade_progress: f32,
    collapse_progress: f32,
    pull_multiplier: f32,
    fade_started_at: Option<f64>,
    has_exited: bool,
}

impl Default for PressureState {
    fn default() -> Self {
        Self {
            pressure: 0.0,
            phase: FadePhase::Normal,
            fade_progress: 0.0,
            collapse_progress: 0.0,
            pull_multiplier: 1.0,
            fade_started_at: None,
            has_exited: false,
        }
    }
}

impl PressureState {
    #[inline]
    pub fn pressure(&self) -> f32 {
        self.pressure
    }

    #[inline]
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// True from fade entry onward, including after exit.
    #[inline]
    pub fn fade_active(&self) -> bool {
        self.phase != FadePhase::Normal
    }

    #[inline]
    pub fn fade_progress(&self) -> f32 {
        self.fade_progress
    }

    #[inline]
    pub fn collapse_progress(&self) -> f32 {
        self.collapse_progress
    }

    #[inline]
    pub fn pull_multiplier(&self) -> f32 {
        self.pull_multiplier
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.has_exited
    }

    /// Width of the progress indicator, in percent.
    pub fn progress_percent(&self) -> f32 {
        match self.phase {
            FadePhase::Normal => 0.0,
            _ => self.fade_progress * 100.0,
        }
    }

    pub fn set_pressure(&mut self, value: f32) {
        self.pressure = clamp01(value);
    }

    /// Accumulates a wheel delta; the result is clamped like any other input.
    pub fn apply_wheel_delta(&mut self, delta: f32, scale: f32) {
        if delta.is_finite() {
            self.set_pressure(self.pressure + delta * scale);
        }
    }

    /// Evaluates transitions for the frame at `now_sec`. Runs before integration.
    pub fn advance(&mut self, now_sec: f64, config: &SimulationConfig) -> PressureTransition {
        match self.phase {
            FadePhase::Exited => PressureTransition::None,
            FadePhase::Normal => {
                if self.pressure >= config.fade_threshold {
                    // resume from the current progress so a re-entry does not jump
                    let resumed = self.fade_progress as f64 * config.fade_duration_sec;
                    self.fade_started_at = Some(now_sec - resumed);
                    self.phase = FadePhase::Fading;
                    self.update_fade(now_sec, config);
                    log::info!("[pressure] fade started at {:.2}", self.pressure);
                    PressureTransition::FadeStarted
                } else {
                    self.fade_progress =
                        (self.fade_progress - config.fade_decay_per_frame).max(0.0);
                    PressureTransition::None
                }
            }
            FadePhase::Fading => {
                if self.pressure < config.fade_threshold {
                    self.phase = FadePhase::Normal;
                    self.fade_started_at = None;
                    self.collapse_progress = 0.0;
                    self.pull_multiplier = 1.0;
                    self.fade_progress =
                        (self.fade_progress - config.fade_decay_per_frame).max(0.0);
                    log::info!("[pressure] fade aborted at {:.2}", self.pressure);
                    return PressureTransition::FadeAborted;
                }
                self.update_fade(now_sec, config);
                if self.fade_progress >= 1.0 && !self.has_exited {
                    self.has_exited = true;
                    self.phase = FadePhase::Exited;
                    log::info!("[pressure] fade complete");
                    return PressureTransition::Exited;
                }
                PressureTransition::None
            }
        }
    }

    pub fn params(&self, config: &SimulationConfig) -> PressureParams {
        let energy = self.pressure;
        let fade_inward = if self.fade_active() {
            self.collapse_progress * config.fade_inward_bias
        } else {
            0.0
        };
        PressureParams {
            stiffness: config.stiffness * lerp(1.0, config.stiffness_gain_max, energy),
            neighbor_force: config.neighbor_force * lerp(1.0, config.neighbor_gain_min, energy),
            damping: lerp(config.damping_min, config.damping_max, energy),
            collapse_pull: collapse_pull(energy, config.cone_intensity, self.pull_multiplier),
            fade_inward,
        }
    }

    fn update_fade(&mut self, now_sec: f64, config: &SimulationConfig) {
        let started = self.fade_started_at.unwrap_or(now_sec);
        let elapsed = (now_sec - started) / config.fade_duration_sec;
        self.fade_progress = clamp01(elapsed as f32);
        let eased = ease_in_out_cubic(self.fade_progress);
        self.collapse_progress = eased * eased;
        self.pull_multiplier = lerp(0.0, -1.0, self.collapse_progress);
    }
}

/// Scalar applied to the rest-to-centroid vector: `pressure² × cone × multiplier`.
#[inline]
pub fn collapse_pull(pressure: f32, cone_intensity: f32, pull_multiplier: f32) -> f32 {
    pressure * pressure * cone_intensity * pull_multiplier
}

/// Pressure from a scroll offset, `None` when the document cannot scroll.
#[inline]
pub fn scroll_pressure(scroll_y: f64, scroll_max: f64) -> Option<f32> {
    (scroll_max > 0.0).then(|| clamp01((scroll_y / scroll_max) as f32))
}
