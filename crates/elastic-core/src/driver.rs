//! Per-frame orchestration: drain staged input, evaluate pressure transitions,
//! integrate every mesh, then rebuild curves and colors for the renderer.

use crate::config::SimulationConfig;
use crate::constants::FADE_GRAB_STRENGTH;
use crate::curve::{reconstruct, PathCommand};
use crate::error::CoreError;
use crate::hint::{HintStyle, HintView, ScrollHint};
use crate::interaction::{GrabSettings, InteractionState, PointerKind, PointerSample};
use crate::mesh::{Mesh, StepParams};
use crate::palette::{Palette, Rgb};
use crate::pressure::{PressureState, PressureTransition};
use crate::sampler::Contour;
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Normalized input staged by frontend listeners between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp(PointerSample),
    PointerCancel(PointerSample),
    /// Absolute pressure, e.g. from the scroll position.
    Pressure(f32),
    /// Raw wheel delta, accumulated into pressure.
    WheelDelta(f32),
    HintDismissed,
}

/// FIFO of input events, drained once per frame.
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    events: SmallVec<[InputEvent; 16]>,
}

impl EventQueue {
    #[inline]
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> smallvec::Drain<'_, [InputEvent; 16]> {
        self.events.drain(..)
    }
}

/// All mutable animation state besides the meshes themselves.
#[derive(Clone, Debug)]
pub struct SimulationState {
    pub interaction: InteractionState,
    pub pressure: PressureState,
    pub hint: ScrollHint,
    pub breath_phase: f32,
    pub frame: u64,
}

/// What the renderer should paint this frame.
#[derive(Clone, Debug)]
pub struct FrameOutput {
    /// One closed path per mesh, in mesh order.
    pub paths: Vec<Vec<PathCommand>>,
    pub background: Rgb,
    pub fill: Rgb,
    pub progress_percent: f32,
    /// Set on exactly one frame: the one that completes the fade.
    pub navigate_to: Option<String>,
    pub hint: Option<HintView>,
    pub hint_style: Option<HintStyle>,
}

pub struct Simulation {
    config: SimulationConfig,
    palette: Palette,
    grab: GrabSettings,
    meshes: Vec<Mesh>,
    state: SimulationState,
    scratch: Vec<Vec2>,
}

impl Simulation {
    pub fn new(
        config: SimulationConfig,
        meshes: Vec<Mesh>,
        now_sec: f64,
        hint_style: HintStyle,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let meshes = match config.collapse_center {
            Some(center) => meshes.into_iter().map(|m| m.with_centroid(center)).collect(),
            None => meshes,
        };
        let palette = Palette {
            base: config.base_color,
            highlight: config.highlight_color,
            fade: config.fade_color,
            threshold: config.fade_threshold,
        };
        let grab = GrabSettings {
            grab_radius: config.grab_radius,
            capture_radius: config.capture_radius,
            max_stretch: config.max_stretch,
            ramp_per_frame: config.grab_ramp_per_frame,
        };
        let hint = ScrollHint::new(
            now_sec,
            hint_style,
            config.hint_icon_delay_sec,
            config.hint_idle_delay_sec,
        );
        log::info!(
            "[init] meshes={} points={}",
            meshes.len(),
            meshes.iter().map(Mesh::len).sum::<usize>()
        );
        Ok(Self {
            config,
            palette,
            grab,
            meshes,
            state: SimulationState {
                interaction: InteractionState::default(),
                pressure: PressureState::default(),
                hint,
                breath_phase: 0.0,
                frame: 0,
            },
            scratch: Vec::new(),
        })
    }

    /// Samples every contour with `config.points_per_contour` points.
    pub fn from_contours<C: Contour>(
        config: SimulationConfig,
        contours: &[C],
        now_sec: f64,
        hint_style: HintStyle,
    ) -> Result<Self, CoreError> {
        let meshes = contours
            .iter()
            .map(|c| Mesh::from_contour(c, config.points_per_contour))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(config, meshes, now_sec, hint_style)
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[inline]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    #[inline]
    pub fn meshes_mut(&mut self) -> &mut [Mesh] {
        &mut self.meshes
    }

    #[inline]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn frame(&mut self, now_sec: f64, events: &mut EventQueue) -> FrameOutput {
        let mut hint_change = None;
        let mut hint_style = None;
        for event in events.drain() {
            match event {
                InputEvent::PointerDown(sample) => {
                    if sample.kind == PointerKind::Pen && self.state.hint.prefer_swipe() {
                        hint_style = Some(HintStyle::Swipe);
                    }
                    self.state.interaction.on_pointer_down(
                        &self.meshes,
                        &sample,
                        &self.grab,
                        self.state.pressure.fade_active(),
                    );
                }
                InputEvent::PointerMove(sample) => {
                    self.state
                        .interaction
                        .on_pointer_move(&mut self.meshes, &sample, &self.grab);
                }
                InputEvent::PointerUp(sample) => {
                    self.state
                        .interaction
                        .on_pointer_up(&mut self.meshes, sample.pointer_id);
                }
                InputEvent::PointerCancel(sample) => {
                    self.state
                        .interaction
                        .on_pointer_cancel(&mut self.meshes, sample.pointer_id);
                }
                InputEvent::Pressure(value) => self.state.pressure.set_pressure(value),
                InputEvent::WheelDelta(delta) => self
                    .state
                    .pressure
                    .apply_wheel_delta(delta, self.config.wheel_pressure_scale),
                InputEvent::HintDismissed => {
                    if let Some(view) = self.state.hint.dismiss(now_sec) {
                        hint_change = Some(view);
                    }
                }
            }
        }

        let mut navigate_to = None;
        match self.state.pressure.advance(now_sec, &self.config) {
            PressureTransition::FadeStarted => {
                self.state
                    .interaction
                    .latch(&mut self.meshes, FADE_GRAB_STRENGTH);
            }
            PressureTransition::FadeAborted => self.state.interaction.unlatch(),
            PressureTransition::Exited => {
                log::info!("[exit] navigating to {}", self.config.exit_url);
                navigate_to = Some(self.config.exit_url.clone());
            }
            PressureTransition::None => {}
        }

        let pressure = self.state.pressure.pressure();
        if let Some(view) = self.state.hint.advance(
            now_sec,
            pressure,
            self.config.fade_threshold,
            self.state.pressure.fade_active(),
        ) {
            hint_change = Some(view);
        }

        self.state
            .interaction
            .advance_grab(self.config.grab_ramp_per_frame);
        self.state.breath_phase =
            (self.state.breath_phase + self.config.breath_phase_step).rem_euclid(TAU);

        let derived = self.state.pressure.params(&self.config);
        let step = StepParams {
            stiffness: derived.stiffness,
            damping: derived.damping,
            neighbor_force: derived.neighbor_force,
            grab_strength: self.state.interaction.blend_weight(),
            springs_active: !self.state.interaction.is_dragging(),
            collapse_pull: derived.collapse_pull,
            fade_inward: derived.fade_inward,
            breath_phase: self.state.breath_phase,
            breath_amplitude: self.config.breath_amplitude,
            breath_frequency: self.config.breath_frequency,
        };
        for mesh in &mut self.meshes {
            mesh.step(&step);
        }

        let mut paths = Vec::with_capacity(self.meshes.len());
        for mesh in &self.meshes {
            self.scratch.clear();
            self.scratch.extend(mesh.positions());
            paths.push(reconstruct(&self.scratch));
        }
        debug_assert_eq!(paths.len(), self.meshes.len());
        self.state.frame += 1;

        let fade_progress = self.state.pressure.fade_progress();
        FrameOutput {
            paths,
            background: self.palette.background(pressure),
            fill: self.palette.fill(pressure, fade_progress),
            progress_percent: self.state.pressure.progress_percent(),
            navigate_to,
            hint: hint_change,
            hint_style,
        }
    }
}
