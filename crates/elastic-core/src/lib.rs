//! Elastic logo core: a mass-spring membrane sampled from closed outlines,
//! deformed by a pointer, modulated by an external pressure signal and
//! reconstructed into smooth closed curves every frame.
//!
//! Nothing here touches a platform API. Frontends implement [`Contour`] for
//! their geometry, push [`InputEvent`]s into an [`EventQueue`] and paint the
//! [`FrameOutput`] returned by [`Simulation::frame`].

pub mod config;
pub mod constants;
pub mod curve;
pub mod driver;
pub mod error;
pub mod hint;
pub mod interaction;
pub mod math;
pub mod mesh;
pub mod palette;
pub mod pressure;
pub mod sampler;

pub use config::SimulationConfig;
pub use curve::{reconstruct, to_svg_path, PathCommand};
pub use driver::{EventQueue, FrameOutput, InputEvent, Simulation, SimulationState};
pub use error::CoreError;
pub use hint::{HintStyle, HintView, ScrollHint};
pub use interaction::{
    nearest_point, GrabOutcome, GrabSettings, InteractionState, PointRef, PointerKind,
    PointerSample,
};
pub use mesh::{Mesh, SamplePoint, StepParams};
pub use palette::{Palette, Rgb};
pub use pressure::{FadePhase, PressureParams, PressureState, PressureTransition};
pub use sampler::{sample_contour, Contour, Polyline};
