// Shared membrane tuning constants used by the simulation core and frontends.

// Sampling
pub const POINTS_PER_CONTOUR: usize = 100; // samples per closed contour

// Spring system
pub const STIFFNESS: f32 = 0.04; // base pull toward the rest target per frame
pub const NEIGHBOR_FORCE: f32 = 0.18; // base cohesion between adjacent samples
pub const STIFFNESS_GAIN_MAX: f32 = 2.5; // stiffness multiplier at full pressure
pub const NEIGHBOR_GAIN_MIN: f32 = 0.25; // cohesion multiplier at full pressure
pub const DAMPING_MIN: f32 = 0.55; // velocity retention at zero pressure
pub const DAMPING_MAX: f32 = 0.88; // velocity retention at full pressure

// Interaction
pub const GRAB_RADIUS: f32 = 100.0; // falloff radius around the dragged sample
pub const CAPTURE_RADIUS: f32 = 100.0; // max pointer distance that still grabs
pub const MAX_STRETCH: f32 = 20.0; // stretch at which resistance halves the pull
pub const GRAB_RAMP_PER_FRAME: f32 = 0.08;
pub const FADE_GRAB_STRENGTH: f32 = 1.0; // latched blend weight while fading

// Collapse / breathing
pub const CONE_INTENSITY: f32 = -0.7; // negative bulges outward before the fade reverses it
pub const BREATH_AMPLITUDE: f32 = 3.5;
pub const BREATH_FREQUENCY: f32 = 0.01; // phase offset per unit of rest coordinate
pub const BREATH_PHASE_STEP: f32 = 0.01; // phase advance per frame

// Fade & exit
pub const FADE_THRESHOLD: f32 = 0.9; // pressure that arms the terminal fade
pub const FADE_DURATION_SEC: f64 = 3.0;
pub const FADE_DECAY_PER_FRAME: f32 = 0.02; // reverse ramp after an aborted fade
pub const FADE_INWARD_BIAS: f32 = 0.25;

// Pressure inputs
pub const WHEEL_PRESSURE_SCALE: f32 = 0.0004; // pressure per wheel delta unit

// Scroll hint timing
pub const HINT_ICON_DELAY_SEC: f64 = 3.0;
pub const HINT_IDLE_DELAY_SEC: f64 = 6.0;

// Palette
pub const BASE_COLOR: [u8; 3] = [139, 154, 191];
pub const HIGHLIGHT_COLOR: [u8; 3] = [255, 255, 255];
pub const FADE_COLOR: [u8; 3] = [255, 255, 255];
