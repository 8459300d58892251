use thiserror::Error;

/// Failures raised while building a simulation. Per-frame operations never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("sample count must be at least 1")]
    EmptySampleCount,
    #[error("invalid config value for `{field}`: {value}")]
    InvalidConfig { field: &'static str, value: f64 },
    #[error("contour could not be queried at length {distance}")]
    ContourQuery { distance: f32 },
}
