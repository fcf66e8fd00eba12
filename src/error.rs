use thiserror::Error;

/// Errors reported by body construction, math helpers and limit loading.
#[derive(Error, Debug)]
pub enum FlatError {
    #[error("area {area} is too small, min body area is {min}")]
    AreaTooSmall { area: f32, min: f32 },

    #[error("area {area} is too large, max body area is {max}")]
    AreaTooLarge { area: f32, max: f32 },

    #[error("density {density} is too small, min density is {min}")]
    DensityTooSmall { density: f32, min: f32 },

    #[error("density {density} is too large, max density is {max}")]
    DensityTooLarge { density: f32, max: f32 },

    #[error("invalid argument: min {min} is greater than max {max}")]
    InvalidArgument { min: f32, max: f32 },

    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("invalid body limits: {0}")]
    InvalidLimits(String),

    #[error("failed to parse body limits: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to read body limits: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for flatphys operations.
pub type Result<T> = std::result::Result<T, FlatError>;
