//! flatphys: minimal 2D rigid-body primitives (validated bodies, circle narrowphase,
//! positional overlap correction; no impulse resolution)

pub mod api;
pub mod body;
pub mod config;
pub mod error;
pub mod math;
pub mod narrowphase;
pub mod types;
pub mod vector;
pub mod world;

pub use crate::api::*;
pub use crate::body::FlatBody;
pub use crate::config::BodyLimits;
pub use crate::error::{FlatError, Result};
pub use crate::narrowphase::Narrowphase;
pub use crate::types::*;
pub use crate::vector::FlatVector;
pub use crate::world::FlatWorld;
