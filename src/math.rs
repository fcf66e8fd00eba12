//! Free-function math kernel over [`FlatVector`].

use crate::error::{FlatError, Result};
use crate::vector::FlatVector;

pub fn length(v: FlatVector) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

pub fn distance(a: FlatVector, b: FlatVector) -> f32 {
    length(b - a)
}

/// Unit vector in the direction of `v`.
///
/// `v` must be non-zero. A zero vector is not checked and yields NaN
/// components; use [`try_normalize`] when the input may be degenerate.
pub fn normalize(v: FlatVector) -> FlatVector {
    let len = length(v);
    FlatVector::new(v.x / len, v.y / len)
}

/// Guarded [`normalize`]: fails with `DegenerateInput` for a zero-length vector.
pub fn try_normalize(v: FlatVector) -> Result<FlatVector> {
    let len = length(v);
    if len == 0.0 {
        return Err(FlatError::DegenerateInput("cannot normalize a zero-length vector"));
    }
    Ok(FlatVector::new(v.x / len, v.y / len))
}

pub fn dot(a: FlatVector, b: FlatVector) -> f32 {
    a.x * b.x + a.y * b.y
}

/// 2D cross product (z of the 3D cross). Positive when `b` turns left of `a`.
pub fn cross(a: FlatVector, b: FlatVector) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Clamp `value` into `[min, max]`.
///
/// Returns `min` when the bounds are equal and `InvalidArgument` when `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> Result<f32> {
    if min == max {
        return Ok(min);
    }
    if min > max {
        return Err(FlatError::InvalidArgument { min, max });
    }
    if value < min {
        return Ok(min);
    }
    if value > max {
        return Ok(max);
    }
    Ok(value)
}
