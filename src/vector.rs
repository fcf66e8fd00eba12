use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use glam::Vec2;

/// Immutable 2D vector. Equality is exact per component.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlatVector {
    pub x: f32,
    pub y: f32,
}

impl FlatVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for FlatVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for FlatVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for FlatVector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for FlatVector {
    type Output = Self;

    fn mul(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

/// Division by zero is not checked; the result is non-finite.
impl Div<f32> for FlatVector {
    type Output = Self;

    fn div(self, s: f32) -> Self {
        Self::new(self.x / s, self.y / s)
    }
}

impl fmt::Display for FlatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {}, Y: {}", self.x, self.y)
    }
}

// Interop with glam-based renderers and input layers.

impl From<Vec2> for FlatVector {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<FlatVector> for Vec2 {
    fn from(v: FlatVector) -> Self {
        Vec2::new(v.x, v.y)
    }
}
