use core::fmt;

use crate::vector::FlatVector;

/// Supported body shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Circle,
    Box,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Circle => f.write_str("circle"),
            ShapeType::Box => f.write_str("box"),
        }
    }
}

/// Overlap contact result (discrete).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from A toward B.
    pub normal: FlatVector,
    /// Penetration depth (> 0).
    pub depth: f32,
}

impl Contact {
    /// Equal-and-opposite positional correction `(for A, for B)`, half the
    /// depth each, with no mass weighting.
    pub fn corrections(&self) -> (FlatVector, FlatVector) {
        (
            self.normal * (-self.depth) / 2.0,
            self.normal * self.depth / 2.0,
        )
    }
}

/// Index of a body inside a [`crate::FlatWorld`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

/// Counters for one overlap-resolution pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Circle/circle pairs handed to the narrow phase.
    pub pairs_tested: usize,
    /// Pairs that overlapped and were pushed apart.
    pub contacts: usize,
    /// Pairs with coincident centers, left untouched.
    pub degenerate: usize,
}
