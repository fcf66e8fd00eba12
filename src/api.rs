use crate::error::Result;
use crate::types::*;
use crate::vector::FlatVector;

/// Narrowphase primitive tests.
pub trait NarrowphaseApi {
    /// Circle/circle overlap.
    ///
    /// `Ok(None)` when the circles are apart or exactly touching. On overlap
    /// the normal points from A toward B and `depth = radius_a + radius_b - distance`.
    /// Coincident centers have no defined normal and fail with `DegenerateInput`.
    fn intersect_circles(
        center_a: FlatVector,
        radius_a: f32,
        center_b: FlatVector,
        radius_b: f32,
    ) -> Result<Option<Contact>>;
}

/// Public API contract for the body container.
pub trait FlatWorldApi {
    // --- Bodies ------------------------------------------------------------

    /// Validate and insert a circle body.
    fn add_circle(
        &mut self,
        radius: f32,
        position: FlatVector,
        density: f32,
        is_static: bool,
        restitution: f32,
    ) -> Result<BodyId>;

    /// Validate and insert a box body.
    fn add_box(
        &mut self,
        width: f32,
        height: f32,
        position: FlatVector,
        density: f32,
        is_static: bool,
        restitution: f32,
    ) -> Result<BodyId>;

    /// Displace a body by `delta`. Returns false for an unknown id.
    fn move_body(&mut self, id: BodyId, delta: FlatVector) -> bool;

    // --- Frame step --------------------------------------------------------

    /// Push every overlapping circle pair apart, pair by pair in index order.
    fn resolve_overlaps(&mut self) -> ResolveStats;
}
