use crate::api::NarrowphaseApi;
use crate::error::{FlatError, Result};
use crate::math;
use crate::types::*;
use crate::vector::FlatVector;

/// Narrowphase primitive tests.
pub struct Narrowphase;

impl NarrowphaseApi for Narrowphase {
    fn intersect_circles(
        center_a: FlatVector,
        radius_a: f32,
        center_b: FlatVector,
        radius_b: f32,
    ) -> Result<Option<Contact>> {
        let distance = math::distance(center_a, center_b);
        let total_radii = radius_a + radius_b;
        if distance >= total_radii {
            return Ok(None);
        }
        if distance == 0.0 {
            return Err(FlatError::DegenerateInput("circle centers coincide"));
        }
        let normal = math::normalize(center_b - center_a);
        let depth = total_radii - distance;
        Ok(Some(Contact { normal, depth }))
    }
}
