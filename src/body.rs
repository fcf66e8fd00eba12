use core::f32::consts::PI;

use crate::config::BodyLimits;
use crate::error::{FlatError, Result};
use crate::math;
use crate::types::ShapeType;
use crate::vector::FlatVector;

/// Rigid body with validated physical properties.
///
/// Everything except `position` is fixed at construction. Only one set of
/// shape parameters is meaningful: `radius` for circles, `width`/`height`
/// for boxes; the other set holds zero. Branch on [`FlatBody::shape_type`]
/// before reading them.
#[derive(Clone, Debug)]
pub struct FlatBody {
    position: FlatVector,

    // Kinematic state reserved for a future dynamics step; zero-initialized
    // and never written after construction.
    linear_velocity: FlatVector,
    rotation: f32,
    rotational_velocity: f32,

    density: f32,
    mass: f32,
    restitution: f32,
    area: f32,
    is_static: bool,

    radius: f32,
    width: f32,
    height: f32,

    shape_type: ShapeType,
}

impl FlatBody {
    #[allow(clippy::too_many_arguments)]
    fn new(
        position: FlatVector,
        density: f32,
        mass: f32,
        restitution: f32,
        area: f32,
        is_static: bool,
        radius: f32,
        width: f32,
        height: f32,
        shape_type: ShapeType,
    ) -> Self {
        Self {
            position,
            linear_velocity: FlatVector::ZERO,
            rotation: 0.0,
            rotational_velocity: 0.0,
            density,
            mass,
            restitution,
            area,
            is_static,
            radius,
            width,
            height,
            shape_type,
        }
    }

    /// Create a circle body. Fails if `π·radius²` or `density` falls outside `limits`.
    pub fn create_circle_body(
        radius: f32,
        position: FlatVector,
        density: f32,
        is_static: bool,
        restitution: f32,
        limits: &BodyLimits,
    ) -> Result<Self> {
        let area = radius * radius * PI;
        check_limits(area, density, limits)?;
        let restitution = clamp_restitution(restitution)?;
        let mass = area * density;
        Ok(Self::new(
            position,
            density,
            mass,
            restitution,
            area,
            is_static,
            radius,
            0.0,
            0.0,
            ShapeType::Circle,
        ))
    }

    /// Create a box body. Fails if `width·height` or `density` falls outside `limits`.
    pub fn create_box_body(
        width: f32,
        height: f32,
        position: FlatVector,
        density: f32,
        is_static: bool,
        restitution: f32,
        limits: &BodyLimits,
    ) -> Result<Self> {
        let area = width * height;
        check_limits(area, density, limits)?;
        let restitution = clamp_restitution(restitution)?;
        let mass = area * density;
        Ok(Self::new(
            position,
            density,
            mass,
            restitution,
            area,
            is_static,
            0.0,
            width,
            height,
            ShapeType::Box,
        ))
    }

    /// `position += delta`
    pub fn move_by(&mut self, delta: FlatVector) {
        self.position = self.position + delta;
    }

    pub fn move_to(&mut self, position: FlatVector) {
        self.position = position;
    }

    pub fn position(&self) -> FlatVector {
        self.position
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn density(&self) -> f32 {
        self.density
    }

    /// Always `area * density`.
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// In `[0, 1]`. Stored only; no collision response reads it yet.
    pub fn restitution(&self) -> f32 {
        self.restitution
    }

    pub fn area(&self) -> f32 {
        self.area
    }

    /// Flag for a future dynamics step; nothing enforces it today.
    pub fn is_static(&self) -> bool {
        self.is_static
    }

    /// Zero for boxes.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Zero for circles.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Zero for circles.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn linear_velocity(&self) -> FlatVector {
        self.linear_velocity
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotational_velocity(&self) -> f32 {
        self.rotational_velocity
    }
}

// First failing check wins: area min, area max, density min, density max.
// NaN fails every comparison, so it is rejected up front; infinities fall
// through to the regular bound checks.
fn check_limits(area: f32, density: f32, limits: &BodyLimits) -> Result<()> {
    if area.is_nan() {
        return Err(FlatError::DegenerateInput("body area is NaN"));
    }
    if area < limits.min_body_size {
        return Err(FlatError::AreaTooSmall { area, min: limits.min_body_size });
    }
    if area > limits.max_body_size {
        return Err(FlatError::AreaTooLarge { area, max: limits.max_body_size });
    }
    if density.is_nan() {
        return Err(FlatError::DegenerateInput("body density is NaN"));
    }
    if density < limits.min_density {
        return Err(FlatError::DensityTooSmall { density, min: limits.min_density });
    }
    if density > limits.max_density {
        return Err(FlatError::DensityTooLarge { density, max: limits.max_density });
    }
    Ok(())
}

// Never rejected; NaN has no ordering and is stored as 0 (no bounce).
fn clamp_restitution(restitution: f32) -> Result<f32> {
    if restitution.is_nan() {
        return Ok(0.0);
    }
    math::clamp(restitution, 0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> BodyLimits {
        BodyLimits::default()
    }

    #[test]
    fn test_circle_mass_is_area_times_density() {
        for (radius, density) in [(1.0f32, 2.0f32), (0.25, 0.5), (10.0, 21.4), (3.3, 7.0)] {
            let b = FlatBody::create_circle_body(radius, FlatVector::ZERO, density, false, 0.5, &limits())
                .unwrap();
            let area = radius * radius * PI;
            assert!((b.area() - area).abs() < 1e-5 * area.max(1.0));
            assert!((b.mass() - area * density).abs() < 1e-4 * (area * density).max(1.0));
            assert_eq!(b.shape_type(), ShapeType::Circle);
            assert_eq!(b.radius(), radius);
            assert_eq!(b.width(), 0.0);
            assert_eq!(b.height(), 0.0);
        }
    }

    #[test]
    fn test_box_properties() {
        let p = FlatVector::new(3.0, -1.0);
        let b = FlatBody::create_box_body(2.0, 3.0, p, 4.0, true, 0.2, &limits()).unwrap();
        assert_eq!(b.shape_type(), ShapeType::Box);
        assert_eq!(b.area(), 6.0);
        assert_eq!(b.mass(), 24.0);
        assert_eq!(b.radius(), 0.0);
        assert_eq!((b.width(), b.height()), (2.0, 3.0));
        assert!(b.is_static());
        assert_eq!(b.position(), p);
    }

    #[test]
    fn test_kinematic_state_starts_at_rest() {
        let b = FlatBody::create_circle_body(1.0, FlatVector::new(1.0, 1.0), 1.0, false, 0.5, &limits())
            .unwrap();
        assert_eq!(b.linear_velocity(), FlatVector::ZERO);
        assert_eq!(b.rotation(), 0.0);
        assert_eq!(b.rotational_velocity(), 0.0);
    }

    #[test]
    fn test_circle_area_too_small() {
        let err = FlatBody::create_circle_body(0.001, FlatVector::ZERO, 1.0, false, 0.5, &limits())
            .unwrap_err();
        assert!(matches!(err, FlatError::AreaTooSmall { min, .. } if min == limits().min_body_size));
    }

    #[test]
    fn test_box_area_too_large() {
        let err = FlatBody::create_box_body(100.0, 100.0, FlatVector::ZERO, 1.0, false, 0.5, &limits())
            .unwrap_err();
        assert!(matches!(err, FlatError::AreaTooLarge { area, max } if area == 10_000.0 && max == 4096.0));
    }

    #[test]
    fn test_density_bounds() {
        let err = FlatBody::create_box_body(1.0, 1.0, FlatVector::ZERO, 0.1, false, 0.5, &limits())
            .unwrap_err();
        assert!(matches!(err, FlatError::DensityTooSmall { .. }));
        let err = FlatBody::create_circle_body(1.0, FlatVector::ZERO, 22.0, false, 0.5, &limits())
            .unwrap_err();
        assert!(matches!(err, FlatError::DensityTooLarge { max, .. } if max == 21.4));
    }

    #[test]
    fn test_area_checked_before_density() {
        let err = FlatBody::create_box_body(0.001, 0.001, FlatVector::ZERO, 100.0, false, 0.5, &limits())
            .unwrap_err();
        assert!(matches!(err, FlatError::AreaTooSmall { .. }));
        let err = FlatBody::create_box_body(1000.0, 1000.0, FlatVector::ZERO, 0.0, false, 0.5, &limits())
            .unwrap_err();
        assert!(matches!(err, FlatError::AreaTooLarge { .. }));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let l = BodyLimits::new(1.0, 4.0, 2.0, 3.0).unwrap();
        assert!(FlatBody::create_box_body(1.0, 1.0, FlatVector::ZERO, 2.0, false, 0.0, &l).is_ok());
        assert!(FlatBody::create_box_body(2.0, 2.0, FlatVector::ZERO, 3.0, false, 0.0, &l).is_ok());
        assert!(FlatBody::create_box_body(2.0, 2.5, FlatVector::ZERO, 3.0, false, 0.0, &l).is_err());
    }

    #[test]
    fn test_injected_limits_are_honored() {
        let strict = BodyLimits::new(10.0, 20.0, 1.0, 2.0).unwrap();
        let err = FlatBody::create_box_body(2.0, 2.0, FlatVector::ZERO, 1.5, false, 0.5, &strict)
            .unwrap_err();
        assert!(matches!(err, FlatError::AreaTooSmall { min, .. } if min == 10.0));
        assert!(FlatBody::create_box_body(2.0, 2.0, FlatVector::ZERO, 1.5, false, 0.5, &limits()).is_ok());
    }

    #[test]
    fn test_restitution_is_clamped() {
        let make = |r: f32| {
            FlatBody::create_circle_body(1.0, FlatVector::ZERO, 1.0, false, r, &limits())
                .unwrap()
                .restitution()
        };
        assert_eq!(make(1.5), 1.0);
        assert_eq!(make(-0.2), 0.0);
        assert_eq!(make(0.4), 0.4);
        assert_eq!(make(f32::NAN), 0.0);
        assert_eq!(make(f32::INFINITY), 1.0);
        assert_eq!(make(f32::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_nan_shape_or_density_is_rejected() {
        let l = limits();
        assert!(matches!(
            FlatBody::create_circle_body(f32::NAN, FlatVector::ZERO, 1.0, false, 0.5, &l),
            Err(FlatError::DegenerateInput(_))
        ));
        assert!(matches!(
            FlatBody::create_box_body(f32::NAN, 1.0, FlatVector::ZERO, 1.0, false, 0.5, &l),
            Err(FlatError::DegenerateInput(_))
        ));
        assert!(matches!(
            FlatBody::create_box_body(1.0, f32::NAN, FlatVector::ZERO, 1.0, false, 0.5, &l),
            Err(FlatError::DegenerateInput(_))
        ));
        assert!(matches!(
            FlatBody::create_box_body(1.0, 1.0, FlatVector::ZERO, f32::NAN, false, 0.5, &l),
            Err(FlatError::DegenerateInput(_))
        ));
        // Area is still checked first.
        assert!(matches!(
            FlatBody::create_box_body(0.001, 0.001, FlatVector::ZERO, f32::NAN, false, 0.5, &l),
            Err(FlatError::AreaTooSmall { .. })
        ));
    }

    #[test]
    fn test_infinite_inputs_hit_regular_bounds() {
        let l = limits();
        assert!(matches!(
            FlatBody::create_circle_body(f32::INFINITY, FlatVector::ZERO, 1.0, false, 0.5, &l),
            Err(FlatError::AreaTooLarge { .. })
        ));
        assert!(matches!(
            FlatBody::create_box_body(1.0, 1.0, FlatVector::ZERO, f32::INFINITY, false, 0.5, &l),
            Err(FlatError::DensityTooLarge { .. })
        ));
        assert!(matches!(
            FlatBody::create_box_body(1.0, 1.0, FlatVector::ZERO, f32::NEG_INFINITY, false, 0.5, &l),
            Err(FlatError::DensityTooSmall { .. })
        ));
    }

    #[test]
    fn test_move_by_and_move_to() {
        let mut b = FlatBody::create_circle_body(1.0, FlatVector::new(1.0, 2.0), 1.0, false, 0.5, &limits())
            .unwrap();
        b.move_by(FlatVector::ZERO);
        assert_eq!(b.position(), FlatVector::new(1.0, 2.0));
        b.move_by(FlatVector::new(0.5, -1.0));
        assert_eq!(b.position(), FlatVector::new(1.5, 1.0));

        let p = FlatVector::new(-4.0, 9.0);
        b.move_to(p);
        b.move_to(p);
        assert_eq!(b.position(), p);
        assert_eq!(b.mass(), PI);
    }
}
