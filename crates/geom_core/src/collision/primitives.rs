//! Primitive collision shapes
//!
//! Plain value types: a sphere and an axis-aligned bounding box stored as
//! center plus half-extents. Neither validates its input.

use std::fmt;

use crate::foundation::math::Vec3;

/// A sphere given by center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// The center position of the sphere
    pub center: Vec3,
    /// The radius of the sphere (expected non-negative)
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

impl fmt::Display for Sphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.center, self.radius)
    }
}

/// Axis-aligned bounding box stored as center and half-extents
///
/// The corners are derived on demand. A negative half-extent component
/// simply swaps which corner is the minimum on that axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec3,
    /// Half of the box size along each axis
    pub half_extent: Vec3,
}

impl Aabb {
    /// Create a box from its center and half-extents
    pub fn new(center: Vec3, half_extent: Vec3) -> Self {
        Self { center, half_extent }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        let (a, b) = self.corners();
        a.component_min(&b)
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        let (a, b) = self.corners();
        a.component_max(&b)
    }

    fn corners(&self) -> (Vec3, Vec3) {
        (self.center + self.half_extent, self.center - self.half_extent)
    }
}

impl fmt::Display for Aabb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.center, self.half_extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_display() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 0.0), 2.0);
        assert_eq!(sphere.to_string(), "[0 0 0] 2");

        let sphere = Sphere::new(Vec3::new(-1.0, -6.0, -7.0), 1.5);
        assert_eq!(sphere.to_string(), "[-1 -6 -7] 1.5");
    }

    #[test]
    fn test_aabb_corners() {
        let aabb = Aabb::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 3.0, 3.0));

        assert_eq!(aabb.min(), Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(aabb.max(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_aabb_negative_half_extent() {
        let aabb = Aabb::new(Vec3::zeros(), Vec3::new(-1.0, 2.0, -3.0));

        assert_eq!(aabb.min(), Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(aabb.max(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_aabb_flat_box() {
        let aabb = Aabb::new(Vec3::new(5.0, 5.0, 5.0), Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(aabb.min(), Vec3::new(5.0, 4.0, 5.0));
        assert_eq!(aabb.max(), Vec3::new(5.0, 6.0, 5.0));
        assert_eq!(aabb.to_string(), "[5 5 5] [0 1 0]");
    }
}
