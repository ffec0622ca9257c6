//! Sphere versus plane classification

use std::fmt;

use super::plane::Plane;
use super::primitives::Sphere;

/// Where a sphere lies relative to a plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Entirely on the side the normal points away from
    Back,
    /// Entirely on the side the normal points toward
    Front,
    /// Straddling or touching the plane
    Intersecting,
}

impl fmt::Display for PlaneSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlaneSide::Back => "Back",
            PlaneSide::Front => "Front",
            PlaneSide::Intersecting => "Intersecting",
        };
        f.write_str(label)
    }
}

/// Classify `sphere` against `plane`
///
/// The radius is scaled by the normal length so the test also holds for an
/// unnormalized plane. Comparisons are exact: a tangent sphere is
/// [`PlaneSide::Intersecting`]. A zero normal is accepted and compares the
/// offset against zero.
pub fn classify(plane: &Plane, sphere: &Sphere) -> PlaneSide {
    let dist = plane.normal.dot(&sphere.center);
    let r = sphere.radius * plane.normal.length();

    let side = if dist + r < plane.d {
        PlaneSide::Back
    } else if dist - r > plane.d {
        PlaneSide::Front
    } else {
        PlaneSide::Intersecting
    };

    log::trace!("sphere {} vs plane {}: {}", sphere, plane, side);
    side
}

impl Sphere {
    /// Classify this sphere against `plane`, see [`classify`]
    pub fn classify(&self, plane: &Plane) -> PlaneSide {
        classify(plane, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    fn plane() -> Plane {
        Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0)
    }

    #[test]
    fn test_unit_plane_sides() {
        let plane = plane();

        let above = Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0);
        let below = Sphere::new(Vec3::new(0.0, -5.0, 0.0), 1.0);
        let across = Sphere::new(Vec3::new(3.0, 0.5, -2.0), 1.0);

        assert_eq!(classify(&plane, &above), PlaneSide::Front);
        assert_eq!(classify(&plane, &below), PlaneSide::Back);
        assert_eq!(classify(&plane, &across), PlaneSide::Intersecting);
    }

    #[test]
    fn test_tangent_sphere_intersects() {
        let plane = plane();

        let touching_front = Sphere::new(Vec3::new(0.0, 1.0, 0.0), 1.0);
        let touching_back = Sphere::new(Vec3::new(0.0, -2.0, 0.0), 2.0);

        assert_eq!(classify(&plane, &touching_front), PlaneSide::Intersecting);
        assert_eq!(classify(&plane, &touching_back), PlaneSide::Intersecting);
    }

    #[test]
    fn test_radius_scaled_by_normal_length() {
        // y == 1 written with a normal of length 4
        let scaled = Plane::new(Vec3::new(0.0, 4.0, 0.0), 4.0);
        let unit = Plane::new(Vec3::new(0.0, 1.0, 0.0), 1.0);

        for y in [-3.0, -0.5, 0.0, 0.5, 1.0, 2.5, 4.0] {
            let sphere = Sphere::new(Vec3::new(0.0, y, 0.0), 1.25);
            assert_eq!(classify(&scaled, &sphere), classify(&unit, &sphere), "y = {}", y);
        }
    }

    #[test]
    fn test_zero_normal_does_not_fail() {
        let sphere = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 10.0);

        let behind = Plane::new(Vec3::zeros(), 1.0);
        let ahead = Plane::new(Vec3::zeros(), -1.0);
        let on = Plane::new(Vec3::zeros(), 0.0);

        assert_eq!(classify(&behind, &sphere), PlaneSide::Back);
        assert_eq!(classify(&ahead, &sphere), PlaneSide::Front);
        assert_eq!(classify(&on, &sphere), PlaneSide::Intersecting);
    }

    #[test]
    fn test_sphere_method_matches_free_function() {
        let plane = Plane::new(Vec3::new(2.0, 10.0, 2.0), 4.0);
        let sphere = Sphere::new(Vec3::new(-1.0, -6.0, -7.0), 1.0);

        assert_eq!(sphere.classify(&plane), classify(&plane, &sphere));
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(PlaneSide::Back.to_string(), "Back");
        assert_eq!(PlaneSide::Front.to_string(), "Front");
        assert_eq!(PlaneSide::Intersecting.to_string(), "Intersecting");
    }
}
