//! Infinite plane in `dot(normal, p) == d` form
//!
//! The normal does not have to be unit length. Operations that depend on
//! its length divide by it and therefore reject a degenerate normal.

use std::fmt;

use crate::foundation::math::{DomainError, Vec3, EPSILON};

/// A plane: all points `p` with `normal.dot(p) == d`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Plane normal, not necessarily unit length
    pub normal: Vec3,
    /// Signed offset along the normal, in normal-length units
    pub d: f32,
}

impl Plane {
    /// Create a plane from a normal and signed offset
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    /// Rescale to Hessian normal form (unit normal)
    ///
    /// Normal and offset are divided by the same length, so the set of
    /// points on the plane is unchanged.
    ///
    /// # Errors
    ///
    /// [`DomainError::DegeneratePlane`] if the normal length is at or
    /// below [`EPSILON`].
    pub fn normalize(&self) -> Result<Plane, DomainError> {
        let length = self.normal.length();
        if length <= EPSILON {
            log::debug!("rejecting normalize of plane {}", self);
            return Err(DomainError::DegeneratePlane {
                length_squared: self.normal.length_squared(),
            });
        }

        let inv = 1.0 / length;
        Ok(Plane::new(self.normal * inv, self.d * inv))
    }

    /// Orthogonal projection of `point` onto the plane
    ///
    /// Divides by the squared normal length, so the plane does not need to
    /// be normalized first.
    ///
    /// # Errors
    ///
    /// [`DomainError::DegeneratePlane`] if the squared normal length is at
    /// or below [`EPSILON`].
    pub fn closest_point(&self, point: Vec3) -> Result<Vec3, DomainError> {
        let length_squared = self.normal.length_squared();
        if length_squared <= EPSILON {
            log::debug!("rejecting closest point on plane {}", self);
            return Err(DomainError::DegeneratePlane { length_squared });
        }

        let t = self.signed_distance(point) / length_squared;
        Ok(point - self.normal * t)
    }

    /// `dot(normal, point) - d`
    ///
    /// Positive on the side the normal points toward. Only a true distance
    /// once the plane is normalized.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) - self.d
    }
}

/// Free-function form of [`Plane::normalize`]
pub fn normalize_plane(plane: &Plane) -> Result<Plane, DomainError> {
    plane.normalize()
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.normal, self.d)
    }
}
