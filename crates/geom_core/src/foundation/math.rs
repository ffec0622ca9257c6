//! Math utilities and types
//!
//! Provides the 3D vector type, scalar helpers and the error raised by
//! operations that have to divide by a length.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra::Vector3;
use thiserror::Error;

/// Lengths at or below this value are treated as zero
pub const EPSILON: f32 = 1e-5;

/// Input that cannot be normalized or projected onto
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The vector is (nearly) zero-length and has no direction
    #[error("cannot normalize a vector of length {length}")]
    DegenerateVector {
        /// Length of the rejected vector
        length: f32,
    },

    /// The plane normal is (nearly) zero-length
    #[error("degenerate plane normal: squared length {length_squared}")]
    DegeneratePlane {
        /// Squared length of the rejected normal
        length_squared: f32,
    },
}

/// 3D vector with `f32` components
///
/// Immutable value type: every operation returns a new vector. Backed by
/// [`nalgebra::Vector3`], which it converts to and from losslessly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3(Vector3<f32>);

impl Vec3 {
    /// Create a vector from its components
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The zero vector
    pub fn zeros() -> Self {
        Self(Vector3::zeros())
    }

    /// X component
    #[inline]
    pub fn x(&self) -> f32 {
        self.0.x
    }

    /// Y component
    #[inline]
    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Z component
    #[inline]
    pub fn z(&self) -> f32 {
        self.0.z
    }

    /// Multiply every component by `k`
    pub fn scale(&self, k: f32) -> Vec3 {
        Self(self.0 * k)
    }

    /// Dot product
    pub fn dot(&self, other: &Vec3) -> f32 {
        self.0.dot(&other.0)
    }

    /// Right-handed cross product
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Self(self.0.cross(&other.0))
    }

    /// Squared euclidean length
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length, zero only for the zero vector
    pub fn length(&self) -> f32 {
        utils::sqrt(self.length_squared())
    }

    /// Unit vector pointing the same way
    ///
    /// # Errors
    ///
    /// [`DomainError::DegenerateVector`] if the length is at or below
    /// [`EPSILON`].
    pub fn normalize(&self) -> Result<Vec3, DomainError> {
        match self.0.try_normalize(EPSILON) {
            Some(unit) => Ok(Self(unit)),
            None => {
                let length = self.length();
                log::debug!("rejecting normalize of {} (length {})", self, length);
                Err(DomainError::DegenerateVector { length })
            }
        }
    }

    /// Componentwise minimum
    pub fn component_min(&self, other: &Vec3) -> Vec3 {
        Self(self.0.inf(&other.0))
    }

    /// Componentwise maximum
    pub fn component_max(&self, other: &Vec3) -> Vec3 {
        Self(self.0.sup(&other.0))
    }

    /// Borrow the underlying nalgebra vector
    pub fn as_vector(&self) -> &Vector3<f32> {
        &self.0
    }
}

impl From<Vector3<f32>> for Vec3 {
    fn from(v: Vector3<f32>) -> Self {
        Self(v)
    }
}

impl From<Vec3> for Vector3<f32> {
    fn from(v: Vec3) -> Self {
        v.0
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f32) -> Vec3 {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Self(-self.0)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {} {}]", self.x(), self.y(), self.z())
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl RelativeEq for Vec3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl UlpsEq for Vec3 {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;
}

/// Scalar helpers
pub mod utils {
    /// Square of a scalar
    #[inline]
    pub fn sqr(x: f32) -> f32 {
        x * x
    }

    /// Square root of a scalar (NaN for negative input)
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }
}
