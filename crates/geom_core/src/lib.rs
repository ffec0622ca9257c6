//! # Geom Core
//!
//! A small 3D vector-math kernel with sphere, box and plane primitives and a
//! sphere/plane side test.
//!
//! ## Features
//!
//! - **Vectors**: `Vec3` value type backed by nalgebra
//! - **Primitives**: `Sphere`, `Aabb` (center + half-extents) and `Plane`
//! - **Plane operations**: Hessian normalization and closest-point projection
//! - **Classification**: Back / Front / Intersecting for a sphere and a plane
//!
//! ## Quick Start
//!
//! ```rust
//! use geom_core::prelude::*;
//!
//! let plane = Plane::new(Vec3::new(2.0, 10.0, 2.0), 4.0);
//! let sphere = Sphere::new(Vec3::new(-1.0, -6.0, -7.0), 1.0);
//!
//! assert_eq!(classify(&plane, &sphere), PlaneSide::Back);
//!
//! let unit = plane.normalize()?;
//! assert_eq!(classify(&unit, &sphere), PlaneSide::Back);
//! # Ok::<(), DomainError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod collision;
pub mod config;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        collision::{classify, normalize_plane, Aabb, Plane, PlaneSide, Sphere},
        config::{Config, ConfigError},
        foundation::math::{DomainError, Vec3, EPSILON},
    };
}
