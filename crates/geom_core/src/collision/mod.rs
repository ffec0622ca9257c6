//! Geometric primitives and the sphere/plane predicate
//!
//! # Module Organization
//!
//! - [`primitives`] - Value types for spheres and axis-aligned boxes
//! - [`plane`] - Plane representation, normalization and projection
//! - [`classify`] - Sphere versus plane side test
//!
//! Every operation is a pure function of its arguments.

pub mod primitives;
pub mod plane;
pub mod classify;

// Re-export commonly used types
pub use primitives::{Aabb, Sphere};
pub use plane::{normalize_plane, Plane};
pub use classify::{classify, PlaneSide};
