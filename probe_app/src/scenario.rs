//! Scenario configuration
//!
//! Describes one plane, one box and any number of spheres using plain
//! arrays so the file stays readable in both TOML and RON.

use geom_core::config::Config;
use geom_core::prelude::{Aabb, Plane, Sphere, Vec3};
use serde::{Deserialize, Serialize};

/// Plane entry: `dot(normal, p) == d`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneConfig {
    /// Plane normal, need not be unit length
    pub normal: [f32; 3],
    /// Signed offset along the normal
    pub d: f32,
}

impl PlaneConfig {
    /// Build the plane
    pub fn to_plane(&self) -> Plane {
        Plane::new(Vec3::from(self.normal), self.d)
    }
}

/// Sphere entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereConfig {
    /// Sphere center
    pub center: [f32; 3],
    /// Sphere radius
    pub radius: f32,
}

impl SphereConfig {
    /// Build the sphere
    pub fn to_sphere(&self) -> Sphere {
        Sphere::new(Vec3::from(self.center), self.radius)
    }
}

/// Box entry, center plus half-extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AabbConfig {
    /// Box center
    pub center: [f32; 3],
    /// Half-extents along each axis
    pub half_extent: [f32; 3],
}

impl AabbConfig {
    /// Build the box
    pub fn to_aabb(&self) -> Aabb {
        Aabb::new(Vec3::from(self.center), Vec3::from(self.half_extent))
    }
}

/// Complete probe scenario
///
/// Missing sections fall back to the default scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// The plane every sphere is tested against
    pub plane: PlaneConfig,
    /// Box reported alongside the spheres
    pub aabb: AabbConfig,
    /// Spheres to classify
    pub spheres: Vec<SphereConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            plane: PlaneConfig {
                normal: [2.0, 10.0, 2.0],
                d: 4.0,
            },
            aabb: AabbConfig {
                center: [0.0, 0.0, 0.0],
                half_extent: [3.0, 3.0, 3.0],
            },
            spheres: vec![
                SphereConfig {
                    center: [0.0, 0.0, 0.0],
                    radius: 2.0,
                },
                SphereConfig {
                    center: [-1.0, -6.0, -7.0],
                    radius: 1.0,
                },
                SphereConfig {
                    center: [4.0, 20.0, 4.0],
                    radius: 1.0,
                },
            ],
        }
    }
}

impl Config for ScenarioConfig {}
