//! Everything a renderer needs to draw one orbit, as plain numbers.

pub mod earth;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EARTH_RESOLUTION, DISPLAY_LENGTH, MU_EARTH, R_EARTH};
use crate::error::Result;
use crate::orbital::{OrbitGeometry, OrbitalElements};

pub use earth::{earth_mesh, EarthMesh};

/// Straight line between two points, km.
pub type Segment = [Vector3<f64>; 2];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneOptions {
    pub earth_radius: f64,
    pub earth_resolution: usize,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            earth_radius: R_EARTH,
            earth_resolution: DEFAULT_EARTH_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitScene {
    pub geometry: OrbitGeometry,
    pub axes: [Segment; 3],
    pub earth: EarthMesh,
    pub extent: f64,
}

impl OrbitScene {
    pub fn build(elements: &OrbitalElements, options: &SceneOptions) -> Result<Self> {
        Self::build_mu(elements, MU_EARTH, options)
    }

    pub fn build_mu(elements: &OrbitalElements, mu: f64, options: &SceneOptions) -> Result<Self> {
        let geometry = OrbitGeometry::compute_mu(elements, mu)?;
        let earth = earth_mesh(options.earth_radius, options.earth_resolution)?;
        let extent = geometry.extent();
        Ok(OrbitScene {
            geometry,
            axes: reference_axes(),
            earth,
            extent,
        })
    }
}

/// X, Y and Z axes through the origin, each `DISPLAY_LENGTH` either side.
pub fn reference_axes() -> [Segment; 3] {
    [Vector3::x(), Vector3::y(), Vector3::z()].map(|axis| {
        [-axis * DISPLAY_LENGTH, axis * DISPLAY_LENGTH]
    })
}
