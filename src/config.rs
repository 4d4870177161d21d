//! YAML scenario files.
//!
//! ```yaml
//! elements: { sma: 7000, ecc: 0.1, true_anom: 45, inc: 28.5, raan: 30, argp: 10 }
//! mu: 398600
//! scene:
//!   earth_resolution: 10
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::{MAX_EARTH_RESOLUTION, MU_EARTH};
use crate::error::{Error, Result};
use crate::orbital::OrbitalElements;
use crate::scene::{OrbitScene, SceneOptions};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub elements: OrbitalElements,

    /// Gravitational parameter, km^3/s^2.
    #[serde(default = "default_mu")]
    pub mu: f64,

    #[serde(default)]
    pub scene: SceneOptions,
}

fn default_mu() -> f64 {
    MU_EARTH
}

impl ScenarioConfig {
    pub fn new(elements: OrbitalElements) -> Self {
        Self {
            elements,
            mu: MU_EARTH,
            scene: SceneOptions::default(),
        }
    }

    /// Load and validate a scenario file.
    ///
    /// # Errors
    ///
    /// I/O failure, malformed YAML, or elements outside the elliptical domain.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!(path = %path.display(), "loaded scenario");
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if let Err(e) = self.elements.validate_mu(self.mu) {
            warn!(error = %e, "rejected scenario elements");
            return Err(e.into());
        }
        if !(2..=MAX_EARTH_RESOLUTION).contains(&self.scene.earth_resolution) {
            return Err(Error::config(format!(
                "scene.earth_resolution must be in 2..={MAX_EARTH_RESOLUTION}, got {}",
                self.scene.earth_resolution
            )));
        }
        Ok(())
    }

    pub fn build_scene(&self) -> Result<OrbitScene> {
        OrbitScene::build_mu(&self.elements, self.mu, &self.scene)
    }
}
