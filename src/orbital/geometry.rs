//! Plot annotations derived from a single element set.
//!
//! Every point goes through [`coes_to_state_vector`], so the annotations
//! line up exactly with the outline a renderer draws.

use nalgebra::Vector3;
use serde::Serialize;
use tracing::debug;

use crate::constants::{DISPLAY_LENGTH, MU_EARTH, OUTLINE_DENSITY, OUTLINE_SAMPLES};
use crate::error::InvalidOrbit;
use crate::orbital::elements::{coes_to_state_vector, OrbitalElements, StateVector};

/// One sampled point on the orbit outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutlinePoint {
    pub true_anom: f64,    // deg
    pub pos: Vector3<f64>, // km
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitGeometry {
    pub elements: OrbitalElements,
    pub mu: f64,
    /// State at the elements' own true anomaly.
    pub satellite: StateVector,
    /// State at nu = 0.
    pub perigee: StateVector,
    /// Position at nu = 180.
    pub apogee: Vector3<f64>,
    /// Position at nu = 90 and its negation.
    pub minor_axis: [Vector3<f64>; 2],
    /// Orbit normal scaled to `DISPLAY_LENGTH`.
    pub angular_momentum: Vector3<f64>,
    pub ascending_node: Vector3<f64>,
    pub descending_node: Vector3<f64>,
    pub outline: Vec<OutlinePoint>,
}

impl OrbitGeometry {
    pub fn compute(elements: &OrbitalElements) -> Result<Self, InvalidOrbit> {
        Self::compute_mu(elements, MU_EARTH)
    }

    pub fn compute_mu(elements: &OrbitalElements, mu: f64) -> Result<Self, InvalidOrbit> {
        elements.validate_mu(mu)?;
        let at = |ta: f64| elements.with_true_anomaly(ta).to_state_vector_mu(mu);

        let perigee = at(0.0)?;
        let apogee = at(180.0)?.pos;
        let p_90 = at(90.0)?.pos;
        let satellite = elements.to_state_vector_mu(mu)?;

        let h = perigee.angular_momentum();
        let angular_momentum = h / h.norm() * DISPLAY_LENGTH;
        if !angular_momentum.iter().all(|c| c.is_finite()) {
            return Err(InvalidOrbit::NonFiniteState {
                sma: elements.sma,
                mu,
            });
        }

        let ascending_node =
            point_on_equatorial_reference_at(elements.sma, elements.ecc, elements.raan, mu)?;
        let descending_node = point_on_equatorial_reference_at(
            elements.sma,
            elements.ecc,
            elements.raan + 180.0,
            mu,
        )?;

        let outline = outline_mu(elements, mu)?;

        debug!(
            sma = elements.sma,
            ecc = elements.ecc,
            inc = elements.inc,
            raan = elements.raan,
            argp = elements.argp,
            samples = outline.len(),
            "computed orbit geometry"
        );

        Ok(OrbitGeometry {
            elements: *elements,
            mu,
            satellite,
            perigee,
            apogee,
            minor_axis: [p_90, -p_90],
            angular_momentum,
            ascending_node,
            descending_node,
            outline,
        })
    }

    /// Apse line, perigee to apogee.
    pub fn apse_line(&self) -> [Vector3<f64>; 2] {
        [self.perigee.pos, self.apogee]
    }

    pub fn line_of_nodes(&self) -> [Vector3<f64>; 2] {
        [self.ascending_node, self.descending_node]
    }

    /// Half-width of a cube that holds the whole orbit.
    pub fn extent(&self) -> f64 {
        self.apogee.norm()
    }
}

/// Position on an equatorial orbit with perigee along +X, at `angle` degrees.
///
/// Same numbers as the general transform with inclination, RAAN and
/// argument of perigee all zero; the node annotations use it with
/// `angle = raan` and `raan + 180`.
pub fn point_on_equatorial_reference_at(
    sma: f64,
    ecc: f64,
    angle: f64,
    mu: f64,
) -> Result<Vector3<f64>, InvalidOrbit> {
    Ok(coes_to_state_vector(sma, ecc, angle, 0.0, 0.0, 0.0, mu)?.pos)
}

/// Outline samples at true anomaly `i / 100 * 360`, `i` in `0..360`.
pub fn outline(elements: &OrbitalElements) -> Result<Vec<OutlinePoint>, InvalidOrbit> {
    outline_mu(elements, MU_EARTH)
}

pub fn outline_mu(elements: &OrbitalElements, mu: f64) -> Result<Vec<OutlinePoint>, InvalidOrbit> {
    (0..OUTLINE_SAMPLES)
        .map(|i| {
            let true_anom = i as f64 / OUTLINE_DENSITY * 360.0;
            let sv = elements.with_true_anomaly(true_anom).to_state_vector_mu(mu)?;
            Ok(OutlinePoint { true_anom, pos: sv.pos })
        })
        .collect()
}
