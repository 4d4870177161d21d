use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{MU_EARTH, R_EARTH};
use crate::error::InvalidOrbit;
use crate::orbital::rotation::perifocal_to_eci;

/// Classical orbital elements. Angles in degrees, taken mod 360.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrbitalElements {
    pub sma: f64,       // semimajor axis, km
    pub ecc: f64,       // eccentricity, [0, 1)
    pub true_anom: f64, // true anomaly, deg
    pub inc: f64,       // inclination, deg [0, 180]
    pub raan: f64,      // right ascension of ascending node, deg
    pub argp: f64,      // argument of perigee, deg
}

/// ECI position and velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateVector {
    pub pos: Vector3<f64>, // km
    pub vel: Vector3<f64>, // km/s
}

impl StateVector {
    /// Specific angular momentum r x v, km^2/s.
    pub fn angular_momentum(&self) -> Vector3<f64> {
        self.pos.cross(&self.vel)
    }

    pub fn radius(&self) -> f64 {
        self.pos.norm()
    }

    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }

    pub fn is_finite(&self) -> bool {
        self.pos.iter().chain(self.vel.iter()).all(|c| c.is_finite())
    }
}

/// COE to ECI state vector.
///
/// Elliptical orbits only: `ecc` in `[0, 1)`, `sma > 0`, `mu > 0`.
pub fn coes_to_state_vector(
    sma: f64,
    ecc: f64,
    true_anom: f64,
    inc: f64,
    raan: f64,
    argp: f64,
    mu: f64,
) -> Result<StateVector, InvalidOrbit> {
    validate(sma, ecc, mu)?;

    let nu = true_anom.to_radians();
    let (sin_nu, cos_nu) = nu.sin_cos();

    let rp = sma * (1.0 - ecc * ecc) / (1.0 + ecc);
    let h = (rp * mu * (1.0 + ecc)).sqrt();

    // Perifocal frame (PQW)
    let r_pqw = Vector3::new(cos_nu, sin_nu, 0.0) * (h * h / mu / (1.0 + ecc * cos_nu));
    let v_pqw = Vector3::new(-sin_nu, ecc + cos_nu, 0.0) * (mu / h);

    let q = perifocal_to_eci(inc, raan, argp);
    let state = StateVector {
        pos: q * r_pqw,
        vel: q * v_pqw,
    };
    if !state.is_finite() {
        return Err(InvalidOrbit::NonFiniteState { sma, mu });
    }
    Ok(state)
}

fn validate(sma: f64, ecc: f64, mu: f64) -> Result<(), InvalidOrbit> {
    if !sma.is_finite() || sma <= 0.0 {
        return Err(InvalidOrbit::SemimajorAxis(sma));
    }
    if !(0.0..1.0).contains(&ecc) {
        return Err(InvalidOrbit::Eccentricity(ecc));
    }
    if !mu.is_finite() || mu <= 0.0 {
        return Err(InvalidOrbit::GravitationalParameter(mu));
    }
    // h^2 reaches up to 2 * sma * mu before the (1 + ecc) factor cancels
    if !(2.0 * sma * mu).is_finite() {
        return Err(InvalidOrbit::NonFiniteState { sma, mu });
    }
    Ok(())
}

impl OrbitalElements {
    pub fn new(sma: f64, ecc: f64, true_anom: f64, inc: f64, raan: f64, argp: f64) -> Self {
        OrbitalElements {
            sma,
            ecc,
            true_anom,
            inc,
            raan,
            argp,
        }
    }

    /// Circular orbit at `altitude` km above the equatorial radius.
    pub fn circular(altitude: f64, inc: f64) -> Self {
        Self::new(R_EARTH + altitude, 0.0, 0.0, inc, 0.0, 0.0)
    }

    /// Same orbit, different position along it.
    pub fn with_true_anomaly(self, true_anom: f64) -> Self {
        OrbitalElements { true_anom, ..self }
    }

    pub fn validate(&self) -> Result<(), InvalidOrbit> {
        self.validate_mu(MU_EARTH)
    }

    pub fn validate_mu(&self, mu: f64) -> Result<(), InvalidOrbit> {
        validate(self.sma, self.ecc, mu)
    }

    /// Convert to ECI state vector around Earth.
    pub fn to_state_vector(&self) -> Result<StateVector, InvalidOrbit> {
        self.to_state_vector_mu(MU_EARTH)
    }

    /// Convert with explicit gravitational parameter.
    pub fn to_state_vector_mu(&self, mu: f64) -> Result<StateVector, InvalidOrbit> {
        coes_to_state_vector(
            self.sma,
            self.ecc,
            self.true_anom,
            self.inc,
            self.raan,
            self.argp,
            mu,
        )
    }

    /// Recover elements from an ECI state vector around Earth.
    pub fn from_state_vector(pos: &Vector3<f64>, vel: &Vector3<f64>) -> Self {
        Self::from_state_vector_mu(pos, vel, MU_EARTH)
    }

    /// Convert with explicit gravitational parameter.
    ///
    /// Angles come back in `[0, 360)`. Circular orbits report `argp = 0` and
    /// measure true anomaly from the ascending node (from +X when also
    /// equatorial). Unbound states yield `ecc >= 1` and a negative `sma`,
    /// which `validate` rejects.
    pub fn from_state_vector_mu(pos: &Vector3<f64>, vel: &Vector3<f64>, mu: f64) -> Self {
        const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
        const EPS: f64 = 1e-10;

        let r = pos.norm();
        let v = vel.norm();

        // Angular momentum
        let h = pos.cross(vel);
        let h_mag = h.norm();

        // Node vector
        let n = Vector3::new(-h.y, h.x, 0.0);
        let n_mag = n.norm();

        // Eccentricity vector
        let e_vec = ((v * v - mu / r) * pos - pos.dot(vel) * vel) / mu;
        let ecc = e_vec.norm();

        let energy = 0.5 * v * v - mu / r;
        let sma = -mu / (2.0 * energy);

        let inc = (h.z / h_mag).clamp(-1.0, 1.0).acos();

        let raan = if n_mag > EPS {
            let w = (n.x / n_mag).clamp(-1.0, 1.0).acos();
            if n.y < 0.0 { TWO_PI - w } else { w }
        } else {
            0.0
        };

        let argp = if n_mag > EPS && ecc > EPS {
            let w = (n.dot(&e_vec) / (n_mag * ecc)).clamp(-1.0, 1.0).acos();
            if e_vec.z < 0.0 { TWO_PI - w } else { w }
        } else if ecc > EPS {
            // Equatorial: longitude of perigee
            let w = (e_vec.x / ecc).clamp(-1.0, 1.0).acos();
            if e_vec.y < 0.0 { TWO_PI - w } else { w }
        } else {
            0.0
        };

        let true_anom = if ecc > EPS {
            let nu = (e_vec.dot(pos) / (ecc * r)).clamp(-1.0, 1.0).acos();
            if pos.dot(vel) < 0.0 { TWO_PI - nu } else { nu }
        } else if n_mag > EPS {
            // Argument of latitude
            let u = (n.dot(pos) / (n_mag * r)).clamp(-1.0, 1.0).acos();
            if pos.z < 0.0 { TWO_PI - u } else { u }
        } else {
            // True longitude
            let l = (pos.x / r).clamp(-1.0, 1.0).acos();
            if pos.y < 0.0 { TWO_PI - l } else { l }
        };

        OrbitalElements {
            sma,
            ecc,
            true_anom: true_anom.to_degrees(),
            inc: inc.to_degrees(),
            raan: raan.to_degrees(),
            argp: argp.to_degrees(),
        }
    }

    /// a(1 - e^2), km.
    pub fn semi_latus_rectum(&self) -> f64 {
        self.sma * (1.0 - self.ecc * self.ecc)
    }

    pub fn perigee_radius(&self) -> f64 {
        self.sma * (1.0 - self.ecc)
    }

    pub fn apogee_radius(&self) -> f64 {
        self.sma * (1.0 + self.ecc)
    }

    /// Orbital period (s).
    pub fn period(&self) -> f64 {
        self.period_mu(MU_EARTH)
    }

    pub fn period_mu(&self, mu: f64) -> f64 {
        2.0 * std::f64::consts::PI * (self.sma.powi(3) / mu).sqrt()
    }
}
