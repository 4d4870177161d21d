//! Slider positions to orbital elements.
//!
//! A host UI owns six integer controls in `0..=100`. The panel is a plain
//! value: each change produces a new panel and a fresh [`OrbitalElements`],
//! nothing is mutated in place.

use crate::constants::R_EARTH;
use crate::orbital::OrbitalElements;

pub const SLIDER_MAX: u8 = 100;

/// Lowest selectable orbit altitude, km.
const MIN_ALTITUDE: f64 = 400.0;
/// Semimajor axis range covered by a full slider sweep, km.
const SMA_SPAN: f64 = 10_000.0;
const ECC_MAX: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    SemimajorAxis,
    Eccentricity,
    TrueAnomaly,
    Inclination,
    RightAscension,
    ArgumentOfPerigee,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::SemimajorAxis,
        Parameter::Eccentricity,
        Parameter::TrueAnomaly,
        Parameter::Inclination,
        Parameter::RightAscension,
        Parameter::ArgumentOfPerigee,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Parameter::SemimajorAxis => "Semimajor Axis",
            Parameter::Eccentricity => "Eccentricity",
            Parameter::TrueAnomaly => "True Anomaly",
            Parameter::Inclination => "Inclination",
            Parameter::RightAscension => "Right Ascension",
            Parameter::ArgumentOfPerigee => "Argument of Perigee",
        }
    }

    /// Physical value for a slider position.
    pub fn value_at(self, position: u8) -> f64 {
        let x = f64::from(position.min(SLIDER_MAX));
        let frac = x / f64::from(SLIDER_MAX);
        match self {
            Parameter::SemimajorAxis => R_EARTH + MIN_ALTITUDE + x * SMA_SPAN / f64::from(SLIDER_MAX),
            Parameter::Eccentricity => frac * ECC_MAX,
            _ => frac * 360.0,
        }
    }

    fn format(self, value: f64) -> String {
        match self {
            Parameter::SemimajorAxis => format!("{} : {value:.1}", self.label()),
            _ => format!("{} : {value:.2}", self.label()),
        }
    }
}

/// Positions of the six sliders, in [`Parameter::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlPanel {
    positions: [u8; 6],
}

impl ControlPanel {
    /// Positions above `SLIDER_MAX` are clamped.
    pub fn new(positions: [u8; 6]) -> Self {
        Self {
            positions: positions.map(|p| p.min(SLIDER_MAX)),
        }
    }

    pub fn positions(&self) -> [u8; 6] {
        self.positions
    }

    pub fn with_position(self, parameter: Parameter, position: u8) -> Self {
        let mut positions = self.positions;
        positions[parameter as usize] = position.min(SLIDER_MAX);
        Self { positions }
    }

    pub fn value(&self, parameter: Parameter) -> f64 {
        parameter.value_at(self.positions[parameter as usize])
    }

    pub fn elements(&self) -> OrbitalElements {
        OrbitalElements::new(
            self.value(Parameter::SemimajorAxis),
            self.value(Parameter::Eccentricity),
            self.value(Parameter::TrueAnomaly),
            self.value(Parameter::Inclination),
            self.value(Parameter::RightAscension),
            self.value(Parameter::ArgumentOfPerigee),
        )
    }

    /// `"<Name> : <value>"` for each slider.
    pub fn labels(&self) -> Vec<String> {
        Parameter::ALL
            .iter()
            .map(|&p| p.format(self.value(p)))
            .collect()
    }
}
