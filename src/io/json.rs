use std::io::Write;
use std::path::Path;

use nalgebra::Vector3;
use serde::Serialize;

use crate::error::Result;
use crate::orbital::{OrbitGeometry, OrbitalElements, StateVector};

/// Summary of one orbit's geometry, without the outline samples.
#[derive(Debug, Clone, Serialize)]
pub struct GeometrySummary {
    pub elements: OrbitalElements,
    pub mu: f64,
    pub perigee_radius_km: f64,
    pub apogee_radius_km: f64,
    pub period_s: f64,
    pub satellite: StateVector,
    pub perigee: StateVector,
    pub apogee: Vector3<f64>,
    pub minor_axis: [Vector3<f64>; 2],
    pub angular_momentum: Vector3<f64>,
    pub ascending_node: Vector3<f64>,
    pub descending_node: Vector3<f64>,
    pub outline_samples: usize,
}

impl GeometrySummary {
    pub fn from_geometry(g: &OrbitGeometry) -> Self {
        GeometrySummary {
            elements: g.elements,
            mu: g.mu,
            perigee_radius_km: g.perigee.radius(),
            apogee_radius_km: g.apogee.norm(),
            period_s: g.elements.period_mu(g.mu),
            satellite: g.satellite,
            perigee: g.perigee,
            apogee: g.apogee,
            minor_axis: g.minor_axis,
            angular_momentum: g.angular_momentum,
            ascending_node: g.ascending_node,
            descending_node: g.descending_node,
            outline_samples: g.outline.len(),
        }
    }
}

/// Write the geometry summary as pretty JSON.
pub fn write_geometry<W: Write>(writer: &mut W, geometry: &OrbitGeometry) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, &GeometrySummary::from_geometry(geometry))?;
    writeln!(writer)?;
    Ok(())
}

/// Write the geometry summary JSON to a file.
pub fn write_geometry_file<P: AsRef<Path>>(path: P, geometry: &OrbitGeometry) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_geometry(&mut file, geometry)
}
