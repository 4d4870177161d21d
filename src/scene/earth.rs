use nalgebra::Vector3;
use serde::Serialize;

use crate::constants::MAX_EARTH_RESOLUTION;
use crate::error::{Error, Result};

/// Sphere surface sampled on a `resolution x resolution` (u, v) grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EarthMesh {
    pub radius: f64, // km
    /// `points[i][j]` is at azimuth `u_i` and polar angle `v_j`.
    pub points: Vec<Vec<Vector3<f64>>>,
}

impl EarthMesh {
    pub fn resolution(&self) -> usize {
        self.points.len()
    }
}

/// Evenly spaced samples over `[start, end]`, endpoints included.
fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = (end - start) / (n - 1) as f64;
    (0..n).map(move |i| start + step * i as f64)
}

pub fn earth_mesh(radius: f64, resolution: usize) -> Result<EarthMesh> {
    if !(2..=MAX_EARTH_RESOLUTION).contains(&resolution) {
        return Err(Error::config(format!(
            "earth mesh resolution must be in 2..={MAX_EARTH_RESOLUTION}, got {resolution}"
        )));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::config(format!("earth radius must be positive, got {radius}")));
    }

    let u: Vec<f64> = linspace(0.0, 2.0 * std::f64::consts::PI, resolution).collect();
    let v: Vec<f64> = linspace(0.0, std::f64::consts::PI, resolution).collect();

    let points = u
        .iter()
        .map(|&u| {
            let (sin_u, cos_u) = u.sin_cos();
            v.iter()
                .map(|&v| {
                    let (sin_v, cos_v) = v.sin_cos();
                    Vector3::new(radius * cos_u * sin_v, radius * sin_u * sin_v, radius * cos_v)
                })
                .collect()
        })
        .collect();

    Ok(EarthMesh { radius, points })
}
