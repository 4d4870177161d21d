//! Classical orbital elements to ECI state vectors, plus the annotation
//! geometry (outline, apse line, nodes, angular momentum) for 3D orbit plots.

pub mod cli;
pub mod config;
pub mod constants;
pub mod controls;
pub mod error;
pub mod io;
pub mod orbital;
pub mod scene;

pub use error::{Error, InvalidOrbit, Result};
pub use orbital::{coes_to_state_vector, OrbitGeometry, OrbitalElements, StateVector};
