pub mod elements;
pub mod geometry;
pub mod rotation;

pub use elements::{coes_to_state_vector, OrbitalElements, StateVector};
pub use geometry::{point_on_equatorial_reference_at, OrbitGeometry, OutlinePoint};
pub use rotation::{perifocal_to_eci, rotation_x, rotation_y, rotation_z};
