use nalgebra::Matrix3;

/// Frame rotation about Z by `angle` degrees.
#[rustfmt::skip]
pub fn rotation_z(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.to_radians().sin_cos();
    Matrix3::new(
        c, s, 0.0,
        -s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Frame rotation about X by `angle` degrees.
#[rustfmt::skip]
pub fn rotation_x(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.to_radians().sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, s,
        0.0, -s, c,
    )
}

/// Frame rotation about Y by `angle` degrees.
#[rustfmt::skip]
pub fn rotation_y(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.to_radians().sin_cos();
    Matrix3::new(
        c, 0.0, -s,
        0.0, 1.0, 0.0,
        s, 0.0, c,
    )
}

/// Perifocal (PQW) to ECI rotation.
///
/// `Rz(argp) * Rx(inc) * Rz(raan)` takes ECI into the perifocal frame; the
/// matrices are orthonormal so its transpose is the inverse.
pub fn perifocal_to_eci(inc: f64, raan: f64, argp: f64) -> Matrix3<f64> {
    (rotation_z(argp) * rotation_x(inc) * rotation_z(raan)).transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;
    use proptest::prelude::*;

    fn assert_orthonormal(m: &Matrix3<f64>) {
        let should_be_identity = m.transpose() * m;
        assert!(
            (should_be_identity - Matrix3::identity()).norm() < 1e-12,
            "M^T M != I: {}",
            should_be_identity
        );
        assert!((m.determinant() - 1.0).abs() < 1e-12, "det = {}", m.determinant());
    }

    #[test]
    fn zero_angle_is_identity() {
        assert_eq!(rotation_x(0.0), Matrix3::identity());
        assert_eq!(rotation_y(0.0), Matrix3::identity());
        assert_eq!(rotation_z(0.0), Matrix3::identity());
    }

    #[test]
    fn rotation_z_layout() {
        let m = rotation_z(30.0);
        let (s, c) = 30.0_f64.to_radians().sin_cos();
        assert!((m[(0, 1)] - s).abs() < 1e-15);
        assert!((m[(1, 0)] + s).abs() < 1e-15);
        assert!((m[(1, 1)] - c).abs() < 1e-15);
        assert_eq!(m[(2, 2)], 1.0);
    }

    #[test]
    fn rotation_x_layout() {
        let m = rotation_x(30.0);
        let s = 30.0_f64.to_radians().sin();
        assert!((m[(1, 2)] - s).abs() < 1e-15);
        assert!((m[(2, 1)] + s).abs() < 1e-15);
        assert_eq!(m[(0, 0)], 1.0);
    }

    #[test]
    fn quarter_turn_about_z_maps_x_into_minus_y() {
        // Frame rotation: the X axis expressed in a frame turned +90 deg.
        let v = rotation_z(90.0) * Vector3::x();
        assert!((v - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn perifocal_to_eci_identity_for_equatorial() {
        let q = perifocal_to_eci(0.0, 0.0, 0.0);
        assert!((q - Matrix3::identity()).norm() < 1e-15);
    }

    #[test]
    fn perifocal_z_maps_to_orbit_normal() {
        // inc = 90, raan = 0: orbit normal points along -Y
        let w = perifocal_to_eci(90.0, 0.0, 0.0) * Vector3::z();
        assert!((w - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_rotations_are_orthonormal(angle in 0.0f64..360.0) {
            assert_orthonormal(&rotation_x(angle));
            assert_orthonormal(&rotation_y(angle));
            assert_orthonormal(&rotation_z(angle));
        }

        #[test]
        fn prop_transpose_is_inverse(angle in 0.0f64..360.0) {
            let m = rotation_z(angle);
            let inv = m.try_inverse().unwrap();
            prop_assert!((inv - m.transpose()).norm() < 1e-12);
            prop_assert!((rotation_z(-angle) - m.transpose()).norm() < 1e-12);
        }

        #[test]
        fn prop_perifocal_to_eci_is_orthonormal(
            inc in 0.0f64..180.0,
            raan in 0.0f64..360.0,
            argp in 0.0f64..360.0,
        ) {
            assert_orthonormal(&perifocal_to_eci(inc, raan, argp));
        }
    }
}
