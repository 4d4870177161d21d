//! End-to-end checks of the COE transform and derived geometry through the
//! public API.

use orbit_geometry::config::ScenarioConfig;
use orbit_geometry::constants::MU_EARTH;
use orbit_geometry::controls::ControlPanel;
use orbit_geometry::orbital::{
    coes_to_state_vector, point_on_equatorial_reference_at, rotation_x, rotation_z,
};
use orbit_geometry::scene::{OrbitScene, SceneOptions};
use orbit_geometry::{InvalidOrbit, OrbitGeometry, OrbitalElements};
use proptest::prelude::*;

fn rel_err(actual: f64, expected: f64) -> f64 {
    (actual - expected).abs() / expected.abs()
}

#[test]
fn worked_leo_example() {
    let sv = coes_to_state_vector(6778.0, 0.01, 0.0, 0.0, 0.0, 0.0, MU_EARTH).unwrap();
    assert!(rel_err(sv.pos.x, 6778.0 * 0.99) < 1e-12);
    assert!(sv.pos.y.abs() < 1e-9 && sv.pos.z.abs() < 1e-9);
    assert_eq!(sv.vel.x, 0.0);
    assert!(sv.vel.y > 0.0);
}

#[test]
fn parabolic_boundary_fails() {
    assert_eq!(
        coes_to_state_vector(7000.0, 1.0, 0.0, 0.0, 0.0, 0.0, MU_EARTH),
        Err(InvalidOrbit::Eccentricity(1.0))
    );
}

#[test]
fn true_anomaly_wraps_every_revolution() {
    let a = 8000.0;
    let base = coes_to_state_vector(a, 0.2, 90.0, 45.0, 30.0, 10.0, MU_EARTH).unwrap();
    let wrapped = coes_to_state_vector(a, 0.2, 450.0, 45.0, 30.0, 10.0, MU_EARTH).unwrap();
    assert!((base.pos - wrapped.pos).norm() < 1e-9);
    assert!((base.vel - wrapped.vel).norm() < 1e-12);
}

#[test]
fn node_line_passes_through_origin() {
    // Circular orbit: ascending and descending node points are antipodal.
    let asc = point_on_equatorial_reference_at(7000.0, 0.0, 120.0, MU_EARTH).unwrap();
    let desc = point_on_equatorial_reference_at(7000.0, 0.0, 300.0, MU_EARTH).unwrap();
    assert!((asc + desc).norm() < 1e-9);
}

#[test]
fn slider_panel_drives_geometry() {
    let panel = ControlPanel::new([30, 50, 0, 20, 10, 0]);
    let elements = panel.elements();
    let g = OrbitGeometry::compute(&elements).unwrap();
    assert!(rel_err(g.perigee.radius(), elements.perigee_radius()) < 1e-9);
    assert_eq!(g.outline.len(), 360);
}

#[test]
fn scene_bundles_geometry_axes_and_earth() {
    let elements = OrbitalElements::new(20_000.0, 0.3, 10.0, 63.4, 40.0, 270.0);
    let scene = OrbitScene::build(&elements, &SceneOptions::default()).unwrap();
    assert!(rel_err(scene.extent, 26_000.0) < 1e-9);
    assert_eq!(scene.axes.len(), 3);
    assert_eq!(scene.earth.resolution(), 10);
}

#[test]
fn bundled_molniya_scenario_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scenarios/molniya.yaml");
    let config = ScenarioConfig::load(path).unwrap();
    assert_eq!(config.elements.inc, 63.4);
    let scene = config.build_scene().unwrap();
    assert_eq!(scene.earth.resolution(), 16);
    assert!(rel_err(scene.extent, 26_600.0 * 1.74) < 1e-9);
}

proptest! {
    #[test]
    fn prop_circular_orbits_have_constant_radius(
        a in 6600.0f64..45_000.0,
        inc in 0.0f64..180.0,
        raan in 0.0f64..360.0,
        argp in 0.0f64..360.0,
    ) {
        let g = OrbitGeometry::compute(&OrbitalElements::new(a, 0.0, 0.0, inc, raan, argp)).unwrap();
        for p in &g.outline {
            prop_assert!(rel_err(p.pos.norm(), a) < 1e-9);
        }
    }

    #[test]
    fn prop_apsis_distances(
        a in 6600.0f64..45_000.0,
        e in 0.0f64..0.99,
        inc in 0.0f64..180.0,
        raan in 0.0f64..360.0,
        argp in 0.0f64..360.0,
    ) {
        let g = OrbitGeometry::compute(&OrbitalElements::new(a, e, 0.0, inc, raan, argp)).unwrap();
        prop_assert!(rel_err(g.perigee.radius(), a * (1.0 - e)) < 1e-6);
        prop_assert!(rel_err(g.apogee.norm(), a * (1.0 + e)) < 1e-6);
    }

    #[test]
    fn prop_momentum_orthogonal_to_outline(
        a in 6600.0f64..45_000.0,
        e in 0.0f64..0.9,
        inc in 0.0f64..180.0,
        raan in 0.0f64..360.0,
        argp in 0.0f64..360.0,
    ) {
        let g = OrbitGeometry::compute(&OrbitalElements::new(a, e, 0.0, inc, raan, argp)).unwrap();
        let h = g.perigee.angular_momentum();
        for p in &g.outline {
            prop_assert!(h.dot(&p.pos).abs() / (h.norm() * p.pos.norm()) < 1e-9);
        }
    }

    #[test]
    fn prop_rotations_are_proper(angle in 0.0f64..360.0) {
        for m in [rotation_x(angle), rotation_z(angle)] {
            prop_assert!((m.transpose() * m - nalgebra::Matrix3::identity()).norm() < 1e-12);
            prop_assert!((m.determinant() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn prop_invalid_eccentricity_always_fails(e in 1.0f64..10.0) {
        let result = coes_to_state_vector(7000.0, e, 0.0, 0.0, 0.0, 0.0, MU_EARTH);
        prop_assert_eq!(result, Err(InvalidOrbit::Eccentricity(e)));
    }
}
