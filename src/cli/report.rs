use std::io::{self, Write};

use nalgebra::Vector3;

use crate::orbital::OrbitGeometry;

const RULE: &str = "  ──────────────────────────────────────────────────────────────────";

fn vec3(v: &Vector3<f64>) -> String {
    format!("[{:>11.3}, {:>11.3}, {:>11.3}]", v.x, v.y, v.z)
}

/// Human-readable geometry report.
pub fn write_report<W: Write>(w: &mut W, g: &OrbitGeometry) -> io::Result<()> {
    let e = &g.elements;

    writeln!(w)?;
    writeln!(w, "====================================================================")?;
    writeln!(w, "  ORBIT GEOMETRY")?;
    writeln!(w, "====================================================================")?;
    writeln!(w)?;
    writeln!(w, "  Elements")?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "  Semimajor axis: {:>10.1} km    Eccentricity: {:>8.4}", e.sma, e.ecc)?;
    writeln!(w, "  True anomaly:   {:>10.2} deg   Inclination:  {:>8.2} deg", e.true_anom, e.inc)?;
    writeln!(w, "  RAAN:           {:>10.2} deg   Arg perigee:  {:>8.2} deg", e.raan, e.argp)?;
    writeln!(w, "  Mu:             {:>10.1} km^3/s^2", g.mu)?;
    writeln!(w)?;

    writeln!(w, "  Shape")?;
    writeln!(w, "{RULE}")?;
    writeln!(
        w,
        "  Perigee radius: {:>10.1} km    Apogee radius: {:>9.1} km",
        g.perigee.radius(),
        g.apogee.norm()
    )?;
    writeln!(w, "  Period:         {:>10.1} s     ({:.1} min)", e.period_mu(g.mu), e.period_mu(g.mu) / 60.0)?;
    writeln!(w)?;

    writeln!(w, "  State (ECI)")?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "  r (km):    {}", vec3(&g.satellite.pos))?;
    writeln!(w, "  v (km/s):  {}", vec3(&g.satellite.vel))?;
    writeln!(w, "  |r| = {:.3} km   |v| = {:.4} km/s", g.satellite.radius(), g.satellite.speed())?;
    writeln!(w)?;

    writeln!(w, "  Annotations")?;
    writeln!(w, "{RULE}")?;
    writeln!(w, "  Perigee:         {}", vec3(&g.perigee.pos))?;
    writeln!(w, "  Apogee:          {}", vec3(&g.apogee))?;
    writeln!(w, "  Minor axis +:    {}", vec3(&g.minor_axis[0]))?;
    writeln!(w, "  Minor axis -:    {}", vec3(&g.minor_axis[1]))?;
    writeln!(w, "  Ang. momentum:   {}", vec3(&g.angular_momentum))?;
    writeln!(w, "  Ascending node:  {}", vec3(&g.ascending_node))?;
    writeln!(w, "  Descending node: {}", vec3(&g.descending_node))?;
    writeln!(w, "  Outline samples: {}   Plot extent: {:.1} km", g.outline.len(), g.extent())?;
    writeln!(w, "====================================================================")?;
    writeln!(w)?;
    Ok(())
}
