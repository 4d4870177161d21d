use std::io::{self, Write};
use std::path::Path;

use crate::orbital::OrbitGeometry;

/// Write the orbit outline in CSV format.
///
/// Columns: index, true_anom_deg, x_km, y_km, z_km
pub fn write_outline<W: Write>(writer: &mut W, geometry: &OrbitGeometry) -> io::Result<()> {
    writeln!(writer, "index,true_anom_deg,x_km,y_km,z_km")?;

    for (i, p) in geometry.outline.iter().enumerate() {
        writeln!(
            writer,
            "{},{:.2},{:.6},{:.6},{:.6}",
            i, p.true_anom, p.pos.x, p.pos.y, p.pos.z,
        )?;
    }

    Ok(())
}

/// Write the outline to a CSV file at the given path.
pub fn write_outline_file<P: AsRef<Path>>(path: P, geometry: &OrbitGeometry) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_outline(&mut file, geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::OrbitalElements;

    #[test]
    fn csv_output_has_header_and_rows() {
        let geometry = OrbitGeometry::compute(&OrbitalElements::circular(400.0, 0.0)).unwrap();

        let mut buf = Vec::new();
        write_outline(&mut buf, &geometry).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("index,"));
        assert_eq!(lines.len(), 361); // header + 360 samples
        assert!(lines[1].starts_with("0,0.00,6778.000000,"));
        assert!(lines[2].starts_with("1,3.60,"));
    }
}
