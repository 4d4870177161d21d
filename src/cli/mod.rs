//! Non-interactive host: parse arguments, compute, print or export.

pub mod args;
pub mod report;

use std::io::{self, Write};

use tracing::info;

use crate::config::ScenarioConfig;
use crate::controls::ControlPanel;
use crate::error::{Error, Result};
use crate::io::{csv, json};
use crate::orbital::OrbitGeometry;

pub use args::{Args, Command};

pub fn run(args: &Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &args.command {
        Command::State { elements, mu } => {
            let geometry = OrbitGeometry::compute_mu(elements, *mu)?;
            report::write_report(&mut out, &geometry)?;
        }
        Command::Scene {
            scenario_path,
            json_path,
            csv_path,
        } => {
            let config = ScenarioConfig::load(scenario_path)?;
            let scene = config.build_scene()?;
            report::write_report(&mut out, &scene.geometry)?;
            if let Some(path) = json_path {
                json::write_geometry_file(path, &scene.geometry)?;
                info!(path = %path.display(), "wrote geometry JSON");
            }
            if let Some(path) = csv_path {
                csv::write_outline_file(path, &scene.geometry)?;
                info!(path = %path.display(), "wrote outline CSV");
            }
        }
        Command::Sliders { positions } => {
            let panel = ControlPanel::new(*positions);
            for label in panel.labels() {
                writeln!(out, "  {label}")?;
            }
            let geometry = OrbitGeometry::compute(&panel.elements())?;
            report::write_report(&mut out, &geometry)?;
        }
        Command::Invalid(message) => return Err(Error::Usage(message.clone())),
        Command::Help => args::print_help(),
        Command::Version => args::print_version(),
    }

    Ok(())
}
