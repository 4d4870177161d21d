//! Command-line argument parsing.

use std::path::PathBuf;

use crate::constants::MU_EARTH;
use crate::orbital::OrbitalElements;

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Geometry for six elements given on the command line.
    State {
        elements: OrbitalElements,
        mu: f64,
    },
    /// Geometry for a YAML scenario, with optional exports.
    Scene {
        scenario_path: PathBuf,
        json_path: Option<PathBuf>,
        csv_path: Option<PathBuf>,
    },
    /// Geometry for six slider positions.
    Sliders { positions: [u8; 6] },
    /// Arguments that could not be parsed.
    Invalid(String),
    Help,
    Version,
}

impl Args {
    /// Parse from any iterator; the first item is the program name.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let parsed = match args[1].as_str() {
            "state" => Self::parse_state_command(args),
            "scene" => Self::parse_scene_command(args),
            "sliders" => Self::parse_sliders_command(args),
            "-h" | "--help" | "help" => Ok(Command::Help),
            "-V" | "--version" | "version" => Ok(Command::Version),
            unknown => Err(format!("unknown command '{unknown}'")),
        };

        Self {
            command: parsed.unwrap_or_else(Command::Invalid),
        }
    }

    fn parse_state_command(args: &[String]) -> Result<Command, String> {
        if args.len() < 8 {
            return Err("'state' requires <sma> <ecc> <ta> <inc> <raan> <argp>".into());
        }

        let mut values = [0.0; 6];
        for (slot, raw) in values.iter_mut().zip(&args[2..8]) {
            *slot = raw
                .parse::<f64>()
                .map_err(|_| format!("'{raw}' is not a number"))?;
        }

        let mut mu = MU_EARTH;
        let mut i = 8;
        while i < args.len() {
            match args[i].as_str() {
                "--mu" => {
                    mu = args
                        .get(i + 1)
                        .and_then(|s| s.parse().ok())
                        .ok_or("--mu requires a number")?;
                    i += 2;
                }
                other => return Err(format!("unexpected argument '{other}' for 'state'")),
            }
        }

        let [sma, ecc, ta, inc, raan, argp] = values;
        Ok(Command::State {
            elements: OrbitalElements::new(sma, ecc, ta, inc, raan, argp),
            mu,
        })
    }

    fn parse_scene_command(args: &[String]) -> Result<Command, String> {
        if args.len() < 3 {
            return Err("'scene' requires a scenario path".into());
        }

        let mut json_path = None;
        let mut csv_path = None;

        let mut i = 3;
        while i < args.len() {
            let flag = args[i].as_str();
            let slot = match flag {
                "--json" => &mut json_path,
                "--csv" => &mut csv_path,
                other => return Err(format!("unexpected argument '{other}' for 'scene'")),
            };
            let value = args
                .get(i + 1)
                .ok_or_else(|| format!("{flag} requires a path"))?;
            *slot = Some(PathBuf::from(value));
            i += 2;
        }

        Ok(Command::Scene {
            scenario_path: PathBuf::from(&args[2]),
            json_path,
            csv_path,
        })
    }

    fn parse_sliders_command(args: &[String]) -> Result<Command, String> {
        if args.len() != 8 {
            return Err("'sliders' requires six positions in 0..=100".into());
        }

        let mut positions = [0u8; 6];
        for (slot, raw) in positions.iter_mut().zip(&args[2..8]) {
            *slot = raw
                .parse::<u8>()
                .map_err(|_| format!("'{raw}' is not a slider position"))?;
        }

        Ok(Command::Sliders { positions })
    }
}

pub fn print_help() {
    println!("orbit-geometry - orbital elements to ECI state vectors and plot geometry");
    println!();
    println!("USAGE:");
    println!("    orbit-geometry <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    state <sma> <ecc> <ta> <inc> <raan> <argp> [--mu <km3/s2>]");
    println!("                            Elements in km and degrees");
    println!("    scene <scenario.yaml> [--json <path>] [--csv <path>]");
    println!("                            Load a scenario and export its geometry");
    println!("    sliders <p0> .. <p5>    Slider positions 0..=100");
    println!("    help                    Show this help");
    println!("    version                 Show version");
    println!();
    println!("Set RUST_LOG=debug for computation traces.");
}

pub fn print_version() {
    println!("orbit-geometry {}", env!("CARGO_PKG_VERSION"));
}
