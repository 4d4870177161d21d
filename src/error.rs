use thiserror::Error;

/// Elements outside the closed-ellipse domain of the COE transform.
///
/// NaN inputs fail the same range checks and are reported here too.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidOrbit {
    #[error("eccentricity {0} is outside [0, 1)")]
    Eccentricity(f64),

    #[error("semimajor axis {0} km must be positive")]
    SemimajorAxis(f64),

    #[error("gravitational parameter {0} km^3/s^2 must be positive")]
    GravitationalParameter(f64),

    #[error("semimajor axis {sma} km with mu {mu} km^3/s^2 gives a non-finite state")]
    NonFiniteState { sma: f64, mu: f64 },
}

/// Crate-wide error for the outer surfaces (config, export, CLI).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid orbit: {0}")]
    InvalidOrbit(#[from] InvalidOrbit),

    #[error("usage error: {0}")]
    Usage(String),

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
