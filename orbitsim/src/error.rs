//! Crate-wide error type.
//!
//! Only construction and configuration can fail. Numeric edge cases inside a
//! step (coincident bodies, degenerate asteroid radii) are recovered locally
//! and never show up here.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid scenario or construction parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The body sequence could not be allocated.
    #[error("failed to allocate {0} bodies")]
    Allocation(usize),

    /// Star system identifier with no catalog behind it.
    #[error("unknown star system: {0}")]
    UnknownSystem(String),

    /// Scenario file could not be parsed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Scenario file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = Error::InvalidParam("time_step must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("time_step"));

        let e = Error::UnknownSystem("vega".into());
        assert_eq!(format!("{e}"), "unknown star system: vega");
    }
}
