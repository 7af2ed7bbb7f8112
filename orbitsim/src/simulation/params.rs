//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - gravitational constant `G`,
//! - minimum pair distance below which gravity is switched off,
//! - optional random seed for the asteroid belt

use crate::error::{Error, Result};

/// Gravitational constant (m^3 / (kg s^2))
pub const GRAVITATIONAL_CONSTANT: f64 = 6.6743e-11;

/// Pair separations below this (m) contribute no acceleration
pub const MIN_DISTANCE: f64 = 1000.0;

/// 100 simulated days per second of wall time at 60 frames per second
pub const DEFAULT_TIME_STEP: f64 = 100.0 * 86_400.0 / 60.0;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub time_step: f64, // fixed step size (s)
    pub G: f64, // gravitational constant
    pub min_distance: f64, // singularity guard (m)
    pub seed: Option<u64>, // None = seeded from entropy
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            G: GRAVITATIONAL_CONSTANT,
            min_distance: MIN_DISTANCE,
            seed: None,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "time_step must be finite and > 0, got {}",
                self.time_step
            )));
        }
        if !self.G.is_finite() || self.G <= 0.0 {
            return Err(Error::InvalidParam(format!("G must be finite and > 0, got {}", self.G)));
        }
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "min_distance must be finite and > 0, got {}",
                self.min_distance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Parameters::default().validate().is_ok());
        assert_eq!(DEFAULT_TIME_STEP, 144_000.0);
    }

    #[test]
    fn rejects_bad_time_step() {
        for dt in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let p = Parameters { time_step: dt, ..Parameters::default() };
            assert!(matches!(p.validate(), Err(Error::InvalidParam(_))), "accepted dt = {dt}");
        }
    }
}
