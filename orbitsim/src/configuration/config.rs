//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – interaction set and parallel force pass
//! - [`ParametersConfig`] – time step, physical constants and seed
//! - [`StarSystem`]       – built-in catalog seeding the massive bodies
//! - [`AsteroidsConfig`]  – asteroid count and belt overrides
//! - [`BodyConfig`]       – optional custom massive bodies, replacing the catalog
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   interactions: "massive_only"   # or "massive_feel_all", "all_pairs"
//!   parallel: false
//!
//! parameters:
//!   time_step: 144000.0            # seconds per step
//!   G: 6.6743e-11                  # optional
//!   min_distance: 1000.0           # optional, m
//!   seed: 42                       # optional, omit for a fresh belt each run
//!
//! system: "solar"                  # or "alpha_centauri"
//!
//! asteroids:
//!   count: 500
//!   mean_radius: 4.0e11            # optional belt overrides
//!
//! bodies:                          # optional; replaces `system` when non-empty
//!   - name: "star"
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!     m: 2.0e30
//!     radius: 7.0e8
//! ```
//!
//! The engine then maps this configuration into its runtime types
//! (see `simulation::scenario`).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::simulation::catalog::StarSystem;
use crate::simulation::forces::Interactions;
use crate::simulation::params::{GRAVITATIONAL_CONSTANT, MIN_DISTANCE};
use crate::simulation::states::{Body, Color, NVec3};

/// High-level engine configuration
#[derive(Deserialize, Debug, Clone, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub interactions: Interactions, // which bodies act as gravity sources
    #[serde(default)]
    pub parallel: bool, // `true` - force pass split across threads
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub time_step: f64, // fixed step size (s)
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_min_distance")]
    pub min_distance: f64, // pairs closer than this feel no gravity
    #[serde(default)]
    pub seed: Option<u64>, // deterministic seed to make the belt reproducible
}

fn default_g() -> f64 {
    GRAVITATIONAL_CONSTANT
}

fn default_min_distance() -> f64 {
    MIN_DISTANCE
}

/// Asteroid count plus optional overrides of the default belt shape
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AsteroidsConfig {
    #[serde(default)]
    pub count: usize,
    pub mean_radius: Option<f64>,
    pub mass: Option<f64>,
    pub radius: Option<f64>,
    pub speed_jitter: Option<(f64, f64)>, // [min, max] multiplier on circular speed
    pub vertical_speed: Option<f64>,
    pub color: Option<Color>,
}

/// Configuration for a single custom body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub x: Vec<f64>, // Initial position (m), 3 components
    pub v: Vec<f64>, // Initial velocity (m/s), 3 components
    pub m: f64, // Mass (kg)
    pub radius: f64, // Radius (m), display only
    #[serde(default)]
    pub color: Option<Color>,
}

impl BodyConfig {
    pub fn to_body(&self) -> Result<Body> {
        let label = self.name.as_deref().unwrap_or("<unnamed>");
        let x = vec3(&self.x, "x", label)?;
        let v = vec3(&self.v, "v", label)?;
        let mut body = Body::new(x, v, self.m, self.radius);
        if let Some(c) = self.color {
            body.color = c;
        }
        Ok(body)
    }
}

fn vec3(c: &[f64], field: &str, label: &str) -> Result<NVec3> {
    match c {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(Error::InvalidParam(format!(
            "body {label}: `{field}` needs 3 components, got {}",
            c.len()
        ))),
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // interaction set and threading
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub system: StarSystem, // built-in catalog, ignored when `bodies` is non-empty
    #[serde(default)]
    pub asteroids: AsteroidsConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // custom catalog, dominant body first
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
