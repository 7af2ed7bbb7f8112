//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and resolves it into runtime pieces:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the massive bodies, from a built-in `StarSystem` or a custom list
//! - the asteroid belt shape and count
//!
//! `Scenario::build_simulation` then hands those to `Simulation::construct`.
//! A scenario can build any number of simulations; with a seed they are
//! identical.

use crate::configuration::config::ScenarioConfig;
use crate::error::Result;
use crate::simulation::asteroids::AsteroidBelt;
use crate::simulation::catalog::{BodyCatalog, StarSystem};
use crate::simulation::engine::Engine;
use crate::simulation::orbital::Simulation;
use crate::simulation::params::Parameters;
use crate::simulation::states::Body;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: Option<StarSystem>, // None = custom bodies
    pub massive: Vec<Body>,
    pub belt: AsteroidBelt,
    pub asteroid_count: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        // Engine (runtime) from EngineConfig
        let engine = Engine {
            interactions: cfg.engine.interactions,
            parallel: cfg.engine.parallel,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            time_step: p_cfg.time_step,
            G: p_cfg.G,
            min_distance: p_cfg.min_distance,
            seed: p_cfg.seed,
        };
        parameters.validate()?;

        // Massive bodies: custom list wins over the named system
        let (system, massive) = if cfg.bodies.is_empty() {
            (Some(cfg.system), cfg.system.catalog().bodies())
        } else {
            let bodies = cfg.bodies
                .iter()
                .map(|bc| bc.to_body())
                .collect::<Result<Vec<Body>>>()?;
            (None, bodies)
        };

        // Belt: defaults overridden field by field
        let a_cfg = cfg.asteroids;
        let defaults = AsteroidBelt::default();
        let belt = AsteroidBelt {
            mean_radius: a_cfg.mean_radius.unwrap_or(defaults.mean_radius),
            mass: a_cfg.mass.unwrap_or(defaults.mass),
            radius: a_cfg.radius.unwrap_or(defaults.radius),
            color: a_cfg.color.unwrap_or(defaults.color),
            speed_jitter: a_cfg.speed_jitter.unwrap_or(defaults.speed_jitter),
            vertical_speed: a_cfg.vertical_speed.unwrap_or(defaults.vertical_speed),
        };

        Ok(Self {
            engine,
            parameters,
            system,
            massive,
            belt,
            asteroid_count: a_cfg.count,
        })
    }

    pub fn build_simulation(&self) -> Result<Simulation> {
        Simulation::construct(
            self.engine.clone(),
            self.parameters.clone(),
            self.massive.as_slice(),
            &self.belt,
            self.asteroid_count,
        )
    }

    /// Name of the seeding catalog, for logs
    pub fn label(&self) -> &str {
        match self.system {
            Some(sys) => sys.id(),
            None => "custom",
        }
    }
}
