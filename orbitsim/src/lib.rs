pub mod error;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Error, Result};

pub use simulation::states::{Body, BodyView, Color, NVec3, Snapshot, System};
pub use simulation::params::{Parameters, GRAVITATIONAL_CONSTANT, MIN_DISTANCE};
pub use simulation::engine::Engine;
pub use simulation::sampling::Sampler;
pub use simulation::catalog::{BodyCatalog, CatalogEntry, StarSystem};
pub use simulation::asteroids::AsteroidBelt;
pub use simulation::forces::{pair_acceleration, AccelSet, Acceleration, Interactions, NewtonianGravity};
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::orbital::{gravity_set, Simulation};
pub use simulation::scenario::Scenario;

pub use configuration::config::{AsteroidsConfig, BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_force_pass, bench_step_curve};
