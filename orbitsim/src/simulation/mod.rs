pub mod states;
pub mod params;
pub mod engine;
pub mod sampling;
pub mod catalog;
pub mod asteroids;
pub mod forces;
pub mod integrator;
pub mod orbital;
pub mod scenario;
pub mod diagnostics;
