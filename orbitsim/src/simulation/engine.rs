//! High-level runtime engine settings
//!
//! Selects the gravity interaction set and whether the force pass runs
//! on the rayon thread pool

use crate::simulation::forces::Interactions;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub interactions: Interactions, // which bodies act as gravity sources
    pub parallel: bool, // false = serial force pass, true = rayon
}
