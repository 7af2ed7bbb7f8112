//! The stepping simulation: bodies, forces and parameters in one owner
//!
//! `Simulation` is the only thing that mutates bodies. Readers either borrow
//! (`bodies()`, `body(i)`) between two calls to `step`, which the borrow
//! checker enforces, or take an owned `f32` [`Snapshot`].

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::simulation::asteroids::AsteroidBelt;
use crate::simulation::catalog::BodyCatalog;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::semi_implicit_euler;
use crate::simulation::params::Parameters;
use crate::simulation::sampling::Sampler;
use crate::simulation::states::{Body, BodyView, Snapshot, System};

pub struct Simulation {
    engine: Engine,
    parameters: Parameters,
    system: System,
    forces: AccelSet,
}

impl Simulation {
    /// Build a simulation from `catalog` plus `asteroid_count` generated
    /// asteroids orbiting the catalog's first (dominant) body.
    ///
    /// The belt is drawn from a sampler seeded with `parameters.seed`.
    pub fn construct<C>(
        engine: Engine,
        parameters: Parameters,
        catalog: &C,
        belt: &AsteroidBelt,
        asteroid_count: usize,
    ) -> Result<Self>
    where
        C: BodyCatalog + ?Sized,
    {
        parameters.validate()?;

        let massive = catalog.bodies();
        let center_mass = match massive.first() {
            Some(b) => b.m,
            None => return Err(Error::InvalidParam("catalog must contain at least one body".into())),
        };
        for (i, b) in massive.iter().enumerate() {
            if !(b.m.is_finite() && b.m > 0.0) || !(b.radius.is_finite() && b.radius > 0.0) {
                return Err(Error::InvalidParam(format!(
                    "catalog body {i} needs finite mass and radius > 0"
                )));
            }
        }

        if asteroid_count > 0 {
            belt.validate()?;
        }

        let massive_count = massive.len();
        let total = massive_count
            .checked_add(asteroid_count)
            .ok_or(Error::Allocation(usize::MAX))?;
        let mut bodies: Vec<Body> = Vec::new();
        bodies
            .try_reserve_exact(total)
            .map_err(|_| Error::Allocation(total))?;

        bodies.extend(massive);

        let mut sampler = Sampler::new(parameters.seed);
        for _ in 0..asteroid_count {
            bodies.push(belt.configure_asteroid(&mut sampler, parameters.G, center_mass));
        }

        let forces = gravity_set(&engine, &parameters);

        debug!(
            "constructed simulation: {} massive bodies, {} asteroids, dt = {} s, interactions = {:?}",
            massive_count, asteroid_count, parameters.time_step, engine.interactions
        );

        Ok(Self {
            engine,
            parameters,
            system: System {
                bodies,
                massive_count,
                t: 0.0,
            },
            forces,
        })
    }

    /// Release the body sequence. Later calls to `step` and `destroy` do nothing.
    pub fn destroy(&mut self) {
        if self.is_running() {
            debug!("destroying simulation with {} bodies", self.system.bodies.len());
        }
        self.system.bodies = Vec::new();
        self.system.massive_count = 0;
    }

    pub fn is_running(&self) -> bool {
        !self.system.bodies.is_empty()
    }

    /// Advance by one time step. No-op once destroyed.
    pub fn step(&mut self) {
        if !self.is_running() {
            return;
        }
        semi_implicit_euler(&mut self.system, &self.forces, &self.parameters);
        trace!("stepped to t = {} s", self.system.t);
    }

    pub fn step_n(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    pub fn body_count(&self) -> usize {
        self.system.bodies.len()
    }

    pub fn massive_count(&self) -> usize {
        self.system.massive_count
    }

    pub fn asteroid_count(&self) -> usize {
        self.system.asteroid_count()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.system.bodies.get(i)
    }

    pub fn elapsed_time(&self) -> f64 {
        self.system.t
    }

    pub fn time_step(&self) -> f64 {
        self.parameters.time_step
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Owned single-precision copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elapsed_time: self.system.t,
            time_step: self.parameters.time_step,
            massive_count: self.system.massive_count,
            bodies: self.system.bodies.iter().map(BodyView::from).collect(),
        }
    }
}

/// Gravity-only force set for the given engine settings
pub fn gravity_set(engine: &Engine, parameters: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: parameters.G,
        min_distance: parameters.min_distance,
        interactions: engine.interactions,
        parallel: engine.parallel,
    })
}
