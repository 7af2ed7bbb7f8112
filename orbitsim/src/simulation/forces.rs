//! Force / acceleration contributors for the orbital engine
//!
//! Defines the acceleration trait, the set that sums terms into one buffer,
//! and direct Newtonian gravity with a minimum-distance cutoff and a
//! configurable interaction set (which bodies act as sources for which)

use rayon::prelude::*;
use serde::Deserialize;

use crate::simulation::states::{NVec3, System};

/// Collection of acceleration terms (gravity, and whatever else gets added)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - `sys` is only read, so every term sees the same positions
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec3]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body;
/// `out` has one slot per body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Which bodies pull on which
///
/// Asteroids are numerous and light, so letting them act as sources turns
/// an O(n*m) pass (m massive bodies) into O(n^2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interactions {
    /// Only massive bodies are sources; asteroids pull on nothing
    #[default]
    MassiveOnly,
    /// Asteroids feel massive bodies only, massive bodies feel everything
    MassiveFeelAll,
    /// Every body pulls on every other body
    AllPairs,
}

impl Interactions {
    /// Length of the prefix of the body sequence acting on body `i`
    ///
    /// Sources are always `bodies[..k]` since massive bodies lead the
    /// sequence, so `j == i` is the only index to skip inside it.
    pub fn source_count(self, i: usize, massive_count: usize, n: usize) -> usize {
        let k = match self {
            Interactions::MassiveOnly => massive_count,
            Interactions::MassiveFeelAll if i < massive_count => n,
            Interactions::MassiveFeelAll => massive_count,
            Interactions::AllPairs => n,
        };
        k.min(n)
    }
}

/// Acceleration on a body at `xi` due to a mass `mj` at `xj`
///
///   a = G * mj * (xj - xi) / |xj - xi|^3
///
/// Exactly zero when the separation is below `min_distance`.
#[allow(non_snake_case)]
pub fn pair_acceleration(xi: &NVec3, xj: &NVec3, mj: f64, G: f64, min_distance: f64) -> NVec3 {
    // r points from i to j, so i is pulled along +r
    let r = xj - xi;
    let d = r.norm();
    if d < min_distance {
        return NVec3::zeros();
    }
    let inv_d3 = (d * d * d).recip();
    G * mj * inv_d3 * r
}

/// Direct-summation Newtonian gravity with a hard minimum-distance cutoff
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_distance: f64, // pairs closer than this are ignored
    pub interactions: Interactions,
    pub parallel: bool, // split the pass across bodies with rayon
}

impl NewtonianGravity {
    /// Net acceleration on body `i`, reading positions only
    fn accel_on(&self, i: usize, sys: &System) -> NVec3 {
        let n = sys.bodies.len();
        let xi = sys.bodies[i].x;
        let k = self.interactions.source_count(i, sys.massive_count, n);

        sys.bodies[..k]
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .fold(NVec3::zeros(), |acc, (_, bj)| {
                acc + pair_acceleration(&xi, &bj.x, bj.m, self.G, self.min_distance)
            })
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }
        let out = &mut out[..n];

        // Each slot only depends on the read-only system, so bodies are
        // independent and can be split across threads
        if self.parallel {
            out.par_iter_mut()
                .enumerate()
                .for_each(|(i, a)| *a += self.accel_on(i, sys));
        } else {
            for (i, a) in out.iter_mut().enumerate() {
                *a += self.accel_on(i, sys);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_count_per_mode() {
        // 2 massive bodies, 3 asteroids
        let (m, n) = (2, 5);
        assert_eq!(Interactions::MassiveOnly.source_count(0, m, n), 2);
        assert_eq!(Interactions::MassiveOnly.source_count(4, m, n), 2);
        assert_eq!(Interactions::MassiveFeelAll.source_count(1, m, n), 5);
        assert_eq!(Interactions::MassiveFeelAll.source_count(3, m, n), 2);
        assert_eq!(Interactions::AllPairs.source_count(3, m, n), 5);
    }

    #[test]
    fn source_count_never_exceeds_body_count() {
        assert_eq!(Interactions::MassiveOnly.source_count(0, 4, 2), 2);
    }

    #[test]
    fn pair_acceleration_cutoff_is_exact_zero() {
        let a = pair_acceleration(&NVec3::zeros(), &NVec3::new(999.0, 0.0, 0.0), 1e30, 6.6743e-11, 1000.0);
        assert_eq!(a, NVec3::zeros());

        let a = pair_acceleration(&NVec3::zeros(), &NVec3::zeros(), 1e30, 6.6743e-11, 1000.0);
        assert_eq!(a, NVec3::zeros());
    }

    #[test]
    fn empty_set_leaves_zeros() {
        let set = AccelSet::new();
        let sys = System { bodies: Vec::new(), massive_count: 0, t: 0.0 };
        let mut out: Vec<NVec3> = Vec::new();
        set.accumulate_accels(0.0, &sys, &mut out);
        assert!(set.is_empty());
    }
}
