//! Conserved-quantity diagnostics
//!
//! Used to keep an eye on drift over long runs. `total_energy` sums every
//! pair regardless of the interaction set the integrator uses; for drift of
//! the model actually being stepped use `interaction_energy`.

use crate::simulation::forces::Interactions;
use crate::simulation::states::{Body, NVec3, System};

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Sum of -G m_i m_j / r_ij over unordered pairs; coincident pairs are skipped
#[allow(non_snake_case)]
pub fn potential_energy(bodies: &[Body], G: f64) -> f64 {
    let mut u = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let d = (bj.x - bi.x).norm();
            if d > 0.0 {
                u -= G * bi.m * bj.m / d;
            }
        }
    }
    u
}

#[allow(non_snake_case)]
pub fn total_energy(bodies: &[Body], G: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, G)
}

/// Energy conserved by the force pass for the given interaction set
///
/// - `massive_only`: massive bodies form a closed subsystem and asteroids are
///   test particles, so only the massive bodies count.
/// - `massive_feel_all`: every pair with at least one massive body.
/// - `all_pairs`: same as `total_energy`.
#[allow(non_snake_case)]
pub fn interaction_energy(sys: &System, interactions: Interactions, G: f64) -> f64 {
    let n = sys.bodies.len();
    let counted = match interactions {
        Interactions::MassiveOnly => sys.massive_count.min(n),
        _ => n,
    };
    let bodies = &sys.bodies[..counted];

    let mut u = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        let k = interactions.source_count(i, sys.massive_count, counted);
        for bj in bodies.iter().take(k).skip(i + 1) {
            let d = (bj.x - bi.x).norm();
            if d > 0.0 {
                u -= G * bi.m * bj.m / d;
            }
        }
    }
    kinetic_energy(bodies) + u
}

pub fn total_momentum(bodies: &[Body]) -> NVec3 {
    bodies.iter().fold(NVec3::zeros(), |p, b| p + b.m * b.v)
}

/// Mass-weighted mean position; zero for an empty slice
pub fn center_of_mass(bodies: &[Body]) -> NVec3 {
    let m: f64 = bodies.iter().map(|b| b.m).sum();
    if m <= 0.0 {
        return NVec3::zeros();
    }
    bodies.iter().fold(NVec3::zeros(), |c, b| c + b.m * b.x) / m
}
