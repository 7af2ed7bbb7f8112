//! Fixed-step time integrator for the orbital system
//!
//! Semi-implicit (symplectic) Euler driven by an `AccelSet` and `Parameters`.
//! One force evaluation per step.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec3, System};

/// Advance the system by one step using semi-implicit Euler
///
/// The force pass fills a separate buffer from the current positions before
/// any body is touched, so no body sees another body's already-advanced state.
/// Then, per body:
///   a_n     = buffer[i]
///   v_n+1   = v_n + dt * a_n
///   x_n+1   = x_n + dt * v_n+1   (updated velocity, not v_n)
pub fn semi_implicit_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // destroyed or empty system, nothing to advance
        return;
    }

    let dt = params.time_step;

    // a_n from x_n, for every body, before anything moves
    let mut acc = vec![NVec3::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut acc);

    // Kick then drift with the new velocity
    for (b, a) in sys.bodies.iter_mut().zip(acc.into_iter()) {
        b.a = a;
        b.v += dt * b.a;
        b.x += dt * b.v;
    }

    // t_n+1 = t_n + dt
    sys.t += dt;
}
