use std::time::Instant;

use crate::simulation::asteroids::AsteroidBelt;
use crate::simulation::catalog::StarSystem;
use crate::simulation::engine::Engine;
use crate::simulation::forces::Interactions;
use crate::simulation::orbital::{gravity_set, Simulation};
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec3;

const MODES: [Interactions; 3] = [
    Interactions::MassiveOnly,
    Interactions::MassiveFeelAll,
    Interactions::AllPairs,
];

/// Solar system plus `asteroids` seeded asteroids
fn make_simulation(asteroids: usize, engine: Engine) -> Option<Simulation> {
    let params = Parameters {
        seed: Some(42),
        ..Parameters::default()
    };
    Simulation::construct(engine, params, StarSystem::Solar.catalog(), &AsteroidBelt::default(), asteroids).ok()
}

/// Time a single force pass for each interaction set, serial and parallel
pub fn bench_force_pass() {
    // Different belt sizes to test
    let ns = [250, 500, 1000, 2000, 4000, 8000];

    for n in ns {
        for mode in MODES {
            let name = format!("{mode:?}");
            let mut line = format!("N = {n:5}, {name:>16}");

            for parallel in [false, true] {
                let engine = Engine { interactions: mode, parallel };
                let Some(sim) = make_simulation(n, engine.clone()) else {
                    println!("N = {n:5}: failed to build simulation");
                    return;
                };
                let forces = gravity_set(&engine, sim.parameters());
                let mut out = vec![NVec3::zeros(); sim.body_count()];

                // Warm up
                forces.accumulate_accels(0.0, sim.system(), &mut out);

                let t0 = Instant::now();
                forces.accumulate_accels(0.0, sim.system(), &mut out);
                let dt = t0.elapsed().as_secs_f64();

                let tag = if parallel { "par" } else { "serial" };
                line.push_str(&format!(", {tag} = {dt:8.6} s"));
            }

            println!("{line}");
        }
    }
}

/// Benchmark whole steps for a range of belt sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,massive_only_ms,massive_feel_all_ms,all_pairs_ms");

    for n in (500..=10_000).step_by(500) {
        // all_pairs is quadratic, so average fewer steps as n grows
        let steps = if n <= 2000 { 5 } else { 1 };
        let mut row = n.to_string();

        for mode in MODES {
            let engine = Engine { interactions: mode, parallel: false };
            let Some(mut sim) = make_simulation(n, engine) else {
                return;
            };

            let t0 = Instant::now();
            sim.step_n(steps);
            let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
            row.push_str(&format!(",{ms:.6}"));
        }

        println!("{row}");
    }
}
