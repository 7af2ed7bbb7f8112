use orbitsim::simulation::diagnostics::{center_of_mass, interaction_energy, total_momentum};
use orbitsim::{bench_force_pass, bench_step_curve};
use orbitsim::{Scenario, ScenarioConfig, StarSystem};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Steps a star system with a generated asteroid belt")]
struct Args {
    /// Scenario file, either a path or a name under `scenarios/`
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Override the scenario's star system
    #[arg(long)]
    system: Option<StarSystem>,

    /// Override the scenario's asteroid count
    #[arg(long)]
    asteroids: Option<usize>,

    /// Number of steps to run
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Log diagnostics every N steps (0 = only at the end)
    #[arg(long, default_value_t = 100)]
    report_every: usize,

    /// Run the force-pass benchmarks instead of a simulation
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    let given = PathBuf::from(&args.file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name)
    };

    let mut cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    if let Some(system) = args.system {
        cfg.system = system;
        cfg.bodies.clear();
    }
    if let Some(n) = args.asteroids {
        cfg.asteroids.count = n;
    }
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_force_pass();
        bench_step_curve();
        return Ok(());
    }

    let scenario = Scenario::build_scenario(load_scenario(&args)?)?;
    let mut sim = scenario.build_simulation()?;
    let g = sim.parameters().G;
    let interactions = sim.engine().interactions;

    info!(
        "{}: {} massive bodies, {} asteroids, dt = {:.3e} s",
        scenario.label(),
        sim.massive_count(),
        sim.asteroid_count(),
        sim.time_step()
    );

    // drift of the energy the chosen interaction set actually conserves
    let e0 = interaction_energy(sim.system(), interactions, g);
    let report = |step: usize, sim: &orbitsim::Simulation| {
        let e = interaction_energy(sim.system(), interactions, g);
        info!(
            "step {:>7}  t = {:.4e} s  dE/E0 = {:+.3e}  |p| = {:.3e}  com = {:.3e}",
            step,
            sim.elapsed_time(),
            (e - e0) / e0.abs().max(f64::MIN_POSITIVE),
            total_momentum(sim.bodies()).norm(),
            center_of_mass(sim.bodies()).norm()
        );
    };

    for step in 1..=args.steps {
        sim.step();
        if args.report_every > 0 && step % args.report_every == 0 {
            report(step, &sim);
        }
    }
    if args.report_every == 0 || args.steps % args.report_every != 0 {
        report(args.steps, &sim);
    }

    let snapshot = sim.snapshot();
    for (i, b) in snapshot.bodies.iter().take(snapshot.massive_count).enumerate() {
        info!(
            "body {:>2}: x = [{:.3e}, {:.3e}, {:.3e}] m",
            i, b.position[0], b.position[1], b.position[2]
        );
    }

    sim.destroy();
    Ok(())
}
