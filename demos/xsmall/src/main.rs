//! xsmall — smallest example for the rust_flock framework.
//!
//! One flock of 150 boids swirling inside a 100-unit box for ten simulated
//! seconds, with a console progress line once per second.  Scale comment:
//! bump `BOID_COUNT` and enable the `parallel` feature on flock-sim to run
//! thousands of boids across all cores.

use anyhow::Result;

use flock_core::{FlockConfig, SpawnParams, Tick, Vec3};
use flock_sim::{SimObserver, Simulation, SimulationBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const BOID_COUNT: usize = 150;
const SEED: u64 = 42;
const DT: f32 = 1.0 / 60.0;
const TICKS: u64 = 600; // 10 simulated seconds

// ── Progress printer ──────────────────────────────────────────────────────────

struct ProgressPrinter;

impl SimObserver for ProgressPrinter {
    fn on_tick_end(&mut self, tick: Tick, elapsed: f64, agents: usize) {
        if (tick.0 + 1) % 60 == 0 {
            println!("{tick}: {agents} boids, {elapsed:.1} s simulated");
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = FlockConfig::default();
    let mut sim = SimulationBuilder::new(config, SEED)
        .group(
            BOID_COUNT,
            SpawnParams { scatter_radius: 10.0, move_speed: 4.0, ..SpawnParams::default() },
        )
        .build()?;

    sim.run_ticks(TICKS, DT, &mut ProgressPrinter)?;

    println!();
    println!("final flock center: {}", flock_center(&sim));
    println!("final tick: {}", sim.current_tick());
    Ok(())
}

fn flock_center(sim: &Simulation) -> Vec3 {
    let store = sim.agents();
    let sum: Vec3 = store.position.iter().copied().sum();
    sum / store.count.max(1) as f32
}
