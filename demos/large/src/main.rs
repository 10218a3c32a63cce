//! large — multi-group run with CSV output and wall-clock timing.
//!
//! Three flocks of 1,000 boids each, growing the first by another 1,000
//! halfway through, with poses sampled to CSV once per simulated second.
//! Built with the `parallel` feature so the steering dispatch uses all
//! cores.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use flock_core::{FlockConfig, GroupId, SpawnParams, Vec3};
use flock_sim::SimulationBuilder;
use flock_output::{CsvWriter, SimOutputObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const BOIDS_PER_GROUP: usize = 1_000;
const GROWTH: usize = 1_000;
const SEED: u64 = 7;
const DT: f32 = 1.0 / 60.0;
const TICKS: u64 = 3_600; // one simulated minute
const OUTPUT_DIR: &str = "./output";

fn main() -> Result<()> {
    let config = FlockConfig {
        bounds: flock_core::Bounds::new(Vec3::ZERO, Vec3::splat(120.0)),
        sample_interval_ticks: 60,
        ..FlockConfig::default()
    };

    let spawn = |origin: Vec3| SpawnParams {
        origin,
        scatter_radius: 15.0,
        move_speed: 6.0,
        rotation_speed_deg: 270.0,
    };

    let mut sim = SimulationBuilder::new(config, SEED)
        .group(BOIDS_PER_GROUP, spawn(Vec3::new(-60.0, 0.0, 0.0)))
        .group(BOIDS_PER_GROUP, spawn(Vec3::new(60.0, 0.0, 0.0)))
        .group(BOIDS_PER_GROUP, spawn(Vec3::new(0.0, 60.0, 0.0)))
        .build()?;

    std::fs::create_dir_all(OUTPUT_DIR)
        .with_context(|| format!("creating {OUTPUT_DIR}"))?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR)).context("opening CSV writers")?;
    let mut observer = SimOutputObserver::new(writer);

    let started = Instant::now();

    sim.run_ticks(TICKS / 2, DT, &mut observer)?;

    // Mid-run growth: queued now, applied at the next tick boundary.
    sim.grow_group(GroupId(0), GROWTH)?;
    sim.run_ticks(TICKS / 2, DT, &mut observer)?;

    let elapsed = started.elapsed();

    observer.finish();
    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "{} boids x {} ticks in {:.2?} ({:.0} ticks/s)",
        sim.agent_count(),
        TICKS,
        elapsed,
        TICKS as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}
