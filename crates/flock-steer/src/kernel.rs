//! The flocking force kernel.
//!
//! One brute-force O(n) scan per agent accumulates three neighborhood forces
//! under two radius thresholds, adds a containment force, and blends the four
//! into a single desired heading.  No spatial index: at flock scale the dense
//! linear scan over the snapshot array is fast enough and trivially safe to
//! run for all agents concurrently.

use flock_agent::AgentSnapshot;
use flock_core::{FlockConfig, Vec3};

use crate::error::{SteerError, SteerResult};

/// Running force accumulators for one agent's neighbor scan.
///
/// An accumulator with zero contributing neighbors stays the zero vector —
/// normalization is skipped rather than dividing by a zero count.
#[derive(Default)]
struct FlockForces {
    cohesion: Vec3,
    separation: Vec3,
    alignment: Vec3,
    /// Neighbors inside `radius` (separation contributors).
    num_near: u32,
    /// Neighbors inside `big_radius` (cohesion and alignment share this
    /// count).
    num_far: u32,
}

/// Compute the new desired heading for the agent at `index`.
///
/// Pure: reads only `snapshots` and `config`, writes nothing, and returns
/// the same vector for the same inputs no matter how often or in what order
/// it is invoked — which is what makes the surrounding dispatch embarrassingly
/// parallel.
///
/// Neighbor selection per other agent `j`:
/// - `j == index` never contributes (exclusion is by index, so coincident
///   *distinct* agents still see each other);
/// - squared distance `d <= radius²` and `d > 0` → separation accumulates
///   `(pos_i − pos_j) / d`.  The divide by *squared* distance steepens the
///   repulsion falloff so near-collisions dominate.  `d == 0` is skipped:
///   the term has no defined direction for coincident agents;
/// - `d <= big_radius²` → cohesion accumulates `pos_j`, alignment
///   accumulates `heading_j`.
///
/// Returns `Err` if the agent's own snapshot is non-finite (a malformed
/// input, not a math overflow — finite inputs cannot produce NaN here).
///
/// # Panics
///
/// Panics if `index` is out of range for `snapshots`; callers dispatch over
/// `0..snapshots.len()` only.
pub fn compute(
    index: usize,
    snapshots: &[AgentSnapshot],
    config: &FlockConfig,
) -> SteerResult<Vec3> {
    let me = snapshots[index];
    if !(me.position.is_finite() && me.heading.is_finite()) {
        return Err(SteerError::MalformedSnapshot { agent: index });
    }

    let radius_sq = config.radius * config.radius;
    let big_radius_sq = config.big_radius * config.big_radius;

    let mut f = FlockForces::default();
    for (j, other) in snapshots.iter().enumerate() {
        if j == index {
            continue;
        }
        let d = other.position.distance_squared(me.position);

        if d > 0.0 && d <= radius_sq {
            f.separation += (me.position - other.position) / d;
            f.num_near += 1;
        }
        if d <= big_radius_sq {
            f.cohesion += other.position;
            f.alignment += other.heading;
            f.num_far += 1;
        }
    }

    let w = &config.weights;

    // Each force is averaged over its own neighbor count and normalized
    // independently before weighting, so a dense neighborhood doesn't shout
    // down a sparse one.
    let cohesion = if f.num_far > 0 {
        (f.cohesion / f.num_far as f32 - me.position).normalize_or_zero() * w.cohesion
    } else {
        Vec3::ZERO
    };

    let separation = if f.num_near > 0 {
        (f.separation / f.num_near as f32).normalize_or_zero() * w.separation
    } else {
        Vec3::ZERO
    };

    let alignment = if f.num_far > 0 {
        ((f.alignment - me.heading) / f.num_far as f32).normalize_or_zero() * w.alignment
    } else {
        Vec3::ZERO
    };

    let border = if config.bounds.contains(me.position) {
        Vec3::ZERO
    } else {
        (config.bounds.center - me.position).normalize_or_zero() * w.border
    };

    Ok((cohesion + separation + alignment + border) / 4.0)
}
