//! Pose integration: rate-limited steering plus forward translation.
//!
//! The kernel output is a steering *bias*, not an integrated velocity, so
//! orientation chases it at a capped turn rate instead of snapping — the
//! difference between a bird banking into a turn and one teleport-rotating.

use flock_agent::AgentStore;
use flock_core::{Vec3, rotate_towards};

/// A desired heading shorter than this (squared) is treated as "no opinion";
/// the agent keeps its current heading.
pub const MIN_STEER_LEN_SQ: f32 = 1.0e-6;

/// Advance one agent's pose by `dt` seconds.
///
/// Returns `(position, heading)`:
/// - if `desired` is non-negligible, `heading` turns toward it by at most
///   `rotation_speed_deg` degrees per second (a zero "no heading yet"
///   heading snaps straight to the target — there is nothing to turn from);
/// - translation is unconditional: `position += heading * move_speed * dt`.
pub fn advance(
    position: Vec3,
    heading: Vec3,
    desired: Vec3,
    move_speed: f32,
    rotation_speed_deg: f32,
    dt: f32,
) -> (Vec3, Vec3) {
    let heading = if desired.length_squared() > MIN_STEER_LEN_SQ {
        let target = desired.normalize();
        if heading.length_squared() > MIN_STEER_LEN_SQ {
            let max_turn = rotation_speed_deg.to_radians() * dt;
            rotate_towards(heading.normalize(), target, max_turn)
        } else {
            target
        }
    } else {
        heading
    };

    (position + heading * move_speed * dt, heading)
}

/// Apply the completed kernel outputs to every agent, in ascending index
/// order.
///
/// Only called once the whole output array is known good; a failed dispatch
/// never reaches this point, so a tick is either fully applied or not at
/// all.  The output is also stored back as `desired_heading` so the next
/// tick's snapshots carry it.
pub(crate) fn integrate_all(store: &mut AgentStore, outputs: &[Vec3], dt: f32) {
    debug_assert_eq!(outputs.len(), store.count);

    for i in 0..store.count {
        let (position, heading) = advance(
            store.position[i],
            store.heading[i],
            outputs[i],
            store.move_speed[i],
            store.rotation_speed_deg[i],
            dt,
        );
        store.position[i] = position;
        store.heading[i] = heading;
        store.desired_heading[i] = outputs[i];
    }
}
