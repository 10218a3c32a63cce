//! World bounds and steering rotation helpers.
//!
//! Positions and headings are single-precision `glam::Vec3`.  f32 keeps the
//! snapshot arrays half the size of f64 and is more than enough resolution
//! for steering behavior at flock scale.

use glam::{Quat, Vec3};

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned box the flock is steered to stay inside.
///
/// Stored as center + half-extents.  An agent on the boundary surface counts
/// as *outside* (containment is strict), so the border force engages the
/// moment an agent touches the wall.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub center: Vec3,
    pub half_extent: Vec3,
}

impl Bounds {
    #[inline]
    pub fn new(center: Vec3, half_extent: Vec3) -> Self {
        Self { center, half_extent }
    }

    /// Construct from a full edge-length size vector (`half_extent = size / 2`).
    #[inline]
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self { center, half_extent: size * 0.5 }
    }

    /// Minimum corner of the box.
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extent
    }

    /// Maximum corner of the box.
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extent
    }

    /// Strict containment test — boundary points are outside.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        let min = self.min();
        let max = self.max();
        p.x > min.x
            && p.x < max.x
            && p.y > min.y
            && p.y < max.y
            && p.z > min.z
            && p.z < max.z
    }
}

// ── Capped rotation ───────────────────────────────────────────────────────────

/// Rotate the unit vector `current` toward the unit vector `target` by at
/// most `max_angle` radians.
///
/// Returns `target` itself once the remaining angle is within the cap, so
/// repeated calls converge exactly.  Anti-parallel inputs have no unique
/// rotation plane; an arbitrary orthonormal axis is used so the turn still
/// makes progress instead of stalling.
///
/// Both inputs must be unit-length; callers normalize (zero-safely) first.
pub fn rotate_towards(current: Vec3, target: Vec3, max_angle: f32) -> Vec3 {
    let angle = current.angle_between(target);
    if angle <= max_angle {
        return target;
    }

    let axis = current.cross(target);
    let axis = if axis.length_squared() > f32::EPSILON {
        axis.normalize()
    } else {
        current.any_orthonormal_vector()
    };

    Quat::from_axis_angle(axis, max_angle) * current
}
