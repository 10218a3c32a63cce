//! Simulation configuration and spawn parameters.

use glam::Vec3;

use crate::error::{FlockError, FlockResult};
use crate::space::Bounds;

// ── SteeringWeights ───────────────────────────────────────────────────────────

/// Blend weights for the four steering forces.
///
/// Conventionally non-negative, but negative values are accepted — they
/// invert the corresponding force, which is occasionally useful for
/// scattering experiments.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteeringWeights {
    pub cohesion: f32,
    pub separation: f32,
    pub alignment: f32,
    pub border: f32,
}

impl SteeringWeights {
    /// All four weights set to the same value.
    pub fn splat(w: f32) -> Self {
        Self { cohesion: w, separation: w, alignment: w, border: w }
    }

    fn is_finite(&self) -> bool {
        self.cohesion.is_finite()
            && self.separation.is_finite()
            && self.alignment.is_finite()
            && self.border.is_finite()
    }
}

impl Default for SteeringWeights {
    fn default() -> Self {
        Self::splat(1.0)
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Behavioral configuration for the whole simulation.
///
/// Immutable during a tick; the runner accepts a replacement only between
/// ticks, and every replacement is re-validated.  Invariant:
/// `0 <= radius <= big_radius`, all values finite.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockConfig {
    /// Short-range threshold: neighbors inside this distance repel
    /// (separation force).
    pub radius: f32,

    /// Long-range threshold: neighbors inside this distance attract and
    /// align (cohesion and alignment forces).
    pub big_radius: f32,

    /// Blend weights applied after per-force normalization.
    pub weights: SteeringWeights,

    /// Containment box; agents outside are pulled back toward its center.
    pub bounds: Bounds,

    /// Emit an observer sample every N ticks.  0 = never.
    pub sample_interval_ticks: u64,
}

impl FlockConfig {
    /// Check all invariants.  Called by the simulation builder and again on
    /// every config replacement, so a bad value can never reach a tick.
    pub fn validate(&self) -> FlockResult<()> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(FlockError::Config(format!(
                "radius must be finite and non-negative, got {}",
                self.radius
            )));
        }
        if !self.big_radius.is_finite() || self.big_radius < self.radius {
            return Err(FlockError::Config(format!(
                "big_radius must be finite and >= radius ({}), got {}",
                self.radius, self.big_radius
            )));
        }
        if !self.weights.is_finite() {
            return Err(FlockError::Config(format!(
                "steering weights must be finite, got {:?}",
                self.weights
            )));
        }
        if !(self.bounds.center.is_finite() && self.bounds.half_extent.is_finite()) {
            return Err(FlockError::Config("bounds must be finite".into()));
        }
        if self.bounds.half_extent.min_element() < 0.0 {
            return Err(FlockError::Config(format!(
                "bounds half extents must be non-negative, got {}",
                self.bounds.half_extent
            )));
        }
        Ok(())
    }
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            big_radius: 20.0,
            weights: SteeringWeights::default(),
            bounds: Bounds::new(Vec3::ZERO, Vec3::splat(50.0)),
            sample_interval_ticks: 0,
        }
    }
}

// ── SpawnParams ───────────────────────────────────────────────────────────────

/// Per-group spawn parameters, used for both group creation and growth.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnParams {
    /// Center of the spawn cloud.
    pub origin: Vec3,

    /// New agents are jittered to a uniform point inside a sphere of this
    /// radius around `origin`.
    pub scatter_radius: f32,

    /// Forward translation speed, units per second.
    pub move_speed: f32,

    /// Maximum turn rate, degrees per second.
    pub rotation_speed_deg: f32,
}

impl SpawnParams {
    pub fn validate(&self) -> FlockResult<()> {
        if !self.origin.is_finite() {
            return Err(FlockError::Config("spawn origin must be finite".into()));
        }
        if !self.scatter_radius.is_finite() || self.scatter_radius < 0.0 {
            return Err(FlockError::Config(format!(
                "scatter_radius must be finite and non-negative, got {}",
                self.scatter_radius
            )));
        }
        if !self.move_speed.is_finite() || !self.rotation_speed_deg.is_finite() {
            return Err(FlockError::Config(
                "move_speed and rotation_speed_deg must be finite".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SpawnParams {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            scatter_radius: 2.0,
            move_speed: 1.0,
            rotation_speed_deg: 360.0,
        }
    }
}
