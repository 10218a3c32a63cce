//! Fluent builder for constructing a [`Simulation`].

use flock_agent::{AgentStore, SnapshotBuffer};
use flock_core::{FlockConfig, SimClock, SpawnParams};

use crate::registry::GroupRegistry;
use crate::{SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// All configuration errors surface from [`build`](Self::build) — a
/// constructed `Simulation` is guaranteed valid, and [`Simulation::tick`]
/// can never hit one.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimulationBuilder::new(FlockConfig::default(), 42)
///     .group(20, SpawnParams::default())
///     .group(20, SpawnParams { origin: Vec3::new(30.0, 0.0, 0.0), ..SpawnParams::default() })
///     .build()?;
/// ```
pub struct SimulationBuilder {
    config: FlockConfig,
    seed: u64,
    groups: Vec<(usize, SpawnParams)>,
}

impl SimulationBuilder {
    /// Create a builder with the run's configuration and master RNG seed.
    ///
    /// The same seed always produces the same spawn layout.
    pub fn new(config: FlockConfig, seed: u64) -> Self {
        Self { config, seed, groups: Vec::new() }
    }

    /// Add an initial group of `count` agents.  May be called repeatedly;
    /// groups are created in call order.  More groups can also be added
    /// after construction via [`Simulation::create_group`].
    pub fn group(mut self, count: usize, params: SpawnParams) -> Self {
        self.groups.push((count, params));
        self
    }

    /// Validate all inputs and construct a ready-to-tick [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        self.config.validate()?;
        for (_, params) in &self.groups {
            params.validate()?;
        }

        let mut agents = AgentStore::new();
        let mut registry = GroupRegistry::new(self.seed);
        for (count, params) in self.groups {
            registry.create_group(&mut agents, count, params);
        }

        Ok(Simulation {
            config: self.config,
            clock: SimClock::new(),
            agents,
            registry,
            buffer: SnapshotBuffer::new(),
        })
    }
}
