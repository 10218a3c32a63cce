//! The `Simulation` struct and its tick loop.

use flock_agent::{AgentStore, SnapshotBuffer};
use flock_core::{AgentId, FlockConfig, GroupId, SimClock, SpawnParams, Tick, Vec3};

use crate::integrator;
use crate::observer::SimObserver;
use crate::registry::GroupRegistry;
use crate::SimResult;

/// The main simulation runner.
///
/// Holds all simulation state and drives the tick loop described in the
/// crate docs.  Create via [`SimulationBuilder`][crate::SimulationBuilder];
/// once built, the simulation is Running and ticks for as long as the host
/// keeps calling [`tick`](Self::tick) — there is no terminal state.
pub struct Simulation {
    /// Behavioral configuration.  Private so replacement always goes through
    /// the validating [`set_config`](Self::set_config).
    pub(crate) config: FlockConfig,

    /// Tick counter and accumulated simulated seconds.
    pub clock: SimClock,

    /// All agent state (SoA arrays).  Only the registry appends to it; only
    /// the integrator mutates poses.
    pub(crate) agents: AgentStore,

    /// Group ownership and the queued-growth command list.
    pub(crate) registry: GroupRegistry,

    /// The kernel's double buffer, reused across ticks.
    pub(crate) buffer: SnapshotBuffer,
}

impl Simulation {
    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the whole flock by one step of `dt` seconds.
    ///
    /// On error the tick is not applied: queued growth from *before* the
    /// call has already landed (it precedes the dispatch), but no agent's
    /// pose or desired heading changes.
    pub fn tick(&mut self, dt: f32) -> SimResult<()> {
        // ── Phase 1: apply queued growth (the only place the store resizes)
        self.registry.apply_pending(&mut self.agents);

        // ── Phase 2: rebuild the double buffer from live state ────────────
        self.buffer.rebuild(&self.agents);

        // ── Phase 3: fan the kernel out over all indices and join ─────────
        //
        // Explicit field borrows so the borrow checker sees disjoint access:
        // config is shared, the buffer is split into its read-only input and
        // write-only output sides.
        let config = &self.config;
        let (snapshots, outputs) = self.buffer.split();
        flock_steer::dispatch(snapshots, outputs, config)?;

        // ── Phase 4: integrate, ascending index, whole-array-or-nothing ───
        integrator::integrate_all(&mut self.agents, self.buffer.outputs(), dt);

        // ── Phase 5: advance the clock ────────────────────────────────────
        self.clock.advance(dt);
        Ok(())
    }

    /// Run exactly `n` ticks of `dt` seconds each, with observer callbacks.
    ///
    /// Stops at the first failed tick and propagates its error.
    pub fn run_ticks<O: SimObserver>(
        &mut self,
        n: u64,
        dt: f32,
        observer: &mut O,
    ) -> SimResult<()> {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            self.tick(dt)?;
            observer.on_tick_end(now, self.clock.elapsed_secs, self.agents.count);

            let interval = self.config.sample_interval_ticks;
            if interval > 0 && now.0.is_multiple_of(interval) {
                observer.on_sample(now, &self.agents);
            }
        }
        Ok(())
    }

    // ── Group management ──────────────────────────────────────────────────

    /// Allocate a new group of `count` agents, effective immediately.
    ///
    /// Meant for setup between ticks; the returned handle is stable for the
    /// lifetime of the simulation.
    pub fn create_group(&mut self, count: usize, params: SpawnParams) -> GroupId {
        self.registry.create_group(&mut self.agents, count, params)
    }

    /// Queue `count` additional agents for `group`.
    ///
    /// The growth lands at the start of the next [`tick`](Self::tick);
    /// until then `agent_count` and all accessors see the old population.
    pub fn grow_group(&mut self, group: GroupId, count: usize) -> SimResult<()> {
        self.registry.grow_group(group, count)?;
        Ok(())
    }

    // ── Configuration ─────────────────────────────────────────────────────

    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    /// Replace the configuration between ticks.  Validation happens here so
    /// a bad value can never surface mid-tick.
    pub fn set_config(&mut self, config: FlockConfig) -> SimResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // ── Read accessors (for renderers and hosts) ──────────────────────────

    /// Total number of agents across all groups.
    pub fn agent_count(&self) -> usize {
        self.agents.count
    }

    /// Read-only view of all agent state.
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    /// Read-only view of the group registry.
    pub fn registry(&self) -> &GroupRegistry {
        &self.registry
    }

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.agents.position(agent)
    }

    #[inline]
    pub fn heading(&self, agent: AgentId) -> Vec3 {
        self.agents.heading(agent)
    }

    /// The current tick (the number of fully applied steps so far).
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }
}
