//! Simulation observer trait for progress reporting and data collection.

use flock_agent::AgentStore;
use flock_core::Tick;

/// Callbacks invoked by [`Simulation::run_ticks`][crate::Simulation::run_ticks]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, _elapsed: f64, agents: usize) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {agents} agents");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after a tick is fully applied.
    ///
    /// `elapsed_secs` is the total simulated time including this tick;
    /// `agent_count` is the population after any growth applied this tick.
    fn on_tick_end(&mut self, _tick: Tick, _elapsed_secs: f64, _agent_count: usize) {}

    /// Called at sample intervals (every `config.sample_interval_ticks`
    /// ticks; never if that is 0).
    ///
    /// Provides read-only access to the full agent state so output writers
    /// can record a pose snapshot without the sim knowing about any specific
    /// output format.
    fn on_sample(&mut self, _tick: Tick, _agents: &AgentStore) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
