//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  The host application
//! owns the frame clock and supplies a (possibly varying) `delta_time` in
//! seconds with every tick; `SimClock` accumulates the elapsed simulated
//! seconds alongside the integer counter.  Using an integer tick as the
//! canonical unit means sampling arithmetic is exact (no floating-point
//! drift) and comparisons are O(1).

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Stored as `u64` to avoid overflow: at 60 ticks/second a u64 lasts ~9.7
/// billion years — longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the accumulated simulated seconds.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick — advanced once per simulation step.
    pub current_tick: Tick,
    /// Sum of all `delta_time` values seen so far, in seconds.
    pub elapsed_secs: f64,
}

impl SimClock {
    /// A clock at tick 0 with no elapsed time.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of `delta_time` seconds.
    #[inline]
    pub fn advance(&mut self, delta_time: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += delta_time as f64;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} s)", self.current_tick, self.elapsed_secs)
    }
}
