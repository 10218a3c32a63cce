//! Per-tick immutable snapshots and the double-buffered kernel workspace.

use flock_core::Vec3;

use crate::store::AgentStore;

/// Immutable-per-tick record of one agent, the steering kernel's only view
/// of the world.
///
/// Rebuilt fresh every tick from live store state; read-only for the whole
/// parallel phase.  `heading` is unit-length or zero ("no heading yet");
/// `desired_heading` is the previous tick's kernel output.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub position: Vec3,
    pub heading: Vec3,
    pub desired_heading: Vec3,
}

/// The kernel's double buffer: a read-only input array of snapshots and a
/// write-only output array with exactly one slot per agent.
///
/// Disjoint-ownership discipline: during a dispatch the input side is shared
/// read-only across workers while each index owns exactly one output slot,
/// so no locking is needed — only the join barrier the dispatcher provides.
///
/// Reused across ticks; [`rebuild`](Self::rebuild) resizes both sides to the
/// current agent count, which is how population growth reaches the kernel.
pub struct SnapshotBuffer {
    input: Vec<AgentSnapshot>,
    output: Vec<Vec3>,
}

impl SnapshotBuffer {
    pub fn new() -> Self {
        Self { input: Vec::new(), output: Vec::new() }
    }

    /// Number of agents in the buffer (input and output are always the same
    /// length).
    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// Refill the input side from live store state and zero the output side,
    /// resizing both to `store.count`.
    ///
    /// Must only run between ticks — never while a dispatch is in flight.
    pub fn rebuild(&mut self, store: &AgentStore) {
        self.input.clear();
        self.input.reserve(store.count);
        for i in 0..store.count {
            self.input.push(AgentSnapshot {
                position: store.position[i],
                heading: store.heading[i],
                desired_heading: store.desired_heading[i],
            });
        }

        self.output.clear();
        self.output.resize(store.count, Vec3::ZERO);
    }

    /// Read-only snapshot array.
    #[inline]
    pub fn snapshots(&self) -> &[AgentSnapshot] {
        &self.input
    }

    /// Completed kernel outputs, one desired heading per agent index.
    #[inline]
    pub fn outputs(&self) -> &[Vec3] {
        &self.output
    }

    /// Both sides at once: the shared input and the exclusive output the
    /// dispatcher writes into.
    #[inline]
    pub fn split(&mut self) -> (&[AgentSnapshot], &mut [Vec3]) {
        (&self.input, &mut self.output)
    }
}

impl Default for SnapshotBuffer {
    fn default() -> Self {
        Self::new()
    }
}
