//! Core agent storage: `AgentStore` (SoA data).
//!
//! # Why SoA?
//!
//! The steering kernel touches every agent's position and heading for every
//! other agent, every tick.  Keeping each attribute in its own dense `Vec`
//! makes that scan a linear walk over contiguous memory instead of a pointer
//! chase through per-agent objects.

use flock_core::{AgentId, GroupId, Vec3};

/// Initial state for one freshly spawned agent.
///
/// Produced by the group registry; the desired heading always starts at zero
/// (nothing has been computed for the agent yet).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentInit {
    pub position: Vec3,
    pub heading: Vec3,
    pub move_speed: f32,
    pub rotation_speed_deg: f32,
    pub group: GroupId,
}

/// Structure-of-Arrays storage for all agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.position[agent.index()];  // O(1), cache-friendly
/// ```
///
/// The store is append-only: agents are added by the group registry and never
/// removed during a run.
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// World position.
    pub position: Vec<Vec3>,

    /// Current forward direction.  Unit-length, or zero for "no heading yet".
    pub heading: Vec<Vec3>,

    /// The steering output applied last tick, carried into the next tick's
    /// snapshot as input bias.
    pub desired_heading: Vec<Vec3>,

    /// Forward translation speed, units per second.
    pub move_speed: Vec<f32>,

    /// Maximum turn rate, degrees per second.
    pub rotation_speed_deg: Vec<f32>,

    /// Owning group of each agent.
    pub group_id: Vec<GroupId>,
}

impl AgentStore {
    /// An empty store; the group registry fills it.
    pub fn new() -> Self {
        Self {
            count: 0,
            position: Vec::new(),
            heading: Vec::new(),
            desired_heading: Vec::new(),
            move_speed: Vec::new(),
            rotation_speed_deg: Vec::new(),
            group_id: Vec::new(),
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Append one agent, returning its new ID.
    pub fn push(&mut self, init: AgentInit) -> AgentId {
        let id = AgentId(self.count as u32);
        self.position.push(init.position);
        self.heading.push(init.heading);
        self.desired_heading.push(Vec3::ZERO);
        self.move_speed.push(init.move_speed);
        self.rotation_speed_deg.push(init.rotation_speed_deg);
        self.group_id.push(init.group);
        self.count += 1;
        id
    }

    // ── Read accessors (consumed by renderers and output writers) ─────────

    #[inline]
    pub fn position(&self, agent: AgentId) -> Vec3 {
        self.position[agent.index()]
    }

    #[inline]
    pub fn heading(&self, agent: AgentId) -> Vec3 {
        self.heading[agent.index()]
    }

    #[inline]
    pub fn desired_heading(&self, agent: AgentId) -> Vec3 {
        self.desired_heading[agent.index()]
    }
}

impl Default for AgentStore {
    fn default() -> Self {
        Self::new()
    }
}
