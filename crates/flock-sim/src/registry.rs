//! Group ownership and population growth.
//!
//! `GroupRegistry` is the only place agents come into existence.  Creation
//! happens immediately (setup time); growth is *queued* and drained by the
//! tick loop at the next tick boundary, so the agent arrays never resize
//! while a dispatch is in flight.

use flock_agent::{AgentInit, AgentStore};
use flock_core::{AgentId, AgentRng, FlockError, FlockResult, GroupId, SpawnParams};

/// A named, ordered, append-only collection of agents.
pub struct Group {
    pub id: GroupId,
    /// Spawn parameters; reused verbatim when the group grows.
    pub params: SpawnParams,
    members: Vec<AgentId>,
}

impl Group {
    /// Member IDs in spawn order.  Growth appends; existing members never
    /// move.
    pub fn members(&self) -> &[AgentId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A grow request waiting for the next tick boundary.
struct PendingGrowth {
    group: GroupId,
    count: usize,
}

/// Owns all groups and the growth queue.
pub struct GroupRegistry {
    /// Global RNG seed; combined with each agent's global index for spawn
    /// jitter, so later growth never perturbs earlier spawns.
    seed: u64,
    groups: Vec<Group>,
    pending: Vec<PendingGrowth>,
}

impl GroupRegistry {
    pub fn new(seed: u64) -> Self {
        Self { seed, groups: Vec::new(), pending: Vec::new() }
    }

    /// Allocate a new group of `count` agents, appended to `store`.
    ///
    /// Each agent spawns at a uniform point inside the scatter sphere around
    /// `params.origin`, with a random unit heading and a zero desired
    /// heading.
    pub fn create_group(
        &mut self,
        store: &mut AgentStore,
        count: usize,
        params: SpawnParams,
    ) -> GroupId {
        let id = GroupId(self.groups.len() as u16);
        let mut group = Group { id, params, members: Vec::with_capacity(count) };
        spawn_into(&mut group, store, count, self.seed);
        self.groups.push(group);
        id
    }

    /// Queue `count` more agents for `group`, applied at the next tick
    /// boundary.  Until then the request is invisible to every accessor.
    pub fn grow_group(&mut self, group: GroupId, count: usize) -> FlockResult<()> {
        if group.index() >= self.groups.len() {
            return Err(FlockError::GroupNotFound(group));
        }
        if count > 0 {
            self.pending.push(PendingGrowth { group, count });
        }
        Ok(())
    }

    /// Drain the growth queue, appending agents to `store` in request order.
    /// Returns the number of agents added.
    ///
    /// Called by the tick loop before the snapshot rebuild — never while a
    /// dispatch is in flight.
    pub fn apply_pending(&mut self, store: &mut AgentStore) -> usize {
        let seed = self.seed;
        let mut added = 0;
        for request in self.pending.drain(..) {
            let group = &mut self.groups[request.group.index()];
            spawn_into(group, store, request.count, seed);
            added += request.count;
        }
        added
    }

    /// Number of grow requests waiting for the next tick.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.index())
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Append `count` fresh agents to `store` and register them in `group`.
///
/// Each agent's spawn RNG is seeded from the run seed and its *global*
/// index, which keeps every spawn reproducible regardless of how the
/// population grew to that point.
fn spawn_into(group: &mut Group, store: &mut AgentStore, count: usize, seed: u64) {
    for _ in 0..count {
        let agent = AgentId(store.count as u32);
        let mut rng = AgentRng::new(seed, agent);

        let position = group.params.origin + rng.point_in_sphere(group.params.scatter_radius);
        let heading = rng.unit_vector();

        let id = store.push(AgentInit {
            position,
            heading,
            move_speed: group.params.move_speed,
            rotation_speed_deg: group.params.rotation_speed_deg,
            group: group.id,
        });
        group.members.push(id);
    }
}
