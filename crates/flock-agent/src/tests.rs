//! Unit tests for flock-agent.

use flock_core::{AgentId, GroupId, Vec3};

use crate::{AgentInit, AgentStore, SnapshotBuffer};

fn init_at(x: f32) -> AgentInit {
    AgentInit {
        position: Vec3::new(x, 0.0, 0.0),
        heading: Vec3::Z,
        move_speed: 1.0,
        rotation_speed_deg: 360.0,
        group: GroupId(0),
    }
}

#[cfg(test)]
mod store {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = AgentStore::new();
        assert!(store.is_empty());
        assert_eq!(store.agent_ids().count(), 0);
    }

    #[test]
    fn push_assigns_ascending_ids() {
        let mut store = AgentStore::new();
        assert_eq!(store.push(init_at(0.0)), AgentId(0));
        assert_eq!(store.push(init_at(1.0)), AgentId(1));
        assert_eq!(store.count, 2);
        assert_eq!(store.position.len(), 2);
        assert_eq!(store.heading.len(), 2);
        assert_eq!(store.desired_heading.len(), 2);
        assert_eq!(store.move_speed.len(), 2);
        assert_eq!(store.rotation_speed_deg.len(), 2);
        assert_eq!(store.group_id.len(), 2);
    }

    #[test]
    fn desired_heading_starts_zero() {
        let mut store = AgentStore::new();
        let id = store.push(init_at(3.0));
        assert_eq!(store.desired_heading(id), Vec3::ZERO);
    }

    #[test]
    fn accessors_match_arrays() {
        let mut store = AgentStore::new();
        let id = store.push(init_at(7.0));
        assert_eq!(store.position(id), Vec3::new(7.0, 0.0, 0.0));
        assert_eq!(store.heading(id), Vec3::Z);
    }
}

#[cfg(test)]
mod snapshot {
    use super::*;

    #[test]
    fn rebuild_copies_store_state() {
        let mut store = AgentStore::new();
        store.push(init_at(1.0));
        store.push(init_at(2.0));
        store.desired_heading[1] = Vec3::Y;

        let mut buf = SnapshotBuffer::new();
        buf.rebuild(&store);

        assert_eq!(buf.len(), 2);
        assert_eq!(buf.snapshots()[0].position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(buf.snapshots()[1].desired_heading, Vec3::Y);
        assert!(buf.outputs().iter().all(|&v| v == Vec3::ZERO));
    }

    #[test]
    fn rebuild_tracks_growth() {
        let mut store = AgentStore::new();
        store.push(init_at(0.0));

        let mut buf = SnapshotBuffer::new();
        buf.rebuild(&store);
        assert_eq!(buf.len(), 1);

        for i in 0..5 {
            store.push(init_at(i as f32));
        }
        buf.rebuild(&store);
        assert_eq!(buf.len(), 6);
        assert_eq!(buf.outputs().len(), 6);
    }

    #[test]
    fn rebuild_zeroes_stale_outputs() {
        let mut store = AgentStore::new();
        store.push(init_at(0.0));

        let mut buf = SnapshotBuffer::new();
        buf.rebuild(&store);
        let (_, out) = buf.split();
        out[0] = Vec3::X;

        buf.rebuild(&store);
        assert_eq!(buf.outputs()[0], Vec3::ZERO);
    }
}
