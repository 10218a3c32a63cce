//! Unit tests for the kernel and dispatcher.

use flock_agent::AgentSnapshot;
use flock_core::{Bounds, FlockConfig, SteeringWeights, Vec3};

use crate::{SteerError, compute, dispatch};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn snap(position: Vec3, heading: Vec3) -> AgentSnapshot {
    AgentSnapshot { position, heading, desired_heading: Vec3::ZERO }
}

/// Config with generous bounds so the border force stays out of the way
/// unless a test wants it.
fn test_config(radius: f32, big_radius: f32) -> FlockConfig {
    FlockConfig {
        radius,
        big_radius,
        weights: SteeringWeights::default(),
        bounds: Bounds::new(Vec3::ZERO, Vec3::splat(1000.0)),
        sample_interval_ticks: 0,
    }
}

fn only(weight: &str) -> SteeringWeights {
    let mut w = SteeringWeights { cohesion: 0.0, separation: 0.0, alignment: 0.0, border: 0.0 };
    match weight {
        "cohesion" => w.cohesion = 1.0,
        "separation" => w.separation = 1.0,
        "alignment" => w.alignment = 1.0,
        "border" => w.border = 1.0,
        other => panic!("unknown weight {other}"),
    }
    w
}

// ── Kernel properties ─────────────────────────────────────────────────────────

#[cfg(test)]
mod kernel_tests {
    use super::*;

    #[test]
    fn deterministic_across_repeats_and_order() {
        let snapshots = vec![
            snap(Vec3::new(0.0, 0.0, 0.0), Vec3::X),
            snap(Vec3::new(1.0, 2.0, 0.5), Vec3::Y),
            snap(Vec3::new(-3.0, 1.0, 2.0), Vec3::Z),
        ];
        let config = test_config(2.0, 20.0);

        let first: Vec<Vec3> = (0..3).map(|i| compute(i, &snapshots, &config).unwrap()).collect();
        // Re-run in reverse order and repeatedly; every result must be
        // bit-identical.
        for _ in 0..3 {
            for i in (0..3).rev() {
                assert_eq!(compute(i, &snapshots, &config).unwrap(), first[i]);
            }
        }
    }

    #[test]
    fn lone_agent_in_bounds_gets_zero() {
        let snapshots = vec![snap(Vec3::new(1.0, 2.0, 3.0), Vec3::X)];
        let out = compute(0, &snapshots, &test_config(2.0, 20.0)).unwrap();
        assert_eq!(out, Vec3::ZERO);
    }

    #[test]
    fn out_of_range_neighbors_contribute_nothing() {
        // Second agent is beyond big_radius: all neighborhood forces must be
        // exactly zero, not merely small.
        let snapshots = vec![
            snap(Vec3::ZERO, Vec3::X),
            snap(Vec3::new(100.0, 0.0, 0.0), Vec3::Y),
        ];
        let out = compute(0, &snapshots, &test_config(2.0, 20.0)).unwrap();
        assert_eq!(out, Vec3::ZERO);
    }

    #[test]
    fn separation_points_away_from_close_neighbor() {
        let mut config = test_config(2.0, 20.0);
        config.weights = only("separation");
        let snapshots = vec![
            snap(Vec3::ZERO, Vec3::X),
            snap(Vec3::new(1.0, 0.0, 0.0), Vec3::X),
        ];
        let out = compute(0, &snapshots, &config).unwrap();
        // Pushed along -X, scaled by weight 1 and the final /4.
        assert!((out - Vec3::new(-0.25, 0.0, 0.0)).length() < 1e-6, "got {out}");
    }

    #[test]
    fn cohesion_points_toward_neighborhood_center() {
        let mut config = test_config(2.0, 20.0);
        config.weights = only("cohesion");
        let snapshots = vec![
            snap(Vec3::ZERO, Vec3::X),
            snap(Vec3::new(4.0, 0.0, 0.0), Vec3::X),
            snap(Vec3::new(4.0, 4.0, 0.0), Vec3::X),
        ];
        let out = compute(0, &snapshots, &config).unwrap();
        let expected = Vec3::new(4.0, 2.0, 0.0).normalize() / 4.0;
        assert!((out - expected).length() < 1e-6, "got {out}");
    }

    #[test]
    fn alignment_follows_neighbor_headings() {
        let mut config = test_config(2.0, 20.0);
        config.weights = only("alignment");
        let snapshots = vec![
            snap(Vec3::ZERO, Vec3::ZERO),
            snap(Vec3::new(3.0, 0.0, 0.0), Vec3::Y),
            snap(Vec3::new(0.0, 3.0, 0.0), Vec3::Y),
        ];
        let out = compute(0, &snapshots, &config).unwrap();
        assert!((out - Vec3::Y / 4.0).length() < 1e-6, "got {out}");
    }

    // The canonical three-agent arrangement: 0 and 1 inside both radii of
    // each other, 2 inside big_radius only.
    fn three_agents() -> Vec<AgentSnapshot> {
        vec![
            snap(Vec3::new(0.0, 0.0, 0.0), Vec3::X),
            snap(Vec3::new(1.0, 0.0, 0.0), Vec3::Y),
            snap(Vec3::new(10.0, 10.0, 10.0), Vec3::Z),
        ]
    }

    #[test]
    fn distant_agent_skips_separation() {
        let mut config = test_config(2.0, 20.0);
        config.weights = only("separation");

        let with_distant = compute(0, &three_agents(), &config).unwrap();
        let without_distant = compute(0, &three_agents()[..2], &config).unwrap();

        assert_ne!(with_distant, Vec3::ZERO, "agent 1 is inside radius");
        assert_eq!(
            with_distant, without_distant,
            "agent 2 is outside radius and must not alter separation"
        );
    }

    #[test]
    fn distant_agent_still_pulls_cohesion_and_alignment() {
        let mut config = test_config(2.0, 20.0);

        config.weights = only("cohesion");
        let coh_all = compute(0, &three_agents(), &config).unwrap();
        let coh_pair = compute(0, &three_agents()[..2], &config).unwrap();
        assert_ne!(coh_all, coh_pair, "agent 2 is inside big_radius");

        config.weights = only("alignment");
        let align_all = compute(0, &three_agents(), &config).unwrap();
        let align_pair = compute(0, &three_agents()[..2], &config).unwrap();
        assert_ne!(align_all, align_pair);
    }

    #[test]
    fn self_never_contributes() {
        // A lone agent with a wild heading: if it counted itself, alignment
        // and cohesion would be nonzero.
        let snapshots = vec![snap(Vec3::new(5.0, 5.0, 5.0), Vec3::new(0.0, 1.0, 0.0))];
        let out = compute(0, &snapshots, &test_config(10.0, 100.0)).unwrap();
        assert_eq!(out, Vec3::ZERO);
    }

    #[test]
    fn mirrored_pair_produces_negated_headings() {
        let config = test_config(10.0, 20.0);
        let snapshots = vec![
            snap(Vec3::new(3.0, 0.0, 0.0), Vec3::Y),
            snap(Vec3::new(-3.0, 0.0, 0.0), -Vec3::Y),
        ];
        let out0 = compute(0, &snapshots, &config).unwrap();
        let out1 = compute(1, &snapshots, &config).unwrap();
        assert!((out0 + out1).length() < 1e-6, "expected mirror symmetry: {out0} vs {out1}");
    }

    #[test]
    fn coincident_agents_share_cohesion_but_skip_separation() {
        // Two distinct agents at the same point: the inverse-square
        // separation term is undefined at d == 0 and must be skipped, but
        // index-based exclusion keeps them visible to each other otherwise.
        let config = test_config(2.0, 20.0);
        let snapshots = vec![
            snap(Vec3::ZERO, Vec3::X),
            snap(Vec3::ZERO, Vec3::Y),
        ];
        let out = compute(0, &snapshots, &config).unwrap();
        assert!(out.is_finite(), "coincident agents must not produce NaN: {out}");
        // Alignment toward the other's heading survives.
        assert_ne!(out, Vec3::ZERO);
    }

    #[test]
    fn border_force_pulls_toward_center() {
        let mut config = test_config(2.0, 20.0);
        config.bounds = Bounds::new(Vec3::ZERO, Vec3::splat(50.0));
        config.weights = only("border");
        config.weights.border = 2.0;

        let snapshots = vec![snap(Vec3::new(60.0, 0.0, 0.0), Vec3::X)];
        let out = compute(0, &snapshots, &config).unwrap();
        assert!((out - Vec3::new(-0.5, 0.0, 0.0)).length() < 1e-6, "got {out}");
    }

    #[test]
    fn inside_bounds_has_zero_border_force() {
        let mut config = test_config(2.0, 20.0);
        config.bounds = Bounds::new(Vec3::ZERO, Vec3::splat(50.0));
        config.weights = only("border");

        let snapshots = vec![snap(Vec3::new(49.0, -49.0, 0.0), Vec3::X)];
        assert_eq!(compute(0, &snapshots, &config).unwrap(), Vec3::ZERO);
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        let snapshots = vec![
            snap(Vec3::ZERO, Vec3::X),
            snap(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X),
        ];
        let err = compute(1, &snapshots, &test_config(2.0, 20.0)).unwrap_err();
        assert_eq!(err, SteerError::MalformedSnapshot { agent: 1 });
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn matches_per_index_compute() {
        let snapshots: Vec<AgentSnapshot> = (0..40)
            .map(|i| snap(Vec3::new(i as f32 * 1.5, (i % 7) as f32, 0.0), Vec3::X))
            .collect();
        let config = test_config(3.0, 15.0);

        let mut outputs = vec![Vec3::ZERO; snapshots.len()];
        dispatch(&snapshots, &mut outputs, &config).unwrap();

        for (i, &out) in outputs.iter().enumerate() {
            assert_eq!(out, compute(i, &snapshots, &config).unwrap(), "index {i}");
        }
    }

    #[test]
    fn empty_population_is_a_noop() {
        let mut outputs: Vec<Vec3> = Vec::new();
        dispatch(&[], &mut outputs, &test_config(2.0, 20.0)).unwrap();
    }

    #[test]
    #[should_panic(expected = "one slot per snapshot")]
    fn mismatched_output_length_panics() {
        let snapshots = vec![snap(Vec3::ZERO, Vec3::X)];
        let mut outputs = vec![Vec3::ZERO; 2];
        let _ = dispatch(&snapshots, &mut outputs, &test_config(2.0, 20.0));
    }

    #[test]
    fn malformed_input_fails_the_whole_dispatch() {
        let mut snapshots: Vec<AgentSnapshot> = (0..100)
            .map(|i| snap(Vec3::new(i as f32, 0.0, 0.0), Vec3::X))
            .collect();
        snapshots[57].position.y = f32::INFINITY;

        let mut outputs = vec![Vec3::ZERO; snapshots.len()];
        let err = dispatch(&snapshots, &mut outputs, &test_config(2.0, 20.0)).unwrap_err();
        assert_eq!(err, SteerError::MalformedSnapshot { agent: 57 });
    }
}
