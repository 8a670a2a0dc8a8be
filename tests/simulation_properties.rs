#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

use canvas_backdrop::config::BackdropConfig;
use canvas_backdrop::models::{Category, Entity, Vec2};
use canvas_backdrop::render::{candidate_pairs, connection_opacity, pair_count};
use canvas_backdrop::simulation::{BoundaryPolicy, SimulationState, step};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const EPSILON: f64 = 1e-9;

fn to_case_error(e: canvas_backdrop::BackdropError) -> TestCaseError {
    TestCaseError::fail(e.to_string())
}

fn seeded(
    config: &BackdropConfig,
    width: f64,
    height: f64,
    seed: u64,
) -> Result<SimulationState, TestCaseError> {
    let mut rng = StdRng::seed_from_u64(seed);
    SimulationState::seed(config, width, height, &mut rng).map_err(to_case_error)
}

proptest! {
    /// Clamped entities stay on the surface after every step
    #[test]
    fn prop_clamped_entities_stay_in_bounds(
        seed in any::<u64>(),
        width in 10.0..2000.0f64,
        height in 10.0..2000.0f64,
        ticks in 1usize..300,
    ) {
        let mut state = seeded(&BackdropConfig::network(), width, height, seed)?;
        for _ in 0..ticks {
            let report = step(&mut state, BoundaryPolicy::ReflectAndClamp);
            prop_assert_eq!(report.overshoots, 0);
            for entity in state.entities() {
                prop_assert!((0.0..=width).contains(&entity.position.x));
                prop_assert!((0.0..=height).contains(&entity.position.y));
            }
        }
    }

    /// Unclamped entities never stray more than one tick of velocity outside
    #[test]
    fn prop_reflect_only_overshoot_is_bounded(
        seed in any::<u64>(),
        width in 10.0..2000.0f64,
        height in 10.0..2000.0f64,
        ticks in 1usize..300,
    ) {
        let mut state = seeded(&BackdropConfig::particles(), width, height, seed)?;
        for _ in 0..ticks {
            step(&mut state, BoundaryPolicy::Reflect);
            for entity in state.entities() {
                let Vec2 { x, y } = entity.position;
                prop_assert!(x >= -entity.velocity.x.abs() - EPSILON);
                prop_assert!(x <= width + entity.velocity.x.abs() + EPSILON);
                prop_assert!(y >= -entity.velocity.y.abs() - EPSILON);
                prop_assert!(y <= height + entity.velocity.y.abs() + EPSILON);
            }
        }
    }

    /// Seeding yields exactly the configured count, and stepping keeps it
    #[test]
    fn prop_entity_count_is_invariant(
        seed in any::<u64>(),
        count in 1usize..200,
        ticks in 0usize..100,
    ) {
        let config = BackdropConfig { count, ..BackdropConfig::particles() };
        let mut state = seeded(&config, 800.0, 600.0, seed)?;
        prop_assert_eq!(state.len(), count);
        for _ in 0..ticks {
            step(&mut state, config.boundary);
        }
        prop_assert_eq!(state.len(), count);
    }

    /// Speed is conserved; only signs change
    #[test]
    fn prop_step_preserves_speed(seed in any::<u64>(), ticks in 1usize..200) {
        let mut state = seeded(&BackdropConfig::network(), 300.0, 200.0, seed)?;
        let before: Vec<Vec2> = state.entities().iter().map(|e| e.velocity).collect();
        for _ in 0..ticks {
            step(&mut state, BoundaryPolicy::ReflectAndClamp);
        }
        for (entity, original) in state.entities().iter().zip(&before) {
            prop_assert!((entity.velocity.x.abs() - original.x.abs()).abs() < EPSILON);
            prop_assert!((entity.velocity.y.abs() - original.y.abs()).abs() < EPSILON);
        }
    }

    /// Candidate pairs: n(n-1)/2, ordered, no self or duplicate pairs
    #[test]
    fn prop_candidate_pairs_are_unique(n in 0usize..120) {
        let pairs: Vec<(usize, usize)> = candidate_pairs(n).collect();
        prop_assert_eq!(pairs.len(), n * n.saturating_sub(1) / 2);
        prop_assert_eq!(pairs.len(), pair_count(n));
        prop_assert!(pairs.iter().all(|(a, b)| a < b && *b < n));

        let mut deduped = pairs.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), pairs.len());
    }

    /// Opacity falls linearly from `base` at 0 toward 0 at the threshold
    #[test]
    fn prop_opacity_is_strictly_decreasing_and_linear(
        threshold in 1.0..500.0f64,
        base in 0.01..1.0f64,
        a in 0.0..1.0f64,
        b in 0.0..1.0f64,
    ) {
        prop_assume!((a - b).abs() > 1e-6);
        let (near, far) = if a < b { (a, b) } else { (b, a) };

        let near_opacity = connection_opacity(near * threshold, threshold, base);
        let far_opacity = connection_opacity(far * threshold, threshold, base);
        prop_assert!(matches!((near_opacity, far_opacity), (Some(n), Some(f)) if n > f));

        if let Some(opacity) = near_opacity {
            prop_assert!((opacity - base * (1.0 - near)).abs() < EPSILON);
        }
        prop_assert_eq!(connection_opacity(0.0, threshold, base), Some(base));
        prop_assert_eq!(connection_opacity(threshold, threshold, base), None);
    }

    /// An entity well inside the surface keeps its velocity
    #[test]
    fn prop_interior_step_leaves_velocity_alone(
        x in 10.0..90.0f64,
        y in 10.0..90.0f64,
        vx in -1.0..1.0f64,
        vy in -1.0..1.0f64,
    ) {
        let entity = Entity::new(Vec2::new(x, y), Vec2::new(vx, vy), 2.0, 0.5, Category::Node)
            .map_err(to_case_error)?;
        let mut state = SimulationState::from_entities(vec![entity], 100.0, 100.0)
            .map_err(to_case_error)?;

        let report = step(&mut state, BoundaryPolicy::Reflect);
        prop_assert_eq!(report.reflections, 0);
        prop_assert_eq!(state.entities()[0].velocity, Vec2::new(vx, vy));
    }
}
