//! Property tests for the transform engine.

use proptest::prelude::*;
use turntable_core::Settings;
use turntable_engine::{TransformEngine, TransformState};

const FRAME: f64 = 1.0 / 60.0;

fn state() -> impl Strategy<Value = TransformState> {
    (-10.0f64..10.0, -10.0f64..10.0, 0.1f64..10.0).prop_map(|(rotation_x, rotation_y, scale)| {
        TransformState {
            rotation_x,
            rotation_y,
            scale,
        }
    })
}

proptest! {
    #[test]
    fn snaps_to_target_without_damping(
        start in state(),
        rx in -3.0f64..3.0,
        ry in -3.0f64..3.0,
        scale in 0.1f64..10.0,
        dt in 0.0f64..1.0,
    ) {
        let settings = Settings::new().with_damping(None).with_rotation(rx, ry).with_scale(scale);
        let state = TransformEngine::with_state(start).tick(&settings, dt);
        prop_assert_eq!(state, TransformState { rotation_x: rx, rotation_y: ry, scale });
    }

    #[test]
    fn damping_converges_monotonically(
        start in state(),
        rx in -3.0f64..3.0,
        ry in -3.0f64..3.0,
        scale in 0.1f64..10.0,
        factor in 0.05f64..0.99,
    ) {
        let settings = Settings::new()
            .with_damping(Some(factor))
            .with_rotation(rx, ry)
            .with_scale(scale);
        let mut engine = TransformEngine::with_state(start);
        let mut previous = engine.state();

        for _ in 0..2000 {
            let next = engine.tick(&settings, FRAME);
            for (before, after, target) in [
                (previous.rotation_x, next.rotation_x, rx),
                (previous.rotation_y, next.rotation_y, ry),
                (previous.scale, next.scale, scale),
            ] {
                // Never moves away from the target and never crosses it.
                prop_assert!((target - after).abs() <= (target - before).abs());
                prop_assert!((target - after) * (target - before) >= 0.0);
            }
            previous = next;
        }

        // The target is an exact fixed point.
        let target = TransformState { rotation_x: rx, rotation_y: ry, scale };
        prop_assert_eq!(engine.state(), target);
        prop_assert_eq!(engine.tick(&settings, FRAME), target);
    }

    #[test]
    fn auto_rotate_never_decreases_y(
        start in state(),
        speed in 0.0f64..20.0,
        min_y in -1.0f64..0.0,
        max_y in 0.0f64..1.0,
        ry in -3.0f64..3.0,
        damping in prop::option::of(0.01f64..1.0),
        frames in prop::collection::vec(0.0f64..0.1, 1..60),
    ) {
        let settings = Settings::new()
            .with_auto_rotate(Some(speed))
            .with_damping(damping)
            .with_rotation(0.0, ry)
            .with_rotation_y_bounds(min_y, max_y);
        let mut engine = TransformEngine::with_state(start);

        let mut previous = engine.state().rotation_y;
        for dt in frames {
            let y = engine.tick(&settings, dt).rotation_y;
            prop_assert!(y >= previous);
            previous = y;
        }
    }

    #[test]
    fn result_respects_x_and_scale_bounds(
        start in state(),
        rx in -5.0f64..5.0,
        min_x in -2.0f64..0.0,
        max_x in 0.0f64..2.0,
        scale in 0.01f64..50.0,
        damping in prop::option::of(0.01f64..1.0),
    ) {
        let settings = Settings::new()
            .with_damping(damping)
            .with_rotation(rx, 0.0)
            .with_rotation_x_bounds(min_x, max_x)
            .with_scale(scale);
        let state = TransformEngine::with_state(start).tick(&settings, FRAME);
        prop_assert!(state.rotation_x >= min_x && state.rotation_x <= max_x);
        prop_assert!(state.scale >= settings.min_scale && state.scale <= settings.max_scale);
    }
}
