use chart_interact::core::{Axis, ViewportManager, WheelDirection};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Zoom(f64, f64),
    Scroll(f64),
    WheelIn,
    WheelOut,
    Reset,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-500.0f64..1_500.0, -500.0f64..1_500.0).prop_map(|(a, b)| Op::Zoom(a, b)),
        (-3.0f64..3.0).prop_map(Op::Scroll),
        Just(Op::WheelIn),
        Just(Op::WheelOut),
        Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn viewport_stays_inside_range_under_any_sequence(
        minimum in -1_000.0f64..0.0,
        span in 1.0f64..2_000.0,
        ops in prop::collection::vec(op(), 1..40)
    ) {
        let maximum = minimum + span;
        let mut axis = Axis::linear(minimum, maximum).expect("valid axis");

        for op in ops {
            match op {
                Op::Zoom(a, b) => { ViewportManager::zoom(&mut axis, a, b); }
                Op::Scroll(fraction) => { ViewportManager::scroll(&mut axis, fraction); }
                Op::WheelIn => { ViewportManager::wheel_zoom(&mut axis, WheelDirection::In); }
                Op::WheelOut => { ViewportManager::wheel_zoom(&mut axis, WheelDirection::Out); }
                Op::Reset => { ViewportManager::zoom_reset(&mut axis); }
            }

            let viewport = axis.viewport();
            prop_assert!(minimum <= viewport.visible_min);
            prop_assert!(viewport.visible_min <= viewport.visible_max);
            prop_assert!(viewport.visible_max <= maximum);
        }
    }

    #[test]
    fn zoom_is_idempotent(
        a in -200.0f64..300.0,
        b in -200.0f64..300.0
    ) {
        let mut axis = Axis::linear(0.0, 100.0).expect("valid axis");
        ViewportManager::zoom(&mut axis, a, b);
        let first = axis.viewport();
        prop_assert!(!ViewportManager::zoom(&mut axis, a, b));
        prop_assert_eq!(axis.viewport(), first);
    }

    #[test]
    fn scroll_preserves_window_width(
        start in 0.0f64..50.0,
        width in 1.0f64..50.0,
        fraction in -5.0f64..5.0
    ) {
        let mut axis = Axis::linear(0.0, 100.0).expect("valid axis");
        ViewportManager::zoom(&mut axis, start, start + width);
        let before = axis.viewport().width();
        ViewportManager::scroll(&mut axis, fraction);
        prop_assert!((axis.viewport().width() - before).abs() <= 1e-9);
    }
}
