use approx::assert_relative_eq;
use chart_interact::core::{
    Axis, AxisOrientation, AxisRange, AxisViewport, PixelRect, ViewportManager, WheelDirection,
};

fn build_axis() -> Axis {
    Axis::linear(0.0, 100.0).expect("valid axis")
}

#[test]
fn zoom_clamps_request_to_full_range() {
    let mut axis = build_axis();

    assert!(ViewportManager::zoom(&mut axis, -10.0, 50.0));

    assert_eq!(axis.viewport(), AxisViewport::new(0.0, 50.0));
}

#[test]
fn zoom_orders_reversed_bounds() {
    let mut axis = build_axis();

    assert!(ViewportManager::zoom(&mut axis, 70.0, 20.0));

    assert_eq!(axis.viewport(), AxisViewport::new(20.0, 70.0));
}

#[test]
fn zero_width_zoom_is_rejected() {
    let mut axis = build_axis();

    assert!(!ViewportManager::zoom(&mut axis, 40.0, 40.0));

    assert_eq!(axis.viewport(), AxisViewport::new(0.0, 100.0));
}

#[test]
fn zoom_entirely_outside_range_is_rejected() {
    let mut axis = build_axis();
    assert!(!ViewportManager::zoom(&mut axis, 150.0, 200.0));
    assert!(!ViewportManager::zoom(&mut axis, f64::NAN, 20.0));
    assert!(!ViewportManager::zoom(&mut axis, 0.0, f64::INFINITY));
    assert!(!ViewportManager::is_zoomed(&axis));
}

#[test]
fn repeating_the_same_zoom_reports_no_change() {
    let mut axis = build_axis();
    assert!(ViewportManager::zoom(&mut axis, 10.0, 30.0));
    assert!(!ViewportManager::zoom(&mut axis, 10.0, 30.0));
}

#[test]
fn zoom_reset_restores_full_range() {
    let mut axis = build_axis();
    ViewportManager::zoom(&mut axis, 10.0, 30.0);

    assert!(ViewportManager::zoom_reset(&mut axis));
    assert!(!ViewportManager::zoom_reset(&mut axis));
    assert_eq!(axis.viewport(), AxisViewport::new(0.0, 100.0));
}

#[test]
fn scroll_shifts_by_fraction_of_width_and_stops_at_the_edge() {
    let mut axis = build_axis();
    ViewportManager::zoom(&mut axis, 20.0, 40.0);

    assert!(ViewportManager::scroll(&mut axis, 0.5));
    assert_relative_eq!(axis.viewport().visible_min, 30.0);
    assert_relative_eq!(axis.viewport().visible_max, 50.0);

    assert!(ViewportManager::scroll(&mut axis, 10.0));
    assert_relative_eq!(axis.viewport().visible_min, 80.0);
    assert_relative_eq!(axis.viewport().visible_max, 100.0);

    assert!(!ViewportManager::scroll(&mut axis, 1.0));
}

#[test]
fn scroll_is_a_noop_at_full_range() {
    let mut axis = build_axis();
    assert!(!ViewportManager::scroll(&mut axis, 0.3));
    assert_eq!(axis.viewport(), AxisViewport::new(0.0, 100.0));
}

#[test]
fn wheel_zoom_moves_each_edge_by_ten_percent() {
    let mut axis = build_axis();

    assert!(ViewportManager::wheel_zoom(&mut axis, WheelDirection::In));
    assert_relative_eq!(axis.viewport().visible_min, 10.0);
    assert_relative_eq!(axis.viewport().visible_max, 90.0);

    assert!(ViewportManager::wheel_zoom(&mut axis, WheelDirection::Out));
    assert_relative_eq!(axis.viewport().visible_min, 2.0);
    assert_relative_eq!(axis.viewport().visible_max, 98.0);
}

#[test]
fn wheel_zoom_out_at_full_range_changes_nothing() {
    let mut axis = build_axis();
    assert!(!ViewportManager::wheel_zoom(&mut axis, WheelDirection::Out));
}

#[test]
fn is_zoomed_tracks_strict_narrowing() {
    let mut axis = build_axis();
    assert!(!ViewportManager::is_zoomed(&axis));
    ViewportManager::zoom(&mut axis, 0.0, 99.0);
    assert!(ViewportManager::is_zoomed(&axis));
}

#[test]
fn prezoomed_viewport_must_lie_inside_the_range() {
    assert!(build_axis().with_viewport(10.0, 20.0).is_ok());
    assert!(build_axis().with_viewport(-1.0, 20.0).is_err());
    assert!(build_axis().with_viewport(30.0, 20.0).is_err());
    assert!(AxisRange::new(5.0, 1.0, false).is_err());
}

#[test]
fn mirror_zoom_keeps_secondary_on_the_same_pixels() {
    let plot = PixelRect::new(100.0, 50.0, 800.0, 400.0);
    let primary_before = build_axis();
    let mut primary_after = primary_before;
    ViewportManager::zoom(&mut primary_after, 25.0, 50.0);
    let mut secondary = Axis::linear(0.0, 1_000.0).expect("secondary axis");

    assert!(ViewportManager::mirror_zoom(
        &primary_before,
        &primary_after,
        &mut secondary,
        AxisOrientation::Horizontal,
        plot,
    ));

    assert_relative_eq!(secondary.viewport().visible_min, 250.0, epsilon = 1e-9);
    assert_relative_eq!(secondary.viewport().visible_max, 500.0, epsilon = 1e-9);
}

#[test]
fn mirror_zoom_resets_secondary_when_primary_returns_to_full_range() {
    let plot = PixelRect::new(0.0, 0.0, 400.0, 300.0);
    let mut primary_before = build_axis();
    ViewportManager::zoom(&mut primary_before, 10.0, 20.0);
    let primary_after = build_axis();
    let mut secondary = Axis::linear(0.0, 10.0)
        .expect("secondary axis")
        .with_viewport(1.0, 2.0)
        .expect("secondary window");

    assert!(ViewportManager::mirror_zoom(
        &primary_before,
        &primary_after,
        &mut secondary,
        AxisOrientation::Vertical,
        plot,
    ));
    assert_eq!(secondary.viewport(), AxisViewport::new(0.0, 10.0));
}
