use approx::assert_relative_eq;
use chart_interact::ChartError;
use chart_interact::api::{
    ChartAreaConfig, InteractionController, InteractionOptions, NumericFormat, SurfaceDescriptor,
};
use chart_interact::core::{
    AreaId, Axis, AxisGroup, AxisRange, AxisSet, AxisSlot, AxisValueKind, DataPoint, PercentRect,
    SeriesDescriptor, SeriesId, SeriesKind, SeriesTable, SurfaceId, Viewport,
};
use chart_interact::extensions::{EventLog, InteractionEvent};
use chart_interact::interaction::{CursorGlyph, CursorId, PointerButton, PointerEvent, ToolMode};

const MAIN: SeriesId = SeriesId(1);
const SECOND: SeriesId = SeriesId(2);

// Surface 1000x500, plot 100..900 x 50..450, both axes 0..100.
fn px(value: f64) -> f64 {
    100.0 + 8.0 * value
}

fn py(value: f64) -> f64 {
    450.0 - 4.0 * value
}

fn build_axes() -> AxisSet {
    AxisSet::new(
        Axis::linear(0.0, 100.0).expect("x axis"),
        Axis::linear(0.0, 100.0).expect("y axis"),
    )
}

fn build_area(axes: AxisSet) -> ChartAreaConfig {
    ChartAreaConfig::new(AreaId(1), PercentRect::full(), axes)
        .with_plot_bounds(PercentRect::new(10.0, 10.0, 80.0, 80.0))
        .with_series(SeriesDescriptor::new(MAIN, "main", SeriesKind::Line))
        .with_series(SeriesDescriptor::new(SECOND, "second", SeriesKind::Point))
}

fn build_controller_with(
    area: ChartAreaConfig,
    options: InteractionOptions,
) -> (InteractionController, EventLog) {
    let log = EventLog::new();
    let controller = InteractionController::new(
        SurfaceDescriptor::new(SurfaceId(7), Viewport::new(1000, 500)),
        vec![area],
        options,
    )
    .expect("controller init")
    .with_listener(Box::new(log.clone()));
    (controller, log)
}

fn build_controller() -> (InteractionController, EventLog) {
    build_controller_with(build_area(build_axes()), InteractionOptions::default())
}

fn build_data() -> SeriesTable {
    SeriesTable::new()
        .with_series(
            MAIN,
            vec![
                DataPoint::new(0.0, 0.0),
                DataPoint::new(2.5, 1.0),
                DataPoint::new(5.2, 4.9),
                DataPoint::new(7.0, 30.0),
                DataPoint::new(10.0, 10.0),
                DataPoint::new(100.0, 100.0),
            ],
        )
        .with_series(SECOND, vec![DataPoint::new(50.0, 50.0), DataPoint::new(60.0, 80.0)])
}

fn cursor_moves(log: &EventLog) -> usize {
    log.count(|event| matches!(event, InteractionEvent::CursorMoved(_)))
}

#[test]
fn select1_click_snaps_cursor1_to_nearest_sample() {
    let (mut controller, log) = build_controller();
    let data = build_data();

    controller.pointer_down(&data, PointerEvent::left(px(5.0), py(5.0)));

    let cursor = controller.cursor(CursorId::First);
    assert!(cursor.is_set());
    assert_relative_eq!(cursor.x, 5.2);
    assert_relative_eq!(cursor.y, 4.9);
    assert_eq!(cursor.series, Some(MAIN));
    assert_eq!(cursor.area, Some(AreaId(1)));
    assert_eq!(cursor.x_label, "5.2");
    assert_eq!(cursor.y_label, "4.9");
    assert_eq!(cursor_moves(&log), 1);
    assert!(!controller.cursor(CursorId::Second).is_set());
}

#[test]
fn select2_updates_only_cursor2() {
    let (mut controller, log) = build_controller();
    let data = build_data();
    controller.set_state(ToolMode::Select2);

    controller.pointer_down(&data, PointerEvent::left(px(9.0), py(11.0)));

    let cursor = controller.cursor(CursorId::Second);
    assert_relative_eq!(cursor.x, 10.0);
    assert_relative_eq!(cursor.y, 10.0);
    assert!(!controller.cursor(CursorId::First).is_set());
    assert_eq!(
        log.count(|event| matches!(event, InteractionEvent::SelectionChanged(_))),
        1
    );
    assert_eq!(cursor_moves(&log), 0);
}

#[test]
fn without_snapping_cursor_keeps_the_raw_value() {
    let options = InteractionOptions {
        snap_cursor_to_data: false,
        ..InteractionOptions::default()
    };
    let (mut controller, _log) = build_controller_with(build_area(build_axes()), options);

    controller.pointer_down(&build_data(), PointerEvent::left(px(5.0), py(5.0)));

    let cursor = controller.cursor(CursorId::First);
    assert_relative_eq!(cursor.x, 5.0);
    assert_relative_eq!(cursor.y, 5.0);
}

#[test]
fn series_on_a_default_secondary_axis_follows_primary_zoom() {
    let area = ChartAreaConfig::new(AreaId(1), PercentRect::full(), build_axes())
        .with_plot_bounds(PercentRect::new(10.0, 10.0, 80.0, 80.0))
        .with_series(
            SeriesDescriptor::new(MAIN, "main", SeriesKind::Line)
                .with_axes(AxisGroup::Primary, AxisGroup::Secondary),
        );
    let options = InteractionOptions {
        snap_cursor_to_data: false,
        ..InteractionOptions::default()
    };
    let (mut controller, _log) = build_controller_with(area, options);
    controller
        .zoom_axis(AreaId(1), AxisSlot::Y1, 0.0, 50.0)
        .expect("programmatic zoom");

    // Vertical middle of the plot.
    controller.pointer_down(&build_data(), PointerEvent::left(px(5.0), 250.0));

    let y2 = controller.area(AreaId(1)).expect("area").axes().y2.viewport();
    assert_relative_eq!(y2.visible_min, 0.0, epsilon = 1e-9);
    assert_relative_eq!(y2.visible_max, 50.0, epsilon = 1e-9);
    let cursor = controller.cursor(CursorId::First);
    assert_relative_eq!(cursor.x, 5.0, epsilon = 1e-9);
    assert_relative_eq!(cursor.y, 25.0, epsilon = 1e-9);
}

#[test]
fn reversed_x_axis_maps_the_left_edge_to_the_maximum() {
    let axes = AxisSet::new(
        Axis::new(AxisRange::new(0.0, 100.0, true).expect("reversed x range")),
        Axis::linear(0.0, 100.0).expect("y axis"),
    );
    let options = InteractionOptions {
        snap_cursor_to_data: false,
        ..InteractionOptions::default()
    };
    let (mut controller, _log) = build_controller_with(build_area(axes), options);

    // 80 px right of the left edge is a tenth of the plot width.
    controller.pointer_down(&build_data(), PointerEvent::left(180.0, py(5.0)));

    let cursor = controller.cursor(CursorId::First);
    assert_relative_eq!(cursor.x, 90.0, epsilon = 1e-9);
    assert_relative_eq!(cursor.y, 5.0, epsilon = 1e-9);
}

#[test]
fn click_outside_the_axis_range_is_ignored() {
    let (mut controller, log) = build_controller();

    controller.pointer_down(&build_data(), PointerEvent::left(50.0, 25.0));

    assert!(!controller.cursor(CursorId::First).is_set());
    assert_eq!(cursor_moves(&log), 0);
}

#[test]
fn click_outside_the_visible_window_is_ignored() {
    let axes = AxisSet::new(
        Axis::linear(0.0, 100.0)
            .expect("x axis")
            .with_viewport(50.0, 100.0)
            .expect("x window"),
        Axis::linear(0.0, 100.0).expect("y axis"),
    );
    let (mut controller, _log) =
        build_controller_with(build_area(axes), InteractionOptions::default());

    // Left of the plot: inside the X range, outside the visible window.
    controller.pointer_down(&build_data(), PointerEvent::left(90.0, py(50.0)));

    assert!(!controller.cursor(CursorId::First).is_set());
}

#[test]
fn right_button_does_not_place_a_cursor() {
    let (mut controller, _log) = build_controller();

    controller.pointer_down(
        &build_data(),
        PointerEvent::new(px(5.0), py(5.0), PointerButton::Right),
    );

    assert!(!controller.cursor(CursorId::First).is_set());
}

#[test]
fn area_without_samples_disables_interaction() {
    let (mut controller, log) = build_controller();
    let empty = SeriesTable::new()
        .with_series(MAIN, Vec::new())
        .with_series(SECOND, Vec::new());

    controller.pointer_down(&empty, PointerEvent::left(px(5.0), py(5.0)));

    assert!(!controller.is_interaction_enabled());
    assert_eq!(controller.glyph(), CursorGlyph::Arrow);
    assert!(!controller.cursor(CursorId::First).is_set());
    assert_eq!(cursor_moves(&log), 0);
}

#[test]
fn logarithmic_area_disables_interaction() {
    let axes = AxisSet::new(
        Axis::linear(0.0, 100.0).expect("x axis"),
        Axis::linear(1.0, 100.0)
            .expect("y axis")
            .with_logarithmic(true),
    );
    let (mut controller, _log) =
        build_controller_with(build_area(axes), InteractionOptions::default());

    controller.pointer_down(&build_data(), PointerEvent::left(px(5.0), py(5.0)));

    assert_eq!(controller.active_area(), Some(AreaId(1)));
    assert!(!controller.is_interaction_enabled());
    assert!(!controller.cursor(CursorId::First).is_set());
}

#[test]
fn chosen_series_overrides_the_default() {
    let (mut controller, _log) = build_controller();
    controller
        .select_series(CursorId::First, Some(SECOND))
        .expect("known series");

    controller.pointer_down(&build_data(), PointerEvent::left(px(55.0), py(70.0)));

    let cursor = controller.cursor(CursorId::First);
    assert_eq!(cursor.series, Some(SECOND));
    assert_relative_eq!(cursor.x, 60.0);
    assert_relative_eq!(cursor.y, 80.0);
}

#[test]
fn unknown_series_cannot_be_chosen() {
    let (mut controller, _log) = build_controller();

    let err = controller
        .select_series(CursorId::Second, Some(SeriesId(99)))
        .expect_err("unknown series must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn hidden_series_is_skipped_when_hiding_is_allowed() {
    let options = InteractionOptions {
        allow_hide_series: true,
        ..InteractionOptions::default()
    };
    let (mut controller, _log) = build_controller_with(build_area(build_axes()), options);

    let changed = controller
        .set_series_visible(AreaId(1), MAIN, false)
        .expect("visibility change");
    assert!(changed);
    controller.pointer_down(&build_data(), PointerEvent::left(px(5.0), py(5.0)));

    assert_eq!(controller.cursor(CursorId::First).series, Some(SECOND));
}

#[test]
fn series_visibility_is_locked_by_default() {
    let (mut controller, _log) = build_controller();

    let changed = controller
        .set_series_visible(AreaId(1), MAIN, false)
        .expect("locked visibility is not an error");

    assert!(!changed);
    assert!(controller.area(AreaId(1)).expect("area").series(MAIN).expect("series").visible);
}

#[test]
fn clear_cursor_resets_to_nan_and_notifies() {
    let (mut controller, log) = build_controller();
    controller.pointer_down(&build_data(), PointerEvent::left(px(5.0), py(5.0)));
    log.drain();

    controller.clear_cursor(CursorId::First);

    assert!(!controller.cursor(CursorId::First).is_set());
    let events = log.events();
    assert!(matches!(
        events.first(),
        Some(InteractionEvent::CursorMoved(snapshot)) if snapshot.x.is_nan()
    ));
}

#[test]
fn collapsed_axis_resets_the_cursor() {
    let axes = AxisSet::new(
        Axis::linear(5.0, 5.0).expect("single value x axis"),
        Axis::linear(0.0, 100.0).expect("y axis"),
    );
    let (mut controller, log) =
        build_controller_with(build_area(axes), InteractionOptions::default());

    controller.pointer_down(&build_data(), PointerEvent::left(px(5.0), py(5.0)));

    assert!(!controller.cursor(CursorId::First).is_set());
    assert_eq!(cursor_moves(&log), 1);
}

#[test]
fn categorical_axis_labels_use_host_categories() {
    let axes = AxisSet::new(
        Axis::linear(0.0, 4.0)
            .expect("category axis")
            .with_value_kind(AxisValueKind::Categorical),
        Axis::linear(0.0, 100.0).expect("y axis"),
    );
    let area = ChartAreaConfig::new(AreaId(1), PercentRect::full(), axes)
        .with_plot_bounds(PercentRect::new(10.0, 10.0, 80.0, 80.0))
        .with_series(SeriesDescriptor::new(MAIN, "sales", SeriesKind::Column));
    let (mut controller, _log) = build_controller_with(area, InteractionOptions::default());
    let mut data = SeriesTable::new();
    data.insert_categorical(
        MAIN,
        ["Jan", "Feb", "Mar", "Apr", "May"].map(str::to_owned).to_vec(),
        vec![10.0, 20.0, 30.0, 40.0, 50.0],
    );

    // 200 px per category; category 2 sits at x = 100 + 200 * 2.
    controller.pointer_down(&data, PointerEvent::left(500.0, py(30.0)));

    let cursor = controller.cursor(CursorId::First);
    assert_eq!(cursor.x_label, "Mar");
    assert_eq!(cursor.y_label, "30");
}

#[test]
fn date_time_axis_labels_follow_the_configured_pattern() {
    let axes = AxisSet::new(
        Axis::linear(0.0, 8_000.0)
            .expect("time axis")
            .with_value_kind(AxisValueKind::DateTime),
        Axis::linear(0.0, 100.0).expect("y axis"),
    );
    let area = ChartAreaConfig::new(AreaId(1), PercentRect::full(), axes)
        .with_plot_bounds(PercentRect::new(10.0, 10.0, 80.0, 80.0))
        .with_series(SeriesDescriptor::new(MAIN, "temperature", SeriesKind::Line));
    let options = InteractionOptions {
        date_time_format: "%Y-%m-%d %H:%M".to_owned(),
        ..InteractionOptions::default()
    };
    let (mut controller, _log) = build_controller_with(area, options);
    let data = SeriesTable::new().with_series(
        MAIN,
        vec![
            DataPoint::new(0.0, 10.0),
            DataPoint::new(3_600.0, 20.0),
            DataPoint::new(7_200.0, 30.0),
        ],
    );

    // x = 3600 s lands at 100 + 800 * 0.45.
    controller.pointer_down(&data, PointerEvent::left(460.0, py(20.0)));

    assert_eq!(controller.cursor(CursorId::First).x_label, "1970-01-01 01:00");
}

#[test]
fn label_affixes_and_numeric_format_apply() {
    let mut options = InteractionOptions::default();
    options.y1_label.prefix = "$".to_owned();
    options.y1_label.postfix = " USD".to_owned();
    options.y1_label.numeric_format = NumericFormat::Fixed(2);
    options.x1_label.visible = false;
    let (mut controller, _log) = build_controller_with(build_area(build_axes()), options);

    controller.pointer_down(&build_data(), PointerEvent::left(px(5.0), py(5.0)));

    let cursor = controller.cursor(CursorId::First);
    assert_eq!(cursor.x_label, "");
    assert_eq!(cursor.y_label, "$4.90 USD");
}
