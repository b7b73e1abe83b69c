use chart_interact::core::DataPoint;
use chart_interact::interaction::nearest_point_index;
use proptest::prelude::*;

#[test]
fn picks_the_closer_bracketing_sample() {
    let points = vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(2.5, 1.0),
        DataPoint::new(5.2, 4.9),
        DataPoint::new(7.0, 30.0),
        DataPoint::new(10.0, 10.0),
    ];

    assert_eq!(nearest_point_index(&points, DataPoint::new(5.0, 5.0)), Some(2));
}

#[test]
fn y_distance_can_favour_the_farther_x() {
    let points = vec![DataPoint::new(0.0, 100.0), DataPoint::new(10.0, 0.0)];

    assert_eq!(nearest_point_index(&points, DataPoint::new(4.0, 0.0)), Some(1));
}

#[test]
fn ties_go_to_the_lower_sample() {
    let points = vec![DataPoint::new(0.0, 0.0), DataPoint::new(2.0, 0.0)];

    assert_eq!(nearest_point_index(&points, DataPoint::new(1.0, 0.0)), Some(0));
}

#[test]
fn targets_outside_the_extent_snap_to_the_ends() {
    let points: Vec<DataPoint> = (0..10).map(|i| DataPoint::new(i as f64, 0.0)).collect();

    assert_eq!(nearest_point_index(&points, DataPoint::new(-5.0, 0.0)), Some(0));
    assert_eq!(nearest_point_index(&points, DataPoint::new(50.0, 0.0)), Some(9));
}

#[test]
fn irregular_spacing_is_handled_by_the_scan() {
    let mut points: Vec<DataPoint> = (0..100)
        .map(|i| DataPoint::new(i as f64 * 0.01, 0.0))
        .collect();
    points.push(DataPoint::new(1_000.0, 0.0));

    assert_eq!(nearest_point_index(&points, DataPoint::new(0.503, 0.0)), Some(50));
    assert_eq!(nearest_point_index(&points, DataPoint::new(900.0, 0.0)), Some(100));
}

#[test]
fn non_finite_target_snaps_nowhere() {
    let points = vec![DataPoint::new(0.0, 0.0)];
    assert_eq!(nearest_point_index(&points, DataPoint::new(f64::NAN, 0.0)), None);
}

proptest! {
    #[test]
    fn result_is_the_closer_of_the_bracketing_samples(
        steps in prop::collection::vec((0.1f64..10.0, -100.0f64..100.0), 2..200),
        target_fraction in 0.0f64..1.0,
        target_y in -100.0f64..100.0
    ) {
        let mut x = 0.0;
        let points: Vec<DataPoint> = steps
            .into_iter()
            .map(|(dx, y)| {
                x += dx;
                DataPoint::new(x, y)
            })
            .collect();
        let first = points[0].x;
        let last = points[points.len() - 1].x;
        let target = DataPoint::new(first + (last - first) * target_fraction, target_y);

        let lower = points.iter().rposition(|p| p.x <= target.x).unwrap_or(0);
        let upper = (lower + 1).min(points.len() - 1);
        let dist = |p: DataPoint| {
            let dx = p.x - target.x;
            let dy = p.y - target.y;
            dx * dx + dy * dy
        };
        let expected = if dist(points[upper]) < dist(points[lower]) { upper } else { lower };

        prop_assert_eq!(nearest_point_index(&points, target), Some(expected));
    }
}
