use chart_interact::core::{DataPoint, reduce, reduce_indices};

fn points(raw: &[(f64, f64)]) -> Vec<DataPoint> {
    raw.iter().map(|&(x, y)| DataPoint::new(x, y)).collect()
}

#[test]
fn fixed_buckets_pick_the_largest_triangle() {
    let input = points(&[(0.0, 0.0), (1.0, 5.0), (2.0, 1.0), (3.0, 9.0), (4.0, 2.0)]);

    let reduced = reduce(&input, 3, false);

    assert_eq!(reduced, points(&[(0.0, 0.0), (3.0, 9.0), (4.0, 2.0)]));
}

#[test]
fn short_input_is_returned_unchanged() {
    let input = points(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
    assert_eq!(reduce(&input, 10, true), input);
    assert_eq!(reduce(&input, 1, false), input);
    assert_eq!(reduce(&input, 0, true), input);
}

#[test]
fn input_of_exactly_target_length_keeps_every_point() {
    let input: Vec<DataPoint> = (0..8).map(|i| DataPoint::new(i as f64, (i * i) as f64)).collect();
    assert_eq!(reduce(&input, 8, false), input);
    assert_eq!(reduce(&input, 8, true), input);
}

#[test]
fn two_point_target_keeps_only_the_endpoints() {
    let input: Vec<DataPoint> = (0..50).map(|i| DataPoint::new(i as f64, (i % 7) as f64)).collect();
    let reduced = reduce(&input, 2, true);
    assert_eq!(reduced, vec![input[0], input[49]]);
}

#[test]
fn spike_survives_reduction() {
    let mut input: Vec<DataPoint> = (0..1_000).map(|i| DataPoint::new(i as f64, 0.0)).collect();
    input[613].y = 250.0;

    let fixed = reduce_indices(&input, 50, false);
    let dynamic = reduce_indices(&input, 50, true);

    assert!(fixed.contains(&613));
    assert!(dynamic.contains(&613));
}

#[test]
fn dynamic_buckets_follow_x_density() {
    // Dense cluster at the start, sparse tail.
    let mut input: Vec<DataPoint> = (0..90).map(|i| DataPoint::new(i as f64 * 0.01, 1.0)).collect();
    input.extend((1..=10).map(|i| DataPoint::new(i as f64 * 10.0, (i % 2) as f64)));

    let fixed = reduce_indices(&input, 12, false);
    let dynamic = reduce_indices(&input, 12, true);

    let sparse_fixed = fixed.iter().filter(|&&idx| idx >= 90).count();
    let sparse_dynamic = dynamic.iter().filter(|&&idx| idx >= 90).count();
    assert!(sparse_dynamic > sparse_fixed);
}

#[test]
fn collapsed_x_domain_falls_back_to_index_buckets() {
    let input: Vec<DataPoint> = (0..20).map(|i| DataPoint::new(3.0, i as f64)).collect();

    assert_eq!(reduce(&input, 5, true), reduce(&input, 5, false));
}

#[test]
fn reduced_output_is_in_source_order() {
    let input: Vec<DataPoint> = (0..500)
        .map(|i| DataPoint::new(i as f64 * 0.5, ((i as f64) * 0.37).sin() * 40.0))
        .collect();

    let indices = reduce_indices(&input, 64, true);

    assert!(indices.len() <= 64);
    assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(indices.first(), Some(&0));
    assert_eq!(indices.last(), Some(&499));
}
