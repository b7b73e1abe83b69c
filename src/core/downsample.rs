//! Largest-Triangle-Three-Buckets reduction.
//!
//! The first and last samples are always kept. Interior samples are split into
//! `target_len - 2` buckets and each non-empty bucket contributes the sample
//! forming the largest triangle with the previously kept sample and the
//! average of the next bucket.

use std::ops::Range;

use crate::core::DataPoint;

/// Reduces `points` to at most `target_len` samples.
///
/// Returns the input unchanged when it is already shorter than `target_len`
/// or when `target_len < 2`. With `dynamic_bucket` the buckets are uniform in
/// X-value space instead of index space, which keeps irregularly sampled
/// series from over-representing dense regions.
#[must_use]
pub fn reduce(points: &[DataPoint], target_len: usize, dynamic_bucket: bool) -> Vec<DataPoint> {
    if points.len() < target_len || target_len < 2 {
        return points.to_vec();
    }
    reduce_indices(points, target_len, dynamic_bucket)
        .into_iter()
        .map(|idx| points[idx])
        .collect()
}

/// Source indices selected by [`reduce`], strictly increasing.
#[must_use]
pub fn reduce_indices(points: &[DataPoint], target_len: usize, dynamic_bucket: bool) -> Vec<usize> {
    let n = points.len();
    if n < target_len || target_len < 2 {
        return (0..n).collect();
    }

    let bucket_count = target_len - 2;
    let buckets = if dynamic_bucket {
        dynamic_buckets(points, bucket_count).unwrap_or_else(|| fixed_buckets(n, bucket_count))
    } else {
        fixed_buckets(n, bucket_count)
    };

    let mut selected = Vec::with_capacity(buckets.len() + 2);
    selected.push(0);

    let last = points[n - 1];
    let mut anchor = points[0];
    for (i, bucket) in buckets.iter().enumerate() {
        let apex = buckets
            .get(i + 1)
            .map_or(last, |next| average(&points[next.clone()]));

        let mut best_area = -1.0;
        let mut best_idx = bucket.start;
        for idx in bucket.clone() {
            let area = triangle_area(anchor, points[idx], apex);
            if area > best_area {
                best_area = area;
                best_idx = idx;
            }
        }

        selected.push(best_idx);
        anchor = points[best_idx];
    }

    selected.push(n - 1);
    selected
}

/// Reduces independent series in parallel.
#[cfg(feature = "parallel-downsample")]
#[must_use]
pub fn reduce_many(
    series: &[&[DataPoint]],
    target_len: usize,
    dynamic_bucket: bool,
) -> Vec<Vec<DataPoint>> {
    use rayon::prelude::*;

    series
        .par_iter()
        .map(|points| reduce(points, target_len, dynamic_bucket))
        .collect()
}

/// Twice the triangle area; only the relative maximum matters.
fn triangle_area(a: DataPoint, b: DataPoint, c: DataPoint) -> f64 {
    ((a.x - c.x) * (b.y - a.y) - (a.x - b.x) * (c.y - a.y)).abs()
}

fn average(points: &[DataPoint]) -> DataPoint {
    let count = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |acc, point| (acc.0 + point.x, acc.1 + point.y));
    DataPoint::new(sum_x / count, sum_y / count)
}

/// Index-uniform partition of the interior `1..n-1`.
fn fixed_buckets(n: usize, bucket_count: usize) -> Vec<Range<usize>> {
    if bucket_count == 0 {
        return Vec::new();
    }
    let bucket_size = (n - 2) as f64 / bucket_count as f64;
    let mut buckets = Vec::with_capacity(bucket_count);
    let mut start = 1;
    for i in 0..bucket_count {
        let end = if i + 1 == bucket_count {
            n - 1
        } else {
            ((((i + 1) as f64) * bucket_size).floor() as usize + 1).min(n - 1)
        };
        if end > start {
            buckets.push(start..end);
        }
        start = start.max(end);
    }
    buckets
}

/// X-uniform partition of the interior; `None` when the X domain collapses.
fn dynamic_buckets(points: &[DataPoint], bucket_count: usize) -> Option<Vec<Range<usize>>> {
    let n = points.len();
    if bucket_count == 0 {
        return Some(Vec::new());
    }
    let domain_start = (points[0].x + points[1].x) / 2.0;
    let domain_end = (points[n - 2].x + points[n - 1].x) / 2.0;
    let bucket_width = (domain_end - domain_start) / bucket_count as f64;
    if !bucket_width.is_finite() || bucket_width <= 0.0 {
        return None;
    }

    let mut buckets = Vec::with_capacity(bucket_count);
    let mut cursor = 1;
    for i in 0..bucket_count {
        let start = cursor;
        if i + 1 == bucket_count {
            cursor = n - 1;
        } else {
            let boundary = domain_start + (i + 1) as f64 * bucket_width;
            while cursor < n - 1 && points[cursor].x < boundary {
                cursor += 1;
            }
        }
        if cursor > start {
            buckets.push(start..cursor);
        }
    }
    Some(buckets)
}
