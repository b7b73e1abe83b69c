use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::DataPoint;

/// Index of the sample nearest to `target` by squared distance in value space.
///
/// `points` must be sorted by X. The search starts from an index estimated by
/// linear interpolation over the X extent and walks until `target.x` is
/// bracketed; the closer of the two bracketing samples wins (ties pick the
/// lower one). A collapsed X extent, as produced by categorical data, falls
/// back to a full scan.
#[must_use]
pub fn nearest_point_index(points: &[DataPoint], target: DataPoint) -> Option<usize> {
    let n = points.len();
    if n == 0 || !target.x.is_finite() || !target.y.is_finite() {
        return None;
    }

    let x_min = points[0].x;
    let x_max = points[n - 1].x;
    let x_span = x_max - x_min;
    if !x_span.is_finite() || x_span <= 0.0 {
        return nearest_by_scan(points, target);
    }

    let estimate = (n as f64 * (target.x - x_min) / x_span).round();
    let mut idx = if estimate <= 0.0 {
        0
    } else {
        (estimate as usize).min(n - 1)
    };

    while idx > 0 && points[idx].x > target.x {
        idx -= 1;
    }
    while idx + 1 < n && points[idx + 1].x <= target.x {
        idx += 1;
    }

    let lower = idx;
    let upper = (idx + 1).min(n - 1);
    let candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = [lower, upper]
        .into_iter()
        .map(|i| (OrderedFloat(points[i].squared_distance(target)), i))
        .collect();

    candidates
        .into_iter()
        .min_by_key(|candidate| candidate.0)
        .map(|(_, i)| i)
}

fn nearest_by_scan(points: &[DataPoint], target: DataPoint) -> Option<usize> {
    let mut best: Option<(OrderedFloat<f64>, usize)> = None;
    for (i, point) in points.iter().enumerate() {
        let dist = OrderedFloat(point.squared_distance(target));
        match best {
            Some((current, _)) if current <= dist => {}
            _ => best = Some((dist, i)),
        }
    }
    best.map(|(_, i)| i)
}
