//! Pixel ↔ value conversion for a single axis.
//!
//! All functions are pure: they read the axis' current viewport and the plot
//! rectangle the host reported, and never mutate anything. Horizontal axes
//! grow left to right, vertical axes bottom to top; `reversed` flips both.

use crate::core::{Axis, AxisOrientation, AxisViewport, LinearScale, PixelRect, PixelSpan};
use crate::error::ChartResult;

/// Pixel coordinates that `visible_min` and `visible_max` land on.
#[must_use]
pub fn axis_pixel_span(axis: &Axis, orientation: AxisOrientation, plot: PixelRect) -> PixelSpan {
    let span = match orientation {
        AxisOrientation::Horizontal => PixelSpan::new(plot.left, plot.right()),
        AxisOrientation::Vertical => PixelSpan::new(plot.bottom(), plot.top),
    };
    if axis.range().reversed() {
        PixelSpan::new(span.end, span.start)
    } else {
        span
    }
}

fn visible_scale(axis: &Axis) -> ChartResult<LinearScale> {
    let viewport = axis.viewport();
    LinearScale::new(viewport.visible_min, viewport.visible_max)
}

pub fn pixel_to_value(
    axis: &Axis,
    orientation: AxisOrientation,
    plot: PixelRect,
    pixel: f64,
) -> ChartResult<f64> {
    visible_scale(axis)?.pixel_to_domain(pixel, axis_pixel_span(axis, orientation, plot))
}

pub fn value_to_pixel(
    axis: &Axis,
    orientation: AxisOrientation,
    plot: PixelRect,
    value: f64,
) -> ChartResult<f64> {
    visible_scale(axis)?.domain_to_pixel(value, axis_pixel_span(axis, orientation, plot))
}

/// Containment in the full axis range, independent of zoom.
#[must_use]
pub fn value_in_bounds(axis: &Axis, value: f64) -> bool {
    axis.range().contains(value)
}

/// Containment in the currently visible window.
#[must_use]
pub fn value_in_viewport(viewport: AxisViewport, value: f64) -> bool {
    viewport.contains(value)
}
