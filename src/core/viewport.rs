use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::mapper::{pixel_to_value, value_to_pixel};
use crate::core::{Axis, AxisOrientation, AxisViewport, PixelRect};

/// Fraction of the current width removed from (or added to) each edge per
/// wheel zoom step.
pub const WHEEL_ZOOM_STEP_RATIO: f64 = 0.1;

/// Fraction of the current width shifted per wheel scroll step.
pub const WHEEL_SCROLL_STEP_RATIO: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelDirection {
    /// Narrows the visible window.
    In,
    /// Widens the visible window.
    Out,
}

impl WheelDirection {
    /// Positive wheel deltas zoom in; zero yields `None`.
    #[must_use]
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// Zoom/pan math over an axis' visible window.
///
/// Every operation keeps `minimum <= visible_min <= visible_max <= maximum`
/// and returns `true` only when the viewport actually changed.
pub struct ViewportManager;

impl ViewportManager {
    pub fn zoom(axis: &mut Axis, requested_min: f64, requested_max: f64) -> bool {
        if !requested_min.is_finite() || !requested_max.is_finite() {
            trace!(requested_min, requested_max, "zoom rejected: non-finite bounds");
            return false;
        }
        let range = axis.range();
        let (low, high) = if requested_min <= requested_max {
            (requested_min, requested_max)
        } else {
            (requested_max, requested_min)
        };
        let low = low.clamp(range.minimum(), range.maximum());
        let high = high.clamp(range.minimum(), range.maximum());
        if high - low <= 0.0 {
            trace!(low, high, "zoom rejected: collapsed window");
            return false;
        }
        Self::apply(axis, AxisViewport::new(low, high))
    }

    pub fn zoom_reset(axis: &mut Axis) -> bool {
        let full = axis.range().full_viewport();
        Self::apply(axis, full)
    }

    pub fn scroll(axis: &mut Axis, delta_fraction: f64) -> bool {
        if !delta_fraction.is_finite() || delta_fraction == 0.0 {
            return false;
        }
        let range = axis.range();
        let viewport = axis.viewport();
        let width = viewport.width();
        if width >= range.width() {
            return false;
        }

        let shift = delta_fraction * width;
        let latest_start = (range.maximum() - width).max(range.minimum());
        let start = (viewport.visible_min + shift).clamp(range.minimum(), latest_start);
        let end = (start + width).min(range.maximum());
        Self::apply(axis, AxisViewport::new(start, end))
    }

    pub fn wheel_zoom(axis: &mut Axis, direction: WheelDirection) -> bool {
        let range = axis.range();
        let viewport = axis.viewport();
        let step = viewport.width() * WHEEL_ZOOM_STEP_RATIO;
        let (low, high) = match direction {
            WheelDirection::In => (viewport.visible_min + step, viewport.visible_max - step),
            WheelDirection::Out => (viewport.visible_min - step, viewport.visible_max + step),
        };
        let low = low.max(range.minimum());
        let high = high.min(range.maximum());
        if high <= low {
            return false;
        }
        Self::apply(axis, AxisViewport::new(low, high))
    }

    #[must_use]
    pub fn is_zoomed(axis: &Axis) -> bool {
        let range = axis.range();
        let viewport = axis.viewport();
        viewport.visible_min > range.minimum() || viewport.visible_max < range.maximum()
    }

    /// Re-aligns `secondary` with a primary axis whose window moved from
    /// `primary_before` to `primary_after`.
    ///
    /// The new primary window is converted to pixels through the primary's
    /// previous mapping (the one both axes still share), then back to values
    /// through the secondary's mapping. A primary that returned to its full
    /// range resets the secondary as well.
    pub fn mirror_zoom(
        primary_before: &Axis,
        primary_after: &Axis,
        secondary: &mut Axis,
        orientation: AxisOrientation,
        plot: PixelRect,
    ) -> bool {
        if !Self::is_zoomed(primary_after) {
            return Self::zoom_reset(secondary);
        }

        let target = primary_after.viewport();
        let pixels = (
            value_to_pixel(primary_before, orientation, plot, target.visible_min),
            value_to_pixel(primary_before, orientation, plot, target.visible_max),
        );
        let (Ok(pixel_a), Ok(pixel_b)) = pixels else {
            trace!("mirror skipped: primary mapping is degenerate");
            return false;
        };
        let values = (
            pixel_to_value(secondary, orientation, plot, pixel_a),
            pixel_to_value(secondary, orientation, plot, pixel_b),
        );
        let (Ok(value_a), Ok(value_b)) = values else {
            trace!("mirror skipped: secondary mapping is degenerate");
            return false;
        };
        Self::zoom(secondary, value_a.min(value_b), value_a.max(value_b))
    }

    fn apply(axis: &mut Axis, viewport: AxisViewport) -> bool {
        if axis.viewport() == viewport {
            return false;
        }
        axis.set_viewport(viewport);
        true
    }
}
