use tracing::{debug, trace};

use crate::core::mapper::pixel_to_value;
use crate::core::primitives::round_to_precision;
use crate::core::viewport::WHEEL_SCROLL_STEP_RATIO;
use crate::core::{
    AreaId, Axis, AxisGroup, AxisOrientation, AxisSlot, PixelRect, ViewportManager,
    WheelDirection,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::InteractionEvent;
use crate::interaction::{Gesture, WheelAction};

use super::InteractionController;
use super::area::ChartArea;

impl InteractionController {
    pub fn zoom_axis(
        &mut self,
        area: AreaId,
        slot: AxisSlot,
        requested_min: f64,
        requested_max: f64,
    ) -> ChartResult<bool> {
        let size = self.surface_size;
        let chart_area = self.area_mut(area)?;
        let plot = chart_area.plot_rect(size);
        let changed = match slot.group() {
            AxisGroup::Primary => update_primary(chart_area, slot.orientation(), plot, |axis| {
                ViewportManager::zoom(axis, requested_min, requested_max)
            }),
            AxisGroup::Secondary => ViewportManager::zoom(
                chart_area.axes_mut().get_mut(slot),
                requested_min,
                requested_max,
            ),
        };
        self.finish_viewport_change(area, changed, "programmatic zoom");
        Ok(changed)
    }

    /// Restores every axis of `area` to its full range.
    pub fn reset_zoom(&mut self, area: AreaId) -> ChartResult<bool> {
        let axes = self.area_mut(area)?.axes_mut();
        let mut changed = false;
        for slot in AxisSlot::ALL {
            changed |= ViewportManager::zoom_reset(axes.get_mut(slot));
        }
        self.finish_viewport_change(area, changed, "zoom reset");
        Ok(changed)
    }

    pub fn reset_all_zoom(&mut self) -> bool {
        let ids: Vec<AreaId> = self.areas.keys().copied().collect();
        let mut changed = false;
        for id in ids {
            changed |= self.reset_zoom(id).unwrap_or(false);
        }
        changed
    }

    #[must_use]
    pub fn is_zoomed(&self, area: AreaId) -> bool {
        self.areas.get(&area).is_some_and(ChartArea::is_zoomed)
    }

    pub(super) fn begin_zoom_gesture(&mut self, area: AreaId, x: f64, y: f64) {
        let Some(plot) = self.plot_rect_of(area) else {
            return;
        };
        if !plot.contains(x, y) {
            trace!(x, y, "zoom rejected: anchor outside plot");
            return;
        }
        self.state.set_gesture(Some(Gesture::Zoom {
            area,
            anchor: (x, y),
            current: (x, y),
        }));
    }

    pub(super) fn update_zoom_gesture(&mut self, x: f64, y: f64) {
        let Some(Gesture::Zoom { area, anchor, .. }) = self.state.gesture() else {
            return;
        };
        let Some(plot) = self.plot_rect_of(area) else {
            return;
        };
        self.state.set_gesture(Some(Gesture::Zoom {
            area,
            anchor,
            current: plot.clamp_point(x, y),
        }));
        self.emit(InteractionEvent::RedrawRequested);
    }

    pub(super) fn commit_zoom_gesture(
        &mut self,
        area: AreaId,
        anchor: (f64, f64),
        end: (f64, f64),
    ) {
        // The selection rectangle is gone either way.
        self.emit(InteractionEvent::RedrawRequested);

        let mode = self.state.mode();
        let size = self.surface_size;
        let x_precision = self.options.x_axis_precision;
        let y_precision = self.options.y_axis_precision;
        let Some(chart_area) = self.areas.get_mut(&area) else {
            return;
        };
        let plot = chart_area.plot_rect(size);
        let end = plot.clamp_point(end.0, end.1);
        if anchor == end {
            trace!("zoom rejected: empty selection");
            return;
        }

        let mut changed = false;
        if mode.zooms_x() {
            changed |= zoom_to_pixels(
                chart_area,
                AxisOrientation::Horizontal,
                plot,
                (anchor.0, end.0),
                x_precision,
            );
        }
        if mode.zooms_y() {
            changed |= zoom_to_pixels(
                chart_area,
                AxisOrientation::Vertical,
                plot,
                (anchor.1, end.1),
                y_precision,
            );
        }
        self.finish_viewport_change(area, changed, "zoom selection committed");
    }

    /// Scrolls all four axes by a pixel drag; only while something is zoomed.
    pub(super) fn pan_by(&mut self, area: AreaId, from: (f64, f64), to: (f64, f64)) {
        let size = self.surface_size;
        let Some(chart_area) = self.areas.get_mut(&area) else {
            return;
        };
        if !chart_area.is_zoomed() {
            trace!(area = area.0, "pan ignored: no zoomed axis");
            return;
        }
        let plot = chart_area.plot_rect(size);
        if plot.is_empty() {
            return;
        }

        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let mut changed = false;
        for slot in AxisSlot::ALL {
            let axis = chart_area.axes_mut().get_mut(slot);
            let mut fraction = match slot.orientation() {
                AxisOrientation::Horizontal => -dx / plot.width,
                AxisOrientation::Vertical => dy / plot.height,
            };
            if axis.range().reversed() {
                fraction = -fraction;
            }
            changed |= ViewportManager::scroll(axis, fraction);
        }
        if changed {
            self.emit(InteractionEvent::RedrawRequested);
        }
    }

    pub(super) fn apply_wheel(
        &mut self,
        area: AreaId,
        action: WheelAction,
        direction: WheelDirection,
    ) {
        let size = self.surface_size;
        let Some(chart_area) = self.areas.get_mut(&area) else {
            return;
        };
        let plot = chart_area.plot_rect(size);
        let scroll_fraction = match direction {
            WheelDirection::In => WHEEL_SCROLL_STEP_RATIO,
            WheelDirection::Out => -WHEEL_SCROLL_STEP_RATIO,
        };

        let changed = match action {
            WheelAction::ZoomX => {
                update_primary(chart_area, AxisOrientation::Horizontal, plot, |axis| {
                    ViewportManager::wheel_zoom(axis, direction)
                })
            }
            WheelAction::ZoomXY => {
                let x = update_primary(chart_area, AxisOrientation::Horizontal, plot, |axis| {
                    ViewportManager::wheel_zoom(axis, direction)
                });
                let y = update_primary(chart_area, AxisOrientation::Vertical, plot, |axis| {
                    ViewportManager::wheel_zoom(axis, direction)
                });
                x || y
            }
            WheelAction::ScrollX => {
                update_primary(chart_area, AxisOrientation::Horizontal, plot, |axis| {
                    ViewportManager::is_zoomed(axis)
                        && ViewportManager::scroll(axis, scroll_fraction)
                })
            }
            WheelAction::ScrollY => {
                update_primary(chart_area, AxisOrientation::Vertical, plot, |axis| {
                    ViewportManager::is_zoomed(axis)
                        && ViewportManager::scroll(axis, scroll_fraction)
                })
            }
        };
        trace!(area = area.0, ?action, ?direction, changed, "wheel applied");
        self.finish_viewport_change(area, changed, "wheel");
    }

    fn finish_viewport_change(&mut self, area: AreaId, changed: bool, reason: &'static str) {
        if !changed {
            return;
        }
        if let Some(chart_area) = self.areas.get(&area) {
            let axes = chart_area.axes();
            debug!(
                surface = self.surface.0,
                area = area.0,
                reason,
                x1_min = axes.x1.viewport().visible_min,
                x1_max = axes.x1.viewport().visible_max,
                y1_min = axes.y1.viewport().visible_min,
                y1_max = axes.y1.viewport().visible_max,
                "viewport changed"
            );
        }
        self.emit(InteractionEvent::ZoomChanged {
            surface: self.surface,
        });
        self.emit(InteractionEvent::RedrawRequested);
    }

    fn area_mut(&mut self, area: AreaId) -> ChartResult<&mut ChartArea> {
        self.areas
            .get_mut(&area)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown area {}", area.0)))
    }

    pub(super) fn plot_rect_of(&self, area: AreaId) -> Option<PixelRect> {
        self.areas
            .get(&area)
            .map(|chart_area| chart_area.plot_rect(self.surface_size))
    }
}

/// Applies `op` to the primary axis of `orientation` and re-aligns the
/// secondary axis when it is in use.
fn update_primary(
    area: &mut ChartArea,
    orientation: AxisOrientation,
    plot: PixelRect,
    op: impl FnOnce(&mut Axis) -> bool,
) -> bool {
    let (primary, secondary) = area.axes_mut().pair_mut(orientation);
    let before = *primary;
    if !op(primary) {
        return false;
    }
    if secondary.enabled {
        ViewportManager::mirror_zoom(&before, primary, secondary, orientation, plot);
    }
    true
}

fn zoom_to_pixels(
    area: &mut ChartArea,
    orientation: AxisOrientation,
    plot: PixelRect,
    pixels: (f64, f64),
    precision: i32,
) -> bool {
    if pixels.0 == pixels.1 {
        return false;
    }
    let slot = AxisSlot::new(orientation, AxisGroup::Primary);
    let axis = area.axes().get(slot);
    let range = axis.range();
    let to_value = |pixel: f64| {
        pixel_to_value(axis, orientation, plot, pixel).map(|value| {
            round_to_precision(value.clamp(range.minimum(), range.maximum()), precision)
        })
    };
    let (start, end) = match (to_value(pixels.0), to_value(pixels.1)) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(err), _) | (_, Err(err)) => {
            trace!(error = %err, ?orientation, "zoom rejected: unmappable selection");
            return false;
        }
    };
    update_primary(area, orientation, plot, |axis| {
        ViewportManager::zoom(axis, start, end)
    })
}
