use tracing::{debug, trace, warn};

use crate::core::mapper::{pixel_to_value, value_in_bounds, value_in_viewport};
use crate::core::{
    AreaId, AxisOrientation, AxisValueKind, DataPoint, SeriesDescriptor, SeriesId, SeriesStore,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::InteractionEvent;
use crate::interaction::{CursorId, CursorPlacement, CursorSnapshot, nearest_point_index};

use super::InteractionController;
use super::area::ChartArea;
use super::label_format::format_axis_value;

impl InteractionController {
    /// Pins `cursor` to a series; `None` goes back to the first visible one.
    pub fn select_series(&mut self, cursor: CursorId, series: Option<SeriesId>) -> ChartResult<()> {
        if let Some(id) = series {
            let known = self.areas.values().any(|area| area.series(id).is_some());
            if !known {
                return Err(ChartError::InvalidData(format!("unknown series {}", id.0)));
            }
        }
        self.cursors.choose_series(cursor, series);
        Ok(())
    }

    /// Shows or hides a series for cursor purposes.
    ///
    /// Only honoured when `allow_hide_series` is set; returns whether the
    /// visibility actually changed.
    pub fn set_series_visible(
        &mut self,
        area: AreaId,
        series: SeriesId,
        visible: bool,
    ) -> ChartResult<bool> {
        if !self.options.allow_hide_series {
            trace!(series = series.0, "series visibility locked by options");
            return Ok(false);
        }
        let descriptor = self
            .areas
            .get_mut(&area)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown area {}", area.0)))?
            .series_mut(series)
            .ok_or_else(|| {
                ChartError::InvalidData(format!("unknown series {} in area {}", series.0, area.0))
            })?;
        if descriptor.visible == visible {
            return Ok(false);
        }
        descriptor.visible = visible;
        debug!(area = area.0, series = series.0, visible, "series visibility changed");
        self.emit(InteractionEvent::RedrawRequested);
        Ok(true)
    }

    pub fn clear_cursor(&mut self, id: CursorId) {
        let snapshot = self.cursors.reset(id);
        self.notify_cursor(snapshot);
    }

    pub(super) fn place_cursor(
        &mut self,
        id: CursorId,
        area_id: AreaId,
        x: f64,
        y: f64,
        data: &dyn SeriesStore,
    ) {
        let Some(area) = self.areas.get(&area_id) else {
            return;
        };
        let Some(series) = self.resolve_series(id, area) else {
            trace!(area = area_id.0, "cursor not placed: no visible series");
            return;
        };

        let plot = area.plot_rect(self.surface_size);
        let x_slot = ChartArea::axis_slot_for(series, AxisOrientation::Horizontal);
        let y_slot = ChartArea::axis_slot_for(series, AxisOrientation::Vertical);
        let x_axis = area.axes().get(x_slot);
        let y_axis = area.axes().get(y_slot);

        let mapped = pixel_to_value(x_axis, AxisOrientation::Horizontal, plot, x).and_then(
            |value_x| {
                pixel_to_value(y_axis, AxisOrientation::Vertical, plot, y)
                    .map(|value_y| DataPoint::new(value_x, value_y))
            },
        );
        let raw = match mapped {
            Ok(point) => point,
            Err(ChartError::DegenerateMapping(reason)) => {
                warn!(area = area_id.0, %reason, "cursor reset: axis mapping collapsed");
                self.clear_cursor(id);
                return;
            }
            Err(err) => {
                trace!(error = %err, "cursor not placed: unmappable pointer");
                return;
            }
        };

        if !value_in_bounds(x_axis, raw.x)
            || !value_in_bounds(y_axis, raw.y)
            || !value_in_viewport(x_axis.viewport(), raw.x)
            || !value_in_viewport(y_axis.viewport(), raw.y)
        {
            trace!(x = raw.x, y = raw.y, "cursor not placed: outside visible window");
            return;
        }

        let snapped = if self.options.snap_cursor_to_data {
            data.points(series.id).and_then(|points| {
                let index = nearest_point_index(points, raw)?;
                let point = points[index];
                let visible = value_in_viewport(x_axis.viewport(), point.x)
                    && value_in_viewport(y_axis.viewport(), point.y);
                visible.then_some((index, point))
            })
        } else {
            None
        };
        let (position, index) = match snapped {
            Some((index, point)) => (point, Some(index)),
            None => (raw, None),
        };

        let category_index = index.or_else(|| category_position(position.x));
        let x_category = match x_axis.value_kind {
            AxisValueKind::Categorical => {
                category_index.and_then(|idx| data.category_label(series.id, idx))
            }
            _ => None,
        };
        let x_label = format_axis_value(
            position.x,
            x_axis.value_kind,
            self.options.label_format(x_slot),
            &self.options.date_time_format,
            x_category,
        );
        let y_label = format_axis_value(
            position.y,
            y_axis.value_kind,
            self.options.label_format(y_slot),
            &self.options.date_time_format,
            None,
        );

        let placement = CursorPlacement {
            x: position.x,
            y: position.y,
            series: series.id,
            area: area_id,
            x_label,
            y_label,
        };
        debug!(
            cursor = ?id,
            area = area_id.0,
            series = placement.series.0,
            x = placement.x,
            y = placement.y,
            snapped = index.is_some(),
            "cursor placed"
        );
        let snapshot = self.cursors.commit(id, placement);
        self.notify_cursor(snapshot);
    }

    fn resolve_series<'a>(
        &self,
        id: CursorId,
        area: &'a ChartArea,
    ) -> Option<&'a SeriesDescriptor> {
        self.cursors
            .chosen_series(id)
            .and_then(|chosen| area.series(chosen))
            .filter(|descriptor| descriptor.visible)
            .or_else(|| area.first_visible_series())
    }

    fn notify_cursor(&mut self, snapshot: CursorSnapshot) {
        let event = match snapshot.id {
            CursorId::First => InteractionEvent::CursorMoved(snapshot),
            CursorId::Second => InteractionEvent::SelectionChanged(snapshot),
        };
        self.emit(event);
        self.emit(InteractionEvent::RedrawRequested);
    }
}

/// Sample index an unsnapped categorical X value points at.
fn category_position(x: f64) -> Option<usize> {
    let rounded = x.round();
    (rounded.is_finite() && rounded >= 0.0).then_some(rounded as usize)
}
