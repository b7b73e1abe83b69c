use crate::core::mapper::value_to_pixel;
use crate::core::{AxisOrientation, AxisSlot, PixelRect};
use crate::error::ChartResult;
use crate::interaction::{CursorId, Gesture, ToolMode};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::InteractionController;
use super::area::ChartArea;

const VALUE_LABEL_FONT_SIZE_PX: f64 = 11.0;
const VALUE_LABEL_OFFSET_PX: f64 = 4.0;

impl InteractionController {
    /// Guides, value labels and the live zoom selection for this surface.
    #[must_use]
    pub fn overlay_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.surface_size);
        if let Some(rect) = self.selection_rect() {
            frame.push_rect(rect);
        }
        for id in CursorId::ALL {
            self.push_cursor(&mut frame, id);
        }
        frame
    }

    pub fn render_overlay<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.overlay_frame())
    }

    fn selection_rect(&self) -> Option<RectPrimitive> {
        let Some(Gesture::Zoom {
            area,
            anchor,
            current,
        }) = self.state.gesture()
        else {
            return None;
        };
        let plot = self.plot_rect_of(area)?;
        let band = PixelRect::from_corners(anchor, current);
        let rect = match self.state.mode() {
            ToolMode::ZoomX => PixelRect::new(band.left, plot.top, band.width, plot.height),
            ToolMode::ZoomY => PixelRect::new(plot.left, band.top, plot.width, band.height),
            _ => band,
        };
        let fill = self.options.selection_color;
        Some(
            RectPrimitive::new(rect.left, rect.top, rect.width, rect.height, fill)
                .with_border(fill.with_alpha(1.0), 1.0),
        )
    }

    fn push_cursor(&self, frame: &mut RenderFrame, id: CursorId) {
        let cursor = self.cursors.cursor(id);
        if !cursor.is_set() {
            return;
        }
        let Some(area) = cursor.area().and_then(|area| self.areas.get(&area)) else {
            return;
        };
        let (x_slot, y_slot) = match cursor.series().and_then(|series| area.series(series)) {
            Some(descriptor) => (
                ChartArea::axis_slot_for(descriptor, AxisOrientation::Horizontal),
                ChartArea::axis_slot_for(descriptor, AxisOrientation::Vertical),
            ),
            None => (AxisSlot::X1, AxisSlot::Y1),
        };

        let plot = area.plot_rect(self.surface_size);
        let pixels = (
            value_to_pixel(area.axes().get(x_slot), AxisOrientation::Horizontal, plot, cursor.x()),
            value_to_pixel(area.axes().get(y_slot), AxisOrientation::Vertical, plot, cursor.y()),
        );
        let (Ok(px), Ok(py)) = pixels else {
            return;
        };
        // Scrolled out of view.
        if !plot.contains(px, py) {
            return;
        }

        let (color, width, style) = self.cursor_style(id);
        frame.push_line(
            LinePrimitive::new(px, plot.top, px, plot.bottom(), width, color)
                .with_stroke_style(style),
        );
        frame.push_line(
            LinePrimitive::new(plot.left, py, plot.right(), py, width, color)
                .with_stroke_style(style),
        );

        if self.options.show_cursor_value {
            let text = match (cursor.x_label().is_empty(), cursor.y_label().is_empty()) {
                (true, true) => return,
                (false, true) => cursor.x_label().to_owned(),
                (true, false) => cursor.y_label().to_owned(),
                (false, false) => format!("{}, {}", cursor.x_label(), cursor.y_label()),
            };
            frame.push_text(TextPrimitive::new(
                text,
                px + VALUE_LABEL_OFFSET_PX,
                py - VALUE_LABEL_OFFSET_PX,
                VALUE_LABEL_FONT_SIZE_PX,
                color,
                TextHAlign::Left,
            ));
        }
    }

    fn cursor_style(&self, id: CursorId) -> (Color, f64, LineStrokeStyle) {
        match id {
            CursorId::First => (
                self.options.cursor1_color,
                self.options.cursor1_line_width,
                self.options.cursor1_dash_style,
            ),
            CursorId::Second => (
                self.options.cursor2_color,
                self.options.cursor2_line_width,
                self.options.cursor2_dash_style,
            ),
        }
    }
}
