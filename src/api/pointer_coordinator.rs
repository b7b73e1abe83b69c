use tracing::trace;

use crate::core::{AreaId, SeriesStore, WheelDirection};
use crate::extensions::InteractionEvent;
use crate::interaction::{
    Gesture, PointerButton, PointerEvent, ToolMode, WheelAction, WheelEvent, hit_test,
    pixel_to_percent,
};

use super::InteractionController;

/// Routes raw host pointer input into cursor and zoom operations.
pub(super) struct PointerCoordinator;

impl PointerCoordinator {
    pub(super) fn pointer_down(
        controller: &mut InteractionController,
        data: &dyn SeriesStore,
        event: PointerEvent,
    ) {
        if event.button != PointerButton::Left {
            return;
        }
        Self::refresh_active_area(controller, data, event.x, event.y);
        let Some(area) = Self::interactive_area(controller) else {
            trace!(x = event.x, y = event.y, "pointer down ignored: interaction disabled");
            return;
        };

        match controller.state.mode() {
            ToolMode::Select1 | ToolMode::Select2 => {
                if let Some(cursor) = controller.state.mode().cursor() {
                    controller.place_cursor(cursor, area, event.x, event.y, data);
                }
            }
            ToolMode::Zoom | ToolMode::ZoomX | ToolMode::ZoomY => {
                controller.begin_zoom_gesture(area, event.x, event.y);
            }
            ToolMode::Pan => {
                controller.state.set_gesture(Some(Gesture::Pan {
                    area,
                    last: (event.x, event.y),
                }));
            }
        }
    }

    pub(super) fn pointer_move(
        controller: &mut InteractionController,
        data: &dyn SeriesStore,
        event: PointerEvent,
    ) {
        match controller.state.gesture() {
            Some(Gesture::Zoom { .. }) => controller.update_zoom_gesture(event.x, event.y),
            Some(Gesture::Pan { area, last }) => {
                controller.pan_by(area, last, (event.x, event.y));
                controller.state.set_gesture(Some(Gesture::Pan {
                    area,
                    last: (event.x, event.y),
                }));
            }
            None => Self::refresh_active_area(controller, data, event.x, event.y),
        }
    }

    pub(super) fn pointer_up(controller: &mut InteractionController, event: PointerEvent) {
        if event.button != PointerButton::Left {
            return;
        }
        match controller.state.take_gesture() {
            Some(Gesture::Zoom { area, anchor, .. }) => {
                controller.commit_zoom_gesture(area, anchor, (event.x, event.y));
            }
            Some(Gesture::Pan { area, last }) => {
                controller.pan_by(area, last, (event.x, event.y));
                controller.emit(InteractionEvent::ZoomChanged {
                    surface: controller.surface,
                });
            }
            None => {}
        }
    }

    pub(super) fn wheel(
        controller: &mut InteractionController,
        data: &dyn SeriesStore,
        event: WheelEvent,
    ) {
        Self::refresh_active_area(controller, data, event.x, event.y);
        let Some(area) = Self::interactive_area(controller) else {
            return;
        };
        let Some(action) = WheelAction::from_modifiers(event.modifiers) else {
            trace!(modifiers = ?event.modifiers, "wheel ignored: unmapped modifier combination");
            return;
        };
        let Some(direction) = WheelDirection::from_delta(event.delta) else {
            return;
        };
        controller.apply_wheel(area, action, direction);
    }

    pub(super) fn pointer_leave(controller: &mut InteractionController) {
        let had_zoom_selection = matches!(controller.state.gesture(), Some(Gesture::Zoom { .. }));
        if let Some(area) = controller.state.active_area() {
            trace!(area = area.0, "pointer left surface");
        }
        controller.state.on_pointer_leave();
        if had_zoom_selection {
            controller.emit(InteractionEvent::RedrawRequested);
        }
        controller.sync_glyph();
    }

    /// Hit-tests the pointer and re-evaluates whether the area accepts input.
    fn refresh_active_area(
        controller: &mut InteractionController,
        data: &dyn SeriesStore,
        x: f64,
        y: f64,
    ) {
        let hit = pixel_to_percent(controller.surface_size, x, y).and_then(|point| {
            hit_test(
                point,
                controller
                    .areas
                    .values()
                    .map(|area| (area.id(), area.bounds())),
            )
        });
        if controller.state.set_active_area(hit) {
            trace!(
                surface = controller.surface.0,
                area = hit.map(|id| id.0),
                "active area changed"
            );
        }

        let enabled = hit
            .and_then(|id| controller.areas.get(&id))
            .is_some_and(|area| area.accepts_interaction() && area.has_data(data));
        controller.state.set_enabled(enabled);
        controller.sync_glyph();
    }

    fn interactive_area(controller: &InteractionController) -> Option<AreaId> {
        if controller.state.is_enabled() {
            controller.state.active_area()
        } else {
            None
        }
    }
}

impl InteractionController {
    /// Left press: places a cursor or starts a zoom/pan gesture.
    pub fn pointer_down(&mut self, data: &dyn SeriesStore, event: PointerEvent) {
        PointerCoordinator::pointer_down(self, data, event);
    }

    pub fn pointer_move(&mut self, data: &dyn SeriesStore, event: PointerEvent) {
        PointerCoordinator::pointer_move(self, data, event);
    }

    /// Left release: commits a zoom selection or finishes a pan.
    pub fn pointer_up(&mut self, event: PointerEvent) {
        PointerCoordinator::pointer_up(self, event);
    }

    pub fn wheel(&mut self, data: &dyn SeriesStore, event: WheelEvent) {
        PointerCoordinator::wheel(self, data, event);
    }

    pub fn pointer_leave(&mut self) {
        PointerCoordinator::pointer_leave(self);
    }
}
