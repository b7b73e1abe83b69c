use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::SurfaceId;
use crate::error::{ChartError, ChartResult};
use crate::extensions::{CallbackListener, InteractionListener};
use crate::interaction::CursorSnapshot;

use super::InteractionController;
use super::area::ChartAreaConfig;
use super::controller::{SurfaceBackup, SurfaceDescriptor};
use super::options::InteractionOptions;

/// Opaque key of a registered surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InteractionHandle(pub u64);

/// Arena of interaction controllers, one per chart surface.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    next_handle: u64,
    controllers: IndexMap<InteractionHandle, InteractionController>,
}

impl InteractionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        surface: SurfaceDescriptor,
        areas: Vec<ChartAreaConfig>,
        listener: Box<dyn InteractionListener>,
        options: InteractionOptions,
    ) -> ChartResult<InteractionHandle> {
        if let Some(existing) = self.handle_for_surface(surface.id) {
            warn!(
                surface = surface.id.0,
                handle = existing.0,
                "surface already has an interaction controller"
            );
            return Err(ChartError::InvalidData(format!(
                "surface {} is already registered",
                surface.id.0
            )));
        }

        let controller =
            InteractionController::new(surface, areas, options)?.with_listener(listener);
        self.next_handle += 1;
        let handle = InteractionHandle(self.next_handle);
        self.controllers.insert(handle, controller);
        debug!(surface = surface.id.0, handle = handle.0, "surface registered");
        Ok(handle)
    }

    /// Registers a surface whose host only cares about the three public
    /// notifications.
    pub fn register_with_callbacks(
        &mut self,
        surface: SurfaceDescriptor,
        areas: Vec<ChartAreaConfig>,
        on_cursor1_changed: impl FnMut(&CursorSnapshot) + 'static,
        on_cursor2_changed: impl FnMut(&CursorSnapshot) + 'static,
        on_zoom_changed: impl FnMut(SurfaceId) + 'static,
        options: InteractionOptions,
    ) -> ChartResult<InteractionHandle> {
        let listener = CallbackListener::new()
            .on_cursor1_changed(on_cursor1_changed)
            .on_cursor2_changed(on_cursor2_changed)
            .on_zoom_changed(on_zoom_changed);
        self.register(surface, areas, Box::new(listener), options)
    }

    /// Detaches a surface and hands back the axes captured at registration.
    pub fn unregister(&mut self, handle: InteractionHandle) -> Option<SurfaceBackup> {
        let controller = self.controllers.shift_remove(&handle)?;
        debug!(
            surface = controller.surface().0,
            handle = handle.0,
            "surface unregistered"
        );
        Some(controller.into_backup())
    }

    #[must_use]
    pub fn get(&self, handle: InteractionHandle) -> Option<&InteractionController> {
        self.controllers.get(&handle)
    }

    pub fn get_mut(&mut self, handle: InteractionHandle) -> Option<&mut InteractionController> {
        self.controllers.get_mut(&handle)
    }

    /// Like [`Self::get_mut`] but reports unknown handles as an error.
    pub fn controller_mut(
        &mut self,
        handle: InteractionHandle,
    ) -> ChartResult<&mut InteractionController> {
        self.controllers
            .get_mut(&handle)
            .ok_or(ChartError::UnknownHandle(handle.0))
    }

    #[must_use]
    pub fn handle_for_surface(&self, surface: SurfaceId) -> Option<InteractionHandle> {
        self.controllers
            .iter()
            .find(|(_, controller)| controller.surface() == surface)
            .map(|(handle, _)| *handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }
}
