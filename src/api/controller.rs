use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{AreaId, AxisSet, DataPoint, SurfaceId, Viewport, reduce};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{InteractionEvent, InteractionListener};
use crate::interaction::{
    CursorGlyph, CursorId, CursorSnapshot, CursorTracker, InteractionState, ToolMode,
};

use super::area::{ChartArea, ChartAreaConfig};
use super::options::InteractionOptions;

/// Identity and pixel size of the host surface being instrumented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceDescriptor {
    pub id: SurfaceId,
    pub size: Viewport,
}

impl SurfaceDescriptor {
    #[must_use]
    pub fn new(id: SurfaceId, size: Viewport) -> Self {
        Self { id, size }
    }
}

/// Axis state captured when a surface was registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceBackup {
    pub surface: SurfaceId,
    pub axes: IndexMap<AreaId, AxisSet>,
}

/// Interaction state machine for one chart surface.
///
/// Owns both measurement cursors, the axes of every registered area and the
/// active tool. Host samples are only borrowed per call through
/// [`crate::core::SeriesStore`].
pub struct InteractionController {
    pub(super) surface: SurfaceId,
    pub(super) surface_size: Viewport,
    pub(super) areas: IndexMap<AreaId, ChartArea>,
    pub(super) options: InteractionOptions,
    pub(super) state: InteractionState,
    pub(super) cursors: CursorTracker,
    pub(super) listeners: Vec<Box<dyn InteractionListener>>,
    backup: SurfaceBackup,
}

impl InteractionController {
    pub fn new(
        surface: SurfaceDescriptor,
        areas: Vec<ChartAreaConfig>,
        options: InteractionOptions,
    ) -> ChartResult<Self> {
        if !surface.size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: surface.size.width,
                height: surface.size.height,
            });
        }
        options.validate()?;

        let area_count = areas.len();
        let mut registered = IndexMap::with_capacity(area_count);
        for config in areas {
            let area = ChartArea::from_config(config)?;
            let id = area.id();
            if registered.insert(id, area).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "area {} registered twice on surface {}",
                    id.0, surface.id.0
                )));
            }
        }

        if !registered.values().any(ChartArea::is_supported) {
            warn!(
                surface = surface.id.0,
                area_count, "interaction not attached: no supported chart area"
            );
            return Err(ChartError::NoSupportedArea { area_count });
        }

        let backup = SurfaceBackup {
            surface: surface.id,
            axes: registered
                .iter()
                .map(|(id, area)| (*id, *area.axes()))
                .collect(),
        };

        debug!(
            surface = surface.id.0,
            area_count,
            width = surface.size.width,
            height = surface.size.height,
            "interaction controller created"
        );

        Ok(Self {
            surface: surface.id,
            surface_size: surface.size,
            areas: registered,
            options,
            state: InteractionState::default(),
            cursors: CursorTracker::new(),
            listeners: Vec::new(),
            backup,
        })
    }

    #[must_use]
    pub fn with_listener(mut self, listener: Box<dyn InteractionListener>) -> Self {
        self.add_listener(listener);
        self
    }

    pub fn add_listener(&mut self, listener: Box<dyn InteractionListener>) {
        debug!(surface = self.surface.0, listener = listener.id(), "listener attached");
        self.listeners.push(listener);
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    #[must_use]
    pub fn surface_size(&self) -> Viewport {
        self.surface_size
    }

    pub fn set_surface_size(&mut self, size: Viewport) -> ChartResult<()> {
        if !size.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: size.width,
                height: size.height,
            });
        }
        if size != self.surface_size {
            self.surface_size = size;
            self.emit(InteractionEvent::RedrawRequested);
        }
        Ok(())
    }

    #[must_use]
    pub fn options(&self) -> &InteractionOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: InteractionOptions) -> ChartResult<()> {
        options.validate()?;
        self.options = options;
        self.emit(InteractionEvent::RedrawRequested);
        Ok(())
    }

    #[must_use]
    pub fn area(&self, id: AreaId) -> Option<&ChartArea> {
        self.areas.get(&id)
    }

    pub fn areas(&self) -> impl Iterator<Item = &ChartArea> {
        self.areas.values()
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> ToolMode {
        self.state.mode()
    }

    #[must_use]
    pub fn active_area(&self) -> Option<AreaId> {
        self.state.active_area()
    }

    #[must_use]
    pub fn is_interaction_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    #[must_use]
    pub fn glyph(&self) -> CursorGlyph {
        self.state.glyph()
    }

    #[must_use]
    pub fn cursor(&self, id: CursorId) -> CursorSnapshot {
        self.cursors.snapshot(id)
    }

    /// Switches the active tool, cancelling any in-flight gesture.
    pub fn set_state(&mut self, mode: ToolMode) {
        let had_gesture = self.state.gesture().is_some();
        if mode != self.state.mode() {
            debug!(
                surface = self.surface.0,
                from = ?self.state.mode(),
                to = ?mode,
                "tool mode changed"
            );
        }
        self.state.set_mode(mode);
        if had_gesture {
            self.emit(InteractionEvent::RedrawRequested);
        }
        self.sync_glyph();
    }

    /// LTTB reduction to the configured display size with X-uniform buckets.
    #[must_use]
    pub fn downsample_for_display(&self, points: &[DataPoint]) -> Vec<DataPoint> {
        reduce(points, self.options.effective_display_data_size(), true)
    }

    #[must_use]
    pub fn registration_backup(&self) -> &SurfaceBackup {
        &self.backup
    }

    pub(super) fn into_backup(self) -> SurfaceBackup {
        self.backup
    }

    pub(super) fn sync_glyph(&mut self) {
        let glyph = self.state.desired_glyph();
        if self.state.set_glyph(glyph) {
            self.emit(InteractionEvent::CursorGlyphChanged(glyph));
        }
    }

    pub(super) fn emit(&mut self, event: InteractionEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}

impl std::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InteractionController")
            .field("surface", &self.surface)
            .field("surface_size", &self.surface_size)
            .field("areas", &self.areas.len())
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
