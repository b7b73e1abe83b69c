use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::SurfaceId;
use crate::interaction::{CursorGlyph, CursorSnapshot};

/// Notification emitted by an interaction controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    /// Cursor1 was placed or reset.
    CursorMoved(CursorSnapshot),
    /// Cursor2 was placed or reset.
    SelectionChanged(CursorSnapshot),
    /// At least one axis viewport of the surface changed.
    ZoomChanged { surface: SurfaceId },
    CursorGlyphChanged(CursorGlyph),
    /// The overlay changed and should be redrawn.
    RedrawRequested,
}

/// Observer hook for host integrations.
///
/// Listeners only receive copies of controller state and cannot mutate the
/// controller from inside a callback.
pub trait InteractionListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &InteractionEvent);
}

type SnapshotCallback = Box<dyn FnMut(&CursorSnapshot)>;
type SurfaceCallback = Box<dyn FnMut(SurfaceId)>;

/// Listener built from host closures for the three public notifications.
#[derive(Default)]
pub struct CallbackListener {
    on_cursor1_changed: Option<SnapshotCallback>,
    on_cursor2_changed: Option<SnapshotCallback>,
    on_zoom_changed: Option<SurfaceCallback>,
}

impl CallbackListener {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_cursor1_changed(mut self, callback: impl FnMut(&CursorSnapshot) + 'static) -> Self {
        self.on_cursor1_changed = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_cursor2_changed(mut self, callback: impl FnMut(&CursorSnapshot) + 'static) -> Self {
        self.on_cursor2_changed = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_zoom_changed(mut self, callback: impl FnMut(SurfaceId) + 'static) -> Self {
        self.on_zoom_changed = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for CallbackListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackListener")
            .field("on_cursor1_changed", &self.on_cursor1_changed.is_some())
            .field("on_cursor2_changed", &self.on_cursor2_changed.is_some())
            .field("on_zoom_changed", &self.on_zoom_changed.is_some())
            .finish()
    }
}

impl InteractionListener for CallbackListener {
    fn id(&self) -> &str {
        "callbacks"
    }

    fn on_event(&mut self, event: &InteractionEvent) {
        match event {
            InteractionEvent::CursorMoved(snapshot) => {
                if let Some(callback) = self.on_cursor1_changed.as_mut() {
                    callback(snapshot);
                }
            }
            InteractionEvent::SelectionChanged(snapshot) => {
                if let Some(callback) = self.on_cursor2_changed.as_mut() {
                    callback(snapshot);
                }
            }
            InteractionEvent::ZoomChanged { surface } => {
                if let Some(callback) = self.on_zoom_changed.as_mut() {
                    callback(*surface);
                }
            }
            InteractionEvent::CursorGlyphChanged(_) | InteractionEvent::RedrawRequested => {}
        }
    }
}

/// Records every event into a shared buffer.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<InteractionEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<InteractionEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<InteractionEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&InteractionEvent) -> bool) -> usize {
        self.events.borrow().iter().filter(|event| predicate(event)).count()
    }
}

impl InteractionListener for EventLog {
    fn id(&self) -> &str {
        "event-log"
    }

    fn on_event(&mut self, event: &InteractionEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
