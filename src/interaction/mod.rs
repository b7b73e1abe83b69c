pub mod cursor;
pub mod snap;

use serde::{Deserialize, Serialize};

use crate::core::AreaId;

pub use cursor::{Cursor, CursorId, CursorPlacement, CursorSnapshot, CursorTracker};
pub use hit_test::{hit_test, pixel_to_percent};
pub use snap::nearest_point_index;

/// Active tool of a chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolMode {
    /// Pointer-down places Cursor1.
    #[default]
    Select1,
    /// Pointer-down places Cursor2.
    Select2,
    /// Rectangle zoom on X and Y.
    Zoom,
    ZoomX,
    ZoomY,
    /// Drag scrolls all axes of a zoomed area.
    Pan,
}

impl ToolMode {
    #[must_use]
    pub const fn cursor(self) -> Option<CursorId> {
        match self {
            ToolMode::Select1 => Some(CursorId::First),
            ToolMode::Select2 => Some(CursorId::Second),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_zoom(self) -> bool {
        matches!(self, ToolMode::Zoom | ToolMode::ZoomX | ToolMode::ZoomY)
    }

    #[must_use]
    pub const fn zooms_x(self) -> bool {
        matches!(self, ToolMode::Zoom | ToolMode::ZoomX)
    }

    #[must_use]
    pub const fn zooms_y(self) -> bool {
        matches!(self, ToolMode::Zoom | ToolMode::ZoomY)
    }

    /// Pointer glyph the host should show while this mode is usable.
    #[must_use]
    pub const fn glyph(self) -> CursorGlyph {
        match self {
            ToolMode::Select1 | ToolMode::Select2 => CursorGlyph::Cross,
            ToolMode::Zoom | ToolMode::ZoomX | ToolMode::ZoomY => CursorGlyph::ZoomIn,
            ToolMode::Pan => CursorGlyph::Hand,
        }
    }
}

/// Pointer glyph requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorGlyph {
    #[default]
    Arrow,
    Cross,
    ZoomIn,
    Hand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };
    pub const CTRL_ALT: Modifiers = Modifiers {
        ctrl: true,
        alt: true,
        shift: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
    };
}

/// Pointer event in surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub button: PointerButton,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl PointerEvent {
    #[must_use]
    pub fn new(x: f64, y: f64, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button,
            modifiers: Modifiers::NONE,
        }
    }

    #[must_use]
    pub fn left(x: f64, y: f64) -> Self {
        Self::new(x, y, PointerButton::Left)
    }
}

/// Wheel event; positive `delta` means "away from the user".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub x: f64,
    pub y: f64,
    pub delta: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl WheelEvent {
    #[must_use]
    pub fn new(x: f64, y: f64, delta: f64, modifiers: Modifiers) -> Self {
        Self {
            x,
            y,
            delta,
            modifiers,
        }
    }
}

/// What a wheel step does for a given modifier combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WheelAction {
    ZoomX,
    ZoomXY,
    /// Scrolls X; only effective while X is zoomed.
    ScrollX,
    /// Scrolls Y; only effective while Y is zoomed.
    ScrollY,
}

impl WheelAction {
    #[must_use]
    pub const fn from_modifiers(modifiers: Modifiers) -> Option<Self> {
        match (modifiers.ctrl, modifiers.alt, modifiers.shift) {
            (true, true, false) => Some(WheelAction::ZoomX),
            (true, false, false) => Some(WheelAction::ZoomXY),
            (false, false, true) => Some(WheelAction::ScrollY),
            (false, false, false) => Some(WheelAction::ScrollX),
            _ => None,
        }
    }
}

/// In-flight drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Gesture {
    Zoom {
        area: AreaId,
        anchor: (f64, f64),
        current: (f64, f64),
    },
    Pan {
        area: AreaId,
        last: (f64, f64),
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: ToolMode,
    active_area: Option<AreaId>,
    enabled: bool,
    glyph: CursorGlyph,
    gesture: Option<Gesture>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: ToolMode::Select1,
            active_area: None,
            enabled: false,
            glyph: CursorGlyph::Arrow,
            gesture: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> ToolMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
        self.gesture = None;
    }

    #[must_use]
    pub fn active_area(self) -> Option<AreaId> {
        self.active_area
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn glyph(self) -> CursorGlyph {
        self.glyph
    }

    /// Glyph implied by the current mode and enabled flag.
    #[must_use]
    pub fn desired_glyph(self) -> CursorGlyph {
        if self.enabled {
            self.mode.glyph()
        } else {
            CursorGlyph::Arrow
        }
    }

    /// Records the active area; returns `true` when it changed.
    pub fn set_active_area(&mut self, area: Option<AreaId>) -> bool {
        let changed = self.active_area != area;
        self.active_area = area;
        changed
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Stores `glyph`; returns `true` when it differs from the previous one.
    pub fn set_glyph(&mut self, glyph: CursorGlyph) -> bool {
        let changed = self.glyph != glyph;
        self.glyph = glyph;
        changed
    }

    pub(crate) fn gesture(self) -> Option<Gesture> {
        self.gesture
    }

    pub(crate) fn set_gesture(&mut self, gesture: Option<Gesture>) {
        self.gesture = gesture;
    }

    pub(crate) fn take_gesture(&mut self) -> Option<Gesture> {
        self.gesture.take()
    }

    pub fn on_pointer_leave(&mut self) {
        self.active_area = None;
        self.enabled = false;
        self.gesture = None;
    }
}
