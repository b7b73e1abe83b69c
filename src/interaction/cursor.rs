use serde::{Deserialize, Serialize};

use crate::core::{AreaId, SeriesId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CursorId {
    First,
    Second,
}

impl CursorId {
    pub const ALL: [CursorId; 2] = [CursorId::First, CursorId::Second];

    const fn index(self) -> usize {
        match self {
            CursorId::First => 0,
            CursorId::Second => 1,
        }
    }
}

/// Controller-owned measurement cursor. Hosts only ever see it by shared
/// reference or through a [`CursorSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cursor {
    x: f64,
    y: f64,
    series: Option<SeriesId>,
    x_label: String,
    y_label: String,
    area: Option<AreaId>,
}

impl Cursor {
    fn unset() -> Self {
        Self {
            x: f64::NAN,
            y: f64::NAN,
            series: None,
            x_label: String::new(),
            y_label: String::new(),
            area: None,
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn series(&self) -> Option<SeriesId> {
        self.series
    }

    #[must_use]
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    #[must_use]
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    #[must_use]
    pub fn area(&self) -> Option<AreaId> {
        self.area
    }

    /// NaN position means "unset".
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

/// Immutable copy of a cursor handed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub id: CursorId,
    pub x: f64,
    pub y: f64,
    pub series: Option<SeriesId>,
    pub x_label: String,
    pub y_label: String,
    pub area: Option<AreaId>,
}

impl CursorSnapshot {
    #[must_use]
    pub fn is_set(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

/// Resolved cursor position ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPlacement {
    pub x: f64,
    pub y: f64,
    pub series: SeriesId,
    pub area: AreaId,
    pub x_label: String,
    pub y_label: String,
}

/// Owns both measurement cursors and the series each one tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorTracker {
    cursors: [Cursor; 2],
    chosen_series: [Option<SeriesId>; 2],
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursors: [Cursor::unset(), Cursor::unset()],
            chosen_series: [None, None],
        }
    }

    #[must_use]
    pub fn cursor(&self, id: CursorId) -> &Cursor {
        &self.cursors[id.index()]
    }

    #[must_use]
    pub fn snapshot(&self, id: CursorId) -> CursorSnapshot {
        let cursor = self.cursor(id);
        CursorSnapshot {
            id,
            x: cursor.x,
            y: cursor.y,
            series: cursor.series,
            x_label: cursor.x_label.clone(),
            y_label: cursor.y_label.clone(),
            area: cursor.area,
        }
    }

    /// Series explicitly chosen for `id`, if any.
    #[must_use]
    pub fn chosen_series(&self, id: CursorId) -> Option<SeriesId> {
        self.chosen_series[id.index()]
    }

    pub fn choose_series(&mut self, id: CursorId, series: Option<SeriesId>) {
        self.chosen_series[id.index()] = series;
    }

    pub fn commit(&mut self, id: CursorId, placement: CursorPlacement) -> CursorSnapshot {
        self.cursors[id.index()] = Cursor {
            x: placement.x,
            y: placement.y,
            series: Some(placement.series),
            x_label: placement.x_label,
            y_label: placement.y_label,
            area: Some(placement.area),
        };
        self.snapshot(id)
    }

    pub fn reset(&mut self, id: CursorId) -> CursorSnapshot {
        self.cursors[id.index()] = Cursor::unset();
        self.snapshot(id)
    }
}
