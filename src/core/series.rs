use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AxisGroup, DataPoint};

/// Host-assigned identifier of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(pub u32);

/// Closed set of chart kinds a host may register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeriesKind {
    Point,
    #[default]
    Line,
    FastLine,
    Spline,
    StepLine,
    Area,
    Column,
    Bar,
    Candlestick,
    Bubble,
    Pie,
    Doughnut,
    Polar,
    Radar,
    Funnel,
    Pyramid,
}

impl SeriesKind {
    /// Radial and proportional kinds have no meaningful X/Y cursor semantics.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            SeriesKind::Pie
                | SeriesKind::Doughnut
                | SeriesKind::Polar
                | SeriesKind::Radar
                | SeriesKind::Funnel
                | SeriesKind::Pyramid
        )
    }
}

/// Registration-time description of a series; the samples stay with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub id: SeriesId,
    pub name: String,
    pub kind: SeriesKind,
    #[serde(default)]
    pub x_axis: AxisGroup,
    #[serde(default)]
    pub y_axis: AxisGroup,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(id: SeriesId, name: impl Into<String>, kind: SeriesKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            x_axis: AxisGroup::Primary,
            y_axis: AxisGroup::Primary,
            visible: true,
        }
    }

    #[must_use]
    pub fn with_axes(mut self, x_axis: AxisGroup, y_axis: AxisGroup) -> Self {
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        self
    }
}

/// Read-only access to host-owned samples for the duration of one call.
pub trait SeriesStore {
    fn points(&self, id: SeriesId) -> Option<&[DataPoint]>;

    /// Label of the `index`-th sample for categorical X axes.
    fn category_label(&self, _id: SeriesId, _index: usize) -> Option<&str> {
        None
    }
}

impl SeriesStore for HashMap<SeriesId, Vec<DataPoint>> {
    fn points(&self, id: SeriesId) -> Option<&[DataPoint]> {
        self.get(&id).map(Vec::as_slice)
    }
}

impl SeriesStore for IndexMap<SeriesId, Vec<DataPoint>> {
    fn points(&self, id: SeriesId) -> Option<&[DataPoint]> {
        self.get(&id).map(Vec::as_slice)
    }
}

/// Simple owned store for hosts that keep samples in plain vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesTable {
    points: IndexMap<SeriesId, Vec<DataPoint>>,
    categories: IndexMap<SeriesId, Vec<String>>,
}

impl SeriesTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: SeriesId, points: Vec<DataPoint>) {
        self.points.insert(id, points);
    }

    /// Inserts categorical samples; sample `i` sits at X = `i`.
    pub fn insert_categorical(&mut self, id: SeriesId, labels: Vec<String>, values: Vec<f64>) {
        let points = values
            .into_iter()
            .enumerate()
            .map(|(idx, y)| DataPoint::new(idx as f64, y))
            .collect();
        self.points.insert(id, points);
        self.categories.insert(id, labels);
    }

    #[must_use]
    pub fn with_series(mut self, id: SeriesId, points: Vec<DataPoint>) -> Self {
        self.insert(id, points);
        self
    }

    pub fn remove(&mut self, id: SeriesId) -> Option<Vec<DataPoint>> {
        self.categories.shift_remove(&id);
        self.points.shift_remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl SeriesStore for SeriesTable {
    fn points(&self, id: SeriesId) -> Option<&[DataPoint]> {
        self.points.get(&id).map(Vec::as_slice)
    }

    fn category_label(&self, id: SeriesId, index: usize) -> Option<&str> {
        self.categories
            .get(&id)
            .and_then(|labels| labels.get(index))
            .map(String::as_str)
    }
}
