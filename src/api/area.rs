use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    AreaId, AxisGroup, AxisOrientation, AxisSet, AxisSlot, PercentRect, PixelRect, SeriesDescriptor,
    SeriesId, SeriesStore, Viewport, ViewportManager,
};
use crate::error::{ChartError, ChartResult};

/// Host description of one chart area at registration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAreaConfig {
    pub id: AreaId,
    /// Hit-test region, percent of the surface.
    pub bounds: PercentRect,
    /// Inner plotting rectangle the axes map onto, percent of the surface.
    pub plot_bounds: PercentRect,
    pub axes: AxisSet,
    #[serde(default)]
    pub series: Vec<SeriesDescriptor>,
}

impl ChartAreaConfig {
    /// Area whose plot fills its whole hit-test region.
    #[must_use]
    pub fn new(id: AreaId, bounds: PercentRect, axes: AxisSet) -> Self {
        Self {
            id,
            bounds,
            plot_bounds: bounds,
            axes,
            series: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_plot_bounds(mut self, plot_bounds: PercentRect) -> Self {
        self.plot_bounds = plot_bounds;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesDescriptor) -> Self {
        self.series.push(series);
        self
    }
}

/// Registered chart area with its axes and series descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartArea {
    id: AreaId,
    bounds: PercentRect,
    plot_bounds: PercentRect,
    axes: AxisSet,
    series: IndexMap<SeriesId, SeriesDescriptor>,
    supported: bool,
}

impl ChartArea {
    pub fn from_config(config: ChartAreaConfig) -> ChartResult<Self> {
        let bounds = config.bounds.validate()?;
        let plot_bounds = config.plot_bounds.validate()?;

        let mut series = IndexMap::with_capacity(config.series.len());
        for descriptor in config.series {
            let id = descriptor.id;
            if series.insert(id, descriptor).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "series {} registered twice in area {}",
                    id.0, config.id.0
                )));
            }
        }

        let supported = !series.is_empty()
            && series.values().all(|descriptor| descriptor.kind.is_supported());

        // A secondary axis a series is plotted against must follow its primary.
        let mut axes = config.axes;
        for descriptor in series.values() {
            if descriptor.x_axis == AxisGroup::Secondary {
                axes.x2.enabled = true;
            }
            if descriptor.y_axis == AxisGroup::Secondary {
                axes.y2.enabled = true;
            }
        }

        Ok(Self {
            id: config.id,
            bounds,
            plot_bounds,
            axes,
            series,
            supported,
        })
    }

    #[must_use]
    pub fn id(&self) -> AreaId {
        self.id
    }

    #[must_use]
    pub fn bounds(&self) -> PercentRect {
        self.bounds
    }

    #[must_use]
    pub fn plot_bounds(&self) -> PercentRect {
        self.plot_bounds
    }

    #[must_use]
    pub fn axes(&self) -> &AxisSet {
        &self.axes
    }

    pub(super) fn axes_mut(&mut self) -> &mut AxisSet {
        &mut self.axes
    }

    /// Fixed at registration: at least one series and none of an unsupported kind.
    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    #[must_use]
    pub fn has_logarithmic_axis(&self) -> bool {
        self.axes.iter().any(|(_, axis)| axis.enabled && axis.logarithmic)
    }

    #[must_use]
    pub fn accepts_interaction(&self) -> bool {
        self.supported && !self.has_logarithmic_axis()
    }

    /// Whether any visible series currently has at least one sample.
    #[must_use]
    pub fn has_data(&self, data: &dyn SeriesStore) -> bool {
        self.visible_series().any(|descriptor| {
            data.points(descriptor.id)
                .is_some_and(|points| !points.is_empty())
        })
    }

    #[must_use]
    pub fn plot_rect(&self, viewport: Viewport) -> PixelRect {
        self.plot_bounds.to_pixels(viewport)
    }

    #[must_use]
    pub fn series(&self, id: SeriesId) -> Option<&SeriesDescriptor> {
        self.series.get(&id)
    }

    pub(super) fn series_mut(&mut self, id: SeriesId) -> Option<&mut SeriesDescriptor> {
        self.series.get_mut(&id)
    }

    pub fn series_iter(&self) -> impl Iterator<Item = &SeriesDescriptor> {
        self.series.values()
    }

    pub fn visible_series(&self) -> impl Iterator<Item = &SeriesDescriptor> {
        self.series.values().filter(|descriptor| descriptor.visible)
    }

    #[must_use]
    pub fn first_visible_series(&self) -> Option<&SeriesDescriptor> {
        self.visible_series().next()
    }

    /// Axis slot a series maps through for `orientation`.
    #[must_use]
    pub fn axis_slot_for(descriptor: &SeriesDescriptor, orientation: AxisOrientation) -> AxisSlot {
        match orientation {
            AxisOrientation::Horizontal => AxisSlot::new(orientation, descriptor.x_axis),
            AxisOrientation::Vertical => AxisSlot::new(orientation, descriptor.y_axis),
        }
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.axes
            .iter()
            .any(|(_, axis)| ViewportManager::is_zoomed(axis))
    }
}
