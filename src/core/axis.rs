use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full data-defined extent of an axis.
///
/// `minimum <= maximum` always holds in value space; `reversed` only flips the
/// pixel direction used by the coordinate mapper.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    minimum: f64,
    maximum: f64,
    reversed: bool,
}

impl AxisRange {
    pub fn new(minimum: f64, maximum: f64, reversed: bool) -> ChartResult<Self> {
        if !minimum.is_finite() || !maximum.is_finite() {
            return Err(ChartError::InvalidData(
                "axis range must be finite".to_owned(),
            ));
        }
        if minimum > maximum {
            return Err(ChartError::InvalidData(format!(
                "axis minimum {minimum} must not exceed maximum {maximum}"
            )));
        }
        Ok(Self {
            minimum,
            maximum,
            reversed,
        })
    }

    #[must_use]
    pub fn minimum(self) -> f64 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(self) -> f64 {
        self.maximum
    }

    #[must_use]
    pub fn reversed(self) -> bool {
        self.reversed
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.maximum - self.minimum
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.minimum && value <= self.maximum
    }

    #[must_use]
    pub fn full_viewport(self) -> AxisViewport {
        AxisViewport {
            visible_min: self.minimum,
            visible_max: self.maximum,
        }
    }
}

/// Currently visible sub-range of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisViewport {
    pub visible_min: f64,
    pub visible_max: f64,
}

impl AxisViewport {
    #[must_use]
    pub const fn new(visible_min: f64, visible_max: f64) -> Self {
        Self {
            visible_min,
            visible_max,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.visible_max - self.visible_min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.visible_min && value <= self.visible_max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Primary or secondary member of an axis pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AxisGroup {
    #[default]
    Primary,
    Secondary,
}

/// One of the four axes an area owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisSlot {
    X1,
    X2,
    Y1,
    Y2,
}

impl AxisSlot {
    pub const ALL: [AxisSlot; 4] = [AxisSlot::X1, AxisSlot::X2, AxisSlot::Y1, AxisSlot::Y2];

    #[must_use]
    pub const fn new(orientation: AxisOrientation, group: AxisGroup) -> Self {
        match (orientation, group) {
            (AxisOrientation::Horizontal, AxisGroup::Primary) => AxisSlot::X1,
            (AxisOrientation::Horizontal, AxisGroup::Secondary) => AxisSlot::X2,
            (AxisOrientation::Vertical, AxisGroup::Primary) => AxisSlot::Y1,
            (AxisOrientation::Vertical, AxisGroup::Secondary) => AxisSlot::Y2,
        }
    }

    #[must_use]
    pub const fn orientation(self) -> AxisOrientation {
        match self {
            AxisSlot::X1 | AxisSlot::X2 => AxisOrientation::Horizontal,
            AxisSlot::Y1 | AxisSlot::Y2 => AxisOrientation::Vertical,
        }
    }

    #[must_use]
    pub const fn group(self) -> AxisGroup {
        match self {
            AxisSlot::X1 | AxisSlot::Y1 => AxisGroup::Primary,
            AxisSlot::X2 | AxisSlot::Y2 => AxisGroup::Secondary,
        }
    }
}

/// How axis values are interpreted when formatting labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AxisValueKind {
    #[default]
    Numeric,
    /// Values are Unix seconds.
    DateTime,
    /// Values are positions of host-provided category labels.
    Categorical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    range: AxisRange,
    viewport: AxisViewport,
    pub logarithmic: bool,
    pub enabled: bool,
    pub value_kind: AxisValueKind,
}

impl Axis {
    /// Creates an enabled linear numeric axis showing its full range.
    #[must_use]
    pub fn new(range: AxisRange) -> Self {
        Self {
            range,
            viewport: range.full_viewport(),
            logarithmic: false,
            enabled: true,
            value_kind: AxisValueKind::Numeric,
        }
    }

    /// Convenience for a non-reversed linear axis.
    pub fn linear(minimum: f64, maximum: f64) -> ChartResult<Self> {
        Ok(Self::new(AxisRange::new(minimum, maximum, false)?))
    }

    /// Starts the axis from a host-provided, already zoomed window.
    pub fn with_viewport(mut self, visible_min: f64, visible_max: f64) -> ChartResult<Self> {
        if !visible_min.is_finite() || !visible_max.is_finite() || visible_min > visible_max {
            return Err(ChartError::InvalidData(
                "axis viewport must be finite and ordered".to_owned(),
            ));
        }
        if !self.range.contains(visible_min) || !self.range.contains(visible_max) {
            return Err(ChartError::InvalidData(format!(
                "axis viewport [{visible_min}, {visible_max}] exceeds range [{}, {}]",
                self.range.minimum, self.range.maximum
            )));
        }
        self.viewport = AxisViewport::new(visible_min, visible_max);
        Ok(self)
    }

    #[must_use]
    pub fn with_value_kind(mut self, value_kind: AxisValueKind) -> Self {
        self.value_kind = value_kind;
        self
    }

    #[must_use]
    pub fn with_logarithmic(mut self, logarithmic: bool) -> Self {
        self.logarithmic = logarithmic;
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        self.range
    }

    #[must_use]
    pub fn viewport(&self) -> AxisViewport {
        self.viewport
    }

    pub(crate) fn set_viewport(&mut self, viewport: AxisViewport) {
        self.viewport = viewport;
    }
}

/// The four axes of a chart area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSet {
    pub x1: Axis,
    pub x2: Axis,
    pub y1: Axis,
    pub y2: Axis,
}

impl AxisSet {
    /// Primary axes only; secondaries mirror the primaries and stay disabled.
    #[must_use]
    pub fn new(x1: Axis, y1: Axis) -> Self {
        Self {
            x1,
            x2: x1.with_enabled(false),
            y1,
            y2: y1.with_enabled(false),
        }
    }

    #[must_use]
    pub fn with_secondary_x(mut self, x2: Axis) -> Self {
        self.x2 = x2;
        self
    }

    #[must_use]
    pub fn with_secondary_y(mut self, y2: Axis) -> Self {
        self.y2 = y2;
        self
    }

    #[must_use]
    pub fn get(&self, slot: AxisSlot) -> &Axis {
        match slot {
            AxisSlot::X1 => &self.x1,
            AxisSlot::X2 => &self.x2,
            AxisSlot::Y1 => &self.y1,
            AxisSlot::Y2 => &self.y2,
        }
    }

    pub fn get_mut(&mut self, slot: AxisSlot) -> &mut Axis {
        match slot {
            AxisSlot::X1 => &mut self.x1,
            AxisSlot::X2 => &mut self.x2,
            AxisSlot::Y1 => &mut self.y1,
            AxisSlot::Y2 => &mut self.y2,
        }
    }

    /// Primary and secondary axis of one orientation, borrowed together.
    pub fn pair_mut(&mut self, orientation: AxisOrientation) -> (&mut Axis, &mut Axis) {
        match orientation {
            AxisOrientation::Horizontal => (&mut self.x1, &mut self.x2),
            AxisOrientation::Vertical => (&mut self.y1, &mut self.y2),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxisSlot, &Axis)> {
        AxisSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }
}
