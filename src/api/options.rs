use std::fmt;
use std::str::FromStr;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::core::AxisSlot;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LineStrokeStyle};

pub const INTERACTION_OPTIONS_JSON_SCHEMA_V1: u32 = 1;

/// Smallest accepted `display_data_size`.
pub const MIN_DISPLAY_DATA_SIZE: usize = 10;

/// Numeric label style, written like `G`, `F2`, `N0`, `E3` or `P1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NumericFormat {
    /// Shortest round-trip representation.
    #[default]
    General,
    /// Fixed number of decimals.
    Fixed(u8),
    /// Fixed decimals with `,` thousands separators.
    Number(u8),
    /// Scientific notation with the given mantissa decimals.
    Exponential(u8),
    /// Value multiplied by 100 with a `%` suffix.
    Percent(u8),
}

impl FromStr for NumericFormat {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let mut chars = input.chars();
        let Some(code) = chars.next() else {
            return Ok(NumericFormat::General);
        };
        let digits = chars.as_str();
        let precision = |default: u8| -> ChartResult<u8> {
            if digits.is_empty() {
                return Ok(default);
            }
            digits
                .parse::<u8>()
                .ok()
                .filter(|value| *value <= 20)
                .ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "invalid numeric format precision in `{input}`"
                    ))
                })
        };

        match code.to_ascii_uppercase() {
            'G' if digits.is_empty() => Ok(NumericFormat::General),
            'F' => Ok(NumericFormat::Fixed(precision(2)?)),
            'N' => Ok(NumericFormat::Number(precision(2)?)),
            'E' => Ok(NumericFormat::Exponential(precision(6)?)),
            'P' => Ok(NumericFormat::Percent(precision(2)?)),
            _ => Err(ChartError::InvalidData(format!(
                "unsupported numeric format `{input}`"
            ))),
        }
    }
}

impl fmt::Display for NumericFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericFormat::General => f.write_str("G"),
            NumericFormat::Fixed(digits) => write!(f, "F{digits}"),
            NumericFormat::Number(digits) => write!(f, "N{digits}"),
            NumericFormat::Exponential(digits) => write!(f, "E{digits}"),
            NumericFormat::Percent(digits) => write!(f, "P{digits}"),
        }
    }
}

impl TryFrom<String> for NumericFormat {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NumericFormat> for String {
    fn from(value: NumericFormat) -> Self {
        value.to_string()
    }
}

/// How the cursor value of one axis is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabelFormat {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub numeric_format: NumericFormat,
    #[serde(default)]
    pub postfix: String,
    #[serde(default = "default_true")]
    pub visible: bool,
}

impl Default for AxisLabelFormat {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            numeric_format: NumericFormat::General,
            postfix: String::new(),
            visible: true,
        }
    }
}

impl AxisLabelFormat {
    #[must_use]
    pub fn with_numeric_format(mut self, numeric_format: NumericFormat) -> Self {
        self.numeric_format = numeric_format;
        self
    }

    #[must_use]
    pub fn with_affixes(mut self, prefix: impl Into<String>, postfix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self.postfix = postfix.into();
        self
    }
}

/// Per-surface interaction configuration.
///
/// Serializable so hosts can persist it next to their chart layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOptions {
    #[serde(default)]
    pub allow_hide_series: bool,
    /// Decimal places zoom bounds are rounded to; negative disables rounding.
    #[serde(default = "default_precision")]
    pub x_axis_precision: i32,
    #[serde(default = "default_precision")]
    pub y_axis_precision: i32,
    #[serde(default = "default_cursor1_color")]
    pub cursor1_color: Color,
    #[serde(default = "default_cursor2_color")]
    pub cursor2_color: Color,
    #[serde(default = "default_line_width")]
    pub cursor1_line_width: f64,
    #[serde(default = "default_line_width")]
    pub cursor2_line_width: f64,
    #[serde(default)]
    pub cursor1_dash_style: LineStrokeStyle,
    #[serde(default)]
    pub cursor2_dash_style: LineStrokeStyle,
    #[serde(default = "default_true")]
    pub snap_cursor_to_data: bool,
    #[serde(default = "default_true")]
    pub show_cursor_value: bool,
    #[serde(default = "default_display_data_size")]
    pub display_data_size: usize,
    /// strftime pattern for date-time axes.
    #[serde(default = "default_date_time_format")]
    pub date_time_format: String,
    #[serde(default = "default_selection_color")]
    pub selection_color: Color,
    #[serde(default)]
    pub x1_label: AxisLabelFormat,
    #[serde(default)]
    pub x2_label: AxisLabelFormat,
    #[serde(default)]
    pub y1_label: AxisLabelFormat,
    #[serde(default)]
    pub y2_label: AxisLabelFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionOptionsJsonContractV1 {
    pub schema_version: u32,
    pub options: InteractionOptions,
}

fn default_true() -> bool {
    true
}

fn default_precision() -> i32 {
    -1
}

fn default_cursor1_color() -> Color {
    Color::rgb(0.86, 0.15, 0.15)
}

fn default_cursor2_color() -> Color {
    Color::rgb(0.12, 0.35, 0.85)
}

fn default_line_width() -> f64 {
    1.0
}

fn default_display_data_size() -> usize {
    800
}

fn default_date_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_owned()
}

fn default_selection_color() -> Color {
    Color::rgba(0.5, 0.5, 0.5, 0.25)
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            allow_hide_series: false,
            x_axis_precision: default_precision(),
            y_axis_precision: default_precision(),
            cursor1_color: default_cursor1_color(),
            cursor2_color: default_cursor2_color(),
            cursor1_line_width: default_line_width(),
            cursor2_line_width: default_line_width(),
            cursor1_dash_style: LineStrokeStyle::Solid,
            cursor2_dash_style: LineStrokeStyle::Solid,
            snap_cursor_to_data: true,
            show_cursor_value: true,
            display_data_size: default_display_data_size(),
            date_time_format: default_date_time_format(),
            selection_color: default_selection_color(),
            x1_label: AxisLabelFormat::default(),
            x2_label: AxisLabelFormat::default(),
            y1_label: AxisLabelFormat::default(),
            y2_label: AxisLabelFormat::default(),
        }
    }
}

impl InteractionOptions {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, width) in [
            ("cursor1_line_width", self.cursor1_line_width),
            ("cursor2_line_width", self.cursor2_line_width),
        ] {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        self.cursor1_color.validate()?;
        self.cursor2_color.validate()?;
        self.selection_color.validate()?;

        if self.date_time_format.is_empty()
            || StrftimeItems::new(&self.date_time_format).any(|item| matches!(item, Item::Error))
        {
            return Err(ChartError::InvalidData(format!(
                "invalid date-time format `{}`",
                self.date_time_format
            )));
        }
        Ok(())
    }

    /// `display_data_size` with its lower floor applied.
    #[must_use]
    pub fn effective_display_data_size(&self) -> usize {
        self.display_data_size.max(MIN_DISPLAY_DATA_SIZE)
    }

    #[must_use]
    pub fn label_format(&self, slot: AxisSlot) -> &AxisLabelFormat {
        match slot {
            AxisSlot::X1 => &self.x1_label,
            AxisSlot::X2 => &self.x2_label,
            AxisSlot::Y1 => &self.y1_label,
            AxisSlot::Y2 => &self.y2_label,
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = InteractionOptionsJsonContractV1 {
            schema_version: INTERACTION_OPTIONS_JSON_SCHEMA_V1,
            options: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize options contract v1: {e}"))
        })
    }

    /// Accepts both the versioned contract and a bare options object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse options json payload: {e}"))
        })?;

        let options = if value.get("schema_version").is_some() {
            let payload: InteractionOptionsJsonContractV1 = serde_json::from_value(value)
                .map_err(|e| {
                    ChartError::InvalidData(format!("failed to parse options contract: {e}"))
                })?;
            if payload.schema_version != INTERACTION_OPTIONS_JSON_SCHEMA_V1 {
                return Err(ChartError::InvalidData(format!(
                    "unsupported options schema version: {}",
                    payload.schema_version
                )));
            }
            payload.options
        } else {
            serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse options object: {e}"))
            })?
        };

        options.validate()?;
        Ok(options)
    }
}
