//! Surface-level interaction API: registration, the per-surface controller
//! and its options.

mod area;
mod controller;
mod cursor_controller;
mod label_format;
mod options;
mod overlay;
mod pointer_coordinator;
mod registry;
mod zoom_controller;

pub use area::{ChartArea, ChartAreaConfig};
pub use controller::{InteractionController, SurfaceBackup, SurfaceDescriptor};
pub use label_format::{format_axis_value, format_numeric};
pub use options::{
    AxisLabelFormat, INTERACTION_OPTIONS_JSON_SCHEMA_V1, InteractionOptions,
    InteractionOptionsJsonContractV1, MIN_DISPLAY_DATA_SIZE, NumericFormat,
};
pub use registry::{InteractionHandle, InteractionRegistry};
