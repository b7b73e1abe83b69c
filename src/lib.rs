//! chart-interact: interaction core for 2-D chart surfaces.
//!
//! Provides LTTB downsampling for display, zoom/pan viewport management with
//! primary/secondary axis mirroring, and two measurement cursors that snap to
//! the nearest sample. Rendering the chart itself stays with the host; the
//! crate only emits an overlay frame and listener events.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{InteractionController, InteractionHandle, InteractionOptions, InteractionRegistry};
pub use error::{ChartError, ChartResult};
