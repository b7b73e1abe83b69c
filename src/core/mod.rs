pub mod axis;
pub mod downsample;
pub mod mapper;
pub mod primitives;
pub mod scale;
pub mod series;
pub mod types;
pub mod viewport;

pub use axis::{
    Axis, AxisGroup, AxisOrientation, AxisRange, AxisSet, AxisSlot, AxisValueKind, AxisViewport,
};
pub use downsample::{reduce, reduce_indices};
pub use scale::{LinearScale, PixelSpan};
pub use series::{SeriesDescriptor, SeriesId, SeriesKind, SeriesStore, SeriesTable};
pub use types::{AreaId, DataPoint, PercentRect, PixelRect, SurfaceId, Viewport};
pub use viewport::{ViewportManager, WheelDirection};

#[cfg(feature = "parallel-downsample")]
pub use downsample::reduce_many;
