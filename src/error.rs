use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("degenerate axis mapping: {0}")]
    DegenerateMapping(String),

    #[error("no supported chart area among {area_count} registered areas")]
    NoSupportedArea { area_count: usize },

    #[error("unknown interaction handle: {0}")]
    UnknownHandle(u64),
}
