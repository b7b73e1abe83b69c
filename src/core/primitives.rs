use chrono::{DateTime, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Converts Unix seconds back to a UTC timestamp with millisecond resolution.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1_000.0).round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

/// Rounds `value` to `precision` decimal places (half away from zero).
///
/// A negative precision leaves the value untouched, as does any value that
/// cannot be represented as a `Decimal`.
#[must_use]
pub fn round_to_precision(value: f64, precision: i32) -> f64 {
    if precision < 0 || !value.is_finite() {
        return value;
    }
    let Some(decimal) = Decimal::from_f64(value) else {
        return value;
    };
    let places = u32::try_from(precision).unwrap_or(0).min(28);
    decimal
        .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(value)
}
