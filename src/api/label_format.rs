use std::fmt::Write as _;

use crate::core::AxisValueKind;
use crate::core::primitives::unix_seconds_to_datetime;

use super::options::{AxisLabelFormat, NumericFormat};

/// Formats a number according to a [`NumericFormat`].
#[must_use]
pub fn format_numeric(value: f64, format: NumericFormat) -> String {
    if !value.is_finite() {
        return "NaN".to_owned();
    }
    let text = match format {
        NumericFormat::General => format!("{value}"),
        NumericFormat::Fixed(digits) => format_fixed(value, usize::from(digits)),
        NumericFormat::Number(digits) => group_thousands(&format_fixed(value, usize::from(digits))),
        NumericFormat::Exponential(digits) => format_exponential(value, usize::from(digits)),
        NumericFormat::Percent(digits) => {
            let scaled = group_thousands(&format_fixed(value * 100.0, usize::from(digits)));
            format!("{scaled}%")
        }
    };
    if text == "-0" { "0".to_owned() } else { text }
}

/// Label for a cursor value on an axis of the given kind.
///
/// Date-time values are Unix seconds rendered through `date_time_format`;
/// categorical values use `category` when the host provided one.
#[must_use]
pub fn format_axis_value(
    value: f64,
    kind: AxisValueKind,
    format: &AxisLabelFormat,
    date_time_format: &str,
    category: Option<&str>,
) -> String {
    if !format.visible {
        return String::new();
    }
    let body = match kind {
        AxisValueKind::Numeric => format_numeric(value, format.numeric_format),
        AxisValueKind::DateTime => format_date_time(value, date_time_format)
            .unwrap_or_else(|| format_numeric(value, format.numeric_format)),
        AxisValueKind::Categorical => category
            .map(str::to_owned)
            .unwrap_or_else(|| format_numeric(value, format.numeric_format)),
    };
    format!("{}{body}{}", format.prefix, format.postfix)
}

fn format_date_time(seconds: f64, pattern: &str) -> Option<String> {
    let time = unix_seconds_to_datetime(seconds)?;
    let mut text = String::new();
    // chrono reports malformed patterns through fmt::Error.
    write!(text, "{}", time.format(pattern)).ok()?;
    Some(text)
}

fn format_fixed(value: f64, digits: usize) -> String {
    let text = format!("{value:.digits$}");
    if text.starts_with('-') && text[1..].chars().all(|ch| ch == '0' || ch == '.') {
        text[1..].to_owned()
    } else {
        text
    }
}

fn format_exponential(value: f64, digits: usize) -> String {
    let text = format!("{value:.digits$e}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}E{sign}{:03}", exponent.abs())
}

fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
