use crate::error::{ChartError, ChartResult};

/// Pixel coordinates that the start and end of a domain map onto.
///
/// `start` may be greater than `end` (vertical axes, reversed axes).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelSpan {
    pub start: f64,
    pub end: f64,
}

impl PixelSpan {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start != self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if domain_start == domain_end {
            return Err(ChartError::DegenerateMapping(format!(
                "scale domain collapsed at {domain_start}"
            )));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, span: PixelSpan) -> ChartResult<f64> {
        if !span.is_valid() {
            return Err(ChartError::DegenerateMapping(format!(
                "pixel span [{}, {}] is empty",
                span.start, span.end
            )));
        }

        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(span.start + normalized * (span.end - span.start))
    }

    pub fn pixel_to_domain(self, pixel: f64, span: PixelSpan) -> ChartResult<f64> {
        if !span.is_valid() {
            return Err(ChartError::DegenerateMapping(format!(
                "pixel span [{}, {}] is empty",
                span.start, span.end
            )));
        }

        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - span.start) / (span.end - span.start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
