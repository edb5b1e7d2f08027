use serde::{Deserialize, Serialize};

use crate::core::ticks::{
    DEFAULT_TICK_COUNT, Tick, label_linear_ticks, linear_ticks, nice_linear_domain,
};
use crate::error::{ChartError, ChartResult};

/// Mapping from a continuous domain to a pixel range.
///
/// Implementations never clamp: values outside the domain extrapolate
/// linearly, and a degenerate domain maps everything to the range midpoint.
pub trait Scale {
    fn forward(&self, value: f64) -> f64;
    fn invert(&self, pixel: f64) -> f64;
    fn domain(&self) -> (f64, f64);
    fn range(&self) -> (f64, f64);
    fn ticks(&self, count: usize) -> Vec<Tick>;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    round: bool,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
            round: false,
        })
    }

    /// Rounds forward output to whole pixels.
    #[must_use]
    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }

    #[must_use]
    pub fn is_rounded(self) -> bool {
        self.round
    }

    /// Widens the domain to boundaries of the tick step for `count` ticks.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        let (start, end) = nice_linear_domain(self.domain_start, self.domain_end, count);
        self.domain_start = start;
        self.domain_end = end;
        self
    }

    #[must_use]
    pub fn nice_default(self) -> Self {
        self.nice(DEFAULT_TICK_COUNT)
    }

    /// Tick values only, without labels.
    #[must_use]
    pub fn tick_values(self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, count)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }
}

impl Scale for LinearScale {
    fn forward(&self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let t = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        let pixel = self.range_start * (1.0 - t) + self.range_end * t;
        if self.round { pixel.round() } else { pixel }
    }

    fn invert(&self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let t = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start * (1.0 - t) + self.domain_end * t
    }

    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn ticks(&self, count: usize) -> Vec<Tick> {
        label_linear_ticks(
            self.tick_values(count),
            self.domain_start,
            self.domain_end,
            count.max(1),
        )
    }
}
