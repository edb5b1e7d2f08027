use serde::{Deserialize, Serialize};

use crate::core::{
    Bin, Color, ColorScale, LinearScale, PlotLayout, Scale, Tick, TimeScale, ValueKind,
};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Histogram,
    Bar,
}

/// One datum in chart space: a histogram bin or a bar-chart record.
///
/// `start..end` is the covered stretch of the width domain and `value` the
/// magnitude plotted on the height axis (bin count or record value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub start: f64,
    pub end: f64,
    pub value: f64,
}

impl PlotPoint {
    #[must_use]
    pub const fn new(start: f64, end: f64, value: f64) -> Self {
        Self { start, end, value }
    }
}

/// Width-axis scale strategy, chosen from the value kind of the x field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidthScale {
    Linear(LinearScale),
    Time(TimeScale),
}

impl WidthScale {
    /// Builds a rounded width scale over `domain`, niced when `nice` is set.
    pub fn build(
        kind: ValueKind,
        domain: (f64, f64),
        range: (f64, f64),
        nice: bool,
    ) -> ChartResult<Self> {
        let scale = match kind {
            ValueKind::Numeric => {
                let scale = LinearScale::new(domain, range)?.rounded();
                Self::Linear(if nice { scale.nice_default() } else { scale })
            }
            ValueKind::Date => {
                let scale = TimeScale::from_millis(domain, range)?.rounded();
                Self::Time(if nice { scale.nice_default() } else { scale })
            }
        };
        // Nicing can push a finite extent near f64::MAX out to infinity.
        let (start, end) = scale.domain();
        if !(end - start).is_finite() {
            return Err(ChartError::InvalidData(format!(
                "width domain [{start}, {end}] is not finite"
            )));
        }
        Ok(scale)
    }

    #[must_use]
    pub fn value_kind(self) -> ValueKind {
        match self {
            Self::Linear(_) => ValueKind::Numeric,
            Self::Time(_) => ValueKind::Date,
        }
    }

    /// Tick values without labels; used as nice bin thresholds.
    #[must_use]
    pub fn tick_values(self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(scale) => scale.tick_values(count),
            Self::Time(scale) => scale.tick_values(count),
        }
    }
}

impl Scale for WidthScale {
    fn forward(&self, value: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.forward(value),
            Self::Time(scale) => scale.forward(value),
        }
    }

    fn invert(&self, pixel: f64) -> f64 {
        match self {
            Self::Linear(scale) => scale.invert(pixel),
            Self::Time(scale) => scale.invert(pixel),
        }
    }

    fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.domain(),
            Self::Time(scale) => scale.domain(),
        }
    }

    fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(scale) => scale.range(),
            Self::Time(scale) => scale.range(),
        }
    }

    fn ticks(&self, count: usize) -> Vec<Tick> {
        match self {
            Self::Linear(scale) => scale.ticks(count),
            Self::Time(scale) => scale.ticks(count),
        }
    }
}

/// Everything a draw pass needs, built once per `plot`/`update`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub kind: ChartKind,
    pub layout: PlotLayout,
    pub width_scale: WidthScale,
    pub height_scale: LinearScale,
    pub colour_scale: ColorScale,
    pub points: Vec<PlotPoint>,
    /// Histogram buckets; empty for bar charts.
    pub bins: Vec<Bin>,
    /// Slot width of one x unit; only meaningful for bar charts.
    pub bar_width_px: f64,
    pub gutter_px: f64,
}

impl ChartState {
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.layout.inner_width()
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.layout.inner_height()
    }

    /// Largest plotted value, the top of the height domain.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.height_scale.domain().1
    }
}

/// Resolved rectangle for one plot point, in plot-area pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawableBar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Color,
}

impl DrawableBar {
    /// Collapsed copy resting on `baseline`, the state bars enter from.
    #[must_use]
    pub fn collapsed(self, baseline: f64) -> Self {
        Self {
            y: baseline,
            height: 0.0,
            ..self
        }
    }
}
