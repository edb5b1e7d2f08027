use serde::{Deserialize, Serialize};

use crate::core::{BinThresholds, Color, PlotLayout, ValueKind};
use crate::error::{ChartError, ChartResult};

use super::transition::DEFAULT_TRANSITION_MS;

/// Bottom and top stops of the bar fill ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColourRange {
    pub bottom: Color,
    pub top: Color,
}

impl ColourRange {
    #[must_use]
    pub const fn new(bottom: Color, top: Color) -> Self {
        Self { bottom, top }
    }
}

impl Default for ColourRange {
    fn default() -> Self {
        Self {
            bottom: Color::WHITE,
            top: Color::rgb(20.0 / 255.0, 183.0 / 255.0, 239.0 / 255.0),
        }
    }
}

/// Public chart configuration.
///
/// Every field has a serde default so hosts can persist only what they
/// change; `ChartConfig::from_json("{}")` yields the stock 800x250 chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_id")]
    pub id: String,
    #[serde(default)]
    pub layout: PlotLayout,
    #[serde(default)]
    pub colour: ColourRange,
    #[serde(default = "default_y_label")]
    pub y_label: String,
    #[serde(default = "default_x_label")]
    pub x_label: String,
    /// Kind of the binned field (histograms) or of the x field (bar charts).
    #[serde(default)]
    pub value_kind: ValueKind,
    #[serde(default)]
    pub bin_count: Option<usize>,
    #[serde(default)]
    pub bin_thresholds: BinThresholds,
    #[serde(default = "default_true")]
    pub nice: bool,
    #[serde(default = "default_gutter_px")]
    pub gutter_px: f64,
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default)]
    pub show_counts: bool,
    #[serde(default = "default_true")]
    pub publish_button: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            id: default_id(),
            layout: PlotLayout::default(),
            colour: ColourRange::default(),
            y_label: default_y_label(),
            x_label: default_x_label(),
            value_kind: ValueKind::default(),
            bin_count: None,
            bin_thresholds: BinThresholds::default(),
            nice: true,
            gutter_px: default_gutter_px(),
            transition_ms: default_transition_ms(),
            show_counts: false,
            publish_button: true,
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, layout: PlotLayout) -> Self {
        Self {
            id: id.into(),
            layout,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| ChartError::Config(format!("invalid chart config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::Config(format!("failed to serialize chart config: {err}")))
    }

    #[must_use]
    pub fn with_colour(mut self, bottom: Color, top: Color) -> Self {
        self.colour = ColourRange::new(bottom, top);
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, y_label: impl Into<String>) -> Self {
        self.y_label = y_label.into();
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, x_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self
    }

    #[must_use]
    pub fn with_value_kind(mut self, value_kind: ValueKind) -> Self {
        self.value_kind = value_kind;
        self
    }

    #[must_use]
    pub fn with_bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = Some(bin_count);
        self
    }

    #[must_use]
    pub fn with_bin_thresholds(mut self, bin_thresholds: BinThresholds) -> Self {
        self.bin_thresholds = bin_thresholds;
        self
    }

    #[must_use]
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    #[must_use]
    pub fn with_gutter_px(mut self, gutter_px: f64) -> Self {
        self.gutter_px = gutter_px;
        self
    }

    #[must_use]
    pub fn with_transition_ms(mut self, transition_ms: u64) -> Self {
        self.transition_ms = transition_ms;
        self
    }

    #[must_use]
    pub fn with_show_counts(mut self, show_counts: bool) -> Self {
        self.show_counts = show_counts;
        self
    }

    #[must_use]
    pub fn with_publish_button(mut self, publish_button: bool) -> Self {
        self.publish_button = publish_button;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.id.trim().is_empty() {
            return Err(ChartError::Config("chart id must not be empty".to_owned()));
        }
        self.layout.validate()?;
        self.colour.bottom.validate()?;
        self.colour.top.validate()?;
        if self.y_label.is_empty() {
            return Err(ChartError::Config("y_label must not be empty".to_owned()));
        }
        if self.x_label.is_empty() {
            return Err(ChartError::Config("x_label must not be empty".to_owned()));
        }
        if let Some(0) = self.bin_count {
            return Err(ChartError::InvalidBinCount { count: 0 });
        }
        if !self.gutter_px.is_finite() || self.gutter_px < 0.0 {
            return Err(ChartError::Config(
                "gutter_px must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_id() -> String {
    "chart".to_owned()
}

fn default_y_label() -> String {
    "value".to_owned()
}

fn default_x_label() -> String {
    "start_date".to_owned()
}

fn default_true() -> bool {
    true
}

fn default_gutter_px() -> f64 {
    1.0
}

fn default_transition_ms() -> u64 {
    DEFAULT_TRANSITION_MS
}
