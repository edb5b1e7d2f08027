use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Outer size of a chart container in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::Config(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::uniform(30.0)
    }
}

/// Container size plus margins.
///
/// The plot area is the inner rectangle left after subtracting margins; all
/// bar and axis geometry is expressed relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub margin: Margin,
}

impl PlotLayout {
    #[must_use]
    pub fn new(width: u32, height: u32, margin: Margin) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        f64::from(self.width) - self.margin.left - self.margin.right
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        f64::from(self.height) - self.margin.top - self.margin.bottom
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport().is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        self.margin.validate()?;
        if self.inner_width() <= 0.0 || self.inner_height() <= 0.0 {
            return Err(ChartError::Config(format!(
                "margins leave no plot area: inner size {}x{}",
                self.inner_width(),
                self.inner_height()
            )));
        }
        Ok(self)
    }
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self::new(800, 250, Margin::default())
    }
}
