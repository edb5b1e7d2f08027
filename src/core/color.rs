use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::scale::{LinearScale, Scale};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
///
/// Serialized as a CSS color string (`rgb(r, g, b)` or `rgba(r, g, b, a)`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 0..=255 channel bytes.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    /// Channel-wise interpolation; `t` outside `[0, 1]` extrapolates and the
    /// result is clamped back into gamut.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let mix = |a: f64, b: f64| (a * (1.0 - t) + b * t).clamp(0.0, 1.0);
        Self::rgba(
            mix(self.red, other.red),
            mix(self.green, other.green),
            mix(self.blue, other.blue),
            mix(self.alpha, other.alpha),
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// CSS functional notation with 0..=255 integer channels.
    #[must_use]
    pub fn to_css(self) -> String {
        let byte = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b) = (byte(self.red), byte(self.green), byte(self.blue));
        if self.alpha >= 1.0 {
            format!("rgb({r}, {g}, {b})")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.alpha.clamp(0.0, 1.0))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ChartError;

    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
    fn from_str(text: &str) -> ChartResult<Self> {
        let text = text.trim();
        let invalid = || ChartError::Config(format!("unsupported color `{text}`"));

        if let Some(hex) = text.strip_prefix('#') {
            let expanded: String = match hex.len() {
                3 => hex.chars().flat_map(|c| [c, c]).collect(),
                6 => hex.to_owned(),
                _ => return Err(invalid()),
            };
            let channel = |i: usize| {
                expanded
                    .get(i..i + 2)
                    .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                    .ok_or_else(invalid)
            };
            return Ok(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?));
        }

        let (body, expect_alpha) = if let Some(body) = text.strip_prefix("rgba(") {
            (body, true)
        } else if let Some(body) = text.strip_prefix("rgb(") {
            (body, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<f64> = body
            .split(',')
            .map(|part| part.trim().parse::<f64>().map_err(|_| invalid()))
            .collect::<ChartResult<_>>()?;

        let color = match (parts.as_slice(), expect_alpha) {
            ([r, g, b], false) => Self::rgb(r / 255.0, g / 255.0, b / 255.0),
            ([r, g, b, a], true) => Self::rgba(r / 255.0, g / 255.0, b / 255.0, *a),
            _ => return Err(invalid()),
        };
        color.validate().map_err(|_| invalid())?;
        Ok(color)
    }
}

impl TryFrom<String> for Color {
    type Error = ChartError;

    fn try_from(value: String) -> ChartResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

/// Maps a value domain onto a two-stop color ramp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    position: LinearScale,
    bottom: Color,
    top: Color,
}

impl ColorScale {
    pub fn new(domain: (f64, f64), bottom: Color, top: Color) -> ChartResult<Self> {
        bottom.validate()?;
        top.validate()?;
        Ok(Self {
            position: LinearScale::new(domain, (0.0, 1.0))?,
            bottom,
            top,
        })
    }

    #[must_use]
    pub fn forward(self, value: f64) -> Color {
        self.bottom.lerp(self.top, self.position.forward(value))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.position.domain()
    }

    #[must_use]
    pub fn stops(self) -> (Color, Color) {
        (self.bottom, self.top)
    }
}
