use std::fmt;
use std::str::FromStr;

use crate::core::{Color, Scale};
use crate::error::{ChartError, ChartResult};

use super::chart_state::{ChartKind, ChartState, DrawableBar, PlotPoint};

/// Named visual attribute of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    X,
    Y,
    Width,
    Height,
    Fill,
    FillTransparent,
}

impl AttributeKind {
    pub const ALL: [Self; 6] = [
        Self::X,
        Self::Y,
        Self::Width,
        Self::Height,
        Self::Fill,
        Self::FillTransparent,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Width => "width",
            Self::Height => "height",
            Self::Fill => "fill",
            Self::FillTransparent => "fill-transparent",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttributeKind {
    type Err = ChartError;

    fn from_str(name: &str) -> ChartResult<Self> {
        match name {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "fill" => Ok(Self::Fill),
            "fill-transparent" | "fillTransparent" => Ok(Self::FillTransparent),
            _ => Err(ChartError::UnknownAttribute {
                name: name.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Number(f64),
    Color(Color),
}

impl AttributeValue {
    #[must_use]
    pub fn as_number(self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value),
            Self::Color(_) => None,
        }
    }

    #[must_use]
    pub fn as_color(self) -> Option<Color> {
        match self {
            Self::Color(color) => Some(color),
            Self::Number(_) => None,
        }
    }
}

pub type NumberAttributeFn = fn(&PlotPoint, &ChartState) -> f64;
pub type ColorAttributeFn = fn(&PlotPoint, &ChartState) -> Color;

/// Dispatch table from attribute to its pixel-mapping function.
///
/// Geometry and colour entries have distinct function types, so a table
/// cannot pair an attribute with a function of the wrong kind.
#[derive(Debug, Clone, Copy)]
pub struct AttributeTable {
    pub x: NumberAttributeFn,
    pub y: NumberAttributeFn,
    pub width: NumberAttributeFn,
    pub height: NumberAttributeFn,
    pub fill: ColorAttributeFn,
    pub fill_transparent: ColorAttributeFn,
}

impl AttributeTable {
    #[must_use]
    pub fn apply(
        &self,
        kind: AttributeKind,
        point: &PlotPoint,
        state: &ChartState,
    ) -> AttributeValue {
        match kind {
            AttributeKind::X => AttributeValue::Number((self.x)(point, state)),
            AttributeKind::Y => AttributeValue::Number((self.y)(point, state)),
            AttributeKind::Width => AttributeValue::Number((self.width)(point, state)),
            AttributeKind::Height => AttributeValue::Number((self.height)(point, state)),
            AttributeKind::Fill => AttributeValue::Color((self.fill)(point, state)),
            AttributeKind::FillTransparent => {
                AttributeValue::Color((self.fill_transparent)(point, state))
            }
        }
    }

    /// Resolves the full target rectangle of `point`.
    #[must_use]
    pub fn bar(&self, point: &PlotPoint, state: &ChartState) -> DrawableBar {
        DrawableBar {
            x: (self.x)(point, state),
            y: (self.y)(point, state),
            width: (self.width)(point, state),
            height: (self.height)(point, state),
            fill: (self.fill)(point, state),
        }
    }
}

pub static HISTOGRAM_ATTRIBUTES: AttributeTable = AttributeTable {
    x: attr_x,
    y: attr_y,
    width: attr_bin_width,
    height: attr_height,
    fill: attr_fill,
    fill_transparent: attr_fill_transparent,
};

pub static BAR_ATTRIBUTES: AttributeTable = AttributeTable {
    x: attr_x,
    y: attr_y,
    width: attr_slot_width,
    height: attr_height,
    fill: attr_fill,
    fill_transparent: attr_fill_transparent,
};

#[must_use]
pub fn table_for(kind: ChartKind) -> &'static AttributeTable {
    match kind {
        ChartKind::Histogram => &HISTOGRAM_ATTRIBUTES,
        ChartKind::Bar => &BAR_ATTRIBUTES,
    }
}

/// Resolves the attribute called `name` for `point`.
pub fn resolve(name: &str, point: &PlotPoint, state: &ChartState) -> ChartResult<AttributeValue> {
    let kind: AttributeKind = name.parse()?;
    Ok(resolve_kind(kind, point, state))
}

#[must_use]
pub fn resolve_kind(kind: AttributeKind, point: &PlotPoint, state: &ChartState) -> AttributeValue {
    table_for(state.kind).apply(kind, point, state)
}

#[must_use]
pub fn drawable_bar(point: &PlotPoint, state: &ChartState) -> DrawableBar {
    table_for(state.kind).bar(point, state)
}

#[must_use]
pub fn drawable_bars(state: &ChartState) -> Vec<DrawableBar> {
    state
        .points
        .iter()
        .map(|point| drawable_bar(point, state))
        .collect()
}

fn attr_x(point: &PlotPoint, state: &ChartState) -> f64 {
    state.width_scale.forward(point.start)
}

// Negative values are drawn as empty bars on the baseline.
fn attr_y(point: &PlotPoint, state: &ChartState) -> f64 {
    state.height_scale.forward(point.value.max(0.0))
}

fn attr_height(point: &PlotPoint, state: &ChartState) -> f64 {
    let top = state.height_scale.forward(point.value.max(0.0));
    (state.inner_height() - top).max(0.0)
}

fn attr_bin_width(point: &PlotPoint, state: &ChartState) -> f64 {
    let span = state.width_scale.forward(point.end) - state.width_scale.forward(point.start);
    (span - state.gutter_px).max(0.0)
}

fn attr_slot_width(_point: &PlotPoint, state: &ChartState) -> f64 {
    state.bar_width_px
}

fn attr_fill(point: &PlotPoint, state: &ChartState) -> Color {
    state.colour_scale.forward(point.value)
}

fn attr_fill_transparent(point: &PlotPoint, state: &ChartState) -> Color {
    state.colour_scale.forward(point.value).with_alpha(0.0)
}
