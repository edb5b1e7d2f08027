use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_TICK_COUNT, Scale};

pub const AXIS_TICK_SIZE_PX: f64 = 6.0;
pub const AXIS_TICK_PADDING_PX: f64 = 3.0;
pub const AXIS_FONT_SIZE_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// Tick at `position` pixels along the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

/// Axis descriptor handed to the frame builder.
///
/// `offset` is the translation of the axis group inside the plot area: the
/// bottom axis sits at `(0, inner_height)`, the left axis at the origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub orientation: AxisOrientation,
    pub offset: (f64, f64),
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
}

impl AxisSpec {
    #[must_use]
    pub fn bottom(scale: &impl Scale, inner_height: f64) -> Self {
        Self::from_scale(AxisOrientation::Bottom, scale, (0.0, inner_height))
    }

    #[must_use]
    pub fn left(scale: &impl Scale) -> Self {
        Self::from_scale(AxisOrientation::Left, scale, (0.0, 0.0))
    }

    fn from_scale(orientation: AxisOrientation, scale: &impl Scale, offset: (f64, f64)) -> Self {
        let ticks = scale
            .ticks(DEFAULT_TICK_COUNT)
            .into_iter()
            .map(|tick| AxisTick {
                position: scale.forward(tick.value),
                value: tick.value,
                label: tick.label,
            })
            .collect();
        Self {
            orientation,
            offset,
            range: scale.range(),
            ticks,
        }
    }
}
