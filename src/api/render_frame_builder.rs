use crate::core::Color;
use crate::core::primitives::format_grouped;
use crate::error::ChartResult;
use crate::render::{FrameLayer, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::axis::{
    AXIS_FONT_SIZE_PX, AXIS_TICK_PADDING_PX, AXIS_TICK_SIZE_PX, AxisOrientation, AxisSpec,
};
use super::chart_state::{ChartKind, ChartState, DrawableBar};
use super::publish::PublishButton;

const AXIS_STROKE_PX: f64 = 1.0;
const LABEL_OFFSET_PX: f64 = 3.0;
// Baseline shifts matching the 0.71em/0.32em text offsets of SVG axes.
const BOTTOM_LABEL_DY_EM: f64 = 0.71;
const LEFT_LABEL_DY_EM: f64 = 0.32;

/// Inputs of one draw pass.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub id: &'a str,
    pub state: &'a ChartState,
    pub bars: &'a [DrawableBar],
    pub show_counts: bool,
    pub publish: Option<PublishButton>,
}

/// Materializes bars, optional value labels, both axes and the publish
/// button into a backend-agnostic frame.
pub fn build_chart_frame(inputs: FrameInputs<'_>) -> ChartResult<RenderFrame> {
    let state = inputs.state;
    let mut frame = RenderFrame::new(inputs.id, state.layout);

    // Histogram bars shift right by the gutter so the gap sits between bins.
    let shift = match state.kind {
        ChartKind::Histogram => state.gutter_px,
        ChartKind::Bar => 0.0,
    };
    for bar in inputs.bars {
        frame = frame.with_rect(RectPrimitive::new(
            bar.x + shift,
            bar.y,
            bar.width,
            bar.height,
            bar.fill,
            FrameLayer::Bars,
        ));
    }

    if inputs.show_counts {
        for (bar, point) in inputs.bars.iter().zip(&state.points) {
            if point.value <= 0.0 {
                continue;
            }
            frame = frame.with_text(TextPrimitive::new(
                format_grouped(point.value, value_precision(point.value)),
                bar.x + shift + bar.width / 2.0,
                bar.y - LABEL_OFFSET_PX,
                AXIS_FONT_SIZE_PX,
                Color::BLACK,
                TextHAlign::Center,
                FrameLayer::BarLabels,
            ));
        }
    }

    frame = append_axis(frame, &AxisSpec::bottom(&state.width_scale, state.inner_height()));
    frame = append_axis(frame, &AxisSpec::left(&state.height_scale));

    if let Some(button) = inputs.publish {
        frame = frame.with_rect(button.rect());
    }

    frame.validate()?;
    Ok(frame)
}

fn value_precision(value: f64) -> usize {
    if value.fract() == 0.0 { 0 } else { 2 }
}

fn append_axis(mut frame: RenderFrame, axis: &AxisSpec) -> RenderFrame {
    let (dx, dy) = axis.offset;
    let (start, end) = axis.range;
    match axis.orientation {
        AxisOrientation::Bottom => {
            frame = frame.with_line(axis_line(dx + start, dy, dx + end, dy, FrameLayer::XAxis));
            for tick in &axis.ticks {
                let x = dx + tick.position;
                frame = frame.with_line(axis_line(
                    x,
                    dy,
                    x,
                    dy + AXIS_TICK_SIZE_PX,
                    FrameLayer::XAxis,
                ));
                if !tick.label.is_empty() {
                    frame = frame.with_text(TextPrimitive::new(
                        tick.label.as_str(),
                        x,
                        dy + AXIS_TICK_SIZE_PX
                            + AXIS_TICK_PADDING_PX
                            + BOTTOM_LABEL_DY_EM * AXIS_FONT_SIZE_PX,
                        AXIS_FONT_SIZE_PX,
                        Color::BLACK,
                        TextHAlign::Center,
                        FrameLayer::XAxis,
                    ));
                }
            }
        }
        AxisOrientation::Left => {
            frame = frame.with_line(axis_line(dx, dy + start, dx, dy + end, FrameLayer::YAxis));
            for tick in &axis.ticks {
                let y = dy + tick.position;
                frame = frame.with_line(axis_line(
                    dx - AXIS_TICK_SIZE_PX,
                    y,
                    dx,
                    y,
                    FrameLayer::YAxis,
                ));
                if !tick.label.is_empty() {
                    frame = frame.with_text(TextPrimitive::new(
                        tick.label.as_str(),
                        dx - AXIS_TICK_SIZE_PX - AXIS_TICK_PADDING_PX,
                        y + LEFT_LABEL_DY_EM * AXIS_FONT_SIZE_PX,
                        AXIS_FONT_SIZE_PX,
                        Color::BLACK,
                        TextHAlign::Right,
                        FrameLayer::YAxis,
                    ));
                }
            }
        }
    }
    frame
}

fn axis_line(x1: f64, y1: f64, x2: f64, y2: f64, layer: FrameLayer) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, AXIS_STROKE_PX, Color::BLACK, layer)
}
