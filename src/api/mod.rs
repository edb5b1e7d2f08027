mod attributes;
mod axis;
mod bar_chart;
mod chart_config;
mod chart_engine;
mod chart_state;
mod domain;
mod histogram;
mod publish;
mod render_frame_builder;
mod transition;

pub use attributes::{
    AttributeKind, AttributeTable, AttributeValue, BAR_ATTRIBUTES, ColorAttributeFn,
    HISTOGRAM_ATTRIBUTES, NumberAttributeFn, drawable_bar, drawable_bars, resolve, resolve_kind,
    table_for,
};
pub use axis::{
    AXIS_FONT_SIZE_PX, AXIS_TICK_PADDING_PX, AXIS_TICK_SIZE_PX, AxisOrientation, AxisSpec,
    AxisTick,
};
pub use bar_chart::prepare_bar_chart;
pub use chart_config::{ChartConfig, ColourRange};
pub use chart_engine::ChartEngine;
pub use chart_state::{ChartKind, ChartState, DrawableBar, PlotPoint, WidthScale};
pub use histogram::{prepare_histogram, rebin_histogram};
pub use publish::{
    PUBLISH_BUTTON_SIZE_PX, PUBLISH_IDLE_ALPHA, PublishButton, PublishButtonState,
};
pub use render_frame_builder::{FrameInputs, build_chart_frame};
pub use transition::{BarTransition, DEFAULT_TRANSITION_MS, PULSE_PEAK_AT, ease_cubic_in_out};
