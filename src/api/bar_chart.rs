use tracing::{debug, warn};

use crate::core::{ColorScale, LinearScale, Record, Scale, extent, parse_pairs};
use crate::error::{ChartError, ChartResult};

use super::chart_config::ChartConfig;
use super::chart_state::{ChartKind, ChartState, PlotPoint, WidthScale};
use super::domain::{height_ceiling, unit_for, unit_slots};

/// Parses `(x_label, y_label)` pairs into a bar-chart state.
///
/// The width domain ends one unit past the largest x so the last bar has
/// room; every bar is `inner_width / units spanned` wide.
pub fn prepare_bar_chart(config: &ChartConfig, records: &[Record]) -> ChartResult<ChartState> {
    if records.is_empty() {
        return Err(ChartError::EmptyInput { context: "records" });
    }
    let pairs = parse_pairs(records, &config.x_label, config.value_kind, &config.y_label)?;
    let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
    let (min_x, max_x) = extent(&xs)?;
    let unit = unit_for(config.value_kind);

    let inner_width = config.layout.inner_width();
    let width_scale = WidthScale::build(
        config.value_kind,
        (min_x, max_x + unit),
        (0.0, inner_width),
        config.nice,
    )?;
    let slots = unit_slots(min_x, max_x, unit);
    let bar_width_px = inner_width / slots as f64;

    let negatives = pairs.iter().filter(|(_, y)| *y < 0.0).count();
    if negatives > 0 {
        warn!(negatives, "negative bar values are drawn with zero height");
    }
    let max_value = pairs.iter().map(|(_, y)| *y).fold(0.0, f64::max);
    debug!(
        records = records.len(),
        slots,
        bar_width_px,
        max_value,
        domain_start = width_scale.domain().0,
        domain_end = width_scale.domain().1,
        "bar chart prepared"
    );

    let points = pairs
        .iter()
        .map(|(x, y)| PlotPoint::new(*x, *x + unit, *y))
        .collect();
    let inner_height = config.layout.inner_height();
    let ceiling = height_ceiling(max_value);
    Ok(ChartState {
        kind: ChartKind::Bar,
        layout: config.layout,
        width_scale,
        height_scale: LinearScale::new((0.0, ceiling), (inner_height, 0.0))?,
        colour_scale: ColorScale::new((0.0, ceiling), config.colour.bottom, config.colour.top)?,
        points,
        bins: Vec::new(),
        bar_width_px,
        gutter_px: config.gutter_px,
    })
}
