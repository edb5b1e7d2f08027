use tracing::{debug, trace, warn};

use crate::core::{
    Bin, BinThresholds, ColorScale, LinearScale, Record, Scale, ValueKind, bin_with_thresholds,
    extent, parse_field, resolve_bin_count, uniform_thresholds,
};
use crate::error::{ChartError, ChartResult};

use super::chart_config::ChartConfig;
use super::chart_state::{ChartKind, ChartState, PlotPoint, WidthScale};
use super::domain::{height_ceiling, unit_for, widen_degenerate};

/// Parses, bins and scales `records` into a fresh histogram state.
///
/// Numeric domains are anchored at zero so the axis starts at the baseline;
/// date domains span the data extent.
pub fn prepare_histogram(config: &ChartConfig, records: &[Record]) -> ChartResult<ChartState> {
    let values = parse_values(config, records)?;
    let (min, max) = extent(&values)?;
    let domain = match config.value_kind {
        ValueKind::Numeric => (min.min(0.0), max),
        ValueKind::Date => (min, max),
    };
    let domain = widen_degenerate(domain, unit_for(config.value_kind));

    let width_scale = WidthScale::build(
        config.value_kind,
        domain,
        (0.0, config.layout.inner_width()),
        config.nice,
    )?;
    debug!(
        records = records.len(),
        domain_start = width_scale.domain().0,
        domain_end = width_scale.domain().1,
        "histogram width scale built"
    );

    bin_into_state(config, &values, width_scale)
}

/// Re-bins `records` against the width scale of `previous`.
///
/// Only counts change: bar x and width stay where the previous render put
/// them, and values outside the previous domain are dropped.
pub fn rebin_histogram(
    previous: &ChartState,
    config: &ChartConfig,
    records: &[Record],
) -> ChartResult<ChartState> {
    let values = parse_values(config, records)?;
    let state = bin_into_state(config, &values, previous.width_scale)?;
    let binned: usize = state.bins.iter().map(Bin::count).sum();
    let dropped = values.len() - binned;
    if dropped > 0 {
        warn!(
            dropped,
            binned,
            domain_start = state.width_scale.domain().0,
            domain_end = state.width_scale.domain().1,
            "values outside the kept domain were not binned"
        );
    }
    Ok(state)
}

fn parse_values(config: &ChartConfig, records: &[Record]) -> ChartResult<Vec<f64>> {
    if records.is_empty() {
        return Err(ChartError::EmptyInput { context: "records" });
    }
    let values = parse_field(records, &config.y_label, config.value_kind)?;
    trace!(count = values.len(), field = %config.y_label, "histogram values parsed");
    Ok(values)
}

fn bin_into_state(
    config: &ChartConfig,
    values: &[f64],
    width_scale: WidthScale,
) -> ChartResult<ChartState> {
    let count = resolve_bin_count(config.bin_count)?;
    let domain = width_scale.domain();
    let thresholds = match config.bin_thresholds {
        BinThresholds::Uniform => uniform_thresholds(domain, count),
        BinThresholds::NiceTicks => width_scale.tick_values(count),
    };
    let bins = bin_with_thresholds(values, domain, &thresholds);

    let points: Vec<PlotPoint> = bins
        .iter()
        .map(|bin| PlotPoint::new(bin.lower_bound, bin.upper_bound, bin.count() as f64))
        .collect();
    let max_count = points.iter().map(|point| point.value).fold(0.0, f64::max);
    debug!(
        bins = bins.len(),
        binned = points.iter().map(|point| point.value).sum::<f64>(),
        max_count,
        "histogram bins computed"
    );

    let inner_height = config.layout.inner_height();
    let ceiling = height_ceiling(max_count);
    Ok(ChartState {
        kind: ChartKind::Histogram,
        layout: config.layout,
        width_scale,
        height_scale: LinearScale::new((0.0, ceiling), (inner_height, 0.0))?,
        colour_scale: ColorScale::new((0.0, ceiling), config.colour.bottom, config.colour.top)?,
        points,
        bins,
        bar_width_px: 0.0,
        gutter_px: config.gutter_px,
    })
}
