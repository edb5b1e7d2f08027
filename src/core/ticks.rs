use serde::{Deserialize, Serialize};

use crate::core::primitives::format_grouped;

/// Default number of ticks requested from a scale.
pub const DEFAULT_TICK_COUNT: usize = 10;

const MAX_NICE_ITERATIONS: usize = 10;

/// One labelled tick on an axis, in domain units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Picks a factor from {1, 2, 5, 10} for a raw step mantissa.
fn step_factor(error: f64) -> f64 {
    if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    }
}

/// Tick spacing for `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself. Negative results encode the
/// reciprocal of a sub-unit step (`-10` means a step of `0.1`) so that tick
/// values can be computed by division without accumulating rounding error.
#[must_use]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = step_factor(error);
    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -10_f64.powf(-power) / factor
    }
}

/// Absolute tick spacing for `count` ticks over `[start, stop]`, signed like
/// `stop - start`.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count as f64;
    let base = 10_f64.powf(raw.log10().floor());
    let step = base * step_factor(raw / base);
    if stop < start { -step } else { step }
}

/// Nicely rounded tick values covering `[start, stop]`.
#[must_use]
pub fn linear_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = if step > 0.0 {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    } else {
        let inverse = -step;
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        (first..=last).map(|i| i as f64 / inverse).collect()
    };

    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Extends `[start, stop]` outward to tick-step boundaries.
///
/// The step is re-derived from the widened domain until it stops changing.
/// Degenerate or non-finite domains are returned unchanged.
#[must_use]
pub fn nice_linear_domain(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }

    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut previous_step: Option<f64> = None;

    for _ in 0..MAX_NICE_ITERATIONS {
        let step = tick_increment(lo, hi, count);
        if !step.is_finite() || step == 0.0 || previous_step == Some(step) {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        }
        previous_step = Some(step);
    }

    if reverse { (hi, lo) } else { (lo, hi) }
}

/// Decimal places needed to tell ticks `step` apart.
#[must_use]
pub fn precision_for_step(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    let exponent = step.log10().floor();
    if exponent >= 0.0 { 0 } else { (-exponent) as usize }
}

/// Labels linear ticks with grouped thousands and step-derived precision.
#[must_use]
pub fn label_linear_ticks(values: Vec<f64>, start: f64, stop: f64, count: usize) -> Vec<Tick> {
    let precision = precision_for_step(tick_step(start, stop, count));
    values
        .into_iter()
        .map(|value| Tick {
            value,
            label: format_grouped(value, precision),
        })
        .collect()
}
