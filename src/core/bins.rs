use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Bin count used when the caller does not request one.
pub const DEFAULT_BIN_COUNT: usize = 10;

/// One histogram bucket.
///
/// `[lower_bound, upper_bound)` except for the last bin of a series, whose
/// upper bound is inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub members: Vec<f64>,
}

impl Bin {
    #[must_use]
    pub fn count(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Strategy for placing bin boundaries inside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BinThresholds {
    /// Exactly `count` equal-width bins.
    #[default]
    Uniform,
    /// Boundaries at the axis scale's nice ticks; the bin count only
    /// approximates the requested one.
    NiceTicks,
}

/// Resolves an optional bin count, rejecting zero.
pub fn resolve_bin_count(count: Option<usize>) -> ChartResult<usize> {
    match count {
        None => Ok(DEFAULT_BIN_COUNT),
        Some(0) => Err(ChartError::InvalidBinCount { count: 0 }),
        Some(count) => Ok(count),
    }
}

/// `[min, max]` of a non-empty series.
pub fn extent(values: &[f64]) -> ChartResult<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next().ok_or(ChartError::EmptyInput { context: "domain" })?;
    Ok(iter.fold((first, first), |(lo, hi), value| {
        (lo.min(value), hi.max(value))
    }))
}

/// Interior boundaries splitting `domain` into `count` equal parts.
#[must_use]
pub fn uniform_thresholds(domain: (f64, f64), count: usize) -> Vec<f64> {
    let (lo, hi) = ordered(domain);
    if count <= 1 || lo == hi {
        return Vec::new();
    }
    let step = (hi - lo) / count as f64;
    (1..count).map(|i| lo + step * i as f64).collect()
}

/// Buckets `values` into `threshold_count` equal-width bins over `domain`.
///
/// Empty bins are kept. A degenerate domain yields one bin holding every
/// value equal to it.
pub fn compute_bins(
    values: &[f64],
    domain: (f64, f64),
    threshold_count: Option<usize>,
) -> ChartResult<Vec<Bin>> {
    let count = resolve_bin_count(threshold_count)?;
    validate_domain(domain)?;
    let thresholds = uniform_thresholds(domain, count);
    Ok(bin_with_thresholds(values, domain, &thresholds))
}

/// Buckets `values` using explicit boundaries.
///
/// Thresholds outside the open interval `(min, max)` are ignored, so the
/// bins always start at the domain minimum and end at the maximum. Values
/// outside the domain are dropped.
#[must_use]
pub fn bin_with_thresholds(values: &[f64], domain: (f64, f64), thresholds: &[f64]) -> Vec<Bin> {
    let (lo, hi) = ordered(domain);

    let mut interior: Vec<f64> = thresholds
        .iter()
        .copied()
        .filter(|threshold| *threshold > lo && *threshold < hi)
        .collect();
    interior.sort_by(f64::total_cmp);
    interior.dedup();

    let mut bins: Vec<Bin> = (0..=interior.len())
        .map(|i| Bin {
            lower_bound: if i == 0 { lo } else { interior[i - 1] },
            upper_bound: if i == interior.len() { hi } else { interior[i] },
            members: Vec::new(),
        })
        .collect();

    for &value in values {
        if !(lo <= value && value <= hi) {
            continue;
        }
        let index = interior.partition_point(|threshold| *threshold <= value);
        bins[index].members.push(value);
    }

    bins
}

fn ordered(domain: (f64, f64)) -> (f64, f64) {
    if domain.1 < domain.0 {
        (domain.1, domain.0)
    } else {
        domain
    }
}

fn validate_domain(domain: (f64, f64)) -> ChartResult<()> {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return Err(ChartError::InvalidData(
            "bin domain must be finite".to_owned(),
        ));
    }
    Ok(())
}
