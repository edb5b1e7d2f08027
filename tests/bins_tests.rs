use binchart::ChartError;
use binchart::core::{
    Bin, DEFAULT_BIN_COUNT, bin_with_thresholds, compute_bins, extent, resolve_bin_count,
    uniform_thresholds,
};

const SAMPLE: [f64; 40] = [
    5.0, 1.0, 35.0, 55.0, 6.0, 3.0, 34.0, 76.0, 23.0, 64.0, 23.0, 1.0, 3.0, 6.0, 14.0, 13.0,
    11.0, 25.0, 35.0, 45.0, 55.0, 25.0, 34.0, 54.0, 53.0, 52.0, 51.0, 45.0, 47.0, 36.0, 39.0,
    8.0, 19.0, 56.0, 87.0, 76.0, 74.0, 73.0, 26.0, 45.0,
];

fn counts(bins: &[Bin]) -> Vec<usize> {
    bins.iter().map(Bin::count).collect()
}

#[test]
fn sample_over_nice_domain_yields_ten_even_bins() {
    let bins = compute_bins(&SAMPLE, (0.0, 90.0), Some(10)).expect("bins");
    assert_eq!(bins.len(), 10);
    assert_eq!(counts(&bins), vec![8, 3, 6, 4, 2, 7, 4, 1, 4, 1]);
    assert_eq!(bins.iter().map(Bin::count).sum::<usize>(), 40);

    for (index, bin) in bins.iter().enumerate() {
        assert_eq!(bin.lower_bound, 9.0 * index as f64);
        assert_eq!(bin.upper_bound, 9.0 * (index + 1) as f64);
        assert_eq!(bin.width(), 9.0);
    }
    for pair in bins.windows(2) {
        assert_eq!(pair[0].upper_bound, pair[1].lower_bound);
    }
}

#[test]
fn default_count_is_ten() {
    assert_eq!(resolve_bin_count(None).expect("default"), DEFAULT_BIN_COUNT);
    let bins = compute_bins(&SAMPLE, (0.0, 90.0), None).expect("bins");
    assert_eq!(bins.len(), 10);
}

#[test]
fn zero_bin_count_is_a_configuration_error() {
    let err = compute_bins(&SAMPLE, (0.0, 90.0), Some(0)).expect_err("zero bins");
    assert!(matches!(err, ChartError::InvalidBinCount { count: 0 }));
    assert!(err.is_configuration_error());
}

#[test]
fn last_bin_includes_domain_maximum() {
    let bins = compute_bins(&[0.0, 5.0, 10.0], (0.0, 10.0), Some(2)).expect("bins");
    assert_eq!(counts(&bins), vec![1, 2]);
    assert_eq!(bins[1].members, vec![5.0, 10.0]);
}

#[test]
fn empty_bins_are_kept() {
    let bins = compute_bins(&[1.0, 99.0], (0.0, 100.0), Some(5)).expect("bins");
    assert_eq!(counts(&bins), vec![1, 0, 0, 0, 1]);
}

#[test]
fn identical_values_produce_a_single_full_bin() {
    let values = [4.0, 4.0, 4.0];
    let (min, max) = extent(&values).expect("extent");
    let bins = compute_bins(&values, (min, max), Some(10)).expect("bins");
    assert_eq!(bins.len(), 1);
    assert_eq!(bins[0].count(), 3);
    assert_eq!(bins[0].lower_bound, 4.0);
    assert_eq!(bins[0].upper_bound, 4.0);
}

#[test]
fn values_outside_domain_are_ignored() {
    let bins = compute_bins(&[-1.0, 2.0, 3.0, 11.0], (0.0, 10.0), Some(2)).expect("bins");
    assert_eq!(bins.iter().map(Bin::count).sum::<usize>(), 2);
}

#[test]
fn explicit_thresholds_outside_domain_are_dropped() {
    let bins = bin_with_thresholds(&[1.0, 4.0, 7.0], (0.0, 8.0), &[-2.0, 0.0, 5.0, 8.0, 12.0]);
    assert_eq!(bins.len(), 2);
    assert_eq!(bins[0].lower_bound, 0.0);
    assert_eq!(bins[0].upper_bound, 5.0);
    assert_eq!(bins[1].upper_bound, 8.0);
    assert_eq!(counts(&bins), vec![2, 1]);
}

#[test]
fn uniform_thresholds_are_interior_only() {
    assert_eq!(uniform_thresholds((0.0, 90.0), 3), vec![30.0, 60.0]);
    assert!(uniform_thresholds((0.0, 90.0), 1).is_empty());
    assert!(uniform_thresholds((5.0, 5.0), 10).is_empty());
}

#[test]
fn binning_is_idempotent() {
    let first = compute_bins(&SAMPLE, (0.0, 90.0), Some(7)).expect("bins");
    let second = compute_bins(&SAMPLE, (0.0, 90.0), Some(7)).expect("bins");
    assert_eq!(first, second);
}

#[test]
fn extent_of_empty_input_fails() {
    let err = extent(&[]).expect_err("empty extent");
    assert!(matches!(err, ChartError::EmptyInput { .. }));
}
