use crate::core::ValueKind;
use crate::core::primitives::MILLIS_PER_DAY;

/// One step of the x axis: a day for dates, `1.0` for numbers.
#[must_use]
pub fn unit_for(kind: ValueKind) -> f64 {
    match kind {
        ValueKind::Numeric => 1.0,
        ValueKind::Date => MILLIS_PER_DAY,
    }
}

/// Extends a zero-width domain by one unit so scales keep a usable span.
#[must_use]
pub fn widen_degenerate(domain: (f64, f64), unit: f64) -> (f64, f64) {
    if domain.0 == domain.1 {
        (domain.0, domain.1 + unit)
    } else {
        domain
    }
}

/// Top of a `[0, top]` height domain; all-zero data keeps a unit span so
/// zero values sit on the baseline instead of mid-plot.
#[must_use]
pub fn height_ceiling(max_value: f64) -> f64 {
    if max_value > 0.0 { max_value } else { 1.0 }
}

/// Number of whole units covered by `[min, max]`, counting both ends.
#[must_use]
pub fn unit_slots(min: f64, max: f64, unit: f64) -> usize {
    ((max - min).abs() / unit).floor() as usize + 1
}

#[cfg(test)]
mod tests {
    use super::{height_ceiling, unit_slots, widen_degenerate};
    use crate::core::primitives::MILLIS_PER_DAY;

    #[test]
    fn degenerate_domain_gains_one_unit() {
        assert_eq!(widen_degenerate((5.0, 5.0), 1.0), (5.0, 6.0));
        assert_eq!(widen_degenerate((1.0, 5.0), 1.0), (1.0, 5.0));
    }

    #[test]
    fn empty_heights_keep_unit_ceiling() {
        assert_eq!(height_ceiling(0.0), 1.0);
        assert_eq!(height_ceiling(7.0), 7.0);
    }

    #[test]
    fn slots_count_both_endpoints() {
        assert_eq!(unit_slots(0.0, 12.0 * MILLIS_PER_DAY, MILLIS_PER_DAY), 13);
        assert_eq!(unit_slots(3.0, 3.0, 1.0), 1);
    }
}
