use binchart::core::{Bin, compute_bins, extent};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bins_conserve_every_value_in_domain_property(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 1..200),
        bin_count in 1usize..40
    ) {
        let domain = extent(&values).expect("non-empty");
        let bins = compute_bins(&values, domain, Some(bin_count)).expect("bins");
        let total: usize = bins.iter().map(Bin::count).sum();
        prop_assert_eq!(total, values.len());
    }

    #[test]
    fn bins_tile_the_domain_property(
        values in prop::collection::vec(-10_000.0f64..10_000.0, 2..200),
        bin_count in 1usize..40
    ) {
        let domain = extent(&values).expect("non-empty");
        let bins = compute_bins(&values, domain, Some(bin_count)).expect("bins");

        prop_assert_eq!(bins.first().map(|bin| bin.lower_bound), Some(domain.0));
        prop_assert_eq!(bins.last().map(|bin| bin.upper_bound), Some(domain.1));
        for pair in bins.windows(2) {
            prop_assert_eq!(pair[0].upper_bound, pair[1].lower_bound);
            prop_assert!(pair[0].lower_bound < pair[0].upper_bound);
        }
    }

    #[test]
    fn members_fall_inside_their_bin_property(
        values in prop::collection::vec(0.0f64..1_000.0, 1..200),
        bin_count in 1usize..40
    ) {
        let bins = compute_bins(&values, (0.0, 1_000.0), Some(bin_count)).expect("bins");
        let last = bins.len() - 1;
        for (index, bin) in bins.iter().enumerate() {
            for &member in &bin.members {
                prop_assert!(member >= bin.lower_bound);
                if index == last {
                    prop_assert!(member <= bin.upper_bound);
                } else {
                    prop_assert!(member < bin.upper_bound);
                }
            }
        }
    }
}
