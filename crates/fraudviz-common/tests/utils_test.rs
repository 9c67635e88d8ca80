//! Property tests for the label formatting helpers.

use fraudviz_common::utils::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn thousands_separator_preserves_value(value in any::<u64>()) {
        let formatted = format_thousands(value);
        let digits: String = formatted.chars().filter(|c| *c != ',').collect();
        prop_assert_eq!(digits.parse::<u64>().unwrap(), value);
    }

    #[test]
    fn thousands_groups_are_three_digits(value in 1_000u64..u64::MAX) {
        let formatted = format_thousands(value);
        let groups: Vec<&str> = formatted.split(',').collect();
        prop_assert!(groups.len() > 1);
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }
}

#[test]
fn test_percent_rounding() {
    assert_eq!(format_percent(1.0, 2), "100.00%");
    assert_eq!(format_percent(0.0, 0), "0%");
    assert_eq!(format_percent(0.996_756, 2), "99.68%");
}
