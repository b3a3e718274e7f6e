use cabrillo::freq::{to_hz, to_mhz};

#[test]
fn to_hz_pads_fractional_groups() {
    assert_eq!(to_hz("14"), Some(14_000_000));
    assert_eq!(to_hz("14.025"), Some(14_025_000));
    assert_eq!(to_hz("146.52"), Some(146_520_000));
    assert_eq!(to_hz("7.040.5"), Some(7_040_500));
}

#[test]
fn to_hz_rejects_non_numeric_input() {
    assert_eq!(to_hz(""), None);
    assert_eq!(to_hz("14MHz"), None);
    assert_eq!(to_hz("14.0250"), None);
    assert_eq!(to_hz("14.025.000.1"), None);
}

#[test]
fn to_mhz_groups_digits_in_threes() {
    assert_eq!(to_mhz(14_025_000), "14.025.000");
    assert_eq!(to_mhz(146_520_000), "146.520.000");
    assert_eq!(to_mhz(500), "500");
    assert_eq!(to_mhz(0), "0");
}

#[test]
fn to_mhz_round_trips_through_to_hz() {
    for hz in [1_800_000u64, 14_025_000, 146_520_000] {
        assert_eq!(to_hz(&to_mhz(hz)), Some(hz));
    }
}
