use crate::DateKey;

#[test]
fn test_pack_unknown_year_is_zero() {
    assert_eq!(DateKey::pack(0, 1, 1), DateKey::pack(0, 0, 0));
    assert_eq!(DateKey::pack(0, 12, 31).as_u32(), 0);
    assert_eq!(DateKey::pack(0, 7, 19), DateKey::default());
}

#[test]
fn test_pack_orders_chronologically() {
    let dates = [
        (1, 1, 1),
        (1857, 6, 30),
        (1857, 7, 1),
        (1857, 7, 2),
        (1858, 1, 1),
        (2020, 2, 29),
        (2020, 3, 1),
        (DateKey::YEAR_MAX, 12, 31),
    ];
    for pair in dates.windows(2) {
        let (y1, m1, d1) = pair[0];
        let (y2, m2, d2) = pair[1];
        assert!(
            DateKey::pack(y1, m1, d1) < DateKey::pack(y2, m2, d2),
            "{y1}.{m1}.{d1} vs {y2}.{m2}.{d2}"
        );
    }
}

#[test]
fn test_unknown_date_sorts_before_all_known_dates() {
    assert!(DateKey::pack(0, 12, 31) < DateKey::pack(1, 1, 1));
}

#[test]
fn test_lower_bound_full_fragment() {
    assert_eq!(DateKey::lower_bound("1972.07.11"), DateKey::pack(1972, 7, 11));
}

#[test]
fn test_lower_bound_wildcards_default_to_widest() {
    assert_eq!(DateKey::lower_bound("2020.??.??"), DateKey::pack(2020, 1, 1));
    assert_eq!(DateKey::lower_bound("2020.06.??"), DateKey::pack(2020, 6, 1));
    assert_eq!(DateKey::lower_bound("????.??.??"), DateKey::pack(0, 1, 1));
    assert_eq!(DateKey::lower_bound(""), DateKey::pack(0, 1, 1));
    assert_eq!(DateKey::lower_bound("2020"), DateKey::pack(2020, 1, 1));
}

#[test]
fn test_upper_bound_wildcards_default_to_widest() {
    assert_eq!(DateKey::upper_bound("2020.??.??"), DateKey::pack(2020, 12, 31));
    assert_eq!(DateKey::upper_bound("2020.06.??"), DateKey::pack(2020, 6, 31));
    assert_eq!(DateKey::upper_bound(""), DateKey::pack(9999, 12, 31));
    assert!(DateKey::upper_bound("") > DateKey::max());
}

#[test]
fn test_malformed_fragments_degrade_not_fail() {
    assert_eq!(DateKey::lower_bound("abcd.ef.gh"), DateKey::pack(0, 1, 1));
    assert_eq!(DateKey::upper_bound("abcd.ef.gh"), DateKey::pack(9999, 12, 31));
    // Multi-byte text must not panic on byte slicing.
    assert_eq!(DateKey::lower_bound("année.??.??"), DateKey::pack(0, 1, 1));
}
