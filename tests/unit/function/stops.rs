use super::*;

fn check_agrees(keys: &[f64], x: f64) {
    let expected = find_floor_linear(keys, x);
    assert_eq!(
        keys.partition_point(|k| *k <= x).saturating_sub(1),
        expected,
        "binary search disagrees for keys {keys:?}, x = {x}"
    );
    assert_eq!(find_floor(keys, x), expected);
}

#[test]
fn exact_key_picks_its_own_index() {
    let keys = [0.0, 5.0, 10.0];
    assert_eq!(find_floor(&keys, 5.0), 1);
    assert_eq!(find_floor(&keys, 10.0), 2);
    assert_eq!(find_floor(&keys, 0.0), 0);
}

#[test]
fn below_all_keys_is_zero() {
    assert_eq!(find_floor(&[1.0, 2.0], 0.5), 0);
    assert_eq!(find_floor(&[], 3.0), 0);
}

#[test]
fn between_keys_is_the_lower_index() {
    assert_eq!(find_floor(&[0.0, 10.0, 20.0], 12.0), 1);
    assert_eq!(find_floor(&[0.0, 10.0, 20.0], 25.0), 2);
}

#[test]
fn duplicate_keys_resolve_to_the_last_of_the_run() {
    let keys = [0.0, 10.0, 10.0, 10.0, 20.0];
    assert_eq!(find_floor(&keys, 10.0), 3);
    check_agrees(&keys, 10.0);
}

#[test]
fn binary_search_matches_linear_scan_on_large_tables() {
    let keys: Vec<f64> = (0..40).map(|i| f64::from(i / 2) * 1.5).collect();
    assert!(keys.len() > LINEAR_SCAN_MAX);
    let mut x = -2.0;
    while x < 35.0 {
        check_agrees(&keys, x);
        x += 0.25;
    }
    for k in &keys {
        check_agrees(&keys, *k);
    }
}

#[test]
fn non_monotonic_input_falls_back_to_last_match_on_small_tables() {
    let keys = [0.0, 10.0, 5.0];
    assert_eq!(find_floor(&keys, 7.0), 2);
}
