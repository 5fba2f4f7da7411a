use super::*;

#[test]
fn percentage_validity_bounds() {
    assert!(is_valid_percentage(100.0));
    assert!(is_valid_percentage(100.0 + PERCENT_EPSILON / 2.0));
    assert!(is_valid_percentage(0.5));
    assert!(!is_valid_percentage(0.0));
    assert!(!is_valid_percentage(-1.0));
    assert!(!is_valid_percentage(100.1));
    assert!(!is_valid_percentage(f64::NAN));
    assert!(!is_valid_percentage(f64::INFINITY));
}

#[test]
fn running_sum_tolerance() {
    assert!(!exceeds_full(0.1 + 0.2 + 99.7));
    assert!(!exceeds_full(100.0));
    assert!(exceeds_full(100.001));
}

#[test]
fn axis_cross_and_display() {
    assert_eq!(Axis::Row.cross(), Axis::Column);
    assert_eq!(Axis::Column.cross(), Axis::Row);
    assert_eq!(Axis::Row.to_string(), "row");
    assert_eq!(Axis::Column.to_string(), "column");
}

#[test]
fn parity_matches_positions() {
    let even: Vec<usize> = (0..5).filter(|&i| Parity::Even.matches(i)).collect();
    let odd: Vec<usize> = (0..5).filter(|&i| Parity::Odd.matches(i)).collect();
    assert_eq!(even, vec![0, 2, 4]);
    assert_eq!(odd, vec![1, 3]);
}

#[test]
fn side_defaults_to_after() {
    assert_eq!(Side::default(), Side::After);
}
