use super::*;

fn group(entries: &[AxisLayout]) -> AxisGroup {
    AxisGroup::new(Axis::Row, entries.to_vec())
}

const A: AxisLayout = AxisLayout::Auto;

fn pct(p: f64) -> AxisLayout {
    AxisLayout::Percentage(p)
}

#[test]
fn layout_validity() {
    assert!(A.is_valid());
    assert!(pct(100.0).is_valid());
    assert!(!pct(0.0).is_valid());
    assert!(!pct(101.0).is_valid());
    assert_eq!(AxisLayout::percentage(0.0), None);
    assert_eq!(AxisLayout::percentage(40.0), Some(pct(40.0)));
    assert_eq!(pct(12.5).value(), Some(12.5));
    assert_eq!(A.value(), None);
}

#[test]
fn aggregates() {
    let g = group(&[pct(30.0), A, pct(20.0), A]);
    assert_eq!(g.count(), 4);
    assert_eq!(g.auto_count(), 2);
    assert_eq!(g.override_total(), 50.0);
    assert_eq!(g.free_space(), 50.0);
    assert_eq!(g.auto_share(), Some(25.0));
    assert_eq!(group(&[pct(30.0)]).auto_share(), None);
}

#[test]
fn seed_share_floors_but_auto_share_is_exact() {
    let g = group(&[A, A, A]);
    assert!((g.auto_share().unwrap() - 100.0 / 3.0).abs() < 1e-12);
    assert_eq!(g.seed_share(), Some(33.0));
}

#[test]
fn auto_entries_fill_to_full() {
    let cases = [
        group(&[A]),
        group(&[pct(30.0), A]),
        group(&[A, A, A]),
        group(&[pct(10.0), A, pct(45.5), A, A]),
        group(&[pct(99.0), A, A, A, A, A, A]),
    ];
    for g in cases {
        let share = g.auto_share().unwrap();
        let total = g.override_total() + g.auto_count() as f64 * share;
        assert!((total - 100.0).abs() < PERCENT_EPSILON, "{g:?}");

        let resolved = g.resolve().unwrap();
        let sum: f64 = resolved.iter().sum();
        assert!((sum - 100.0).abs() < PERCENT_EPSILON, "{g:?}");
    }
}

#[test]
fn resolve_all_overrides_under_full() {
    let resolved = group(&[pct(20.0), pct(30.0)]).resolve().unwrap();
    assert_eq!(resolved, vec![20.0, 30.0]);
}

#[test]
fn resolve_fully_committed_autos_get_zero() {
    let resolved = group(&[pct(60.0), pct(40.0), A]).resolve().unwrap();
    assert_eq!(resolved, vec![60.0, 40.0, 0.0]);
}

#[test]
fn running_sum_over_full_names_the_index() {
    let err = group(&[pct(60.0), pct(60.0), A]).resolve().unwrap_err();
    match err {
        TableError::InvalidPercentage { axis, index, value } => {
            assert_eq!(axis, Axis::Row);
            assert_eq!(index, 1);
            assert_eq!(value, 120.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn over_full_without_autos_is_configuration_error() {
    let err = group(&[pct(70.0), pct(50.0)]).resolve().unwrap_err();
    assert!(matches!(err, TableError::InvalidConfiguration { .. }));
}

#[test]
fn invalid_entry_is_reported_first() {
    let err = group(&[pct(10.0), pct(-5.0)]).validate().unwrap_err();
    assert!(matches!(err, TableError::InvalidPercentage { index: 1, .. }));
}

#[test]
fn empty_group_resolves_to_nothing() {
    assert!(group(&[]).resolve().unwrap().is_empty());
}

#[test]
fn share_of_single_entry() {
    let g = group(&[pct(30.0), A, A]);
    assert_eq!(g.share_of(0).unwrap(), 30.0);
    assert_eq!(g.share_of(2).unwrap(), 35.0);
    assert!(matches!(
        g.share_of(3),
        Err(TableError::InvalidIndex { index: 3, len: 3, .. })
    ));
}

#[test]
fn serde_uses_auto_keyword_or_number() {
    assert_eq!(serde_json::to_string(&A).unwrap(), "\"auto\"");
    assert_eq!(serde_json::to_string(&pct(25.0)).unwrap(), "25.0");

    let parsed: Vec<AxisLayout> =
        serde_json::from_str(r#"["auto", "AUTO", null, 40, 12.5]"#).unwrap();
    assert_eq!(parsed, vec![A, A, A, pct(40.0), pct(12.5)]);

    assert!(serde_json::from_str::<AxisLayout>("\"half\"").is_err());
}
