use super::*;
use crate::layout::axis::AxisLayout;

#[test]
fn display_prefixes_are_stable() {
    assert!(TableError::shape("x").to_string().contains("shape error:"));
    assert!(
        TableError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(
        TableError::invalid_index(Axis::Column, 4, 2).to_string(),
        "column index 4 is out of range (len 2)"
    );
    assert_eq!(
        TableError::invalid_percentage(Axis::Row, 1, 120.0).to_string(),
        "invalid row percentage at index 1: 120"
    );
}

#[test]
fn invalid_configuration_names_the_axis() {
    let group = AxisGroup::new(Axis::Column, vec![AxisLayout::Percentage(80.0)]);
    let err = TableError::invalid_configuration(group.clone(), "too wide");
    assert_eq!(err.to_string(), "invalid column configuration: too wide");
    match err {
        TableError::InvalidConfiguration { group: g, .. } => assert_eq!(g, group),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TableError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
