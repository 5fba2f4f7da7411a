use super::*;
use crate::layout::axis::AxisLayout;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn rows(entries: Vec<AxisLayout>) -> AxisGroup {
    AxisGroup::new(Axis::Row, entries)
}

fn columns(entries: Vec<AxisLayout>) -> AxisGroup {
    AxisGroup::new(Axis::Column, entries)
}

#[test]
fn resolves_mixed_axes_to_rects() {
    let resolver = GridLayoutResolver::new(
        rows(vec![AxisLayout::Percentage(30.0), AxisLayout::Auto]),
        columns(vec![AxisLayout::Percentage(25.0), AxisLayout::Auto]),
    );
    let geo = resolver.resolve(Size::new(200.0, 100.0)).unwrap();

    assert_eq!(geo.row_percentages, vec![30.0, 70.0]);
    assert_eq!(geo.column_percentages, vec![25.0, 75.0]);
    assert!(approx(geo.row_heights[0], 30.0));
    assert!(approx(geo.column_widths[1], 150.0));

    let r = geo.cell(1, 1).unwrap();
    assert!(approx(r.x0, 50.0));
    assert!(approx(r.y0, 30.0));
    assert!(approx(r.width(), 150.0));
    assert!(approx(r.height(), 70.0));
    assert!(geo.cell(2, 0).is_none());
}

#[test]
fn resolved_cells_are_row_major_from_origin() {
    let resolver = GridLayoutResolver::new(
        rows(vec![AxisLayout::Auto, AxisLayout::Auto]),
        columns(vec![AxisLayout::Auto, AxisLayout::Auto, AxisLayout::Auto]),
    );
    let geo = resolver
        .resolve_at(Point::new(10.0, 20.0), Size::new(300.0, 100.0))
        .unwrap();
    let cells = geo.resolved_cells();
    assert_eq!(cells.len(), 6);

    let order: Vec<(usize, usize)> = cells.iter().map(|c| (c.row, c.column)).collect();
    assert_eq!(order, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);

    assert!(approx(cells[0].x, 10.0));
    assert!(approx(cells[0].y, 20.0));
    assert!(approx(cells[4].x, 110.0));
    assert!(approx(cells[4].y, 70.0));
    assert!(approx(cells[4].width, 100.0));
    let (rect, expected) = (cells[4].rect(), geo.cell(1, 1).unwrap());
    assert!(approx(rect.x1, expected.x1));
    assert!(approx(rect.y1, expected.y1));

    let bounds = geo.bounds().unwrap();
    assert!(approx(bounds.x0, 10.0));
    assert!(approx(bounds.y1, 120.0));
    assert!(approx(bounds.x1, 310.0));
}

#[test]
fn empty_axes_give_empty_geometry() {
    let geo = GridLayoutResolver::new(rows(vec![]), columns(vec![]))
        .resolve(Size::new(100.0, 100.0))
        .unwrap();
    assert!(geo.cells.is_empty());
    assert!(geo.resolved_cells().is_empty());
    assert!(geo.bounds().is_none());
}

#[test]
fn over_committed_axis_fails() {
    let resolver = GridLayoutResolver::new(
        rows(vec![AxisLayout::Percentage(80.0), AxisLayout::Percentage(30.0)]),
        columns(vec![AxisLayout::Auto]),
    );
    let err = resolver.resolve(Size::new(100.0, 100.0)).unwrap_err();
    assert!(matches!(err, TableError::InvalidConfiguration { .. }));
}

#[test]
fn negative_extent_is_rejected() {
    let group = columns(vec![AxisLayout::Auto]);
    assert!(matches!(
        resolve_axis_extents(&group, -1.0),
        Err(TableError::InvalidConfiguration { .. })
    ));
    assert!(resolve_axis_extents(&group, f64::NAN).is_err());
    assert_eq!(resolve_axis_extents(&group, 0.0).unwrap(), vec![0.0]);
}

#[test]
fn axis_extents_scale_with_percentages() {
    let group = columns(vec![AxisLayout::Percentage(60.0), AxisLayout::Percentage(40.0)]);
    let widths = resolve_axis_extents(&group, 50.0).unwrap();
    assert!(approx(widths[0], 30.0));
    assert!(approx(widths[1], 20.0));
}
