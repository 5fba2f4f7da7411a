use tablegrid::{Axis, AxisGroup, AxisLayout, GridLayoutResolver, Point, Size};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let rows = AxisGroup::new(
        Axis::Row,
        vec![AxisLayout::Percentage(30.0), AxisLayout::Auto, AxisLayout::Auto],
    );
    let columns = AxisGroup::new(
        Axis::Column,
        vec![AxisLayout::Percentage(25.0), AxisLayout::Auto],
    );

    let geometry = GridLayoutResolver::new(rows, columns)
        .resolve_at(Point::new(10.0, 10.0), Size::new(800.0, 600.0))?;

    for cell in geometry.resolved_cells() {
        println!(
            "({}, {}) x={:.1} y={:.1} w={:.1} h={:.1}",
            cell.row, cell.column, cell.x, cell.y, cell.width, cell.height
        );
    }
    if let Some(bounds) = geometry.bounds() {
        println!("bounds: {bounds:?}");
    }
    Ok(())
}
