use crate::{
    foundation::core::{Axis, FULL_PERCENT, Point, Rect, Size},
    foundation::error::{TableError, TableResult},
    grid::store::Grid,
    layout::axis::AxisGroup,
};

/// One resolved cell rectangle in absolute units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedCell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Absolute width.
    pub width: f64,
    /// Absolute height.
    pub height: f64,
}

impl ResolvedCell {
    /// The cell as a `kurbo` rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Concrete geometry of a table for one absolute size.
#[derive(Clone, Debug, PartialEq)]
pub struct TableGeometry {
    /// Resolved row heights in percent.
    pub row_percentages: Vec<f64>,
    /// Resolved column widths in percent.
    pub column_percentages: Vec<f64>,
    /// Row heights in absolute units.
    pub row_heights: Vec<f64>,
    /// Column widths in absolute units.
    pub column_widths: Vec<f64>,
    /// Per-cell rectangles, row-major.
    pub cells: Grid<Rect>,
}

impl TableGeometry {
    /// Rectangle of cell `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<Rect> {
        self.cells.get_cell(row, column).copied()
    }

    /// Cells in row-major scan order, ready for a painter.
    pub fn resolved_cells(&self) -> Vec<ResolvedCell> {
        self.cells
            .iter_cells()
            .map(|(row, column, rect)| ResolvedCell {
                row,
                column,
                x: rect.x0,
                y: rect.y0,
                width: rect.width(),
                height: rect.height(),
            })
            .collect()
    }

    /// Union of all cell rectangles; `None` for an empty table.
    pub fn bounds(&self) -> Option<Rect> {
        self.cells
            .iter_cells()
            .map(|(_, _, r)| *r)
            .reduce(|acc, r| acc.union(r))
    }
}

/// Turns a row/column policy pair into absolute geometry.
#[derive(Clone, Debug)]
pub struct GridLayoutResolver {
    rows: AxisGroup,
    columns: AxisGroup,
}

impl GridLayoutResolver {
    /// Pair a row group with a column group.
    pub fn new(rows: AxisGroup, columns: AxisGroup) -> Self {
        debug_assert_eq!(rows.axis(), Axis::Row);
        debug_assert_eq!(columns.axis(), Axis::Column);
        Self { rows, columns }
    }

    /// Row policies.
    pub fn rows(&self) -> &AxisGroup {
        &self.rows
    }

    /// Column policies.
    pub fn columns(&self) -> &AxisGroup {
        &self.columns
    }

    /// Resolve with the table's top-left corner at the origin.
    pub fn resolve(&self, size: Size) -> TableResult<TableGeometry> {
        self.resolve_at(Point::ZERO, size)
    }

    #[tracing::instrument(skip(self), fields(rows = self.rows.count(), columns = self.columns.count()))]
    /// Resolve with the table's top-left corner at `origin`.
    pub fn resolve_at(&self, origin: Point, size: Size) -> TableResult<TableGeometry> {
        let row_percentages = self.rows.resolve()?;
        let column_percentages = self.columns.resolve()?;
        let row_heights = to_extents(&self.rows, &row_percentages, size.height)?;
        let column_widths = to_extents(&self.columns, &column_percentages, size.width)?;

        let mut rows = Vec::with_capacity(row_heights.len());
        let mut cursor = origin;
        for &height in &row_heights {
            cursor.x = origin.x;
            let mut row = Vec::with_capacity(column_widths.len());
            for &width in &column_widths {
                row.push(Rect::from_origin_size(cursor, (width, height)));
                cursor.x += width;
            }
            rows.push(row);
            cursor.y += height;
        }
        let cells = if column_widths.is_empty() {
            Grid::new()
        } else {
            Grid::from_rows(rows)?
        };

        Ok(TableGeometry {
            row_percentages,
            column_percentages,
            row_heights,
            column_widths,
            cells,
        })
    }
}

/// Resolve one axis straight to absolute extents.
pub fn resolve_axis_extents(group: &AxisGroup, extent: f64) -> TableResult<Vec<f64>> {
    let percentages = group.resolve()?;
    to_extents(group, &percentages, extent)
}

fn to_extents(group: &AxisGroup, percentages: &[f64], extent: f64) -> TableResult<Vec<f64>> {
    if !extent.is_finite() || extent < 0.0 {
        return Err(TableError::invalid_configuration(
            group.clone(),
            format!("absolute {} extent must be finite and >= 0, got {extent}", group.axis()),
        ));
    }
    Ok(percentages
        .iter()
        .map(|p| p / FULL_PERCENT * extent)
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/resolver.rs"]
mod tests;
