use crate::{
    foundation::core::{Axis, Point, Size},
    foundation::error::{TableError, TableResult},
    grid::store::Grid,
    layout::axis::{AxisGroup, AxisLayout},
    layout::resolver::{GridLayoutResolver, TableGeometry},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Host styling payload carried through untouched.
///
/// The engine stores these values and writes them back out, but never interprets them.
pub struct CellStyle {
    /// Background fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<serde_json::Value>,
    /// Text styling (font, size, alignment, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<serde_json::Value>,
    /// Border styling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One table cell: per-axis size policy, content and opaque style.
pub struct CellAttributes {
    /// Width policy (column axis).
    #[serde(default)]
    pub width: AxisLayout,
    /// Height policy (row axis).
    #[serde(default)]
    pub height: AxisLayout,
    /// Text content.
    #[serde(default)]
    pub content: String,
    /// Opaque style payload.
    #[serde(flatten)]
    pub style: CellStyle,
}

impl CellAttributes {
    /// An all-Auto, empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// An all-Auto cell holding `content`.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Size policy along `axis` (height for rows, width for columns).
    pub fn layout(&self, axis: Axis) -> AxisLayout {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// Mutable size policy along `axis`.
    pub fn layout_mut(&mut self, axis: Axis) -> &mut AxisLayout {
        match axis {
            Axis::Row => &mut self.height,
            Axis::Column => &mut self.width,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Partial update for [`CellAttributes`]. `None` fields are left untouched.
pub struct CellPatch {
    /// New width policy.
    pub width: Option<AxisLayout>,
    /// New height policy.
    pub height: Option<AxisLayout>,
    /// New content.
    pub content: Option<String>,
    /// New fill payload.
    pub fill: Option<serde_json::Value>,
    /// New text styling payload.
    pub text: Option<serde_json::Value>,
    /// New border payload.
    pub border: Option<serde_json::Value>,
}

impl CellPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width policy.
    pub fn width(mut self, width: AxisLayout) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the height policy.
    pub fn height(mut self, height: AxisLayout) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the content.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set the fill payload.
    pub fn fill(mut self, fill: serde_json::Value) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the text styling payload.
    pub fn text(mut self, text: serde_json::Value) -> Self {
        self.text = Some(text);
        self
    }

    /// Set the border payload.
    pub fn border(mut self, border: serde_json::Value) -> Self {
        self.border = Some(border);
        self
    }

    /// A patch is usable only if every size policy it carries is valid.
    pub fn is_valid(&self) -> bool {
        self.width.is_none_or(AxisLayout::is_valid) && self.height.is_none_or(AxisLayout::is_valid)
    }

    /// Write every `Some` field into `cell`.
    pub fn apply(&self, cell: &mut CellAttributes) {
        if let Some(w) = self.width {
            cell.width = w;
        }
        if let Some(h) = self.height {
            cell.height = h;
        }
        if let Some(c) = &self.content {
            cell.content.clone_from(c);
        }
        if let Some(v) = &self.fill {
            cell.style.fill = Some(v.clone());
        }
        if let Some(v) = &self.text {
            cell.style.text = Some(v.clone());
        }
        if let Some(v) = &self.border {
            cell.style.border = Some(v.clone());
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Table-level options.
pub struct TableOptions {
    /// Left edge of the table.
    #[serde(default)]
    pub x: f64,
    /// Top edge of the table.
    #[serde(default)]
    pub y: f64,
    /// Absolute width that column percentages resolve against.
    #[serde(default = "default_extent")]
    pub width: f64,
    /// Absolute height that row percentages resolve against.
    #[serde(default = "default_extent")]
    pub height: f64,
    /// Row 0 is a header row.
    #[serde(default)]
    pub header: bool,
    /// Table border payload, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<serde_json::Value>,
}

fn default_extent() -> f64 {
    100.0
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: default_extent(),
            height: default_extent(),
            header: false,
            border: None,
        }
    }
}

impl TableOptions {
    /// Options for a table of the given absolute size at the origin.
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Absolute extent.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Grid<CellAttributes> {
    /// Derive the policy of every row (`Axis::Row`) or column (`Axis::Column`).
    ///
    /// An entry is Auto iff every cell in that row/column is Auto on the axis; otherwise it is
    /// the largest explicit percentage among them.
    pub fn axis_group(&self, axis: Axis) -> AxisGroup {
        let entries: Vec<AxisLayout> = match axis {
            Axis::Row => self
                .rows()
                .map(|row| derive_policy(row.iter(), axis))
                .collect(),
            Axis::Column => (0..self.column_count())
                .map(|i| derive_policy(self.get_column(i).into_iter(), axis))
                .collect(),
        };
        AxisGroup::new(axis, entries)
    }

    /// Project the grid down to its content strings.
    pub fn content(&self) -> Grid<String> {
        self.map(|c| c.content.clone())
    }

    /// Reject any cell holding an out-of-range explicit percentage.
    pub fn validate_cells(&self) -> TableResult<()> {
        for (row, column, cell) in self.iter_cells() {
            if !cell.height.is_valid() {
                let value = cell.height.value().unwrap_or_default();
                return Err(TableError::invalid_percentage(Axis::Row, row, value));
            }
            if !cell.width.is_valid() {
                let value = cell.width.value().unwrap_or_default();
                return Err(TableError::invalid_percentage(Axis::Column, column, value));
            }
        }
        Ok(())
    }
}

pub(crate) fn derive_policy<'a>(
    cells: impl Iterator<Item = &'a CellAttributes>,
    axis: Axis,
) -> AxisLayout {
    cells
        .filter_map(|c| c.layout(axis).value())
        .reduce(f64::max)
        .map_or(AxisLayout::Auto, AxisLayout::Percentage)
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A committed table: options plus a rectangular grid of cells.
///
/// This is also the persisted document shape, `{ "options": {...}, "cells": [[...]] }`.
/// Edit a table by deriving a [`crate::TableBuilder`] from it with [`Table::to_builder`]
/// (clone) or [`Table::into_builder`] (move); the two never share storage.
pub struct Table {
    #[serde(default)]
    options: TableOptions,
    #[serde(default)]
    cells: Grid<CellAttributes>,
}

impl Table {
    pub(crate) fn from_parts(options: TableOptions, cells: Grid<CellAttributes>) -> Self {
        Self { options, cells }
    }

    pub(crate) fn into_parts(self) -> (TableOptions, Grid<CellAttributes>) {
        (self.options, self.cells)
    }

    /// Table-level options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Committed cell grid.
    pub fn cells(&self) -> &Grid<CellAttributes> {
        &self.cells
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.cells.row_count()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.cells.column_count()
    }

    /// Derived row policies.
    pub fn row_layout(&self) -> AxisGroup {
        self.cells.axis_group(Axis::Row)
    }

    /// Derived column policies.
    pub fn column_layout(&self) -> AxisGroup {
        self.cells.axis_group(Axis::Column)
    }

    /// Cell contents as a grid of strings.
    pub fn content(&self) -> Grid<String> {
        self.cells.content()
    }

    /// Resolve cell rectangles against the table's own origin and size.
    pub fn resolve(&self) -> TableResult<TableGeometry> {
        GridLayoutResolver::new(self.row_layout(), self.column_layout())
            .resolve_at(self.options.origin(), self.options.size())
    }

    /// Validate cell percentages and both axes.
    pub fn validate(&self) -> TableResult<()> {
        self.cells.validate_cells()?;
        self.resolve().map(|_| ())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/model.rs"]
mod tests;
