use crate::{
    foundation::core::{Axis, FULL_PERCENT, Side},
    foundation::error::{TableError, TableResult},
    grid::store::{Grid, insertion_position},
    layout::axis::AxisGroup,
    layout::resolver::{GridLayoutResolver, TableGeometry},
    table::model::{CellAttributes, Table, TableOptions},
    table::range::{CellRangeBuilder, ColumnBuilder, RangeAxis, RowBuilder},
};

/// Where and how a new row/column is inserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertOptions {
    /// Anchor index; `None` appends.
    pub at: Option<usize>,
    /// Side of the anchor the new entry lands on.
    pub side: Side,
    /// Grow the table's absolute extent by the new entry's share.
    pub resize: bool,
}

impl InsertOptions {
    /// Append after the last entry.
    pub fn append() -> Self {
        Self::default()
    }

    /// Insert next to `anchor` on `side`.
    pub fn at(anchor: usize, side: Side) -> Self {
        Self {
            at: Some(anchor),
            side,
            resize: false,
        }
    }

    /// Grow the table by the new entry's share.
    pub fn resize(mut self, resize: bool) -> Self {
        self.resize = resize;
        self
    }
}

/// Builder for [`Table`] values.
///
/// Owns the cell grid and table options. Structural edits with an explicit index contract
/// return [`TableError::InvalidIndex`] and leave the builder untouched; insertions are
/// validated against the resulting axes before they are committed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableBuilder {
    options: TableOptions,
    cells: Grid<CellAttributes>,
}

impl TableBuilder {
    /// Create an empty table builder.
    pub fn new(options: TableOptions) -> Self {
        Self {
            options,
            cells: Grid::new(),
        }
    }

    /// A `columns x rows` table of empty, all-Auto cells.
    pub fn with_cells(columns: usize, rows: usize) -> Self {
        Self {
            options: TableOptions::default(),
            cells: Grid::from_fn(rows, columns, |_, _| CellAttributes::new()),
        }
    }

    /// Copy an existing table into a new builder.
    pub fn from_table(table: &Table) -> Self {
        table.to_builder()
    }

    /// Table-level options.
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Mutable table-level options.
    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.options
    }

    /// Set the absolute size percentages resolve against.
    pub fn size(&mut self, width: f64, height: f64) -> &mut Self {
        self.options.width = width;
        self.options.height = height;
        self
    }

    /// Mark row 0 as a header row.
    pub fn header(&mut self, header: bool) -> &mut Self {
        self.options.header = header;
        self
    }

    /// Current cell grid.
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

    /// `true` if row `index` exists.
    pub fn exists_row_with_index(&self, index: usize) -> bool {
        index < self.row_count()
    }

    /// `true` if column `index` exists.
    pub fn exists_column_with_index(&self, index: usize) -> bool {
        index < self.column_count()
    }

    /// Copy of row `index` as an editable slice.
    pub fn row(&self, index: usize) -> Option<RowBuilder> {
        self.cells
            .get_row(index)
            .map(|cells| RowBuilder::new(cells.to_vec()))
    }

    /// Copy of column `index` as an editable slice.
    pub fn column(&self, index: usize) -> Option<ColumnBuilder> {
        (index < self.column_count()).then(|| {
            ColumnBuilder::new(self.cells.get_column(index).into_iter().cloned().collect())
        })
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

    /// Insert a row.
    ///
    /// A row whose cells are all Auto on width inherits the table's column policies (or is
    /// fitted to 100% when the table is empty). An Auto-height row stays Auto, so every Auto
    /// row, the new one included, resolves to the recomputed share of free space.
    #[tracing::instrument(skip(self, row), fields(cells = row.len()))]
    pub fn add_row(&mut self, row: RowBuilder, opts: InsertOptions) -> TableResult<&mut Self> {
        self.insert_slice(row, opts)?;
        Ok(self)
    }

    /// Insert a column. Width-axis mirror of [`TableBuilder::add_row`].
    #[tracing::instrument(skip(self, column), fields(cells = column.len()))]
    pub fn add_column(
        &mut self,
        column: ColumnBuilder,
        opts: InsertOptions,
    ) -> TableResult<&mut Self> {
        self.insert_slice(column, opts)?;
        Ok(self)
    }

    /// Remove row `index`, shrinking the table height by its share when `resize` is set.
    ///
    /// Remaining Auto rows absorb the freed space at the next resolution; explicit rows keep
    /// their percentages.
    #[tracing::instrument(skip(self))]
    pub fn remove_row(&mut self, index: usize, resize: bool) -> TableResult<&mut Self> {
        self.remove_slice(Axis::Row, index, resize)?;
        Ok(self)
    }

    /// Remove column `index`, shrinking the table width by its share when `resize` is set.
    #[tracing::instrument(skip(self))]
    pub fn remove_column(&mut self, index: usize, resize: bool) -> TableResult<&mut Self> {
        self.remove_slice(Axis::Column, index, resize)?;
        Ok(self)
    }

    /// Edit row `index` through a [`RowBuilder`].
    ///
    /// The edit is committed only if both axes still resolve afterwards.
    pub fn update_row(
        &mut self,
        index: usize,
        f: impl FnOnce(RowBuilder) -> RowBuilder,
    ) -> TableResult<&mut Self> {
        let row = self
            .row(index)
            .ok_or_else(|| TableError::invalid_index(Axis::Row, index, self.row_count()))?;
        let mut candidate = self.cells.clone();
        candidate.set_row(index, f(row).into_cells())?;
        self.commit_checked(candidate)?;
        Ok(self)
    }

    /// Edit column `index` through a [`ColumnBuilder`]. Committed under the same rule as
    /// [`TableBuilder::update_row`].
    pub fn update_column(
        &mut self,
        index: usize,
        f: impl FnOnce(ColumnBuilder) -> ColumnBuilder,
    ) -> TableResult<&mut Self> {
        let column = self
            .column(index)
            .ok_or_else(|| TableError::invalid_index(Axis::Column, index, self.column_count()))?;
        let mut candidate = self.cells.clone();
        candidate.set_column(index, f(column).into_cells())?;
        self.commit_checked(candidate)?;
        Ok(self)
    }

    /// Copy plain strings into cell contents positionally.
    ///
    /// Unless `includes_header` is set, destination row 0 is treated as a header and skipped,
    /// so content row 0 lands on row 1. Values that fall outside the table are dropped.
    pub fn populate_content<R, C, S>(&mut self, content: R, includes_header: bool) -> &mut Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let offset = usize::from(!includes_header);
        for (r, values) in content.into_iter().enumerate() {
            let Some(row) = self.cells.get_row_mut(r + offset) else {
                break;
            };
            for (cell, value) in row.iter_mut().zip(values) {
                cell.content = value.into();
            }
        }
        self
    }

    /// Resolve the current cells against the table's origin and size.
    pub fn resolve(&self) -> TableResult<TableGeometry> {
        GridLayoutResolver::new(self.row_layout(), self.column_layout())
            .resolve_at(self.options.origin(), self.options.size())
    }

    #[tracing::instrument(skip(self), fields(rows = self.row_count(), columns = self.column_count()))]
    /// Build and validate the final [`Table`].
    pub fn build(&self) -> TableResult<Table> {
        let table = Table::from_parts(self.options.clone(), self.cells.clone());
        table.validate()?;
        Ok(table)
    }

    fn commit_checked(&mut self, candidate: Grid<CellAttributes>) -> TableResult<()> {
        candidate.axis_group(Axis::Row).validate()?;
        candidate.axis_group(Axis::Column).validate()?;
        self.cells = candidate;
        Ok(())
    }

    fn extent_mut(&mut self, axis: Axis) -> &mut f64 {
        match axis {
            Axis::Row => &mut self.options.height,
            Axis::Column => &mut self.options.width,
        }
    }

    fn axis_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_count(),
            Axis::Column => self.column_count(),
        }
    }

    fn insert_slice<K: RangeAxis>(
        &mut self,
        slice: CellRangeBuilder<K>,
        opts: InsertOptions,
    ) -> TableResult<()> {
        // A row extends the row axis while its cells run along the column axis.
        let along = K::ALONG;
        let axis = along.cross();
        let len = self.axis_len(axis);

        let (anchor, side) = match opts.at {
            Some(anchor) => (anchor, opts.side),
            None => (len.saturating_sub(1), Side::After),
        };
        let Some(at) = insertion_position(anchor, side, len) else {
            return Err(TableError::invalid_index(axis, anchor, len));
        };

        let cross_len = self.axis_len(along);
        if !self.cells.is_empty() && slice.len() != cross_len {
            return Err(TableError::shape(format!(
                "new {axis} has {} cells, table has {cross_len} {along}s",
                slice.len()
            )));
        }

        let slice = if slice.cells().iter().all(|c| c.layout(along).is_auto()) {
            self.seed_along(slice, along)
        } else {
            slice
        };

        let mut candidate = self.cells.clone();
        let cells = slice.into_cells();
        match axis {
            Axis::Row => candidate.insert_row(cells, anchor, side)?,
            Axis::Column => candidate.insert_column(cells, anchor, side)?,
        };

        let group = candidate.axis_group(axis);
        let share = group.share_of(at)?;
        candidate.axis_group(along).validate()?;

        if group.entries()[at].is_auto() {
            tracing::debug!(
                %axis,
                auto_count = group.auto_count(),
                share,
                "rebalanced auto entries"
            );
        }

        self.cells = candidate;
        if opts.resize {
            let extent = self.extent_mut(axis);
            let grown = *extent * share / FULL_PERCENT;
            *extent += grown;
            tracing::debug!(%axis, grown, extent = *extent, "grew table for inserted entry");
        }
        Ok(())
    }

    /// Seed the size policy of a slice whose cells carry none along `along`.
    fn seed_along<K: RangeAxis>(
        &self,
        slice: CellRangeBuilder<K>,
        along: Axis,
    ) -> CellRangeBuilder<K> {
        if self.cells.is_empty() {
            return slice.fit(along, FULL_PERCENT);
        }
        let inherited = self.cells.axis_group(along);
        let mut cells = slice.into_cells();
        for (cell, layout) in cells.iter_mut().zip(inherited.entries()) {
            *cell.layout_mut(along) = *layout;
        }
        CellRangeBuilder::new(cells)
    }

    fn remove_slice(&mut self, axis: Axis, index: usize, resize: bool) -> TableResult<()> {
        let len = self.axis_len(axis);
        if index >= len {
            return Err(TableError::invalid_index(axis, index, len));
        }
        // Only a resize needs the resolved share; plain removal works on any axis.
        let share = if resize {
            Some(self.cells.axis_group(axis).share_of(index)?)
        } else {
            None
        };

        let removed = match axis {
            Axis::Row => self.cells.remove_row(index),
            Axis::Column => self.cells.remove_column(index),
        };
        debug_assert!(removed.is_some());

        if let Some(share) = share {
            let extent = self.extent_mut(axis);
            let shrunk = *extent * share / FULL_PERCENT;
            *extent -= shrunk;
            tracing::debug!(%axis, shrunk, extent = *extent, "shrank table for removed entry");
        }
        Ok(())
    }
}

impl Table {
    /// Copy this table into a new builder. The table itself is never affected by later edits.
    pub fn to_builder(&self) -> TableBuilder {
        TableBuilder {
            options: self.options().clone(),
            cells: self.cells().clone(),
        }
    }

    /// Move this table's storage into a builder.
    pub fn into_builder(self) -> TableBuilder {
        let (options, cells) = self.into_parts();
        TableBuilder { options, cells }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/builder.rs"]
mod tests;
