use crate::foundation::{
    core::Side,
    error::{TableError, TableResult},
};

/// Rectangular, row-major container of `T`.
///
/// Every row has the same length. Constructors and structural mutations reject input that would
/// break this with [`TableError::Shape`]; reads and index-addressed writes that miss the grid
/// are `None` / no-ops instead.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

/// Position a new entry lands on when inserted next to `anchor` in a sequence of `len`.
///
/// An empty sequence accepts only anchor 0. Otherwise the anchor must exist.
pub(crate) fn insertion_position(anchor: usize, side: Side, len: usize) -> Option<usize> {
    if len == 0 {
        return (anchor == 0).then_some(0);
    }
    if anchor >= len {
        return None;
    }
    Some(match side {
        Side::Before => anchor,
        Side::After => anchor + 1,
    })
}

impl<T> Grid<T> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from explicit rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<T>>) -> TableResult<Self> {
        if let Some(first) = rows.first() {
            let width = first.len();
            if width == 0 {
                return Err(TableError::shape("grid rows must not be empty"));
            }
            if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
                return Err(TableError::shape(format!(
                    "row {idx} has {} cells, expected {width}",
                    row.len()
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Build a `rows x columns` grid from a cell factory.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        if rows == 0 || columns == 0 {
            return Self::default();
        }
        let rows = (0..rows)
            .map(|r| (0..columns).map(|c| f(r, c)).collect())
            .collect();
        Self { rows }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (length of every row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// `true` when the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `true` when every row has the same, non-zero length.
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|r| r.len() == width && width > 0)
    }

    /// Cell at `(row, col)`.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Mutable cell at `(row, col)`.
    pub fn get_cell_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Row `i` as a slice.
    pub fn get_row(&self, i: usize) -> Option<&[T]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// Mutable view of a row. A slice cannot change length, so the grid stays rectangular.
    pub fn get_row_mut(&mut self, i: usize) -> Option<&mut [T]> {
        self.rows.get_mut(i).map(Vec::as_mut_slice)
    }

    /// Synthesize column `i` by reading index `i` from each row in order.
    ///
    /// Stops at the first row lacking the index; on a rectangular grid that means the result is
    /// either the full column or empty.
    pub fn get_column(&self, i: usize) -> Vec<&T> {
        self.rows.iter().map_while(|r| r.get(i)).collect()
    }

    /// Rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All cells in row-major order with their `(row, column)` position.
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, v)| (r, c, v)))
    }

    /// Append a row. Its length must match the column count unless the grid is empty.
    pub fn push_row(&mut self, row: Vec<T>) -> TableResult<()> {
        self.check_row_len(row.len())?;
        self.rows.push(row);
        Ok(())
    }

    /// Append a column. Its length must match the row count unless the grid is empty.
    pub fn push_column(&mut self, column: Vec<T>) -> TableResult<()> {
        let at = self.column_count();
        self.splice_column(column, at)
    }

    /// Insert `row` next to row `anchor`. Returns `Ok(false)` when the anchor is out of range.
    pub fn insert_row(&mut self, row: Vec<T>, anchor: usize, side: Side) -> TableResult<bool> {
        let Some(at) = insertion_position(anchor, side, self.rows.len()) else {
            return Ok(false);
        };
        self.check_row_len(row.len())?;
        self.rows.insert(at, row);
        Ok(true)
    }

    /// Insert `column` next to column `anchor`. Returns `Ok(false)` when the anchor is out of
    /// range.
    pub fn insert_column(
        &mut self,
        column: Vec<T>,
        anchor: usize,
        side: Side,
    ) -> TableResult<bool> {
        let Some(at) = insertion_position(anchor, side, self.column_count()) else {
            return Ok(false);
        };
        self.splice_column(column, at)?;
        Ok(true)
    }

    /// Remove and return row `i`.
    pub fn remove_row(&mut self, i: usize) -> Option<Vec<T>> {
        (i < self.rows.len()).then(|| self.rows.remove(i))
    }

    /// Remove column `i`. Removing the last remaining column empties the grid.
    pub fn remove_column(&mut self, i: usize) -> Option<Vec<T>> {
        if i >= self.column_count() {
            return None;
        }
        let column: Vec<T> = self.rows.iter_mut().map(|r| r.remove(i)).collect();
        if self.column_count() == 0 {
            self.rows.clear();
        }
        Some(column)
    }

    /// Overwrite row `i` in place. Returns `Ok(false)` when the row does not exist.
    pub fn set_row(&mut self, i: usize, row: Vec<T>) -> TableResult<bool> {
        let width = self.column_count();
        let Some(slot) = self.rows.get_mut(i) else {
            return Ok(false);
        };
        if row.len() != width {
            return Err(TableError::shape(format!(
                "row has {} cells, expected {width}",
                row.len()
            )));
        }
        *slot = row;
        Ok(true)
    }

    /// Overwrite column `i` in place. Returns `Ok(false)` when the column does not exist.
    pub fn set_column(&mut self, i: usize, column: Vec<T>) -> TableResult<bool> {
        if i >= self.column_count() {
            return Ok(false);
        }
        if column.len() != self.rows.len() {
            return Err(TableError::shape(format!(
                "column has {} cells, expected {}",
                column.len(),
                self.rows.len()
            )));
        }
        for (row, value) in self.rows.iter_mut().zip(column) {
            row[i] = value;
        }
        Ok(true)
    }

    /// Structure-preserving transform.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .iter()
                .map(|r| r.iter().map(&mut f).collect())
                .collect(),
        }
    }

    /// Like [`Grid::map`], with each cell's `(row, column)` position.
    pub fn map_indexed<U>(&self, mut f: impl FnMut(usize, usize, &T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .iter()
                .enumerate()
                .map(|(r, row)| row.iter().enumerate().map(|(c, v)| f(r, c, v)).collect())
                .collect(),
        }
    }

    /// Visit every row with its index.
    pub fn for_each_row(&self, mut f: impl FnMut(usize, &[T])) {
        for (i, row) in self.rows.iter().enumerate() {
            f(i, row);
        }
    }

    /// Visit every column with its index.
    pub fn for_each_column(&self, mut f: impl FnMut(usize, Vec<&T>)) {
        for i in 0..self.column_count() {
            f(i, self.get_column(i));
        }
    }

    /// Number of rows matching `pred`.
    pub fn count_rows_where(&self, mut pred: impl FnMut(&[T]) -> bool) -> usize {
        self.rows.iter().filter(|r| pred(r)).count()
    }

    /// `true` if any row matches `pred`.
    pub fn any_row(&self, mut pred: impl FnMut(&[T]) -> bool) -> bool {
        self.rows.iter().any(|r| pred(r))
    }

    /// `true` if any column matches `pred`.
    pub fn any_column(&self, mut pred: impl FnMut(&[&T]) -> bool) -> bool {
        (0..self.column_count()).any(|i| pred(&self.get_column(i)))
    }

    /// Consume the grid, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    fn check_row_len(&self, len: usize) -> TableResult<()> {
        if len == 0 {
            return Err(TableError::shape("cannot insert an empty row"));
        }
        if !self.rows.is_empty() && len != self.column_count() {
            return Err(TableError::shape(format!(
                "row has {len} cells, expected {}",
                self.column_count()
            )));
        }
        Ok(())
    }

    fn splice_column(&mut self, column: Vec<T>, at: usize) -> TableResult<()> {
        if column.is_empty() {
            return Err(TableError::shape("cannot insert an empty column"));
        }
        if self.rows.is_empty() {
            self.rows = column.into_iter().map(|v| vec![v]).collect();
            return Ok(());
        }
        if column.len() != self.rows.len() {
            return Err(TableError::shape(format!(
                "column has {} cells, expected {}",
                column.len(),
                self.rows.len()
            )));
        }
        for (row, value) in self.rows.iter_mut().zip(column) {
            row.insert(at, value);
        }
        Ok(())
    }
}

impl<T: serde::Serialize> serde::Serialize for Grid<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Grid<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Grid::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/store.rs"]
mod tests;
