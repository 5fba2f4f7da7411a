use std::marker::PhantomData;

use crate::{
    foundation::core::{Axis, FULL_PERCENT, Parity, exceeds_full, is_valid_percentage},
    layout::axis::{AxisGroup, AxisLayout},
    table::model::{CellAttributes, CellPatch},
};

mod sealed {
    pub trait Sealed {}
}

/// Marks which kind of slice a [`CellRangeBuilder`] wraps.
pub trait RangeAxis: sealed::Sealed {
    /// Axis the slice's cells run along.
    const ALONG: Axis;
}

/// Marker for a row slice; its cells run along the column axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowRange;

/// Marker for a column slice; its cells run along the row axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnRange;

impl sealed::Sealed for RowRange {}
impl sealed::Sealed for ColumnRange {}

impl RangeAxis for RowRange {
    const ALONG: Axis = Axis::Column;
}

impl RangeAxis for ColumnRange {
    const ALONG: Axis = Axis::Row;
}

/// Fluent editor for one row.
pub type RowBuilder = CellRangeBuilder<RowRange>;
/// Fluent editor for one column.
pub type ColumnBuilder = CellRangeBuilder<ColumnRange>;

/// Explicit percentage for one cell of a slice, used by `set_cells_width/height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellShare {
    /// Position within the slice.
    pub index: usize,
    /// Percentage in `(0, 100]`.
    pub percentage: f64,
}

impl CellShare {
    /// Pin cell `index` to `percentage`.
    pub fn new(index: usize, percentage: f64) -> Self {
        Self { index, percentage }
    }
}

/// Fluent mutation API over one row or column of cells.
///
/// Every mutator consumes and returns the builder. Invalid input never raises: the builder comes
/// back unchanged and a warning is traced, so chains stay side-effect free end to end. Cloning
/// deep-copies the cells.
#[derive(Clone, Debug, PartialEq)]
pub struct CellRangeBuilder<K> {
    cells: Vec<CellAttributes>,
    kind: PhantomData<K>,
}

impl<K: RangeAxis> Default for CellRangeBuilder<K> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<K: RangeAxis> CellRangeBuilder<K> {
    /// Wrap existing cells.
    pub fn new(cells: Vec<CellAttributes>) -> Self {
        Self {
            cells,
            kind: PhantomData,
        }
    }

    /// `count` empty, all-Auto cells.
    pub fn with_cells(count: usize) -> Self {
        Self::new(vec![CellAttributes::new(); count])
    }

    /// One all-Auto cell per content value.
    pub fn from_contents<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values.into_iter().map(CellAttributes::with_content).collect())
    }

    /// Axis the slice's cells run along (columns for a row, rows for a column).
    pub fn along() -> Axis {
        K::ALONG
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` when the slice holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in order.
    pub fn cells(&self) -> &[CellAttributes] {
        &self.cells
    }

    /// Cell at `index`.
    pub fn get(&self, index: usize) -> Option<&CellAttributes> {
        self.cells.get(index)
    }

    /// Consume the builder, returning its cells.
    pub fn into_cells(self) -> Vec<CellAttributes> {
        self.cells
    }

    // Uniform sizing.

    /// Override every cell's width with `v`. No-op unless `v` is in `(0, 100]`.
    pub fn set_width(self, v: f64) -> Self {
        self.set_uniform(Axis::Column, v)
    }

    /// Override every cell's height with `v`. No-op unless `v` is in `(0, 100]`.
    pub fn set_height(self, v: f64) -> Self {
        self.set_uniform(Axis::Row, v)
    }

    /// Make every cell Auto on width.
    pub fn auto_width(self) -> Self {
        self.auto_all(Axis::Column)
    }

    /// Make every cell Auto on height.
    pub fn auto_height(self) -> Self {
        self.auto_all(Axis::Row)
    }

    /// Override every cell's width and drop its Auto flag.
    ///
    /// A size policy is either Auto or a percentage, so this is the same operation as
    /// [`CellRangeBuilder::set_width`].
    pub fn custom_width(self, v: f64) -> Self {
        self.set_uniform(Axis::Column, v)
    }

    /// Height counterpart of [`CellRangeBuilder::custom_width`].
    pub fn custom_height(self, v: f64) -> Self {
        self.set_uniform(Axis::Row, v)
    }

    /// Give every cell `100 / len` percent of width.
    pub fn fit_width(self) -> Self {
        self.fit(Axis::Column, FULL_PERCENT)
    }

    /// Give every cell `total / len` percent of width.
    pub fn fit_width_to(self, total: f64) -> Self {
        self.fit(Axis::Column, total)
    }

    /// Give every cell `100 / len` percent of height.
    pub fn fit_height(self) -> Self {
        self.fit(Axis::Row, FULL_PERCENT)
    }

    /// Give every cell `total / len` percent of height.
    pub fn fit_height_to(self, total: f64) -> Self {
        self.fit(Axis::Row, total)
    }

    // Partial distribution.

    /// Assign explicit widths to some cells and floor-share the rest.
    ///
    /// All-or-nothing: an out-of-range or repeated index, a percentage outside `(0, 100]`, or a
    /// running sum above 100 leaves the slice unchanged. Unnamed cells receive
    /// `floor((100 - named) / unnamed)`; when that floor is zero they become Auto.
    pub fn set_cells_width(self, entries: &[CellShare]) -> Self {
        self.distribute(Axis::Column, entries)
    }

    /// Height counterpart of [`CellRangeBuilder::set_cells_width`].
    pub fn set_cells_height(self, entries: &[CellShare]) -> Self {
        self.distribute(Axis::Row, entries)
    }

    // Content.

    /// Assign contents positionally. Cells past the end of `values` keep their content.
    pub fn populate<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (cell, value) in self.cells.iter_mut().zip(values) {
            cell.content = value.into();
        }
        self
    }

    /// Assign every cell's content from `getter(cell, index)`.
    pub fn populate_each(mut self, mut getter: impl FnMut(&CellAttributes, usize) -> String) -> Self {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            cell.content = getter(cell, i);
        }
        self
    }

    /// Patch the cell at `index`.
    pub fn set(self, index: usize, patch: &CellPatch) -> Self {
        if index >= self.cells.len() {
            tracing::warn!(index, len = self.cells.len(), "ignoring patch for missing cell");
            return self;
        }
        self.patch_where(patch, |i| i == index)
    }

    /// Patch every cell.
    pub fn set_all(self, patch: &CellPatch) -> Self {
        self.patch_where(patch, |_| true)
    }

    /// Patch only the listed cells. Any out-of-range index makes the whole call a no-op.
    pub fn set_only(self, indices: &[usize], patch: &CellPatch) -> Self {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.cells.len()) {
            tracing::warn!(index = bad, len = self.cells.len(), "ignoring patch for missing cell");
            return self;
        }
        self.patch_where(patch, |i| indices.contains(&i))
    }

    /// Patch the first cell, if any.
    pub fn set_first(self, patch: &CellPatch) -> Self {
        self.patch_where(patch, |i| i == 0)
    }

    /// Patch the last cell, if any.
    pub fn set_last(self, patch: &CellPatch) -> Self {
        let last = self.cells.len().checked_sub(1);
        self.patch_where(patch, |i| Some(i) == last)
    }

    /// Patch every cell at an even or odd position.
    pub fn set_alternate(self, parity: Parity, patch: &CellPatch) -> Self {
        self.patch_where(patch, |i| parity.matches(i))
    }

    // Queries.

    /// `true` only if the slice is non-empty and every cell has Auto width.
    ///
    /// A mixed slice reports `false`.
    pub fn has_auto_width(&self) -> bool {
        self.has_auto(Axis::Column)
    }

    /// Height counterpart of [`CellRangeBuilder::has_auto_width`].
    pub fn has_auto_height(&self) -> bool {
        self.has_auto(Axis::Row)
    }

    /// `100 - sum` of the valid explicit widths. Negative when over-committed.
    pub fn available_width(&self) -> f64 {
        self.available(Axis::Column)
    }

    /// `100 - sum` of the valid explicit heights.
    pub fn available_height(&self) -> f64 {
        self.available(Axis::Row)
    }

    /// Absolute gap between 100 and the sum of every explicit width.
    pub fn free_width(&self) -> f64 {
        self.free(Axis::Column)
    }

    /// Absolute gap between 100 and the sum of every explicit height.
    pub fn free_height(&self) -> f64 {
        self.free(Axis::Row)
    }

    /// Policies of this slice along `axis`, as an axis group.
    pub fn layout_group(&self, axis: Axis) -> AxisGroup {
        AxisGroup::new(axis, self.cells.iter().map(|c| c.layout(axis)).collect())
    }

    pub(crate) fn fit(mut self, axis: Axis, total: f64) -> Self {
        if self.cells.is_empty() || !is_valid_percentage(total) {
            tracing::warn!(%axis, total, "ignoring fit");
            return self;
        }
        let share = total / self.cells.len() as f64;
        for cell in &mut self.cells {
            *cell.layout_mut(axis) = AxisLayout::Percentage(share);
        }
        self
    }

    fn set_uniform(mut self, axis: Axis, v: f64) -> Self {
        let Some(layout) = AxisLayout::percentage(v) else {
            tracing::warn!(%axis, value = v, "ignoring out-of-range percentage");
            return self;
        };
        for cell in &mut self.cells {
            *cell.layout_mut(axis) = layout;
        }
        self
    }

    fn auto_all(mut self, axis: Axis) -> Self {
        for cell in &mut self.cells {
            *cell.layout_mut(axis) = AxisLayout::Auto;
        }
        self
    }

    fn distribute(mut self, axis: Axis, entries: &[CellShare]) -> Self {
        let len = self.cells.len();
        let mut named = vec![None; len];
        let mut sum = 0.0;
        for entry in entries {
            let valid = entry.index < len
                && named[entry.index].is_none()
                && is_valid_percentage(entry.percentage);
            if !valid {
                tracing::warn!(%axis, index = entry.index, percentage = entry.percentage, "rejecting cell distribution");
                return self;
            }
            sum += entry.percentage;
            if exceeds_full(sum) {
                tracing::warn!(%axis, index = entry.index, sum, "rejecting cell distribution: sum exceeds 100");
                return self;
            }
            named[entry.index] = Some(AxisLayout::Percentage(entry.percentage));
        }

        let seeded: Vec<AxisLayout> = named.iter().map(|n| n.unwrap_or_default()).collect();
        let remainder = AxisGroup::new(axis, seeded)
            .seed_share()
            .and_then(AxisLayout::percentage)
            .unwrap_or(AxisLayout::Auto);

        for (cell, layout) in self.cells.iter_mut().zip(named) {
            *cell.layout_mut(axis) = layout.unwrap_or(remainder);
        }
        self
    }

    fn patch_where(mut self, patch: &CellPatch, mut select: impl FnMut(usize) -> bool) -> Self {
        if !patch.is_valid() {
            tracing::warn!(?patch, "ignoring patch with out-of-range percentage");
            return self;
        }
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if select(i) {
                patch.apply(cell);
            }
        }
        self
    }

    fn has_auto(&self, axis: Axis) -> bool {
        !self.cells.is_empty() && self.cells.iter().all(|c| c.layout(axis).is_auto())
    }

    fn available(&self, axis: Axis) -> f64 {
        let used: f64 = self
            .cells
            .iter()
            .filter_map(|c| c.layout(axis).value())
            .filter(|p| is_valid_percentage(*p))
            .sum();
        FULL_PERCENT - used
    }

    fn free(&self, axis: Axis) -> f64 {
        let used: f64 = self
            .cells
            .iter()
            .filter_map(|c| c.layout(axis).value())
            .sum();
        (FULL_PERCENT - used).abs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/table/range.rs"]
mod tests;
