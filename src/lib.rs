//! tablegrid is a percentage-based grid layout and structural mutation engine for table
//! documents.
//!
//! A table is a rectangular grid of cells. Each cell carries a size policy per axis, either an
//! explicit percentage or Auto, plus content and an opaque style payload. The engine resolves
//! those policies into absolute rectangles and offers an invariant-preserving API for
//! inserting, removing, resizing and populating rows and columns.
//!
//! # Pipeline overview
//!
//! 1. **Edit**: [`TableBuilder`] mutates its [`Grid`] through [`RowBuilder`] / [`ColumnBuilder`]
//!    slices.
//! 2. **Derive**: per-row and per-column policies are re-derived from the cells as an
//!    [`AxisGroup`] per axis.
//! 3. **Resolve**: [`GridLayoutResolver`] turns the two groups plus an absolute size into a
//!    [`TableGeometry`] of cell rectangles. Resolution is pull-based; nothing is cached.
//! 4. **Commit / persist**: [`TableBuilder::build`] yields an immutable [`Table`], which
//!    round-trips through JSON.
//!
//! Percentages must never sum past 100 on an axis. Auto entries share whatever the explicit
//! entries leave free. All percentage-sum comparisons use [`PERCENT_EPSILON`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod foundation;
mod grid;
mod layout;
mod table;

pub use foundation::core::{
    Axis, FULL_PERCENT, PERCENT_EPSILON, Parity, Point, Rect, Side, Size, Vec2,
    is_valid_percentage,
};
pub use foundation::error::{TableError, TableResult};
pub use grid::store::Grid;
pub use layout::axis::{AxisGroup, AxisLayout};
pub use layout::resolver::{GridLayoutResolver, ResolvedCell, TableGeometry, resolve_axis_extents};
pub use table::builder::{InsertOptions, TableBuilder};
pub use table::model::{CellAttributes, CellPatch, CellStyle, Table, TableOptions};
pub use table::range::{
    CellRangeBuilder, CellShare, ColumnBuilder, ColumnRange, RangeAxis, RowBuilder, RowRange,
};
