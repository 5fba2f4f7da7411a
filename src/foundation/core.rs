use std::fmt;

pub use kurbo::{Point, Rect, Size, Vec2};

/// Tolerance applied to every percentage-sum comparison.
pub const PERCENT_EPSILON: f64 = 1e-6;

/// The whole of an axis, in percent.
pub const FULL_PERCENT: f64 = 100.0;

/// One dimension of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// The row dimension; entries are row heights.
    Row,
    /// The column dimension; entries are column widths.
    Column,
}

impl Axis {
    /// The other axis.
    pub fn cross(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Which side of an anchor index an inserted row/column lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Side {
    /// Immediately before the anchor.
    Before,
    /// Immediately after the anchor.
    #[default]
    After,
}

/// Position parity used by alternate-cell selection (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    /// Positions 0, 2, 4, ...
    Even,
    /// Positions 1, 3, 5, ...
    Odd,
}

impl Parity {
    pub(crate) fn matches(self, index: usize) -> bool {
        match self {
            Parity::Even => index % 2 == 0,
            Parity::Odd => index % 2 == 1,
        }
    }
}

/// `true` when `p` is a usable explicit percentage, i.e. in `(0, 100]`.
pub fn is_valid_percentage(p: f64) -> bool {
    p.is_finite() && p > 0.0 && p <= FULL_PERCENT + PERCENT_EPSILON
}

/// `true` when a running percentage sum has gone past 100.
pub(crate) fn exceeds_full(sum: f64) -> bool {
    sum > FULL_PERCENT + PERCENT_EPSILON
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
