use crate::{foundation::core::Axis, layout::axis::AxisGroup};

/// Convenience result type used across tablegrid.
pub type TableResult<T> = Result<T, TableError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TableError {
    /// An axis cannot be resolved at all.
    #[error("invalid {} configuration: {reason}", .group.axis())]
    InvalidConfiguration {
        /// The offending axis configuration.
        group: AxisGroup,
        /// Why the axis was rejected.
        reason: String,
    },

    /// A single percentage, or a running sum of percentages, left `(0, 100]`.
    #[error("invalid {axis} percentage at index {index}: {value}")]
    InvalidPercentage {
        /// Axis being resolved or edited.
        axis: Axis,
        /// Index of the offending entry.
        index: usize,
        /// The offending value or cumulative sum.
        value: f64,
    },

    /// An explicit-index mutation received an out-of-range index.
    #[error("{axis} index {index} is out of range (len {len})")]
    InvalidIndex {
        /// Axis the index addresses.
        axis: Axis,
        /// Requested index.
        index: usize,
        /// Current number of entries on that axis.
        len: usize,
    },

    /// A mutation or input would leave the grid non-rectangular.
    #[error("shape error: {0}")]
    Shape(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TableError {
    /// Build a [`TableError::InvalidConfiguration`] value.
    pub fn invalid_configuration(group: AxisGroup, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            group,
            reason: reason.into(),
        }
    }

    /// Build a [`TableError::InvalidPercentage`] value.
    pub fn invalid_percentage(axis: Axis, index: usize, value: f64) -> Self {
        Self::InvalidPercentage { axis, index, value }
    }

    /// Build a [`TableError::InvalidIndex`] value.
    pub fn invalid_index(axis: Axis, index: usize, len: usize) -> Self {
        Self::InvalidIndex { axis, index, len }
    }

    /// Build a [`TableError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`TableError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
