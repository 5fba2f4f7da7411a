use crate::foundation::{
    core::{Axis, FULL_PERCENT, PERCENT_EPSILON, exceeds_full, is_valid_percentage},
    error::{TableError, TableResult},
};

/// Sizing policy of one axis entry (a row height or a column width).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum AxisLayout {
    /// Take an equal share of whatever the explicit entries leave free.
    #[default]
    Auto,
    /// Take exactly this percentage of the axis extent.
    Percentage(f64),
}

impl AxisLayout {
    /// Explicit percentage, or `None` unless `p` is in `(0, 100]`.
    pub fn percentage(p: f64) -> Option<Self> {
        is_valid_percentage(p).then_some(Self::Percentage(p))
    }

    /// `true` for [`AxisLayout::Auto`].
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// `Auto` is always valid; `Percentage(p)` iff `0 < p <= 100`.
    pub fn is_valid(self) -> bool {
        match self {
            Self::Auto => true,
            Self::Percentage(p) => is_valid_percentage(p),
        }
    }

    /// The explicit percentage, if this is an override.
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Auto => None,
            Self::Percentage(p) => Some(p),
        }
    }
}

impl serde::Serialize for AxisLayout {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Auto => serializer.serialize_str("auto"),
            Self::Percentage(p) => serializer.serialize_f64(*p),
        }
    }
}

impl<'de> serde::Deserialize<'de> for AxisLayout {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Keyword(String),
        }

        // Range checks happen at validation time so errors can name the offending cell.
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(Self::Auto),
            Some(Repr::Number(p)) => Ok(Self::Percentage(p)),
            Some(Repr::Keyword(k)) if k.eq_ignore_ascii_case("auto") => Ok(Self::Auto),
            Some(Repr::Keyword(k)) => Err(serde::de::Error::custom(format!(
                "expected a percentage or \"auto\", got '{k}'"
            ))),
        }
    }
}

/// Ordered sizing policies of one axis and their aggregate quantities.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGroup {
    axis: Axis,
    entries: Vec<AxisLayout>,
}

impl AxisGroup {
    /// Group `entries` in order along `axis`.
    pub fn new(axis: Axis, entries: Vec<AxisLayout>) -> Self {
        Self { axis, entries }
    }

    /// Axis the entries size.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Per-entry policies in order.
    pub fn entries(&self) -> &[AxisLayout] {
        &self.entries
    }

    /// Number of entries.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Number of Auto entries.
    pub fn auto_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_auto()).count()
    }

    /// Sum of every explicit percentage on the axis.
    pub fn override_total(&self) -> f64 {
        self.entries.iter().filter_map(|e| e.value()).sum()
    }

    /// `100 - override_total`. Negative when the axis is over-committed; never clamped.
    pub fn free_space(&self) -> f64 {
        FULL_PERCENT - self.override_total()
    }

    /// Exact share of free space for each Auto entry. Used for geometry.
    pub fn auto_share(&self) -> Option<f64> {
        let autos = self.auto_count();
        (autos > 0).then(|| self.free_space() / autos as f64)
    }

    /// Floored share of free space, used only when seeding new cells with explicit
    /// percentages. The shortfall from flooring is left unassigned.
    pub fn seed_share(&self) -> Option<f64> {
        self.auto_share().map(f64::floor)
    }

    /// Check that the axis resolves.
    pub fn validate(&self) -> TableResult<()> {
        self.resolve().map(|_| ())
    }

    /// Resolve every entry to a concrete percentage.
    ///
    /// Auto entries take [`AxisGroup::auto_share`]. Fails with
    /// [`TableError::InvalidPercentage`] on the first invalid entry or the moment the running
    /// sum passes 100, and with [`TableError::InvalidConfiguration`] when the overrides exceed
    /// 100 and there is no Auto entry to report against.
    pub fn resolve(&self) -> TableResult<Vec<f64>> {
        for (index, entry) in self.entries.iter().enumerate() {
            if let AxisLayout::Percentage(p) = *entry
                && !is_valid_percentage(p)
            {
                return Err(TableError::invalid_percentage(self.axis, index, p));
            }
        }

        let total = self.override_total();
        let share = match self.auto_share() {
            Some(share) => share,
            None if exceeds_full(total) => {
                return Err(TableError::invalid_configuration(
                    self.clone(),
                    format!("override total {total} exceeds 100 with no auto entries"),
                ));
            }
            None => 0.0,
        };

        let mut sum = 0.0;
        let mut resolved = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let p = entry.value().unwrap_or(share);
            sum += p;
            if exceeds_full(sum) {
                return Err(TableError::invalid_percentage(self.axis, index, sum));
            }
            if p < -PERCENT_EPSILON {
                return Err(TableError::invalid_percentage(self.axis, index, p));
            }
            resolved.push(p.max(0.0));
        }
        Ok(resolved)
    }

    /// Resolved percentage of a single entry.
    pub fn share_of(&self, index: usize) -> TableResult<f64> {
        let resolved = self.resolve()?;
        resolved
            .get(index)
            .copied()
            .ok_or_else(|| TableError::invalid_index(self.axis, index, self.count()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/axis.rs"]
mod tests;
