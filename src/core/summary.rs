use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Five-number summary for one box-and-whisker category.
///
/// Fields map to whisker-min, box-bottom, center line, box-top and
/// whisker-max. Internal ordering is intentionally not enforced: hosts
/// deliver pre-aggregated quartiles, and an out-of-order summary is kept and
/// laid out as-is rather than rejected or rectified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    pub whisker_low: f64,
    pub box_low: f64,
    pub median: f64,
    pub box_high: f64,
    pub whisker_high: f64,
}

impl FiveNumberSummary {
    /// Builds a summary from raw floating values.
    ///
    /// Invariants:
    /// - all values are finite
    pub fn new(
        whisker_low: f64,
        box_low: f64,
        median: f64,
        box_high: f64,
        whisker_high: f64,
    ) -> ChartResult<Self> {
        if !whisker_low.is_finite()
            || !box_low.is_finite()
            || !median.is_finite()
            || !box_high.is_finite()
            || !whisker_high.is_finite()
        {
            return Err(ChartError::InvalidData(
                "summary values must be finite".to_owned(),
            ));
        }

        Ok(Self {
            whisker_low,
            box_low,
            median,
            box_high,
            whisker_high,
        })
    }

    /// Returns the five values in whisker-to-whisker order.
    #[must_use]
    pub fn values(self) -> [f64; 5] {
        [
            self.whisker_low,
            self.box_low,
            self.median,
            self.box_high,
            self.whisker_high,
        ]
    }
}

/// One labeled category paired with its summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDatum {
    pub label: String,
    pub summary: FiveNumberSummary,
}

/// Immutable ordered category collection built once per refresh cycle.
///
/// Labels stay addressable by index so interaction layers can recover the
/// untruncated text for a category regardless of how the axis displays it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    data: Vec<CategoryDatum>,
}

impl CategorySeries {
    #[must_use]
    pub fn new(data: Vec<CategoryDatum>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CategoryDatum> {
        self.data.get(index)
    }

    /// Returns the original, untruncated label at `index`.
    #[must_use]
    pub fn label_at(&self, index: usize) -> Option<&str> {
        self.data.get(index).map(|datum| datum.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDatum> {
        self.data.iter()
    }

    /// Collects the summaries in category order.
    #[must_use]
    pub fn summaries(&self) -> Vec<FiveNumberSummary> {
        self.data.iter().map(|datum| datum.summary).collect()
    }
}
