use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[cfg(feature = "parallel-transform")]
use rayon::prelude::*;

use crate::core::{CategoryDatum, CategorySeries, FiveNumberSummary};

/// Host data binding: per-column cell arrays keyed by column identifier.
///
/// Cells arrive loosely typed (numbers, numeric strings, nulls); typing is
/// resolved row-by-row during the transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnTable {
    columns: IndexMap<String, Vec<Value>>,
}

impl ColumnTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, cells: Vec<Value>) {
        self.columns.insert(id.into(), cells);
    }

    #[must_use]
    pub fn column(&self, id: &str) -> Option<&[Value]> {
        self.columns.get(id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Column identifiers for one box-and-whisker mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub category: String,
    pub whisker_low: String,
    pub box_low: String,
    pub median: String,
    pub box_high: String,
    pub whisker_high: String,
}

/// Builds the category series from mapped host columns.
///
/// Any unmapped column yields an empty series (the host surfaces a
/// "configure mapping" state). Rows are shared-index across the six
/// columns; a row is silently dropped when its attribute cell is null or
/// missing, or when any of the five numeric cells fails coercion. Sparse
/// source rows are expected, so drops are counted once rather than reported
/// per row, and surviving rows keep source order.
#[must_use]
pub fn series_from_columns(table: &ColumnTable, mapping: &ColumnMapping) -> CategorySeries {
    let columns = [
        table.column(&mapping.category),
        table.column(&mapping.whisker_low),
        table.column(&mapping.box_low),
        table.column(&mapping.median),
        table.column(&mapping.box_high),
        table.column(&mapping.whisker_high),
    ];
    let [Some(category), Some(whisker_low), Some(box_low), Some(median), Some(box_high), Some(whisker_high)] =
        columns
    else {
        debug!("column mapping incomplete, emitting empty series");
        return CategorySeries::default();
    };

    let row_count = category.len();

    #[cfg(feature = "parallel-transform")]
    let data: Vec<CategoryDatum> = (0..row_count)
        .into_par_iter()
        .filter_map(|row| {
            datum_at(
                row,
                category,
                whisker_low,
                box_low,
                median,
                box_high,
                whisker_high,
            )
        })
        .collect();

    #[cfg(not(feature = "parallel-transform"))]
    let data: Vec<CategoryDatum> = (0..row_count)
        .filter_map(|row| {
            datum_at(
                row,
                category,
                whisker_low,
                box_low,
                median,
                box_high,
                whisker_high,
            )
        })
        .collect();

    let skipped = row_count - data.len();
    if skipped > 0 {
        debug!(skipped, emitted = data.len(), "dropped incomplete rows");
    }

    CategorySeries::new(data)
}

fn datum_at(
    row: usize,
    category: &[Value],
    whisker_low: &[Value],
    box_low: &[Value],
    median: &[Value],
    box_high: &[Value],
    whisker_high: &[Value],
) -> Option<CategoryDatum> {
    let label = category_label(category.get(row)?)?;
    let summary = FiveNumberSummary::new(
        coerce_numeric(whisker_low.get(row)?)?,
        coerce_numeric(box_low.get(row)?)?,
        coerce_numeric(median.get(row)?)?,
        coerce_numeric(box_high.get(row)?)?,
        coerce_numeric(whisker_high.get(row)?)?,
    )
    .ok()?;

    Some(CategoryDatum { label, summary })
}

/// Coerces a loosely-typed cell to a finite number.
///
/// Numbers pass through; strings are parsed after trimming. Everything else
/// (nulls, booleans, nested values) fails coercion and drops the row.
fn coerce_numeric(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

fn category_label(cell: &Value) -> Option<String> {
    match cell {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
