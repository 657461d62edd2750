use serde_json::{Map, Value};

use crate::api::column_transform::{ColumnMapping, ColumnTable, series_from_columns};
use crate::api::measure_format::MeasureValueFormat;
use crate::api::style::{AxisAssignment, ChartStyle};
use crate::core::{
    CategorySeries, ContainerMetrics, LabelBudget, LabelLayoutInputs, LabelLayoutPlanner,
    MeasureBounds, MeasureRangeTuning, fit_measure_bounds,
};
use crate::error::ChartResult;

/// Fully materialized chart description handed to a render delegate.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub series: CategorySeries,
    pub measure_bounds: MeasureBounds,
    pub label_budget: LabelBudget,
    pub axis_assignment: AxisAssignment,
    pub style: ChartStyle,
    pub value_format: MeasureValueFormat,
}

impl ChartSpec {
    pub fn validate(&self) -> ChartResult<()> {
        self.style.validate()
    }
}

/// Rebuilds the derived chart state from the latest host inputs.
///
/// Every call is a full, independent recomputation over the snapshots it is
/// given; the only state carried between refreshes is the label-layout memo,
/// so repeated calls with identical inputs are idempotent and a superseded
/// result can simply be discarded.
#[derive(Debug, Default)]
pub struct ChartSpecBuilder {
    label_planner: LabelLayoutPlanner,
}

impl ChartSpecBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(
        &mut self,
        table: &ColumnTable,
        mapping: &ColumnMapping,
        options: &Map<String, Value>,
        value_pattern: Option<&str>,
        container: ContainerMetrics,
        tuning: MeasureRangeTuning,
    ) -> ChartResult<ChartSpec> {
        let style = ChartStyle::from_options(options);
        let series = series_from_columns(table, mapping);
        let measure_bounds = fit_measure_bounds(&series.summaries(), tuning)?;

        let label_budget = self.label_planner.resolve(LabelLayoutInputs {
            category_count: series.len(),
            rotation: style.label_rotation,
            font_size_px: style.category_axis_text.font_size_px,
            container,
            chart_padding_percent: style.chart_padding_percent,
        });

        Ok(ChartSpec {
            axis_assignment: AxisAssignment::for_orientation(style.orientation),
            series,
            measure_bounds,
            label_budget,
            style,
            value_format: MeasureValueFormat::parse(value_pattern),
        })
    }
}
