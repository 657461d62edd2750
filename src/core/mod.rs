pub mod label_layout;
pub mod measure_range;
pub mod nice;
pub mod summary;

pub use label_layout::{
    ContainerMetrics, LabelBudget, LabelLayoutInputs, LabelLayoutPlanner, LabelRotation,
};
pub use measure_range::{MeasureBounds, MeasureRangeTuning, fit_measure_bounds};
pub use nice::round_to_nice;
pub use summary::{CategoryDatum, CategorySeries, FiveNumberSummary};
