pub mod chart_spec;
pub mod column_transform;
pub mod measure_format;
pub mod style;

pub use chart_spec::{ChartSpec, ChartSpecBuilder};
pub use column_transform::{ColumnMapping, ColumnTable, series_from_columns};
pub use measure_format::{MeasureValueFormat, NumberLocale};
pub use style::{AxisAssignment, AxisTextStyle, ChartStyle, Orientation, ScreenAxis};
