use serde::{Deserialize, Serialize};

use crate::core::nice::round_to_nice;
use crate::core::summary::FiveNumberSummary;
use crate::error::{ChartError, ChartResult};

/// Explicit measure-axis bounds handed to the render delegate.
///
/// A `None` side defers that side to the delegate's own auto-scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeasureBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MeasureBounds {
    /// Bounds that defer both sides to delegate auto-scale.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    #[must_use]
    pub fn is_set(self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

/// Tuning controls for measure-domain fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasureRangeTuning {
    /// Fraction of the data span added symmetrically to both sides.
    pub padding_ratio: f64,
    /// Span-relative lower bound on the padding.
    pub padding_floor_ratio: f64,
    /// Absolute lower bound on the padding, in measure units.
    pub padding_floor_absolute: f64,
    /// Rounds the padded bounds outward to `{1, 2, 5, 10} * 10^k` values.
    pub nice_rounding: bool,
}

impl Default for MeasureRangeTuning {
    fn default() -> Self {
        Self {
            padding_ratio: 0.08,
            padding_floor_ratio: 0.03,
            padding_floor_absolute: 1.0,
            nice_rounding: false,
        }
    }
}

impl MeasureRangeTuning {
    fn validate(self) -> ChartResult<Self> {
        if !self.padding_ratio.is_finite()
            || !self.padding_floor_ratio.is_finite()
            || self.padding_ratio < 0.0
            || self.padding_floor_ratio < 0.0
        {
            return Err(ChartError::InvalidConfig(
                "measure range padding ratios must be finite and >= 0".to_owned(),
            ));
        }

        if !self.padding_floor_absolute.is_finite() || self.padding_floor_absolute < 0.0 {
            return Err(ChartError::InvalidConfig(
                "measure range padding floor must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Fits explicit measure-axis bounds around a set of category summaries.
///
/// The scan tracks the lowest whisker-min and highest whisker-max, skipping
/// non-finite values. Empty input, or input with no finite extremes, defers
/// to delegate auto-scale rather than erroring. All-non-negative data never
/// receives a negative floor: the padded minimum is clamped to zero before
/// any nice-number rounding.
pub fn fit_measure_bounds(
    summaries: &[FiveNumberSummary],
    tuning: MeasureRangeTuning,
) -> ChartResult<MeasureBounds> {
    let tuning = tuning.validate()?;

    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for summary in summaries {
        if summary.whisker_low.is_finite() {
            low = low.min(summary.whisker_low);
        }
        if summary.whisker_high.is_finite() {
            high = high.max(summary.whisker_high);
        }
    }

    if !low.is_finite() || !high.is_finite() {
        return Ok(MeasureBounds::unset());
    }

    let span = high - low;
    let padding = if span == 0.0 {
        (high.abs() * tuning.padding_ratio).max(tuning.padding_floor_absolute)
    } else {
        (span * tuning.padding_ratio)
            .max((span * tuning.padding_floor_ratio).max(tuning.padding_floor_absolute))
    };

    let mut fitted_min = low - padding;
    let mut fitted_max = high + padding;

    if low >= 0.0 && fitted_min < 0.0 {
        fitted_min = 0.0;
    }

    if tuning.nice_rounding {
        fitted_min = round_to_nice(fitted_min);
        fitted_max = round_to_nice(fitted_max);
    }

    Ok(MeasureBounds {
        min: Some(fitted_min),
        max: Some(fitted_max),
    })
}
