use serde::{Deserialize, Serialize};

/// Fraction of container height reserved for the vertical label band.
const VERTICAL_LABEL_BAND_RATIO: f64 = 0.15;
/// Share of the remaining chart height vertical labels may consume.
const VERTICAL_LABEL_HEIGHT_SHARE: f64 = 0.28;
const VERTICAL_PX_PER_CHAR_FACTOR: f64 = 1.1;
const VERTICAL_MIN_CHARS: usize = 10;
const VERTICAL_MAX_CHARS: usize = 50;

const HORIZONTAL_PX_PER_CHAR_FACTOR: f64 = 0.65;
/// Slack applied to the per-category pixel budget before converting to chars.
const HORIZONTAL_BUDGET_SLACK: f64 = 1.10;
const HORIZONTAL_MIN_CHARS: usize = 6;
const HORIZONTAL_MAX_CHARS: usize = 100;

const ELLIPSIS: char = '\u{2026}';

/// Pixel snapshot of the rendering surface.
///
/// Resize observation lives at the boundary; layout code only ever sees an
/// immutable snapshot taken at recomputation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub width_px: f64,
    pub height_px: f64,
}

impl ContainerMetrics {
    #[must_use]
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}

/// Category-label orientation along the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LabelRotation {
    /// Labels run left-to-right; the budget is width- and density-driven.
    #[default]
    Horizontal,
    /// Labels run vertically (90 degrees); the budget is height-driven.
    Vertical,
}

/// Inputs that drive one label-budget computation.
///
/// Equality over the full input set makes recomputation triggers explicit: a
/// new budget is resolved only when one of these fields changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLayoutInputs {
    pub category_count: usize,
    pub rotation: LabelRotation,
    pub font_size_px: f64,
    pub container: ContainerMetrics,
    pub chart_padding_percent: f64,
}

/// Resolved character budget for category labels.
///
/// A budget clips labels for axis display only; the untruncated text stays
/// addressable by index on the category series for tooltip use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelBudget {
    max_chars: Option<usize>,
}

impl LabelBudget {
    /// Budget that passes every label through unchanged.
    #[must_use]
    pub const fn pass_through() -> Self {
        Self { max_chars: None }
    }

    /// Derives the character budget from container geometry.
    ///
    /// With zero categories there is nothing to lay out and the budget is a
    /// pass-through. Degenerate geometry (zero or non-finite dimensions or
    /// font size) falls back to the rotation's minimum budget instead of
    /// failing.
    #[must_use]
    pub fn resolve(inputs: LabelLayoutInputs) -> Self {
        if inputs.category_count == 0 {
            return Self::pass_through();
        }

        let max_chars = match inputs.rotation {
            LabelRotation::Vertical => {
                let available_height = inputs.container.height_px
                    * (1.0 - VERTICAL_LABEL_BAND_RATIO)
                    * VERTICAL_LABEL_HEIGHT_SHARE;
                let px_per_char = inputs.font_size_px * VERTICAL_PX_PER_CHAR_FACTOR;
                clamp_char_budget(
                    available_height / px_per_char,
                    VERTICAL_MIN_CHARS,
                    VERTICAL_MAX_CHARS,
                )
            }
            LabelRotation::Horizontal => {
                let usable_percent = 100.0 - 2.0 * inputs.chart_padding_percent;
                let usable_width = inputs.container.width_px * usable_percent / 100.0;
                let per_category = usable_width / inputs.category_count as f64;
                let px_per_char = inputs.font_size_px * HORIZONTAL_PX_PER_CHAR_FACTOR;
                clamp_char_budget(
                    per_category * HORIZONTAL_BUDGET_SLACK / px_per_char,
                    HORIZONTAL_MIN_CHARS,
                    HORIZONTAL_MAX_CHARS,
                )
            }
        };

        Self {
            max_chars: Some(max_chars),
        }
    }

    /// Returns the character budget, or `None` for a pass-through budget.
    #[must_use]
    pub fn max_chars(self) -> Option<usize> {
        self.max_chars
    }

    /// Clips a label to the budget for axis display.
    ///
    /// Empty labels map to the empty string; labels within budget pass
    /// through unchanged; longer labels keep their first `max_chars - 1`
    /// characters followed by a single ellipsis. Counting is per character,
    /// so multibyte labels clip cleanly, and output within budget makes the
    /// operation idempotent.
    #[must_use]
    pub fn clip(self, label: &str) -> String {
        let Some(max_chars) = self.max_chars else {
            return label.to_owned();
        };

        if label.is_empty() {
            return String::new();
        }

        if label.chars().count() <= max_chars {
            return label.to_owned();
        }

        let mut clipped: String = label.chars().take(max_chars.saturating_sub(1)).collect();
        clipped.push(ELLIPSIS);
        clipped
    }
}

fn clamp_char_budget(raw: f64, min_chars: usize, max_chars: usize) -> usize {
    if !raw.is_finite() || raw <= 0.0 {
        return min_chars;
    }
    (raw.floor() as usize).clamp(min_chars, max_chars)
}

/// One-slot memo over the full label-layout input set.
///
/// Budget resolution is cheap and pure, so a single cached slot is all the
/// caching the refresh path needs: resize and restyle both overwrite it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelLayoutPlanner {
    last: Option<(LabelLayoutInputs, LabelBudget)>,
}

impl LabelLayoutPlanner {
    pub fn resolve(&mut self, inputs: LabelLayoutInputs) -> LabelBudget {
        if let Some((cached_inputs, budget)) = self.last {
            if cached_inputs == inputs {
                return budget;
            }
        }

        let budget = LabelBudget::resolve(inputs);
        self.last = Some((inputs, budget));
        budget
    }
}
