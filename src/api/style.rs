use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::LabelRotation;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Which screen axis carries categories versus measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Orientation {
    /// Categories along X, measures along Y.
    #[default]
    Vertical,
    /// Categories along Y, measures along X.
    Horizontal,
}

/// Screen axis identifier used by axis-role assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScreenAxis {
    X,
    Y,
}

/// Axis-role record derived from the chart orientation.
///
/// A single enum branch produces the whole assignment so orientation
/// handling is never duplicated downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisAssignment {
    pub category_axis: ScreenAxis,
    pub measure_axis: ScreenAxis,
}

impl AxisAssignment {
    #[must_use]
    pub fn for_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => Self {
                category_axis: ScreenAxis::X,
                measure_axis: ScreenAxis::Y,
            },
            Orientation::Horizontal => Self {
                category_axis: ScreenAxis::Y,
                measure_axis: ScreenAxis::X,
            },
        }
    }
}

/// Text styling for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTextStyle {
    pub font_size_px: f64,
    pub color: Color,
    pub bold: bool,
}

impl Default for AxisTextStyle {
    fn default() -> Self {
        Self {
            font_size_px: 12.0,
            color: Color::rgb(0.10, 0.12, 0.16),
            bold: false,
        }
    }
}

/// Style contract consumed by the render delegate.
///
/// Parsed once from the host's loosely-typed option map; individual entries
/// that are missing or wrong-typed degrade to their field default rather
/// than failing the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub orientation: Orientation,
    pub label_rotation: LabelRotation,
    pub box_fill_color: Color,
    pub box_outline_color: Color,
    pub box_outline_width_px: f64,
    pub chart_padding_percent: f64,
    pub show_banding: bool,
    pub banding_color: Color,
    pub show_grid_lines: bool,
    pub grid_line_color: Color,
    pub category_axis_text: AxisTextStyle,
    pub measure_axis_text: AxisTextStyle,
    pub background_color: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            label_rotation: LabelRotation::Horizontal,
            box_fill_color: Color::rgb(0.16, 0.38, 1.0),
            box_outline_color: Color::rgb(0.10, 0.12, 0.16),
            box_outline_width_px: 1.0,
            chart_padding_percent: 5.0,
            show_banding: false,
            banding_color: Color::rgb(0.94, 0.96, 0.99),
            show_grid_lines: true,
            grid_line_color: Color::rgb(0.89, 0.92, 0.95),
            category_axis_text: AxisTextStyle::default(),
            measure_axis_text: AxisTextStyle::default(),
            background_color: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

impl ChartStyle {
    /// Builds a style from the host's named-option map.
    ///
    /// Unknown keys are ignored (logged at debug), and every recognized key
    /// falls back to the field default when its value cannot be interpreted.
    #[must_use]
    pub fn from_options(options: &Map<String, Value>) -> Self {
        let mut style = Self::default();
        for (key, value) in options {
            match key.as_str() {
                "orientation" => apply(&mut style.orientation, parse_orientation(value)),
                "label_rotation" => apply(&mut style.label_rotation, parse_rotation(value)),
                "box_fill_color" => apply(&mut style.box_fill_color, parse_color(value)),
                "box_outline_color" => apply(&mut style.box_outline_color, parse_color(value)),
                "box_outline_width" => {
                    apply(&mut style.box_outline_width_px, parse_positive_f64(value));
                }
                "chart_padding_percent" => {
                    apply(&mut style.chart_padding_percent, parse_percent(value));
                }
                "banding" => apply(&mut style.show_banding, parse_bool(value)),
                "banding_color" => apply(&mut style.banding_color, parse_color(value)),
                "grid_lines" => apply(&mut style.show_grid_lines, parse_bool(value)),
                "grid_line_color" => apply(&mut style.grid_line_color, parse_color(value)),
                "category_font_size" => {
                    apply(
                        &mut style.category_axis_text.font_size_px,
                        parse_positive_f64(value),
                    );
                }
                "category_font_color" => {
                    apply(&mut style.category_axis_text.color, parse_color(value));
                }
                "category_font_bold" => {
                    apply(&mut style.category_axis_text.bold, parse_bool(value));
                }
                "measure_font_size" => {
                    apply(
                        &mut style.measure_axis_text.font_size_px,
                        parse_positive_f64(value),
                    );
                }
                "measure_font_color" => {
                    apply(&mut style.measure_axis_text.color, parse_color(value));
                }
                "measure_font_bold" => {
                    apply(&mut style.measure_axis_text.bold, parse_bool(value));
                }
                "background_color" => apply(&mut style.background_color, parse_color(value)),
                _ => debug!(key = %key, "ignoring unknown style option"),
            }
        }
        style
    }

    pub fn validate(self) -> ChartResult<()> {
        self.box_fill_color.validate()?;
        self.box_outline_color.validate()?;
        self.banding_color.validate()?;
        self.grid_line_color.validate()?;
        self.category_axis_text.color.validate()?;
        self.measure_axis_text.color.validate()?;
        self.background_color.validate()?;

        for (field, value) in [
            ("box outline width", self.box_outline_width_px),
            ("chart padding percent", self.chart_padding_percent),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{field} must be finite and >= 0"
                )));
            }
        }

        for (axis, text) in [
            ("category", self.category_axis_text),
            ("measure", self.measure_axis_text),
        ] {
            if !text.font_size_px.is_finite() || text.font_size_px <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{axis} axis font size must be finite and > 0"
                )));
            }
        }

        Ok(())
    }
}

fn apply<T>(slot: &mut T, parsed: Option<T>) {
    if let Some(value) = parsed {
        *slot = value;
    }
}

fn parse_orientation(value: &Value) -> Option<Orientation> {
    match value.as_str()?.trim().to_ascii_lowercase().as_str() {
        "vertical" => Some(Orientation::Vertical),
        "horizontal" => Some(Orientation::Horizontal),
        _ => None,
    }
}

fn parse_rotation(value: &Value) -> Option<LabelRotation> {
    let degrees = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if degrees == 0.0 {
        Some(LabelRotation::Horizontal)
    } else if degrees == 90.0 {
        Some(LabelRotation::Vertical)
    } else {
        None
    }
}

fn parse_color(value: &Value) -> Option<Color> {
    Color::from_hex(value.as_str()?)
}

fn parse_bool(value: &Value) -> Option<bool> {
    value.as_bool()
}

fn parse_positive_f64(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite() && *v > 0.0)
}

fn parse_percent(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite() && (0.0..=50.0).contains(v))
}
