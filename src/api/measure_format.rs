use serde::{Deserialize, Serialize};

/// Locale preset used by measure-value formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum NumberLocale {
    #[default]
    EnUs,
    EsEs,
}

impl NumberLocale {
    fn decimal_separator(self) -> char {
        match self {
            Self::EnUs => '.',
            Self::EsEs => ',',
        }
    }

    fn group_separator(self) -> char {
        match self {
            Self::EnUs => ',',
            Self::EsEs => '.',
        }
    }
}

const GENERAL_PRECISION: usize = 2;

/// Parsed numeric display pattern for measure values.
///
/// Hosts attach display-format strings to numeric columns; the supported
/// subset is a zero-run precision pattern with optional `#,##` grouping
/// (`#,##0.00`, `0.0`, `#,##0`). Anything else falls back to the general
/// locale-aware rendering, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MeasureValueFormat {
    /// Fixed decimal places with optional thousands grouping.
    Pattern { precision: u8, grouping: bool },
    /// Generic locale-aware rendering used when no pattern (or an
    /// unsupported one) is supplied.
    #[default]
    General,
}

impl MeasureValueFormat {
    /// Interprets an optional host display-format string.
    #[must_use]
    pub fn parse(pattern: Option<&str>) -> Self {
        pattern
            .and_then(parse_pattern)
            .unwrap_or(Self::General)
    }

    /// Formats one measure value for tooltip/axis display.
    #[must_use]
    pub fn format(self, value: f64, locale: NumberLocale) -> String {
        if !value.is_finite() {
            return "nan".to_owned();
        }

        match self {
            Self::Pattern {
                precision,
                grouping,
            } => format_decimal(value, usize::from(precision), grouping, locale),
            Self::General => format_decimal(value, GENERAL_PRECISION, false, locale),
        }
    }
}

fn parse_pattern(pattern: &str) -> Option<MeasureValueFormat> {
    let text = pattern.trim();
    if text.is_empty() {
        return None;
    }

    let (grouping, rest) = match text.strip_prefix("#,##") {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (integer_part, fraction_part) = match rest.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, Some(fraction_part)),
        None => (rest, None),
    };

    if integer_part.is_empty() || !integer_part.chars().all(|c| c == '0') {
        return None;
    }

    let precision = match fraction_part {
        Some(fraction) => {
            if fraction.is_empty() || !fraction.chars().all(|c| c == '0') {
                return None;
            }
            u8::try_from(fraction.len()).ok()?
        }
        None => 0,
    };

    Some(MeasureValueFormat::Pattern {
        precision,
        grouping,
    })
}

fn format_decimal(value: f64, precision: usize, grouping: bool, locale: NumberLocale) -> String {
    let text = format!("{:.*}", precision, value.abs());
    let (integer_part, fraction_part) = match text.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, Some(fraction_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + 4);
    if value.is_sign_negative() && text.chars().any(|c| c != '0' && c != '.') {
        out.push('-');
    }

    if grouping {
        push_grouped(&mut out, integer_part, locale.group_separator());
    } else {
        out.push_str(integer_part);
    }

    if let Some(fraction) = fraction_part {
        out.push(locale.decimal_separator());
        out.push_str(fraction);
    }

    out
}

fn push_grouped(out: &mut String, digits: &str, separator: char) {
    let len = digits.len();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
}
