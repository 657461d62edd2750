/// Tolerance for mantissa drift introduced by the base-10 division
/// (`0.2 / 0.1` lands a few ULP above 2).
const MANTISSA_EPSILON: f64 = 1e-9;

/// Rounds a value away from zero to the nearest `d * 10^k` with
/// `d` in `{1, 2, 5, 10}`.
///
/// The step digit is the smallest of the four that is >= the normalized
/// mantissa, so exact powers and exact 2/5 multiples map to themselves.
/// Applied to an axis maximum this rounds up; applied to a negative axis
/// minimum it rounds down. Zero and non-finite input return the input
/// unchanged.
#[must_use]
pub fn round_to_nice(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let exponent = value.abs().log10().floor();
    if !exponent.is_finite() {
        return value;
    }
    let magnitude = 10.0_f64.powi(exponent as i32);
    if !magnitude.is_finite() || magnitude <= 0.0 {
        return value;
    }

    let mantissa = value.abs() / magnitude;
    let step = if mantissa <= 1.0 + MANTISSA_EPSILON {
        1.0
    } else if mantissa <= 2.0 + MANTISSA_EPSILON {
        2.0
    } else if mantissa <= 5.0 + MANTISSA_EPSILON {
        5.0
    } else {
        10.0
    };

    (step * magnitude).copysign(value)
}

#[cfg(test)]
mod tests {
    use super::round_to_nice;

    #[test]
    fn exact_step_multiples_map_to_themselves() {
        assert_eq!(round_to_nice(1.0), 1.0);
        assert_eq!(round_to_nice(2.0), 2.0);
        assert_eq!(round_to_nice(5.0), 5.0);
        assert_eq!(round_to_nice(50.0), 50.0);
    }

    #[test]
    fn rounds_between_steps_away_from_zero() {
        assert_eq!(round_to_nice(108.0), 200.0);
        assert_eq!(round_to_nice(-108.0), -200.0);
        assert_eq!(round_to_nice(3.0), 5.0);
        assert_eq!(round_to_nice(6.0), 10.0);
    }
}
