//! Numeric guards applied at every aggregation boundary.
//!
//! Upstream collaborators may hand the engine `NaN`, infinities or values
//! outside their documented range. These helpers never panic, even when the
//! bounds are inverted, and never let a non-finite value through.

/// Clamp `value` into `min..=max`, mapping non-finite input to `min`.
///
/// # Examples
/// ```
/// use locus_core::sanitise::bounded;
///
/// assert_eq!(bounded(7.5, 0.0, 5.0), 5.0);
/// assert_eq!(bounded(f64::NAN, 0.1, 5.0), 0.1);
/// ```
#[must_use]
pub const fn bounded(value: f64, min: f64, max: f64) -> f64 {
    if !value.is_finite() {
        return min;
    }
    value.max(min).min(max)
}

/// Clamp `value` into `min..=max`, mapping non-finite input to `fallback`.
///
/// # Examples
/// ```
/// use locus_core::sanitise::bounded_or;
///
/// assert_eq!(bounded_or(f64::INFINITY, 0.0, 100.0, 50.0), 50.0);
/// assert_eq!(bounded_or(120.0, 0.0, 100.0, 50.0), 100.0);
/// ```
#[must_use]
pub const fn bounded_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.max(min).min(max)
    } else {
        fallback
    }
}

/// Return `value` when finite and non-negative, otherwise `0.0`.
#[must_use]
pub const fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// `numerator / denominator` capped at `cap`, or `0.0` for a non-positive
/// denominator.
#[expect(clippy::float_arithmetic, reason = "ratio of accumulated scores")]
#[must_use]
pub const fn capped_ratio(numerator: f64, denominator: f64, cap: f64) -> f64 {
    if !(denominator.is_finite() && denominator > 0.0) {
        return 0.0;
    }
    bounded(numerator / denominator, 0.0, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(-3.0, 0.0)]
    #[case(2.5, 2.5)]
    fn non_negative_filters(#[case] input: f64, #[case] expected: f64) {
        assert_eq!(non_negative(input), expected);
    }

    #[rstest]
    fn bounded_survives_inverted_range() {
        let value = bounded(3.0, 5.0, 1.0);
        assert!(value.is_finite());
    }

    #[rstest]
    #[case(3.0, 6.0, 1.0, 0.5)]
    #[case(9.0, 6.0, 1.0, 1.0)]
    #[case(1.0, 0.0, 1.0, 0.0)]
    #[case(1.0, f64::NAN, 1.0, 0.0)]
    fn capped_ratio_guards_denominator(
        #[case] numerator: f64,
        #[case] denominator: f64,
        #[case] cap: f64,
        #[case] expected: f64,
    ) {
        assert_eq!(capped_ratio(numerator, denominator, cap), expected);
    }
}
