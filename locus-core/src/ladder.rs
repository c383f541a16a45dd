//! Threshold ladders.
//!
//! Many scoring stages map a count or score onto a value through a series
//! of "at least N" steps: density tiers, signal bonuses, viability bands.
//! A [`Ladder`] stores those steps as data so variants can be configured
//! instead of coded.

use serde::{Deserialize, Serialize};

/// One "at least `min`" step of a [`Ladder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<V> {
    /// Inclusive lower bound.
    pub min: f64,
    /// Value returned when the step is the first satisfied one.
    pub value: V,
}

/// Ordered "at least N" lookup table with a fallback value.
///
/// Steps are consulted in declaration order, so declare them from the
/// highest threshold to the lowest.
///
/// # Examples
/// ```
/// use locus_core::Ladder;
///
/// let tech_bonus = Ladder::new([(3.0, 0.25), (1.0, 0.10)], 0.0);
/// assert_eq!(tech_bonus.lookup(4.0), 0.25);
/// assert_eq!(tech_bonus.lookup(1.0), 0.10);
/// assert_eq!(tech_bonus.lookup(0.0), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ladder<V> {
    /// Steps in priority order.
    pub steps: Vec<Step<V>>,
    /// Value when no step is satisfied, including for `NaN` input.
    pub fallback: V,
}

impl<V> Ladder<V> {
    /// Build a ladder from `(min, value)` pairs.
    #[must_use]
    pub fn new<I>(steps: I, fallback: V) -> Self
    where
        I: IntoIterator<Item = (f64, V)>,
    {
        Self {
            steps: steps
                .into_iter()
                .map(|(min, value)| Step { min, value })
                .collect(),
            fallback,
        }
    }

    /// Borrow the value of the first step whose minimum is `<= input`.
    #[must_use]
    pub fn lookup_ref(&self, input: f64) -> &V {
        self.steps
            .iter()
            .find(|step| input >= step.min)
            .map_or(&self.fallback, |step| &step.value)
    }
}

impl<V: Clone> Ladder<V> {
    /// Value of the first step whose minimum is `<= input`.
    #[must_use]
    pub fn lookup(&self, input: f64) -> V {
        self.lookup_ref(input).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn density() -> Ladder<(f64, f64)> {
        Ladder::new(
            [
                (50.0, (1.8, 2.0)),
                (25.0, (1.6, 1.5)),
                (3.0, (1.0, 0.3)),
            ],
            (0.8, 0.0),
        )
    }

    #[rstest]
    #[case(60.0, (1.8, 2.0))]
    #[case(50.0, (1.8, 2.0))]
    #[case(49.0, (1.6, 1.5))]
    #[case(3.0, (1.0, 0.3))]
    #[case(2.0, (0.8, 0.0))]
    #[case(f64::NAN, (0.8, 0.0))]
    fn first_satisfied_step_wins(#[case] input: f64, #[case] expected: (f64, f64)) {
        assert_eq!(density().lookup(input), expected);
    }

    #[rstest]
    fn empty_ladder_uses_fallback() {
        let ladder: Ladder<u8> = Ladder::new([], 7);
        assert_eq!(ladder.lookup(100.0), 7);
    }
}
