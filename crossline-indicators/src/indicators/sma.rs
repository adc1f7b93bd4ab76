//! Simple Moving Average (SMA).

use ndarray::Array1;

use crate::core::{Indicator, IndicatorResult, MovingAverage};
use crate::series::{normalize, CanonicalSeries, SeriesInput};
use crate::validate::{validate_series, validate_window};

/// Trailing arithmetic mean over a right-aligned sliding window.
///
/// The window's left edge clips at the series start, so the first `w - 1`
/// outputs are means of partial windows of increasing size rather than NaN
/// or zero-padded values. The output always has the same length as the
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct Sma {
    window: usize,
    output: Array1<f64>,
}

impl Sma {
    /// Normalizes, validates, and computes the average in one step.
    pub fn new(data: impl Into<SeriesInput>, window: usize) -> IndicatorResult<Self> {
        let series = normalize("data", data.into())?;
        Self::over_series("data", &series, window)
    }

    /// Computes the average over an already validated canonical series.
    ///
    /// Used by composites that share one normalized series between several
    /// components; the window is still validated against this series.
    pub(crate) fn over_series(
        name: &str,
        series: &CanonicalSeries,
        window: usize,
    ) -> IndicatorResult<Self> {
        validate_series(name, series)?;
        validate_window(series, window)?;
        Ok(Self {
            window,
            output: Self::calculate(series.values(), window),
        })
    }

    /// Rolling-sum evaluation of the trailing mean.
    fn calculate(values: &Array1<f64>, window: usize) -> Array1<f64> {
        let mut output = Array1::zeros(values.len());
        let mut sum = 0.0;
        for (index, &value) in values.iter().enumerate() {
            sum += value;
            if index >= window {
                sum -= values[index - window];
            }
            let count = (index + 1).min(window);
            output[index] = sum / count as f64;
        }
        output
    }
}

impl Indicator for Sma {
    fn output(&self) -> &Array1<f64> {
        &self.output
    }
}

impl MovingAverage for Sma {
    fn window(&self) -> Option<usize> {
        Some(self.window)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::Sma;
    use crate::core::{Indicator, IndicatorError, MovingAverage};

    fn assert_close(lhs: &[f64], rhs: &[f64]) {
        assert_eq!(lhs.len(), rhs.len());
        for (index, (a, b)) in lhs.iter().zip(rhs).enumerate() {
            assert!((a - b).abs() <= 1e-12, "index {index}: {a} != {b}");
        }
    }

    #[test]
    fn output_matches_input_length() {
        let sma = Sma::new(vec![1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(sma.to_vec().len(), 5);
    }

    #[test]
    fn leading_outputs_are_partial_means() {
        let sma = Sma::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 4).unwrap();
        assert_close(&sma.to_vec(), &[1.0, 1.5, 2.0, 2.5, 3.5, 4.5]);
    }

    #[test]
    fn window_of_one_reproduces_the_input() {
        let input = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        let sma = Sma::new(input.clone(), 1).unwrap();
        assert_close(&sma.to_vec(), &input);
    }

    #[test]
    fn reconstruction_is_bit_identical() {
        let input = vec![1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0];
        let first = Sma::new(input.clone(), 3).unwrap();
        let second = Sma::new(input, 3).unwrap();
        assert_eq!(first.to_array(), second.to_array());
    }

    #[test]
    fn exposes_its_window() {
        let sma = Sma::new(vec![1.0, 2.0, 3.0], 2).unwrap();
        assert_eq!(sma.window(), Some(2));
    }

    #[test]
    fn labeled_view_carries_default_integer_labels() {
        let sma = Sma::new(vec![1.0, 2.0, 3.0], 2).unwrap();
        let labeled = sma.to_labeled();
        assert_eq!(labeled.labels(), &[0, 1, 2]);
        assert_eq!(labeled.len(), 3);
    }

    #[test]
    fn oversized_window_fails_at_construction() {
        let err = Sma::new(vec![1.0, 2.0], 3).unwrap_err();
        assert_eq!(err, IndicatorError::WindowTooLarge { window: 3, len: 2 });
    }

    #[test]
    fn zero_window_fails_at_construction() {
        let err = Sma::new(vec![1.0, 2.0], 0).unwrap_err();
        assert_eq!(err, IndicatorError::NonPositiveWindow { window: 0 });
    }

    #[test]
    fn nan_input_fails_at_construction() {
        let err = Sma::new(vec![1.0, f64::NAN], 2).unwrap_err();
        assert!(matches!(err, IndicatorError::NonFiniteValue { index: 1, .. }));
    }

    #[test]
    fn array_input_is_accepted() {
        let sma = Sma::new(array![2.0, 4.0, 6.0], 2).unwrap();
        assert_close(&sma.to_vec(), &[2.0, 3.0, 5.0]);
    }
}
