//! Named crossover presets with fixed, well-known parameters.

use ndarray::Array1;

use crate::core::{Indicator, IndicatorResult};
use crate::indicators::crossover::MovingAverageCrossover;
use crate::series::SeriesInput;
use crate::spec::{ComponentSpec, IndicatorKind};

/// The classic 50/200 simple-moving-average crossover.
///
/// Zero-parameter wrapper around [`MovingAverageCrossover`]: the first
/// component is a 50-period SMA, the second a 200-period SMA. The input must
/// therefore hold at least 200 samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Sma50CrossSma200 {
    inner: MovingAverageCrossover,
}

impl Sma50CrossSma200 {
    /// Builds the preset signal over the given input series.
    pub fn new(data: impl Into<SeriesInput>) -> IndicatorResult<Self> {
        let inner = MovingAverageCrossover::new(
            data,
            ComponentSpec::with_window(IndicatorKind::SimpleMovingAverage, 50),
            ComponentSpec::with_window(IndicatorKind::SimpleMovingAverage, 200),
        )?;
        Ok(Self { inner })
    }
}

impl Indicator for Sma50CrossSma200 {
    fn output(&self) -> &Array1<f64> {
        self.inner.output()
    }
}

#[cfg(test)]
mod tests {
    use super::Sma50CrossSma200;
    use crate::core::{Indicator, IndicatorError};

    #[test]
    fn requires_at_least_two_hundred_samples() {
        let err = Sma50CrossSma200::new(vec![1.0; 100]).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::WindowTooLarge {
                window: 200,
                len: 100
            }
        );
    }

    #[test]
    fn warmup_region_covers_the_longer_window() {
        // A sawtooth long enough for both components.
        let data: Vec<f64> = (0..400)
            .map(|index| if index % 2 == 0 { 1.0 } else { 2.0 })
            .collect();
        let preset = Sma50CrossSma200::new(data).unwrap();
        let signal = preset.to_vec();
        assert_eq!(signal.len(), 400);
        assert!(signal[..200].iter().all(|&value| value == 0.0));
    }
}
