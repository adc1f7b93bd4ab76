//! Moving-average crossover signal.

use ndarray::Array1;

use crate::core::{Indicator, IndicatorError, IndicatorResult, MovingAverage};
use crate::indicators::sma::Sma;
use crate::series::{normalize, CanonicalSeries, SeriesInput};
use crate::spec::{ComponentSpec, IndicatorKind};
use crate::validate::validate_series;

/// Signal value marking an upward cross of the first component over the second.
pub const CROSS_UP: f64 = 1.0;
/// Signal value marking a downward cross of the first component under the second.
pub const CROSS_DOWN: f64 = 2.0;

/// Signed crossing signal derived from two moving averages.
///
/// Both components are instantiated against the same input series from
/// explicit [`ComponentSpec`]s, so the averages compared by the signal are
/// chosen and parameterized entirely by the caller. The output takes values
/// in `{0, 1, 2}`: 0 for no event, 1 when the first component crosses above
/// the second, 2 when it crosses below. Positions inside the longer
/// component's warm-up region are forced to 0, since averages there are
/// artifacts of partial windows.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverageCrossover {
    output: Array1<f64>,
}

impl MovingAverageCrossover {
    /// Builds the signal from a shared input series and two component specs.
    pub fn new(
        data: impl Into<SeriesInput>,
        first: ComponentSpec,
        second: ComponentSpec,
    ) -> IndicatorResult<Self> {
        let series = normalize("data", data.into())?;
        validate_series("data", &series)?;
        Self::over_series(&series, first, second)
    }

    /// Builds the signal over an already validated canonical series.
    pub(crate) fn over_series(
        series: &CanonicalSeries,
        first: ComponentSpec,
        second: ComponentSpec,
    ) -> IndicatorResult<Self> {
        let first = Self::component("first", &first, series)?;
        let second = Self::component("second", &second, series)?;

        let warmup = first.window().unwrap_or(0).max(second.window().unwrap_or(0));
        let output = cross_signal(first.output(), second.output(), warmup);
        Ok(Self { output })
    }

    /// Resolves a component spec against the shared series.
    ///
    /// Only moving-average kinds are accepted; each component re-validates
    /// the shared series together with its own window.
    fn component(
        role: &str,
        spec: &ComponentSpec,
        series: &CanonicalSeries,
    ) -> IndicatorResult<Box<dyn MovingAverage>> {
        match spec.kind {
            IndicatorKind::SimpleMovingAverage => {
                let window = spec.window()?;
                Ok(Box::new(Sma::over_series(role, series, window)?))
            }
            kind => Err(IndicatorError::invalid_component(role, kind)),
        }
    }
}

impl Indicator for MovingAverageCrossover {
    fn output(&self) -> &Array1<f64> {
        &self.output
    }
}

/// Single-step cross detection with warm-up suppression.
///
/// Strict inequality on both sides of the step: a sequence that touches
/// equality without crossing produces no event.
fn cross_signal(first: &Array1<f64>, second: &Array1<f64>, warmup: usize) -> Array1<f64> {
    let len = first.len();
    let mut signal = Array1::zeros(len);
    for index in warmup.max(1)..len {
        let (a_prev, a) = (first[index - 1], first[index]);
        let (b_prev, b) = (second[index - 1], second[index]);
        if a_prev < b_prev && a > b {
            signal[index] = CROSS_UP;
        } else if a_prev > b_prev && a < b {
            signal[index] = CROSS_DOWN;
        }
    }
    signal
}
