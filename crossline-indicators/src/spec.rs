//! Component specifications for data-driven indicator composition.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{IndicatorError, IndicatorResult};

/// The tagged set of indicator variants known to the crate.
///
/// The crossover composer dispatches on this set instead of relying on
/// runtime type checks; only the moving-average family is accepted as a
/// crossover component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Trailing simple moving average.
    SimpleMovingAverage,
    /// Signed crossing signal over two moving averages.
    MovingAverageCrossover,
    /// Fixed 50/200 simple-moving-average crossover preset.
    Sma50CrossSma200,
}

impl IndicatorKind {
    /// Whether this kind belongs to the moving-average family and may serve
    /// as a crossover component.
    pub fn is_moving_average(self) -> bool {
        matches!(self, IndicatorKind::SimpleMovingAverage)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndicatorKind::SimpleMovingAverage => "simple_moving_average",
            IndicatorKind::MovingAverageCrossover => "moving_average_crossover",
            IndicatorKind::Sma50CrossSma200 => "sma50_cross_sma200",
        };
        f.write_str(name)
    }
}

/// Names an indicator variant plus its constructor parameters, excluding the
/// shared input series.
///
/// Consumed by the crossover composer at construction time; the parameter
/// map is a plain JSON object so compositions can arrive from configuration
/// as well as code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// The indicator variant to instantiate.
    pub kind: IndicatorKind,
    /// Constructor parameters for the variant.
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ComponentSpec {
    /// Creates a spec with an empty parameter map.
    pub fn new(kind: IndicatorKind) -> Self {
        Self {
            kind,
            params: Map::new(),
        }
    }

    /// Creates a spec carrying a `window` parameter.
    pub fn with_window(kind: IndicatorKind, window: usize) -> Self {
        let mut params = Map::new();
        params.insert("window".into(), Value::from(window));
        Self { kind, params }
    }

    /// Extracts the `window` parameter as a positive integer.
    ///
    /// Fails with [`IndicatorError::InvalidWindowType`] for missing or
    /// non-integer values and [`IndicatorError::NonPositiveWindow`] for
    /// zero or negative ones.
    pub fn window(&self) -> IndicatorResult<usize> {
        let value = self
            .params
            .get("window")
            .ok_or_else(|| IndicatorError::invalid_window_type("window", "missing"))?;
        let window = match value {
            Value::Number(number) => number
                .as_i64()
                .ok_or_else(|| IndicatorError::invalid_window_type("window", number))?,
            other => return Err(IndicatorError::invalid_window_type("window", other)),
        };
        if window <= 0 {
            return Err(IndicatorError::NonPositiveWindow { window });
        }
        Ok(window as usize)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ComponentSpec, IndicatorKind};
    use crate::core::IndicatorError;

    fn spec_with(value: serde_json::Value) -> ComponentSpec {
        let mut spec = ComponentSpec::new(IndicatorKind::SimpleMovingAverage);
        spec.params.insert("window".into(), value);
        spec
    }

    #[test]
    fn integer_window_is_extracted() {
        assert_eq!(spec_with(json!(50)).window().unwrap(), 50);
    }

    #[test]
    fn fractional_window_is_a_type_error() {
        let err = spec_with(json!(2.5)).window().unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidWindowType { .. }));
    }

    #[test]
    fn textual_window_is_a_type_error() {
        let err = spec_with(json!("3")).window().unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidWindowType { .. }));
    }

    #[test]
    fn negative_window_is_rejected() {
        let err = spec_with(json!(-5)).window().unwrap_err();
        assert_eq!(err, IndicatorError::NonPositiveWindow { window: -5 });
    }

    #[test]
    fn specs_round_trip_through_json() {
        let spec = ComponentSpec::with_window(IndicatorKind::SimpleMovingAverage, 50);
        let text = serde_json::to_string(&spec).unwrap();
        let back: ComponentSpec = serde_json::from_str(&text).unwrap();
        assert_eq!(back, spec);
    }
}
