//! Input shapes, the canonical numeric series, and normalization.

use std::fmt;

use chrono::Duration;
use ndarray::Array1;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::core::{IndicatorError, IndicatorResult};

/// Element type carried by a canonical series.
///
/// Only `Float` and `Int` are numeric; time-deltas are numeric-like but
/// semantically excluded from indicator arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dtype {
    /// 64-bit floating point samples.
    Float,
    /// Integer samples (promoted to float for calculation).
    Int,
    /// Time-delta samples.
    Duration,
    /// Textual samples.
    Text,
}

impl Dtype {
    /// Whether values of this type may participate in indicator arithmetic.
    pub fn is_numeric(self) -> bool {
        matches!(self, Dtype::Float | Dtype::Int)
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dtype::Float => "float",
            Dtype::Int => "int",
            Dtype::Duration => "duration",
            Dtype::Text => "text",
        };
        f.write_str(name)
    }
}

/// A single sample in a native sequence or labeled series.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleValue {
    /// A floating-point sample.
    Float(f64),
    /// An integer sample.
    Int(i64),
    /// A time-delta sample.
    Duration(Duration),
    /// A textual sample.
    Text(String),
}

impl SampleValue {
    fn dtype(&self) -> Dtype {
        match self {
            SampleValue::Float(_) => Dtype::Float,
            SampleValue::Int(_) => Dtype::Int,
            SampleValue::Duration(_) => Dtype::Duration,
            SampleValue::Text(_) => Dtype::Text,
        }
    }

    /// Numeric rendering used to build the canonical array. Non-numeric
    /// samples map to placeholders; the validator rejects their dtype before
    /// any placeholder can be observed.
    fn as_f64(&self) -> f64 {
        match self {
            SampleValue::Float(value) => *value,
            SampleValue::Int(value) => *value as f64,
            SampleValue::Duration(value) => value.num_milliseconds() as f64,
            SampleValue::Text(_) => f64::NAN,
        }
    }
}

impl From<f64> for SampleValue {
    fn from(value: f64) -> Self {
        SampleValue::Float(value)
    }
}

impl From<i64> for SampleValue {
    fn from(value: i64) -> Self {
        SampleValue::Int(value)
    }
}

/// A one-dimensional series with integer labels.
///
/// Output views produce labeled series with default labels `0..n`; inputs may
/// carry caller-supplied labels, which normalization ignores (order is
/// positional).
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSeries {
    labels: Vec<i64>,
    values: Vec<SampleValue>,
}

impl LabeledSeries {
    /// Creates a labeled series with default integer labels `0..n`.
    pub fn from_values(values: Vec<SampleValue>) -> Self {
        let labels = (0..values.len() as i64).collect();
        Self { labels, values }
    }

    /// Creates a float-valued labeled series with default integer labels.
    pub fn from_f64(values: impl IntoIterator<Item = f64>) -> Self {
        Self::from_values(values.into_iter().map(SampleValue::Float).collect())
    }

    /// Creates a labeled series with caller-supplied labels.
    ///
    /// Fails with [`IndicatorError::UnsupportedInput`] if labels and values
    /// disagree in length.
    pub fn new(labels: Vec<i64>, values: Vec<SampleValue>) -> IndicatorResult<Self> {
        if labels.len() != values.len() {
            return Err(IndicatorError::unsupported_input(
                "labeled series",
                format!("{} labels for {} values", labels.len(), values.len()),
            ));
        }
        Ok(Self { labels, values })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrows the labels.
    pub fn labels(&self) -> &[i64] {
        &self.labels
    }

    /// Borrows the samples.
    pub fn values(&self) -> &[SampleValue] {
        &self.values
    }
}

/// The set of input shapes an indicator accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesInput {
    /// A native ordered sequence of samples.
    Sequence(Vec<SampleValue>),
    /// A numeric array.
    Array(Array1<f64>),
    /// A labeled one-dimensional series.
    Labeled(LabeledSeries),
}

impl SeriesInput {
    /// Ingests any primitive numeric slice.
    ///
    /// Fails with [`IndicatorError::UnsupportedInput`] if an element cannot
    /// be represented as `f64`.
    pub fn from_numeric<T: ToPrimitive>(values: &[T]) -> IndicatorResult<Self> {
        let mut samples = Vec::with_capacity(values.len());
        for (index, value) in values.iter().enumerate() {
            let value = value.to_f64().ok_or_else(|| {
                IndicatorError::unsupported_input(
                    "numeric sequence",
                    format!("element at index {index} is not representable as f64"),
                )
            })?;
            samples.push(SampleValue::Float(value));
        }
        Ok(SeriesInput::Sequence(samples))
    }
}

impl From<Vec<f64>> for SeriesInput {
    fn from(values: Vec<f64>) -> Self {
        SeriesInput::Sequence(values.into_iter().map(SampleValue::Float).collect())
    }
}

impl From<&[f64]> for SeriesInput {
    fn from(values: &[f64]) -> Self {
        SeriesInput::Sequence(values.iter().copied().map(SampleValue::Float).collect())
    }
}

impl From<Vec<i64>> for SeriesInput {
    fn from(values: Vec<i64>) -> Self {
        SeriesInput::Sequence(values.into_iter().map(SampleValue::Int).collect())
    }
}

impl From<Vec<SampleValue>> for SeriesInput {
    fn from(values: Vec<SampleValue>) -> Self {
        SeriesInput::Sequence(values)
    }
}

impl From<Array1<f64>> for SeriesInput {
    fn from(values: Array1<f64>) -> Self {
        SeriesInput::Array(values)
    }
}

impl From<LabeledSeries> for SeriesInput {
    fn from(series: LabeledSeries) -> Self {
        SeriesInput::Labeled(series)
    }
}

/// The canonical internal representation of a series.
///
/// Produced by [`normalize`]; never mutated afterward. Carries the element
/// type observed during normalization so the validator can reject
/// non-numeric series.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSeries {
    values: Array1<f64>,
    dtype: Dtype,
}

impl CanonicalSeries {
    /// Borrows the sample values.
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Element type observed during normalization.
    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Converts an accepted input shape into a canonical numeric series.
///
/// Element order and values are preserved exactly. Integer samples promote to
/// float when mixed with floats; any other mixture is a shape error and fails
/// with [`IndicatorError::UnsupportedInput`]. Pure: no side effects.
pub fn normalize(name: &str, input: SeriesInput) -> IndicatorResult<CanonicalSeries> {
    match input {
        SeriesInput::Sequence(values) => from_samples(name, &values),
        SeriesInput::Array(values) => Ok(CanonicalSeries {
            values,
            dtype: Dtype::Float,
        }),
        SeriesInput::Labeled(series) => from_samples(name, series.values()),
    }
}

fn from_samples(name: &str, samples: &[SampleValue]) -> IndicatorResult<CanonicalSeries> {
    let mut dtype: Option<Dtype> = None;
    for sample in samples {
        let next = sample.dtype();
        dtype = Some(match dtype {
            None => next,
            Some(current) if current == next => current,
            Some(Dtype::Int) if next == Dtype::Float => Dtype::Float,
            Some(Dtype::Float) if next == Dtype::Int => Dtype::Float,
            Some(current) => {
                return Err(IndicatorError::unsupported_input(
                    name,
                    format!("mixed element types {current} and {next}"),
                ))
            }
        });
    }

    // An empty sequence carries no element type; the validator reports it
    // as an empty series rather than a shape error.
    let dtype = dtype.unwrap_or(Dtype::Float);
    let values = samples.iter().map(SampleValue::as_f64).collect();
    Ok(CanonicalSeries { values, dtype })
}
