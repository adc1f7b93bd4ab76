//! Foundational traits and the shared error type.

use ndarray::Array1;
use thiserror::Error;

use crate::series::{Dtype, LabeledSeries};
use crate::spec::IndicatorKind;

/// Result alias for indicator construction and access.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

/// Error type surfaced by indicator construction and output access.
///
/// Every variant identifies the offending series, parameter, or component
/// role so a caller can tell exactly which precondition was violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    /// The input shape cannot be converted to a canonical numeric series.
    #[error("unsupported input for `{name}`: {reason}")]
    UnsupportedInput {
        /// Name of the series being normalized.
        name: String,
        /// Why the shape was rejected.
        reason: String,
    },
    /// The series contains no values.
    #[error("series `{name}` contains no values")]
    EmptySeries {
        /// Name of the offending series.
        name: String,
    },
    /// The series contains a NaN or infinite value.
    #[error("series `{name}` contains a non-finite value at index {index}")]
    NonFiniteValue {
        /// Name of the offending series.
        name: String,
        /// Index of the first non-finite element.
        index: usize,
    },
    /// The series element type is not numeric (time-deltas included).
    #[error("series `{name}` holds {dtype} values, expected numeric")]
    NonNumericType {
        /// Name of the offending series.
        name: String,
        /// The rejected element type.
        dtype: Dtype,
    },
    /// A window parameter was supplied with a non-integer value.
    #[error("parameter `{param}` must be an integer, got {value}")]
    InvalidWindowType {
        /// Name of the offending parameter.
        param: String,
        /// Rendering of the rejected value.
        value: String,
    },
    /// A window parameter was zero or negative.
    #[error("window must be a positive integer, got {window}")]
    NonPositiveWindow {
        /// The rejected window.
        window: i64,
    },
    /// A window parameter exceeds the series length.
    #[error("window {window} exceeds series length {len}")]
    WindowTooLarge {
        /// The rejected window.
        window: usize,
        /// Length of the series it was applied to.
        len: usize,
    },
    /// A crossover component names an indicator outside the moving-average family.
    #[error("component `{role}` must be a moving-average indicator, got {kind}")]
    InvalidComponentType {
        /// Role of the offending component ("first" or "second").
        role: String,
        /// The rejected indicator kind.
        kind: IndicatorKind,
    },
    /// Reserved for composition surfaces that bind components to a specific
    /// enclosing instance. No operation in this crate produces it.
    #[error("component is bound to a different analysis instance")]
    MismatchedInstance,
    /// An output was requested before it was computed.
    #[error("output for `{name}` has not been computed yet")]
    OutputNotReady {
        /// Name of the requested output.
        name: String,
    },
}

impl IndicatorError {
    /// Builds an [`IndicatorError::UnsupportedInput`] for the named series.
    pub fn unsupported_input(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Builds an [`IndicatorError::InvalidWindowType`] for the named parameter.
    pub fn invalid_window_type(param: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidWindowType {
            param: param.into(),
            value: value.to_string(),
        }
    }

    /// Builds an [`IndicatorError::InvalidComponentType`] for the named role.
    pub fn invalid_component(role: impl Into<String>, kind: IndicatorKind) -> Self {
        Self::InvalidComponentType {
            role: role.into(),
            kind,
        }
    }

    /// Builds an [`IndicatorError::OutputNotReady`] for the named output.
    pub fn output_not_ready(name: impl Into<String>) -> Self {
        Self::OutputNotReady { name: name.into() }
    }
}

/// Common contract implemented by every indicator.
///
/// A concrete indicator normalizes its input, validates it, and runs its
/// calculation once inside its constructor; the constructor fails fast, so an
/// instance always holds a fully computed output series. The output is owned
/// by the instance and exposed read-only through three equivalent views.
pub trait Indicator {
    /// Borrows the computed output series.
    fn output(&self) -> &Array1<f64>;

    /// Returns the output as a freshly allocated native vector.
    fn to_vec(&self) -> Vec<f64> {
        self.output().to_vec()
    }

    /// Returns the output as the canonical numeric array.
    ///
    /// This is a borrow of the instance's internal state, not a copy.
    fn to_array(&self) -> &Array1<f64> {
        self.output()
    }

    /// Returns the output wrapped in a labeled series with default integer labels.
    fn to_labeled(&self) -> LabeledSeries {
        LabeledSeries::from_f64(self.output().iter().copied())
    }
}

/// Contract shared by the moving-average indicator family.
///
/// Composites such as the crossover composer require window-aware components
/// so warm-up artifacts can be suppressed; the accessor returns `None` where
/// a variant has not fixed its window.
pub trait MovingAverage: Indicator {
    /// Returns the window the average was computed over, if known.
    fn window(&self) -> Option<usize>;
}
