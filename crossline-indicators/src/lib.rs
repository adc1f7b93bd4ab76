#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//! Batch technical indicators with explicit, data-driven composition.

/// Foundational traits and the shared error type.
pub mod core;
/// Built-in indicator implementations.
pub mod indicators;
/// Input shapes, the canonical series, and normalization.
pub mod series;
/// Component specifications for composite indicators.
pub mod spec;
/// Precondition checks applied before every calculation.
pub mod validate;

/// Re-export of the core traits and error type to make the crate easy to consume.
pub use crate::core::{Indicator, IndicatorError, IndicatorResult, MovingAverage};
/// Re-export of the built-in indicators.
pub use crate::indicators::{MovingAverageCrossover, Sma, Sma50CrossSma200};
/// Re-export of the input and series vocabulary.
pub use crate::series::{CanonicalSeries, Dtype, LabeledSeries, SampleValue, SeriesInput};
/// Re-export of the composition vocabulary.
pub use crate::spec::{ComponentSpec, IndicatorKind};
