//! Precondition checks shared by every indicator.

use crate::core::{IndicatorError, IndicatorResult};
use crate::series::CanonicalSeries;

/// Validates a canonical series ahead of any calculation.
///
/// Checks, in order: the series is non-empty, its element type is numeric
/// (time-deltas are excluded despite being numeric-like), and every value is
/// finite. The dtype check runs before the finiteness scan so non-numeric
/// series always surface as [`IndicatorError::NonNumericType`].
pub fn validate_series(name: &str, series: &CanonicalSeries) -> IndicatorResult<()> {
    if series.is_empty() {
        return Err(IndicatorError::EmptySeries { name: name.into() });
    }
    if !series.dtype().is_numeric() {
        return Err(IndicatorError::NonNumericType {
            name: name.into(),
            dtype: series.dtype(),
        });
    }
    if let Some(index) = series.values().iter().position(|value| !value.is_finite()) {
        return Err(IndicatorError::NonFiniteValue {
            name: name.into(),
            index,
        });
    }
    Ok(())
}

/// Validates a window parameter against the series it applies to.
///
/// The window must be positive and must not exceed the series length;
/// violating either bound is a constructor-time failure, never a clamp.
pub fn validate_window(series: &CanonicalSeries, window: usize) -> IndicatorResult<()> {
    if window == 0 {
        return Err(IndicatorError::NonPositiveWindow { window: 0 });
    }
    if window > series.len() {
        return Err(IndicatorError::WindowTooLarge {
            window,
            len: series.len(),
        });
    }
    Ok(())
}
