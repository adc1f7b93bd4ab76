#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

//! Named-column dispatch and derived-column caching for batch indicators.

use std::collections::BTreeMap;

use ndarray::Array1;
use thiserror::Error;
use tracing::debug;

use crossline_indicators::series::normalize;
use crossline_indicators::validate::validate_series;
use crossline_indicators::{
    CanonicalSeries, ComponentSpec, Indicator, IndicatorError, MovingAverageCrossover,
    SeriesInput, Sma,
};

/// Result alias for façade operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type surfaced by the analysis façade.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A core indicator precondition was violated; carries the offending
    /// column or parameter identity.
    #[error(transparent)]
    Indicator(#[from] IndicatorError),
    /// The requested input column does not exist.
    #[error("unknown column `{name}`")]
    UnknownColumn {
        /// The requested column name, after lower-casing.
        name: String,
    },
}

/// Named-column wrapper over the indicator core.
///
/// Column names are lower-cased on ingestion and each column is normalized
/// and validated immediately, so every construction failure names the
/// offending column. Derived columns are cached under
/// `{column}_{indicator}_{window}` keys; a repeated request with identical
/// parameters returns the previously computed series unchanged.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    input: BTreeMap<String, CanonicalSeries>,
    derived: BTreeMap<String, Array1<f64>>,
}

impl Analysis {
    /// Ingests named columns, lower-casing names and validating every column.
    pub fn new<I, N, S>(columns: I) -> AnalysisResult<Self>
    where
        I: IntoIterator<Item = (N, S)>,
        N: Into<String>,
        S: Into<SeriesInput>,
    {
        let mut input = BTreeMap::new();
        for (name, data) in columns {
            let name = name.into().to_lowercase();
            let series = normalize(&name, data.into())?;
            validate_series(&name, &series)?;
            input.insert(name, series);
        }
        Ok(Self {
            input,
            derived: BTreeMap::new(),
        })
    }

    /// Looks up an input column by (lower-cased) name.
    pub fn column(&self, name: &str) -> AnalysisResult<&CanonicalSeries> {
        let name = name.to_lowercase();
        self.input
            .get(&name)
            .ok_or(AnalysisError::UnknownColumn { name })
    }

    /// Computes (or retrieves) the simple moving average of a column.
    ///
    /// The derived series is cached under `{column}_sma_{window}`.
    pub fn simple_moving_average(
        &mut self,
        column: &str,
        window: usize,
    ) -> AnalysisResult<&Array1<f64>> {
        let column = column.to_lowercase();
        let key = format!("{column}_sma_{window}");
        if self.derived.contains_key(&key) {
            debug!(%key, "returning cached derived column");
        } else {
            debug!(%column, window, "computing simple moving average");
            // The column was validated at ingestion; only window errors can
            // come back from the core here.
            let series = self.column(&column)?;
            let sma = Sma::new(series.values().clone(), window)?;
            self.derived.insert(key.clone(), sma.to_array().clone());
        }
        Ok(&self.derived[&key])
    }

    /// Computes (or retrieves) a moving-average crossover signal over a column.
    ///
    /// The derived series is cached under
    /// `{column}_macross_{first window}_{second window}`.
    pub fn moving_average_crossover(
        &mut self,
        column: &str,
        first: ComponentSpec,
        second: ComponentSpec,
    ) -> AnalysisResult<&Array1<f64>> {
        let column = column.to_lowercase();
        // Mirror the composer's component check before touching the cache so
        // a non-moving-average kind fails the same way it would in the core.
        for (role, spec) in [("first", &first), ("second", &second)] {
            if !spec.kind.is_moving_average() {
                return Err(IndicatorError::invalid_component(role, spec.kind).into());
            }
        }
        let key = format!(
            "{column}_macross_{}_{}",
            first.window()?,
            second.window()?
        );
        if self.derived.contains_key(&key) {
            debug!(%key, "returning cached derived column");
        } else {
            debug!(%column, "computing moving average crossover");
            let series = self.column(&column)?;
            let cross = MovingAverageCrossover::new(series.values().clone(), first, second)?;
            self.derived.insert(key.clone(), cross.to_array().clone());
        }
        Ok(&self.derived[&key])
    }

    /// Retrieves a previously computed derived column by its cache key.
    ///
    /// Fails with [`IndicatorError::OutputNotReady`] if the column has not
    /// been computed yet.
    pub fn derived(&self, key: &str) -> AnalysisResult<&Array1<f64>> {
        self.derived
            .get(key)
            .ok_or_else(|| IndicatorError::output_not_ready(key).into())
    }

    /// Cache keys of every derived column computed so far.
    pub fn derived_keys(&self) -> impl Iterator<Item = &str> {
        self.derived.keys().map(String::as_str)
    }

    /// Names of the ingested input columns.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.input.keys().map(String::as_str)
    }
}
