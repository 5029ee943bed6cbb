//! Static metrics repository.
//!
//! Holds the reference table of financial metrics behind the
//! [`MetricsProvider`] seam. Constructed once at startup and injected
//! wherever an analysis pipeline needs data; tests swap in alternate
//! tables through the same constructor.

use analysis_core::{AnalysisError, MetricsProvider, MetricsRecord};
use async_trait::async_trait;
use std::collections::HashMap;

mod reference_data;

pub use reference_data::reference_data;

/// In-memory repository keyed by uppercase ticker. Read-only after
/// construction, so concurrent lookups need no coordination.
pub struct StaticMetricsRepository {
    records: HashMap<String, MetricsRecord>,
}

impl StaticMetricsRepository {
    /// Build a repository from explicit records, validating each one.
    /// Empty tickers and duplicate symbols are construction errors,
    /// not something to discover at lookup time.
    pub fn from_records(records: Vec<MetricsRecord>) -> Result<Self, AnalysisError> {
        let mut map = HashMap::with_capacity(records.len());
        for mut record in records {
            let key = record.ticker.trim().to_uppercase();
            if key.is_empty() {
                return Err(AnalysisError::InvalidData(
                    "record with empty ticker symbol".to_string(),
                ));
            }
            record.ticker = key.clone();
            if map.insert(key.clone(), record).is_some() {
                return Err(AnalysisError::InvalidData(format!(
                    "duplicate ticker symbol: {key}"
                )));
            }
        }
        tracing::debug!(tickers = map.len(), "metrics repository initialized");
        Ok(Self { records: map })
    }

    /// Repository preloaded with the built-in reference table.
    pub fn with_reference_data() -> Self {
        // The built-in table is validated by construction.
        Self::from_records(reference_data())
            .unwrap_or_else(|_| unreachable!("built-in reference data is well-formed"))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl MetricsProvider for StaticMetricsRepository {
    async fn fetch(&self, ticker: &str) -> Result<Option<MetricsRecord>, AnalysisError> {
        Ok(self.records.get(ticker).cloned())
    }

    async fn tickers(&self) -> Result<Vec<String>, AnalysisError> {
        let mut tickers: Vec<String> = self.records.keys().cloned().collect();
        tickers.sort();
        Ok(tickers)
    }

    fn data_source(&self) -> &'static str {
        "mock_data"
    }
}
