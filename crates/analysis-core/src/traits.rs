use crate::{AnalysisError, MetricsRecord};
use async_trait::async_trait;

/// Source of reference metrics. The built-in repository is an
/// in-memory table; a production provider would sit in front of an
/// external data service behind the same seam.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Look up one ticker. The caller passes a normalized (trimmed,
    /// uppercased) symbol. `Ok(None)` means the ticker is unknown.
    async fn fetch(&self, ticker: &str) -> Result<Option<MetricsRecord>, AnalysisError>;

    /// Every ticker this provider can resolve.
    async fn tickers(&self) -> Result<Vec<String>, AnalysisError>;

    /// Label stamped into response envelopes, e.g. "mock_data".
    fn data_source(&self) -> &'static str;
}
