//! Full analysis pipeline: resolve a ticker against the injected
//! metrics provider, score it, render the report, and wrap everything
//! in the structured response envelope.
//!
//! `analyze` never fails outward: unknown tickers and provider faults
//! come back as `success: false` envelopes so calling surfaces can
//! forward them verbatim.

use analysis_core::{AnalysisData, AnalysisError, AnalysisResponse, MetricsProvider};
use fundamental_analysis::FundamentalScoringEngine;
use std::collections::BTreeMap;
use std::sync::Arc;

pub struct AnalysisService {
    provider: Arc<dyn MetricsProvider>,
    engine: FundamentalScoringEngine,
}

impl AnalysisService {
    pub fn new(provider: Arc<dyn MetricsProvider>) -> Self {
        Self {
            provider,
            engine: FundamentalScoringEngine::new(),
        }
    }

    /// Analyze one ticker. Input is case-insensitive and
    /// whitespace-trimmed; the result is computed fresh on every call.
    pub async fn analyze(&self, ticker: &str) -> AnalysisResponse {
        let data_source = self.provider.data_source();
        let ticker = ticker.trim().to_uppercase();

        if ticker.is_empty() {
            return AnalysisResponse::failure(AnalysisError::EmptyTicker.to_string(), data_source);
        }

        tracing::info!(%ticker, "starting financial analysis");

        let record = match self.provider.fetch(&ticker).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                tracing::warn!(%ticker, "ticker not found in reference data");
                return AnalysisResponse::failure(
                    AnalysisError::TickerNotFound(ticker).to_string(),
                    data_source,
                );
            }
            Err(err) => {
                tracing::error!(%ticker, error = %err, "metrics provider failed");
                return AnalysisResponse::failure(err.to_string(), data_source);
            }
        };

        let analysis = self.engine.analyze(&record);
        let user_friendly_report = report_renderer::render(&record, &analysis);

        tracing::info!(
            %ticker,
            score = analysis.score,
            valuation = %analysis.valuation,
            metrics_analyzed = analysis.metrics_analyzed,
            "financial analysis completed"
        );

        AnalysisResponse::success(
            ticker,
            data_source,
            AnalysisData {
                record,
                analysis,
                user_friendly_report,
            },
        )
    }

    /// Analyze every ticker the provider knows, one envelope each,
    /// keyed by ticker. Used for ranking and comparison displays.
    pub async fn analyze_all(&self) -> Result<BTreeMap<String, AnalysisResponse>, AnalysisError> {
        let tickers = self.provider.tickers().await?;
        let mut results = BTreeMap::new();
        for ticker in tickers {
            let response = self.analyze(&ticker).await;
            results.insert(ticker, response);
        }
        Ok(results)
    }
}
