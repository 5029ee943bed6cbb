//! Fundamental scoring engine: weighted band scores over a metrics
//! record, valuation classification, and a deterministic rationale.

use analysis_core::{
    is_valid_metric, Metric, MetricsRecord, ScoreBreakdown, StockAnalysis, Valuation,
};

pub mod scorer;

pub use scorer::METRIC_WEIGHT;

const INSUFFICIENT_DATA_RATIONALE: &str =
    "Insufficient financial data available for meaningful analysis.";

/// Pure, synchronous scoring engine. Holds no state; safe to share
/// across concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FundamentalScoringEngine;

impl FundamentalScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Weighted overall score over the valid metrics, the per-metric
    /// band scores, and the count of metrics that passed validity.
    /// Invalid or missing metrics are skipped outright, never scored
    /// as zero, and the weights are not renormalized.
    pub fn compute_score(&self, record: &MetricsRecord) -> (f64, ScoreBreakdown, usize) {
        let mut total_weighted_score = 0.0;
        let mut breakdown = ScoreBreakdown::default();
        let mut valid_metrics = 0;

        for metric in Metric::ALL {
            let value = record.metric_value(metric);
            if !is_valid_metric(value) {
                continue;
            }
            let Some(value) = value else { continue };
            let band = scorer::band_score(metric, value);
            total_weighted_score += f64::from(band) * METRIC_WEIGHT;
            breakdown.set(metric, band);
            valid_metrics += 1;
        }

        (total_weighted_score, breakdown, valid_metrics)
    }

    /// Full analysis of one record. A record with no valid metrics
    /// yields the degenerate "Unable to evaluate" analysis; the
    /// ticker still resolved, so this is not an error.
    pub fn analyze(&self, record: &MetricsRecord) -> StockAnalysis {
        let (total, breakdown, valid_metrics) = self.compute_score(record);

        if valid_metrics == 0 {
            return StockAnalysis {
                score: 0.0,
                valuation: Valuation::UnableToEvaluate,
                rationale: INSUFFICIENT_DATA_RATIONALE.to_string(),
                score_breakdown: ScoreBreakdown::default(),
                metrics_analyzed: 0,
            };
        }

        let score = (total * 100.0).round() / 100.0;
        let valuation = Valuation::from_score(score);
        let rationale = self.rationale(record, score, valuation, valid_metrics);

        StockAnalysis {
            score,
            valuation,
            rationale,
            score_breakdown: breakdown,
            metrics_analyzed: valid_metrics,
        }
    }

    /// Single-paragraph, fully templated rationale. Deterministic so
    /// the same record always produces the same sentence.
    fn rationale(
        &self,
        record: &MetricsRecord,
        score: f64,
        valuation: Valuation,
        metrics_analyzed: usize,
    ) -> String {
        let pe = record
            .pe_ratio
            .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"));
        let roe = record
            .roe
            .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}%"));
        let ev = record
            .ev_to_ebitda
            .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"));
        let eps = record
            .eps
            .map_or_else(|| "N/A".to_string(), |v| format!("{v:.2}"));

        format!(
            "Financial analysis for {company}: Overall score of {score:.1}/100 based on \
             {metrics_analyzed} key metrics. Key metrics - P/E Ratio: {pe}, ROE: {roe}, \
             EV/EBITDA: {ev}, EPS: ${eps}. Based on this analysis, the stock appears to \
             be {valuation}.",
            company = record.company_name,
            valuation = valuation.label().to_lowercase(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apple() -> MetricsRecord {
        MetricsRecord {
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            pe_ratio: Some(28.5),
            roe: Some(22.4),
            ev_to_ebitda: Some(18.2),
            eps: Some(6.05),
            ..MetricsRecord::default()
        }
    }

    #[test]
    fn test_reference_record_scores_fairly_valued() {
        let engine = FundamentalScoringEngine::new();
        let analysis = engine.analyze(&apple());

        // (50 + 100 + 40 + 100) * 0.25 = 72.5
        assert_eq!(analysis.score, 72.5);
        assert_eq!(analysis.valuation, Valuation::FairlyValued);
        assert_eq!(analysis.metrics_analyzed, 4);
        assert_eq!(analysis.score_breakdown.get(Metric::PeRatio), Some(50));
        assert_eq!(analysis.score_breakdown.get(Metric::Roe), Some(100));
        assert_eq!(analysis.score_breakdown.get(Metric::EvToEbitda), Some(40));
        assert_eq!(analysis.score_breakdown.get(Metric::Eps), Some(100));
    }

    #[test]
    fn test_no_valid_metrics_is_inconclusive_not_an_error() {
        let engine = FundamentalScoringEngine::new();
        let record = MetricsRecord {
            ticker: "EMPT".to_string(),
            company_name: "Empty Corp.".to_string(),
            pe_ratio: None,
            roe: Some(0.0),
            ev_to_ebitda: Some(-4.0),
            eps: None,
            ..MetricsRecord::default()
        };

        let analysis = engine.analyze(&record);
        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.valuation, Valuation::UnableToEvaluate);
        assert_eq!(analysis.metrics_analyzed, 0);
        assert!(analysis.score_breakdown.is_empty());
        assert!(analysis.is_inconclusive());
        assert!(analysis.rationale.contains("Insufficient financial data"));
    }

    #[test]
    fn test_missing_metrics_cap_the_achievable_score() {
        let engine = FundamentalScoringEngine::new();
        // One "excellent" metric at weight 0.25 can never leave the
        // overvalued band.
        let record = MetricsRecord {
            ticker: "ONE".to_string(),
            company_name: "One Metric Inc.".to_string(),
            roe: Some(35.0),
            ..MetricsRecord::default()
        };

        let analysis = engine.analyze(&record);
        assert_eq!(analysis.score, 25.0);
        assert_eq!(analysis.valuation, Valuation::Overvalued);
        assert_eq!(analysis.metrics_analyzed, 1);

        // Ceiling is metrics_analyzed * 25 in general.
        let two = MetricsRecord {
            pe_ratio: Some(10.0),
            eps: Some(20.0),
            ..record
        };
        let analysis = engine.analyze(&two);
        assert_eq!(analysis.metrics_analyzed, 3);
        assert!(analysis.score <= 75.0);
    }

    #[test]
    fn test_invalid_metric_is_skipped_not_zero_scored() {
        let engine = FundamentalScoringEngine::new();
        let mut record = apple();
        record.eps = Some(-1.0);

        let (total, breakdown, valid) = engine.compute_score(&record);
        assert_eq!(valid, 3);
        assert_eq!(breakdown.get(Metric::Eps), None);
        // (50 + 100 + 40) * 0.25
        assert_eq!(total, 47.5);
    }

    #[test]
    fn test_rationale_is_templated_and_deterministic() {
        let engine = FundamentalScoringEngine::new();
        let mut record = apple();
        record.ev_to_ebitda = None;

        let analysis = engine.analyze(&record);
        assert!(analysis.rationale.contains("Apple Inc."));
        assert!(analysis.rationale.contains("based on 3 key metrics"));
        assert!(analysis.rationale.contains("P/E Ratio: 28.50"));
        assert!(analysis.rationale.contains("ROE: 22.40%"));
        assert!(analysis.rationale.contains("EV/EBITDA: N/A"));
        assert!(analysis.rationale.contains("EPS: $6.05"));
        assert!(analysis.rationale.ends_with("appears to be fairly valued."));

        let again = engine.analyze(&record);
        assert_eq!(analysis.rationale, again.rationale);
    }
}
