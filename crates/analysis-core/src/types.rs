use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw financial profile for one ticker.
///
/// Reference data is read-only after construction. The four scored
/// metrics are optional; everything else is carried through to the
/// rendered report untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    pub ticker: String,
    pub company_name: String,
    pub sector: String,
    pub industry: String,
    pub pe_ratio: Option<f64>,
    pub roe: Option<f64>,
    pub ev_to_ebitda: Option<f64>,
    pub eps: Option<f64>,
    pub market_cap: Option<f64>,
    pub close_price: Option<f64>,
    pub rank: Option<u32>,
    pub debt_to_equity: Option<f64>,
    pub total_score: Option<i32>,
    pub fundamental_score: Option<i32>,
    pub technical_score: Option<i32>,
    pub quant_score: Option<i32>,
    pub trade_date: Option<String>,
}

impl MetricsRecord {
    /// Raw value of one of the four scorable metrics.
    pub fn metric_value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::PeRatio => self.pe_ratio,
            Metric::Roe => self.roe,
            Metric::EvToEbitda => self.ev_to_ebitda,
            Metric::Eps => self.eps,
        }
    }
}

/// A metric counts toward the score only when present and strictly
/// positive. Shared by scoring and reporting so both agree on what
/// "valid" means.
pub fn is_valid_metric(value: Option<f64>) -> bool {
    matches!(value, Some(v) if v > 0.0)
}

/// The four metrics the engine scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    PeRatio,
    Roe,
    EvToEbitda,
    Eps,
}

impl Metric {
    /// Fixed evaluation and display order.
    pub const ALL: [Metric; 4] = [Metric::PeRatio, Metric::Roe, Metric::EvToEbitda, Metric::Eps];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::PeRatio => "P/E Ratio",
            Metric::Roe => "ROE",
            Metric::EvToEbitda => "EV/EBITDA",
            Metric::Eps => "EPS",
        }
    }
}

/// Band scores per metric. Only metrics that passed validity appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roe: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ev_to_ebitda: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<i32>,
}

impl ScoreBreakdown {
    pub fn get(&self, metric: Metric) -> Option<i32> {
        match metric {
            Metric::PeRatio => self.pe_ratio,
            Metric::Roe => self.roe,
            Metric::EvToEbitda => self.ev_to_ebitda,
            Metric::Eps => self.eps,
        }
    }

    pub fn set(&mut self, metric: Metric, score: i32) {
        match metric {
            Metric::PeRatio => self.pe_ratio = Some(score),
            Metric::Roe => self.roe = Some(score),
            Metric::EvToEbitda => self.ev_to_ebitda = Some(score),
            Metric::Eps => self.eps = Some(score),
        }
    }

    pub fn len(&self) -> usize {
        Metric::ALL.iter().filter(|m| self.get(**m).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Scored metrics in fixed order.
    pub fn entries(&self) -> impl Iterator<Item = (Metric, i32)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(|m| self.get(m).map(|s| (m, s)))
    }
}

/// Score at or above which a stock is classified undervalued.
pub const UNDERVALUED_THRESHOLD: f64 = 80.0;
/// Score at or above which a stock is classified fairly valued.
pub const FAIRLY_VALUED_THRESHOLD: f64 = 60.0;

/// Valuation classification derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Valuation {
    #[serde(rename = "Undervalued")]
    Undervalued,
    #[serde(rename = "Fairly valued")]
    FairlyValued,
    #[serde(rename = "Overvalued")]
    Overvalued,
    #[serde(rename = "Unable to evaluate")]
    UnableToEvaluate,
}

impl Valuation {
    /// Classify a 0-100 weighted score. The thresholds are absolute:
    /// a ticker scored from fewer than four metrics has a lower
    /// achievable ceiling and classifies accordingly.
    pub fn from_score(score: f64) -> Self {
        if score >= UNDERVALUED_THRESHOLD {
            Valuation::Undervalued
        } else if score >= FAIRLY_VALUED_THRESHOLD {
            Valuation::FairlyValued
        } else {
            Valuation::Overvalued
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Valuation::Undervalued => "Undervalued",
            Valuation::FairlyValued => "Fairly valued",
            Valuation::Overvalued => "Overvalued",
            Valuation::UnableToEvaluate => "Unable to evaluate",
        }
    }
}

impl fmt::Display for Valuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derived analysis for one record. Immutable once computed; never
/// cached between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAnalysis {
    /// Weighted overall score, rounded to two decimal places.
    pub score: f64,
    pub valuation: Valuation,
    pub rationale: String,
    pub score_breakdown: ScoreBreakdown,
    pub metrics_analyzed: usize,
}

impl StockAnalysis {
    pub fn is_inconclusive(&self) -> bool {
        self.metrics_analyzed == 0
    }
}

/// Payload of a successful analysis: every record field plus the
/// derived analysis fields, flattened into one object on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisData {
    #[serde(flatten)]
    pub record: MetricsRecord,
    #[serde(flatten)]
    pub analysis: StockAnalysis,
    #[serde(rename = "userFriendlyReport")]
    pub user_friendly_report: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSuccess {
    pub success: bool,
    pub ticker: String,
    pub timestamp: DateTime<Utc>,
    pub data_source: String,
    pub data: AnalysisData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub success: bool,
    pub error: String,
    pub timestamp: DateTime<Utc>,
    pub data_source: String,
}

/// Structured result of `analyze`. This is the exact contract the
/// calling surfaces depend on: `data.userFriendlyReport` for display,
/// `data.score` / `data.valuation` for branching.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Success(AnalysisSuccess),
    Failure(AnalysisFailure),
}

impl AnalysisResponse {
    pub fn success(ticker: impl Into<String>, data_source: impl Into<String>, data: AnalysisData) -> Self {
        AnalysisResponse::Success(AnalysisSuccess {
            success: true,
            ticker: ticker.into(),
            timestamp: Utc::now(),
            data_source: data_source.into(),
            data,
        })
    }

    pub fn failure(error: impl Into<String>, data_source: impl Into<String>) -> Self {
        AnalysisResponse::Failure(AnalysisFailure {
            success: false,
            error: error.into(),
            timestamp: Utc::now(),
            data_source: data_source.into(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AnalysisResponse::Success(_))
    }

    pub fn data(&self) -> Option<&AnalysisData> {
        match self {
            AnalysisResponse::Success(s) => Some(&s.data),
            AnalysisResponse::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisResponse::Success(_) => None,
            AnalysisResponse::Failure(f) => Some(&f.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valuation_thresholds() {
        assert_eq!(Valuation::from_score(80.0), Valuation::Undervalued);
        assert_eq!(Valuation::from_score(95.5), Valuation::Undervalued);
        assert_eq!(Valuation::from_score(79.99), Valuation::FairlyValued);
        assert_eq!(Valuation::from_score(60.0), Valuation::FairlyValued);
        assert_eq!(Valuation::from_score(59.99), Valuation::Overvalued);
        assert_eq!(Valuation::from_score(0.0), Valuation::Overvalued);
    }

    #[test]
    fn test_valuation_labels() {
        assert_eq!(Valuation::FairlyValued.label(), "Fairly valued");
        assert_eq!(Valuation::UnableToEvaluate.label(), "Unable to evaluate");
        assert_eq!(
            serde_json::to_value(Valuation::FairlyValued).unwrap(),
            serde_json::json!("Fairly valued")
        );
    }

    #[test]
    fn test_metric_validity_predicate() {
        assert!(is_valid_metric(Some(0.01)));
        assert!(is_valid_metric(Some(28.5)));
        assert!(!is_valid_metric(Some(0.0)));
        assert!(!is_valid_metric(Some(-3.2)));
        assert!(!is_valid_metric(None));
    }

    #[test]
    fn test_breakdown_skips_absent_metrics() {
        let mut breakdown = ScoreBreakdown::default();
        breakdown.set(Metric::Roe, 100);
        breakdown.set(Metric::Eps, 70);

        assert_eq!(breakdown.len(), 2);
        let entries: Vec<_> = breakdown.entries().collect();
        assert_eq!(entries, vec![(Metric::Roe, 100), (Metric::Eps, 70)]);

        let json = serde_json::to_value(&breakdown).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["roe"], 100);
        assert_eq!(obj["eps"], 70);
        assert!(!obj.contains_key("peRatio"));
        assert!(!obj.contains_key("evToEbitda"));
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = MetricsRecord {
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            pe_ratio: Some(28.5),
            ev_to_ebitda: Some(18.2),
            market_cap: Some(2_800_000_000_000.0),
            ..MetricsRecord::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["companyName"], "Apple Inc.");
        assert_eq!(json["peRatio"], 28.5);
        assert_eq!(json["evToEbitda"], 18.2);
        assert_eq!(json["marketCap"], 2_800_000_000_000.0_f64);
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response = AnalysisResponse::failure("ZZZZ not available", "mock_data");
        assert!(!response.is_success());
        assert_eq!(response.error(), Some("ZZZZ not available"));
        assert!(response.data().is_none());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "ZZZZ not available");
        assert_eq!(json["data_source"], "mock_data");
        assert!(json.get("data").is_none());
        assert!(json.get("timestamp").is_some());
    }

    #[test]
    fn test_success_envelope_flattens_data() {
        let record = MetricsRecord {
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            roe: Some(22.4),
            ..MetricsRecord::default()
        };
        let mut breakdown = ScoreBreakdown::default();
        breakdown.set(Metric::Roe, 100);
        let analysis = StockAnalysis {
            score: 25.0,
            valuation: Valuation::Overvalued,
            rationale: "test".to_string(),
            score_breakdown: breakdown,
            metrics_analyzed: 1,
        };
        let data = AnalysisData {
            record,
            analysis,
            user_friendly_report: "report".to_string(),
        };
        let response = AnalysisResponse::success("AAPL", "mock_data", data);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["data"]["companyName"], "Apple Inc.");
        assert_eq!(json["data"]["score"], 25.0);
        assert_eq!(json["data"]["valuation"], "Overvalued");
        assert_eq!(json["data"]["metricsAnalyzed"], 1);
        assert_eq!(json["data"]["scoreBreakdown"]["roe"], 100);
        assert_eq!(json["data"]["userFriendlyReport"], "report");
    }
}
