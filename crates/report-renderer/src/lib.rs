//! Renders a scored record into the user-facing text report.
//!
//! Everything here is string templating over already-computed values;
//! the only branching is unit selection and the banded label lookups.
//! Section order is fixed so the output is byte-for-byte deterministic
//! for a given record and analysis.

use analysis_core::{Metric, MetricsRecord, StockAnalysis, Valuation};

const DISCLAIMER: &str = "⚠️ For informational purposes only. Not investment advice.";
const INSUFFICIENT_DATA_REPORT: &str =
    "❌ Unable to generate analysis report due to insufficient data.";

/// Qualitative label for a 0-100 score, used for the overall score
/// and for per-metric band scores alike.
pub fn performance_label(score: f64) -> &'static str {
    if score >= 90.0 {
        "🟢 Excellent"
    } else if score >= 80.0 {
        "🔵 Very Good"
    } else if score >= 70.0 {
        "🟡 Good"
    } else if score >= 60.0 {
        "🟠 Fair"
    } else if score >= 50.0 {
        "🔴 Poor"
    } else {
        "⚫ Very Poor"
    }
}

/// Fixed phrase per valuation category for the headline line.
pub fn valuation_indicator(valuation: Valuation) -> &'static str {
    match valuation {
        Valuation::Undervalued => "💚 Undervalued (Potential Buy)",
        Valuation::FairlyValued => "💙 Fairly Valued (Hold/Monitor)",
        Valuation::Overvalued => "❤️ Overvalued (Consider Carefully)",
        Valuation::UnableToEvaluate => "⚪ Unable to Evaluate",
    }
}

/// Closing recommendation keyed off the valuation category.
pub fn recommendation(valuation: Valuation) -> &'static str {
    match valuation {
        Valuation::Undervalued => "💚 Recommendation: Consider for investment",
        Valuation::FairlyValued => "💙 Recommendation: Hold or monitor",
        Valuation::Overvalued => "❤️ Recommendation: Proceed with caution",
        Valuation::UnableToEvaluate => "⚪ Recommendation: Not available",
    }
}

/// Unit-scaled market cap: trillions, billions, millions, or the raw
/// figure with thousands separators.
pub fn format_market_cap(market_cap: Option<f64>) -> String {
    let Some(value) = market_cap else {
        return "N/A".to_string();
    };
    if value >= 1_000_000_000_000.0 {
        format!("${:.2}T", value / 1_000_000_000_000.0)
    } else if value >= 1_000_000_000.0 {
        format!("${:.2}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else {
        format!("${}", group_thousands(value))
    }
}

fn group_thousands(value: f64) -> String {
    let formatted = format!("{value:.0}");
    let (sign, digits) = formatted
        .strip_prefix('-')
        .map_or(("", formatted.as_str()), |rest| ("-", rest));
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

fn metric_value_display(metric: Metric, value: f64) -> String {
    match metric {
        Metric::PeRatio | Metric::EvToEbitda => format!("{value:.1}x"),
        Metric::Roe => format!("{value:.1}%"),
        Metric::Eps => format!("${value:.2}"),
    }
}

fn score_or_na(score: Option<i32>) -> String {
    score.map_or_else(|| "N/A".to_string(), |s| s.to_string())
}

/// Render the full multi-section report. A degenerate analysis (zero
/// valid metrics) renders as a single fixed line instead.
pub fn render(record: &MetricsRecord, analysis: &StockAnalysis) -> String {
    if analysis.is_inconclusive() {
        return INSUFFICIENT_DATA_REPORT.to_string();
    }

    let mut lines = vec![
        format!("📊 {} ({})", record.company_name, record.sector),
        format!("💰 Market Cap: {}", format_market_cap(record.market_cap)),
        format!(
            "📈 Close Price: {}",
            record
                .close_price
                .map_or_else(|| "N/A".to_string(), |p| format!("${p:.2}"))
        ),
        format!(
            "🏆 Rank: {}",
            record
                .rank
                .map_or_else(|| "N/A".to_string(), |r| format!("#{r}"))
        ),
        String::new(),
        format!(
            "🎯 Overall Score: {:.1}/100 {}",
            analysis.score,
            performance_label(analysis.score)
        ),
        format!("💡 {}", valuation_indicator(analysis.valuation)),
        String::new(),
        "📊 Key Metrics:".to_string(),
    ];

    for (metric, band) in analysis.score_breakdown.entries() {
        // Breakdown entries always correspond to a present raw value.
        let Some(value) = record.metric_value(metric) else {
            continue;
        };
        lines.push(format!(
            "  {}: {} {}",
            metric.label(),
            metric_value_display(metric, value),
            performance_label(f64::from(band))
        ));
    }

    lines.extend([
        String::new(),
        "📋 Additional Scores:".to_string(),
        format!(
            "  Fundamental Score: {}",
            score_or_na(record.fundamental_score)
        ),
        format!("  Technical Score: {}", score_or_na(record.technical_score)),
        format!("  Quant Score: {}", score_or_na(record.quant_score)),
        format!("  Total Score: {}", score_or_na(record.total_score)),
        String::new(),
        recommendation(analysis.valuation).to_string(),
        String::new(),
        DISCLAIMER.to_string(),
    ]);

    lines.join("\n")
}
