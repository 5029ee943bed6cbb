//! Band scoring for individual metrics.
//!
//! Each function maps one raw metric value to a discrete band score
//! using fixed thresholds. Callers guarantee the value already passed
//! the validity predicate; these functions never fail.
//!
//! P/E and ROE score on a {100, 80, 50} band while EV/EBITDA and EPS
//! score on {100, 70, 40}. The asymmetry is inherited behavior and is
//! kept as-is.

use analysis_core::Metric;

/// Threshold constants, one pair per metric.
pub mod thresholds {
    pub const PE_EXCELLENT: f64 = 15.0;
    pub const PE_GOOD: f64 = 20.0;
    pub const ROE_EXCELLENT: f64 = 20.0;
    pub const ROE_GOOD: f64 = 10.0;
    pub const EV_EBITDA_EXCELLENT: f64 = 10.0;
    pub const EV_EBITDA_GOOD: f64 = 15.0;
    pub const EPS_EXCELLENT: f64 = 5.0;
    pub const EPS_GOOD: f64 = 1.0;
}

/// Discrete band score values.
pub mod band {
    pub const EXCELLENT: i32 = 100;
    pub const GOOD: i32 = 80;
    pub const FAIR: i32 = 70;
    pub const POOR: i32 = 50;
    pub const VERY_POOR: i32 = 40;
}

/// Every metric contributes with the same fixed weight. Weights are
/// not renormalized when metrics are missing, so fewer valid metrics
/// lower the achievable overall score.
pub const METRIC_WEIGHT: f64 = 0.25;

/// Lower P/E is better; the comparisons are strict, so a P/E of
/// exactly 15.0 lands in the 80 band.
pub fn score_pe_ratio(pe_ratio: f64) -> i32 {
    if pe_ratio < thresholds::PE_EXCELLENT {
        band::EXCELLENT
    } else if pe_ratio < thresholds::PE_GOOD {
        band::GOOD
    } else {
        band::POOR
    }
}

/// Higher ROE (in percent) is better; an ROE of exactly 20.0 lands in
/// the 80 band.
pub fn score_roe(roe: f64) -> i32 {
    if roe > thresholds::ROE_EXCELLENT {
        band::EXCELLENT
    } else if roe > thresholds::ROE_GOOD {
        band::GOOD
    } else {
        band::POOR
    }
}

/// Lower EV/EBITDA is better.
pub fn score_ev_to_ebitda(ev_to_ebitda: f64) -> i32 {
    if ev_to_ebitda < thresholds::EV_EBITDA_EXCELLENT {
        band::EXCELLENT
    } else if ev_to_ebitda < thresholds::EV_EBITDA_GOOD {
        band::FAIR
    } else {
        band::VERY_POOR
    }
}

/// Higher EPS (in dollars) is better.
pub fn score_eps(eps: f64) -> i32 {
    if eps > thresholds::EPS_EXCELLENT {
        band::EXCELLENT
    } else if eps > thresholds::EPS_GOOD {
        band::FAIR
    } else {
        band::VERY_POOR
    }
}

/// Dispatch to the per-metric scoring function.
pub fn band_score(metric: Metric, value: f64) -> i32 {
    match metric {
        Metric::PeRatio => score_pe_ratio(value),
        Metric::Roe => score_roe(value),
        Metric::EvToEbitda => score_ev_to_ebitda(value),
        Metric::Eps => score_eps(value),
    }
}
