//! Built-in reference table: a fixed snapshot of metrics for seven
//! large-cap tickers. In production this data would come from an
//! external provider; the snapshot keeps the pipeline fully local
//! and deterministic.

use analysis_core::MetricsRecord;

pub fn reference_data() -> Vec<MetricsRecord> {
    vec![
        MetricsRecord {
            ticker: "AAPL".to_string(),
            company_name: "Apple Inc.".to_string(),
            sector: "Technology".to_string(),
            industry: "Consumer Electronics".to_string(),
            pe_ratio: Some(28.5),
            roe: Some(22.4),
            ev_to_ebitda: Some(18.2),
            eps: Some(6.05),
            market_cap: Some(2_800_000_000_000.0),
            close_price: Some(175.84),
            rank: Some(15),
            debt_to_equity: Some(0.31),
            total_score: Some(85),
            fundamental_score: Some(82),
            technical_score: Some(88),
            quant_score: Some(85),
            trade_date: Some("2024-01-15".to_string()),
        },
        MetricsRecord {
            ticker: "MSFT".to_string(),
            company_name: "Microsoft Corporation".to_string(),
            sector: "Technology".to_string(),
            industry: "Software".to_string(),
            pe_ratio: Some(32.1),
            roe: Some(18.7),
            ev_to_ebitda: Some(22.4),
            eps: Some(9.65),
            market_cap: Some(2_750_000_000_000.0),
            close_price: Some(370.73),
            rank: Some(28),
            debt_to_equity: Some(0.47),
            total_score: Some(78),
            fundamental_score: Some(75),
            technical_score: Some(82),
            quant_score: Some(77),
            trade_date: Some("2024-01-15".to_string()),
        },
        MetricsRecord {
            ticker: "GOOGL".to_string(),
            company_name: "Alphabet Inc.".to_string(),
            sector: "Technology".to_string(),
            industry: "Internet Services".to_string(),
            pe_ratio: Some(24.8),
            roe: Some(15.2),
            ev_to_ebitda: Some(14.7),
            eps: Some(5.80),
            market_cap: Some(1_650_000_000_000.0),
            close_price: Some(139.69),
            rank: Some(20),
            debt_to_equity: Some(0.12),
            total_score: Some(82),
            fundamental_score: Some(80),
            technical_score: Some(85),
            quant_score: Some(81),
            trade_date: Some("2024-01-15".to_string()),
        },
        MetricsRecord {
            ticker: "TSLA".to_string(),
            company_name: "Tesla Inc.".to_string(),
            sector: "Consumer Discretionary".to_string(),
            industry: "Electric Vehicles".to_string(),
            pe_ratio: Some(48.9),
            roe: Some(19.3),
            ev_to_ebitda: Some(32.1),
            eps: Some(4.30),
            market_cap: Some(650_000_000_000.0),
            close_price: Some(207.83),
            rank: Some(95),
            debt_to_equity: Some(0.17),
            total_score: Some(65),
            fundamental_score: Some(60),
            technical_score: Some(72),
            quant_score: Some(63),
            trade_date: Some("2024-01-15".to_string()),
        },
        MetricsRecord {
            ticker: "NVDA".to_string(),
            company_name: "NVIDIA Corporation".to_string(),
            sector: "Technology".to_string(),
            industry: "Semiconductors".to_string(),
            pe_ratio: Some(64.2),
            roe: Some(28.1),
            ev_to_ebitda: Some(45.3),
            eps: Some(12.28),
            market_cap: Some(1_750_000_000_000.0),
            close_price: Some(722.48),
            rank: Some(75),
            debt_to_equity: Some(0.24),
            total_score: Some(70),
            fundamental_score: Some(68),
            technical_score: Some(75),
            quant_score: Some(67),
            trade_date: Some("2024-01-15".to_string()),
        },
        MetricsRecord {
            ticker: "JPM".to_string(),
            company_name: "JPMorgan Chase & Co.".to_string(),
            sector: "Financial Services".to_string(),
            industry: "Banking".to_string(),
            pe_ratio: Some(12.8),
            roe: Some(16.4),
            ev_to_ebitda: Some(8.9),
            eps: Some(15.36),
            market_cap: Some(485_000_000_000.0),
            close_price: Some(168.12),
            rank: Some(8),
            debt_to_equity: Some(1.18),
            total_score: Some(88),
            fundamental_score: Some(92),
            technical_score: Some(85),
            quant_score: Some(87),
            trade_date: Some("2024-01-15".to_string()),
        },
        MetricsRecord {
            ticker: "WMT".to_string(),
            company_name: "Walmart Inc.".to_string(),
            sector: "Consumer Staples".to_string(),
            industry: "Retail".to_string(),
            pe_ratio: Some(26.7),
            roe: Some(12.8),
            ev_to_ebitda: Some(12.4),
            eps: Some(2.32),
            market_cap: Some(460_000_000_000.0),
            close_price: Some(165.89),
            rank: Some(45),
            debt_to_equity: Some(0.56),
            total_score: Some(75),
            fundamental_score: Some(78),
            technical_score: Some(73),
            quant_score: Some(74),
            trade_date: Some("2024-01-15".to_string()),
        },
    ]
}
