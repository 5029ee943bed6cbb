//! analysis-cli: terminal front end for the fundamental scoring engine.
//!
//! Usage:
//!   cargo run -p analysis-cli -- AAPL MSFT
//!   cargo run -p analysis-cli -- --all          # rank every known ticker
//!   cargo run -p analysis-cli -- --json AAPL    # raw response envelope

use analysis_orchestrator::AnalysisService;
use metrics_repository::StaticMetricsRepository;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "analysis_cli=info,analysis_orchestrator=warn".into()),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = args.iter().any(|a| a == "--json");
    let rank_all = args.iter().any(|a| a == "--all");
    let tickers: Vec<&String> = args.iter().filter(|a| !a.starts_with("--")).collect();

    if !rank_all && tickers.is_empty() {
        anyhow::bail!("usage: analysis-cli [--json] <TICKER>... | analysis-cli [--json] --all");
    }

    let repository = Arc::new(StaticMetricsRepository::with_reference_data());
    let service = AnalysisService::new(repository);

    if rank_all {
        return print_ranking(&service, json_output).await;
    }

    tracing::info!(count = tickers.len(), "analyzing requested tickers");
    for ticker in tickers {
        let response = service.analyze(ticker).await;
        if json_output {
            println!("{}", serde_json::to_string_pretty(&response)?);
            continue;
        }
        match response.data() {
            Some(data) => {
                println!("{}", data.user_friendly_report);
                println!();
            }
            None => println!("❌ Error: {}", response.error().unwrap_or("unknown error")),
        }
    }

    Ok(())
}

/// Rank every known ticker by overall score, best first.
async fn print_ranking(service: &AnalysisService, json_output: bool) -> anyhow::Result<()> {
    let results = service.analyze_all().await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let mut rows: Vec<_> = results
        .values()
        .filter_map(|response| response.data())
        .map(|data| {
            (
                data.record.ticker.clone(),
                data.record.company_name.clone(),
                data.analysis.score,
                data.analysis.valuation,
            )
        })
        .collect();
    rows.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    println!("📊 Stock Rankings by Analysis Score:");
    println!("{}", "-".repeat(60));
    for (i, (ticker, company, score, valuation)) in rows.iter().enumerate() {
        println!(
            "{:2}. {:5} - {:25} | Score: {:5.1} | {}",
            i + 1,
            ticker,
            company,
            score,
            valuation
        );
    }

    Ok(())
}
