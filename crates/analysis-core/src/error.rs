use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("{0} not available")]
    TickerNotFound(String),

    #[error("ticker symbol is required")]
    EmptyTicker,

    #[error("Invalid reference data: {0}")]
    InvalidData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
