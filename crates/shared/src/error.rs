#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not parse {field} from {input:?}")]
    Parse { field: &'static str, input: String },
    #[error("No value supplied for {field}")]
    MissingInput { field: &'static str },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("Number of days must be at least 1, got {0}")]
    InvalidDays(i64),
    #[error("Volatility must not be negative, got {0}")]
    NegativeVolatility(f64),
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
