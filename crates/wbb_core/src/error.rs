use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Breakpoint values must be non-decreasing when ordered by percentile.
    /// A decreasing sequence means the upstream benchmark table is corrupt,
    /// and resolving against it would produce wrong (not merely missing)
    /// percentiles, so store construction refuses the table outright.
    #[error("malformed benchmark for {metric} [{category}]: value at p{pctl} is below value at p{prev_pctl}")]
    MalformedBenchmark {
        metric: String,
        category: String,
        prev_pctl: u8,
        pctl: u8,
    },

    #[error("invalid input in column '{column}': expected a number, found {found:?}")]
    InvalidInput { column: String, found: String },

    #[error("missing required column: {column}")]
    MissingColumn { column: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
