use thiserror::Error;

/// Errors raised by the segmentation engine.
///
/// Finding no flight segments is not an error; the engine reports that as an explicit
/// `None` result instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetricsError {
    #[error("flight data contains no samples")]
    EmptySeries,

    #[error("column '{column}' has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("elapsed_time must be monotonically non-decreasing (row {idx} moves backwards)")]
    NonMonotonicTime { idx: usize },

    #[error("flight mode has not been classified for this series")]
    Unclassified,

    #[error("odd number of flight mode transitions ({count}); the log likely ends mid-air")]
    OddTransitionCount { count: usize },

    #[error("cannot summarize zero flight logs")]
    EmptyAggregate,

    #[error("could not parse log datetime from '{value}'")]
    InvalidLogDatetime { value: String },
}
