//! Error types for record parsing and catalogue loading.

use thiserror::Error;

/// Reasons a single catalogue line is rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// The line did not split into exactly nine fields.
    #[error("expected 9 fields, found {found}")]
    FieldCount {
        /// Number of fields the line actually contained.
        found: usize,
    },
    /// A numeric field could not be parsed.
    #[error("invalid number in {field}: {value:?}")]
    InvalidNumber {
        /// Name of the offending field.
        field: &'static str,
        /// Raw token that failed to parse.
        value: String,
    },
    /// A sexagesimal angle did not have exactly three components.
    #[error("malformed {field}: {value:?}")]
    MalformedAngle {
        /// Name of the offending field.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
    /// Distances must be zero or positive.
    #[error("distance must be zero or positive: {0}")]
    NegativeDistance(f64),
}

impl RecordError {
    /// Whether the line was well formed but carried a value outside its domain.
    ///
    /// All other variants describe malformed records.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, RecordError::NegativeDistance(_))
    }
}

/// Failures of the line source feeding a [`Catalogue`](crate::Catalogue).
#[derive(Error, Debug)]
pub enum CatalogueError {
    /// The source could not be opened or failed while reading.
    #[error("error reading catalogue: {source}")]
    SourceUnavailable {
        /// Underlying I/O failure.
        #[from]
        source: std::io::Error,
    },
}
