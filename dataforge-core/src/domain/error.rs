// dataforge-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Invalid row count for '{domain}': {count} (must be > 0)")]
    #[diagnostic(
        code(dataforge::domain::row_count),
        help("Each configured domain needs a strictly positive row count.")
    )]
    InvalidRowCount { domain: String, count: i64 },

    #[error("Probability weights for '{column}' sum to {sum:.6}, expected 1.0")]
    #[diagnostic(
        code(dataforge::domain::weights),
        help("Weighted-categorical probability vectors must sum to 1 (tolerance 1e-6).")
    )]
    InvalidWeights { column: String, sum: f64 },

    #[error("Weights for '{column}' have {weights} entries for {choices} choices")]
    #[diagnostic(code(dataforge::domain::weights_arity))]
    WeightArityMismatch {
        column: String,
        choices: usize,
        weights: usize,
    },

    #[error("Inverted date window: {start} > {end}")]
    #[diagnostic(
        code(dataforge::domain::date_window),
        help("The window start must not be after its end.")
    )]
    InvalidDateWindow { start: String, end: String },

    #[error("Column '{column}' has {values} values, table '{table}' expects {expected}")]
    #[diagnostic(code(dataforge::domain::column_length))]
    ColumnLengthMismatch {
        table: String,
        column: String,
        values: usize,
        expected: usize,
    },

    #[error("Duplicate column '{column}' in table '{table}'")]
    #[diagnostic(code(dataforge::domain::duplicate_column))]
    DuplicateColumn { table: String, column: String },

    #[error("Column '{0}' not found during derived-column evaluation")]
    #[diagnostic(
        code(dataforge::domain::unknown_column),
        help("Derived columns may only reference columns that already exist in the row.")
    )]
    UnknownColumn(String),

    #[error("Unknown domain '{0}'")]
    #[diagnostic(
        code(dataforge::domain::unknown_domain),
        help(
            "Valid domains: sales, hr, finance, operations, supply_chain, fraud, public_impact."
        )
    )]
    UnknownDomain(String),

    #[error("Column '{column}' holds {actual}, expected {expected}")]
    #[diagnostic(code(dataforge::domain::value_type))]
    ValueTypeMismatch {
        column: String,
        expected: &'static str,
        actual: &'static str,
    },
}
