//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the query contract.
/// These are independent of I/O and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("no question provided")]
    MissingQuestion,

    #[error("no data provided")]
    MissingData,
}
