//! Domain layer: query values and the answer transformation
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod error;
pub mod query;

pub use error::DomainError;
pub use query::{Answer, DataUnit, InputMode, Question};
