//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services work against `BufRead`/`Write` so tests can drive them in memory.

mod query;

pub use query::{Answers, DataSource, QueryOptions, QueryService, QuerySummary};
