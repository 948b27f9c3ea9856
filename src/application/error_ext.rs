//! Error conversion helpers for stream I/O
//!
//! Provides an extension trait for attaching context to `io::Result`.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add a short description of the failed action.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{answer}").with_io_context(|| "write result".into())?;
    /// ```
    fn with_io_context(self, context: impl FnOnce() -> String) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_io_context(self, context: impl FnOnce() -> String) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: context(),
            source,
        })
    }
}
