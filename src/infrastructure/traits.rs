//! I/O boundary traits for testability
//!
//! These traits abstract process-level I/O facts, allowing the command
//! layer to be tested without a real terminal.

use std::io::IsTerminal;

use crate::domain::InputMode;

/// Terminal abstraction: tells whether stdin is interactive.
pub trait Terminal: Send + Sync {
    /// True when stdin is attached to an interactive terminal.
    fn stdin_is_interactive(&self) -> bool;

    /// Input mode derived from stdin's attachment.
    fn input_mode(&self) -> InputMode {
        InputMode::detect(self.stdin_is_interactive())
    }
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real terminal probe backed by the process's stdin.
#[derive(Debug, Default)]
pub struct RealTerminal;

impl Terminal for RealTerminal {
    fn stdin_is_interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }
}
