//! gq: ask a question about the data you send to it
//!
//! Layers, from the inside out:
//! - [`domain`]: question, data unit and the answer transformation
//! - [`application`]: query processing over readers and writers
//! - [`infrastructure`]: terminal probe and service wiring
//! - [`cli`]: argument parsing, dispatch and exit codes

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
