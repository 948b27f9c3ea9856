//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::config::CliOverrides;

const LONG_ABOUT: &str = "\
Ask a question about the data you send to it.

Data is read from stdin line by line when stdin is piped or redirected,
otherwise from the single DATA argument. Every data unit is combined with
the question and written to stdout in uppercase.";

/// A CLI to ask questions about the data
#[derive(Parser, Debug)]
#[command(name = "gq")]
#[command(author, version, about, long_about = LONG_ABOUT)]
pub struct Cli {
    /// Question about the data sent
    #[arg(short, long)]
    pub question: Option<String>,

    /// Verbose output (info logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Debug mode (debug logging on stderr)
    #[arg(short = 'x', long)]
    pub debug: bool,

    /// Config file (default is $HOME/.gq.yaml)
    #[arg(short, long, env = "GQ_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Toggle (accepted, no effect)
    #[arg(short, long)]
    pub toggle: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Data to ask the question about (ignored when stdin is piped)
    pub data: Option<String>,
}

impl Cli {
    /// Flags that override configured settings.
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            question: self.question.clone(),
            verbose: self.verbose,
            debug: self.debug,
        }
    }
}
