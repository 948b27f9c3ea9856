//! Command dispatch: settings resolution, completions and query execution

use std::io::{self, BufRead, BufWriter, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument, warn};

use crate::application::services::{DataSource, QuerySummary};
use crate::application::IoResultExt;
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::config::Settings;
use crate::domain::InputMode;
use crate::infrastructure::ServiceContainer;

/// Build settings from config file, environment and flags.
pub fn resolve_settings(cli: &Cli) -> CliResult<Settings> {
    Ok(Settings::resolve(cli.config.as_deref(), &cli.overrides())?)
}

/// Write the completion script for `shell`.
pub fn print_completions<W: Write>(shell: Shell, out: &mut W) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    out.flush().with_io_context(|| "write completions".into())?;
    Ok(())
}

/// Run the query against the process's stdin and stdout.
pub fn execute_command(cli: &Cli, container: &ServiceContainer) -> CliResult<QuerySummary> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run_query(cli, container, stdin.lock(), &mut out)
}

/// Run the query against explicit input and output.
///
/// The input is only consumed in stream mode.
#[instrument(skip_all)]
pub fn run_query<R: BufRead, W: Write>(
    cli: &Cli,
    container: &ServiceContainer,
    input: R,
    out: &mut W,
) -> CliResult<QuerySummary> {
    if cli.toggle {
        debug!("toggle flag set (no effect)");
    }

    let mode = container.terminal.input_mode();
    debug!("input mode: {:?}", mode);

    let source = match mode {
        InputMode::Argument => DataSource::Argument(cli.data.clone()),
        InputMode::Stream => {
            if let Some(data) = &cli.data {
                warn!("stdin is piped, ignoring data argument {:?}", data);
            }
            DataSource::Stream(input)
        }
    };

    let question = container.settings.question.as_deref();
    let summary = container.query.process(question, source, out)?;
    info!("answered {} data unit(s) in {:?} mode", summary.answers, mode);
    Ok(summary)
}
