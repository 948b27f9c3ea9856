use std::io;
use std::process;

use clap::Parser;
use gq::cli::commands::{execute_command, print_completions, resolve_settings};
use gq::cli::{output, Cli, CliResult};
use gq::config::Settings;
use gq::exitcode;
use gq::infrastructure::ServiceContainer;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(()) => exitcode::OK,
        Err(e) => {
            output::error(&e);
            e.exit_code()
        }
    };
    process::exit(code);
}

fn run(cli: &Cli) -> CliResult<()> {
    if let Some(shell) = cli.completions {
        return print_completions(shell, &mut io::stdout().lock());
    }

    let settings = resolve_settings(cli)?;
    setup_logging(&settings);
    tracing::debug!("settings: {:?}", settings);

    let container = ServiceContainer::new(settings);
    execute_command(cli, &container)?;
    Ok(())
}

fn setup_logging(settings: &Settings) {
    // RUST_LOG wins over the -v/-x switches
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level()));

    // Results go to stdout, so logs must go to stderr
    let span_events = if settings.debug {
        FmtSpan::ENTER | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match settings.log_level() {
        "info" => tracing::info!("Debug mode: info"),
        "debug" => tracing::debug!("Debug mode: debug"),
        "trace" => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
