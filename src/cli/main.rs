use std::io;
use std::process;

use anstyle::{AnsiColor, Style};
use atty::Stream;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod error;
mod output;

use commands::Command;
use config::Config;
use error::{CliError, Result};
use output::Output;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("TINCTURE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<()> {
    let app = cli::build_cli();
    let global_matches = app.get_matches();

    let interactive_mode = match global_matches
        .get_one::<String>("color-mode")
        .map(String::as_str)
    {
        Some("24bit") => true,
        Some("off") => false,
        _ => atty::is(Stream::Stdout),
    };

    let config = Config {
        padding: 2,
        swatch_width: 6,
        interactive_mode,
    };

    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();
    let mut out = Output::new(&mut stdout_lock);

    if let Some((subcommand, matches)) = global_matches.subcommand() {
        tracing::debug!(subcommand, interactive_mode, "running command");
        Command::from_string(subcommand).execute(&mut out, matches, &config)?;
    }

    Ok(())
}

fn main() {
    init_logging();

    match run() {
        Ok(()) => {}
        Err(CliError::StdoutClosed) => {}
        Err(err) => {
            let style = if atty::is(Stream::Stderr) {
                Style::new().fg_color(Some(AnsiColor::Red.into())).bold()
            } else {
                Style::new()
            };
            eprintln!(
                "{}[tincture error]{}: {}",
                style.render(),
                style.render_reset(),
                err
            );
            process::exit(1);
        }
    }
}
