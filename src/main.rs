//! distmodel CLI - flattens distribution overlay models
//!
//! Usage: distmodel <COMMAND>
//!
//! Commands:
//!   run      Flatten, prune, and write reports and artifact descriptors
//!   flatten  Flatten one subtree and print its tree report
//!   check    Decode and link a VFS document

use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use distmodel::presentation::output::emit;
use distmodel::presentation::TextRenderer;

mod cli;
mod commands;

use cli::{Cli, Commands};

/// Environment variable holding a `tracing` filter directive
const LOG_ENV: &str = "DISTMODEL_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let renderer = TextRenderer {
        unicode: std::io::stdout().is_terminal(),
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Run {
            config,
            document,
            output_dir,
        } => commands::cmd_run(config, document, output_dir, cli.json, &renderer),
        Commands::Flatten {
            input,
            path,
            output,
        } => commands::cmd_flatten(input, path, output, cli.json),
        Commands::Check { input } => commands::cmd_check(input, cli.json, &renderer),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.json {
                let _ = emit(serde_json::json!({
                    "event": "error",
                    "message": format!("{:#}", err),
                }));
            } else {
                eprintln!("[ERROR] {:#}", err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
