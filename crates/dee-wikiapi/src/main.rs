mod cli;
mod commands;
mod config;
mod models;

use std::process::ExitCode;

use clap::Parser;

use crate::{
    cli::{Cli, Commands},
    models::{AppError, ErrorJson, OutputMode},
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mode = OutputMode {
        json: cli.global.json,
        quiet: cli.global.quiet,
        verbose: cli.global.verbose,
    };

    match dispatch(cli.command, &mode) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err, &mode);
            ExitCode::from(1)
        }
    }
}

fn dispatch(command: Commands, mode: &OutputMode) -> Result<(), AppError> {
    match command {
        Commands::Get(args) => commands::get(&args, mode),
        Commands::Search(args) => commands::search(&args, mode),
        Commands::Chart(args) => commands::chart(&args, mode),
        Commands::Config(args) => commands::config(&args, mode),
    }
}

/// JSON errors go to stdout so scripts read a single stream; plain errors go to stderr.
fn report(err: &AppError, mode: &OutputMode) {
    if !mode.json {
        eprintln!("error: {err}");
        if mode.verbose {
            let mut cause = std::error::Error::source(err);
            while let Some(inner) = cause {
                eprintln!("  caused by: {inner}");
                cause = inner.source();
            }
        }
        return;
    }

    let body = ErrorJson {
        ok: false,
        error: err.to_string(),
        code: err.code().to_string(),
    };
    match serde_json::to_string(&body) {
        Ok(text) => println!("{text}"),
        Err(_) => println!(r#"{{"ok":false,"error":"Internal serialization error","code":"SERIALIZE"}}"#),
    }
}
