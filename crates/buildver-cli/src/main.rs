//! buildver CLI - Build and versioning tool for Python projects
//!
//! This is the command-line interface for buildver. It resolves the project
//! directory once and hands it to the core library.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{build, check, history, misc, set};
use crate::errors::exit_code_for;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init();

    if let Err(e) = run(&cli) {
        let ui_ctx = UiContext::from_env(false, cli.no_color);
        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);
        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => (&error[..idx], Some(&error[idx + 1..])),
        None => (error, None),
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        return misc::handle_help();
    };
    if let Commands::Completions(args) = command {
        return misc::handle_completions(args);
    }

    let ctx = AppContext::new(cli)?;
    match command {
        Commands::Check(args) => check::handle_check(&ctx, args),
        Commands::Set(args) => set::handle_set(&ctx, args),
        Commands::Build(args) => build::handle_build(&ctx, args),
        Commands::History(args) => history::handle_history(&ctx, args),
        Commands::Completions(args) => misc::handle_completions(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (message, hint) = split_hint("Missing VERSION file.\nHint: Run `buildver set 0.0.1`.");
        assert_eq!(message, "Missing VERSION file.");
        assert_eq!(hint, Some("Hint: Run `buildver set 0.0.1`."));
    }

    #[test]
    fn test_split_hint_without_hint() {
        assert_eq!(split_hint("boom"), ("boom", None));
    }
}
