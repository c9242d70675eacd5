use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

pub fn handle_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "buildver", &mut std::io::stdout());
    Ok(())
}

pub fn handle_help() -> anyhow::Result<()> {
    Cli::command().print_long_help()?;
    Ok(())
}
