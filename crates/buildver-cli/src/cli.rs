use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use buildver_core::VERSION;

const MODIFIERS_HELP: &str = "\
Use \"+maj\", \"+min\" and \"+rev\" to increment the current version of your
project. These version modifiers increment the \"major\", \"minor\", and
\"revision\" numbers respectively.

 Current | Modifier | Next   |
---------|----------|--------|
 1.0.0   | +rev     | 1.0.1  |
 1.0.1   | +min     | 1.1.0  |
 1.1.0   | +maj     | 2.0.0  |

By default, the command \"build\" will build a distribution package, then
automatically increment the revision number of the current version. If you
don't want the version number incremented automatically, use the \"pass\"
modifier:
  $ buildver build then pass";

/// buildver - Build and versioning tool for Python projects
#[derive(Parser)]
#[command(name = "buildver")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
#[command(after_long_help = MODIFIERS_HELP)]
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short, long, global = true, env = "BUILDVER_PROJECT", value_name = "DIR")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `set` command
#[derive(Args)]
pub struct SetArgs {
    /// New version, or a modifier: +maj, +min, +rev, pass
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for the `build` command
#[derive(Args)]
pub struct BuildArgs {
    /// Optional `then <VERSION>` clause choosing the version after the build
    #[arg(value_name = "then VERSION", allow_hyphen_values = true)]
    pub then: Vec<String>,
}

/// Arguments for the `history` command
#[derive(Args)]
pub struct HistoryArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the project version and its latest build
    Check(CheckArgs),

    /// Set a new version
    Set(SetArgs),

    /// Build the project, then set the next version (default: +rev)
    Build(BuildArgs),

    /// List recorded builds, newest first
    History(HistoryArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
