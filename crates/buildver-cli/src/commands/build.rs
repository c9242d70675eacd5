use buildver_core::layout::project_name;
use buildver_core::{build_version, prepare_build, set_version, BuildReport, Modifier};

use crate::app::AppContext;
use crate::cli::BuildArgs;
use crate::errors::{from_core, CliError};
use crate::ui::Spinner;

use super::set::print_update;

const THEN_KEYWORD: &str = "then";

pub fn handle_build(ctx: &AppContext, args: &BuildArgs) -> anyhow::Result<()> {
    let config = ctx.config()?;
    let next = parse_then_clause(&args.then, config.next_modifier())?;
    let builder = config.builder()?;
    let project_dir = ctx.project_dir();

    let version = prepare_build(project_dir).map_err(from_core)?;

    let ui = ctx.ui_context(false);
    let spinner = Spinner::new(&ui, &format!("building v{}", version));
    if !ctx.quiet() {
        spinner.start();
    }

    let report = match build_version(&builder, project_dir, version) {
        Ok(report) => report,
        Err(err) => {
            spinner.clear();
            return Err(from_core(err));
        }
    };

    match report {
        BuildReport::Failed { error_text, .. } => {
            spinner.clear();
            Err(CliError::build_failed("Failed to build a distribution package", error_text).into())
        }
        BuildReport::Succeeded(record) => {
            let message = format!(
                "Successfully built '{}' v{} !",
                project_name(project_dir),
                record.version
            );
            if ctx.quiet() {
                spinner.clear();
            } else {
                spinner.finish(&message);
            }
            let update = set_version(project_dir, &next).map_err(from_core)?;
            if !ctx.quiet() {
                print_update(&ui, &update);
            }
            Ok(())
        }
    }
}

/// Accepts either nothing or exactly `then <VERSION|MODIFIER>`.
fn parse_then_clause(words: &[String], default: Modifier) -> anyhow::Result<Modifier> {
    match words {
        [] => Ok(default),
        [keyword, value] if keyword == THEN_KEYWORD => Ok(Modifier::parse(value)),
        _ => Err(CliError::invalid_input("Wrong usage of the command.").into()),
    }
}
