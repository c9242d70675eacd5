use chrono::Utc;

use buildver_core::check_project;

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::errors::from_core;
use crate::ui::{elapsed_since, format_timestamp};

pub fn handle_check(ctx: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let status = check_project(ctx.project_dir()).map_err(from_core)?;

    if ui.mode.is_json() {
        let latest = status.latest_build.as_ref().map(|record| {
            serde_json::json!({
                "version": record.version,
                "timestamp": record.timestamp,
                "built_at": format_timestamp(record.timestamp, false),
            })
        });
        let value = serde_json::json!({
            "name": status.name,
            "version": status.version,
            "latest_build": latest,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if ctx.quiet() {
        println!("{}", status.version);
        return Ok(());
    }

    println!("{} v{} (source)", status.name, status.version);
    if let Some(record) = &status.latest_build {
        let elapsed = elapsed_since(record.timestamp, Utc::now());
        let elapsed = if elapsed.is_empty() {
            "just now".to_string()
        } else {
            elapsed
        };
        println!(".whl v{} (package) built {}", record.version, elapsed);
    }
    Ok(())
}
