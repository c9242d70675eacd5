use chrono::Utc;

use buildver_core::build_history;

use crate::app::AppContext;
use crate::cli::HistoryArgs;
use crate::constants::DEFAULT_HISTORY_LIMIT;
use crate::errors::from_core;
use crate::ui::{elapsed_since, format_timestamp, kv};

pub fn handle_history(ctx: &AppContext, args: &HistoryArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let limit = args.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    let records = build_history(ctx.project_dir(), limit).map_err(from_core)?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        if !ctx.quiet() {
            println!("No builds recorded.");
        }
        return Ok(());
    }

    let now = Utc::now();
    for record in &records {
        if ui.mode.is_pretty() {
            let elapsed = elapsed_since(record.timestamp, now);
            let built = format_timestamp(record.timestamp, true);
            let value = if elapsed.is_empty() {
                built
            } else {
                format!("{} ({})", built, elapsed)
            };
            println!("{}", kv(&ui, &format!("v{}", record.version), &value));
        } else {
            println!("{} {}", record.version, record.timestamp);
        }
    }
    Ok(())
}
