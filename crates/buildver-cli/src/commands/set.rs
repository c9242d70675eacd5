use buildver_core::{set_version, Modifier, VersionUpdate};

use crate::app::AppContext;
use crate::cli::SetArgs;
use crate::errors::from_core;
use crate::ui::{badge, Badge, UiContext};

pub fn handle_set(ctx: &AppContext, args: &SetArgs) -> anyhow::Result<()> {
    let modifier = Modifier::parse(&args.value);
    let update = set_version(ctx.project_dir(), &modifier).map_err(from_core)?;
    if !ctx.quiet() {
        print_update(&ctx.ui_context(false), &update);
    }
    Ok(())
}

/// Report the outcome of a version change.
pub fn print_update(ui: &UiContext, update: &VersionUpdate) {
    if update.changed {
        let message = format!(
            "VERSION file updated from {} to {}",
            update.from, update.to
        );
        println!("{}", badge(ui, Badge::Info, &message));
    } else {
        println!("{}", badge(ui, Badge::Warn, "VERSION file not updated"));
    }
}
