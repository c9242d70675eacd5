//! Spinner for the build step, using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use std::time::Duration;

use super::context::UiContext;
use super::render::badge;
use super::theme::Badge;

/// A spinner for indeterminate progress.
///
/// Without a TTY it prints the message once and stays silent afterwards.
pub struct Spinner<'a> {
    ctx: &'a UiContext,
    message: String,
    bar: Option<IndicatifBar>,
}

impl<'a> Spinner<'a> {
    /// Create a new spinner with the given message.
    pub fn new(ctx: &'a UiContext, message: &str) -> Self {
        let bar = if ctx.allows_animation() {
            let pb = IndicatifBar::new_spinner();
            let (template, ticks): (&str, &[&str]) = if ctx.unicode {
                (
                    "{spinner:.cyan} {msg} ...",
                    &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", ""],
                )
            } else {
                ("{spinner} {msg} ...", &["|", "/", "-", "\\", ""])
            };
            if let Ok(style) = ProgressStyle::default_spinner().template(template) {
                pb.set_style(style.tick_strings(ticks));
            }
            pb.set_message(message.to_string());
            Some(pb)
        } else {
            None
        };

        Self {
            ctx,
            message: message.to_string(),
            bar,
        }
    }

    /// Start the spinner (prints initial line or begins animation).
    pub fn start(&self) {
        match &self.bar {
            Some(bar) => bar.enable_steady_tick(Duration::from_millis(80)),
            None => println!("{} ...", self.message),
        }
    }

    /// Finish spinner with success message.
    pub fn finish(&self, message: &str) {
        self.clear();
        println!("{}", badge(self.ctx, Badge::Ok, message));
    }

    /// Stop the animation without printing anything.
    pub fn clear(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
