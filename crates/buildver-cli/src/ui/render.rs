//! Rendering primitives for CLI output.

use super::context::UiContext;
use super::theme::{dim, Badge};

/// Render a badge with optional message.
///
/// Plain mode keeps the message unadorned so output stays script-friendly.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    if !ctx.mode.is_pretty() {
        return message.to_string();
    }
    let colored_badge = kind.paint(kind.display(ctx.unicode), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", dim(&format!("{}:", key), ctx.color), value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    dim(text, ctx.color)
}

/// Print an error and optional hint to stderr.
pub fn print_error(ctx: &UiContext, message: &str, hint_text: Option<&str>) {
    eprintln!("{}", badge(ctx, Badge::Err, message));
    if let Some(text) = hint_text {
        eprintln!("{}", hint(ctx, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::mode::OutputMode;

    fn plain() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty() -> UiContext {
        UiContext {
            is_tty: true,
            color: false,
            unicode: false,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_badge_plain_is_message_only() {
        assert_eq!(badge(&plain(), Badge::Ok, "done"), "done");
    }

    #[test]
    fn test_badge_pretty_prefixes_badge() {
        assert_eq!(badge(&pretty(), Badge::Ok, "done"), "[OK] done");
    }

    #[test]
    fn test_kv_modes() {
        assert_eq!(kv(&plain(), "Built At", "now"), "built_at=now");
        assert_eq!(kv(&pretty(), "Built At", "now"), "Built At: now");
    }
}
