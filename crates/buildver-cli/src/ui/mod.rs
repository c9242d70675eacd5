//! UI primitives for the buildver CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and their colors
//! - **Render**: Badges, key-value lines, hints, errors
//! - **Progress**: Spinner for the build step
//! - **Format**: Elapsed-time and timestamp formatting

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use theme::Badge;

pub use format::{elapsed_since, format_timestamp};
pub use progress::Spinner;
pub use render::{badge, kv, print_error};
