//! Application-level utilities for the buildver CLI.
//!
//! This module provides:
//! - Project directory and config path resolution
//! - The per-invocation context handed to command handlers

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
