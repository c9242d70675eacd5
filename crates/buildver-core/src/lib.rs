//! # buildver core
//!
//! Core library for buildver - version bookkeeping and build history for a
//! project that ships packages built by an external tool.
//!
//! ## Architecture
//!
//! - **version**: the VERSION file and version modifiers (`+maj`, `+min`, `+rev`, `pass`)
//! - **report**: the bounded, newest-first build report
//! - **builder**: the packaging build seam and its command implementation
//! - **project**: `check` / `set` / `build` as plain functions
//! - **layout**: where the files live inside a project
//!
//! Every operation takes the project directory explicitly; resolving a
//! default is the caller's job.

pub mod builder;
pub mod error;
pub mod fs;
pub mod layout;
pub mod project;
pub mod report;
pub mod version;

pub use builder::{BuildOutcome, Builder, CommandBuilder};
pub use error::{BuildverError, Result};
pub use project::{
    build_project, build_version, check_project, prepare_build, set_version, BuildReport,
    ProjectStatus, VersionUpdate,
};
pub use report::{build_history, latest_build, record_build, BuildRecord, LEDGER_CAPACITY};
pub use version::{apply_modifier, read_version, write_version, Modifier};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
