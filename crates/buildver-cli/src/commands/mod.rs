//! Command handlers, one module per subcommand.

pub mod build;
pub mod check;
pub mod history;
pub mod misc;
pub mod set;
