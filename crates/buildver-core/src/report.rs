//! The build report: a newest-first log of successful builds.
//!
//! Each line is `"<version> <unix-timestamp>"`. The file never holds more
//! than [`LEDGER_CAPACITY`] lines; older records fall off the end on each
//! update. Updates are serialized through an advisory lock on a file next to
//! the report. The lock file itself stays in place; the OS releases the lock
//! when the holder exits, however it exits.

use std::fs::{self, File, OpenOptions, TryLockError};
use std::path::Path;
use std::thread::sleep;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::Serialize;

use crate::error::{BuildverError, Result};
use crate::fs::write_atomic;
use crate::layout;

/// Maximum number of records kept in the build report.
pub const LEDGER_CAPACITY: usize = 999;

const LOCK_RETRY_INTERVAL: Duration = Duration::from_millis(50);
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// One successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildRecord {
    pub version: String,
    /// Unix timestamp, in seconds
    pub timestamp: i64,
}

impl BuildRecord {
    /// Parse a report line: exactly two whitespace-separated tokens.
    pub fn parse_line(line: &str) -> Result<Self> {
        let malformed = || BuildverError::MalformedBuildReport {
            line: line.to_string(),
        };
        let mut tokens = line.split_whitespace();
        let (Some(version), Some(timestamp), None) = (tokens.next(), tokens.next(), tokens.next())
        else {
            return Err(malformed());
        };
        let timestamp = timestamp.parse().map_err(|_| malformed())?;
        Ok(Self {
            version: version.to_string(),
            timestamp,
        })
    }

    pub fn to_line(&self) -> String {
        format!("{} {}", self.version, self.timestamp)
    }
}

/// Most recent build of the project, if any.
///
/// Returns `Ok(None)` when the report is missing or its first line is empty.
///
/// # Errors
///
/// Returns `BuildverError::MalformedBuildReport` if the first line is not
/// `<version> <timestamp>`.
pub fn latest_build(project_dir: &Path) -> Result<Option<BuildRecord>> {
    let path = layout::build_report_file(project_dir);
    if !path.is_file() {
        return Ok(None);
    }
    let contents = fs::read_to_string(&path)?;
    match contents.lines().next() {
        None | Some("") => Ok(None),
        Some(line) => BuildRecord::parse_line(line).map(Some),
    }
}

/// Up to `limit` records, newest first. Blank lines are skipped.
pub fn build_history(project_dir: &Path, limit: usize) -> Result<Vec<BuildRecord>> {
    let path = layout::build_report_file(project_dir);
    if !path.is_file() {
        return Ok(Vec::new());
    }
    fs::read_to_string(&path)?
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(limit)
        .map(BuildRecord::parse_line)
        .collect()
}

/// Prepend a record for `version`, stamped with the current time.
///
/// Creates `.pyrustic/buildver/` and an empty report when missing, then
/// rewrites the report keeping only the newest [`LEDGER_CAPACITY`] lines.
pub fn record_build(version: &str, project_dir: &Path) -> Result<BuildRecord> {
    let record = BuildRecord {
        version: version.to_string(),
        timestamp: Utc::now().timestamp(),
    };

    let dir = layout::state_dir(project_dir);
    if !dir.is_dir() {
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "created build report directory");
    }
    let path = layout::build_report_file(project_dir);
    if !path.is_file() {
        fs::write(&path, "")?;
    }

    let _lock = ReportLock::acquire(&layout::build_report_lock_file(project_dir))?;

    let existing = fs::read_to_string(&path)?;
    let mut lines = Vec::with_capacity(LEDGER_CAPACITY);
    lines.push(record.to_line());
    lines.extend(existing.lines().map(str::to_string));
    if lines.len() > LEDGER_CAPACITY {
        tracing::debug!(
            dropped = lines.len() - LEDGER_CAPACITY,
            "dropping oldest build records"
        );
        lines.truncate(LEDGER_CAPACITY);
    }

    let mut data = lines.join("\n");
    data.push('\n');
    write_atomic(&path, data.as_bytes())?;
    tracing::info!(version = %record.version, timestamp = record.timestamp, "recorded build");
    Ok(record)
}

/// Exclusive hold on the build report, released when dropped.
#[derive(Debug)]
pub struct ReportLock {
    file: File,
}

impl ReportLock {
    /// Lock the lock file, waiting briefly if another process holds it.
    ///
    /// The file is created if missing. A leftover file from a process that
    /// died does not block anyone since the lock went away with the process.
    ///
    /// # Errors
    ///
    /// Returns `BuildverError::LedgerLocked` if the lock is still held after
    /// the timeout.
    pub fn acquire(path: &Path) -> Result<Self> {
        Self::acquire_with_timeout(path, LOCK_TIMEOUT)
    }

    pub fn acquire_with_timeout(path: &Path, timeout: Duration) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        let started = Instant::now();
        loop {
            match file.try_lock() {
                Ok(()) => return Ok(Self { file }),
                Err(TryLockError::WouldBlock) => {
                    if started.elapsed() >= timeout {
                        return Err(BuildverError::LedgerLocked {
                            path: path.to_path_buf(),
                        });
                    }
                    sleep(LOCK_RETRY_INTERVAL);
                }
                Err(TryLockError::Error(err)) => return Err(err.into()),
            }
        }
    }
}

impl Drop for ReportLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
