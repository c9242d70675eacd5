use std::cell::Cell;
use std::fs;
use std::path::Path;

use buildver_core::layout;
use buildver_core::{
    build_project, build_version, latest_build, prepare_build, read_version, record_build,
    set_version, BuildOutcome, BuildReport, Builder, BuildverError, Modifier, LEDGER_CAPACITY,
};
use chrono::Utc;
use tempfile::tempdir;

struct FakeBuilder {
    outcome: BuildOutcome,
    calls: Cell<usize>,
}

impl FakeBuilder {
    fn new(outcome: BuildOutcome) -> Self {
        Self {
            outcome,
            calls: Cell::new(0),
        }
    }
}

impl Builder for FakeBuilder {
    fn run_build(&self, _project_dir: &Path) -> buildver_core::Result<BuildOutcome> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.outcome.clone())
    }
}

fn project_with_version(version: &str) -> tempfile::TempDir {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("VERSION"), version).expect("write VERSION");
    dir
}

#[test]
fn test_build_then_next_revision() {
    let project = project_with_version("1.0.0");
    let builder = FakeBuilder::new(BuildOutcome::succeeded());

    let report = build_project(&builder, project.path()).expect("build should succeed");
    let BuildReport::Succeeded(record) = report else {
        panic!("expected a successful build");
    };
    assert_eq!(record.version, "1.0.0");
    assert_eq!(builder.calls.get(), 1);

    let update = set_version(project.path(), &Modifier::IncrementRevision).unwrap();
    assert_eq!(update.from, "1.0.0");
    assert_eq!(update.to, "1.0.1");
    assert_eq!(
        read_version(project.path()).unwrap().as_deref(),
        Some("1.0.1")
    );
    let latest = latest_build(project.path()).unwrap().expect("latest build");
    assert_eq!(latest.version, "1.0.0");
}

#[test]
fn test_build_initializes_blank_version() {
    let project = project_with_version("  \n");
    let builder = FakeBuilder::new(BuildOutcome::succeeded());

    build_project(&builder, project.path()).expect("build should succeed");

    assert_eq!(fs::read_to_string(project.path().join("VERSION")).unwrap(), "0.0.0");
    assert_eq!(
        latest_build(project.path()).unwrap().map(|r| r.version),
        Some("0.0.0".to_string())
    );
}

#[test]
fn test_prepared_version_is_the_one_recorded() {
    let project = project_with_version("\n");
    let builder = FakeBuilder::new(BuildOutcome::succeeded());

    let version = prepare_build(project.path()).expect("prepare build");
    assert_eq!(version, "0.0.0");
    assert_eq!(fs::read_to_string(project.path().join("VERSION")).unwrap(), "0.0.0");
    assert_eq!(builder.calls.get(), 0);

    fs::write(project.path().join("VERSION"), "9.9.9").unwrap();
    let report = build_version(&builder, project.path(), version).expect("build");
    let BuildReport::Succeeded(record) = report else {
        panic!("expected a successful build");
    };
    assert_eq!(record.version, "0.0.0");
    assert_eq!(builder.calls.get(), 1);
}

#[test]
fn test_failed_build_changes_nothing() {
    let project = project_with_version("1.0.0");
    let builder = FakeBuilder::new(BuildOutcome::failed("setup.py not found"));

    let report = build_project(&builder, project.path()).expect("failed build is not an error");

    assert_eq!(
        report,
        BuildReport::Failed {
            version: "1.0.0".to_string(),
            error_text: "setup.py not found".to_string(),
        }
    );
    assert_eq!(fs::read_to_string(project.path().join("VERSION")).unwrap(), "1.0.0");
    assert!(!layout::build_report_file(project.path()).exists());
}

#[test]
fn test_build_without_version_file_never_runs_builder() {
    let project = tempdir().unwrap();
    let builder = FakeBuilder::new(BuildOutcome::succeeded());

    let err = build_project(&builder, project.path()).unwrap_err();

    assert!(matches!(err, BuildverError::MissingVersionFile { .. }));
    assert_eq!(builder.calls.get(), 0);
}

#[test]
fn test_latest_build_timestamp_is_current() {
    let project = tempdir().unwrap();
    record_build("1.2.3", project.path()).unwrap();

    let latest = latest_build(project.path()).unwrap().expect("latest build");
    assert_eq!(latest.version, "1.2.3");
    assert!((Utc::now().timestamp() - latest.timestamp).abs() <= 5);
}

#[test]
fn test_report_never_exceeds_capacity() {
    let project = tempdir().unwrap();
    for i in 0..(LEDGER_CAPACITY + 5) {
        record_build(&format!("0.0.{}", i), project.path()).unwrap();
    }

    let contents = fs::read_to_string(layout::build_report_file(project.path())).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), LEDGER_CAPACITY);
    assert!(lines[0].starts_with(&format!("0.0.{} ", LEDGER_CAPACITY + 4)));
    assert!(lines[LEDGER_CAPACITY - 1].starts_with("0.0.5 "));
}
