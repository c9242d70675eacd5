//! The project version: reading and writing the VERSION file, and deriving
//! the next version from a [`Modifier`].
//!
//! Versions are dot-joined strings with no fixed arity. Only the component
//! being incremented has to be numeric; everything else passes through as-is.

use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BuildverError, Result};
use crate::layout;

/// How to derive the next version from the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Modifier {
    /// `pass`: keep the current version
    Keep,
    /// `+maj`: bump the major number, zero everything after it
    IncrementMajor,
    /// `+min`: bump the minor number, zero everything after it
    IncrementMinor,
    /// `+rev`: bump the last number
    #[default]
    IncrementRevision,
    /// Any other value replaces the version verbatim
    Literal(String),
}

impl Modifier {
    pub const KEEP: &'static str = "pass";
    pub const MAJOR: &'static str = "+maj";
    pub const MINOR: &'static str = "+min";
    pub const REVISION: &'static str = "+rev";

    /// Interpret a user-supplied token. Unrecognized tokens are literals.
    pub fn parse(token: &str) -> Self {
        match token {
            Self::KEEP => Modifier::Keep,
            Self::MAJOR => Modifier::IncrementMajor,
            Self::MINOR => Modifier::IncrementMinor,
            Self::REVISION => Modifier::IncrementRevision,
            other => Modifier::Literal(other.to_string()),
        }
    }
}

impl FromStr for Modifier {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Modifier::parse(s))
    }
}

impl From<String> for Modifier {
    fn from(value: String) -> Self {
        Modifier::parse(&value)
    }
}

impl From<Modifier> for String {
    fn from(value: Modifier) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Keep => f.write_str(Self::KEEP),
            Modifier::IncrementMajor => f.write_str(Self::MAJOR),
            Modifier::IncrementMinor => f.write_str(Self::MINOR),
            Modifier::IncrementRevision => f.write_str(Self::REVISION),
            Modifier::Literal(value) => f.write_str(value),
        }
    }
}

/// Read the current version of the project.
///
/// Returns `Ok(None)` when the VERSION file is empty or its first line is
/// blank. Otherwise the first line is returned with every whitespace
/// character removed, including internal ones.
///
/// # Errors
///
/// Returns `BuildverError::MissingVersionFile` if the VERSION file is absent.
pub fn read_version(project_dir: &Path) -> Result<Option<String>> {
    let path = layout::version_file(project_dir);
    if !path.exists() {
        return Err(BuildverError::MissingVersionFile { path });
    }
    let contents = fs::read_to_string(&path)?;
    let version: String = contents
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    tracing::debug!(path = %path.display(), version = %version, "read VERSION");
    if version.is_empty() {
        return Ok(None);
    }
    Ok(Some(version))
}

/// Overwrite the VERSION file with `version`, verbatim.
///
/// Returns `Ok(false)` without writing if `project_dir` does not exist.
/// The value is not validated.
pub fn write_version(version: &str, project_dir: &Path) -> Result<bool> {
    if !project_dir.exists() {
        return Ok(false);
    }
    let path = layout::version_file(project_dir);
    fs::write(&path, version)?;
    tracing::debug!(path = %path.display(), version = %version, "wrote VERSION");
    Ok(true)
}

/// Derive the next version from `current`.
///
/// A single-component version is extended to `x.0.0` before a major or minor
/// bump. A revision bump never extends: it only touches the last existing
/// component, so `5` becomes `6`.
///
/// # Errors
///
/// Returns `BuildverError::InvalidVersionFormat` if the component to
/// increment is not a non-negative integer.
pub fn apply_modifier(current: &str, modifier: &Modifier) -> Result<String> {
    let bump_index = match modifier {
        Modifier::Keep => return Ok(current.to_string()),
        Modifier::Literal(value) => return Ok(value.clone()),
        Modifier::IncrementMajor => 0,
        Modifier::IncrementMinor => 1,
        Modifier::IncrementRevision => {
            let mut components: Vec<String> = current.split('.').map(str::to_string).collect();
            let last = components.len() - 1;
            components[last] = increment_component(current, &components[last])?;
            return Ok(components.join("."));
        }
    };

    let mut components: Vec<String> = current.split('.').map(str::to_string).collect();
    if components.len() == 1 {
        components.extend(["0".to_string(), "0".to_string()]);
    }
    components[bump_index] = increment_component(current, &components[bump_index])?;
    for component in components.iter_mut().skip(bump_index + 1) {
        *component = "0".to_string();
    }
    Ok(components.join("."))
}

/// Add one to a decimal component of any length, dropping leading zeros.
fn increment_component(version: &str, component: &str) -> Result<String> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BuildverError::InvalidVersionFormat {
            version: version.to_string(),
            component: component.to_string(),
        });
    }

    let trimmed = component.trim_start_matches('0');
    let mut digits: Vec<u8> = trimmed.bytes().rev().map(|b| b - b'0').collect();
    let mut carry = 1;
    for digit in digits.iter_mut() {
        let sum = *digit + carry;
        *digit = sum % 10;
        carry = sum / 10;
        if carry == 0 {
            break;
        }
    }
    if carry > 0 {
        digits.push(carry);
    }
    Ok(digits.iter().rev().map(|d| char::from(b'0' + d)).collect())
}
