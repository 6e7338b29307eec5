use std::fmt;
use std::path::Path;

use regex::{Captures, Regex};

use crate::data::errors::CheckError;

const PROJECT_VERSION_PATTERN: &str = r"project\(.*VERSION (\d+)\.(\d+)\.(\d+)";
const INPUT_VERSION_PATTERN: &str = r"^v(\d+)\.(\d+)\.(\d+)$";

/// Three part version. Derived ordering is lexicographic on
/// (major, minor, patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Reads the build file and returns the first declared project version.
/// An unreadable file and a file without the pattern are the same failure.
pub fn from_build_file(path: &Path) -> Result<Version, CheckError> {
    let missing = || CheckError::MissingReferenceVersion {
        file: path.display().to_string(),
    };
    let contents = std::fs::read_to_string(path).map_err(|err| {
        tracing::debug!(file = path.display().to_string(), err = %err, "cannot read build file");
        missing()
    })?;
    extract_reference(&contents).ok_or_else(missing)
}

/// First `project(... VERSION X.Y.Z` match wins. The declaration must sit
/// on one line, `.` does not cross newlines.
pub fn extract_reference(contents: &str) -> Option<Version> {
    let re = Regex::new(PROJECT_VERSION_PATTERN).unwrap();
    let caps = re.captures(contents)?;
    from_captures(&caps)
}

/// Parses a `vX.Y.Z` string, anchored at both ends.
pub fn parse_input(input: &str) -> Result<Version, CheckError> {
    let re = Regex::new(INPUT_VERSION_PATTERN).unwrap();
    re.captures(input)
        .and_then(|caps| from_captures(&caps))
        .ok_or_else(|| CheckError::InvalidInputFormat {
            input: input.to_string(),
        })
}

fn from_captures(caps: &Captures) -> Option<Version> {
    // \d+ is unbounded, an overflowing component counts as no match
    Some(Version {
        major: caps[1].parse().ok()?,
        minor: caps[2].parse().ok()?,
        patch: caps[3].parse().ok()?,
    })
}
