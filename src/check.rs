use std::{cmp::Ordering, fmt, path::Path};

use crate::{data::errors::CheckError, version};

/// Result of one check. Exactly one verdict line per run, only `Equal`
/// maps to a success exit code.
#[derive(Debug)]
pub enum Outcome {
    Equal,
    Greater,
    Smaller,
    Failed(CheckError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Equal => 0,
            _ => 1,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Equal => write!(f, "Input version is equal to CMake version."),
            Outcome::Greater => write!(f, "Input version is greater than CMake version."),
            Outcome::Smaller => write!(f, "Input version is smaller than CMake version."),
            Outcome::Failed(err) => write!(f, "{}", err),
        }
    }
}

pub fn run(file: &str, input: &str) -> Outcome {
    // the reference must resolve before the input string is looked at
    let reference = match version::from_build_file(Path::new(file)) {
        Ok(v) => v,
        Err(err) => return Outcome::Failed(err),
    };
    let input = match version::parse_input(input) {
        Ok(v) => v,
        Err(err) => return Outcome::Failed(err),
    };
    tracing::debug!(
        input = input.to_string(),
        reference = reference.to_string(),
        "comparing"
    );
    match input.cmp(&reference) {
        Ordering::Greater => Outcome::Greater,
        Ordering::Less => Outcome::Smaller,
        Ordering::Equal => Outcome::Equal,
    }
}
