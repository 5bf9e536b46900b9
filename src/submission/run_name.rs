//! Run identifiers used as the submission filename prefix.

use crate::{Result, SubmissionError};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Validated filename prefix for a submission
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RunName(String);

impl RunName {
    /// Use the explicit name when given, otherwise fall back to the file stem
    /// of the source file that called this function.
    ///
    /// Every function between the user's call site and here must also be
    /// `#[track_caller]` for the fallback to name the user's file.
    #[track_caller]
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        match explicit {
            Some(name) => Self::new(name),
            None => Self::from_caller(Location::caller()),
        }
    }

    /// Use an explicit name as given. Only path separators are refused, so
    /// the file always lands inside the submissions directory.
    pub fn new(name: &str) -> Result<Self> {
        if name.contains(['/', '\\']) {
            return Err(SubmissionError::RunName(format!(
                "run name '{}' must not contain a path separator",
                name
            )));
        }

        Ok(Self(name.to_string()))
    }

    /// Derive a name from a file path's stem, e.g. `src/bin/train_model.rs` -> `train_model`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                SubmissionError::RunName(format!(
                    "cannot derive a run name from '{}'",
                    path.display()
                ))
            })?;

        if stem.trim().is_empty() {
            return Err(SubmissionError::RunName(format!(
                "'{}' has a blank file stem",
                path.display()
            )));
        }

        Self::new(stem)
    }

    fn from_caller(location: &Location<'_>) -> Result<Self> {
        log::debug!(
            "No run name given, deriving one from caller {}:{}",
            location.file(),
            location.line()
        );
        Self::from_path(location.file())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RunName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
