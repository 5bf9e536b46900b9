//! Output location for saved submissions.

use std::path::{Path, PathBuf};

/// Default name of the output directory under the project root
pub const DEFAULT_SUBMISSIONS_DIR: &str = "submissions";

/// Where submissions land. Resolved once at startup and handed to the saver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaverConfig {
    pub project_root: PathBuf,
    pub submissions_dir: String,
}

impl Default for SaverConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            submissions_dir: DEFAULT_SUBMISSIONS_DIR.to_string(),
        }
    }
}

impl SaverConfig {
    pub fn with_project_root<P: AsRef<Path>>(project_root: P) -> Self {
        Self {
            project_root: project_root.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    /// `<project_root>/<submissions_dir>`
    pub fn output_dir(&self) -> PathBuf {
        self.project_root.join(&self.submissions_dir)
    }
}
