//! # Submission Saver
//!
//! Writes tabular prediction results to timestamped CSV files in a
//! project-level `submissions/` directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use submission_saver::{Cell, SaverConfig, SubmissionSaver, Table};
//!
//! let mut table = Table::new(["id", "pred"]);
//! table.push_row([Cell::from(1), Cell::from(0.2)]);
//! table.push_row([Cell::from(2), Cell::from(0.8)]);
//!
//! let saver = SubmissionSaver::new(SaverConfig::with_project_root("."));
//! let path = saver.save(&table, Some("felipe_model"))?;
//! # Ok::<(), submission_saver::SubmissionError>(())
//! ```

use std::path::PathBuf;

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Logger setup for binaries
pub mod logging;

/// Tables, run names and the saver
pub mod submission;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use submission::{Cell, RunName, SaverConfig, SubmissionSaver, Table, TIMESTAMP_FORMAT};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the submission saver
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Cannot create submissions directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Run name error: {0}")]
    RunName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SubmissionError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
