//! Submission saving.
//!
//! Turns an in-memory table of predictions into a timestamped CSV file
//! under the project's submissions directory.
//!
//! # Components
//!
//! - `table`: Table and cell types handed to the saver
//! - `run_name`: Filename prefix resolution, explicit or from the caller
//! - `config`: Output location
//! - `saver`: The save operation itself

pub mod config;
pub mod run_name;
pub mod saver;
pub mod table;

pub use config::{SaverConfig, DEFAULT_SUBMISSIONS_DIR};
pub use run_name::RunName;
pub use saver::{write_confirmation, SubmissionSaver, TIMESTAMP_FORMAT};
pub use table::{Cell, Table};
