use clap::Parser;
use std::path::PathBuf;

use submission_saver::logging::setup_logging;
use submission_saver::submission::DEFAULT_SUBMISSIONS_DIR;
use submission_saver::{RunName, SaverConfig, SubmissionSaver, Table};

#[derive(Parser, Debug)]
#[command(name = "submission_saver", version, about)]
struct Config {
    /// CSV file holding the predictions to submit
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Prefix for the submission file (defaults to the input file name)
    #[arg(short = 'n', long)]
    run_name: Option<String>,

    /// Directory that holds the submissions directory
    #[arg(short = 'r', long, default_value = ".")]
    project_root: PathBuf,

    /// Name of the submissions directory under the project root
    #[arg(long, default_value = DEFAULT_SUBMISSIONS_DIR)]
    submissions_dir: String,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write rotated log files here instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    let _logger = setup_logging(&config.log_level, config.log_dir.as_deref())?;

    let table = Table::from_path(&config.input)?;
    log::info!(
        "Loaded {} rows from {}",
        table.num_rows(),
        config.input.display()
    );

    let run_name = match config.run_name {
        Some(name) => RunName::new(&name)?,
        None => RunName::from_path(&config.input)?,
    };

    let saver = SubmissionSaver::new(SaverConfig {
        project_root: config.project_root,
        submissions_dir: config.submissions_dir,
    });
    saver.save(&table, Some(run_name.as_str()))?;

    Ok(())
}
