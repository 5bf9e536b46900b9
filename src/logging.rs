use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};
use std::path::Path;

/// Rotate log files once they reach this size
const ROTATE_SIZE: u64 = 10 * 1024 * 1024;

/// Number of rotated log files kept on disk
const KEEP_LOG_FILES: usize = 3;

/// Start the global logger.
///
/// `RUST_LOG` overrides `level`. With a `log_dir`, records go to rotated files
/// there; otherwise to stderr. Keep the returned handle alive for the
/// lifetime of the program.
pub fn setup_logging(level: &str, log_dir: Option<&Path>) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(level)?;

    match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir))
            .format(opt_format)
            .rotate(
                Criterion::Size(ROTATE_SIZE),
                Naming::Numbers,
                Cleanup::KeepLogFiles(KEEP_LOG_FILES),
            )
            .start(),
        None => logger.format(flexi_logger::colored_default_format).start(),
    }
}
