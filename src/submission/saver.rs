//! Writes a table to `<project_root>/submissions/<run_name>__<timestamp>.csv`.

use crate::submission::config::SaverConfig;
use crate::submission::run_name::RunName;
use crate::submission::table::Table;
use crate::{Result, SubmissionError};
use chrono::{Local, NaiveDateTime};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// chrono format for the filename timestamp, e.g. `2024-01-01__12-00-00`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d__%H-%M-%S";

/// Saves tables as timestamped CSV submissions
#[derive(Debug, Clone, Default)]
pub struct SubmissionSaver {
    config: SaverConfig,
}

impl SubmissionSaver {
    pub fn new(config: SaverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SaverConfig {
        &self.config
    }

    /// Directory submissions are written to
    pub fn output_dir(&self) -> PathBuf {
        self.config.output_dir()
    }

    /// `<run_name>__<timestamp>.csv`
    pub fn file_name(run_name: &RunName, at: NaiveDateTime) -> String {
        format!("{}__{}.csv", run_name, at.format(TIMESTAMP_FORMAT))
    }

    /// Save `table` stamped with the current local time.
    ///
    /// Without a `run_name` the file is named after the calling source file.
    /// Returns the full path written. A file with the same name is overwritten.
    #[track_caller]
    pub fn save(&self, table: &Table, run_name: Option<&str>) -> Result<PathBuf> {
        let run_name = RunName::resolve(run_name)?;
        self.write(table, &run_name, Local::now().naive_local())
    }

    /// Same as [`save`](Self::save) with an explicit timestamp
    #[track_caller]
    pub fn save_at(
        &self,
        table: &Table,
        run_name: Option<&str>,
        at: NaiveDateTime,
    ) -> Result<PathBuf> {
        let run_name = RunName::resolve(run_name)?;
        self.write(table, &run_name, at)
    }

    fn write(&self, table: &Table, run_name: &RunName, at: NaiveDateTime) -> Result<PathBuf> {
        let dir = self.ensure_output_dir()?;
        let full_path = dir.join(Self::file_name(run_name, at));

        // No cleanup on failure: a partial file may remain
        let file = File::create(&full_path)?;
        let mut writer = BufWriter::new(file);
        table.write_csv(&mut writer)?;
        writer.flush()?;

        log::info!(
            "Saved {} rows x {} columns for run '{}'",
            table.num_rows(),
            table.num_columns(),
            run_name
        );
        write_confirmation(io::stdout().lock(), &full_path)?;

        Ok(full_path)
    }

    fn ensure_output_dir(&self) -> Result<PathBuf> {
        let dir = self.output_dir();
        fs::create_dir_all(&dir).map_err(|source| SubmissionError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let dir = std::path::absolute(&dir)?;
        log::debug!("Submissions directory: {}", dir.display());
        Ok(dir)
    }
}

/// Writes the `Saved submission -> <path>` line reported after each save
pub fn write_confirmation<W: Write>(mut out: W, path: &Path) -> io::Result<()> {
    writeln!(out, "Saved submission -> {}", path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::table::Cell;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn predictions() -> Table {
        let mut table = Table::new(["id", "pred"]);
        table.push_row([Cell::from(1), Cell::from(0.2)]);
        table.push_row([Cell::from(2), Cell::from(0.8)]);
        table
    }

    #[test]
    fn test_file_name() {
        let name = RunName::new("felipe_model").unwrap();
        assert_eq!(
            SubmissionSaver::file_name(&name, at(12, 0, 0)),
            "felipe_model__2024-01-01__12-00-00.csv"
        );
    }

    #[test]
    fn test_save_at_writes_expected_file() -> Result<()> {
        let dir = tempdir()?;
        let saver = SubmissionSaver::new(SaverConfig::with_project_root(dir.path()));

        let path = saver.save_at(&predictions(), Some("felipe_model"), at(12, 0, 0))?;

        assert_eq!(
            path,
            dir.path()
                .join("submissions")
                .join("felipe_model__2024-01-01__12-00-00.csv")
        );
        assert_eq!(fs::read_to_string(&path)?, "id,pred\n1,0.2\n2,0.8\n");
        Ok(())
    }

    #[test]
    fn test_save_without_name_uses_calling_file() -> Result<()> {
        let dir = tempdir()?;
        let saver = SubmissionSaver::new(SaverConfig::with_project_root(dir.path()));

        let path = saver.save_at(&predictions(), None, at(8, 30, 5))?;

        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("saver__2024-01-01__08-30-05.csv")
        );
        Ok(())
    }

    #[test]
    fn test_same_second_overwrites() -> Result<()> {
        let dir = tempdir()?;
        let saver = SubmissionSaver::new(SaverConfig::with_project_root(dir.path()));

        let mut second = Table::new(["id", "pred"]);
        second.push_row([Cell::from(3), Cell::from(0.5)]);

        let first_path = saver.save_at(&predictions(), Some("run"), at(9, 0, 0))?;
        let second_path = saver.save_at(&second, Some("run"), at(9, 0, 0))?;

        assert_eq!(first_path, second_path);
        assert_eq!(fs::read_dir(saver.output_dir())?.count(), 1);
        assert_eq!(fs::read_to_string(&second_path)?, "id,pred\n3,0.5\n");
        Ok(())
    }

    #[test]
    fn test_invalid_run_name_writes_nothing() -> Result<()> {
        let dir = tempdir()?;
        let saver = SubmissionSaver::new(SaverConfig::with_project_root(dir.path()));

        let result = saver.save_at(&predictions(), Some("../escape"), at(9, 0, 0));

        assert_matches!(result, Err(SubmissionError::RunName(_)));
        assert!(!saver.output_dir().exists());
        Ok(())
    }

    #[test]
    fn test_explicit_name_used_as_given() -> Result<()> {
        let dir = tempdir()?;
        let saver = SubmissionSaver::new(SaverConfig::with_project_root(dir.path()));

        let padded = saver.save_at(&predictions(), Some(" model "), at(12, 0, 0))?;
        let empty = saver.save_at(&predictions(), Some(""), at(12, 0, 0))?;

        assert_eq!(
            padded.file_name().and_then(|n| n.to_str()),
            Some(" model __2024-01-01__12-00-00.csv")
        );
        assert_eq!(
            empty.file_name().and_then(|n| n.to_str()),
            Some("__2024-01-01__12-00-00.csv")
        );
        assert!(padded.exists());
        assert!(empty.exists());
        Ok(())
    }

    #[test]
    fn test_confirmation_line() -> Result<()> {
        let mut out = Vec::new();
        write_confirmation(&mut out, Path::new("/srv/submissions/run__2024-01-01__12-00-00.csv"))?;

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Saved submission -> /srv/submissions/run__2024-01-01__12-00-00.csv\n"
        );
        Ok(())
    }
}
