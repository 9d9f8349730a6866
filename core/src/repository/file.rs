use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::record::DailyRecord;
use crate::repository::traits::RecordRepository;

/// Reads a JSON array of daily records.
#[derive(Clone, Debug)]
pub struct FileRecordRepository {
    file_path: PathBuf,
}

impl FileRecordRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self { file_path: file_path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_records(&self) -> Result<Vec<DailyRecord>> {
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)
            .with_context(|| format!("Could not parse records in {}", self.file_path.display()))?;
        Ok(records)
    }
}

impl RecordRepository for FileRecordRepository {
    fn describe(&self) -> String {
        format!("file {}", self.file_path.display())
    }

    fn list(&self) -> Result<Vec<DailyRecord>> {
        self.read_records()
    }
}
