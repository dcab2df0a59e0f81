// File record source - reads a local copy of the dataset
use crate::application::record_source::RecordSource;
use crate::domain::record::Record;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
