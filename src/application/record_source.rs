// Source trait for loading the record dataset
use crate::domain::record::Record;
use async_trait::async_trait;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load the full dataset in one shot
    async fn fetch_records(&self) -> anyhow::Result<Vec<Record>>;

    /// Human-readable location, used in log lines
    fn describe(&self) -> String;
}
