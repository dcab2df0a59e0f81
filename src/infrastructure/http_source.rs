// HTTP record source - single GET of the JSON dataset
use crate::application::record_source::RecordSource;
use crate::domain::record::Record;
use anyhow::{Context, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpRecordSource {
    url: String,
    client: reqwest::Client,
}

impl HttpRecordSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> Result<Vec<Record>> {
        tracing::debug!("Fetching dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request for dataset")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Dataset request failed with status {}: {}", status, body);
        }

        response
            .json::<Vec<Record>>()
            .await
            .context("Failed to parse dataset response")
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
