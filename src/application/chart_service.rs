// Chart service - Use case for turning the fetched dataset into a chart model
use crate::application::axes::{bottom_axis, left_axis, y_axis_label};
use crate::application::legend::build_legend;
use crate::application::marks::project_marks;
use crate::application::record_source::RecordSource;
use crate::application::scales::ChartScales;
use crate::domain::chart::{Chart, ChartError};
use crate::domain::record::Record;
use crate::infrastructure::config::ChartConfig;
use anyhow::Context;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    source: Arc<dyn RecordSource>,
    config: ChartConfig,
}

impl ChartService {
    pub fn new(source: Arc<dyn RecordSource>, config: ChartConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Fetch once and build; any failure surfaces as a single error.
    pub async fn build_chart(&self) -> anyhow::Result<Chart> {
        let records = self
            .source
            .fetch_records()
            .await
            .with_context(|| format!("Failed to load records from {}", self.source.describe()))?;

        tracing::info!("Loaded {} records from {}", records.len(), self.source.describe());

        Ok(build_chart(&records, &self.config)?)
    }
}

/// Scales, marks, axes and legend for one dataset.
pub fn build_chart(records: &[Record], config: &ChartConfig) -> Result<Chart, ChartError> {
    let scales = ChartScales::from_records(records, config)?;
    let marks = project_marks(records, &scales, config);

    Ok(Chart {
        width: config.width,
        height: config.height,
        margin: config.margin,
        plot_width: scales.plot_width,
        plot_height: scales.plot_height,
        title: config.title.clone(),
        subtitle: config.subtitle.clone(),
        marks,
        x_axis: bottom_axis(&scales, config.tick_count),
        y_axis: left_axis(&scales, config.tick_count),
        y_label: y_axis_label(config),
        legend: build_legend(config),
    })
}
