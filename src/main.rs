// Main entry point - Dependency wiring and the single render pass
use std::sync::Arc;

use cyclist_scatterplot::application::chart_service::ChartService;
use cyclist_scatterplot::application::record_source::RecordSource;
use cyclist_scatterplot::infrastructure::config::load_app_config;
use cyclist_scatterplot::infrastructure::file_source::FileRecordSource;
use cyclist_scatterplot::infrastructure::http_source::HttpRecordSource;
use cyclist_scatterplot::infrastructure::output::write_document;
use cyclist_scatterplot::presentation::page::render_page;
use cyclist_scatterplot::presentation::svg::render_svg;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Create record source (infrastructure layer)
    let source: Arc<dyn RecordSource> = match &config.source.path {
        Some(path) => Arc::new(FileRecordSource::new(path)),
        None => Arc::new(HttpRecordSource::new(config.source.url.clone())),
    };

    // Create service (application layer)
    let service = ChartService::new(source, config.chart.clone());

    // Fetch and project once; a failure leaves the page empty
    let chart = match service.build_chart().await {
        Ok(chart) => Some(chart),
        Err(e) => {
            tracing::error!("Error: {:#}", e);
            None
        }
    };

    // Write documents (presentation layer)
    let page = render_page(chart.as_ref(), service.config());
    write_document(&config.output.page, &page).await?;

    if let (Some(chart), Some(svg_path)) = (&chart, &config.output.svg) {
        write_document(svg_path, &render_svg(chart)).await?;
    }

    Ok(())
}
