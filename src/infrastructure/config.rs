use crate::domain::chart::Margin;
use crate::domain::color::Color;
use serde::Deserialize;

pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    /// Local JSON file used instead of `url` when set.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            path: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_page_path")]
    pub page: String,
    /// Standalone SVG written next to the page when set.
    #[serde(default)]
    pub svg: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            page: default_page_path(),
            svg: None,
        }
    }
}

/// Everything the render entry point needs: canvas, colors, labels, timings.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub title: String,
    pub subtitle: String,
    pub y_label: String,
    pub dot_radius: f64,
    pub doping_color: Color,
    pub clean_color: Color,
    pub tick_count: usize,
    pub tooltip_alpha: f64,
    pub tooltip_offset_x: f64,
    pub tooltip_offset_y: f64,
    pub fade_ms: f64,
    /// Legend distance from the plot's right edge.
    pub legend_offset_x: f64,
    /// Legend distance from the plot's top edge.
    pub legend_offset_y: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 920.0,
            height: 630.0,
            margin: Margin::default(),
            title: "Doping in Professional Bicycle Racing".to_string(),
            subtitle: "35 Fastest times up Alpe d'Huez".to_string(),
            y_label: "Time (in minutes)".to_string(),
            dot_radius: 7.0,
            doping_color: Color::rgb(0xff, 0x7f, 0x0e),
            clean_color: Color::rgb(0x1f, 0x77, 0xb4),
            tick_count: 10,
            tooltip_alpha: 0.8,
            tooltip_offset_x: 10.0,
            tooltip_offset_y: -28.0,
            fade_ms: 50.0,
            legend_offset_x: 10.0,
            legend_offset_y: 150.0,
        }
    }
}

impl ChartConfig {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

fn default_url() -> String {
    DEFAULT_DATA_URL.to_string()
}

fn default_page_path() -> String {
    "dist/index.html".to_string()
}

/// Load `config/chart.{toml,json,...}` if present, then `CHART_*` env overrides.
///
/// Nested keys use `__`, e.g. `CHART_CHART__WIDTH=1200` or `CHART_SOURCE__PATH=data.json`.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/chart").required(false))
        .add_source(
            config::Environment::with_prefix("CHART")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
