// Legend builder - Static two-category color key
use crate::application::marks::category_color;
use crate::domain::chart::{Legend, LegendEntry};
use crate::domain::record::Category;
use crate::infrastructure::config::ChartConfig;

const LEGEND_WIDTH: f64 = 190.0;
const ROW_HEIGHT: f64 = 24.0;
const SWATCH_SIZE: f64 = 16.0;
const PADDING: f64 = 8.0;

pub fn build_legend(config: &ChartConfig) -> Legend {
    let entries: Vec<LegendEntry> = [Category::Doping, Category::Clean]
        .into_iter()
        .map(|category| LegendEntry {
            category,
            label: category.label().to_string(),
            color: category_color(category, config),
        })
        .collect();

    Legend {
        x: config.plot_width() - LEGEND_WIDTH - config.legend_offset_x,
        y: config.legend_offset_y,
        width: LEGEND_WIDTH,
        height: entries.len() as f64 * ROW_HEIGHT + 2.0 * PADDING,
        row_height: ROW_HEIGHT,
        swatch_size: SWATCH_SIZE,
        entries,
    }
}
