// Mark projection - Records to positioned, categorized marks
use crate::application::scales::ChartScales;
use crate::domain::chart::Mark;
use crate::domain::color::Color;
use crate::domain::record::{Category, Record};
use crate::infrastructure::config::ChartConfig;

/// Project every record through the scales, preserving dataset order.
pub fn project_marks(records: &[Record], scales: &ChartScales, config: &ChartConfig) -> Vec<Mark> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let category = record.category();
            Mark {
                index,
                cx: scales.x_for_year(record.year),
                cy: scales.y_for_time(&record.time),
                radius: config.dot_radius,
                category,
                fill: category_color(category, config),
                record: record.clone(),
            }
        })
        .collect()
}

pub fn category_color(category: Category, config: &ChartConfig) -> Color {
    match category {
        Category::Doping => config.doping_color,
        Category::Clean => config.clean_color,
    }
}
