// Axis builder - Tick generators and labels derived from the scales
use crate::application::scales::ChartScales;
use crate::domain::chart::{Axis, AxisLabel, AxisOrientation, Tick};
use crate::infrastructure::config::ChartConfig;

const YEAR_FORMAT: &str = "%Y";

/// Year axis along the bottom of the plot area.
pub fn bottom_axis(scales: &ChartScales, tick_count: usize) -> Axis {
    let ticks = scales
        .x
        .ticks(tick_count)
        .into_iter()
        .filter(|year| year.fract() == 0.0)
        .map(|year| Tick {
            position: scales.x.apply(year),
            label: format_year(year as i32),
        })
        .collect();

    Axis {
        id: "x-axis",
        orientation: AxisOrientation::Bottom,
        offset: (0.0, scales.plot_height),
        length: scales.plot_width,
        ticks,
    }
}

/// Race time axis along the left edge of the plot area.
pub fn left_axis(scales: &ChartScales, tick_count: usize) -> Axis {
    let ticks = scales
        .y
        .ticks(tick_count)
        .into_iter()
        .map(|time| Tick {
            position: scales.y.apply(&time),
            label: time.to_string(),
        })
        .collect();

    Axis {
        id: "y-axis",
        orientation: AxisOrientation::Left,
        offset: (0.0, 0.0),
        length: scales.plot_height,
        ticks,
    }
}

/// Rotated caption beside the time axis.
pub fn y_axis_label(config: &ChartConfig) -> AxisLabel {
    AxisLabel {
        text: config.y_label.clone(),
        x: -config.plot_height() / 2.0,
        y: -config.margin.left + 16.0,
        rotation: -90.0,
    }
}

/// Four-digit year, the same text `%Y` yields for January 1 of that year.
fn format_year(year: i32) -> String {
    chrono::NaiveDate::from_yo_opt(year, 1)
        .map(|date| date.format(YEAR_FORMAT).to_string())
        .unwrap_or_else(|| format!("{:04}", year))
}
