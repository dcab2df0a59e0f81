// Chart domain models: the pure, display-free result of projecting records
use super::color::Color;
use super::record::{Category, Record};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("dataset contains no records")]
    EmptyDataset,
    #[error("plot area must be positive, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 100.0,
            right: 20.0,
            bottom: 30.0,
            left: 60.0,
        }
    }
}

/// Visual mark for one record. Coordinates are relative to the plot area.
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    pub index: usize,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub category: Category,
    pub fill: Color,
    pub record: Record,
}

impl Mark {
    /// Raw year, exposed as `data-xvalue`.
    pub fn x_value(&self) -> String {
        self.record.year.to_string()
    }

    /// Raw normalized time, exposed as `data-yvalue`.
    pub fn y_value(&self) -> String {
        self.record.time.to_iso_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orientation: AxisOrientation,
    /// Translation of the axis group within the plot area.
    pub offset: (f64, f64),
    /// Pixel extent of the domain line.
    pub length: f64,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub category: Category,
    pub label: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub row_height: f64,
    pub swatch_size: f64,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub plot_width: f64,
    pub plot_height: f64,
    pub title: String,
    pub subtitle: String,
    pub marks: Vec<Mark>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y_label: AxisLabel,
    pub legend: Legend,
}
