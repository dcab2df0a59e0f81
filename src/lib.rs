// Cyclist doping scatterplot: dataset -> scales -> marks -> SVG page
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
