// Presentation layer - SVG draw step and host page
pub mod page;
pub mod svg;
