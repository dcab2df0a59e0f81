// Application layer - Scales, marks, decorations and interaction
pub mod axes;
pub mod chart_service;
pub mod interaction;
pub mod legend;
pub mod marks;
pub mod record_source;
pub mod scales;
