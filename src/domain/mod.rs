// Domain layer - Records, race times and the chart model
pub mod chart;
pub mod color;
pub mod race_time;
pub mod record;
