// Infrastructure layer - Configuration, data sources and output
pub mod config;
pub mod file_source;
pub mod http_source;
pub mod output;
