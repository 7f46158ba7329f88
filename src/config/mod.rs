mod settings;

pub use settings::{Config, DisplayConfig, HistoryConfig, ServerConfig, EXAMPLE_CONFIG};
