//! Configuration

pub mod settings;

pub use settings::{config_path, config_to_ron, load_config, load_config_from, AppConfig, ConfigError};
