mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use file::{FileConfig, default_config_path};
pub use models::{ApiSettings, AppConfig};
