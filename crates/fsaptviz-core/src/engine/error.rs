use super::config::ConfigError;
use crate::core::io::payload::PayloadError;
use crate::core::models::sample::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Invalid input: {source}")]
    InvalidInput {
        #[from]
        source: InputError,
    },

    #[error("Invalid classifier configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Payload error: {source}")]
    Payload {
        #[from]
        source: PayloadError,
    },
}
