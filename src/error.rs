use crate::types::IndividualId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvoError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown individual: {0}")]
    UnknownIndividual(IndividualId),

    #[error("Runner error: {0}")]
    RunnerUnavailable(String),

    #[error("Config load error: {0}")]
    ConfigLoad(#[from] ::config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EvoError>;
