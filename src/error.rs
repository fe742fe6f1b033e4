use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum MulegraphError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("render error: {0}")]
    Render(#[source] anyhow::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MulegraphError>;
