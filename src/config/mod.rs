use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_OUTPUT: &str = "mulesoft-deps.png";
pub const DEFAULT_QUOTA: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("home directory could not be determined")]
    HomeDirNotFound,
    #[error("repository directory not found: {0}")]
    RepositoryNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub quota: usize,
}

impl ScanConfig {
    /// Resolves against the standard Maven cache under the user's home
    /// directory. A missing cache is the one fatal condition of the tool.
    pub fn resolve(output: Option<PathBuf>, quota: usize) -> Result<Self> {
        let root = default_repository_root().ok_or(ConfigError::HomeDirNotFound)?;
        Self::resolve_with_root(root, output, quota)
    }

    pub fn resolve_with_root(
        root: PathBuf,
        output: Option<PathBuf>,
        quota: usize,
    ) -> Result<Self> {
        if !root.is_dir() {
            return Err(ConfigError::RepositoryNotFound(root));
        }
        Ok(Self {
            root,
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            quota,
        })
    }
}

pub fn default_repository_root() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".m2").join("repository"))
}
