use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("plugin \"typescript-swr\" requires the output extension to be \".ts\" (got {path:?})")]
    InvalidExtension { path: PathBuf },

    #[error(transparent)]
    Config(#[from] swr_codegen_config::ConfigError),
}
