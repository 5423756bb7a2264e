use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid glob pattern {pattern:?} in option \"{option}\": {source}")]
    Pattern {
        option: &'static str,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("invalid plugin options: {0}")]
    Options(#[from] serde_json::Error),
}
