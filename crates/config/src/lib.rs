//! Plugin option parsing for swr-codegen.
//!
//! The host hands this generator a flat mapping of recognized option names
//! to values. This crate deserializes that mapping (ignoring unrecognized
//! keys), compiles the operation-name glob patterns, and produces the
//! read-only configuration consumed during a generation pass.
//!
//! # Example
//!
//! ```
//! use swr_codegen_config::SwrPluginConfig;
//! use serde_json::json;
//!
//! let config = SwrPluginConfig::from_value(json!({
//!     "excludeQueries": ["GetSecret*"],
//!     "autogenSWRKey": true,
//! })).unwrap();
//!
//! assert!(config.exclude_queries.is_match("GetSecretToken"));
//! assert!(config.autogen_swr_key);
//! ```

mod error;
mod options;

pub use error::{ConfigError, Result};
pub use options::{NamePatterns, RawSwrPluginConfig, StringOrList, SwrPluginConfig};
