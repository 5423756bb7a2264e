//! Plugin option parsing and compilation.
//!
//! Options arrive from the host as a flat camelCase mapping. `RawSwrPluginConfig`
//! is the serde-facing shape (unrecognized keys are ignored, every option has a
//! default); `SwrPluginConfig` is the compiled, read-only form used during a
//! generation pass, with the glob-pattern options pre-compiled for matching
//! against operation names.

use crate::error::{ConfigError, Result};
use serde::Deserialize;

/// An option value that accepts either a single pattern or a list of patterns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    Single(String),
    Many(Vec<String>),
}

impl StringOrList {
    /// Iterate over the contained pattern strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Self::Single(s) => std::slice::from_ref(s).iter().map(String::as_str),
            Self::Many(list) => list.as_slice().iter().map(String::as_str),
        }
    }
}

/// Raw plugin options, as supplied by the host.
///
/// Field names follow the host's camelCase convention. Unrecognized keys are
/// ignored; a recognized key with a value of the wrong shape is a fatal
/// configuration error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSwrPluginConfig {
    /// Queries to skip, as glob pattern(s) over operation names.
    pub exclude_queries: Option<StringOrList>,

    /// Queries that additionally receive a paginated (`Infinite`) hook
    /// variant, as glob pattern(s) over operation names.
    #[serde(rename = "useSWRInfinite")]
    pub use_swr_infinite: Option<StringOrList>,

    /// Derive cache keys from the operation name plus sorted variable values
    /// instead of accepting a caller-supplied key.
    #[serde(rename = "autogenSWRKey")]
    pub autogen_swr_key: bool,

    /// Wrap response types in a transport-level envelope (headers, status,
    /// errors, extensions).
    pub raw_request: bool,

    /// Prefix applied to every generated type identifier.
    pub types_prefix: String,

    /// Suffix applied to every generated type identifier.
    pub types_suffix: String,

    /// Emit `import type` rather than value imports where possible.
    pub use_type_imports: bool,
}

/// A compiled set of glob patterns matched against operation names.
///
/// Standard shell-style wildcard semantics (`*`, `?`, bracket classes).
/// Operation names contain no path separators, so no separator
/// special-casing applies.
#[derive(Debug, Clone, Default)]
pub struct NamePatterns {
    patterns: Vec<glob::Pattern>,
}

impl NamePatterns {
    /// Compile an optional pattern option. `None` or an empty list compiles
    /// to an empty set.
    pub fn compile(option: &'static str, value: Option<&StringOrList>) -> Result<Self> {
        let mut patterns = Vec::new();
        if let Some(value) = value {
            for pattern in value.iter() {
                patterns.push(glob::Pattern::new(pattern).map_err(|source| {
                    ConfigError::Pattern {
                        option,
                        pattern: pattern.to_string(),
                        source,
                    }
                })?);
            }
        }
        Ok(Self { patterns })
    }

    /// Whether the set contains no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether any pattern in the set matches the given operation name.
    /// An empty set matches nothing.
    #[must_use]
    pub fn is_match(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }
}

/// Compiled plugin configuration, read-only for the duration of a
/// generation pass.
#[derive(Debug, Clone, Default)]
pub struct SwrPluginConfig {
    pub exclude_queries: NamePatterns,
    pub use_swr_infinite: NamePatterns,
    pub autogen_swr_key: bool,
    pub raw_request: bool,
    pub types_prefix: String,
    pub types_suffix: String,
    pub use_type_imports: bool,
}

impl SwrPluginConfig {
    /// Compile raw options, failing fast on malformed glob patterns.
    pub fn from_raw(raw: RawSwrPluginConfig) -> Result<Self> {
        Ok(Self {
            exclude_queries: NamePatterns::compile("excludeQueries", raw.exclude_queries.as_ref())?,
            use_swr_infinite: NamePatterns::compile(
                "useSWRInfinite",
                raw.use_swr_infinite.as_ref(),
            )?,
            autogen_swr_key: raw.autogen_swr_key,
            raw_request: raw.raw_request,
            types_prefix: raw.types_prefix,
            types_suffix: raw.types_suffix,
            use_type_imports: raw.use_type_imports,
        })
    }

    /// Parse and compile a flat option mapping supplied by the host.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawSwrPluginConfig = serde_json::from_value(value)?;
        tracing::debug!(?raw, "parsed plugin options");
        Self::from_raw(raw)
    }

    /// Whether the paginated hook variant is enabled for any operation.
    #[must_use]
    pub fn infinite_enabled(&self) -> bool {
        !self.use_swr_infinite.is_empty()
    }
}
