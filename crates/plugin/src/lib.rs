//! Typed SWR hook generation for GraphQL query operations.
//!
//! Given parsed GraphQL operation documents, this crate emits TypeScript
//! source for a `getSdkWithHooks` factory wrapping a `graphql-request`
//! SDK: one `use<Name>` hook per query operation, plus an optional
//! `use<Name>Infinite` paginated variant, plus the supporting type aliases
//! and import statements. Schema parsing, fragment resolution, SDK
//! generation, and file writing belong to the host; this crate only
//! consumes syntax trees and produces strings.
//!
//! # Example
//!
//! ```
//! use swr_codegen_plugin::{generate, ConventionNaming, SwrPluginConfig};
//! use serde_json::json;
//!
//! let documents = vec![
//!     apollo_parser::Parser::new("query GetUser($id: ID!) { user(id: $id) { id } }").parse(),
//! ];
//! let config = SwrPluginConfig::from_value(json!({})).unwrap();
//! let naming = ConventionNaming::from_config(&config);
//!
//! let result = generate(&documents, vec![], &config, &naming);
//! assert!(result.content.contains("useGetUser(key: SWRKeyInterface"));
//! assert_eq!(result.prepend.len(), 2);
//! ```

mod assemble;
mod compose;
mod emit;
mod error;
mod imports;
mod naming;
mod session;
mod visitor;

pub use error::{PluginError, Result};
pub use naming::{pascal_case, ConventionNaming, OperationNaming};
pub use session::{FragmentRecord, GenerationSession, OperationRecord};
// Re-exported so hosts depend on one crate.
pub use swr_codegen_config::{RawSwrPluginConfig, SwrPluginConfig};

use apollo_parser::SyntaxTree;
use std::path::Path;
use swr_codegen_apollo_ext::walk_document;

/// The two-part generation output: import statements to prepend, and one
/// assembled string of generated declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    pub prepend: Vec<String>,
    pub content: String,
}

/// Run one generation pass over the given documents.
///
/// Operations are collected in document order across all documents;
/// `external_fragments` are appended after the fragments defined in the
/// documents themselves. The result is deterministic for identical inputs.
#[must_use]
pub fn generate(
    documents: &[SyntaxTree],
    external_fragments: Vec<FragmentRecord>,
    config: &SwrPluginConfig,
    naming: &dyn OperationNaming,
) -> GenerateResult {
    let mut session = GenerationSession::new();

    {
        let mut visitor = visitor::SwrVisitor::new(&mut session, naming);
        for tree in documents {
            walk_document(&mut visitor, tree);
        }
    }
    for fragment in external_fragments {
        session.record_fragment(fragment);
    }

    tracing::debug!(
        operations = session.operations().len(),
        fragments = session.fragments().len(),
        "collected definitions"
    );

    GenerateResult {
        prepend: imports::compute_imports(config),
        content: assemble::assemble_content(&session, config),
    }
}

/// Validate the configured output path before generation proceeds.
///
/// The generated source is TypeScript, so anything but a `.ts` extension
/// is a fatal configuration error.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.extension().and_then(|ext| ext.to_str()) == Some("ts") {
        Ok(())
    } else {
        Err(PluginError::InvalidExtension {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path(Path::new("src/generated/sdk.ts")).is_ok());
        assert!(validate_output_path(Path::new("sdk.generated.ts")).is_ok());

        for bad in ["sdk.tsx", "sdk.mts", "sdk.js", "sdk", "sdk.ts.bak"] {
            let err = validate_output_path(Path::new(bad)).unwrap_err();
            assert!(
                err.to_string().contains("\".ts\""),
                "expected extension error for {bad}, got: {err}"
            );
        }
    }
}
