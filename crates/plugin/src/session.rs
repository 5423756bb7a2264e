//! Per-invocation generation state.
//!
//! A `GenerationSession` owns everything accumulated during one generation
//! pass: the operation records collected while walking the documents and
//! the fragment records (local and external). Sessions are constructed
//! fresh per invocation and never shared, so two concurrent generations
//! cannot leak state into each other.

use swr_codegen_apollo_ext::OperationKind;
use swr_codegen_config::SwrPluginConfig;

/// Metadata for one collected operation definition.
///
/// Created once per operation node visited, in document order, and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRecord {
    pub name: String,
    pub kind: OperationKind,
    pub response_type: String,
    pub variables_type: String,
    /// True iff at least one variable definition is non-null and has no
    /// default value.
    pub has_required_variables: bool,
}

/// Metadata for one fragment definition, local or host-supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentRecord {
    pub name: String,
    /// The type the fragment applies to (`on User`).
    pub type_condition: String,
    /// Whether the fragment originates outside the current document set.
    pub is_external: bool,
}

/// Accumulated state for a single generation pass.
#[derive(Debug, Default)]
pub struct GenerationSession {
    operations: Vec<OperationRecord>,
    fragments: Vec<FragmentRecord>,
}

impl GenerationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation record. No deduplication: the host's
    /// type-generation contract guarantees unique operation names.
    pub(crate) fn record_operation(&mut self, record: OperationRecord) {
        self.operations.push(record);
    }

    pub(crate) fn record_fragment(&mut self, record: FragmentRecord) {
        self.fragments.push(record);
    }

    /// All collected operations, in traversal-encounter order.
    #[must_use]
    pub fn operations(&self) -> &[OperationRecord] {
        &self.operations
    }

    /// All collected fragments, local first, then external.
    #[must_use]
    pub fn fragments(&self) -> &[FragmentRecord] {
        &self.fragments
    }

    /// The ordered sub-sequence of query operations not excluded by the
    /// configured name globs. Every query passes when the exclusion set is
    /// empty.
    pub fn filtered_queries<'a>(
        &'a self,
        config: &'a SwrPluginConfig,
    ) -> impl Iterator<Item = &'a OperationRecord> {
        self.operations.iter().filter(move |op| {
            if op.kind != OperationKind::Query {
                return false;
            }
            if config.exclude_queries.is_empty() {
                return true;
            }
            let excluded = config.exclude_queries.is_match(&op.name);
            if excluded {
                tracing::debug!(name = %op.name, "query excluded by pattern");
            }
            !excluded
        })
    }
}
