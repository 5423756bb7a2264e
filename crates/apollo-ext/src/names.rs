//! Name extraction helpers for CST nodes.
//!
//! apollo-parser's CST exposes names as token nodes reached through a chain
//! of `Option` accessors. These helpers collapse the common chains into a
//! single call.

use apollo_parser::cst;

/// Extension trait for extracting a node's name as an owned string.
pub trait NameExt {
    /// Get the name text as a String, if available.
    fn name_text(&self) -> Option<String>;
}

impl NameExt for cst::OperationDefinition {
    fn name_text(&self) -> Option<String> {
        self.name().map(|n| n.text().to_string())
    }
}

impl NameExt for cst::FragmentDefinition {
    fn name_text(&self) -> Option<String> {
        self.fragment_name()
            .and_then(|n| n.name())
            .map(|n| n.text().to_string())
    }
}

/// Extension trait for fragment type conditions (`on User`).
pub trait TypeConditionExt {
    /// Get the type condition's type name, if available.
    fn type_condition_text(&self) -> Option<String>;
}

impl TypeConditionExt for cst::FragmentDefinition {
    fn type_condition_text(&self) -> Option<String> {
        self.type_condition()
            .and_then(|tc| tc.named_type())
            .and_then(|named| named.name())
            .map(|n| n.text().to_string())
    }
}
