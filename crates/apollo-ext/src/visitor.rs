//! Visitor pattern for GraphQL executable documents.
//!
//! This module provides a visitor trait covering the node kinds an
//! operation-level code generator cares about: operation definitions,
//! fragment definitions, and variable definitions. Default implementations
//! do nothing, so you only need to override the methods you care about.
//!
//! The `walk_*` functions drive the traversal and call back into the
//! visitor at each node. Visitors observe the tree; they never rewrite it.
//!
//! # Example
//!
//! ```
//! use swr_codegen_apollo_ext::{DocumentVisitor, walk_document};
//! use apollo_parser::cst;
//!
//! struct OperationCounter(usize);
//!
//! impl DocumentVisitor for OperationCounter {
//!     fn visit_operation(&mut self, _op: &cst::OperationDefinition) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let source = "query GetUser { user { id } } mutation Touch { touch }";
//! let tree = apollo_parser::Parser::new(source).parse();
//! let mut counter = OperationCounter(0);
//! walk_document(&mut counter, &tree);
//! assert_eq!(counter.0, 2);
//! ```

use apollo_parser::cst;

/// A visitor over the executable portions of a GraphQL document.
///
/// All methods have default empty implementations. Override only the
/// methods you need.
#[allow(unused_variables)]
pub trait DocumentVisitor {
    /// Called when entering a document (before visiting definitions)
    fn enter_document(&mut self, doc: &cst::Document) {}

    /// Called when exiting a document (after visiting all definitions)
    fn exit_document(&mut self, doc: &cst::Document) {}

    /// Called once per operation definition (query, mutation, subscription)
    fn visit_operation(&mut self, op: &cst::OperationDefinition) {}

    /// Called once per fragment definition
    fn visit_fragment_definition(&mut self, frag: &cst::FragmentDefinition) {}

    /// Called for each variable definition of an operation
    fn visit_variable_definition(&mut self, var_def: &cst::VariableDefinition) {}
}

/// Walk a parsed document with the given visitor.
///
/// This is the main entry point for traversing a GraphQL document.
/// Definitions are visited in document order.
pub fn walk_document<V: DocumentVisitor>(visitor: &mut V, tree: &apollo_parser::SyntaxTree) {
    let doc = tree.document();
    visitor.enter_document(&doc);

    for definition in doc.definitions() {
        match definition {
            cst::Definition::OperationDefinition(op) => walk_operation(visitor, &op),
            cst::Definition::FragmentDefinition(frag) => {
                visitor.visit_fragment_definition(&frag);
            }
            // Type system definitions have no bearing on operation codegen.
            _ => {}
        }
    }

    visitor.exit_document(&doc);
}

/// Walk a single operation definition and its variable definitions.
pub fn walk_operation<V: DocumentVisitor>(visitor: &mut V, op: &cst::OperationDefinition) {
    visitor.visit_operation(op);

    if let Some(var_defs) = op.variable_definitions() {
        for var_def in var_defs.variable_definitions() {
            visitor.visit_variable_definition(&var_def);
        }
    }
}
