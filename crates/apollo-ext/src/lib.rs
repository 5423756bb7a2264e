//! Extensions for `apollo-parser` aimed at operation-level code generation.
//!
//! This crate provides:
//! - **Visitor pattern** for traversing the executable definitions of a
//!   GraphQL document (operations, fragments, variable definitions)
//! - **Name extraction helpers** for getting names from CST nodes
//! - **Definition iterators** and operation predicates (kind, required
//!   variables)
//!
//! # Example
//!
//! ```
//! use swr_codegen_apollo_ext::{DocumentVisitor, walk_document};
//! use apollo_parser::cst;
//!
//! struct OperationNames(Vec<String>);
//!
//! impl DocumentVisitor for OperationNames {
//!     fn visit_operation(&mut self, op: &cst::OperationDefinition) {
//!         if let Some(name) = op.name() {
//!             self.0.push(name.text().to_string());
//!         }
//!     }
//! }
//!
//! let source = "query GetUser { user { id } }";
//! let tree = apollo_parser::Parser::new(source).parse();
//! let mut names = OperationNames(vec![]);
//! walk_document(&mut names, &tree);
//! assert_eq!(names.0, vec!["GetUser"]);
//! ```

mod definitions;
mod names;
mod visitor;

pub use definitions::*;
pub use names::*;
pub use visitor::*;
