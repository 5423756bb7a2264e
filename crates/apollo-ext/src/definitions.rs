//! Definition filtering utilities for GraphQL documents.
//!
//! Convenient iterators for the executable definitions of a document, plus
//! operation-level predicates used when deciding what code to generate.
//!
//! # Example
//!
//! ```
//! use swr_codegen_apollo_ext::DocumentExt;
//! use apollo_parser::Parser;
//!
//! let source = r"
//!     query GetUser { user { id } }
//!     mutation UpdateUser { updateUser { id } }
//!     fragment UserFields on User { name }
//! ";
//! let tree = Parser::new(source).parse();
//!
//! assert_eq!(tree.operations().count(), 2);
//! assert_eq!(tree.fragments().count(), 1);
//! ```

use apollo_parser::cst;
use apollo_parser::SyntaxTree;

/// Extension trait for convenient access to executable definitions.
pub trait DocumentExt {
    /// Iterate over all operation definitions in the document.
    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition>;

    /// Iterate over all fragment definitions in the document.
    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition>;
}

impl DocumentExt for SyntaxTree {
    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::OperationDefinition(op) = def {
                Some(op)
            } else {
                None
            }
        })
    }

    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::FragmentDefinition(frag) = def {
                Some(frag)
            } else {
                None
            }
        })
    }
}

/// Operation kind (query, mutation, subscription).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The kind name in PascalCase, as used in generated type identifiers
    /// (`GetUserQuery`, `UpdateUserMutation`).
    #[must_use]
    pub const fn pascal_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
            Self::Subscription => "Subscription",
        }
    }
}

/// Extension trait for operation definitions.
pub trait OperationExt {
    /// Get the operation kind (query, mutation, subscription).
    fn operation_kind(&self) -> OperationKind;

    /// Whether at least one variable definition is non-null and carries no
    /// default value. Operations with no variable definitions, or where
    /// every variable is nullable or defaulted, report `false`.
    fn has_required_variables(&self) -> bool;
}

impl OperationExt for cst::OperationDefinition {
    fn operation_kind(&self) -> OperationKind {
        match self.operation_type() {
            Some(op_type) if op_type.mutation_token().is_some() => OperationKind::Mutation,
            Some(op_type) if op_type.subscription_token().is_some() => OperationKind::Subscription,
            _ => OperationKind::Query,
        }
    }

    fn has_required_variables(&self) -> bool {
        let Some(var_defs) = self.variable_definitions() else {
            return false;
        };
        var_defs.variable_definitions().any(|var_def| {
            matches!(var_def.ty(), Some(cst::Type::NonNullType(_)))
                && var_def.default_value().is_none()
        })
    }
}
