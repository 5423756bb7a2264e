//! Document traversal callbacks.
//!
//! `SwrVisitor` implements the CST visitor over one generation session:
//! each operation definition encountered becomes an `OperationRecord`,
//! each fragment definition a `FragmentRecord`. The visitor only records
//! metadata; the tree is never altered.

use apollo_parser::cst;
use swr_codegen_apollo_ext::{DocumentVisitor, NameExt, OperationExt, TypeConditionExt};

use crate::naming::OperationNaming;
use crate::session::{FragmentRecord, GenerationSession, OperationRecord};

pub(crate) struct SwrVisitor<'a> {
    session: &'a mut GenerationSession,
    naming: &'a dyn OperationNaming,
}

impl<'a> SwrVisitor<'a> {
    pub(crate) fn new(
        session: &'a mut GenerationSession,
        naming: &'a dyn OperationNaming,
    ) -> Self {
        Self { session, naming }
    }
}

impl DocumentVisitor for SwrVisitor<'_> {
    fn visit_operation(&mut self, op: &cst::OperationDefinition) {
        // Anonymous operations cannot name a hook; the host's SDK layer
        // rejects them before codegen anyway.
        let Some(name) = op.name_text() else {
            tracing::warn!("skipping anonymous operation");
            return;
        };

        let kind = op.operation_kind();
        self.session.record_operation(OperationRecord {
            response_type: self.naming.operation_result_type(&name, kind),
            variables_type: self.naming.operation_variables_type(&name, kind),
            has_required_variables: op.has_required_variables(),
            name,
            kind,
        });
    }

    fn visit_fragment_definition(&mut self, frag: &cst::FragmentDefinition) {
        let Some(name) = frag.name_text() else {
            return;
        };
        self.session.record_fragment(FragmentRecord {
            name,
            type_condition: frag.type_condition_text().unwrap_or_default(),
            is_external: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::ConventionNaming;
    use swr_codegen_apollo_ext::{walk_document, OperationKind};

    fn collect(source: &str) -> GenerationSession {
        let tree = apollo_parser::Parser::new(source).parse();
        let naming = ConventionNaming::default();
        let mut session = GenerationSession::new();
        let mut visitor = SwrVisitor::new(&mut session, &naming);
        walk_document(&mut visitor, &tree);
        session
    }

    #[test]
    fn test_collects_operations_in_document_order() {
        let session = collect(
            r"
            query GetUser($id: ID!) { user(id: $id) { id } }
            mutation UpdateUser { updateUser { id } }
            query GetPosts { posts { id } }
            ",
        );

        let ops = session.operations();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].name, "GetUser");
        assert_eq!(ops[0].kind, OperationKind::Query);
        assert_eq!(ops[0].response_type, "GetUserQuery");
        assert_eq!(ops[0].variables_type, "GetUserQueryVariables");
        assert!(ops[0].has_required_variables);
        assert_eq!(ops[1].kind, OperationKind::Mutation);
        assert_eq!(ops[2].name, "GetPosts");
        assert!(!ops[2].has_required_variables);
    }

    #[test]
    fn test_skips_anonymous_operations() {
        let session = collect("{ user { id } } query Named { user { id } }");
        let ops = session.operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name, "Named");
    }

    #[test]
    fn test_collects_fragments() {
        let session = collect(
            r"
            fragment UserFields on User { name }
            query GetUser { user { ...UserFields } }
            ",
        );

        let frags = session.fragments();
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].name, "UserFields");
        assert_eq!(frags[0].type_condition, "User");
        assert!(!frags[0].is_external);
    }

    #[test]
    fn test_defaulted_variables_are_not_required() {
        let session =
            collect(r#"query ListItems($cursor: String! = "") { items(cursor: $cursor) { id } }"#);
        let ops = session.operations();
        assert_eq!(ops.len(), 1);
        assert!(!ops[0].has_required_variables);
    }
}
