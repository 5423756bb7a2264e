//! Type-name derivation for collected operations.
//!
//! The wrapped SDK layer owns the generated response and variables types;
//! this generator only needs their names. `OperationNaming` is that seam
//! made explicit: hosts that derive names differently implement the trait,
//! and `ConventionNaming` reproduces the common convention
//! (`GetUserQuery` / `GetUserQueryVariables`, with the configured prefix
//! and suffix applied).

use swr_codegen_apollo_ext::OperationKind;
use swr_codegen_config::SwrPluginConfig;

/// Supplies the generated type names for an operation.
pub trait OperationNaming {
    /// Name of the generated response type for the operation.
    fn operation_result_type(&self, name: &str, kind: OperationKind) -> String;

    /// Name of the generated variables type for the operation.
    fn operation_variables_type(&self, name: &str, kind: OperationKind) -> String;
}

/// The default naming convention:
/// `{prefix}{PascalCase(name)}{Kind}{suffix}` and
/// `{prefix}{PascalCase(name)}{Kind}Variables{suffix}`.
#[derive(Debug, Clone, Default)]
pub struct ConventionNaming {
    prefix: String,
    suffix: String,
}

impl ConventionNaming {
    #[must_use]
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Use the type prefix/suffix from the plugin configuration.
    #[must_use]
    pub fn from_config(config: &SwrPluginConfig) -> Self {
        Self::new(config.types_prefix.clone(), config.types_suffix.clone())
    }
}

impl OperationNaming for ConventionNaming {
    fn operation_result_type(&self, name: &str, kind: OperationKind) -> String {
        format!(
            "{}{}{}{}",
            self.prefix,
            pascal_case(name),
            kind.pascal_name(),
            self.suffix
        )
    }

    fn operation_variables_type(&self, name: &str, kind: OperationKind) -> String {
        format!(
            "{}{}{}Variables{}",
            self.prefix,
            pascal_case(name),
            kind.pascal_name(),
            self.suffix
        )
    }
}

/// Convert an operation name to PascalCase.
///
/// Word boundaries are `_`, `-`, and whitespace; the first letter of each
/// word is uppercased and the rest is preserved, so `getUser`, `get_user`,
/// and `GetUser` all map to `GetUser`.
#[must_use]
pub fn pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split(|c: char| c == '_' || c == '-' || c.is_whitespace()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("GetUser"), "GetUser");
        assert_eq!(pascal_case("getUser"), "GetUser");
        assert_eq!(pascal_case("get_user"), "GetUser");
        assert_eq!(pascal_case("get-user-by-id"), "GetUserById");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_convention_naming() {
        let naming = ConventionNaming::default();
        assert_eq!(
            naming.operation_result_type("GetUser", OperationKind::Query),
            "GetUserQuery"
        );
        assert_eq!(
            naming.operation_variables_type("GetUser", OperationKind::Query),
            "GetUserQueryVariables"
        );
        assert_eq!(
            naming.operation_result_type("updateUser", OperationKind::Mutation),
            "UpdateUserMutation"
        );
    }

    #[test]
    fn test_convention_naming_with_prefix_suffix() {
        let naming = ConventionNaming::new("I", "Gen");
        assert_eq!(
            naming.operation_result_type("GetUser", OperationKind::Query),
            "IGetUserQueryGen"
        );
        assert_eq!(
            naming.operation_variables_type("GetUser", OperationKind::Query),
            "IGetUserQueryVariablesGen"
        );
    }
}
