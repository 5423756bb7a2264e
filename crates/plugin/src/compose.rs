//! Hook composition: one or two method declarations per query operation.

use crate::emit::{Method, Param};
use crate::naming::pascal_case;
use crate::session::OperationRecord;

/// Per-operation composition options, resolved from the plugin
/// configuration by the assembler.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HookOptions<'a> {
    /// Derive the cache key internally instead of accepting one.
    pub autogen_key: bool,
    /// Additionally emit the paginated hook variant.
    pub infinite: bool,
    /// Wrap the response type in the transport envelope.
    pub raw_request: bool,
    pub types_prefix: &'a str,
    pub types_suffix: &'a str,
}

/// Compose the hook declarations for one filtered query operation: the
/// base hook, plus the `Infinite` variant when pagination is enabled for
/// it. Returned in emission order.
pub(crate) fn compose_query_hooks(op: &OperationRecord, options: &HookOptions<'_>) -> Vec<String> {
    let pascal_name = pascal_case(&op.name);
    let response_type = if options.raw_request {
        format!("SWRRawResponse<{}>", op.response_type)
    } else {
        op.response_type.clone()
    };
    let variables_type = &op.variables_type;

    let variables_param = |ty: &str| {
        if op.has_required_variables {
            Param::required("variables", ty)
        } else {
            Param::optional("variables", ty)
        }
    };

    // Under autogen the key is derived from the operation name plus the
    // variables object, so no external key parameter exists.
    let gen_key_expr = format!("genKey<{variables_type}>('{pascal_name}', variables)");

    let mut hooks = Vec::with_capacity(if options.infinite { 2 } else { 1 });

    let mut base_params = Vec::new();
    if !options.autogen_key {
        base_params.push(Param::required("key", "SWRKeyInterface"));
    }
    base_params.push(variables_param(variables_type));
    base_params.push(Param::optional(
        "config",
        format!("SWRConfigInterface<{response_type}, ClientError>"),
    ));

    let key_expr = if options.autogen_key {
        gen_key_expr.clone()
    } else {
        "key".to_string()
    };
    hooks.push(
        Method {
            name: format!("use{pascal_name}"),
            params: base_params,
            body: format!(
                "return useSWR<{response_type}, ClientError>({key_expr}, () => sdk.{}(variables), config);",
                op.name
            ),
        }
        .render(),
    );

    if options.infinite {
        let key_loader_type = format!(
            "{}SWRInfiniteKeyLoader{}<{response_type}, {variables_type}>",
            options.types_prefix, options.types_suffix
        );

        let mut infinite_params = Vec::new();
        if !options.autogen_key {
            infinite_params.push(Param::required("id", "string"));
        }
        infinite_params.push(Param::required("getKey", key_loader_type));
        infinite_params.push(variables_param(variables_type));
        infinite_params.push(Param::optional(
            "config",
            format!("SWRInfiniteConfigInterface<{response_type}, ClientError>"),
        ));

        // The derived key is an array of scalars, so spreading it into the
        // per-page key tuple is well-formed (same shape as the `id` case).
        let id_expr = if options.autogen_key {
            gen_key_expr
        } else {
            "id".to_string()
        };
        hooks.push(
            Method {
                name: format!("use{pascal_name}Infinite"),
                params: infinite_params,
                body: format!(
                    "return useSWRInfinite<{response_type}, ClientError>(\n  utilsForInfinite.generateGetKey<{response_type}, {variables_type}>({id_expr}, getKey),\n  utilsForInfinite.generateFetcher<{response_type}, {variables_type}>(sdk.{}, variables),\n  config);",
                    op.name
                ),
            }
            .render(),
        );
    }

    hooks
}

#[cfg(test)]
mod tests {
    use super::*;
    use swr_codegen_apollo_ext::OperationKind;

    fn record(name: &str, required: bool) -> OperationRecord {
        OperationRecord {
            name: name.to_string(),
            kind: OperationKind::Query,
            response_type: format!("{name}Query"),
            variables_type: format!("{name}QueryVariables"),
            has_required_variables: required,
        }
    }

    const DEFAULT: HookOptions<'static> = HookOptions {
        autogen_key: false,
        infinite: false,
        raw_request: false,
        types_prefix: "",
        types_suffix: "",
    };

    #[test]
    fn test_base_hook_with_required_variables() {
        let hooks = compose_query_hooks(&record("GetUser", true), &DEFAULT);
        assert_eq!(hooks.len(), 1);
        assert_eq!(
            hooks[0],
            "useGetUser(key: SWRKeyInterface, variables: GetUserQueryVariables, config?: SWRConfigInterface<GetUserQuery, ClientError>) {\n  return useSWR<GetUserQuery, ClientError>(key, () => sdk.GetUser(variables), config);\n}"
        );
    }

    #[test]
    fn test_base_hook_with_optional_variables() {
        let hooks = compose_query_hooks(&record("GetPosts", false), &DEFAULT);
        assert!(hooks[0].contains("variables?: GetPostsQueryVariables"));
    }

    #[test]
    fn test_autogen_key_drops_key_parameter() {
        let options = HookOptions {
            autogen_key: true,
            ..DEFAULT
        };
        let hooks = compose_query_hooks(&record("GetUser", true), &options);
        assert!(!hooks[0].contains("key: SWRKeyInterface"));
        assert!(hooks[0].contains("genKey<GetUserQueryVariables>('GetUser', variables)"));
    }

    #[test]
    fn test_infinite_variant() {
        let options = HookOptions {
            infinite: true,
            ..DEFAULT
        };
        let hooks = compose_query_hooks(&record("ListItems", false), &options);
        assert_eq!(hooks.len(), 2);
        assert_eq!(
            hooks[1],
            "useListItemsInfinite(id: string, getKey: SWRInfiniteKeyLoader<ListItemsQuery, ListItemsQueryVariables>, variables?: ListItemsQueryVariables, config?: SWRInfiniteConfigInterface<ListItemsQuery, ClientError>) {\n  return useSWRInfinite<ListItemsQuery, ClientError>(\n    utilsForInfinite.generateGetKey<ListItemsQuery, ListItemsQueryVariables>(id, getKey),\n    utilsForInfinite.generateFetcher<ListItemsQuery, ListItemsQueryVariables>(sdk.ListItems, variables),\n    config);\n}"
        );
    }

    #[test]
    fn test_infinite_with_autogen_key_drops_id_consistently() {
        let options = HookOptions {
            autogen_key: true,
            infinite: true,
            ..DEFAULT
        };
        let hooks = compose_query_hooks(&record("ListItems", false), &options);
        assert!(!hooks[0].contains("key: SWRKeyInterface"));
        assert!(!hooks[1].contains("id: string"));
        assert!(hooks[1]
            .contains("generateGetKey<ListItemsQuery, ListItemsQueryVariables>(genKey<ListItemsQueryVariables>('ListItems', variables), getKey)"));
    }

    #[test]
    fn test_raw_request_wraps_response_type() {
        let options = HookOptions {
            raw_request: true,
            ..DEFAULT
        };
        let hooks = compose_query_hooks(&record("GetUser", true), &options);
        assert!(hooks[0].contains("useSWR<SWRRawResponse<GetUserQuery>, ClientError>"));
        assert!(hooks[0].contains("SWRConfigInterface<SWRRawResponse<GetUserQuery>, ClientError>"));
    }

    #[test]
    fn test_type_prefix_suffix_on_key_loader() {
        let options = HookOptions {
            infinite: true,
            types_prefix: "I",
            types_suffix: "Gen",
            ..DEFAULT
        };
        let hooks = compose_query_hooks(&record("ListItems", false), &options);
        assert!(hooks[1].contains("getKey: ISWRInfiniteKeyLoaderGen<ListItemsQuery, ListItemsQueryVariables>"));
    }
}
