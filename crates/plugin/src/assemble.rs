//! Content assembly: the fixed-order concatenation of every generated
//! declaration.

use swr_codegen_config::SwrPluginConfig;

use crate::compose::{compose_query_hooks, HookOptions};
use crate::emit::{indent_multiline, render_document, Declaration, TypeAlias};
use crate::session::GenerationSession;

/// Assemble the generated declarations for one session, in the fixed
/// output order: raw-response envelope, pagination key-loader type, the
/// hook-bearing factory function (with pagination utilities and the key
/// helper inside it), the factory's return statement, and the exported
/// return-type alias.
pub(crate) fn assemble_content(session: &GenerationSession, config: &SwrPluginConfig) -> String {
    let infinite = config.infinite_enabled();
    let prefix = &config.types_prefix;
    let suffix = &config.types_suffix;

    let hooks: Vec<String> = session
        .filtered_queries(config)
        .flat_map(|op| {
            let options = HookOptions {
                autogen_key: config.autogen_swr_key,
                infinite: infinite && config.use_swr_infinite.is_match(&op.name),
                raw_request: config.raw_request,
                types_prefix: prefix,
                types_suffix: suffix,
            };
            compose_query_hooks(op, &options)
        })
        .map(|hook| indent_multiline(&hook, 2))
        .collect();

    tracing::debug!(hooks = hooks.len(), "assembling generated content");

    let mut declarations = Vec::new();

    if config.raw_request {
        declarations.push(Declaration::TypeAlias(TypeAlias {
            exported: false,
            name: "SWRRawResponse<Data = any>".to_string(),
            body: "{ data?: Data | undefined; extensions?: any; headers: Headers; status: number; errors?: GraphQLError[] | undefined; }".to_string(),
        }));
    }

    if infinite {
        declarations.push(Declaration::TypeAlias(TypeAlias {
            exported: true,
            name: format!("{prefix}SWRInfiniteKeyLoader{suffix}<Data = unknown, Variables = unknown>"),
            body: "(\n  index: number,\n  previousPageData: Data | null\n) => [keyof Variables, Variables[keyof Variables] | null] | null".to_string(),
        }));
    }

    declarations.push(Declaration::Block(
        "export function getSdkWithHooks(client: GraphQLClient, withWrapper: SdkFunctionWrapper = defaultWrapper) {\n  const sdk = getSdk(client, withWrapper);".to_string(),
    ));

    if infinite {
        declarations.push(Declaration::Block(format!(
            "  const utilsForInfinite = {{
    generateGetKey: <Data = unknown, Variables = unknown>(
      id: any,
      getKey: {prefix}SWRInfiniteKeyLoader{suffix}<Data, Variables>
    ) => (pageIndex: number, previousData: Data | null) => {{
      const key = getKey(pageIndex, previousData)
      return key ? [...key, ...id] : null
    }},
    generateFetcher: <Query = unknown, Variables = unknown>(query: (variables: Variables) => Promise<Query>, variables?: Variables) => (
        fieldName: keyof Variables,
        fieldValue: Variables[typeof fieldName]
      ) => query({{ ...variables, [fieldName]: fieldValue }} as Variables)
  }}"
        )));
    }

    if config.autogen_swr_key {
        // Entries are sorted by field name so the derived key is stable
        // under property reordering.
        declarations.push(Declaration::Block(
            "  const genKey = <V extends Record<string, unknown> = Record<string, unknown>>(name: string, object: V = {} as V): SWRKeyInterface => [name, ...Object.keys(object).sort().map(key => object[key])];".to_string(),
        ));
    }

    declarations.push(Declaration::Block(format!(
        "  return {{\n    ...sdk,\n{}\n  }};\n}}",
        hooks.join(",\n")
    )));

    declarations.push(Declaration::TypeAlias(TypeAlias {
        exported: true,
        name: format!("{prefix}SdkWithHooks{suffix}"),
        body: "ReturnType<typeof getSdkWithHooks>".to_string(),
    }));

    render_document(&declarations)
}
