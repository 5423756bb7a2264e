//! Import statements to prepend to the generated file.

use swr_codegen_config::SwrPluginConfig;

/// Compute the ordered import list: the transport-error type, then exactly
/// one import group for the SWR primitives. Type-only forms are used when
/// `useTypeImports` is set; the pagination primitive is included only when
/// pagination is enabled.
pub(crate) fn compute_imports(config: &SwrPluginConfig) -> Vec<String> {
    let infinite = config.infinite_enabled();
    let type_import = if config.use_type_imports {
        "import type"
    } else {
        "import"
    };

    let mut imports = vec![format!(
        "{type_import} {{ ClientError }} from 'graphql-request/dist/types';"
    )];

    if config.use_type_imports {
        if infinite {
            imports.push("import type { ConfigInterface as SWRConfigInterface, keyInterface as SWRKeyInterface, SWRInfiniteConfigInterface } from 'swr';".to_string());
            imports.push("import useSWR, { useSWRInfinite } from 'swr';".to_string());
        } else {
            imports.push("import type { ConfigInterface as SWRConfigInterface, keyInterface as SWRKeyInterface } from 'swr';".to_string());
            imports.push("import useSWR from 'swr';".to_string());
        }
    } else if infinite {
        imports.push("import useSWR, { useSWRInfinite, SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface, SWRInfiniteConfiguration as SWRInfiniteConfigInterface } from 'swr';".to_string());
    } else {
        imports.push(
            "import useSWR, { SWRConfiguration as SWRConfigInterface, Key as SWRKeyInterface } from 'swr';"
                .to_string(),
        );
    }

    imports
}
