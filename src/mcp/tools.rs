//! The package tools offered over MCP.
//!
//! Each tool is a thin wrapper over [`crate::package`]: arguments arrive as
//! a decoded [`ToolCall`], and results go back as pretty-printed JSON text.

use serde::Serialize;
use serde_json::{json, Value};

use crate::mcp::protocol::{
    AliasArgs, DescriptionArgs, FamilyFilterArgs, ToolCall, ToolCallParams,
};
use crate::package::{self, alias, FamilyMatch, PackageCode, FAMILIES};

/// A tool entry in the `tools/list` reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Content item in a tool call reply.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

/// Result of a tool call.
///
/// Tool failures (unknown tool, bad arguments) are reported here with
/// `is_error` set rather than as JSON-RPC errors.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    pub content: Vec<ToolContent>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::text(message)
        }
    }

    /// Creates a successful result carrying `value` as pretty-printed JSON.
    #[must_use]
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::text(text),
            Err(e) => Self::error(format!("Failed to serialise result: {e}")),
        }
    }
}

#[derive(Debug, Serialize)]
struct Classified<'a> {
    description: &'a str,
    package: Option<PackageCode>,
}

#[derive(Debug, Serialize)]
struct Explained<'a> {
    description: &'a str,
    normalized: String,
    family: Option<FamilyMatch>,
    package: Option<PackageCode>,
}

#[derive(Debug, Serialize)]
struct AliasResolution<'a> {
    package: &'a str,
    canonical: &'a str,
    is_alias: bool,
}

#[derive(Debug, Serialize)]
struct FamilyEntry {
    index: usize,
    name: &'static str,
    pattern: String,
}

#[derive(Debug, Serialize)]
struct FamilyListing {
    count: usize,
    total: usize,
    families: Vec<FamilyEntry>,
}

/// Decodes and runs one `tools/call` request.
#[must_use]
pub fn dispatch(params: ToolCallParams) -> ToolCallResult {
    match ToolCall::parse(params) {
        Ok(call) => run(&call),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected tool call");
            ToolCallResult::error(e.to_string())
        }
    }
}

/// Runs a decoded tool call.
#[must_use]
pub fn run(call: &ToolCall) -> ToolCallResult {
    tracing::debug!(tool = call.name(), "Tool call");

    match call {
        ToolCall::ClassifyPackage(args) => classify_package(args),
        ToolCall::ExplainPackage(args) => explain_package(args),
        ToolCall::ResolvePackageAlias(args) => resolve_package_alias(args),
        ToolCall::ListPackageFamilies(args) => list_package_families(args),
    }
}

fn classify_package(args: &DescriptionArgs) -> ToolCallResult {
    ToolCallResult::json(&Classified {
        description: &args.description,
        package: package::classify(&args.description),
    })
}

fn explain_package(args: &DescriptionArgs) -> ToolCallResult {
    let package::Classification {
        normalized,
        family,
        code,
    } = package::explain(&args.description);

    ToolCallResult::json(&Explained {
        description: &args.description,
        normalized,
        family,
        package: code,
    })
}

fn resolve_package_alias(args: &AliasArgs) -> ToolCallResult {
    let canonical = alias::canonical(&args.package);

    ToolCallResult::json(&AliasResolution {
        package: &args.package,
        canonical: canonical.unwrap_or(&args.package),
        is_alias: canonical.is_some(),
    })
}

fn list_package_families(args: &FamilyFilterArgs) -> ToolCallResult {
    let filter = args.filter.as_deref().map(str::to_lowercase);

    let families: Vec<FamilyEntry> = FAMILIES
        .iter()
        .enumerate()
        .filter(|(_, family)| {
            filter
                .as_deref()
                .map_or(true, |f| family.name.to_lowercase().contains(f))
        })
        .map(|(index, family)| FamilyEntry {
            index,
            name: family.name,
            pattern: family.pattern(),
        })
        .collect();

    ToolCallResult::json(&FamilyListing {
        count: families.len(),
        total: FAMILIES.len(),
        families,
    })
}

fn string_schema(field: &str, description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            field: { "type": "string", "description": description }
        },
        "required": [field]
    })
}

/// The tools offered in `tools/list`, in a fixed order.
#[must_use]
pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: ToolCall::CLASSIFY_PACKAGE,
            description: "Identify the electronic component package mentioned in a free-text \
                 description (e.g. a distributor product title) and return its canonical \
                 code, such as TO-220, LQFP64 or SOT23-6. Returns null when no known \
                 package is mentioned.",
            input_schema: string_schema("description", "Free-text component description"),
        },
        ToolDefinition {
            name: ToolCall::EXPLAIN_PACKAGE,
            description: "Show how a description is classified: the normalised text, the \
                 catalog family that matched, the raw and cleaned tokens, and the final code.",
            input_schema: string_schema("description", "Free-text component description"),
        },
        ToolDefinition {
            name: ToolCall::RESOLVE_PACKAGE_ALIAS,
            description: "Map a package name to its canonical spelling (e.g. DPAK to TO-252, \
                 SOT23 to SOT23-3). Names that are not aliases are returned unchanged.",
            input_schema: string_schema(
                "package",
                "Package name in cleaned form (uppercase, no spaces)",
            ),
        },
        ToolDefinition {
            name: ToolCall::LIST_PACKAGE_FAMILIES,
            description: "List the recognised package families in match precedence order, \
                 with the pattern each one matches.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "filter": {
                        "type": "string",
                        "description": "Optional: case-insensitive substring of the family name"
                    }
                }
            }),
        },
    ]
}
