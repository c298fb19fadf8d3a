//! The normalization pipeline: raw document graph in, immutable [`Spec`] out.
//!
//! One synchronous, best-effort pass. Unsupported constructs degrade to
//! opaque types or are skipped with a warning; nothing in here fails.

pub mod naming;
pub mod operations;
pub mod schemas;
pub mod security;
pub mod types;

use crate::document::Document;
use crate::ir::Spec;

/// Title used when the document's info block omits one.
const DEFAULT_TITLE: &str = "Api";

/// Build the normalized [`Spec`] from a loaded document.
pub fn normalize(doc: &Document) -> Spec {
    let (models, enums) = schemas::resolve_schemas(doc);

    Spec {
        title: doc
            .info
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: doc.info.description.clone(),
        version: doc.info.version.clone(),
        base_url: doc.servers.first().map(|server| server.url.clone()),
        models,
        enums,
        operations: operations::resolve_operations(doc),
        security_schemes: security::classify_schemes(doc),
    }
}

/// Render an example value as a display literal: strings quoted, numbers and
/// booleans verbatim, structured values dropped.
pub(crate) fn example_literal(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(format!("\"{text}\"")),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
