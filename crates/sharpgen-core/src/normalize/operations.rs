//! Path/method walking: parameter merging, request body selection, and
//! return-type inference.

use indexmap::IndexMap;

use crate::document::paths::{
    MediaType, Operation as RawOperation, Parameter as RawParameter, ParameterLocation as RawLocation,
    ParameterOrRef, PathItem, RequestBodyOrRef, ResponseOrRef,
};
use crate::document::schema::SchemaOrRef;
use crate::document::{Components, Document};
use crate::ir::{
    HttpMethod, Operation, Parameter, ParameterLocation, RequestBody, Scalar, TypeRef,
};

use super::example_literal;
use super::naming::{to_param_name, to_token_case};
use super::types;

/// Grouping tag for operations that declare none.
const DEFAULT_TAG: &str = "Default";

/// Walk every path × method pair, in declaration order for paths and fixed
/// method order within a path.
pub fn resolve_operations(doc: &Document) -> Vec<Operation> {
    let empty = Components::default();
    let components = doc.components.as_ref().unwrap_or(&empty);

    let mut operations = Vec::new();
    for (path, item) in &doc.paths {
        for (method, raw) in method_slots(item) {
            if let Some(raw) = raw {
                operations.push(build_operation(method, path, raw, &item.parameters, components));
            }
        }
    }
    operations
}

fn method_slots(item: &PathItem) -> [(HttpMethod, Option<&RawOperation>); 8] {
    [
        (HttpMethod::Get, item.get.as_ref()),
        (HttpMethod::Post, item.post.as_ref()),
        (HttpMethod::Put, item.put.as_ref()),
        (HttpMethod::Delete, item.delete.as_ref()),
        (HttpMethod::Patch, item.patch.as_ref()),
        (HttpMethod::Options, item.options.as_ref()),
        (HttpMethod::Head, item.head.as_ref()),
        (HttpMethod::Trace, item.trace.as_ref()),
    ]
}

fn build_operation(
    method: HttpMethod,
    path: &str,
    raw: &RawOperation,
    path_params: &[ParameterOrRef],
    components: &Components,
) -> Operation {
    let tag = raw
        .tags
        .first()
        .cloned()
        .unwrap_or_else(|| DEFAULT_TAG.to_string());

    let mut parameters: Vec<Parameter> = raw
        .parameters
        .iter()
        .filter_map(|node| deref_parameter(node, components))
        .map(resolve_parameter)
        .collect();

    // Path-level parameters fill in behind operation-level ones; an
    // operation-level declaration with the same wire name wins.
    for node in path_params {
        let Some(raw_param) = deref_parameter(node, components) else {
            continue;
        };
        if parameters.iter().all(|p| p.wire_name != raw_param.name) {
            parameters.push(resolve_parameter(raw_param));
        }
    }

    let (return_type, returns_list) = resolve_return_type(raw, components);

    let id = raw.operation_id.clone().unwrap_or_else(|| {
        let flattened = path.replace('/', "_");
        format!("{}_{}", method.lower(), flattened.trim_matches('_'))
    });

    Operation {
        id: to_token_case(&id),
        tag,
        method,
        path: path.to_string(),
        summary: raw.summary.clone(),
        description: raw.description.clone(),
        return_type,
        returns_list,
        parameters,
        request_body: resolve_request_body(raw, components),
    }
}

fn deref_parameter<'a>(
    node: &'a ParameterOrRef,
    components: &'a Components,
) -> Option<&'a RawParameter> {
    match node {
        ParameterOrRef::Parameter(param) => Some(param),
        ParameterOrRef::Ref { ref_path } => {
            let resolved = components.parameter(ref_path);
            if resolved.is_none() {
                log::warn!("unresolved parameter reference {ref_path}, skipping");
            }
            resolved
        }
    }
}

fn resolve_parameter(raw: &RawParameter) -> Parameter {
    let ty = match &raw.schema {
        Some(schema) => types::resolve(schema),
        None => TypeRef::scalar(Scalar::String),
    }
    .into_nullable(!raw.required);

    let example = raw
        .example
        .as_ref()
        .and_then(example_literal)
        .or_else(|| {
            raw.schema
                .as_ref()
                .and_then(SchemaOrRef::as_schema)
                .and_then(|s| s.example.as_ref())
                .and_then(example_literal)
        });

    Parameter {
        wire_name: raw.name.clone(),
        name: to_param_name(&raw.name),
        ty,
        location: map_location(raw.location),
        required: raw.required,
        description: raw.description.clone(),
        example,
    }
}

fn map_location(location: RawLocation) -> ParameterLocation {
    match location {
        RawLocation::Path => ParameterLocation::Path,
        RawLocation::Query => ParameterLocation::Query,
        RawLocation::Header => ParameterLocation::Header,
        RawLocation::Cookie => ParameterLocation::Cookie,
    }
}

fn resolve_request_body(raw: &RawOperation, components: &Components) -> Option<RequestBody> {
    let body = match raw.request_body.as_ref()? {
        RequestBodyOrRef::RequestBody(body) => body,
        RequestBodyOrRef::Ref { ref_path } => {
            let resolved = components.request_body(ref_path);
            if resolved.is_none() {
                log::warn!("unresolved request body reference {ref_path}, ignoring");
            }
            resolved?
        }
    };

    let Some((content_type, media)) = json_content(&body.content) else {
        log::warn!("request body declares no JSON media type, ignoring");
        return None;
    };
    let schema = media.schema.as_ref()?;

    Some(RequestBody {
        ty: types::resolve(schema),
        content_type: content_type.clone(),
        required: body.required,
        description: body.description.clone(),
    })
}

/// The success return type: first `2xx` response, first JSON media type
/// within it. An array schema unwraps to its element type with the list flag
/// set; anything missing along the way means no return value.
fn resolve_return_type(raw: &RawOperation, components: &Components) -> (TypeRef, bool) {
    let success = raw
        .responses
        .iter()
        .find(|(status, _)| status.starts_with('2'))
        .map(|(_, response)| response);

    let Some(response) = success else {
        return (TypeRef::void(), false);
    };

    let response = match response {
        ResponseOrRef::Response(response) => response,
        ResponseOrRef::Ref { ref_path } => match components.response(ref_path) {
            Some(response) => response,
            None => {
                log::warn!("unresolved response reference {ref_path}, treating as empty");
                return (TypeRef::void(), false);
            }
        },
    };

    let Some((_, media)) = json_content(&response.content) else {
        return (TypeRef::void(), false);
    };
    let Some(schema) = media.schema.as_ref() else {
        return (TypeRef::void(), false);
    };

    if let SchemaOrRef::Schema(inline) = schema
        && types::has_type(inline, "array")
        && let Some(items) = &inline.items
    {
        return (types::resolve(items), true);
    }

    (types::resolve(schema), false)
}

/// First media type whose key mentions JSON, case-insensitively.
fn json_content(content: &IndexMap<String, MediaType>) -> Option<(&String, &MediaType)> {
    content
        .iter()
        .find(|(key, _)| key.to_ascii_lowercase().contains("json"))
}
