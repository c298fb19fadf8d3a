use minijinja::context;
use sharpgen_core::GeneratedFile;
use sharpgen_core::ir::{HttpMethod, Operation, Parameter, ParameterLocation, Spec};
use sharpgen_core::normalize::naming::to_api_group_name;

use crate::GeneratorError;
use crate::generator::Layout;
use crate::type_mapper::{cs_type, return_cs_type};

/// Emit an interface and an implementation class per tag group, under `Api/`.
pub fn emit_clients(spec: &Spec, layout: &Layout) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let env = super::template_env();
    let interface_tmpl = env.get_template("client_interface.cs.j2")?;
    let client_tmpl = env.get_template("client.cs.j2")?;

    let mut files = Vec::new();
    for (tag, operations) in group_by_tag(spec) {
        let class_name = to_api_group_name(&tag);
        let ctx = context! {
            namespace => layout.namespace.clone(),
            tag => tag.clone(),
            class_name => class_name.clone(),
            operations => operations.iter().map(|op| operation_ctx(op)).collect::<Vec<_>>(),
        };

        files.push(GeneratedFile {
            path: layout.src(&format!("Api/I{class_name}.cs")),
            content: interface_tmpl.render(&ctx)?,
        });
        files.push(GeneratedFile {
            path: layout.src(&format!("Api/{class_name}.cs")),
            content: client_tmpl.render(&ctx)?,
        });
    }

    Ok(files)
}

/// Group operations by tag, preserving first-seen tag order.
fn group_by_tag(spec: &Spec) -> Vec<(String, Vec<&Operation>)> {
    let mut groups: Vec<(String, Vec<&Operation>)> = Vec::new();
    for op in &spec.operations {
        match groups.iter_mut().find(|(tag, _)| *tag == op.tag) {
            Some((_, ops)) => ops.push(op),
            None => groups.push((op.tag.clone(), vec![op])),
        }
    }
    groups
}

fn operation_ctx(op: &Operation) -> minijinja::Value {
    let query = wire_items(op, ParameterLocation::Query);
    let headers = wire_items(op, ParameterLocation::Header);

    context! {
        id => op.id.clone(),
        summary => op.summary.clone(),
        return_sig => return_signature(op),
        args => argument_list(op),
        path_expr => path_expression(op),
        query => query,
        headers => headers,
        send => send_statement(op),
    }
}

fn return_signature(op: &Operation) -> String {
    if op.return_type.is_void() {
        "Task".to_string()
    } else {
        format!("Task<{}>", return_cs_type(op))
    }
}

fn argument_list(op: &Operation) -> String {
    let mut args: Vec<String> = op
        .parameters
        .iter()
        .map(|p| format!("{} {}", cs_type(&p.ty), p.name))
        .collect();
    if let Some(body) = &op.request_body {
        args.push(format!("{} body", cs_type(&body.ty)));
    }
    args.join(", ")
}

/// The path template as a C# interpolated string, with each path parameter
/// substituted by its escaped runtime value.
fn path_expression(op: &Operation) -> String {
    let mut path = op.path.clone();
    for param in &op.parameters {
        if param.location != ParameterLocation::Path {
            continue;
        }
        let placeholder = format!("{{{}}}", param.wire_name);
        let substitution = format!("{{Uri.EscapeDataString({})}}", string_value(param));
        path = path.replace(&placeholder, &substitution);
    }
    format!("$\"{path}\"")
}

fn wire_items(op: &Operation, location: ParameterLocation) -> Vec<minijinja::Value> {
    op.parameters
        .iter()
        .filter(|p| p.location == location)
        .map(|p| {
            context! {
                name => p.wire_name.clone(),
                param => p.name.clone(),
                value => string_value(p),
                optional => !p.required,
            }
        })
        .collect()
}

/// A C# expression turning the parameter into its wire string.
fn string_value(param: &Parameter) -> String {
    let cs = cs_type(&param.ty);
    match cs.as_str() {
        "string" | "string?" => param.name.clone(),
        _ if cs.ends_with('?') => format!("{}?.ToString()", param.name),
        _ => format!("{}.ToString()", param.name),
    }
}

fn send_statement(op: &Operation) -> String {
    let method = http_method_expr(op.method);
    let body = if op.request_body.is_some() { "body" } else { "null" };
    let query = if op.parameters.iter().any(|p| p.location == ParameterLocation::Query) {
        "query"
    } else {
        "null"
    };
    let headers = if op.parameters.iter().any(|p| p.location == ParameterLocation::Header) {
        "headers"
    } else {
        "null"
    };

    if op.return_type.is_void() {
        format!("await SendAsync({method}, path, {body}, {query}, {headers});")
    } else {
        format!(
            "return await SendAsync<{}>({method}, path, {body}, {query}, {headers});",
            return_cs_type(op)
        )
    }
}

fn http_method_expr(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "HttpMethod.Get",
        HttpMethod::Post => "HttpMethod.Post",
        HttpMethod::Put => "HttpMethod.Put",
        HttpMethod::Delete => "HttpMethod.Delete",
        HttpMethod::Patch => "HttpMethod.Patch",
        HttpMethod::Options => "HttpMethod.Options",
        HttpMethod::Head => "HttpMethod.Head",
        HttpMethod::Trace => "HttpMethod.Trace",
    }
}
