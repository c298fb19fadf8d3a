use super::types::TypeRef;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// Lower-case form, used when synthesizing operation identifiers.
    pub fn lower(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Trace => "trace",
        }
    }
}

/// A fully resolved API operation.
#[derive(Debug, Clone)]
pub struct Operation {
    /// Normalized operation identifier; declared or synthesized from
    /// method and path. Uniqueness is the document author's responsibility.
    pub id: String,
    pub tag: String,
    pub method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub return_type: TypeRef,
    /// True when the success response is an array; `return_type` then holds
    /// the element type.
    pub returns_list: bool,
    pub parameters: Vec<Parameter>,
    pub request_body: Option<RequestBody>,
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
}

impl ParameterLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

/// A resolved operation parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    pub wire_name: String,
    pub name: String,
    pub ty: TypeRef,
    pub location: ParameterLocation,
    pub required: bool,
    pub description: Option<String>,
    pub example: Option<String>,
}

/// A resolved request body.
#[derive(Debug, Clone)]
pub struct RequestBody {
    pub ty: TypeRef,
    pub content_type: String,
    pub required: bool,
    pub description: Option<String>,
}
