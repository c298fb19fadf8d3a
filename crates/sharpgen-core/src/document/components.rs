use indexmap::IndexMap;
use serde::Deserialize;

use super::paths::{
    Parameter, ParameterOrRef, RequestBody, RequestBodyOrRef, Response, ResponseOrRef,
};
use super::schema::SchemaOrRef;
use super::security::SecurityScheme;

/// Components object holding reusable definitions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub parameters: IndexMap<String, ParameterOrRef>,

    #[serde(rename = "requestBodies", default)]
    pub request_bodies: IndexMap<String, RequestBodyOrRef>,

    #[serde(default)]
    pub responses: IndexMap<String, ResponseOrRef>,

    #[serde(rename = "securitySchemes", default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

impl Components {
    /// Resolve a `#/components/parameters/<name>` pointer one level deep.
    pub fn parameter(&self, ref_path: &str) -> Option<&Parameter> {
        match self.parameters.get(ref_name(ref_path, "parameters")?)? {
            ParameterOrRef::Parameter(param) => Some(param),
            ParameterOrRef::Ref { .. } => None,
        }
    }

    /// Resolve a `#/components/requestBodies/<name>` pointer one level deep.
    pub fn request_body(&self, ref_path: &str) -> Option<&RequestBody> {
        match self.request_bodies.get(ref_name(ref_path, "requestBodies")?)? {
            RequestBodyOrRef::RequestBody(body) => Some(body),
            RequestBodyOrRef::Ref { .. } => None,
        }
    }

    /// Resolve a `#/components/responses/<name>` pointer one level deep.
    pub fn response(&self, ref_path: &str) -> Option<&Response> {
        match self.responses.get(ref_name(ref_path, "responses")?)? {
            ResponseOrRef::Response(response) => Some(response),
            ResponseOrRef::Ref { .. } => None,
        }
    }
}

/// Extract the name from `#/components/<section>/<name>`.
fn ref_name<'a>(ref_path: &'a str, section: &str) -> Option<&'a str> {
    let rest = ref_path.strip_prefix("#/components/")?;
    let (declared_section, name) = rest.split_once('/')?;
    (declared_section == section).then_some(name)
}
