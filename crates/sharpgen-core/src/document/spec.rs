use indexmap::IndexMap;
use serde::Deserialize;

use super::components::Components;
use super::paths::PathItem;

/// Info object describing the API. Every field is optional here; the
/// normalizer substitutes defaults where the document stays silent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
}

/// A server base URL.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub url: String,
    pub description: Option<String>,
}

/// Top-level OpenAPI 3.x document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub openapi: String,

    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub servers: Vec<Server>,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    pub components: Option<Components>,
}
