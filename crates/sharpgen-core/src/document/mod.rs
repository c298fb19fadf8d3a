//! The raw document graph: a serde model of an OpenAPI 3.x description.
//!
//! This is the input boundary of the pipeline. The normalizer only reads the
//! graph; nothing here is ever mutated or re-serialized. All named
//! collections are [`indexmap::IndexMap`]s so declaration order survives into
//! the normalized output.

pub mod components;
pub mod paths;
pub mod schema;
pub mod security;
pub mod spec;

pub use components::Components;
pub use paths::{
    MediaType, Operation, Parameter, ParameterLocation, ParameterOrRef, PathItem, RequestBody,
    RequestBodyOrRef, Response, ResponseOrRef,
};
pub use schema::{AdditionalProperties, Discriminator, Schema, SchemaOrRef};
pub use spec::{Document, Info, Server};

use crate::error::LoadError;

/// Load a document from YAML text.
pub fn from_yaml(input: &str) -> Result<Document, LoadError> {
    let doc: Document = serde_yaml_ng::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

/// Load a document from JSON text.
pub fn from_json(input: &str) -> Result<Document, LoadError> {
    let doc: Document = serde_json::from_str(input)?;
    validate_version(&doc)?;
    Ok(doc)
}

fn validate_version(doc: &Document) -> Result<(), LoadError> {
    if !doc.openapi.starts_with("3.") {
        return Err(LoadError::UnsupportedVersion(doc.openapi.clone()));
    }
    Ok(())
}
