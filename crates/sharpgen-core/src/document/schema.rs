use indexmap::IndexMap;
use serde::Deserialize;

/// A reference or inline schema node.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// The inline schema, if this node is not a reference.
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(schema) => Some(schema),
            SchemaOrRef::Ref { .. } => None,
        }
    }
}

/// Discriminator block on a polymorphic base schema.
#[derive(Debug, Clone, Deserialize)]
pub struct Discriminator {
    #[serde(rename = "propertyName")]
    pub property_name: String,

    #[serde(default)]
    pub mapping: IndexMap<String, String>,
}

/// `additionalProperties` is a boolean or a schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<SchemaOrRef>),
}

/// A schema node. The `type` keyword stays a free string; the type resolver
/// owns the (case-insensitive) interpretation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    pub format: Option<String>,

    pub description: Option<String>,

    /// OpenAPI 3.0 explicit nullability marker.
    pub nullable: Option<bool>,

    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub required: Vec<String>,

    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<AdditionalProperties>,

    pub items: Option<Box<SchemaOrRef>>,

    #[serde(rename = "allOf", default)]
    pub all_of: Vec<SchemaOrRef>,

    #[serde(rename = "oneOf", default)]
    pub one_of: Vec<SchemaOrRef>,

    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<SchemaOrRef>,

    pub discriminator: Option<Discriminator>,

    #[serde(rename = "enum", default)]
    pub enum_values: Vec<serde_json::Value>,

    // Validation facets carried through to model properties.
    #[serde(rename = "minLength")]
    pub min_length: Option<u64>,
    #[serde(rename = "maxLength")]
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,

    pub example: Option<serde_json::Value>,
}
