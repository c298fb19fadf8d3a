use super::operations::Operation;
use super::security::SecurityScheme;
use super::types::TypeRef;

/// The normalized representation of one API description. Built once per run
/// and handed to generators as read-only data.
#[derive(Debug, Clone)]
pub struct Spec {
    pub title: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub base_url: Option<String>,
    pub models: Vec<Model>,
    pub enums: Vec<Enum>,
    pub operations: Vec<Operation>,
    pub security_schemes: Vec<SecurityScheme>,
}

/// A named object schema.
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    pub description: Option<String>,
    /// Base model name when the source schema composed a named reference.
    /// Single-level inheritance only.
    pub parent: Option<String>,
    pub properties: Vec<Property>,
    pub polymorphism: Option<Polymorphism>,
}

/// One model property.
#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub wire_name: String,
    pub ty: TypeRef,
    pub required: bool,
    /// Explicitly nullable, or simply not required.
    pub nullable: bool,
    pub description: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub example: Option<String>,
}

/// A string-valued enumeration.
#[derive(Debug, Clone)]
pub struct Enum {
    pub name: String,
    pub description: Option<String>,
    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone)]
pub struct EnumValue {
    pub name: String,
    pub wire_value: String,
}

/// Discriminator metadata attached to a polymorphic base model.
#[derive(Debug, Clone)]
pub struct Polymorphism {
    pub discriminator: String,
    pub derived: Vec<DerivedType>,
}

/// One discriminator mapping entry.
#[derive(Debug, Clone)]
pub struct DerivedType {
    pub value: String,
    pub model: String,
}
