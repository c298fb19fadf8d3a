//! Named-definition walking: the Model/Enum partition, single-level `allOf`
//! composition, and polymorphism metadata.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::document::Document;
use crate::document::schema::{Schema, SchemaOrRef};
use crate::ir::{DerivedType, Enum, EnumValue, Model, Polymorphism, Property};

use super::example_literal;
use super::naming::{to_enum_member_name, to_member_name, to_type_name};
use super::types;

/// Walk every named schema definition once, partitioning into models and
/// string-valued enums. Anything else (bare aliases, non-string enums) is
/// skipped.
pub fn resolve_schemas(doc: &Document) -> (Vec<Model>, Vec<Enum>) {
    let mut models = Vec::new();
    let mut enums = Vec::new();

    let Some(components) = &doc.components else {
        return (models, enums);
    };

    for (name, node) in &components.schemas {
        let Some(schema) = node.as_schema() else {
            log::warn!("schema definition {name} is a bare reference, skipping");
            continue;
        };

        if !schema.enum_values.is_empty() {
            if types::has_type(schema, "string") {
                enums.push(resolve_enum(name, schema));
            } else {
                log::warn!("enum definition {name} is not string-valued, dropping");
            }
            continue;
        }

        if is_object_shaped(schema) || !schema.all_of.is_empty() {
            models.push(resolve_model(name, schema));
        } else {
            log::debug!("schema definition {name} is neither object nor enum, skipping");
        }
    }

    (models, enums)
}

fn is_object_shaped(schema: &Schema) -> bool {
    match schema.schema_type.as_deref() {
        Some(ty) => ty.eq_ignore_ascii_case("object"),
        None => !schema.properties.is_empty(),
    }
}

fn resolve_enum(name: &str, schema: &Schema) -> Enum {
    let values = schema
        .enum_values
        .iter()
        .filter_map(|value| value.as_str())
        .map(|value| EnumValue {
            name: to_enum_member_name(value),
            wire_value: value.to_string(),
        })
        .collect();

    Enum {
        name: to_type_name(name),
        description: schema.description.clone(),
        values,
    }
}

/// Merge single-level `allOf` composition and build the model.
///
/// A bare reference branch becomes the parent; inline branches contribute
/// properties and required names. Direct properties are applied last, so a
/// same-named direct property overwrites a composed one (last write wins).
fn resolve_model(name: &str, schema: &Schema) -> Model {
    let mut parent = None;
    let mut merged: IndexMap<&str, &SchemaOrRef> = IndexMap::new();
    let mut required: HashSet<&str> = schema.required.iter().map(String::as_str).collect();

    for branch in &schema.all_of {
        match branch {
            SchemaOrRef::Ref { ref_path } => {
                parent = Some(to_type_name(types::ref_tail(ref_path)));
            }
            SchemaOrRef::Schema(sub) => {
                for (prop_name, prop) in &sub.properties {
                    merged.insert(prop_name.as_str(), prop);
                }
                required.extend(sub.required.iter().map(String::as_str));
            }
        }
    }

    for (prop_name, prop) in &schema.properties {
        merged.insert(prop_name.as_str(), prop);
    }

    let properties = merged
        .iter()
        .map(|(prop_name, prop)| resolve_property(prop_name, prop, required.contains(prop_name)))
        .collect();

    Model {
        name: to_type_name(name),
        description: schema.description.clone(),
        parent,
        properties,
        polymorphism: resolve_polymorphism(schema),
    }
}

fn resolve_property(wire_name: &str, node: &SchemaOrRef, required: bool) -> Property {
    let schema = node.as_schema();
    let explicitly_nullable = schema.and_then(|s| s.nullable).unwrap_or(false);
    let nullable = explicitly_nullable || !required;

    Property {
        name: to_member_name(wire_name),
        wire_name: wire_name.to_string(),
        ty: types::resolve(node).into_nullable(nullable),
        required,
        nullable,
        description: schema.and_then(|s| s.description.clone()),
        min_length: schema.and_then(|s| s.min_length),
        max_length: schema.and_then(|s| s.max_length),
        pattern: schema.and_then(|s| s.pattern.clone()),
        minimum: schema.and_then(|s| s.minimum),
        maximum: schema.and_then(|s| s.maximum),
        example: schema
            .and_then(|s| s.example.as_ref())
            .and_then(example_literal),
    }
}

fn resolve_polymorphism(schema: &Schema) -> Option<Polymorphism> {
    let discriminator = schema.discriminator.as_ref()?;
    let derived = discriminator
        .mapping
        .iter()
        .map(|(value, ref_path)| DerivedType {
            value: value.clone(),
            model: to_type_name(types::ref_tail(ref_path)),
        })
        .collect();

    Some(Polymorphism {
        discriminator: discriminator.property_name.clone(),
        derived,
    })
}
