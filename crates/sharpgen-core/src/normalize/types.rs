//! Schema-node → type-descriptor resolution.
//!
//! Resolution is position-independent: the same schema node maps to the same
//! descriptor wherever it occurs. Enum materialization is deliberately not
//! handled here; only named definitions can become enums, and naming context
//! lives in the schema resolver.

use crate::document::schema::{AdditionalProperties, Schema, SchemaOrRef};
use crate::ir::{Scalar, TypeRef};

use super::naming::to_type_name;

/// Resolve a schema node, inline or reference, to a type descriptor.
/// First match wins:
///
/// 1. named reference
/// 2. inline string enumeration (plain string at this layer)
/// 3. array
/// 4. free-form object with an additional-properties schema
/// 5. untagged union
/// 6. scalar table
pub fn resolve(node: &SchemaOrRef) -> TypeRef {
    match node {
        SchemaOrRef::Ref { ref_path } => TypeRef::reference(to_type_name(ref_tail(ref_path))),
        SchemaOrRef::Schema(schema) => resolve_schema(schema),
    }
}

/// Resolve an inline schema.
pub fn resolve_schema(schema: &Schema) -> TypeRef {
    if !schema.enum_values.is_empty() && has_type(schema, "string") {
        return TypeRef::scalar(Scalar::String);
    }

    if has_type(schema, "array") {
        return match &schema.items {
            Some(items) => TypeRef::array(resolve(items)),
            None => TypeRef::array(TypeRef::opaque()),
        };
    }

    if let Some(AdditionalProperties::Schema(value)) = &schema.additional_properties {
        return TypeRef::map(resolve(value));
    }

    if (!schema.one_of.is_empty() || !schema.any_of.is_empty()) && schema.discriminator.is_none() {
        log::warn!("untagged oneOf/anyOf degraded to an opaque type");
        return TypeRef::opaque();
    }

    scalar_of(schema.schema_type.as_deref(), schema.format.as_deref())
}

/// The scalar mapping table, case-insensitive on both base type and format.
fn scalar_of(schema_type: Option<&str>, format: Option<&str>) -> TypeRef {
    let ty = schema_type.map(str::to_ascii_lowercase);
    let fmt = format.map(str::to_ascii_lowercase);

    match ty.as_deref() {
        Some("string") => TypeRef::scalar(match fmt.as_deref() {
            Some("date-time") => Scalar::Timestamp,
            Some("date") => Scalar::Date,
            Some("uuid") => Scalar::Uuid,
            Some("uri") => Scalar::Uri,
            Some("byte") => Scalar::Bytes,
            Some("binary") => Scalar::Binary,
            _ => Scalar::String,
        }),
        Some("integer") => TypeRef::scalar(match fmt.as_deref() {
            Some("int64") => Scalar::Int64,
            _ => Scalar::Int32,
        }),
        Some("number") => TypeRef::scalar(match fmt.as_deref() {
            Some("float") => Scalar::Float32,
            _ => Scalar::Float64,
        }),
        Some("boolean") => TypeRef::scalar(Scalar::Bool),
        Some("object") => TypeRef::map(TypeRef::opaque()),
        _ => TypeRef::opaque(),
    }
}

pub(crate) fn has_type(schema: &Schema, expected: &str) -> bool {
    schema
        .schema_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case(expected))
}

/// Trailing segment of a `$ref` path, i.e. the referenced definition's name.
pub(crate) fn ref_tail(ref_path: &str) -> &str {
    ref_path.rsplit('/').next().unwrap_or(ref_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::TypeKind;

    fn schema(ty: &str, format: Option<&str>) -> Schema {
        Schema {
            schema_type: Some(ty.to_string()),
            format: format.map(String::from),
            ..Schema::default()
        }
    }

    #[test]
    fn scalar_table() {
        let cases = [
            ("string", None, Scalar::String),
            ("string", Some("date-time"), Scalar::Timestamp),
            ("string", Some("date"), Scalar::Date),
            ("string", Some("uuid"), Scalar::Uuid),
            ("string", Some("uri"), Scalar::Uri),
            ("string", Some("byte"), Scalar::Bytes),
            ("string", Some("binary"), Scalar::Binary),
            ("integer", None, Scalar::Int32),
            ("integer", Some("int32"), Scalar::Int32),
            ("integer", Some("int64"), Scalar::Int64),
            ("number", None, Scalar::Float64),
            ("number", Some("double"), Scalar::Float64),
            ("number", Some("float"), Scalar::Float32),
            ("boolean", None, Scalar::Bool),
        ];
        for (ty, format, expected) in cases {
            let resolved = resolve_schema(&schema(ty, format));
            assert_eq!(
                resolved,
                TypeRef::scalar(expected),
                "({ty}, {format:?}) should map to {expected:?}"
            );
        }
    }

    #[test]
    fn scalar_table_is_case_insensitive() {
        assert_eq!(
            resolve_schema(&schema("Integer", Some("Int64"))),
            TypeRef::scalar(Scalar::Int64)
        );
    }

    #[test]
    fn bare_object_becomes_opaque_map() {
        assert_eq!(
            resolve_schema(&schema("object", None)),
            TypeRef::map(TypeRef::opaque())
        );
    }

    #[test]
    fn unrecognized_type_becomes_opaque() {
        assert_eq!(resolve_schema(&schema("file", None)), TypeRef::opaque());
        assert_eq!(resolve_schema(&Schema::default()), TypeRef::opaque());
    }

    #[test]
    fn reference_resolves_to_normalized_name() {
        let node = SchemaOrRef::Ref {
            ref_path: "#/components/schemas/pet-profile".to_string(),
        };
        assert_eq!(resolve(&node), TypeRef::reference("PetProfile"));
    }

    #[test]
    fn array_recurses_into_items() {
        let inner = SchemaOrRef::Ref {
            ref_path: "#/components/schemas/Pet".to_string(),
        };
        let array = Schema {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(inner)),
            ..Schema::default()
        };
        assert_eq!(
            resolve_schema(&array),
            TypeRef::array(TypeRef::reference("Pet"))
        );
    }

    #[test]
    fn array_without_items_holds_opaque() {
        let array = schema("array", None);
        assert_eq!(resolve_schema(&array), TypeRef::array(TypeRef::opaque()));
    }

    #[test]
    fn additional_properties_becomes_map() {
        let value = SchemaOrRef::Schema(Box::new(schema("string", None)));
        let map = Schema {
            additional_properties: Some(AdditionalProperties::Schema(Box::new(value))),
            ..Schema::default()
        };
        assert_eq!(
            resolve_schema(&map),
            TypeRef::map(TypeRef::scalar(Scalar::String))
        );
    }

    #[test]
    fn untagged_union_degrades_to_opaque() {
        let union = Schema {
            one_of: vec![
                SchemaOrRef::Schema(Box::new(schema("string", None))),
                SchemaOrRef::Schema(Box::new(schema("integer", None))),
            ],
            ..Schema::default()
        };
        assert_eq!(resolve_schema(&union), TypeRef::opaque());
    }

    #[test]
    fn inline_string_enum_stays_string() {
        let inline = Schema {
            schema_type: Some("string".to_string()),
            enum_values: vec!["a".into(), "b".into()],
            ..Schema::default()
        };
        assert_eq!(resolve_schema(&inline), TypeRef::scalar(Scalar::String));
    }

    #[test]
    fn nullable_marker_only_for_value_scalars() {
        let int = TypeRef::scalar(Scalar::Int32);
        assert!(int.clone().into_nullable(true).nullable);
        assert!(!int.into_nullable(false).nullable);

        let string = TypeRef::scalar(Scalar::String);
        assert!(!string.into_nullable(true).nullable);

        let reference = TypeRef::reference("Pet");
        assert!(!reference.into_nullable(true).nullable);

        let list = TypeRef::array(TypeRef::scalar(Scalar::Int32));
        assert!(!list.into_nullable(true).nullable);
    }

    #[test]
    fn type_display() {
        assert_eq!(
            TypeRef::array(TypeRef::reference("Pet")).to_string(),
            "list<Pet>"
        );
        assert_eq!(
            TypeRef::scalar(Scalar::Int32).into_nullable(true).to_string(),
            "int32?"
        );
        assert_eq!(TypeKind::Void, TypeRef::void().kind);
    }
}
