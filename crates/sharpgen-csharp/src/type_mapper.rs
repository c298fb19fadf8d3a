use sharpgen_core::ir::{Operation, Scalar, TypeKind, TypeRef};

/// Render a type descriptor as C# source text. The nullable marker becomes
/// the `?` suffix; everything else was already decided during normalization.
pub fn cs_type(ty: &TypeRef) -> String {
    let base = match &ty.kind {
        TypeKind::Scalar(scalar) => scalar_cs(*scalar).to_string(),
        TypeKind::Array(inner) => format!("List<{}>", cs_type(inner)),
        TypeKind::Map(value) => format!("Dictionary<string, {}>", cs_type(value)),
        TypeKind::Ref(name) => name.clone(),
        TypeKind::Opaque => "object".to_string(),
        TypeKind::Void => "void".to_string(),
    };
    if ty.nullable { format!("{base}?") } else { base }
}

fn scalar_cs(scalar: Scalar) -> &'static str {
    match scalar {
        Scalar::String => "string",
        Scalar::Timestamp => "DateTimeOffset",
        Scalar::Date => "DateOnly",
        Scalar::Uuid => "Guid",
        Scalar::Uri => "Uri",
        Scalar::Bytes => "byte[]",
        Scalar::Binary => "Stream",
        Scalar::Int32 => "int",
        Scalar::Int64 => "long",
        Scalar::Float32 => "float",
        Scalar::Float64 => "double",
        Scalar::Bool => "bool",
    }
}

/// The C# return type of an operation, with the list wrapper applied.
pub fn return_cs_type(op: &Operation) -> String {
    if op.return_type.is_void() {
        "void".to_string()
    } else if op.returns_list {
        format!("List<{}>", cs_type(&op.return_type))
    } else {
        cs_type(&op.return_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars() {
        assert_eq!(cs_type(&TypeRef::scalar(Scalar::String)), "string");
        assert_eq!(cs_type(&TypeRef::scalar(Scalar::Int64)), "long");
        assert_eq!(cs_type(&TypeRef::scalar(Scalar::Timestamp)), "DateTimeOffset");
        assert_eq!(cs_type(&TypeRef::scalar(Scalar::Uuid)), "Guid");
        assert_eq!(cs_type(&TypeRef::scalar(Scalar::Binary)), "Stream");
    }

    #[test]
    fn nullable_suffix() {
        let ty = TypeRef::scalar(Scalar::Int32).into_nullable(true);
        assert_eq!(cs_type(&ty), "int?");
    }

    #[test]
    fn containers() {
        assert_eq!(
            cs_type(&TypeRef::array(TypeRef::reference("Pet"))),
            "List<Pet>"
        );
        assert_eq!(
            cs_type(&TypeRef::map(TypeRef::opaque())),
            "Dictionary<string, object>"
        );
    }
}
