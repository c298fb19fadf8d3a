use std::fmt;

/// A canonical scalar type, independent of source schema syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    String,
    Timestamp,
    Date,
    Uuid,
    Uri,
    Bytes,
    Binary,
    Int32,
    Int64,
    Float32,
    Float64,
    Bool,
}

impl Scalar {
    /// Scalars with value semantics in the target language. Only these pick
    /// up the nullable marker; string and byte shapes are already optional on
    /// the wire.
    pub fn is_value_kind(self) -> bool {
        !matches!(
            self,
            Scalar::String | Scalar::Uri | Scalar::Bytes | Scalar::Binary
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scalar::String => "string",
            Scalar::Timestamp => "timestamp",
            Scalar::Date => "date",
            Scalar::Uuid => "uuid",
            Scalar::Uri => "uri",
            Scalar::Bytes => "bytes",
            Scalar::Binary => "binary",
            Scalar::Int32 => "int32",
            Scalar::Int64 => "int64",
            Scalar::Float32 => "float32",
            Scalar::Float64 => "float64",
            Scalar::Bool => "bool",
        }
    }
}

/// The shape of a resolved type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Scalar(Scalar),
    Array(Box<TypeRef>),
    Map(Box<TypeRef>),
    /// A named model or enum.
    Ref(String),
    /// Untyped content: untagged unions, unrecognized shapes.
    Opaque,
    Void,
}

/// A resolved type descriptor. Nullability is carried alongside the shape,
/// never baked into the scalar name.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub kind: TypeKind,
    pub nullable: bool,
}

impl TypeRef {
    pub fn scalar(scalar: Scalar) -> Self {
        Self {
            kind: TypeKind::Scalar(scalar),
            nullable: false,
        }
    }

    pub fn array(inner: TypeRef) -> Self {
        Self {
            kind: TypeKind::Array(Box::new(inner)),
            nullable: false,
        }
    }

    pub fn map(value: TypeRef) -> Self {
        Self {
            kind: TypeKind::Map(Box::new(value)),
            nullable: false,
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self {
            kind: TypeKind::Ref(name.into()),
            nullable: false,
        }
    }

    pub fn opaque() -> Self {
        Self {
            kind: TypeKind::Opaque,
            nullable: false,
        }
    }

    pub fn void() -> Self {
        Self {
            kind: TypeKind::Void,
            nullable: false,
        }
    }

    /// Mark the descriptor nullable at a use site where the nullability rule
    /// (explicitly nullable, or not required) says so. Reference and container
    /// types are left untouched; only value-kind scalars carry the marker.
    pub fn into_nullable(self, nullable: bool) -> Self {
        match self.kind {
            TypeKind::Scalar(scalar) if nullable && scalar.is_value_kind() => Self {
                nullable: true,
                ..self
            },
            _ => self,
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self.kind, TypeKind::Void)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Scalar(scalar) => f.write_str(scalar.as_str())?,
            TypeKind::Array(inner) => write!(f, "list<{inner}>")?,
            TypeKind::Map(value) => write!(f, "map<string, {value}>")?,
            TypeKind::Ref(name) => f.write_str(name)?,
            TypeKind::Opaque => f.write_str("opaque")?,
            TypeKind::Void => f.write_str("void")?,
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}
