pub mod document;
pub mod error;
pub mod ir;
pub mod normalize;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that consume a normalized [`ir::Spec`].
///
/// The spec is handed over fully resolved: naming, nullability, composition,
/// and return-type shape are final, and generators must not re-derive them.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;

    fn generate(
        &self,
        spec: &ir::Spec,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
