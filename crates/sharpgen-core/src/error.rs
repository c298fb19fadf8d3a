use thiserror::Error;

/// Errors raised while turning document bytes into a schema graph.
///
/// Loading is the only fatal stage: a document that fails here never reaches
/// normalization. The underlying serde errors already aggregate everything
/// they know about the malformed input.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}
