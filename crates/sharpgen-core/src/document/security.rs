use serde::Deserialize;

/// Location of an API key credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiKeyLocation {
    Query,
    Header,
    Cookie,
}

/// A declared security scheme.
///
/// `scheme_type` stays a free string so undeclared types reach the
/// classifier's fallback row instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityScheme {
    #[serde(rename = "type")]
    pub scheme_type: String,

    pub description: Option<String>,

    /// Credential name, for API-key schemes.
    pub name: Option<String>,

    #[serde(rename = "in")]
    pub location: Option<ApiKeyLocation>,

    /// HTTP auth scheme (`bearer`, `basic`), for HTTP schemes.
    pub scheme: Option<String>,
}
