/// Canonical authentication kinds a declared scheme classifies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    HttpBearer,
    HttpBasic,
    ApiKey,
    OAuth2,
    OpenIdConnect,
}

impl AuthKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthKind::HttpBearer => "http-bearer",
            AuthKind::HttpBasic => "http-basic",
            AuthKind::ApiKey => "api-key",
            AuthKind::OAuth2 => "oauth2",
            AuthKind::OpenIdConnect => "openid-connect",
        }
    }
}

/// Where an API key credential is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyIn {
    Header,
    Query,
    Cookie,
}

impl ApiKeyIn {
    pub fn as_str(self) -> &'static str {
        match self {
            ApiKeyIn::Header => "header",
            ApiKeyIn::Query => "query",
            ApiKeyIn::Cookie => "cookie",
        }
    }
}

/// A classified security scheme.
#[derive(Debug, Clone)]
pub struct SecurityScheme {
    /// Name as declared in the document.
    pub name: String,
    pub kind: AuthKind,
    /// HTTP auth scheme string, for HTTP kinds.
    pub scheme: Option<String>,
    /// Credential name and location, for API-key kinds.
    pub api_key_name: Option<String>,
    pub api_key_in: Option<ApiKeyIn>,
}
