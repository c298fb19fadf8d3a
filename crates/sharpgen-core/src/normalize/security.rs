//! Declared security scheme → canonical authentication kind.

use crate::document::Document;
use crate::document::security::ApiKeyLocation;
use crate::ir::{ApiKeyIn, AuthKind, SecurityScheme};

/// Classify every declared scheme, in declaration order.
pub fn classify_schemes(doc: &Document) -> Vec<SecurityScheme> {
    let Some(components) = &doc.components else {
        return Vec::new();
    };

    components
        .security_schemes
        .iter()
        .map(|(name, raw)| SecurityScheme {
            name: name.clone(),
            kind: classify(&raw.scheme_type, raw.scheme.as_deref()),
            scheme: raw.scheme.clone(),
            api_key_name: raw.name.clone(),
            api_key_in: raw.location.map(map_location),
        })
        .collect()
}

/// Fixed classification table. Unknown combinations fall back to bearer
/// authentication.
fn classify(scheme_type: &str, http_scheme: Option<&str>) -> AuthKind {
    match scheme_type {
        "http" if matches_scheme(http_scheme, "bearer") => AuthKind::HttpBearer,
        "http" if matches_scheme(http_scheme, "basic") => AuthKind::HttpBasic,
        "apiKey" => AuthKind::ApiKey,
        "oauth2" => AuthKind::OAuth2,
        "openIdConnect" => AuthKind::OpenIdConnect,
        _ => {
            log::warn!(
                "unclassified security scheme type={scheme_type:?} scheme={http_scheme:?}, defaulting to bearer"
            );
            AuthKind::HttpBearer
        }
    }
}

fn matches_scheme(declared: Option<&str>, expected: &str) -> bool {
    declared.is_some_and(|s| s.eq_ignore_ascii_case(expected))
}

fn map_location(location: ApiKeyLocation) -> ApiKeyIn {
    match location {
        ApiKeyLocation::Header => ApiKeyIn::Header,
        ApiKeyLocation::Query => ApiKeyIn::Query,
        ApiKeyLocation::Cookie => ApiKeyIn::Cookie,
    }
}
