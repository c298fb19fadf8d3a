use minijinja::context;
use sharpgen_core::GeneratedFile;
use sharpgen_core::ir::{AuthKind, Spec};

use crate::GeneratorError;
use crate::generator::Layout;

/// Emit the auth/infrastructure classes every client shares:
/// `ClientConfiguration`, `BaseApiClient`, and `ApiException`.
pub fn emit_support(spec: &Spec, layout: &Layout) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let env = super::template_env();

    let has_bearer = spec
        .security_schemes
        .iter()
        .any(|s| matches!(s.kind, AuthKind::HttpBearer | AuthKind::OAuth2));
    let has_basic = spec
        .security_schemes
        .iter()
        .any(|s| s.kind == AuthKind::HttpBasic);
    let api_key_name = spec
        .security_schemes
        .iter()
        .find(|s| s.kind == AuthKind::ApiKey)
        .and_then(|s| s.api_key_name.clone());

    let ctx = context! {
        namespace => layout.namespace.clone(),
        title => spec.title.clone(),
        base_url => spec.base_url.clone().unwrap_or_default(),
        has_bearer => has_bearer,
        has_basic => has_basic,
        has_api_key => api_key_name.is_some(),
        api_key_name => api_key_name.unwrap_or_else(|| "X-API-Key".to_string()),
    };

    let files = vec![
        GeneratedFile {
            path: layout.src("ClientConfiguration.cs"),
            content: env.get_template("client_configuration.cs.j2")?.render(&ctx)?,
        },
        GeneratedFile {
            path: layout.src("BaseApiClient.cs"),
            content: env.get_template("base_client.cs.j2")?.render(&ctx)?,
        },
        GeneratedFile {
            path: layout.src("ApiException.cs"),
            content: env.get_template("api_exception.cs.j2")?.render(&ctx)?,
        },
    ];

    Ok(files)
}
