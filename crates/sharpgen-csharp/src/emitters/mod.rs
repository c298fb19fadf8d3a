pub mod clients;
pub mod models;
pub mod scaffold;
pub mod support;

use minijinja::Environment;
use sharpgen_core::normalize::naming::to_doc_safe;

/// Build the template environment. Owned by the caller and rebuilt per
/// generation run; there is no process-wide template state.
pub(crate) fn template_env() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("xml_doc", |value: String| to_doc_safe(&value));

    let templates = [
        ("model.cs.j2", include_str!("../../templates/model.cs.j2")),
        ("enum.cs.j2", include_str!("../../templates/enum.cs.j2")),
        (
            "client_interface.cs.j2",
            include_str!("../../templates/client_interface.cs.j2"),
        ),
        ("client.cs.j2", include_str!("../../templates/client.cs.j2")),
        (
            "client_configuration.cs.j2",
            include_str!("../../templates/client_configuration.cs.j2"),
        ),
        (
            "base_client.cs.j2",
            include_str!("../../templates/base_client.cs.j2"),
        ),
        (
            "api_exception.cs.j2",
            include_str!("../../templates/api_exception.cs.j2"),
        ),
        (
            "project.csproj.j2",
            include_str!("../../templates/project.csproj.j2"),
        ),
        (
            "solution.sln.j2",
            include_str!("../../templates/solution.sln.j2"),
        ),
    ];
    for (name, source) in templates {
        env.add_template(name, source).expect("template should be valid");
    }
    env
}
