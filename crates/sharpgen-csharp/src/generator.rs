use sharpgen_core::ir::Spec;
use sharpgen_core::normalize::naming::to_solution_name;
use sharpgen_core::{CodeGenerator, GeneratedFile};

use crate::GeneratorError;
use crate::emitters;

/// Options for the C# client generator.
#[derive(Debug, Clone, Default)]
pub struct CsharpConfig {
    /// Root namespace for generated sources. Defaults to
    /// `<SolutionName>.Client`, derived from the document title.
    pub namespace: Option<String>,
}

/// Output layout shared by the emitters: one client project under `src/`,
/// plus a solution file at the output root.
pub(crate) struct Layout {
    pub solution: String,
    pub project: String,
    pub namespace: String,
}

impl Layout {
    pub fn src(&self, relative: &str) -> String {
        format!("src/{}/{}", self.project, relative)
    }
}

/// Generates an HttpClient-based C# client solution.
pub struct CsharpClientGenerator;

impl CodeGenerator for CsharpClientGenerator {
    type Config = CsharpConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        spec: &Spec,
        config: &CsharpConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let solution = to_solution_name(&spec.title);
        let namespace = config
            .namespace
            .clone()
            .unwrap_or_else(|| format!("{solution}.Client"));
        let layout = Layout {
            solution,
            project: namespace.clone(),
            namespace,
        };

        log::debug!(
            "emitting C# client for {} ({} models, {} enums, {} operations)",
            spec.title,
            spec.models.len(),
            spec.enums.len(),
            spec.operations.len()
        );

        let mut files = Vec::new();
        files.extend(emitters::models::emit_models(spec, &layout)?);
        files.extend(emitters::support::emit_support(spec, &layout)?);
        files.extend(emitters::clients::emit_clients(spec, &layout)?);
        files.extend(emitters::scaffold::emit_scaffold(&layout)?);
        Ok(files)
    }
}
