use minijinja::context;
use sharpgen_core::GeneratedFile;

use crate::GeneratorError;
use crate::generator::Layout;

/// Emit the client project file and the solution file.
pub fn emit_scaffold(layout: &Layout) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let env = super::template_env();

    let csproj = env.get_template("project.csproj.j2")?.render(context! {
        namespace => layout.namespace.clone(),
    })?;

    let sln = env.get_template("solution.sln.j2")?.render(context! {
        project => layout.project.clone(),
        project_guid => project_guid(&layout.project),
    })?;

    Ok(vec![
        GeneratedFile {
            path: layout.src(&format!("{}.csproj", layout.project)),
            content: csproj,
        },
        GeneratedFile {
            path: format!("{}.sln", layout.solution),
            content: sln,
        },
    ])
}

/// A stable GUID derived from the project name, so regeneration does not
/// churn the solution file.
fn project_guid(name: &str) -> String {
    let hi = fnv1a(name.bytes());
    let lo = fnv1a(name.bytes().rev());
    format!(
        "{{{:08X}-{:04X}-{:04X}-{:04X}-{:012X}}}",
        (hi >> 32) as u32,
        (hi >> 16) as u16,
        hi as u16,
        (lo >> 48) as u16,
        lo & 0xFFFF_FFFF_FFFF
    )
}

fn fnv1a(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_is_stable_and_well_formed() {
        let a = project_guid("Petstore.Client");
        let b = project_guid("Petstore.Client");
        assert_eq!(a, b);
        assert_eq!(a.len(), 38);
        assert!(a.starts_with('{') && a.ends_with('}'));
        assert_ne!(a, project_guid("Other.Client"));
    }
}
