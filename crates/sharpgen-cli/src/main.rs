use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use sharpgen_core::document::{self, Document};
use sharpgen_core::ir::Spec;
use sharpgen_core::normalize;
use sharpgen_core::{CodeGenerator, GeneratedFile};
use sharpgen_csharp::{CsharpClientGenerator, CsharpConfig};

#[derive(Parser)]
#[command(name = "sharpgen", about = "OpenAPI C# client generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a C# client solution from an OpenAPI document
    Generate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output directory for the generated solution
        #[arg(short, long)]
        output: PathBuf,

        /// Root namespace override for generated sources
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Load and normalize a document, reporting a summary
    Validate {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        spec: PathBuf,
    },

    /// Dump the normalized representation of a document
    Inspect {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        spec: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            spec,
            output,
            namespace,
        } => cmd_generate(&spec, &output, namespace),
        Commands::Validate { spec } => cmd_validate(&spec),
        Commands::Inspect { spec, format } => cmd_inspect(&spec, format),
    }
}

fn load_document(path: &Path) -> Result<Document> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let document = match ext {
        "json" => document::from_json(&content)?,
        _ => document::from_yaml(&content)?,
    };
    Ok(document)
}

fn load_spec(path: &Path) -> Result<Spec> {
    let document = load_document(path)?;
    Ok(normalize::normalize(&document))
}

fn cmd_generate(spec_path: &Path, output: &Path, namespace: Option<String>) -> Result<()> {
    let spec = load_spec(spec_path)?;

    println!("Parsed {}", spec.title);
    println!("  Models: {}", spec.models.len());
    println!("  Enums: {}", spec.enums.len());
    println!("  Operations: {}", spec.operations.len());
    println!("  Security schemes: {}", spec.security_schemes.len());

    let config = CsharpConfig { namespace };
    let files = CsharpClientGenerator.generate(&spec, &config)?;
    write_files(output, &files)?;

    println!("Generated {} files in {}", files.len(), output.display());
    Ok(())
}

fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::debug!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_validate(spec_path: &Path) -> Result<()> {
    let document = load_document(spec_path)?;
    let spec = normalize::normalize(&document);

    println!("Valid OpenAPI {} document: {}", document.openapi, spec.title);
    if let Some(version) = &spec.version {
        println!("  Version: {version}");
    }
    println!("  Models: {}", spec.models.len());
    println!("  Enums: {}", spec.enums.len());
    println!("  Operations: {}", spec.operations.len());
    println!("  Security schemes: {}", spec.security_schemes.len());
    Ok(())
}

fn cmd_inspect(spec_path: &Path, format: InspectFormat) -> Result<()> {
    let spec = load_spec(spec_path)?;
    let summary = build_summary(&spec);

    match format {
        InspectFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&summary)?),
        InspectFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn build_summary(spec: &Spec) -> serde_json::Value {
    let models: Vec<serde_json::Value> = spec
        .models
        .iter()
        .map(|model| {
            serde_json::json!({
                "name": model.name,
                "parent": model.parent,
                "properties": model
                    .properties
                    .iter()
                    .map(|p| serde_json::json!({
                        "name": p.name,
                        "type": p.ty.to_string(),
                        "required": p.required,
                        "nullable": p.nullable,
                    }))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let enums: Vec<serde_json::Value> = spec
        .enums
        .iter()
        .map(|item| {
            serde_json::json!({
                "name": item.name,
                "values": item.values.iter().map(|v| &v.wire_value).collect::<Vec<_>>(),
            })
        })
        .collect();

    let operations: Vec<serde_json::Value> = spec
        .operations
        .iter()
        .map(|op| {
            serde_json::json!({
                "id": op.id,
                "method": op.method.as_str(),
                "path": op.path,
                "tag": op.tag,
                "returns": if op.returns_list {
                    format!("list<{}>", op.return_type)
                } else {
                    op.return_type.to_string()
                },
            })
        })
        .collect();

    let security: Vec<serde_json::Value> = spec
        .security_schemes
        .iter()
        .map(|scheme| {
            serde_json::json!({
                "name": scheme.name,
                "kind": scheme.kind.as_str(),
            })
        })
        .collect();

    serde_json::json!({
        "title": spec.title,
        "version": spec.version,
        "base_url": spec.base_url,
        "models": models,
        "enums": enums,
        "operations": operations,
        "security_schemes": security,
    })
}
