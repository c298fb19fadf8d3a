pub mod emitters;
pub mod generator;
pub mod type_mapper;

use thiserror::Error;

/// Errors produced while emitting C# sources.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

pub use generator::{CsharpClientGenerator, CsharpConfig};
