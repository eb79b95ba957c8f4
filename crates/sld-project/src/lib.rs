//! sld-project: diagram file format, validation and graph assembly.

pub mod assemble;
pub mod hash;
pub mod schema;
pub mod validate;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

pub use assemble::build_graph;
pub use hash::fingerprint;
pub use schema::*;
pub use validate::{ValidationError, validate_diagram};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk encoding, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> ProjectResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(ProjectError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn read_file<T: DeserializeOwned>(path: &Path) -> ProjectResult<T> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(match format {
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    })
}

/// Load and validate a diagram, picking the decoder from the extension.
pub fn load_diagram(path: &Path) -> ProjectResult<Diagram> {
    let diagram: Diagram = read_file(path)?;
    validate_diagram(&diagram)?;
    Ok(diagram)
}

/// Write a diagram, picking the encoder from the extension.
pub fn save_diagram(path: &Path, diagram: &Diagram) -> ProjectResult<()> {
    validate_diagram(diagram)?;
    let content = match FileFormat::from_path(path)? {
        FileFormat::Yaml => serde_yaml::to_string(diagram)?,
        FileFormat::Json => serde_json::to_string_pretty(diagram)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a feeder -> area table.
pub fn load_areas(path: &Path) -> ProjectResult<AreaTable> {
    read_file(path)
}
