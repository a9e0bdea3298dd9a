//! Document loading
//!
//! Reads JSON, YAML or TOML files into `serde_json::Value`, choosing the
//! parser from the file extension.

use deepeq_core::errors::DeepEqError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, DeepEqError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "toml" => Ok(Format::Toml),
            _ => Err(DeepEqError::Parse {
                format: if ext.is_empty() { "unknown".to_string() } else { ext.clone() },
                reason: format!("unsupported document extension: {}", path.display()),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Toml => "toml",
        }
    }
}

/// Read a file to a string
pub fn read_file(path: &Path) -> Result<String, DeepEqError> {
    fs::read_to_string(path).map_err(|e| DeepEqError::Io {
        target: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Load a document from a path
pub fn load_document(path: &Path) -> Result<Value, DeepEqError> {
    let format = Format::from_path(path)?;
    let content = read_file(path)?;
    let value = parse_document(&content, format)?;
    tracing::debug!(path = %path.display(), format = format.as_str(), "loaded document");
    Ok(value)
}

/// Parse a document from a string
pub fn parse_document(content: &str, format: Format) -> Result<Value, DeepEqError> {
    let parsed: Result<Value, String> = match format {
        Format::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        Format::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|reason| DeepEqError::Parse {
        format: format.as_str().to_string(),
        reason,
    })
}
