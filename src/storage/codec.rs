use crate::error::{BookshelfError, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;

/// On-disk encoding of a single document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Toml,
}

impl DocumentFormat {
    pub const ALL: [DocumentFormat; 2] = [DocumentFormat::Yaml, DocumentFormat::Toml];

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Yaml => "yml",
            DocumentFormat::Toml => "toml",
        }
    }

    /// Detect the format of a document file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext {
            "yml" | "yaml" => Some(DocumentFormat::Yaml),
            "toml" => Some(DocumentFormat::Toml),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Yaml => write!(f, "yaml"),
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = BookshelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "toml" => Ok(DocumentFormat::Toml),
            other => Err(BookshelfError::Config(format!(
                "Unknown document format: {}",
                other
            ))),
        }
    }
}

pub fn render_document<D: Serialize>(doc: &D, format: DocumentFormat) -> Result<String> {
    let mut output = match format {
        DocumentFormat::Yaml => serde_yaml::to_string(doc)?,
        DocumentFormat::Toml => toml::to_string(doc)?,
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

pub fn parse_document<D: DeserializeOwned>(content: &str, format: DocumentFormat) -> Result<D> {
    if content.trim().is_empty() {
        return Err(BookshelfError::Parse("Document is empty".to_string()));
    }
    let doc = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Toml => toml::from_str(content)?,
    };
    Ok(doc)
}
