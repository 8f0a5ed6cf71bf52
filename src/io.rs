//! Locating, parsing, and writing API description documents.
//!
//! Everything here is a thin wrapper around the document model; the
//! enrichment engine itself never touches the filesystem.
use crate::document::Document;
use anyhow::{anyhow, Context, Result};
use clap::ValueEnum;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions probed, in order, when locating the input document.
const INPUT_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Serializations supported for the post-processed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    /// Return the file extension used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Serialize a document in this format.
    pub fn serialize(&self, document: &Document) -> Result<String> {
        match self {
            OutputFormat::Json => {
                serde_json::to_string_pretty(document).context("serialize document as JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(document).context("serialize document as YAML")
            }
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Locate the input specification by probing known extensions, bare name last.
pub fn find_input(dir: &Path, name: &str) -> Result<PathBuf> {
    for ext in INPUT_EXTENSIONS {
        let candidate = dir.join(format!("{name}.{ext}"));
        if candidate.exists() {
            return Ok(candidate);
        }
    }
    let bare = dir.join(name);
    if bare.exists() {
        return Ok(bare);
    }
    Err(anyhow!(
        "no API specification found at {} with extensions json, yaml or yml",
        dir.join(name).display()
    ))
}

/// Parse a document as JSON or YAML depending on its extension.
///
/// A bare or unknown extension tries JSON first, then YAML.
pub fn read_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    match extension {
        "json" => serde_json::from_str(&text)
            .with_context(|| format!("parse JSON document {}", path.display())),
        "yaml" | "yml" => serde_yaml::from_str(&text)
            .with_context(|| format!("parse YAML document {}", path.display())),
        _ => {
            if let Ok(document) = serde_json::from_str(&text) {
                return Ok(document);
            }
            serde_yaml::from_str(&text)
                .with_context(|| format!("parse document {}", path.display()))
        }
    }
}

/// Write the document to `dir/name.<ext>` in the given format.
pub fn write_document(
    document: &Document,
    dir: &Path,
    name: &str,
    format: OutputFormat,
) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create output directory {}", dir.display()))?;
        tracing::debug!(dir = %dir.display(), "created output directory");
    }
    let path = dir.join(format!("{name}.{}", format.extension()));
    let text = format.serialize(document)?;
    fs::write(&path, text).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
