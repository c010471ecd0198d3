//! Suite file loading
//!
//! The format is chosen by extension: `.json`, `.yaml` or `.yml`.

use std::path::Path;

use super::action::Suite;
use super::values::TemplateValues;
use crate::common::{Error, Result};

/// Serialization format of a suite file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    Json,
    Yaml,
}

impl SuiteFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedSuiteFormat(path.display().to_string())),
        }
    }
}

/// Read, render and parse a suite file
pub fn load_suite(path: &Path, values: &TemplateValues) -> Result<Suite> {
    let format = SuiteFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
    let rendered = values.render(&content)?;
    parse_suite(&rendered, format).map_err(|e| match e {
        Error::SuiteParse { error, .. } => Error::suite_parse(path, error),
        other => other,
    })
}

/// Parse suite text in the given format
pub fn parse_suite(content: &str, format: SuiteFormat) -> Result<Suite> {
    let path = Path::new("<inline>");
    match format {
        SuiteFormat::Json => serde_json::from_str(content).map_err(|e| Error::suite_parse(path, e)),
        // An empty YAML document is an empty suite
        SuiteFormat::Yaml if content.trim().is_empty() => Ok(Suite::default()),
        SuiteFormat::Yaml => serde_yaml::from_str(content).map_err(|e| Error::suite_parse(path, e)),
    }
}
