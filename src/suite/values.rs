//! Template values substituted into suite files before parsing
//!
//! Placeholders look like `{{ .Vars.NAME }}` or
//! `{{ .Values.<file-stem>.<dotted.path> }}`. `Vars` come from `--var`
//! flags, `Values` from the YAML files of a `--test-spec-values` directory.

use regex::{Captures, Regex};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;

use crate::common::{Error, Result};

const PLACEHOLDER: &str = r"\{\{\s*\.([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z0-9_\-]+)*)\s*\}\}";

/// Values available to suite templates
#[derive(Debug, Default)]
pub struct TemplateValues {
    vars: BTreeMap<String, String>,
    values: BTreeMap<String, Value>,
}

/// Parse a `KEY=VALUE` flag
pub fn parse_var(flag: &str) -> Result<(String, String)> {
    match flag.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(Error::InvalidVar(flag.to_string())),
    }
}

impl TemplateValues {
    pub fn new(vars: BTreeMap<String, String>, values: BTreeMap<String, Value>) -> Self {
        Self { vars, values }
    }

    /// Build from `--var` flags and an optional values directory
    pub fn load(vars: &[String], values_dir: Option<&Path>) -> Result<Self> {
        let vars = vars
            .iter()
            .map(|v| parse_var(v))
            .collect::<Result<BTreeMap<_, _>>>()?;
        let values = match values_dir {
            Some(dir) => load_values_dir(dir)?,
            None => BTreeMap::new(),
        };
        Ok(Self::new(vars, values))
    }

    /// Substitute every placeholder in `text`
    ///
    /// Unresolved placeholders are fatal.
    pub fn render(&self, text: &str) -> Result<String> {
        let re = Regex::new(PLACEHOLDER).map_err(|e| Error::Template(e.to_string()))?;

        let mut unresolved = None;
        let rendered = re.replace_all(text, |caps: &Captures| {
            let path = &caps[1];
            match self.lookup(path) {
                Some(value) => value,
                None => {
                    unresolved.get_or_insert_with(|| path.to_string());
                    String::new()
                }
            }
        });

        match unresolved {
            Some(path) => Err(Error::Template(format!("no value for placeholder '.{path}'"))),
            None => Ok(rendered.into_owned()),
        }
    }

    fn lookup(&self, path: &str) -> Option<String> {
        let mut segments = path.split('.');
        match segments.next()? {
            "Vars" => {
                let key = segments.next()?;
                if segments.next().is_some() {
                    return None;
                }
                self.vars.get(key).cloned()
            }
            "Values" => {
                let mut current = self.values.get(segments.next()?)?;
                for segment in segments {
                    current = match current {
                        Value::Mapping(map) => map.get(segment)?,
                        Value::Sequence(seq) => seq.get(segment.parse::<usize>().ok()?)?,
                        _ => return None,
                    };
                }
                scalar_to_string(current)
            }
            _ => None,
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Parse every regular file in `dir` as YAML, keyed by file stem
fn load_values_dir(dir: &Path) -> Result<BTreeMap<String, Value>> {
    let entries = std::fs::read_dir(dir).map_err(|e| Error::file_read(dir, &e))?;
    let mut values = BTreeMap::new();

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            tracing::info!("'{}' is a directory. Ignored.", path.display());
            continue;
        }
        let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
            continue;
        };
        let content = std::fs::read_to_string(&path).map_err(|e| Error::file_read(&path, &e))?;
        let parsed: Value = serde_yaml::from_str(&content).map_err(|e| Error::ValuesParse {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded template values '{}' from {}", stem, path.display());
        values.insert(stem, parsed);
    }

    Ok(values)
}
