//! Configuration file handling

use serde::Deserialize;
use std::path::Path;

use super::paths::config_path;
use super::{Error, Result};

/// GCE metadata endpoint serving the default service account token
pub const DEFAULT_METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// HTTP executor settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Script executor settings
    #[serde(default)]
    pub script: ScriptConfig,

    /// GCP client settings
    #[serde(default)]
    pub gcp: GcpConfig,
}

/// HTTP client settings
#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    /// Request timeout applied by the HTTP client; none when unset
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    concat!("testrunner/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Script executor settings
#[derive(Debug, Deserialize)]
pub struct ScriptConfig {
    /// Shell used to run `bashTest` scripts via `<shell> -c <script>`
    #[serde(default = "default_shell")]
    pub shell: String,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            shell: default_shell(),
        }
    }
}

fn default_shell() -> String {
    "bash".to_string()
}

/// GCP settings
#[derive(Debug, Deserialize)]
pub struct GcpConfig {
    /// Where to fetch the service account access token from
    #[serde(default = "default_metadata_token_url")]
    pub metadata_token_url: String,
}

impl Default for GcpConfig {
    fn default() -> Self {
        Self {
            metadata_token_url: default_metadata_token_url(),
        }
    }
}

fn default_metadata_token_url() -> String {
    DEFAULT_METADATA_TOKEN_URL.to_string()
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default config file
    /// is used if present, otherwise defaults apply.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::file_read(path, &e))?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ConfigParse(e.to_string()))
    }
}
