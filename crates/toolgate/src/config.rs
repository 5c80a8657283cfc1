//! Layered configuration for the CLI
//!
//! Precedence, lowest to highest: built-in defaults, an optional TOML file
//! (`toolgate.toml` in the working directory, or the path given with
//! `--config`), then `TOOLGATE_`-prefixed environment variables with `__`
//! as the section separator (`TOOLGATE_ORACLE__MODEL=gpt-4o`).

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use toolgate_domain::{Error, Result, ToolMarkers};

/// Default TOML file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "toolgate.toml";

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Markers that qualify a class as a tool class
    pub markers: ToolMarkers,
    /// Which oracle judges definitions, and how to reach it
    pub oracle: OracleConfig,
}

/// Oracle selection and transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// `rules` for the deterministic checker, `openai` for the chat oracle
    pub provider: String,
    /// Bearer token, required only by the chat oracle
    pub api_key: Option<String>,
    /// API base override for OpenAI-compatible endpoints
    pub base_url: Option<String>,
    /// Chat model name
    pub model: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            provider: "rules".to_string(),
            api_key: None,
            base_url: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Load configuration from defaults, file, and environment
pub fn load(config_file: Option<&Path>) -> Result<AppConfig> {
    let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

    match config_file {
        Some(path) => {
            if !path.exists() {
                return Err(Error::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            debug!(path = DEFAULT_CONFIG_FILE, "loading config file");
            figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
        }
        None => {}
    }

    figment
        .merge(Env::prefixed("TOOLGATE_").split("__"))
        .extract()
        .map_err(|e| Error::config(format!("invalid configuration: {e}")))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.markers.base_class, "BaseTool");
        assert_eq!(config.markers.registration, "register");
        assert_eq!(config.markers.accessor, "property");
        assert_eq!(config.oracle.provider, "rules");
        assert_eq!(config.oracle.timeout_secs, 30);
        assert!(config.oracle.api_key.is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[markers]\nbase_class = \"AgentTool\"\n\n[oracle]\nmodel = \"gpt-4o\""
        )
        .unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.markers.base_class, "AgentTool");
        // untouched keys keep their defaults
        assert_eq!(config.markers.registration, "register");
        assert_eq!(config.oracle.model, "gpt-4o");
        assert_eq!(config.oracle.provider, "rules");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load(Some(Path::new("/nonexistent/toolgate.toml")));
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
