use crate::adapters::render::OutputFormat;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    /// Report file for `kind = "file"`; `-` reads stdin.
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub idea: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
    pub file_name: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

impl TomlConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalysisError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` references such as `${ANALYSIS_ENDPOINT}`; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().map(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        match self.source.kind {
            SourceKind::File => {
                if let Some(path) = &self.source.path {
                    validation::validate_path("source.path", path)?;
                }
            }
            SourceKind::Http => {
                if let Some(endpoint) = &self.source.endpoint {
                    validation::validate_url("source.endpoint", endpoint)?;
                }
            }
        }

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 600)?;
        }

        if let Some(path) = &self.output.path {
            validation::validate_path("output.path", path)?;
        }

        self.output_format()?;

        if let Some(level) = self.log_level() {
            let levels = ["trace", "debug", "info", "warn", "error"];
            if !levels.contains(&level) {
                return Err(AnalysisError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}
