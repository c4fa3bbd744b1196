#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::adapters::render::OutputFormat;
use crate::domain::ports::{ConfigProvider, ReportRenderer};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceSettings {
    File { path: String },
    Http { endpoint: String, idea: String },
}

/// Fully resolved settings for one run, after the TOML file and command
/// line overrides have been merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub output_path: String,
    pub output_file_name: String,
    pub format: OutputFormat,
    pub timeout_seconds: u64,
    /// Print the rendered report to stdout instead of writing a file.
    pub to_stdout: bool,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

impl AppConfig {
    pub fn new(source: SourceSettings, format: OutputFormat) -> Self {
        Self {
            source,
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_file_name: default_file_name(format),
            format,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            to_stdout: false,
            log_level: None,
            json_logs: false,
        }
    }

    pub fn http(idea: &str) -> Self {
        Self::new(
            SourceSettings::Http {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                idea: idea.to_string(),
            },
            OutputFormat::default(),
        )
    }
}

pub fn default_file_name(format: OutputFormat) -> String {
    format!("analysis.{}", format.file_extension())
}

impl ConfigProvider for AppConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_file_name(&self) -> &str {
        &self.output_file_name
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        match &self.source {
            SourceSettings::File { path } => validation::validate_path("input", path)?,
            SourceSettings::Http { endpoint, idea } => {
                validation::validate_url("endpoint", endpoint)?;
                validation::validate_idea(idea)?;
            }
        }

        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;

        if !self.to_stdout {
            validation::validate_path("output_path", &self.output_path)?;
            validation::validate_file_name(
                "output_file",
                &self.output_file_name,
                &[self.format.file_extension()],
            )?;
        }

        Ok(())
    }
}
