use crate::adapters::http::DEFAULT_ENDPOINT;
use crate::adapters::render::OutputFormat;
use crate::config::toml_config::{SourceKind, TomlConfig};
use crate::config::{default_file_name, AppConfig, SourceSettings, DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "idea-lens")]
#[command(about = "Extracts SWOT, market fit, competitor and refinement sections from a startup idea analysis")]
pub struct CliConfig {
    /// Analysis report to parse (`-` reads stdin)
    #[arg(short, long, conflicts_with = "idea")]
    pub input: Option<String>,

    /// Idea text to send to the analysis service
    #[arg(long)]
    pub idea: Option<String>,

    /// Analysis service endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Output format: html, markdown or json
    #[arg(short, long)]
    pub format: Option<String>,

    #[arg(long)]
    pub output_path: Option<String>,

    #[arg(long)]
    pub output_file: Option<String>,

    /// Print the rendered report instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit JSON logs
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges the optional TOML file with command line flags; flags win.
    pub fn resolve(&self) -> Result<AppConfig> {
        let toml = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };
        self.merge(&toml)
    }

    pub fn merge(&self, toml: &TomlConfig) -> Result<AppConfig> {
        let source = self.source_settings(toml)?;

        let format = match &self.format {
            Some(format) => format.parse::<OutputFormat>()?,
            None => toml.output_format()?.unwrap_or_default(),
        };

        let output_path = self
            .output_path
            .clone()
            .or_else(|| toml.output.path.clone())
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        let output_file_name = self
            .output_file
            .clone()
            .or_else(|| toml.output.file_name.clone())
            .unwrap_or_else(|| default_file_name(format));

        let timeout_seconds = self
            .timeout_seconds
            .or(toml.source.timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        let log_level = if self.verbose {
            Some("debug".to_string())
        } else {
            toml.log_level().map(str::to_string)
        };

        Ok(AppConfig {
            source,
            output_path,
            output_file_name,
            format,
            timeout_seconds,
            to_stdout: self.stdout,
            log_level,
            json_logs: self.json_logs || toml.json_logs(),
        })
    }

    fn source_settings(&self, toml: &TomlConfig) -> Result<SourceSettings> {
        let endpoint = || {
            self.endpoint
                .clone()
                .or_else(|| toml.source.endpoint.clone())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
        };

        if let Some(idea) = &self.idea {
            return Ok(SourceSettings::Http {
                endpoint: endpoint(),
                idea: idea.clone(),
            });
        }
        if let Some(path) = &self.input {
            return Ok(SourceSettings::File { path: path.clone() });
        }

        match toml.source.kind {
            SourceKind::Http => {
                let idea = validate_required_field("idea", &toml.source.idea)?;
                Ok(SourceSettings::Http {
                    endpoint: endpoint(),
                    idea: idea.clone(),
                })
            }
            SourceKind::File => {
                let path = validate_required_field("input", &toml.source.path)?;
                Ok(SourceSettings::File { path: path.clone() })
            }
        }
    }
}
