pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::{
    file::FileReportSource,
    http::HttpReportSource,
    render::{HtmlRenderer, JsonRenderer, MarkdownRenderer, OutputFormat},
    storage::LocalStorage,
};
pub use crate::config::{AppConfig, SourceSettings};
pub use crate::core::{
    analyzer::{analyze, format_swot},
    engine::{AnalysisEngine, EngineOutcome},
    formatter::{format_list, format_prose},
    segmenter::{extract_section, segment},
};
pub use crate::domain::model::{AnalysisReport, FormattedBlock, LabeledBlock, Section, SectionBody};
pub use crate::utils::error::{AnalysisError, Result};
