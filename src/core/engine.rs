use crate::core::analyzer::analyze;
use crate::domain::model::{AnalysisReport, BlockKind, SectionSummary};
use crate::domain::ports::{ReportRenderer, ReportSource, Storage};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct EngineOutcome {
    pub output_path: String,
    pub bytes_written: usize,
    pub summary: Vec<SectionSummary>,
}

/// Drives fetch -> analyze -> render -> store for one document.
pub struct AnalysisEngine<R: ReportSource, S: Storage, W: ReportRenderer> {
    source: R,
    storage: S,
    renderer: W,
    file_name: String,
}

impl<R: ReportSource, S: Storage, W: ReportRenderer> AnalysisEngine<R, S, W> {
    pub fn new(source: R, storage: S, renderer: W, file_name: impl Into<String>) -> Self {
        Self {
            source,
            storage,
            renderer,
            file_name: file_name.into(),
        }
    }

    /// Fetches and analyzes without rendering or storing anything.
    pub async fn analyze_only(&self) -> Result<AnalysisReport> {
        tracing::info!("Fetching analysis from {}", self.source.describe());
        let document = self.source.fetch().await?;
        tracing::debug!("Fetched document ({} bytes)", document.len());

        let report = analyze(&document);
        log_summary(&report.summary());
        Ok(report)
    }

    pub async fn render(&self) -> Result<(AnalysisReport, String)> {
        let report = self.analyze_only().await?;
        let rendered = self.renderer.render(&report)?;
        tracing::debug!(
            "Rendered report as .{} ({} bytes)",
            self.renderer.file_extension(),
            rendered.len()
        );
        Ok((report, rendered))
    }

    pub async fn run(&self) -> Result<EngineOutcome> {
        let (report, rendered) = self.render().await?;

        tracing::debug!("Writing {} to storage", self.file_name);
        let output_path = self
            .storage
            .write_file(&self.file_name, rendered.as_bytes())
            .await?;
        tracing::info!("Report saved to: {}", output_path);

        Ok(EngineOutcome {
            output_path,
            bytes_written: rendered.len(),
            summary: report.summary(),
        })
    }
}

fn log_summary(summary: &[SectionSummary]) {
    for entry in summary {
        match entry.kind {
            BlockKind::Placeholder(status) => {
                tracing::warn!("Section '{}' is {:?}", entry.path, status)
            }
            kind => tracing::info!("Section '{}': {:?} ({} entries)", entry.path, kind, entry.entries),
        }
    }
}
