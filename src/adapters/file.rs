use crate::domain::ports::ReportSource;
use crate::utils::error::{AnalysisError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Reads an already generated analysis report from disk, or from stdin for `-`.
#[derive(Debug, Clone)]
pub struct FileReportSource {
    path: PathBuf,
}

impl FileReportSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_stdin(&self) -> bool {
        self.path.as_os_str() == "-"
    }
}

#[async_trait]
impl ReportSource for FileReportSource {
    async fn fetch(&self) -> Result<String> {
        let bytes = if self.is_stdin() {
            let mut buffer = Vec::new();
            tokio::io::stdin().read_to_end(&mut buffer).await?;
            buffer
        } else {
            tokio::fs::read(&self.path).await?
        };

        String::from_utf8(bytes).map_err(|e| AnalysisError::ValidationError {
            message: format!("{} is not valid UTF-8: {}", self.describe(), e),
        })
    }

    fn describe(&self) -> String {
        if self.is_stdin() {
            "stdin".to_string()
        } else {
            self.path.display().to_string()
        }
    }
}
