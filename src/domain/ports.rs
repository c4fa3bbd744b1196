use crate::domain::model::AnalysisReport;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Where the raw analysis document comes from.
#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}

pub trait ReportRenderer: Send + Sync {
    fn render(&self, report: &AnalysisReport) -> Result<String>;
    fn file_extension(&self) -> &'static str;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_file_name(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
