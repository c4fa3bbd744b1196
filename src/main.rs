use anyhow::Context;
use clap::Parser;
use idea_lens::domain::ports::{ConfigProvider, ReportRenderer, ReportSource};
use idea_lens::utils::{logger, validation::Validate};
use idea_lens::{
    AnalysisEngine, AnalysisError, AppConfig, CliConfig, FileReportSource, HttpReportSource,
    LocalStorage, SourceSettings,
};
use std::io::Write;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // No subscriber exists yet, so config errors only go to stderr.
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if config.json_logs {
        logger::init_json_logger(config.log_level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level.as_deref());
    }

    tracing::info!("Starting idea-lens");
    tracing::debug!("Resolved config: {:?}", config);

    let result = match &config.source {
        SourceSettings::File { path } => execute(FileReportSource::new(path), &config).await,
        SourceSettings::Http { endpoint, idea } => {
            let timeout = Duration::from_secs(config.timeout_seconds());
            match HttpReportSource::new(endpoint, idea, timeout) {
                Ok(source) => execute(source, &config).await,
                Err(e) => Err(e),
            }
        }
    };

    match result {
        Ok(Some(rendered)) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write report to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(
                "❌ Analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            exit_with(&e)
        }
    }

    Ok(())
}

/// Returns the rendered report when it goes to stdout, `None` once it is stored.
async fn execute<R: ReportSource>(
    source: R,
    config: &AppConfig,
) -> idea_lens::Result<Option<String>> {
    let storage = LocalStorage::new(config.output_path().to_string());
    let engine = AnalysisEngine::new(source, storage, config.format, config.output_file_name());

    if config.to_stdout {
        let (_, rendered) = engine.render().await?;
        return Ok(Some(rendered));
    }

    let outcome = engine.run().await?;
    tracing::info!(
        "✅ Analysis rendered as {} ({} bytes)",
        config.format.file_extension(),
        outcome.bytes_written
    );
    println!("📁 Output saved to: {}", outcome.output_path);
    Ok(None)
}

fn exit_with(e: &AnalysisError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}
