use crate::domain::ports::ReportSource;
use crate::utils::error::{AnalysisError, Result};
use crate::utils::validation::{validate_idea, validate_url};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:9000/analyze";

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    idea: &'a str,
}

/// Asks the analysis service to analyze an idea and returns the raw report text.
pub struct HttpReportSource {
    client: Client,
    endpoint: String,
    idea: String,
}

impl HttpReportSource {
    pub fn new(endpoint: &str, idea: &str, timeout: Duration) -> Result<Self> {
        validate_url("endpoint", endpoint)?;
        let idea = idea.trim();
        validate_idea(idea)?;

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            idea: idea.to_string(),
        })
    }

    fn report_from_body(body: serde_json::Value) -> Result<String> {
        if let Some(message) = error_message(&body) {
            return Err(AnalysisError::ServiceError { message });
        }

        ["ai_response", "full_ai_response"]
            .iter()
            .find_map(|key| {
                body.get(*key)
                    .and_then(|v| v.as_str())
                    .filter(|text| !text.is_empty())
            })
            .map(str::to_string)
            .ok_or(AnalysisError::UnexpectedResponseError)
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Posting idea ({} chars) to: {}", self.idea.chars().count(), self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { idea: &self.idea })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Analysis service response status: {}", status);

        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
            return Err(AnalysisError::ServiceError { message });
        }

        let body: serde_json::Value = response.json().await?;
        Self::report_from_body(body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// `error` counts only when set to something other than null, `false`, `0` or `""`.
fn error_message(body: &serde_json::Value) -> Option<String> {
    match body.get("error")? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(message) if message.is_empty() => None,
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        serde_json::Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn source(server: &MockServer) -> HttpReportSource {
        HttpReportSource::new(
            &server.url("/analyze"),
            "  Drone delivery for rural pharmacies ",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_posts_trimmed_idea_and_reads_ai_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/analyze")
                .json_body(serde_json::json!({"idea": "Drone delivery for rural pharmacies"}));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"ai_response": "**Market Fit:** good"}));
        });

        let text = source(&server).fetch().await.unwrap();

        api_mock.assert();
        assert_eq!(text, "**Market Fit:** good");
    }

    #[tokio::test]
    async fn test_fetch_falls_back_to_full_ai_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200).json_body(serde_json::json!({
                "swot_analysis": "placeholder",
                "full_ai_response": "**SWOT Analysis:** ..."
            }));
        });

        let text = source(&server).fetch().await.unwrap();
        assert_eq!(text, "**SWOT Analysis:** ...");
    }

    #[tokio::test]
    async fn test_error_field_in_success_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200)
                .json_body(serde_json::json!({"error": "AI API key is invalid. Please check your configuration."}));
        });

        let err = source(&server).fetch().await.unwrap_err();
        match err {
            AnalysisError::ServiceError { message } => assert!(message.starts_with("AI API key is invalid")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_http_error_uses_body_error_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(400).json_body(serde_json::json!({"error": "Idea text cannot be empty"}));
        });

        let err = source(&server).fetch().await.unwrap_err();
        assert_eq!(err.user_friendly_message(), "Idea text cannot be empty");
    }

    #[tokio::test]
    async fn test_http_error_without_json_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(502).body("Bad Gateway");
        });

        let err = source(&server).fetch().await.unwrap_err();
        assert_eq!(err.user_friendly_message(), "HTTP error! status: 502");
    }

    #[tokio::test]
    async fn test_unexpected_response_shape() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200).json_body(serde_json::json!({"status": "ok"}));
        });

        let err = source(&server).fetch().await.unwrap_err();
        assert!(matches!(err, AnalysisError::UnexpectedResponseError));
    }

    #[tokio::test]
    async fn test_empty_ai_response_falls_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200).json_body(serde_json::json!({
                "ai_response": "",
                "full_ai_response": "**Market Fit:** good"
            }));
        });

        let text = source(&server).fetch().await.unwrap();
        assert_eq!(text, "**Market Fit:** good");
    }

    #[tokio::test]
    async fn test_empty_ai_response_is_unexpected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200).json_body(serde_json::json!({"ai_response": ""}));
        });

        let err = source(&server).fetch().await.unwrap_err();
        assert!(matches!(err, AnalysisError::UnexpectedResponseError));
    }

    #[tokio::test]
    async fn test_empty_error_field_is_ignored() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200)
                .json_body(serde_json::json!({"error": "", "ai_response": "**Market Fit:** good"}));
        });

        let text = source(&server).fetch().await.unwrap();
        assert_eq!(text, "**Market Fit:** good");
    }

    #[tokio::test]
    async fn test_false_error_field_is_ignored() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/analyze");
            then.status(200).json_body(serde_json::json!({"error": false}));
        });

        let err = source(&server).fetch().await.unwrap_err();
        assert!(matches!(err, AnalysisError::UnexpectedResponseError));
    }

    #[test]
    fn test_rejects_invalid_idea_before_sending() {
        let empty = HttpReportSource::new(DEFAULT_ENDPOINT, "   ", Duration::from_secs(1));
        assert!(matches!(empty, Err(AnalysisError::ValidationError { .. })));

        let long = "a".repeat(5001);
        let too_long = HttpReportSource::new(DEFAULT_ENDPOINT, &long, Duration::from_secs(1));
        assert!(matches!(too_long, Err(AnalysisError::ValidationError { .. })));

        let bad_url = HttpReportSource::new("ftp://example.com", "idea", Duration::from_secs(1));
        assert!(matches!(bad_url, Err(AnalysisError::InvalidConfigValueError { .. })));
    }
}
