use crate::domain::model::{AnalysisReport, FormattedBlock, LabeledBlock, SectionBody};
use crate::domain::ports::ReportRenderer;
use crate::utils::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Markdown,
    Json,
}

impl OutputFormat {
    pub const ALL: [&'static str; 3] = ["html", "markdown", "json"];
}

impl FromStr for OutputFormat {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            other => Err(AnalysisError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::ALL.join(", ")),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

impl ReportRenderer for OutputFormat {
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        match self {
            OutputFormat::Html => HtmlRenderer.render(report),
            OutputFormat::Markdown => MarkdownRenderer.render(report),
            OutputFormat::Json => JsonRenderer.render(report),
        }
    }

    fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => HtmlRenderer.file_extension(),
            OutputFormat::Markdown => MarkdownRenderer.file_extension(),
            OutputFormat::Json => JsonRenderer.file_extension(),
        }
    }
}

/// HTML fragments: `<p>` paragraphs with `<br>` line breaks, `<ul>` lists,
/// `<strong>` labels for SWOT sub-sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn render_block(&self, block: &FormattedBlock) -> String {
        match block {
            FormattedBlock::Status(status) => format!("<p>{}</p>", escape_html(status.placeholder())),
            FormattedBlock::Prose(paragraphs) => paragraphs
                .iter()
                .map(|lines| {
                    let escaped: Vec<String> = lines.iter().map(|l| escape_html(l)).collect();
                    format!("<p>{}</p>", escaped.join("<br>"))
                })
                .collect(),
            FormattedBlock::List(items) => {
                let mut html = String::from("<ul>");
                for item in items {
                    html.push_str(&format!("<li>{}</li>", escape_html(item)));
                }
                html.push_str("</ul>");
                html
            }
        }
    }

    pub fn render_body(&self, body: &SectionBody) -> String {
        match body {
            SectionBody::Leaf(block) => self.render_block(block),
            SectionBody::Composite(children) => children
                .iter()
                .map(|child| {
                    format!(
                        "<strong>{}:</strong>{}",
                        escape_html(&child.label),
                        self.render_body(&child.body)
                    )
                })
                .collect(),
        }
    }

    fn render_section(&self, block: &LabeledBlock) -> String {
        format!(
            "<section id=\"{}\">\n<h2>{}</h2>\n{}\n</section>\n",
            slug(&block.label),
            escape_html(&block.label),
            self.render_body(&block.body)
        )
    }
}

impl ReportRenderer for HtmlRenderer {
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        Ok(report
            .sections
            .iter()
            .map(|block| self.render_section(block))
            .collect())
    }

    fn file_extension(&self) -> &'static str {
        "html"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    fn render_block(&self, block: &FormattedBlock, out: &mut String) {
        match block {
            FormattedBlock::Status(status) => {
                out.push_str(&format!("_{}_\n\n", status.placeholder()));
            }
            FormattedBlock::Prose(paragraphs) => {
                for lines in paragraphs {
                    let lines: Vec<String> =
                        lines.iter().map(|line| escape_markdown_line(line)).collect();
                    // Two trailing spaces keep the source line breaks.
                    out.push_str(&lines.join("  \n"));
                    out.push_str("\n\n");
                }
            }
            FormattedBlock::List(items) => {
                for item in items {
                    out.push_str(&format!("- {}\n", escape_markdown_line(item)));
                }
                out.push('\n');
            }
        }
    }

    fn render_body(&self, body: &SectionBody, out: &mut String) {
        match body {
            SectionBody::Leaf(block) => self.render_block(block, out),
            SectionBody::Composite(children) => {
                for child in children {
                    out.push_str(&format!("**{}:**\n\n", child.label));
                    self.render_body(&child.body, out);
                }
            }
        }
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        let mut out = String::new();
        for block in &report.sections {
            out.push_str(&format!("## {}\n\n", block.label));
            self.render_body(&block.body, &mut out);
        }
        Ok(out.trim_end().to_string() + "\n")
    }

    fn file_extension(&self) -> &'static str {
        "md"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn render(&self, report: &AnalysisReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes a leading block marker (`-`, `*`, `+`, `#`, `>`, `=`, `1.`, `1)`)
/// so a line of text never turns into a list, heading or quote.
pub fn escape_markdown_line(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    if let Some(first) = body.chars().next() {
        if matches!(first, '-' | '*' | '+' | '#' | '>' | '=') {
            return format!("{}\\{}", indent, body);
        }
    }

    let digits = body.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let (number, rest) = body.split_at(digits);
        if rest.starts_with('.') || rest.starts_with(')') {
            return format!("{}{}\\{}", indent, number, rest);
        }
    }

    line.to_string()
}

// "SWOT Analysis" -> "swot-analysis"
fn slug(label: &str) -> String {
    label
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}
