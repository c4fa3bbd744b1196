use crate::domain::model::Section;

/// One named span: starts after `start`, runs to the first `end` after it
/// or to the end of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerEntry {
    pub name: &'static str,
    pub start: &'static str,
    pub end: Option<&'static str>,
}

/// Ordered marker table. Iteration order is output order.
pub type MarkerSpec = [MarkerEntry];

pub const SWOT_ANALYSIS: &str = "SWOT Analysis";
pub const MARKET_FIT: &str = "Market Fit";
pub const COMPETITOR_OVERVIEW: &str = "Competitor Overview";
pub const REFINEMENT_SUGGESTIONS: &str = "Refinement Suggestions";

pub const TOP_LEVEL_SPEC: &MarkerSpec = &[
    MarkerEntry {
        name: SWOT_ANALYSIS,
        start: "**SWOT Analysis:**",
        end: Some("**Market Fit:**"),
    },
    MarkerEntry {
        name: MARKET_FIT,
        start: "**Market Fit:**",
        end: Some("**Competitor Overview:**"),
    },
    MarkerEntry {
        name: COMPETITOR_OVERVIEW,
        start: "**Competitor Overview:**",
        end: Some("**Refinement Suggestions:**"),
    },
    MarkerEntry {
        name: REFINEMENT_SUGGESTIONS,
        start: "**Refinement Suggestions:**",
        end: None,
    },
];

pub const SWOT_SPEC: &MarkerSpec = &[
    MarkerEntry {
        name: "Strengths",
        start: "**Strengths:**",
        end: Some("**Weaknesses:**"),
    },
    MarkerEntry {
        name: "Weaknesses",
        start: "**Weaknesses:**",
        end: Some("**Opportunities:**"),
    },
    MarkerEntry {
        name: "Opportunities",
        start: "**Opportunities:**",
        end: Some("**Threats:**"),
    },
    MarkerEntry {
        name: "Threats",
        start: "**Threats:**",
        end: None,
    },
];

/// Returns the trimmed text between the first `start` marker and the first
/// `end` marker after it. A missing `end` extends the span to end-of-text.
pub fn extract_section(text: &str, start: &str, end: Option<&str>) -> Section {
    let Some(found_at) = text.find(start) else {
        return Section::NotFound;
    };
    let rest = &text[found_at + start.len()..];

    let span = match end.and_then(|marker| rest.find(marker)) {
        Some(end_at) => &rest[..end_at],
        None => rest,
    };

    let trimmed = span.trim();
    if trimmed.is_empty() {
        Section::Empty
    } else {
        Section::Found(trimmed.to_string())
    }
}

/// Extracts every entry of `spec` from `text`, in spec order.
pub fn segment(text: &str, spec: &MarkerSpec) -> Vec<(&'static str, Section)> {
    spec.iter()
        .map(|entry| {
            let section = extract_section(text, entry.start, entry.end);
            tracing::trace!(
                "Section '{}': {}",
                entry.name,
                match &section {
                    Section::Found(body) => format!("{} bytes", body.len()),
                    Section::NotFound => "marker not found".to_string(),
                    Section::Empty => "empty".to_string(),
                }
            );
            (entry.name, section)
        })
        .collect()
}
