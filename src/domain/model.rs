use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NOT_FOUND_PLACEHOLDER: &str =
    "Content for this section was not found in the AI response.";
pub const EMPTY_PLACEHOLDER: &str = "Content for this section appears to be empty.";

/// Result of looking up one marker-delimited span in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum Section {
    /// Trimmed, non-empty text between the markers.
    Found(String),
    NotFound,
    Empty,
}

impl Section {
    pub fn status(&self) -> Option<SectionStatus> {
        match self {
            Section::Found(_) => None,
            Section::NotFound => Some(SectionStatus::NotFound),
            Section::Empty => Some(SectionStatus::Empty),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Section::Found(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Section::Found(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    NotFound,
    Empty,
}

impl SectionStatus {
    pub fn placeholder(&self) -> &'static str {
        match self {
            SectionStatus::NotFound => NOT_FOUND_PLACEHOLDER,
            SectionStatus::Empty => EMPTY_PLACEHOLDER,
        }
    }
}

/// Ordered lines of one paragraph.
pub type Paragraph = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum FormattedBlock {
    Prose(Vec<Paragraph>),
    List(Vec<String>),
    /// One-line placeholder for a missing or empty section.
    Status(SectionStatus),
}

impl FormattedBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            FormattedBlock::Prose(_) => BlockKind::Prose,
            FormattedBlock::List(_) => BlockKind::List,
            FormattedBlock::Status(status) => BlockKind::Placeholder(*status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "blocks", rename_all = "snake_case")]
pub enum SectionBody {
    Leaf(FormattedBlock),
    Composite(Vec<LabeledBlock>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledBlock {
    pub label: String,
    pub body: SectionBody,
}

impl LabeledBlock {
    pub fn leaf(label: &str, block: FormattedBlock) -> Self {
        Self {
            label: label.to_string(),
            body: SectionBody::Leaf(block),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub sections: Vec<LabeledBlock>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    pub fn new(sections: Vec<LabeledBlock>) -> Self {
        Self {
            sections,
            generated_at: Utc::now(),
        }
    }

    pub fn section(&self, label: &str) -> Option<&LabeledBlock> {
        self.sections.iter().find(|block| block.label == label)
    }

    /// Flattened view of every leaf block, SWOT children as `SWOT Analysis / Strengths`.
    pub fn summary(&self) -> Vec<SectionSummary> {
        fn walk(prefix: Option<&str>, block: &LabeledBlock, out: &mut Vec<SectionSummary>) {
            let path = match prefix {
                Some(parent) => format!("{} / {}", parent, block.label),
                None => block.label.clone(),
            };
            match &block.body {
                SectionBody::Leaf(formatted) => out.push(SectionSummary {
                    path,
                    kind: formatted.kind(),
                    entries: match formatted {
                        FormattedBlock::Prose(paragraphs) => paragraphs.len(),
                        FormattedBlock::List(items) => items.len(),
                        FormattedBlock::Status(_) => 0,
                    },
                }),
                SectionBody::Composite(children) => {
                    for child in children {
                        walk(Some(path.as_str()), child, out);
                    }
                }
            }
        }

        let mut out = Vec::new();
        for block in &self.sections {
            walk(None, block, &mut out);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Prose,
    List,
    Placeholder(SectionStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub path: String,
    pub kind: BlockKind,
    /// Paragraph or item count; zero for placeholders.
    pub entries: usize,
}
