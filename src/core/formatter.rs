use crate::domain::model::{FormattedBlock, Paragraph, Section, SectionStatus};
use regex::Regex;
use std::sync::LazyLock;

/// Bullet prefixes that make a line a list item. Exactly one space after the symbol.
pub const BULLET_PREFIXES: [&str; 2] = ["- ", "* "];

// One or more blank (whitespace-only) lines.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n+").expect("paragraph break pattern is valid"));

/// Formats a section as paragraphs of lines.
pub fn format_prose(section: &Section) -> FormattedBlock {
    match section {
        Section::Found(text) => FormattedBlock::Prose(split_paragraphs(text)),
        Section::NotFound => FormattedBlock::Status(SectionStatus::NotFound),
        Section::Empty => FormattedBlock::Status(SectionStatus::Empty),
    }
}

/// Formats a section as a bullet list, or as prose when no line carries a
/// recognized bullet. Non-bullet lines between bullets are dropped.
pub fn format_list(section: &Section) -> FormattedBlock {
    let Section::Found(text) = section else {
        return format_prose(section);
    };

    let items = bullet_items(text);
    if items.is_empty() {
        return format_prose(section);
    }
    FormattedBlock::List(items)
}

/// Trimmed bullet lines with their prefix removed, in source order.
pub fn bullet_items(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter_map(|line| {
            BULLET_PREFIXES
                .iter()
                .find_map(|prefix| line.strip_prefix(prefix))
                .map(|rest| rest.trim().to_string())
        })
        .collect()
}

fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    PARAGRAPH_BREAK
        .split(text)
        .map(|paragraph| {
            paragraph
                .split('\n')
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect()
        })
        .collect()
}
