use crate::core::formatter::{format_list, format_prose};
use crate::core::segmenter::{segment, MARKET_FIT, SWOT_ANALYSIS, SWOT_SPEC, TOP_LEVEL_SPEC};
use crate::domain::model::{AnalysisReport, LabeledBlock, Section, SectionBody};

/// Splits the SWOT span into its four sub-sections. Each one is list-formatted
/// with prose fallback; a missing or empty SWOT span yields a single placeholder.
pub fn format_swot(section: &Section) -> SectionBody {
    let Section::Found(text) = section else {
        return SectionBody::Leaf(format_prose(section));
    };

    let children = segment(text, SWOT_SPEC)
        .into_iter()
        .map(|(name, sub)| LabeledBlock::leaf(name, format_list(&sub)))
        .collect();
    SectionBody::Composite(children)
}

/// Turns a full analysis document into the four labeled top-level blocks.
pub fn analyze(full_text: &str) -> AnalysisReport {
    let sections = segment(full_text, TOP_LEVEL_SPEC)
        .into_iter()
        .map(|(name, section)| {
            let body = match name {
                SWOT_ANALYSIS => format_swot(&section),
                MARKET_FIT => SectionBody::Leaf(format_prose(&section)),
                // Competitor Overview and Refinement Suggestions
                _ => SectionBody::Leaf(format_list(&section)),
            };
            LabeledBlock {
                label: name.to_string(),
                body,
            }
        })
        .collect();

    AnalysisReport::new(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FormattedBlock, SectionStatus};

    const FULL_REPORT: &str = "**SWOT Analysis:**\n**Strengths:**\n- fast\n**Weaknesses:**\n- none\n**Opportunities:**\n- big market\n**Threats:**\n- competitors\n**Market Fit:**\nGood fit.\n**Competitor Overview:**\n- A\n- B\n**Refinement Suggestions:**\n- focus more";

    fn list(items: &[&str]) -> SectionBody {
        SectionBody::Leaf(FormattedBlock::List(
            items.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn test_end_to_end_report() {
        let report = analyze(FULL_REPORT);
        let labels: Vec<_> = report.sections.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["SWOT Analysis", "Market Fit", "Competitor Overview", "Refinement Suggestions"]
        );

        let SectionBody::Composite(swot) = &report.sections[0].body else {
            panic!("SWOT must be composite");
        };
        let expected = [
            ("Strengths", "fast"),
            ("Weaknesses", "none"),
            ("Opportunities", "big market"),
            ("Threats", "competitors"),
        ];
        assert_eq!(swot.len(), 4);
        for (block, (label, item)) in swot.iter().zip(expected) {
            assert_eq!(block.label, label);
            assert_eq!(block.body, list(&[item]));
        }

        assert_eq!(
            report.sections[1].body,
            SectionBody::Leaf(FormattedBlock::Prose(vec![vec!["Good fit.".to_string()]]))
        );
        assert_eq!(report.sections[2].body, list(&["A", "B"]));
        assert_eq!(report.sections[3].body, list(&["focus more"]));
    }

    #[test]
    fn test_swot_output_order_is_fixed_regardless_of_text_order() {
        let text = "**Threats:**\n- t\n**Strengths:**\n- s\n**Weaknesses:**\n- w\n**Opportunities:**\n- o";
        let SectionBody::Composite(children) = format_swot(&Section::Found(text.to_string())) else {
            panic!("expected composite");
        };
        let labels: Vec<_> = children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["Strengths", "Weaknesses", "Opportunities", "Threats"]);
        // Threats runs to end of text and swallows the later markers.
        assert_eq!(children[0].body, list(&["s"]));
        assert!(matches!(
            &children[3].body,
            SectionBody::Leaf(FormattedBlock::List(items)) if items.len() == 4
        ));
    }

    #[test]
    fn test_swot_keeps_all_four_blocks_when_some_are_missing() {
        let text = "**Strengths:**\nGreat team.\n**Threats:**   ";
        let SectionBody::Composite(children) = format_swot(&Section::Found(text.to_string())) else {
            panic!("expected composite");
        };
        assert_eq!(children.len(), 4);
        // Strengths has no Weaknesses marker after it, so it runs to end of text.
        assert_eq!(
            children[0].body,
            SectionBody::Leaf(FormattedBlock::Prose(vec![vec![
                "Great team.".to_string(),
                "**Threats:**".to_string()
            ]]))
        );
        assert_eq!(
            children[1].body,
            SectionBody::Leaf(FormattedBlock::Status(SectionStatus::NotFound))
        );
        assert_eq!(
            children[2].body,
            SectionBody::Leaf(FormattedBlock::Status(SectionStatus::NotFound))
        );
        assert_eq!(
            children[3].body,
            SectionBody::Leaf(FormattedBlock::Status(SectionStatus::Empty))
        );
    }

    #[test]
    fn test_missing_swot_is_single_placeholder() {
        assert_eq!(
            format_swot(&Section::NotFound),
            SectionBody::Leaf(FormattedBlock::Status(SectionStatus::NotFound))
        );
        assert_eq!(
            format_swot(&Section::Empty),
            SectionBody::Leaf(FormattedBlock::Status(SectionStatus::Empty))
        );
    }

    #[test]
    fn test_document_without_markers_yields_four_placeholders() {
        let report = analyze("The model refused to answer.");
        assert_eq!(report.sections.len(), 4);
        for block in &report.sections {
            assert_eq!(
                block.body,
                SectionBody::Leaf(FormattedBlock::Status(SectionStatus::NotFound))
            );
        }
    }

    #[test]
    fn test_market_fit_bullets_stay_prose() {
        let report = analyze("**Market Fit:**\n- strong\n- growing");
        assert_eq!(
            report.section("Market Fit").map(|b| &b.body),
            Some(&SectionBody::Leaf(FormattedBlock::Prose(vec![vec![
                "- strong".to_string(),
                "- growing".to_string()
            ]])))
        );
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let first = analyze(FULL_REPORT);
        let second = analyze(FULL_REPORT);
        assert_eq!(first.sections, second.sections);
    }
}
