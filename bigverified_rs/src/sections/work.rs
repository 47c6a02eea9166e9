use crate::anchors;
use crate::catalog::{CaseStudy, WorkContent};
use crate::layout::{Node, NodeKind};

use super::{TEXT_MUTED, card_grid, section_intro};

/// Class tag on each case-study card.
pub const CASE_CARD: &str = "case-card";

/// One card per case study, in input order.
pub fn case_study_cards(items: &[CaseStudy]) -> impl Iterator<Item = Node> + '_ {
    items.iter().map(|case| {
        Node::new(NodeKind::Article)
            .class(CASE_CARD)
            .class("bg-white rounded-xl p-6 shadow-sm")
            .key(case.key())
            .child(Node::text(case.category.as_str()).class("text-xs text-gray-500"))
            .child(Node::heading(4, case.title.as_str()).class("mt-2 font-semibold"))
            .child(
                Node::text(case.summary.as_str())
                    .class("mt-2 text-sm")
                    .class(TEXT_MUTED),
            )
    })
}

/// The `work` section. Empty input gives an empty grid, no placeholder.
pub fn case_studies_grid(content: &WorkContent) -> Node {
    Node::new(NodeKind::Section)
        .anchor(anchors::WORK)
        .class("max-w-7xl mx-auto px-6 py-16")
        .children(section_intro(&content.eyebrow, &content.heading))
        .child(card_grid(case_study_cards(&content.items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSpec;
    use crate::sections::CARD_GRID;
    use pretty_assertions::assert_eq;

    #[test]
    fn cards_follow_input_order() {
        let content = CatalogSpec::bigverified().work;
        let section = case_studies_grid(&content);

        let titles: Vec<_> = section
            .find_class(CASE_CARD)
            .filter_map(|card| card.children[1].text_content())
            .collect();
        assert_eq!(
            titles,
            vec!["Consumer Brand Growth", "Enterprise Hiring Program", "Channel Expansion"]
        );
        let categories: Vec<_> = section
            .find_class(CASE_CARD)
            .filter_map(|card| card.children[0].text_content())
            .collect();
        assert_eq!(categories, vec!["Marketing", "Recruitment", "Business Development"]);
    }

    #[test]
    fn empty_case_studies_render_no_cards_and_no_placeholder() {
        let mut content = CatalogSpec::bigverified().work;
        content.items.clear();
        let section = case_studies_grid(&content);

        assert_eq!(section.find_class(CASE_CARD).count(), 0);
        let grid = section.find_class(CARD_GRID).next().expect("grid present");
        assert!(grid.children.is_empty());
        assert_eq!(section.anchor.as_deref(), Some("work"));
        // Only the eyebrow and heading carry text.
        assert_eq!(section.walk().filter(|n| n.text_content().is_some()).count(), 2);
    }

    #[test]
    fn keys_derive_from_titles() {
        let content = CatalogSpec::bigverified().work;
        let keys: Vec<_> = case_study_cards(&content.items)
            .filter_map(|card| card.key)
            .collect();
        assert_eq!(
            keys,
            vec![
                "case-consumer-brand-growth",
                "case-enterprise-hiring-program",
                "case-channel-expansion",
            ]
        );
    }
}
