use crate::catalog::{CallToAction, HeroContent, HeroStat};
use crate::layout::{Node, NodeKind};

use super::TEXT_MUTED;

/// Class tag on each stat card.
pub const STAT_CARD: &str = "stat-card";

const STAT_COLUMNS: [&str; 3] = ["grid-cols-1", "grid-cols-2", "grid-cols-3"];

/// Two-column hero: copy, calls to action and stats on the left,
/// graphic with the floating highlight card on the right.
pub fn hero(content: &HeroContent) -> Node {
    let mut copy = Node::block();
    if !content.eyebrow.is_empty() {
        copy = copy.child(
            Node::text(content.eyebrow.as_str()).class("text-sm text-indigo-600 font-semibold"),
        );
    }
    copy = copy
        .child(
            Node::heading(2, content.headline.as_str())
                .class("mt-4 text-4xl font-extrabold leading-tight"),
        )
        .child(
            Node::text(content.body.as_str())
                .class(TEXT_MUTED)
                .class("mt-4 max-w-xl"),
        )
        .child(
            Node::block()
                .class("mt-8 flex gap-4")
                .child(cta_link(&content.primary_cta).class("bg-indigo-600 text-white shadow"))
                .child(cta_link(&content.secondary_cta).class("ring-1 ring-gray-200")),
        );
    if let Some(grid) = stat_grid(&content.stats) {
        copy = copy.child(grid);
    }

    let visual = Node::block()
        .class("relative")
        .child(
            Node::block()
                .class("h-80 rounded-2xl bg-gradient-to-br from-indigo-100 to-white")
                .class("p-8 flex items-center justify-center")
                .child(
                    Node::new(NodeKind::Graphic(content.graphic.clone()))
                        .class("max-w-full max-h-full"),
                ),
        )
        .child(
            Node::block()
                .class("absolute -bottom-6 left-6 w-64 p-4")
                .class("bg-white rounded-xl shadow-lg ring-1 ring-gray-100")
                .child(
                    Node::text(content.highlight.caption.as_str()).class("text-xs text-gray-500"),
                )
                .child(Node::text(content.highlight.title.as_str()).class("font-semibold")),
        );

    Node::new(NodeKind::Section)
        .class("max-w-7xl mx-auto px-6 py-16 grid md:grid-cols-2 gap-10 items-center")
        .child(copy)
        .child(visual)
}

fn cta_link(cta: &CallToAction) -> Node {
    Node::anchor_link(&cta.target, cta.label.as_str())
        .class("inline-flex items-center gap-2 px-5 py-3 rounded-lg")
}

/// Stats in catalog order; wraps after three columns. `None` when empty.
fn stat_grid(stats: &[HeroStat]) -> Option<Node> {
    if stats.is_empty() {
        return None;
    }
    let columns = STAT_COLUMNS[stats.len().min(STAT_COLUMNS.len()) - 1];
    let cards = stats.iter().enumerate().map(|(idx, stat)| {
        Node::block()
            .class(STAT_CARD)
            .class("p-4 bg-white rounded-lg shadow-sm")
            .key(format!("stat-{idx}"))
            .child(Node::text(stat.value.as_str()).class("text-2xl font-bold"))
            .child(Node::text(stat.caption.as_str()).class("text-xs text-gray-500"))
    });
    Some(
        Node::block()
            .class("mt-8 grid gap-4 max-w-sm")
            .class(columns)
            .children(cards),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSpec, Graphic};
    use pretty_assertions::assert_eq;

    fn stats(pairs: &[(&str, &str)]) -> Vec<HeroStat> {
        pairs
            .iter()
            .map(|(value, caption)| HeroStat {
                value: (*value).into(),
                caption: (*caption).into(),
            })
            .collect()
    }

    fn rendered_stats(section: &Node) -> Vec<(String, String)> {
        section
            .find_class(STAT_CARD)
            .map(|card| {
                let texts: Vec<_> = card.children.iter().filter_map(Node::text_content).collect();
                (texts[0].to_string(), texts[1].to_string())
            })
            .collect()
    }

    #[test]
    fn three_stats_render_in_order() {
        let mut content = CatalogSpec::bigverified().hero;
        content.stats = stats(&[
            ("+120%", "growth"),
            ("Global", "reach"),
            ("1,000+", "candidates"),
        ]);

        let section = hero(&content);
        assert_eq!(
            rendered_stats(&section),
            vec![
                ("+120%".to_string(), "growth".to_string()),
                ("Global".to_string(), "reach".to_string()),
                ("1,000+".to_string(), "candidates".to_string()),
            ]
        );
        assert_eq!(section.find_class("grid-cols-3").count(), 1);
    }

    #[test]
    fn other_counts_use_wrapping_grid() {
        let mut content = CatalogSpec::bigverified().hero;
        content.stats = stats(&[("1", "a"), ("2", "b")]);
        assert_eq!(hero(&content).find_class("grid-cols-2").count(), 1);

        content.stats = stats(&[("1", "a"), ("2", "b"), ("3", "c"), ("4", "d"), ("4", "d")]);
        let section = hero(&content);
        assert_eq!(section.find_class(STAT_CARD).count(), 5);
        assert_eq!(section.find_class("grid-cols-3").count(), 1);
    }

    #[test]
    fn no_stats_omits_grid() {
        let mut content = CatalogSpec::bigverified().hero;
        content.stats.clear();
        let section = hero(&content);
        assert_eq!(section.find_class(STAT_CARD).count(), 0);
        assert_eq!(section.find_class("max-w-sm").count(), 0);
    }

    #[test]
    fn carries_graphic_highlight_and_ctas() {
        let content = CatalogSpec::bigverified().hero;
        let section = hero(&content);

        assert!(
            section
                .walk()
                .any(|n| matches!(n.kind, NodeKind::Graphic(Graphic::Gradient { .. })))
        );
        assert!(
            section
                .walk()
                .any(|n| n.text_content() == Some("SaaS Launch — 43% MRR growth in 90 days"))
        );
        let hrefs: Vec<_> = section
            .walk()
            .filter_map(|n| match &n.kind {
                NodeKind::Link { href, .. } => Some(href.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(hrefs, vec!["#contact", "#work"]);
    }
}
