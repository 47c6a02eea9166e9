use crate::anchors;
use crate::catalog::AboutContent;
use crate::layout::{Node, NodeKind};

use super::{TEXT_MUTED, section_intro};

/// Narrative and bullets beside the client badge grid.
pub fn about_panel(content: &AboutContent) -> Node {
    let bullets = content.bullets.iter().map(|bullet| {
        Node::new(NodeKind::ListItem {
            text: format!("• {bullet}"),
        })
    });

    let mut story = Node::block()
        .children(section_intro(&content.eyebrow, &content.heading))
        .child(Node::text(content.narrative.as_str()).class("mt-4 text-gray-700"));
    if !content.bullets.is_empty() {
        story = story.child(
            Node::new(NodeKind::List)
                .class("mt-6 space-y-3 text-sm text-gray-700")
                .children(bullets),
        );
    }

    let badges = content.clients.iter().enumerate().map(|(idx, badge)| {
        Node::block()
            .class("client-badge p-3 ring-1 ring-gray-100 rounded-lg text-center")
            .key(format!("client-{idx}"))
            .child(Node::inline(badge.label.as_str()))
    });

    let mut clients = Node::block().class("p-6 bg-white rounded-xl shadow-sm");
    if !content.clients_heading.is_empty() {
        clients = clients
            .child(Node::heading(4, content.clients_heading.as_str()).class("font-semibold"));
    }
    if !content.clients_blurb.is_empty() {
        clients = clients.child(
            Node::text(content.clients_blurb.as_str())
                .class("mt-2 text-sm")
                .class(TEXT_MUTED),
        );
    }
    clients = clients.child(
        Node::block()
            .class("mt-4 grid grid-cols-3 gap-3")
            .children(badges),
    );

    Node::new(NodeKind::Section)
        .anchor(anchors::ABOUT)
        .class("bg-indigo-50 py-16")
        .child(
            Node::block()
                .class("max-w-7xl mx-auto px-6 grid md:grid-cols-2 gap-8 items-center")
                .child(story)
                .child(clients),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_columns_with_bullets_and_badges() {
        let content = CatalogSpec::bigverified().about;
        let section = about_panel(&content);

        let columns = &section.children[0].children;
        assert_eq!(columns.len(), 2);

        let bullets: Vec<_> = columns[0]
            .walk()
            .filter(|n| matches!(n.kind, NodeKind::ListItem { .. }))
            .filter_map(Node::text_content)
            .collect();
        assert_eq!(bullets.len(), 3);
        assert!(bullets[0].starts_with("• Cross-functional teams"));

        let badges: Vec<_> = columns[1]
            .find_class("client-badge")
            .map(|b| b.children[0].text_content().unwrap_or_default())
            .collect();
        assert_eq!(badges, vec!["Client A", "Client B", "Client C"]);
    }

    #[test]
    fn repeated_badges_are_kept() {
        let mut content = CatalogSpec::bigverified().about;
        content.clients[1].label = "Client A".into();
        content.bullets.clear();
        let section = about_panel(&content);

        assert_eq!(section.find_class("client-badge").count(), 3);
        assert!(!section.walk().any(|n| n.kind == NodeKind::List));
    }
}
