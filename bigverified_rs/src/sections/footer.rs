use crate::catalog::LegalLink;
use crate::layout::{Node, NodeKind};

/// `© <year> <brand> — All rights reserved.`
pub fn copyright_line(year: i32, brand: &str) -> String {
    format!("© {year} {brand} — All rights reserved.")
}

pub fn footer(brand: &str, links: &[LegalLink], year: i32) -> Node {
    let links = links.iter().map(|link| {
        Node::link(link.href.as_str(), link.label.as_str()).class("hover:text-indigo-600")
    });

    Node::new(NodeKind::Footer).class("bg-white border-t").child(
        Node::block()
            .class("max-w-7xl mx-auto px-6 py-8 flex flex-col md:flex-row")
            .class("items-center justify-between text-sm text-gray-600")
            .child(
                Node::block().child(Node::inline(copyright_line(year, brand)).class("copyright")),
            )
            .child(Node::block().class("flex gap-4 mt-4 md:mt-0").children(links)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSpec;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_uses_given_year() {
        assert_eq!(
            copyright_line(2031, "BigVerified"),
            "© 2031 BigVerified — All rights reserved."
        );
    }

    #[test]
    fn footer_lists_legal_links() {
        let spec = CatalogSpec::bigverified();
        let node = footer(&spec.brand.name, &spec.footer.links, 2031);

        let labels: Vec<_> = node
            .walk()
            .filter(|n| matches!(n.kind, NodeKind::Link { .. }))
            .filter_map(Node::text_content)
            .collect();
        assert_eq!(labels, vec!["Privacy", "Terms", "Sitemap"]);
        let line = node.find_class("copyright").next().and_then(Node::text_content);
        assert_eq!(line, Some("© 2031 BigVerified — All rights reserved."));
    }
}
