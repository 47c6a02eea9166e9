use crate::anchors;
use crate::catalog::{ServiceItem, ServicesContent};
use crate::layout::{Node, NodeKind};

use super::{CONTAINER, TEXT_MUTED, card_grid, section_intro};

/// Class tag on each service card.
pub const SERVICE_CARD: &str = "service-card";

/// One card per service, in input order.
///
/// Pure mapping: calling again over the same slice yields the same cards.
pub fn service_cards<'a>(
    items: &'a [ServiceItem],
    more_label: &'a str,
) -> impl Iterator<Item = Node> + 'a {
    items.iter().map(move |item| {
        let mut card = Node::new(NodeKind::Article)
            .class(SERVICE_CARD)
            .class("p-6 bg-gray-50 rounded-xl ring-1 ring-gray-100")
            .key(item.key())
            .child(Node::heading(4, item.title.as_str()).class("font-semibold"))
            .child(
                Node::text(item.description.as_str())
                    .class("mt-2 text-sm")
                    .class(TEXT_MUTED),
            );
        if !more_label.is_empty() {
            card = card.child(Node::inline(more_label).class("mt-4 text-xs text-indigo-600"));
        }
        card
    })
}

/// The `services` section. Empty input gives an empty grid, no placeholder.
pub fn services_grid(content: &ServicesContent) -> Node {
    Node::new(NodeKind::Section)
        .anchor(anchors::SERVICES)
        .class("bg-white py-16")
        .child(
            Node::block()
                .class(CONTAINER)
                .children(section_intro(&content.eyebrow, &content.heading))
                .child(card_grid(service_cards(&content.items, &content.more_label))),
        )
}
