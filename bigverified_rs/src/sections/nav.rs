use crate::catalog::{Brand, NavContent};
use crate::layout::{ButtonRole, Node, NodeKind};

/// Class tag on the collapsed-menu toggle.
pub const MENU_TOGGLE: &str = "menu-toggle";

/// Brand block, anchor links, call to action and the small-screen toggle.
pub fn nav_bar(brand: &Brand, nav: &NavContent) -> Node {
    let mut bar = Node::block()
        .class("max-w-7xl mx-auto px-6 py-4 flex items-center justify-between")
        .child(brand_block(brand));

    if !nav.links.is_empty() {
        let links = nav.links.iter().map(|link| {
            Node::anchor_link(&link.target, link.label.as_str())
                .class("hover:text-indigo-600")
                .key(format!("nav-{}", link.target))
        });
        bar = bar.child(
            Node::new(NodeKind::Nav)
                .class("hidden md:flex gap-6 text-sm text-gray-600")
                .children(links),
        );
    }

    bar = bar.child(
        Node::block().class("hidden md:block").child(
            Node::anchor_link(&nav.cta.target, nav.cta.label.as_str())
                .class("inline-block bg-indigo-600 text-white")
                .class("px-4 py-2 rounded-lg text-sm shadow"),
        ),
    );

    if !nav.links.is_empty() {
        bar = bar.child(
            Node::button("☰", ButtonRole::MenuToggle)
                .class(MENU_TOGGLE)
                .class("md:hidden inline-flex items-center justify-center")
                .class("p-2 rounded-md ring-1 ring-gray-200"),
        );
    }

    Node::new(NodeKind::Header)
        .class("bg-white shadow-sm")
        .child(bar)
}

fn brand_block(brand: &Brand) -> Node {
    let mut names =
        Node::block().child(Node::heading(1, brand.name.as_str()).class("text-lg font-semibold"));
    if !brand.tagline.is_empty() {
        names = names.child(Node::text(brand.tagline.as_str()).class("text-xs text-gray-500"));
    }

    Node::block()
        .class("flex items-center gap-3")
        .child(
            Node::inline(brand.mark.as_str())
                .class("w-10 h-10 flex items-center justify-center rounded-md ring-1 ring-gray-200")
                .class("bg-gradient-to-br from-blue-600 to-indigo-600 text-white font-bold"),
        )
        .child(names)
}
