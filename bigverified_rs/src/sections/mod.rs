//! Page sections, top to bottom.
//!
//! Each composer is a total function from validated content to one layout
//! block. Composers share nothing and never read ambient state; the footer
//! receives its year as a plain value.

mod about;
mod contact;
mod footer;
mod hero;
mod nav;
mod services;
mod work;

pub use about::about_panel;
pub use contact::{COL_SPAN_FULL, contact_panel};
pub use footer::{copyright_line, footer};
pub use hero::{STAT_CARD, hero};
pub use nav::{MENU_TOGGLE, nav_bar};
pub use services::{SERVICE_CARD, service_cards, services_grid};
pub use work::{CASE_CARD, case_study_cards, case_studies_grid};

use crate::layout::Node;

pub(crate) const CONTAINER: &str = "max-w-7xl mx-auto px-6";
pub(crate) const TEXT_MUTED: &str = "text-gray-600";

/// Class tag on every card grid.
pub const CARD_GRID: &str = "card-grid";

/// Eyebrow + heading pair that opens most sections.
pub(crate) fn section_intro(eyebrow: &str, heading: &str) -> Vec<Node> {
    let mut intro = Vec::with_capacity(2);
    if !eyebrow.is_empty() {
        intro.push(Node::heading(3, eyebrow).class("text-sm text-indigo-600 font-semibold"));
    }
    intro.push(Node::heading(2, heading).class("mt-2 text-3xl font-bold"));
    intro
}

/// Grid holding cards. Empty input yields an empty grid.
pub(crate) fn card_grid(cards: impl Iterator<Item = Node>) -> Node {
    Node::block()
        .class(CARD_GRID)
        .class("mt-8 grid grid-cols-1 md:grid-cols-3 gap-6")
        .children(cards)
}
