//! Root composition: catalog + render context in, [`PageTree`] out.

use serde::Serialize;
use tracing::debug;

use crate::anchors::DanglingLink;
use crate::catalog::{Catalog, DocumentMeta};
use crate::clock::YearProvider;
use crate::layout::{Node, NodeKind};
use crate::sections;
use crate::submission::SubmissionHandler;

/// Capabilities injected into a composition pass.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub year: &'a dyn YearProvider,
    pub submission: &'a dyn SubmissionHandler,
}

impl<'a> RenderContext<'a> {
    pub fn new(year: &'a dyn YearProvider, submission: &'a dyn SubmissionHandler) -> Self {
        Self { year, submission }
    }
}

/// Composed page: document metadata plus the body tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageTree {
    pub meta: DocumentMeta,
    pub body: Node,
}

impl PageTree {
    /// Anchor ids in document order.
    pub fn anchors(&self) -> impl Iterator<Item = &str> {
        self.body.walk().filter_map(|n| n.anchor.as_deref())
    }

    /// In-page links (`#id`) whose id is not emitted. A bare `#` is a placeholder
    /// and is never reported.
    pub fn dangling_links(&self) -> Vec<DanglingLink> {
        let anchors: Vec<&str> = self.anchors().collect();
        self.body
            .walk()
            .filter_map(|n| match &n.kind {
                NodeKind::Link { href, label } => {
                    let target = href.strip_prefix('#')?;
                    (!target.is_empty() && !anchors.contains(&target)).then(|| DanglingLink {
                        source: href.clone(),
                        label: label.clone(),
                        target: target.to_string(),
                    })
                }
                _ => None,
            })
            .collect()
    }
}

/// NavBar → Hero → Services → Case studies → About → Contact → Footer.
///
/// The year provider is read exactly once. Same catalog and same year give
/// an equal tree.
pub fn compose(catalog: &Catalog, ctx: &RenderContext<'_>) -> PageTree {
    let content = catalog.content();
    let year = ctx.year.current_year();

    let body = Node::new(NodeKind::Main)
        .class("min-h-screen bg-gray-50 text-gray-800")
        .child(sections::nav_bar(&content.brand, &content.nav))
        .child(sections::hero(&content.hero))
        .child(sections::services_grid(&content.services))
        .child(sections::case_studies_grid(&content.work))
        .child(sections::about_panel(&content.about))
        .child(sections::contact_panel(&content.contact, ctx.submission))
        .child(sections::footer(&content.brand.name, catalog.legal_links(), year));

    debug!(
        year,
        services = catalog.services().len(),
        case_studies = catalog.case_studies().len(),
        nodes = body.walk().count(),
        "composed page"
    );

    PageTree {
        meta: content.meta.clone(),
        body,
    }
}
