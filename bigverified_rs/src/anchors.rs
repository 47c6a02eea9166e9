//! In-page anchor ids and the static link check.
//!
//! Navigation targets are looked up by id; nothing owns them. A target with
//! no matching anchor only fails to scroll, so the check reports instead of
//! failing composition.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::Catalog;
use crate::page::PageTree;

pub const SERVICES: &str = "services";
pub const WORK: &str = "work";
pub const ABOUT: &str = "about";
pub const CONTACT: &str = "contact";

/// Anchors the page emits, in document order.
pub const PAGE_ANCHORS: [&str; 4] = [SERVICES, WORK, ABOUT, CONTACT];

/// A link whose target is not an emitted anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingLink {
    /// Where the link came from (`nav.links[2]`, `#work` etc).
    pub source: String,
    pub label: String,
    pub target: String,
}

impl fmt::Display for DanglingLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: `{}` points at missing anchor `#{}`",
            self.source, self.label, self.target
        )
    }
}

/// Catalog link targets (nav links and calls to action) missing from `page`.
pub fn check_catalog_links(catalog: &Catalog, page: &PageTree) -> Vec<DanglingLink> {
    let anchors: HashSet<&str> = page.anchors().collect();
    let content = catalog.content();

    let nav = catalog
        .nav_links()
        .iter()
        .enumerate()
        .map(|(idx, link)| (format!("nav.links[{idx}]"), &link.label, &link.target));
    let ctas = [
        ("nav.cta", &content.nav.cta),
        ("hero.primary_cta", &content.hero.primary_cta),
        ("hero.secondary_cta", &content.hero.secondary_cta),
    ]
    .into_iter()
    .map(|(source, cta)| (source.to_string(), &cta.label, &cta.target));

    nav.chain(ctas)
        .filter(|(_, _, target)| !anchors.contains(target.as_str()))
        .map(|(source, label, target)| DanglingLink {
            source,
            label: label.clone(),
            target: target.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSpec;
    use crate::clock::FixedYear;
    use crate::page::{RenderContext, compose};
    use crate::submission::NoopSubmission;
    use pretty_assertions::assert_eq;

    fn page_for(catalog: &Catalog) -> PageTree {
        compose(catalog, &RenderContext::new(&FixedYear(2031), &NoopSubmission))
    }

    #[test]
    fn every_nav_target_is_an_emitted_anchor() {
        let catalog = Catalog::bigverified();
        let page = page_for(&catalog);

        let emitted: Vec<_> = page.anchors().collect();
        assert_eq!(emitted, PAGE_ANCHORS.to_vec());
        for link in catalog.nav_links() {
            assert!(PAGE_ANCHORS.contains(&link.target.as_str()), "{}", link.target);
        }
        assert!(check_catalog_links(&catalog, &page).is_empty());
    }

    #[test]
    fn reports_dangling_nav_and_cta_targets() {
        let mut spec = CatalogSpec::bigverified();
        spec.nav.links[2].target = "team".into();
        spec.hero.secondary_cta.target = "portfolio".into();
        let catalog = spec.build().expect("well-formed targets");
        let page = page_for(&catalog);

        let dangling = check_catalog_links(&catalog, &page);
        assert_eq!(
            dangling,
            vec![
                DanglingLink {
                    source: "nav.links[2]".into(),
                    label: "About".into(),
                    target: "team".into(),
                },
                DanglingLink {
                    source: "hero.secondary_cta".into(),
                    label: "See Our Work".into(),
                    target: "portfolio".into(),
                },
            ]
        );
        assert_eq!(
            dangling[0].to_string(),
            "nav.links[2]: `About` points at missing anchor `#team`"
        );
    }
}
