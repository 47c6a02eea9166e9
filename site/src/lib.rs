//! # bigverified-site
//!
//! Leptos SSR host for the BigVerified page.
//!
//! The `bigverified` crate composes content into a [`PageTree`] and stops
//! there. This crate serializes that tree into a static HTML document using
//! [Leptos](https://leptos.dev/) server-side rendering. No hydration, no
//! scripts.
//!
//! ## Quick Start
//!
//! ```rust
//! use bigverified::{Catalog, FixedYear, NoopSubmission, RenderContext, compose};
//! use bigverified_site::{SiteAssets, render_page};
//!
//! let page = compose(
//!     &Catalog::bigverified(),
//!     &RenderContext::new(&FixedYear(2031), &NoopSubmission),
//! );
//! let html = render_page(&page, &SiteAssets::default());
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2031 BigVerified — All rights reserved."));
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - Leptos components, one element per layout node
//! - [`styles`] - inline base CSS and the content security policy

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;

use bigverified::layout::Node;
use bigverified::page::PageTree;
use components::{SiteDocument, render_node};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render a complete HTML document from a composed page.
///
/// Returns the document including `<!DOCTYPE html>`. Same tree in, same
/// string out.
pub fn render_page(page: &PageTree, assets: &SiteAssets) -> String {
    let doc = view! {
        <SiteDocument page=page.clone() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render one subtree as an HTML fragment, for embedding a section elsewhere.
pub fn render_fragment(node: &Node) -> String {
    render_node(node).to_html()
}

/// External assets referenced by the document head.
///
/// # Example
///
/// ```rust
/// use bigverified_site::SiteAssets;
///
/// let assets = SiteAssets {
///     stylesheet: Some("/assets/site.css".into()),
/// };
/// assert!(SiteAssets::default().stylesheet.is_none());
/// ```
#[derive(Clone, Default, Debug)]
pub struct SiteAssets {
    /// Stylesheet resolving the class tags on layout nodes.
    pub stylesheet: Option<String>,
}
