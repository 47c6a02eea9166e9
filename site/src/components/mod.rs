//! Leptos components turning a layout tree into HTML.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument
//! ├── <head>: title, description, viewport, CSP, stylesheet
//! └── <body>
//!     └── LayoutView (recursive over Node)
//!         ├── Graphic
//!         └── ...one element per NodeKind
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but a single
//! section can be rendered on its own:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use bigverified_site::components::LayoutView;
//!
//! view! { <LayoutView node=services_section /> }
//! ```

mod document;
mod graphic;
mod node;

pub use document::SiteDocument;
pub use graphic::Graphic;
pub use node::{LayoutView, render_node};
