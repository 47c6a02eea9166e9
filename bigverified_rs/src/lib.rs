//! # bigverified
//!
//! Content catalog and layout composition for the BigVerified company page.
//!
//! Content lives in a TOML catalog, separate from layout code. Composition
//! turns a validated [`Catalog`] into a [`PageTree`]: document metadata plus
//! a tree of [`Node`]s carrying opaque class tags. Turning that tree into
//! markup is the host's job (see the `bigverified-site` crate).
//!
//! ## Quick Start
//!
//! ```rust
//! use bigverified::{Catalog, FixedYear, NoopSubmission, RenderContext, compose};
//!
//! let catalog = Catalog::bigverified();
//! let page = compose(&catalog, &RenderContext::new(&FixedYear(2031), &NoopSubmission));
//!
//! assert_eq!(page.anchors().collect::<Vec<_>>(), ["services", "work", "about", "contact"]);
//! assert!(page.dangling_links().is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - content records, TOML loading, validation
//! - [`layout`] - the node tree handed to hosts
//! - [`sections`] - one composer per page region
//! - [`page`] - root composition and render context
//! - [`anchors`] - anchor ids and the static link check
//! - [`clock`] - injectable year source
//! - [`submission`] - contact form send capability

pub mod anchors;
pub mod catalog;
pub mod clock;
pub mod layout;
pub mod page;
pub mod sections;
pub mod submission;

pub use anchors::{DanglingLink, check_catalog_links};
pub use catalog::{Catalog, CatalogError, CatalogSpec};
pub use clock::{FixedYear, SystemYear, YearProvider};
pub use layout::{Classes, Node, NodeKind};
pub use page::{PageTree, RenderContext, compose};
pub use submission::{NetworkedSubmission, NoopSubmission, SubmissionHandler, Transport};
