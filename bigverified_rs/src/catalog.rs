//! Content catalog: every record the page sections consume.
//!
//! [`CatalogSpec`] is the plain config struct, loaded from TOML or built in
//! code. [`CatalogSpec::build`] is the single validation point and yields an
//! immutable [`Catalog`]; presentation code only ever sees validated content.
//!
//! # Example
//!
//! ```rust
//! use bigverified::catalog::{CatalogSpec, ServiceItem};
//!
//! let mut spec = CatalogSpec::bigverified();
//! spec.services.items.push(ServiceItem {
//!     title: "Market Research".into(),
//!     description: "Surveys, interviews, competitor teardown.".into(),
//! });
//!
//! let catalog = spec.build().expect("valid catalog");
//! assert_eq!(catalog.services().len(), 7);
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::layout::slug;

/// Content shipped with the crate.
pub const BIGVERIFIED_TOML: &str = include_str!("../content/bigverified.toml");

/// Number of hero stats the layout is tuned for.
pub const BALANCED_STAT_COUNT: usize = 3;

/// Errors raised while loading or validating content.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read content file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize content: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("{record} is missing `{field}`")]
    MissingField { record: String, field: &'static str },
    #[error("duplicate service title `{0}`")]
    DuplicateService(String),
    #[error("{record} `{title}` has the same card key `{key}` as an earlier item")]
    DuplicateCardKey {
        record: String,
        title: String,
        key: String,
    },
    #[error("{record} title `{title}` has no letters or digits to key its card")]
    UnkeyableTitle { record: String, title: String },
    #[error("duplicate contact field name `{0}`")]
    DuplicateField(String),
    #[error("{record} has malformed anchor target `{target}` (expected a bare id like `services`)")]
    MalformedTarget { record: String, target: String },
    #[error("hero needs at least one stat")]
    NoHeroStats,
}

/// Document metadata for the host's `<head>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Company name, also used in the copyright line.
    pub name: String,
    /// Short monogram shown in the logo box.
    pub mark: String,
    #[serde(default)]
    pub tagline: String,
}

/// In-page navigation entry. `target` is a bare anchor id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// Call-to-action link pointing at an in-page anchor.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub target: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavContent {
    pub cta: CallToAction,
    #[serde(default)]
    pub links: Vec<NavLink>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroStat {
    pub value: String,
    pub caption: String,
}

/// Illustration shown in the hero's graphic column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Graphic {
    /// Hosted image.
    Asset { src: String, alt: String },
    /// Two-stop diagonal gradient panel.
    Gradient { from: String, to: String, alt: String },
}

impl Default for Graphic {
    fn default() -> Self {
        Graphic::Gradient {
            from: "#E9D5FF".into(),
            to: "#C7E9FF".into(),
            alt: String::new(),
        }
    }
}

/// Floating card over the hero graphic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightCard {
    pub caption: String,
    pub title: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    #[serde(default)]
    pub eyebrow: String,
    pub headline: String,
    pub body: String,
    pub primary_cta: CallToAction,
    pub secondary_cta: CallToAction,
    #[serde(default)]
    pub graphic: Graphic,
    pub highlight: HighlightCard,
    #[serde(default)]
    pub stats: Vec<HeroStat>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
}

impl ServiceItem {
    /// Card key, unique within a validated catalog.
    pub fn key(&self) -> String {
        format!("service-{}", slug(&self.title))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesContent {
    #[serde(default)]
    pub eyebrow: String,
    pub heading: String,
    /// Trailing affordance on each card; omitted when empty.
    #[serde(default)]
    pub more_label: String,
    #[serde(default)]
    pub items: Vec<ServiceItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub category: String,
    pub title: String,
    pub summary: String,
}

impl CaseStudy {
    /// Card key, unique within a validated catalog.
    pub fn key(&self) -> String {
        format!("case-{}", slug(&self.title))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkContent {
    #[serde(default)]
    pub eyebrow: String,
    pub heading: String,
    #[serde(default)]
    pub items: Vec<CaseStudy>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBadge {
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    #[serde(default)]
    pub eyebrow: String,
    pub heading: String,
    pub narrative: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    #[serde(default)]
    pub clients_heading: String,
    #[serde(default)]
    pub clients_blurb: String,
    #[serde(default)]
    pub clients: Vec<ClientBadge>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    SingleLine,
    MultiLine,
}

/// Grid placement of a contact field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldSpan {
    /// One column of the two-column grid.
    #[default]
    Half,
    /// Both columns.
    Full,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactField {
    /// Form control name, unique within the form.
    pub name: String,
    pub placeholder: String,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default)]
    pub span: FieldSpan,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactContent {
    #[serde(default)]
    pub eyebrow: String,
    pub heading: String,
    /// Shown next to the send button; the hint is omitted when empty.
    #[serde(default)]
    pub email: String,
    pub send_label: String,
    #[serde(default)]
    pub fields: Vec<ContactField>,
}

/// Footer link. `href` is passed through untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    #[serde(default)]
    pub links: Vec<LegalLink>,
}

/// Raw, unvalidated page content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub meta: DocumentMeta,
    pub brand: Brand,
    pub nav: NavContent,
    pub hero: HeroContent,
    pub services: ServicesContent,
    pub work: WorkContent,
    pub about: AboutContent,
    pub contact: ContactContent,
    #[serde(default)]
    pub footer: FooterContent,
}

impl CatalogSpec {
    /// The BigVerified content shipped with the crate.
    pub fn bigverified() -> Self {
        toml::from_str(BIGVERIFIED_TOML)
            .unwrap_or_else(|e| panic!("embedded content failed to parse: {e}"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(content)?)
    }

    /// Validate and freeze.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        self.validate()?;
        Ok(Catalog { spec: self })
    }

    fn validate(&self) -> Result<(), CatalogError> {
        require("meta", "title", &self.meta.title)?;
        require("meta", "description", &self.meta.description)?;
        require("brand", "name", &self.brand.name)?;

        require_cta("nav.cta", &self.nav.cta)?;
        for (idx, link) in self.nav.links.iter().enumerate() {
            let record = format!("nav.links[{idx}]");
            require(&record, "label", &link.label)?;
            check_target(&record, &link.target)?;
        }

        require("hero", "headline", &self.hero.headline)?;
        require_cta("hero.primary_cta", &self.hero.primary_cta)?;
        require_cta("hero.secondary_cta", &self.hero.secondary_cta)?;
        if self.hero.stats.is_empty() {
            return Err(CatalogError::NoHeroStats);
        }
        if self.hero.stats.len() != BALANCED_STAT_COUNT {
            warn!(
                count = self.hero.stats.len(),
                "hero layout is tuned for {BALANCED_STAT_COUNT} stats"
            );
        }
        for (idx, stat) in self.hero.stats.iter().enumerate() {
            require(&format!("hero.stats[{idx}]"), "value", &stat.value)?;
        }

        let mut titles = HashSet::new();
        let mut keys = HashSet::new();
        for (idx, item) in self.services.items.iter().enumerate() {
            let record = format!("services.items[{idx}]");
            require(&record, "title", &item.title)?;
            if !titles.insert(item.title.as_str()) {
                return Err(CatalogError::DuplicateService(item.title.clone()));
            }
            check_card_key(&record, &item.title, item.key(), &mut keys)?;
        }

        let mut keys = HashSet::new();
        for (idx, case) in self.work.items.iter().enumerate() {
            let record = format!("work.items[{idx}]");
            require(&record, "title", &case.title)?;
            check_card_key(&record, &case.title, case.key(), &mut keys)?;
        }

        let mut names = HashSet::new();
        for (idx, field) in self.contact.fields.iter().enumerate() {
            require(&format!("contact.fields[{idx}]"), "name", &field.name)?;
            if !names.insert(field.name.as_str()) {
                return Err(CatalogError::DuplicateField(field.name.clone()));
            }
        }
        require("contact", "send_label", &self.contact.send_label)?;

        for (idx, link) in self.footer.links.iter().enumerate() {
            require(&format!("footer.links[{idx}]"), "label", &link.label)?;
        }

        Ok(())
    }
}

fn require(record: &str, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::MissingField {
            record: record.to_string(),
            field,
        });
    }
    Ok(())
}

fn require_cta(record: &str, cta: &CallToAction) -> Result<(), CatalogError> {
    require(record, "label", &cta.label)?;
    check_target(record, &cta.target)
}

fn check_card_key(
    record: &str,
    title: &str,
    key: String,
    seen: &mut HashSet<String>,
) -> Result<(), CatalogError> {
    if slug(title).is_empty() {
        return Err(CatalogError::UnkeyableTitle {
            record: record.to_string(),
            title: title.to_string(),
        });
    }
    if seen.contains(&key) {
        return Err(CatalogError::DuplicateCardKey {
            record: record.to_string(),
            title: title.to_string(),
            key,
        });
    }
    seen.insert(key);
    Ok(())
}

fn check_target(record: &str, target: &str) -> Result<(), CatalogError> {
    let malformed =
        target.is_empty() || target.starts_with('#') || target.chars().any(char::is_whitespace);
    if malformed {
        return Err(CatalogError::MalformedTarget {
            record: record.to_string(),
            target: target.to_string(),
        });
    }
    Ok(())
}

/// Validated, read-only content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    spec: CatalogSpec,
}

impl Catalog {
    /// The shipped BigVerified content.
    ///
    /// # Panics
    ///
    /// If the embedded content fails validation.
    pub fn bigverified() -> Self {
        CatalogSpec::bigverified()
            .build()
            .unwrap_or_else(|e| panic!("embedded content is invalid: {e}"))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        CatalogSpec::from_toml_str(content)?.build()
    }

    /// Load and validate a TOML content file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            services = catalog.services().len(),
            case_studies = catalog.case_studies().len(),
            "loaded content"
        );
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(&self.spec)?)
    }

    /// Everything, including section copy.
    pub fn content(&self) -> &CatalogSpec {
        &self.spec
    }

    /// Back to an editable spec.
    pub fn into_spec(self) -> CatalogSpec {
        self.spec
    }

    pub fn services(&self) -> &[ServiceItem] {
        &self.spec.services.items
    }

    pub fn case_studies(&self) -> &[CaseStudy] {
        &self.spec.work.items
    }

    pub fn hero_stats(&self) -> &[HeroStat] {
        &self.spec.hero.stats
    }

    pub fn client_badges(&self) -> &[ClientBadge] {
        &self.spec.about.clients
    }

    pub fn nav_links(&self) -> &[NavLink] {
        &self.spec.nav.links
    }

    pub fn contact_fields(&self) -> &[ContactField] {
        &self.spec.contact.fields
    }

    pub fn legal_links(&self) -> &[LegalLink] {
        &self.spec.footer.links
    }
}
