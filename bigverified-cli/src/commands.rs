//! Subcommand handlers.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use bigverified::catalog::BIGVERIFIED_TOML;
use bigverified::{
    Catalog, FixedYear, NoopSubmission, PageTree, RenderContext, SystemYear, YearProvider,
    check_catalog_links, compose,
};
use bigverified_site::{SiteAssets, render_page};
use tracing::{info, warn};

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("invalid content file {}", path.display())),
        None => Ok(Catalog::bigverified()),
    }
}

fn compose_page(catalog: &Catalog, year: Option<i32>) -> PageTree {
    let year: Box<dyn YearProvider> = match year {
        Some(year) => Box::new(FixedYear(year)),
        None => Box::new(SystemYear),
    };
    compose(catalog, &RenderContext::new(year.as_ref(), &NoopSubmission))
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("failed to write to stdout")?;
            if !text.ends_with('\n') {
                writeln!(stdout).context("failed to write to stdout")?;
            }
        }
    }
    Ok(())
}

/// Compose and write HTML. Dangling links are reported, not fatal.
pub fn render(
    content: Option<&Path>,
    out: Option<&Path>,
    year: Option<i32>,
    stylesheet: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(content)?;
    let page = compose_page(&catalog, year);
    for link in page.dangling_links() {
        warn!(%link, "link will not scroll");
    }

    let html = render_page(&page, &SiteAssets { stylesheet });
    write_output(out, &html)
}

/// Validate content, then every link target against the emitted anchors.
pub fn check(content: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(content)?;
    let page = compose_page(&catalog, None);

    let mut dangling = check_catalog_links(&catalog, &page);
    if dangling.is_empty() {
        dangling = page.dangling_links();
    }
    if !dangling.is_empty() {
        for link in &dangling {
            println!("{link}");
        }
        bail!("{} dangling link(s)", dangling.len());
    }

    println!(
        "Content OK: {} services, {} case studies, {} nav links, anchors: {}",
        catalog.services().len(),
        catalog.case_studies().len(),
        catalog.nav_links().len(),
        page.anchors().collect::<Vec<_>>().join(", "),
    );
    Ok(())
}

/// Dump the layout tree as pretty JSON.
pub fn tree(content: Option<&Path>, year: Option<i32>) -> Result<()> {
    let catalog = load_catalog(content)?;
    let page = compose_page(&catalog, year);
    let json = serde_json::to_string_pretty(&page).context("failed to serialize layout tree")?;
    write_output(None, &json)
}

/// Print the shipped content file.
pub fn content() -> Result<()> {
    write_output(None, BIGVERIFIED_TOML)
}
