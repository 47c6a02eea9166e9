//! Root document component - the complete HTML page

use bigverified::page::PageTree;
use leptos::prelude::*;

use super::LayoutView;
use crate::SiteAssets;
use crate::styles::{BASE_CSS, CSP};

/// The complete HTML document for a composed page
#[component]
pub fn SiteDocument(page: PageTree, assets: SiteAssets) -> impl IntoView {
    let PageTree { meta, body } = page;

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{meta.title}</title>
                <meta name="description" content=meta.description />
                {assets.stylesheet.map(|href| view! { <link rel="stylesheet" href=href /> })}
                <style>{BASE_CSS}</style>
            </head>
            <body>
                <LayoutView node=body />
            </body>
        </html>
    }
}
