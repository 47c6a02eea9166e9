//! Document-level CSS and security policy.
//!
//! Class tags on layout nodes are resolved by the external stylesheet linked
//! through [`crate::SiteAssets`]. Only rules that no class tag can express
//! live here.

/// Inline base rules, emitted in every document.
pub const BASE_CSS: &str = r#"
*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
}

.hero-graphic {
    width: 320px;
    height: 240px;
    border-radius: 20px;
}
"#;

/// Static page: no scripts, no outbound connections. Styles, fonts and images
/// may come from the stylesheet host.
pub const CSP: &str = concat!(
    "default-src 'self'; ",
    "img-src 'self' data: https:; ",
    "style-src 'self' 'unsafe-inline' https:; ",
    "font-src 'self' data: https:; ",
    "script-src 'none'; ",
    "connect-src 'none';",
);
