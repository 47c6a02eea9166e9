//! # bigverified
//!
//! Render the BigVerified page from a content file.
//!
//! ```bash
//! bigverified content > site.toml          # start from the shipped content
//! bigverified check --content site.toml    # validate records and anchor links
//! bigverified render --content site.toml --out index.html
//! bigverified tree --year 2031             # layout tree as JSON
//! ```
//!
//! Logs go to stderr; `RUST_LOG` overrides `--log-level`.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bigverified")]
#[command(about = "Validate BigVerified page content and render it to static HTML")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the page and write HTML
    Render(RenderArgs),
    /// Validate content and in-page links
    Check(ContentArgs),
    /// Print the composed layout tree as JSON
    Tree(TreeArgs),
    /// Print the built-in content as TOML
    Content,
}

#[derive(Args, Debug)]
struct ContentArgs {
    /// Content file (TOML). Defaults to the built-in BigVerified content.
    #[arg(long)]
    content: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    content: ContentArgs,
    /// Output file (default: stdout)
    #[arg(long, short)]
    out: Option<PathBuf>,
    /// Copyright year (default: current local year)
    #[arg(long)]
    year: Option<i32>,
    /// Stylesheet href resolving the page's class tags
    #[arg(long)]
    stylesheet: Option<String>,
}

#[derive(Args, Debug)]
struct TreeArgs {
    #[command(flatten)]
    content: ContentArgs,
    /// Copyright year (default: current local year)
    #[arg(long)]
    year: Option<i32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let result = match cli.command {
        Command::Render(args) => commands::render(
            args.content.content.as_deref(),
            args.out.as_deref(),
            args.year,
            args.stylesheet,
        ),
        Command::Check(args) => commands::check(args.content.as_deref()),
        Command::Tree(args) => commands::tree(args.content.content.as_deref(), args.year),
        Command::Content => commands::content(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[bigverified] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
