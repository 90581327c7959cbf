//! Blogsmith CLI
//!
//! Command-line interface for the Blogsmith content engine: build the
//! content index, search the category menu, render a document, and run
//! the menu-to-store consistency check.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use blogsmith_content::{build_index, check_menu, CategoryMenu, ContentStore};
use blogsmith_core::util::slug::slug_to_segments;
use blogsmith_core::{ContentRootResolver, EngineConfig};
use blogsmith_render::{render_region, resolve_and_render, StyleMap};
use blogsmith_search::{search_grouped, SearchOptions};

/// Blogsmith content engine administration tool
#[derive(Parser, Debug)]
#[command(name = "blogsmith")]
#[command(about = "Content indexing, search, and rendering for markdown/MDX blogs", long_about = None)]
struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content store root (overrides config and environment)
    #[arg(long)]
    content_root: Option<PathBuf>,

    /// Category menu JSON path (overrides config; defaults to
    /// menu.json under the content root)
    #[arg(long)]
    menu: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build and print the content index
    Index {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Search the category menu
    Search {
        /// Query string (empty lists everything)
        #[arg(default_value = "")]
        query: String,
        /// Restrict results to one category (exact match)
        #[arg(long)]
        category: Option<String>,
    },
    /// Resolve a slug and render the document to HTML
    Render {
        /// Slug, e.g. python/guide
        slug: String,
        /// Skip the standard article styling
        #[arg(long)]
        plain: bool,
    },
    /// Report menu entries that do not resolve in the content store
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    let store = open_store(&args, &config)?;

    match &args.command {
        Command::Index { json } => cmd_index(&store, *json),
        Command::Search { query, category } => {
            let menu = load_menu(&args, &config, &store)?;
            cmd_search(&menu, query, category.as_deref(), &config)
        }
        Command::Render { slug, plain } => cmd_render(&store, slug, *plain),
        Command::Check => {
            let menu = load_menu(&args, &config, &store)?;
            cmd_check(&store, &menu)
        }
    }
}

/// Locate the content store: explicit flag, then config, then the
/// BLOGSMITH_CONTENT_DIR environment variable or a menu.json marker.
fn open_store(args: &Args, config: &EngineConfig) -> Result<ContentStore> {
    let root = if let Some(root) = &args.content_root {
        root.clone()
    } else if let Some(root) = &config.content_root {
        PathBuf::from(root)
    } else {
        ContentRootResolver::new("blogsmith")
            .with_root_marker("menu.json")
            .content_root()
            .context("no content root: pass --content-root, set it in config, or set BLOGSMITH_CONTENT_DIR")?
    };

    if !root.is_dir() {
        bail!("content root {} is not a directory", root.display());
    }

    let extensions: Vec<&str> = config.extensions.iter().map(String::as_str).collect();
    Ok(ContentStore::new(root).with_extensions(&extensions))
}

/// Locate and load the category menu.
fn load_menu(args: &Args, config: &EngineConfig, store: &ContentStore) -> Result<CategoryMenu> {
    let path = if let Some(path) = &args.menu {
        path.clone()
    } else if let Some(path) = &config.menu_path {
        PathBuf::from(path)
    } else {
        store.root().join("menu.json")
    };

    CategoryMenu::load(&path).with_context(|| format!("loading menu {}", path.display()))
}

fn cmd_index(store: &ContentStore, json: bool) -> Result<()> {
    let catalog = build_index(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
    } else {
        for meta in &catalog {
            println!("{}\t{}", meta.slug, meta.title);
        }
        eprintln!("{} documents indexed", catalog.len());
    }
    Ok(())
}

fn cmd_search(
    menu: &CategoryMenu,
    query: &str,
    category: Option<&str>,
    config: &EngineConfig,
) -> Result<()> {
    let entries = menu.flatten();
    let options = SearchOptions {
        score_threshold: config.score_threshold,
    };
    let grouped = search_grouped(&entries, query, category, &options);

    if grouped.is_empty() {
        eprintln!("no matches");
        return Ok(());
    }
    for (category, entries) in &grouped {
        println!("{category}:");
        for entry in entries {
            println!("  {}\t{}", entry.title, entry.path);
        }
    }
    Ok(())
}

fn cmd_render(store: &ContentStore, slug: &str, plain: bool) -> Result<()> {
    let segments = slug_to_segments(slug);
    if segments.is_empty() {
        bail!("empty slug");
    }

    let styles = if plain {
        StyleMap::new()
    } else {
        StyleMap::article_defaults()
    };

    match resolve_and_render(store, &segments, &styles) {
        Ok(rendered) => {
            println!("{}", rendered.html);
            Ok(())
        }
        Err(e) if e.is_not_found() => bail!("not found: {slug}"),
        Err(e) => {
            // Contained the way a page region would be: fallback text, not a crash
            println!("{}", render_region(slug, || Err(e)));
            Ok(())
        }
    }
}

fn cmd_check(store: &ContentStore, menu: &CategoryMenu) -> Result<()> {
    let dangling = check_menu(store, menu);

    if dangling.is_empty() {
        println!("menu and content store agree ({} entries)", menu.len());
    } else {
        for entry in &dangling {
            println!("dangling: [{}] {} -> {}", entry.category, entry.title, entry.path);
        }
        // Advisory diagnostic only; the exit code stays zero
        eprintln!("{} dangling menu entries", dangling.len());
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
