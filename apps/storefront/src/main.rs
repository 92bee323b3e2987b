use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::{
    domain::{CategoryFilter, SortMode},
    view::CatalogView,
};
use storefront_core::{
    controller::events::SESSION_HELP, load_catalog, load_settings, load_settings_from,
    parse_session_line, Controller, RenderSettings, Renderer, SessionCommand, Settings,
    TextRenderer,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Browse a product catalog from the terminal")]
struct Cli {
    /// Catalog JSON file; overrides the configured path.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Settings file to use instead of ./storefront.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the products matching one set of control values.
    Browse {
        #[arg(long, default_value = "")]
        query: String,
        /// Category name, or `all` for no category filter.
        #[arg(long)]
        category: Option<String>,
        /// name | price-asc | price-desc | ranking
        #[arg(long)]
        sort: Option<String>,
        /// Emit the derived view as JSON instead of cards.
        #[arg(long)]
        json: bool,
    },
    /// List the catalog categories, no-filter option first.
    Categories,
    /// Read control commands from stdin and re-render after each one.
    Session,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => load_settings_from(path)
            .with_context(|| format!("failed to load settings from '{}'", path.display()))?,
        None => load_settings(),
    };
    if let Some(catalog_path) = cli.catalog {
        settings.catalog_path = catalog_path;
    }

    let catalog = load_catalog(&settings.catalog_path).with_context(|| {
        format!(
            "failed to load catalog from '{}'",
            settings.catalog_path.display()
        )
    })?;
    let mut controller = Controller::new(catalog, &settings);
    let render_settings = settings.render_settings();

    match cli.command {
        Command::Browse {
            query,
            category,
            sort,
            json,
        } => {
            let view = browse(
                &mut controller,
                &settings,
                query,
                category.as_deref(),
                sort.as_deref(),
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                TextRenderer::new(io::stdout().lock()).render(&view, &render_settings)?;
            }
        }
        Command::Categories => {
            print_categories(&controller, &render_settings, &mut io::stdout().lock())?;
        }
        Command::Session => {
            let stdin = io::stdin();
            run_session(
                &mut controller,
                &render_settings,
                stdin.lock(),
                io::stdout(),
            )?;
        }
    }

    Ok(())
}

/// One-shot derivation for the `browse` subcommand. A missing sort falls
/// back to the configured default.
fn browse(
    controller: &mut Controller,
    settings: &Settings,
    query: String,
    category: Option<&str>,
    sort: Option<&str>,
) -> CatalogView {
    controller.set_query(query);
    if let Some(category) = category {
        controller.set_category(category_selection(category, settings));
    }
    let sort_mode = sort
        .map(SortMode::parse_lenient)
        .unwrap_or(settings.default_sort);
    controller.set_sort_mode(sort_mode)
}

fn category_selection(raw: &str, settings: &Settings) -> CategoryFilter {
    if raw.eq_ignore_ascii_case("all") || raw == settings.all_categories_label {
        CategoryFilter::All
    } else {
        CategoryFilter::only(raw)
    }
}

fn print_categories(
    controller: &Controller,
    settings: &RenderSettings,
    out: &mut impl Write,
) -> io::Result<()> {
    for category in controller.categories() {
        let marker = if *category == controller.state().category {
            "*"
        } else {
            " "
        };
        writeln!(out, "{marker} {}", category.label(&settings.all_categories_label))?;
    }
    Ok(())
}

fn run_session<R: BufRead, W: Write>(
    controller: &mut Controller,
    settings: &RenderSettings,
    input: R,
    out: W,
) -> Result<()> {
    let mut renderer = TextRenderer::new(out);
    let mut view = controller.view();
    renderer.render(&view, settings)?;
    writeln!(renderer.get_mut(), "{SESSION_HELP}")?;

    for line in input.lines() {
        let line = line.context("failed to read session input")?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_session_line(&line, &settings.all_categories_label) {
            SessionCommand::Control(event) => {
                tracing::debug!(?event, "session control event");
                view = controller.apply(event);
                renderer.render(&view, settings)?;
            }
            SessionCommand::AddToCart(id) => {
                match view.products.iter().find(|p| p.id.to_string() == id) {
                    Some(product) => {
                        renderer.on_add(product);
                        writeln!(renderer.get_mut(), "added {} to cart", product.name())?;
                    }
                    None => writeln!(renderer.get_mut(), "no displayed product has id '{id}'")?,
                }
            }
            SessionCommand::ShowCategories => {
                print_categories(controller, settings, renderer.get_mut())?
            }
            SessionCommand::Help => writeln!(renderer.get_mut(), "{SESSION_HELP}")?,
            SessionCommand::Quit => break,
            SessionCommand::Unknown(input) => {
                writeln!(renderer.get_mut(), "unrecognized command '{input}'; {SESSION_HELP}")?;
            }
        }
    }

    renderer.get_mut().flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/cli_tests.rs"]
mod tests;
