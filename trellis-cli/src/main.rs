//! Trellis CLI
//!
//! Renders a products table as markup on stdout.

mod products;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{LevelFilter, debug, info};
use owo_colors::OwoColorize;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use products::{Product, products_table_generator, sample_products};

/// Render a product catalogue as an HTML table
#[derive(Parser, Debug)]
#[command(name = "trellis")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render the built-in sample products
    trellis

    # Render products from a JSON file, indented
    trellis --pretty products.json

    # Link codes to another page and skip the header row
    trellis --item-url /catalog/item --no-header
"#)]
struct Cli {
    /// JSON file holding an array of products
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Indent the markup, one element per line
    #[arg(long)]
    pretty: bool,

    /// Leave out the header row
    #[arg(long)]
    no_header: bool,

    /// Page the product code links point to
    #[arg(long, value_name = "URL", default_value = "/item")]
    item_url: String,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{} logging disabled: {e}", "warning:".yellow().bold());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let products = match &cli.input {
        Some(path) => load_products(path)?,
        None => {
            debug!("no input file, using sample products");
            sample_products()
        }
    };
    info!("rendering {} products", products.len());

    let generator = products_table_generator(&cli.item_url, !cli.no_header)?;
    let table = generator
        .generate_table(&products)
        .context("cannot build the products table")?;

    let markup = if cli.pretty {
        table.render_pretty()
    } else {
        table.render()
    };
    println!("{markup}");
    Ok(())
}

/// Read a JSON array of products.
fn load_products(path: &Path) -> Result<Vec<Product>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("{} is not a JSON array of products", path.display()))
}
