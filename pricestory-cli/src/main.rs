//! PriceStory CLI — headless dataset and story inspection.
//!
//! Commands:
//! - `inspect` — load a CSV and report rows, date range, per-key coverage
//! - `scenes` — print the guided story and the exploration fallback
//! - `demo` — write a deterministic synthetic CSV to try the viewer with

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use pricestory_core::config::StoryConfig;
use pricestory_core::data::{load_csv, synthetic};

#[derive(Parser)]
#[command(
    name = "pricestory-cli",
    about = "PriceStory CLI — inspect price datasets and story configs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a dataset and print a summary.
    Inspect {
        /// CSV file with a Date column and one column per indicator.
        #[arg(long)]
        csv: PathBuf,

        /// Story config (TOML). Defaults to the built-in story.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print the guided story.
    Scenes {
        /// Story config (TOML). Defaults to the built-in story.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write a synthetic demo CSV.
    Demo {
        /// Output path.
        #[arg(long, default_value = "demo_prices.csv")]
        out: PathBuf,

        /// Start date (YYYY-MM-DD).
        #[arg(long, default_value = "2020-01-02")]
        start: String,

        /// End date (YYYY-MM-DD).
        #[arg(long, default_value = "2024-12-31")]
        end: String,

        /// Story config (TOML). Defaults to the built-in story.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { csv, config } => run_inspect(&csv, config.as_deref()),
        Commands::Scenes { config } => run_scenes(config.as_deref()),
        Commands::Demo {
            out,
            start,
            end,
            config,
        } => run_demo(&out, &start, &end, config.as_deref()),
    }
}

fn load_story(path: Option<&Path>) -> Result<StoryConfig> {
    match path {
        Some(path) => StoryConfig::from_file(path)
            .with_context(|| format!("failed to load story config {}", path.display())),
        None => Ok(StoryConfig::default_story()),
    }
}

fn run_inspect(csv: &Path, config: Option<&Path>) -> Result<()> {
    let story = load_story(config)?;
    let catalog = story.catalog()?;

    let loaded = load_csv(csv, &catalog)
        .with_context(|| format!("failed to load dataset {}", csv.display()))?;

    println!("Dataset: {}", loaded.source.label());
    println!("Rows:        {}", loaded.dataset.len());
    println!("Dropped:     {}", loaded.rows_dropped);
    match loaded.dataset.date_range() {
        Some((start, end)) => println!("Date range:  {start} to {end}"),
        None => println!("Date range:  (empty)"),
    }
    println!("Fingerprint: {}", loaded.fingerprint);
    println!();

    println!("{:<24} {:>8} {:>8}", "Key", "Valid", "Missing");
    println!("{}", "-".repeat(42));
    for key in catalog.all_keys() {
        let valid = loaded.dataset.valid_count(&key);
        let missing = loaded.dataset.len() - valid;
        println!("{key:<24} {valid:>8} {missing:>8}");
    }

    Ok(())
}

fn run_scenes(config: Option<&Path>) -> Result<()> {
    let story = load_story(config)?;
    let catalog = story.catalog()?;

    println!("Guided story ({} scenes):", story.scenes.len());
    for (i, scene) in story.scenes.iter().enumerate() {
        let group = catalog.resolve(&scene.group);
        println!();
        println!("{}. {} [{}]", i + 1, scene.title, scene.id);
        println!("   {}", scene.text);
        println!("   keys: {}", group.keys.join(", "));
    }

    println!();
    println!(
        "Exploration fallback: {} ({})",
        catalog.fallback_name(),
        catalog.resolve(catalog.fallback_name()).keys.join(", ")
    );

    Ok(())
}

fn run_demo(out: &Path, start: &str, end: &str, config: Option<&Path>) -> Result<()> {
    let story = load_story(config)?;
    let catalog = story.catalog()?;

    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;

    let loaded = synthetic::generate(&catalog, start, end);
    synthetic::write_csv(&loaded, &catalog.all_keys(), out)
        .with_context(|| format!("failed to write {}", out.display()))?;

    println!(
        "Wrote {} rows ({} keys) to {}",
        loaded.dataset.len(),
        catalog.all_keys().len(),
        out.display()
    );
    println!("Fingerprint: {}", loaded.fingerprint);

    Ok(())
}
