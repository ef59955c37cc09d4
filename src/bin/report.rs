use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use contact_graph::contacts::read_records;
use contact_graph::report::{advertising_targets, write_targets_file};
use contact_graph::{logging, ContactBookAnalysis, RenderConfig};

/// List unregistered numbers from the contact books as CSV, most connected first.
#[derive(Parser)]
#[command(name = "report", version)]
struct Cli {
    /// Contact-book export (JSON array of records)
    #[arg(short, long, default_value = "contacts.json")]
    input: PathBuf,

    /// Where to write the CSV report
    #[arg(short, long, default_value = "targets.csv")]
    output: PathBuf,

    /// JSON file with renderer settings; only the threshold is used here
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum connectivity degree of a popular unregistered number
    #[arg(long)]
    threshold: Option<usize>,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RenderConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    if let Some(threshold) = cli.threshold {
        config = config.with_threshold(threshold);
    }

    let records = read_records(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let analysis = ContactBookAnalysis::from_records(&records)?;
    let rows = advertising_targets(&analysis, &config);

    write_targets_file(&rows, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!("{} unregistered numbers written to {}", rows.len(), cli.output.display());
    Ok(())
}
