use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use contact_graph::contacts::read_records;
use contact_graph::gexf::write_gexf_file;
use contact_graph::node_identification::{build_graph, GraphSummary};
use contact_graph::{logging, ContactBookAnalysis, RenderConfig};

/// Build the contact graph of registered users and export it as GEXF.
#[derive(Parser)]
#[command(name = "contact_graph", version)]
struct Cli {
    /// Contact-book export (JSON array of records)
    #[arg(short, long, default_value = "contacts.json")]
    input: PathBuf,

    /// Where to write the GEXF document
    #[arg(short, long, default_value = "graph.gexf")]
    output: PathBuf,

    /// JSON file with renderer settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum connectivity degree of a popular unregistered number
    #[arg(long)]
    threshold: Option<usize>,

    /// Characters of a sparse number shown in the document
    #[arg(long)]
    truncate: Option<usize>,
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
    if let Some(len) = cli.truncate {
        config = config.with_truncate_len(len);
    }

    let records = read_records(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let analysis = ContactBookAnalysis::from_records(&records)?;
    let graph = build_graph(&analysis, &config);

    let summary = GraphSummary::of(&graph);
    tracing::info!(
        registered = summary.registered,
        popular = summary.popular,
        sparse = summary.sparse,
        edges = summary.edges,
        "classified contact graph"
    );

    write_gexf_file(&graph, &config, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}
