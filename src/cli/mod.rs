use std::path::PathBuf;

use clap::Parser;

use crate::config::{self, ScanConfig};
use crate::error::Result;
use crate::graph::render::{render, RenderOutcome};
use crate::graph::DepGraph;
use crate::scan::Scanner;
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "mulegraph")]
#[command(
    about = "Maps MuleSoft dependencies found in the local Maven repository",
    long_about = None
)]
pub struct Cli {
    /// Output image path
    #[arg(long, value_name = "IMG")]
    pub out: Option<PathBuf>,
    /// Maximum number of MuleSoft manifests to load
    #[arg(long, value_name = "N", default_value_t = config::DEFAULT_QUOTA)]
    pub max: usize,
}

pub fn run() {
    let cli = Cli::parse();
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let config = ScanConfig::resolve(cli.out, cli.max)?;
    output::info(&format!("Scanning {}", config.root.display()));

    let mut graph = DepGraph::new();
    let scanner = Scanner::new(config.quota);
    let stats = scanner.scan(&config.root, &mut graph)?;
    output::info(&format!(
        "MuleSoft nodes found: {} ({} manifests and {} archives visited)",
        graph.node_count(),
        stats.poms_visited,
        stats.jars_visited
    ));

    match render(&graph, &config.output)? {
        RenderOutcome::Written(path) => {
            output::success(&format!("Graph written to {}", path.display()));
        }
        RenderOutcome::EmptyGraph => {
            output::warn("No MuleSoft dependencies found, skipping render.");
        }
    }
    Ok(())
}
