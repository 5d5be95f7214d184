use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use follow_lens::config::{ExplorerConfig, NodeShape};
use follow_lens::explain::{Explorer, LayoutName};
use follow_lens::graph::load_edge_list;
use follow_lens::inspect::{describe_edge, describe_node};
use follow_lens::layout::{RandomSource, RngSource};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Whitespace-separated `source target` follower edges.
    #[arg(long, default_value = "data/sample_network.txt")]
    edges: PathBuf,

    /// Number of edge lines to load.
    #[arg(long)]
    limit: Option<usize>,

    /// JSON file with explorer settings; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    follower_color: Option<String>,

    #[arg(long)]
    following_color: Option<String>,

    #[arg(long, value_enum)]
    node_shape: Option<NodeShape>,

    /// Automatic layout used when nothing is expanded.
    #[arg(long, value_enum)]
    layout: Option<LayoutName>,

    /// Seed for the layout jitter.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Tap nodes in order and print the final stylesheet, elements and layout.
    Tap {
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Print the inspection dump of a node or edge, after optional taps.
    Inspect {
        query: String,

        /// Nodes to tap, in order, before inspecting.
        #[arg(long = "after")]
        taps: Vec<String>,
    },
    /// Print the loaded elements.
    Elements,
}

impl Args {
    fn explorer_config(&self) -> Result<ExplorerConfig> {
        let mut config = match &self.config {
            Some(path) => ExplorerConfig::load(path)?,
            None => ExplorerConfig::default(),
        };

        if let Some(color) = &self.follower_color {
            config.follower_color = color.clone();
        }
        if let Some(color) = &self.following_color {
            config.following_color = color.clone();
        }
        if let Some(shape) = self.node_shape {
            config.node_shape = shape;
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(limit) = self.limit {
            config.edge_limit = limit;
        }
        Ok(config)
    }
}

fn init_tracing(args: &Args) {
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn tap_all<R: RandomSource>(explorer: &mut Explorer<R>, queries: &[String]) -> Result<()> {
    for query in queries {
        let id = explorer.store().find_node(query)?.to_owned();
        info!(query = %query, node = %id, "tap");
        explorer.tap_node(&id);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args);

    let config = args.explorer_config()?;
    let store = load_edge_list(&args.edges, config.edge_limit)?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut explorer = Explorer::new(store, config, RngSource(rng));

    let text = match &args.command {
        Command::Tap { queries } => {
            let (last, earlier) = queries
                .split_last()
                .ok_or_else(|| anyhow!("no node to tap"))?;

            tap_all(&mut explorer, earlier)?;

            let id = explorer.store().find_node(last)?.to_owned();
            info!(query = %last, node = %id, "tap");
            let output = explorer.tap_node(&id);
            serde_json::to_string_pretty(&output).context("failed to encode pass output")?
        }
        Command::Inspect { query, taps } => {
            tap_all(&mut explorer, taps)?;
            let store = explorer.store();
            if let Some(edge) = store.edge(query) {
                describe_edge(edge)?
            } else {
                let id = store.find_node(query)?;
                let node = store
                    .node(id)
                    .ok_or_else(|| anyhow!("node {id} vanished from the store"))?;
                describe_node(store, explorer.tracker(), node)?
            }
        }
        Command::Elements => serde_json::to_string_pretty(explorer.store().elements())
            .context("failed to encode elements")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}").context("failed to write output")?;
    Ok(())
}
