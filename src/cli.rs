use crate::config::load_config;
use crate::interaction::set_expanded;
use crate::layout::{LayoutStrategy, compute_layout};
use crate::layout_dump::write_layout_dump;
use crate::parser::load_roadmap;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "roadmap-layout",
    version,
    about = "Lay out a roadmap tree as a positioned node/edge graph"
)]
pub struct Args {
    /// Input roadmap (JSON) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout JSON. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Layout strategy
    #[arg(short = 's', long = "strategy", value_enum, default_value_t = LayoutStrategy::Layered)]
    pub strategy: LayoutStrategy,

    /// Config JSON file (spacing, theme)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Collapse the subtree under this node id (repeatable)
    #[arg(long = "collapse")]
    pub collapse: Vec<String>,

    /// Emit single-line JSON
    #[arg(long = "compact")]
    pub compact: bool,
}

pub fn run() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let root = load_roadmap(&input).context("failed to load roadmap")?;
    tracing::info!(
        root = %root.id,
        nodes = root.node_count(),
        strategy = %args.strategy,
        "laying out roadmap"
    );

    let mut layout = compute_layout(&root, args.strategy, &config.theme, &config.layout)?;
    for id in &args.collapse {
        set_expanded(&mut layout, id, false)?;
    }

    write_layout_dump(args.output.as_deref(), &layout, &config.theme, !args.compact)
}

fn init_tracing() {
    // Logs go to stderr so stdout stays valid JSON.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
