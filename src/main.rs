//! merkleroot CLI - compute Bitcoin-style Merkle roots from txids
//!
//! Txids come from positional arguments, an input file, or stdin
//! (whitespace separated, `#` lines ignored). Output is JSON by default.

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use merkle_root::{build_root, merge, MerkleNode};
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "merkleroot")]
#[command(about = "Compute double-SHA-256 Merkle roots over transaction ids")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, global = true, default_value = "json")]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Args)]
struct LeafSource {
    /// Txids in display (big-endian) hex, in block order
    txids: Vec<String>,

    /// Read txids from a file instead (one or more per line)
    #[arg(short, long, conflicts_with = "txids")]
    input: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the Merkle root
    Root {
        #[command(flatten)]
        source: LeafSource,
    },

    /// Print the full tree as JSON
    Tree {
        #[command(flatten)]
        source: LeafSource,
    },

    /// Hash two values into their parent
    Merge {
        /// Left child, display hex
        left: String,
        /// Right child, display hex
        right: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Root { source } => {
            let leaves = read_leaves(source)?;
            let root = build_or_exit(cli.format, &leaves);
            info!(leaves = leaves.len(), root = root.value(), "computed merkle root");
            output(
                cli.format,
                &serde_json::json!({
                    "root": root.value(),
                    "leaves": leaves.len(),
                    "depth": root.depth()
                }),
                root.value(),
            );
        }

        Commands::Tree { source } => {
            let leaves = read_leaves(source)?;
            let root = build_or_exit(cli.format, &leaves);
            let tree = serde_json::to_value(&root)?;
            let pretty = serde_json::to_string_pretty(&tree)?;
            output(cli.format, &tree, &pretty);
        }

        Commands::Merge { left, right } => match merge(&left, &right) {
            Ok(value) => {
                output(cli.format, &serde_json::json!({ "value": value }), &value);
            }
            Err(e) => fail(cli.format, &e),
        },
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_leaves(source: LeafSource) -> anyhow::Result<Vec<String>> {
    if !source.txids.is_empty() {
        return Ok(source.txids);
    }

    let text = match &source.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read txids from stdin")?;
            buf
        }
    };

    let leaves = parse_leaves(&text);
    debug!(count = leaves.len(), "loaded txids");
    Ok(leaves)
}

fn parse_leaves(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

fn build_or_exit(format: OutputFormat, leaves: &[String]) -> MerkleNode {
    match build_root(leaves) {
        Ok(root) => root,
        Err(e) => fail(format, &e),
    }
}

fn fail(format: OutputFormat, err: &merkle_root::Error) -> ! {
    output(
        format,
        &serde_json::json!({
            "status": "error",
            "message": err.to_string()
        }),
        &format!("error: {}", err),
    );
    std::process::exit(1);
}

fn output(format: OutputFormat, value: &serde_json::Value, text: &str) {
    match format {
        OutputFormat::Json => println!("{}", value),
        OutputFormat::Text => println!("{}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaves_skips_comments_and_blanks() {
        let text = "# block 100000\n\naa bb\n  cc\n#dd\n";
        assert_eq!(parse_leaves(text), vec!["aa", "bb", "cc"]);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
