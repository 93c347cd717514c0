//! Asset Pair Order - Binary Entry Point
//!
//! Orders two asset IDs into `AMOUNT/PRICE` using a built-in or custom
//! priority list.
//!
//! ```bash
//! # Built-in mainnet list
//! asset-pair-order Ft8X1v1LTa1ABafufpaCWyVj8KkaxUWE6xBhW6sNFJck DCC
//!
//! # Custom list, JSON output, decision trace on stderr
//! RUST_LOG=asset_pair_order=trace asset-pair-order --list assets.json --json A B
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use asset_pair_order::{Network, PairOrderer, PriorityList};

/// Order a DEX asset pair into amount and price assets
#[derive(Debug, Parser)]
#[command(name = "asset-pair-order", version, about)]
struct Cli {
    /// Built-in priority list to use
    #[arg(long, short, default_value_t = Network::Mainnet)]
    network: Network,

    /// JSON file of `[{"id": ...}]` records; overrides --network
    #[arg(long, short)]
    list: Option<PathBuf>,

    /// Print `{"amountAsset": ..., "priceAsset": ...}` instead of `AMOUNT/PRICE`
    #[arg(long)]
    json: bool,

    /// First asset ID
    asset_a: String,

    /// Second asset ID
    asset_b: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let orderer = match &cli.list {
        Some(path) => {
            let list = PriorityList::from_json_file(path)
                .with_context(|| format!("loading priority list {}", path.display()))?;
            tracing::debug!(path = %path.display(), entries = list.len(), "custom priority list");
            PairOrderer::new(list)
        }
        None => {
            tracing::debug!(network = %cli.network, "built-in priority list");
            cli.network.orderer()
        }
    };

    let pair = orderer
        .order(&cli.asset_a, &cli.asset_b)
        .with_context(|| format!("ordering {} and {}", cli.asset_a, cli.asset_b))?;

    if cli.json {
        println!("{}", serde_json::to_string(&pair)?);
    } else {
        println!("{pair}");
    }
    Ok(())
}
