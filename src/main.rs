//! # tx-annotate
//!
//! Command-line front end for the transaction annotator.
//!
//! ```bash
//! # Annotate a Vapor transaction graph stored in a file
//! tx-annotate decode --chain vapor --file tx.json --pretty
//!
//! # Pipe a Bytom graph through stdin using node-API key names
//! cat tx.json | tx-annotate decode --chain bytom --naming descriptive
//!
//! # Show supported chains and address prefixes
//! tx-annotate chains
//! ```
//!
//! `TX_ANNOTATE_CHAIN` and `TX_ANNOTATE_NETWORK` (also read from `.env`)
//! supply defaults for `--chain` and `--network`.

use anyhow::{Context, Result};
use chain_tx_annotator::config::{chain as chain_config, env as env_config};
use chain_tx_annotator::profile::NetParams;
use chain_tx_annotator::{
    Chain, ChainProfile, FieldNaming, JsonGraphParser, Network, TransactionDecoder,
};
use clap::{Parser, Subcommand};
use std::{
    env, fs,
    io::{self, Read},
};

#[derive(Parser)]
#[command(name = "tx-annotate")]
#[command(about = "Annotate Bytom and Vapor transactions as JSON")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a transaction entry graph into annotated JSON
    Decode {
        /// Raw transaction text (reads stdin when neither this nor --file is given)
        raw: Option<String>,
        /// Read the raw transaction from a file
        #[arg(short, long)]
        file: Option<String>,
        /// Chain name: bytom or vapor
        #[arg(short, long)]
        chain: Option<String>,
        /// Network: mainnet, testnet or solonet
        #[arg(short, long)]
        network: Option<String>,
        /// JSON key convention: compact or descriptive
        #[arg(long, default_value = "compact")]
        naming: FieldNaming,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// List supported chains and their address prefixes
    Chains,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::init();
    }

    match cli.command {
        Commands::Decode {
            raw,
            file,
            chain,
            network,
            naming,
            pretty,
        } => decode(raw, file, chain, network, naming, pretty),
        Commands::Chains => {
            list_chains();
            Ok(())
        }
    }
}

/// Flag value, then environment, then built-in default
fn setting(flag: Option<String>, var: &str, default: &str) -> String {
    flag.or_else(|| env::var(var).ok())
        .unwrap_or_else(|| default.to_string())
}

fn read_raw(raw: Option<String>, file: Option<String>) -> Result<String> {
    match (raw, file) {
        (Some(raw), _) => Ok(raw),
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))
        }
        (None, None) => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn decode(
    raw: Option<String>,
    file: Option<String>,
    chain: Option<String>,
    network: Option<String>,
    naming: FieldNaming,
    pretty: bool,
) -> Result<()> {
    let chain: Chain = setting(chain, env_config::CHAIN, chain_config::DEFAULT_CHAIN).parse()?;
    let network: Network =
        setting(network, env_config::NETWORK, chain_config::DEFAULT_NETWORK).parse()?;
    let profile = ChainProfile::new(chain, network).with_naming(naming);
    log::debug!("decoding with {} {} profile", chain, network);

    let raw = read_raw(raw, file)?;
    let tx = TransactionDecoder::new(JsonGraphParser)
        .decode(&raw, &profile)
        .with_context(|| format!("Failed to decode {} transaction", chain))?;

    let output = if pretty {
        tx.to_json_pretty()?
    } else {
        String::from_utf8(tx.to_json()?)?
    };
    println!("{}", output);
    Ok(())
}

fn list_chains() {
    for chain in Chain::ALL {
        let prefixes: Vec<String> = [Network::Mainnet, Network::Testnet, Network::Solonet]
            .iter()
            .map(|network| {
                format!(
                    "{}={}",
                    network,
                    NetParams::of(chain, *network).bech32_hrp
                )
            })
            .collect();
        println!("{:<8} {}", chain, prefixes.join(" "));
    }
}
