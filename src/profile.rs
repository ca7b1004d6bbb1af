//! # Chain Profiles
//!
//! One annotation engine serves both chains. Everything that differs between
//! them lives in a [`ChainProfile`]: the address parameters for same-chain and
//! mainchain programs, the JSON field names, and which entry kinds exist.

use crate::config::chain as chain_config;
use crate::error::DecodeError;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Supported chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chain {
    /// Bytom mainchain
    Bytom,
    /// Vapor sidechain
    Vapor,
}

impl Chain {
    pub const ALL: [Chain; 2] = [Chain::Bytom, Chain::Vapor];

    pub fn name(&self) -> &'static str {
        match self {
            Chain::Bytom => chain_config::BYTOM,
            Chain::Vapor => chain_config::VAPOR,
        }
    }
}

impl FromStr for Chain {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            chain_config::BYTOM => Ok(Chain::Bytom),
            chain_config::VAPOR => Ok(Chain::Vapor),
            _ => Err(DecodeError::unknown_chain(s)),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Network a chain profile is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
    Solonet,
}

impl FromStr for Network {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "solonet" => Ok(Network::Solonet),
            _ => Err(DecodeError::unknown_network(s)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
            Network::Solonet => write!(f, "solonet"),
        }
    }
}

/// Address encoding parameters of one network
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetParams {
    pub name: &'static str,
    pub bech32_hrp: &'static str,
}

impl NetParams {
    pub const BYTOM_MAINNET: NetParams = NetParams {
        name: "bytom-main",
        bech32_hrp: "bm",
    };
    pub const BYTOM_TESTNET: NetParams = NetParams {
        name: "bytom-test",
        bech32_hrp: "tm",
    };
    pub const BYTOM_SOLONET: NetParams = NetParams {
        name: "bytom-solo",
        bech32_hrp: "sm",
    };
    pub const VAPOR_MAINNET: NetParams = NetParams {
        name: "vapor-main",
        bech32_hrp: "vp",
    };
    pub const VAPOR_TESTNET: NetParams = NetParams {
        name: "vapor-test",
        bech32_hrp: "tp",
    };
    pub const VAPOR_SOLONET: NetParams = NetParams {
        name: "vapor-solo",
        bech32_hrp: "sp",
    };

    /// Parameter set of `chain` on `network`
    pub fn of(chain: Chain, network: Network) -> NetParams {
        match (chain, network) {
            (Chain::Bytom, Network::Mainnet) => Self::BYTOM_MAINNET,
            (Chain::Bytom, Network::Testnet) => Self::BYTOM_TESTNET,
            (Chain::Bytom, Network::Solonet) => Self::BYTOM_SOLONET,
            (Chain::Vapor, Network::Mainnet) => Self::VAPOR_MAINNET,
            (Chain::Vapor, Network::Testnet) => Self::VAPOR_TESTNET,
            (Chain::Vapor, Network::Solonet) => Self::VAPOR_SOLONET,
        }
    }
}

/// JSON key names that differ between naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldNaming {
    pub tx_id: &'static str,
    pub asset_id: &'static str,
    pub control_program: &'static str,
    pub witness_arguments: &'static str,
    pub output_id: &'static str,
}

impl FieldNaming {
    /// Short keys used by the wallet SDK responses
    pub const COMPACT: FieldNaming = FieldNaming {
        tx_id: "hash",
        asset_id: "asset",
        control_program: "script",
        witness_arguments: "arguments",
        output_id: "utxo_id",
    };

    /// Node-API style keys
    pub const DESCRIPTIVE: FieldNaming = FieldNaming {
        tx_id: "tx_id",
        asset_id: "asset_id",
        control_program: "control_program",
        witness_arguments: "witness_arguments",
        output_id: "output_id",
    };
}

impl FromStr for FieldNaming {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(FieldNaming::COMPACT),
            "descriptive" => Ok(FieldNaming::DESCRIPTIVE),
            _ => Err(format!("Invalid field naming: {}", s)),
        }
    }
}

/// Entry kinds a chain can produce beyond spend, coinbase and plain outputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSet {
    /// Asset issuance inputs
    pub issuance: bool,
    /// Veto inputs, vote outputs and cross-chain inputs/outputs
    pub sidechain: bool,
}

/// Immutable per-chain configuration for one decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainProfile {
    pub chain: Chain,
    pub network: Network,
    /// Parameters for same-chain programs
    pub params: NetParams,
    /// Parameters for programs living on the mainchain (cross-chain entries)
    pub mainchain_params: NetParams,
    pub naming: FieldNaming,
    pub variants: VariantSet,
}

lazy_static! {
    static ref MAINNET_PROFILES: HashMap<&'static str, ChainProfile> = Chain::ALL
        .iter()
        .map(|chain| (chain.name(), ChainProfile::new(*chain, Network::Mainnet)))
        .collect();
}

impl ChainProfile {
    pub fn new(chain: Chain, network: Network) -> Self {
        let variants = match chain {
            Chain::Bytom => VariantSet {
                issuance: true,
                sidechain: false,
            },
            Chain::Vapor => VariantSet {
                issuance: false,
                sidechain: true,
            },
        };

        Self {
            chain,
            network,
            params: NetParams::of(chain, network),
            mainchain_params: NetParams::of(Chain::Bytom, network),
            naming: FieldNaming::COMPACT,
            variants,
        }
    }

    /// Same profile with a different JSON naming convention
    pub fn with_naming(mut self, naming: FieldNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Mainnet profile for a chain-name token
    pub fn lookup(name: &str) -> Result<&'static ChainProfile, DecodeError> {
        MAINNET_PROFILES
            .get(name.to_lowercase().as_str())
            .ok_or_else(|| DecodeError::unknown_chain(name))
    }
}
