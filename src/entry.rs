//! # Entry Graph
//!
//! The already-parsed, content-addressed form of a transaction. Producing it
//! from the chains' binary wire format (and hashing entry identifiers) is the
//! job of an external parser; this module only defines the shape the
//! annotator consumes and the [`RawTxParser`] seam it is obtained through.

use crate::error::{DecodeError, DecodeResult};
use crate::profile::Chain;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Sha3_256};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// 32-byte entry, asset or transaction identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl FromStr for Hash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Hash(bytes))
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Owned byte string that travels as lowercase hex
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    /// Parse a hex string
    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        hex::decode(s).map(Bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(bytes.to_vec())
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({})", self)
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Bytes::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Asset id and amount pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAmount {
    pub asset_id: Hash,
    pub amount: u64,
}

/// Declared (wire-level) input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TxInput {
    Spend {
        asset_id: Hash,
        amount: u64,
        control_program: Bytes,
        #[serde(default)]
        arguments: Vec<Bytes>,
    },
    Issuance {
        asset_id: Hash,
        amount: u64,
        issuance_program: Bytes,
        #[serde(default)]
        asset_definition: Bytes,
        #[serde(default)]
        arguments: Vec<Bytes>,
    },
    Coinbase {
        #[serde(default)]
        arbitrary: Bytes,
    },
    Veto {
        asset_id: Hash,
        amount: u64,
        control_program: Bytes,
        #[serde(default)]
        arguments: Vec<Bytes>,
        vote: Bytes,
    },
    CrossChain {
        asset_id: Hash,
        amount: u64,
        control_program: Bytes,
        #[serde(default)]
        arguments: Vec<Bytes>,
    },
}

impl TxInput {
    pub fn is_coinbase(&self) -> bool {
        matches!(self, TxInput::Coinbase { .. })
    }

    /// Asset and amount consumed by the input; coinbase inputs have none
    pub fn asset_amount(&self) -> Option<AssetAmount> {
        match self {
            TxInput::Spend {
                asset_id, amount, ..
            }
            | TxInput::Issuance {
                asset_id, amount, ..
            }
            | TxInput::Veto {
                asset_id, amount, ..
            }
            | TxInput::CrossChain {
                asset_id, amount, ..
            } => Some(AssetAmount {
                asset_id: *asset_id,
                amount: *amount,
            }),
            TxInput::Coinbase { .. } => None,
        }
    }

    /// Control program of the output being spent
    pub fn control_program(&self) -> &[u8] {
        match self {
            TxInput::Spend {
                control_program, ..
            }
            | TxInput::Veto {
                control_program, ..
            }
            | TxInput::CrossChain {
                control_program, ..
            } => control_program,
            TxInput::Issuance { .. } | TxInput::Coinbase { .. } => &[],
        }
    }

    pub fn issuance_program(&self) -> &[u8] {
        match self {
            TxInput::Issuance {
                issuance_program, ..
            } => issuance_program,
            _ => &[],
        }
    }

    pub fn asset_definition(&self) -> &[u8] {
        match self {
            TxInput::Issuance {
                asset_definition, ..
            } => asset_definition,
            _ => &[],
        }
    }

    /// Witness arguments
    pub fn arguments(&self) -> &[Bytes] {
        match self {
            TxInput::Spend { arguments, .. }
            | TxInput::Issuance { arguments, .. }
            | TxInput::Veto { arguments, .. }
            | TxInput::CrossChain { arguments, .. } => arguments,
            TxInput::Coinbase { .. } => &[],
        }
    }

    /// Vote payload, only carried by veto inputs
    pub fn vote(&self) -> Option<&[u8]> {
        match self {
            TxInput::Veto { vote, .. } => Some(vote),
            _ => None,
        }
    }
}

/// Declared output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub asset_id: Hash,
    pub amount: u64,
    pub control_program: Bytes,
}

impl TxOutput {
    pub fn asset_amount(&self) -> AssetAmount {
        AssetAmount {
            asset_id: self.asset_id,
            amount: self.amount,
        }
    }
}

/// Structural entry kinds of the content-addressed graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Entry {
    Spend { spent_output_id: Hash },
    Issuance,
    Coinbase { arbitrary: Bytes },
    VetoInput { spent_output_id: Hash },
    CrossChainInput { mainchain_output_id: Hash },
    IntraChainOutput,
    CrossChainOutput,
    VoteOutput { vote: Bytes },
    Retirement,
    Mux,
}

impl Entry {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entry::Spend { .. } => "spend",
            Entry::Issuance => "issuance",
            Entry::Coinbase { .. } => "coinbase",
            Entry::VetoInput { .. } => "veto_input",
            Entry::CrossChainInput { .. } => "cross_chain_input",
            Entry::IntraChainOutput => "intra_chain_output",
            Entry::CrossChainOutput => "cross_chain_output",
            Entry::VoteOutput { .. } => "vote_output",
            Entry::Retirement => "retirement",
            Entry::Mux => "mux",
        }
    }
}

/// Parsed transaction with its entry graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTx {
    pub id: Hash,
    pub version: u64,
    pub serialized_size: u64,
    #[serde(default)]
    pub time_range: u64,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    /// Entry id of each input, in input order
    pub input_ids: Vec<Hash>,
    /// Entry id of each output, in output order
    pub output_ids: Vec<Hash>,
    pub entries: HashMap<Hash, Entry>,
}

impl RawTx {
    /// Look up an entry by id
    pub fn entry(&self, id: &Hash) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Signature hash for the input at `index`: SHA3-256(input id || tx id)
    pub fn sig_hash(&self, index: usize) -> Option<Hash> {
        let input_id = self.input_ids.get(index)?;
        let mut hasher = Sha3_256::new();
        hasher.update(input_id.as_bytes());
        hasher.update(self.id.as_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        Some(Hash(digest))
    }

    /// Check that the id lists line up with the declared inputs and outputs
    pub fn validate(&self) -> DecodeResult<()> {
        if self.input_ids.len() != self.inputs.len() {
            return Err(DecodeError::malformed(format!(
                "{} input ids for {} inputs",
                self.input_ids.len(),
                self.inputs.len()
            )));
        }
        if self.output_ids.len() != self.outputs.len() {
            return Err(DecodeError::malformed(format!(
                "{} output ids for {} outputs",
                self.output_ids.len(),
                self.outputs.len()
            )));
        }
        Ok(())
    }
}

/// Turns raw transaction text into an entry graph
pub trait RawTxParser {
    fn parse(&self, chain: Chain, raw: &str) -> DecodeResult<RawTx>;
}

/// Parser for entry graphs serialized as JSON, byte strings as hex
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonGraphParser;

impl RawTxParser for JsonGraphParser {
    fn parse(&self, chain: Chain, raw: &str) -> DecodeResult<RawTx> {
        let tx: RawTx =
            serde_json::from_str(raw.trim()).map_err(|e| DecodeError::malformed(e.to_string()))?;
        tx.validate()?;
        log::trace!(
            "parsed {} transaction {} ({} inputs, {} outputs, {} entries)",
            chain,
            tx.id,
            tx.inputs.len(),
            tx.outputs.len(),
            tx.entries.len()
        );
        Ok(tx)
    }
}
