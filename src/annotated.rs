//! # Annotated Transaction
//!
//! The read-only view handed to wallets and explorers. Inputs and outputs are
//! closed sum types; fields that do not apply to a variant are absent from
//! the JSON form rather than emitted as null. Key names follow the
//! [`FieldNaming`] of the profile the transaction was decoded with.

use crate::entry::{Bytes, Hash};
use crate::profile::FieldNaming;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

/// Fields shared by inputs that spend a control program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSpend {
    pub control_program: Bytes,
    pub address: Option<String>,
    /// Output being spent; on the origin chain for cross-chain inputs
    pub spent_output_id: Hash,
    pub witness_arguments: Vec<Bytes>,
}

/// Variant-specific part of an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDetail {
    Spend(ProgramSpend),
    Veto(ProgramSpend),
    CrossChainIn(ProgramSpend),
    Issuance {
        issuance_program: Bytes,
        witness_arguments: Vec<Bytes>,
        /// Present only when the definition is well-formed JSON
        asset_definition: Option<Bytes>,
    },
    Coinbase {
        arbitrary: Bytes,
    },
    /// Structural kind not recognized for this chain
    Unclassified,
}

impl InputDetail {
    /// Wire type tag, `None` for unclassified inputs
    pub fn type_tag(&self) -> Option<&'static str> {
        match self {
            InputDetail::Spend(_) => Some("spend"),
            InputDetail::Veto(_) => Some("veto"),
            InputDetail::CrossChainIn(_) => Some("cross_chain_in"),
            InputDetail::Issuance { .. } => Some("issue"),
            InputDetail::Coinbase { .. } => Some("coinbase"),
            InputDetail::Unclassified => None,
        }
    }

    pub fn program_spend(&self) -> Option<&ProgramSpend> {
        match self {
            InputDetail::Spend(spend) | InputDetail::Veto(spend) | InputDetail::CrossChainIn(spend) => {
                Some(spend)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedInput {
    pub input_id: Hash,
    pub asset_id: Hash,
    /// Absent for coinbase inputs
    pub amount: Option<u64>,
    pub detail: InputDetail,
    /// Vote payload carried by veto inputs
    pub vote: Option<Bytes>,
    /// Signature hash for external signers, absent for coinbase inputs
    pub sign_data: Option<Hash>,
}

impl AnnotatedInput {
    pub fn type_tag(&self) -> Option<&'static str> {
        self.detail.type_tag()
    }

    pub fn address(&self) -> Option<&str> {
        self.detail
            .program_spend()
            .and_then(|spend| spend.address.as_deref())
    }
}

/// Output variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputKind {
    Control,
    Retire,
    CrossChainOut,
    Vote { vote: Bytes },
}

impl OutputKind {
    pub fn type_tag(&self) -> &'static str {
        match self {
            OutputKind::Control => "control",
            OutputKind::Retire => "retire",
            OutputKind::CrossChainOut => "cross_chain_out",
            OutputKind::Vote { .. } => "vote",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedOutput {
    /// `None` when the structural kind was not recognized
    pub kind: Option<OutputKind>,
    pub output_id: Hash,
    pub position: usize,
    pub asset_id: Hash,
    pub amount: u64,
    pub control_program: Bytes,
    pub address: Option<String>,
}

impl AnnotatedOutput {
    pub fn type_tag(&self) -> Option<&'static str> {
        self.kind.as_ref().map(OutputKind::type_tag)
    }

    pub fn vote(&self) -> Option<&Bytes> {
        match &self.kind {
            Some(OutputKind::Vote { vote }) => Some(vote),
            _ => None,
        }
    }
}

/// Fully assembled transaction view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTransaction {
    pub tx_id: Hash,
    pub version: u64,
    pub size: u64,
    pub time_range: u64,
    pub inputs: Vec<AnnotatedInput>,
    pub outputs: Vec<AnnotatedOutput>,
    pub fee: i64,
    /// Key names used when serializing
    pub naming: FieldNaming,
}

impl AnnotatedTransaction {
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Borrowed value paired with the naming table it serializes under
struct Named<'a, T> {
    value: &'a T,
    naming: &'a FieldNaming,
}

impl Serialize for AnnotatedTransaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let naming = &self.naming;
        let inputs: Vec<_> = self
            .inputs
            .iter()
            .map(|value| Named { value, naming })
            .collect();
        let outputs: Vec<_> = self
            .outputs
            .iter()
            .map(|value| Named { value, naming })
            .collect();

        let mut map = serializer.serialize_map(Some(7))?;
        map.serialize_entry(naming.tx_id, &self.tx_id)?;
        map.serialize_entry("version", &self.version)?;
        map.serialize_entry("size", &self.size)?;
        map.serialize_entry("time_range", &self.time_range)?;
        map.serialize_entry("inputs", &inputs)?;
        map.serialize_entry("outputs", &outputs)?;
        map.serialize_entry("fee", &self.fee)?;
        map.end()
    }
}

impl Serialize for Named<'_, AnnotatedInput> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let input = self.value;
        let naming = self.naming;
        let mut map = serializer.serialize_map(None)?;

        if let Some(tag) = input.type_tag() {
            map.serialize_entry("type", tag)?;
        }
        map.serialize_entry("input_id", &input.input_id)?;
        map.serialize_entry(naming.asset_id, &input.asset_id)?;
        if let Some(amount) = input.amount {
            map.serialize_entry("amount", &amount)?;
        }

        match &input.detail {
            InputDetail::Spend(spend) | InputDetail::Veto(spend) | InputDetail::CrossChainIn(spend) => {
                map.serialize_entry(naming.control_program, &spend.control_program)?;
                if let Some(address) = &spend.address {
                    map.serialize_entry("address", address)?;
                }
                map.serialize_entry("spent_output_id", &spend.spent_output_id)?;
                if !spend.witness_arguments.is_empty() {
                    map.serialize_entry(naming.witness_arguments, &spend.witness_arguments)?;
                }
            }
            InputDetail::Issuance {
                issuance_program,
                witness_arguments,
                asset_definition,
            } => {
                map.serialize_entry("issuance_program", issuance_program)?;
                if let Some(definition) = asset_definition {
                    map.serialize_entry("asset_definition", definition)?;
                }
                if !witness_arguments.is_empty() {
                    map.serialize_entry(naming.witness_arguments, witness_arguments)?;
                }
            }
            InputDetail::Coinbase { arbitrary } => {
                map.serialize_entry("arbitrary", arbitrary)?;
            }
            InputDetail::Unclassified => {}
        }

        if let Some(vote) = &input.vote {
            map.serialize_entry("vote", vote)?;
        }
        if let Some(sign_data) = &input.sign_data {
            map.serialize_entry("sign_data", sign_data)?;
        }
        map.end()
    }
}

impl Serialize for Named<'_, AnnotatedOutput> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let output = self.value;
        let naming = self.naming;
        let mut map = serializer.serialize_map(None)?;

        if let Some(tag) = output.type_tag() {
            map.serialize_entry("type", tag)?;
        }
        map.serialize_entry(naming.output_id, &output.output_id)?;
        map.serialize_entry("position", &output.position)?;
        map.serialize_entry(naming.asset_id, &output.asset_id)?;
        map.serialize_entry("amount", &output.amount)?;
        map.serialize_entry(naming.control_program, &output.control_program)?;
        if let Some(address) = &output.address {
            map.serialize_entry("address", address)?;
        }
        if let Some(vote) = output.vote() {
            map.serialize_entry("vote", vote)?;
        }
        map.end()
    }
}
