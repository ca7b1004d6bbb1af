//! # Entry Classifier
//!
//! Decides the semantic variant of each input and output. The declared input
//! decides whether asset and amount exist; the structural entry found under
//! the input's id decides which variant-specific fields are filled in.
//!
//! An entry kind that is missing, belongs to the other family, or is not
//! enabled for the chain is a classification gap. Gaps are logged and leave
//! the record untyped; they never fail the decode.

use crate::address::address_of;
use crate::annotated::{AnnotatedInput, AnnotatedOutput, InputDetail, OutputKind, ProgramSpend};
use crate::config::asset::NATIVE_ASSET_ID;
use crate::entry::{Bytes, Entry, Hash, RawTx, TxInput};
use crate::profile::{ChainProfile, NetParams};
use crate::program::is_unspendable;

fn classification_gap(family: &str, index: usize, id: &Hash, entry: Option<&Entry>) {
    match entry {
        Some(entry) => log::warn!(
            "{} {} ({}): entry kind {} not recognized here",
            family,
            index,
            id,
            entry.kind_name()
        ),
        None => log::warn!("{} {} ({}): no entry in graph", family, index, id),
    }
}

fn program_spend(orig: &TxInput, spent_output_id: Hash, params: &NetParams) -> ProgramSpend {
    let control_program = orig.control_program();
    ProgramSpend {
        control_program: Bytes::from(control_program),
        address: address_of(control_program, params),
        spent_output_id,
        witness_arguments: orig.arguments().to_vec(),
    }
}

/// Asset definitions are only reported when they are well-formed JSON
fn valid_definition(definition: &[u8]) -> Option<Bytes> {
    serde_json::from_slice::<serde_json::Value>(definition)
        .ok()
        .map(|_| Bytes::from(definition))
}

/// Annotate the input at `index`; `None` if the index is out of range
pub fn classify_input(tx: &RawTx, index: usize, profile: &ChainProfile) -> Option<AnnotatedInput> {
    let orig = tx.inputs.get(index)?;
    let input_id = *tx.input_ids.get(index)?;

    let (asset_id, amount, sign_data) = match orig.asset_amount() {
        Some(asset_amount) => (
            asset_amount.asset_id,
            Some(asset_amount.amount),
            tx.sig_hash(index),
        ),
        None => (Hash(NATIVE_ASSET_ID), None, None),
    };

    let variants = &profile.variants;
    let entry = tx.entry(&input_id);
    let detail = match entry {
        Some(Entry::Spend { spent_output_id }) => {
            InputDetail::Spend(program_spend(orig, *spent_output_id, &profile.params))
        }
        Some(Entry::VetoInput { spent_output_id }) if variants.sidechain => {
            InputDetail::Veto(program_spend(orig, *spent_output_id, &profile.params))
        }
        Some(Entry::CrossChainInput {
            mainchain_output_id,
        }) if variants.sidechain => InputDetail::CrossChainIn(program_spend(
            orig,
            *mainchain_output_id,
            &profile.mainchain_params,
        )),
        Some(Entry::Issuance) if variants.issuance => InputDetail::Issuance {
            issuance_program: Bytes::from(orig.issuance_program()),
            witness_arguments: orig.arguments().to_vec(),
            asset_definition: valid_definition(orig.asset_definition()),
        },
        Some(Entry::Coinbase { arbitrary }) => InputDetail::Coinbase {
            arbitrary: arbitrary.clone(),
        },
        Some(
            Entry::VetoInput { .. }
            | Entry::CrossChainInput { .. }
            | Entry::Issuance
            | Entry::IntraChainOutput
            | Entry::CrossChainOutput
            | Entry::VoteOutput { .. }
            | Entry::Retirement
            | Entry::Mux,
        )
        | None => {
            classification_gap("input", index, &input_id, entry);
            InputDetail::Unclassified
        }
    };

    log::trace!("input {} classified as {:?}", index, detail.type_tag());
    Some(AnnotatedInput {
        input_id,
        asset_id,
        amount,
        detail,
        vote: orig.vote().map(Bytes::from),
        sign_data,
    })
}

/// Annotate the output at `index`; `None` if the index is out of range
pub fn classify_output(tx: &RawTx, index: usize, profile: &ChainProfile) -> Option<AnnotatedOutput> {
    let orig = tx.outputs.get(index)?;
    let output_id = *tx.output_ids.get(index)?;

    let sidechain = profile.variants.sidechain;
    let entry = tx.entry(&output_id);
    let (kind, params) = match entry {
        Some(Entry::IntraChainOutput) => {
            let kind = if is_unspendable(&orig.control_program) {
                OutputKind::Retire
            } else {
                OutputKind::Control
            };
            (Some(kind), &profile.params)
        }
        Some(Entry::Retirement) => (Some(OutputKind::Retire), &profile.params),
        Some(Entry::CrossChainOutput) if sidechain => {
            (Some(OutputKind::CrossChainOut), &profile.mainchain_params)
        }
        Some(Entry::VoteOutput { vote }) if sidechain => {
            (Some(OutputKind::Vote { vote: vote.clone() }), &profile.params)
        }
        Some(
            Entry::CrossChainOutput
            | Entry::VoteOutput { .. }
            | Entry::Spend { .. }
            | Entry::Issuance
            | Entry::Coinbase { .. }
            | Entry::VetoInput { .. }
            | Entry::CrossChainInput { .. }
            | Entry::Mux,
        )
        | None => {
            classification_gap("output", index, &output_id, entry);
            (None, &profile.params)
        }
    };

    log::trace!("output {} classified as {:?}", index, kind);
    Some(AnnotatedOutput {
        kind,
        output_id,
        position: index,
        asset_id: orig.asset_id,
        amount: orig.amount,
        control_program: orig.control_program.clone(),
        address: address_of(&orig.control_program, params),
    })
}
