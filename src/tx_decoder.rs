//! # Transaction Decoder
//!
//! Assembles the annotated view of a transaction: parse the raw text into an
//! entry graph, copy the header, classify every input and output in order,
//! then compute the fee. Each step is a hard precondition for the next.
//!
//! [`TransactionDecoder::decode_raw_tx`] is the dispatching façade keyed by a
//! chain-name token. It collapses every failure into `None`; callers that need
//! the reason use [`TransactionDecoder::decode`] or
//! [`TransactionDecoder::decode_chain`].

use crate::annotated::AnnotatedTransaction;
use crate::classify::{classify_input, classify_output};
use crate::config::asset::NATIVE_ASSET_ID;
use crate::entry::{Hash, JsonGraphParser, RawTx, RawTxParser};
use crate::error::{DecodeError, DecodeResult};
use crate::fee::compute_fee;
use crate::profile::ChainProfile;

/// Main transaction decoder
#[derive(Debug, Clone, Default)]
pub struct TransactionDecoder<P = JsonGraphParser> {
    parser: P,
}

impl<P: RawTxParser> TransactionDecoder<P> {
    /// Create a decoder backed by an entry-graph parser
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Decode raw text under a chain profile
    pub fn decode(&self, raw: &str, profile: &ChainProfile) -> DecodeResult<AnnotatedTransaction> {
        let tx = self.parser.parse(profile.chain, raw)?;
        annotate(&tx, profile)
    }

    /// Decode raw text under the mainnet profile of a chain-name token
    pub fn decode_chain(&self, chain_name: &str, raw: &str) -> DecodeResult<AnnotatedTransaction> {
        let profile = ChainProfile::lookup(chain_name)?;
        self.decode(raw, profile)
    }

    /// Decode to JSON bytes; every failure becomes `None`
    pub fn decode_raw_tx(&self, chain_name: &str, raw: &str) -> Option<Vec<u8>> {
        let result = self
            .decode_chain(chain_name, raw)
            .and_then(|tx| tx.to_json().map_err(DecodeError::from));

        match result {
            Ok(json) => Some(json),
            Err(e) => {
                log::debug!("{} decode failed: {}", chain_name, e);
                None
            }
        }
    }
}

/// Annotate an already-parsed transaction
pub fn annotate(tx: &RawTx, profile: &ChainProfile) -> DecodeResult<AnnotatedTransaction> {
    let inputs = (0..tx.inputs.len())
        .map(|index| classify_input(tx, index, profile))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| DecodeError::malformed("input ids do not match inputs"))?;

    let outputs = (0..tx.outputs.len())
        .map(|index| classify_output(tx, index, profile))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| DecodeError::malformed("output ids do not match outputs"))?;

    let fee = compute_fee(tx, &Hash(NATIVE_ASSET_ID))?;

    log::debug!(
        "annotated {} transaction {}: {} inputs, {} outputs, fee {}",
        profile.chain,
        tx.id,
        inputs.len(),
        outputs.len(),
        fee
    );

    Ok(AnnotatedTransaction {
        tx_id: tx.id,
        version: tx.version,
        size: tx.serialized_size,
        time_range: tx.time_range,
        inputs,
        outputs,
        fee,
        naming: profile.naming,
    })
}

/// Dispatching façade over the JSON entry-graph parser
pub fn decode_raw_tx(chain_name: &str, raw: &str) -> Option<Vec<u8>> {
    TransactionDecoder::<JsonGraphParser>::default().decode_raw_tx(chain_name, raw)
}
