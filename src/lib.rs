//! # Chain Transaction Annotator
//!
//! Converts Bytom mainchain and Vapor sidechain transactions into a uniform,
//! annotated JSON view: every input and output is classified by its semantic
//! role, standard witness programs are resolved to addresses, and the fee is
//! computed over the native asset.
//!
//! One engine serves both chains; a [`ChainProfile`] carries everything that
//! differs between them.

pub mod address;
pub mod annotated;
pub mod classify;
pub mod config;
pub mod entry;
pub mod error;
pub mod fee;
pub mod profile;
pub mod program;
pub mod tx_decoder;

#[cfg(test)]
mod golden_tests;
#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use annotated::{AnnotatedInput, AnnotatedOutput, AnnotatedTransaction};
pub use entry::{JsonGraphParser, RawTx, RawTxParser};
pub use error::{DecodeError, DecodeResult};
pub use profile::{Chain, ChainProfile, FieldNaming, Network};
pub use tx_decoder::{decode_raw_tx, TransactionDecoder};
