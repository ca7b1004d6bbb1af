//! # Error Types for the Transaction Annotator
//!
//! Terminal failures abort a decode and reach the caller as a [`DecodeError`].
//! Address derivation failures are absorbed inside the engine and only show up
//! as an omitted `address` field, so [`AddressError`] never leaves the crate's
//! annotation path.

use thiserror::Error;

/// Main error type for decode operations
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Raw text did not parse into a consistent entry graph
    #[error("Malformed transaction: {message}")]
    Malformed { message: String },

    /// Chain-name token not recognized
    #[error("Unknown chain: {name}")]
    UnknownChain { name: String },

    /// Network token not recognized
    #[error("Unknown network: {name}")]
    UnknownNetwork { name: String },

    /// Fee-asset summation failed
    #[error("Fee computation failed: {source}")]
    FeeOverflow {
        #[from]
        source: ArithmeticError,
    },

    /// JSON encoding of the annotated transaction failed
    #[error("JSON processing error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for decode operations
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    /// Create a malformed-input error with a message
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Create an unknown-chain error
    pub fn unknown_chain(name: impl Into<String>) -> Self {
        Self::UnknownChain { name: name.into() }
    }

    /// Create an unknown-network error
    pub fn unknown_network(name: impl Into<String>) -> Self {
        Self::UnknownNetwork { name: name.into() }
    }

    /// Check if this error was caused by the caller's input rather than the data
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            DecodeError::UnknownChain { .. } | DecodeError::UnknownNetwork { .. }
        )
    }
}

/// Checked arithmetic failures while aggregating the fee
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// A running sum exceeded `u64::MAX`
    #[error("{side} amount sum overflows")]
    Overflow { side: &'static str },

    /// Outputs spend more of the fee asset than the inputs provide
    #[error("outputs ({outputs}) exceed inputs ({inputs})")]
    Underflow { inputs: u64, outputs: u64 },

    /// The net fee does not fit the signed fee field
    #[error("fee {fee} is out of range")]
    OutOfRange { fee: u64 },
}

/// Reasons an address could not be derived. Never fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// Program is not a version-0 witness program
    #[error("control program is not a recognized witness program")]
    UnrecognizedProgram,

    /// The bech32 codec rejected the payload or the parameter set
    #[error("address codec error: {message}")]
    Codec { message: String },
}

impl AddressError {
    /// Create a codec error
    pub fn codec(message: impl Into<String>) -> Self {
        Self::Codec {
            message: message.into(),
        }
    }
}
