//! # Configuration Constants
//!
//! Chain names, asset identifiers and environment variable names used by the
//! annotator and its command-line front end.

/// Chain-name tokens and defaults
pub mod chain {
    /// Mainchain token
    pub const BYTOM: &str = "bytom";

    /// Sidechain token
    pub const VAPOR: &str = "vapor";

    /// Chain used when neither a flag nor the environment names one
    pub const DEFAULT_CHAIN: &str = VAPOR;

    /// Network used when neither a flag nor the environment names one
    pub const DEFAULT_NETWORK: &str = "mainnet";
}

/// Asset constants shared by both chains
pub mod asset {
    /// Native fee asset id (BTM), 32 bytes of `0xff` on both chains.
    ///
    /// Coinbase inputs carry no asset of their own; the annotator reports this
    /// id for them.
    pub const NATIVE_ASSET_ID: [u8; 32] = [0xff; 32];
}

/// Environment variable names
pub mod env {
    /// Chain name override
    pub const CHAIN: &str = "TX_ANNOTATE_CHAIN";

    /// Network override
    pub const NETWORK: &str = "TX_ANNOTATE_NETWORK";
}
