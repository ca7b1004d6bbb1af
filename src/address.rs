//! # Address Resolver
//!
//! Turns a classified control program into its bech32 segwit address under a
//! network parameter set. Derivation is best effort: anything that cannot be
//! encoded yields `None` and the caller omits the address.

use crate::error::AddressError;
use crate::profile::NetParams;
use crate::program::{classify, ProgramClass};
use bitcoin::bech32::{segwit, Hrp};

/// Encode a version-0 witness program under the parameter set's prefix
pub fn encode_witness_v0(hash: &[u8], params: &NetParams) -> Result<String, AddressError> {
    let hrp = Hrp::parse(params.bech32_hrp).map_err(|e| AddressError::codec(e.to_string()))?;
    segwit::encode_v0(hrp, hash).map_err(|e| AddressError::codec(e.to_string()))
}

/// Address for a classified program, or the reason there is none
pub fn try_resolve(class: &ProgramClass, params: &NetParams) -> Result<String, AddressError> {
    match class {
        ProgramClass::P2wpkh(hash) => encode_witness_v0(hash, params),
        ProgramClass::P2wsh(hash) => encode_witness_v0(hash, params),
        ProgramClass::Other => Err(AddressError::UnrecognizedProgram),
    }
}

/// Address for a classified program; failures degrade to `None`
pub fn resolve(class: &ProgramClass, params: &NetParams) -> Option<String> {
    match try_resolve(class, params) {
        Ok(address) => Some(address),
        Err(AddressError::UnrecognizedProgram) => None,
        Err(e) => {
            log::debug!("no {} address: {}", params.name, e);
            None
        }
    }
}

/// Classify and resolve in one step
pub fn address_of(program: &[u8], params: &NetParams) -> Option<String> {
    resolve(&classify(program), params)
}
