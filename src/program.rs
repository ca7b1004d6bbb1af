//! # Control-Program Classifier
//!
//! Both chains reuse Bitcoin's segregated-witness templates for standard
//! programs: `OP_0 <20-byte pubkey hash>` and `OP_0 <32-byte script hash>`.
//! The unspendable marker is a leading `OP_FAIL`, which shares its opcode
//! value (0x6a) with Bitcoin's `OP_RETURN`.

use bitcoin::Script;

/// Witness form of a control program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramClass {
    /// Pay to witness pubkey hash
    P2wpkh([u8; 20]),
    /// Pay to witness script hash
    P2wsh([u8; 32]),
    /// Anything else, including unspendable programs
    Other,
}

/// Classify a control program. Total and pure.
pub fn classify(program: &[u8]) -> ProgramClass {
    let script = Script::from_bytes(program);

    if script.is_p2wpkh() {
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&program[2..22]);
        ProgramClass::P2wpkh(hash)
    } else if script.is_p2wsh() {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&program[2..34]);
        ProgramClass::P2wsh(hash)
    } else {
        ProgramClass::Other
    }
}

/// Whether the program can never be satisfied (retirement marker)
pub fn is_unspendable(program: &[u8]) -> bool {
    Script::from_bytes(program).is_op_return()
}
