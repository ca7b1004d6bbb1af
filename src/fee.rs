//! # Fee Aggregator
//!
//! The fee is the native-asset value that enters a transaction and does not
//! leave it. Other assets are ignored: multi-asset transactions are not
//! assumed to balance per asset here. Every sum is checked; a wrong fee is
//! worse than a failed decode.

use crate::entry::{Hash, RawTx};
use crate::error::ArithmeticError;

/// Native-asset totals that make up a fee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeBreakdown {
    pub total_input: u64,
    pub total_output: u64,
}

impl FeeBreakdown {
    /// Net fee as a signed value
    pub fn net(&self) -> Result<i64, ArithmeticError> {
        let fee = self
            .total_input
            .checked_sub(self.total_output)
            .ok_or(ArithmeticError::Underflow {
                inputs: self.total_input,
                outputs: self.total_output,
            })?;
        i64::try_from(fee).map_err(|_| ArithmeticError::OutOfRange { fee })
    }
}

/// Sum native-asset amounts over inputs and outputs.
///
/// Returns `None` for coinbase transactions, which mint value and pay no fee.
pub fn breakdown(tx: &RawTx, fee_asset: &Hash) -> Result<Option<FeeBreakdown>, ArithmeticError> {
    if tx.inputs.iter().any(|input| input.is_coinbase()) {
        return Ok(None);
    }

    let mut total_input: u64 = 0;
    for asset_amount in tx.inputs.iter().filter_map(|input| input.asset_amount()) {
        if asset_amount.asset_id == *fee_asset {
            total_input = total_input
                .checked_add(asset_amount.amount)
                .ok_or(ArithmeticError::Overflow { side: "input" })?;
        }
    }

    let mut total_output: u64 = 0;
    for output in tx.outputs.iter().filter(|output| output.asset_id == *fee_asset) {
        total_output = total_output
            .checked_add(output.amount)
            .ok_or(ArithmeticError::Overflow { side: "output" })?;
    }

    Ok(Some(FeeBreakdown {
        total_input,
        total_output,
    }))
}

/// Net fee in units of the fee asset
pub fn compute_fee(tx: &RawTx, fee_asset: &Hash) -> Result<i64, ArithmeticError> {
    match breakdown(tx, fee_asset)? {
        Some(totals) => totals.net(),
        None => Ok(0),
    }
}
