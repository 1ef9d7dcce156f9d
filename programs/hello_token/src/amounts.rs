use anchor_lang::prelude::*;

use crate::error::HelloTokenError;

/// The Token Bridge carries amounts with at most this many decimals.
pub const MAX_DECIMALS: u8 = 8;

fn scale(decimals: u8) -> Option<u64> {
    10u64.checked_pow(u32::from(decimals.saturating_sub(MAX_DECIMALS)))
}

/// Convert `amount` in `decimals` to the Token Bridge's 8-decimal
/// representation. Truncates; precision below 8 decimals is dropped.
pub fn normalize(amount: u64, decimals: u8) -> u64 {
    match scale(decimals) {
        Some(divisor) => amount / divisor,
        // Divisor does not fit in u64, so it exceeds any amount.
        None => 0,
    }
}

/// Convert an 8-decimal amount back to `decimals`.
pub fn denormalize(amount: u64, decimals: u8) -> Result<u64> {
    scale(decimals)
        .and_then(|multiplier| amount.checked_mul(multiplier))
        .ok_or(error!(HelloTokenError::AmountOverflow))
}

/// Amount in `decimals` that survives a trip through the Token Bridge.
pub fn truncate(amount: u64, decimals: u8) -> Result<u64> {
    denormalize(normalize(amount, decimals), decimals)
}

/// Relayer's share of `amount`: `amount * relayer_fee / precision`, floored.
/// A fee larger than the amount pays nothing, so the recipient gets it all.
pub fn relayer_cut(amount: u64, relayer_fee: u32, precision: u32) -> u64 {
    if precision == 0 {
        return 0;
    }
    let cut = u128::from(amount) * u128::from(relayer_fee) / u128::from(precision);
    u64::try_from(cut)
        .ok()
        .filter(|cut| *cut <= amount)
        .unwrap_or(0)
}
