use anchor_lang::prelude::*;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
/// Program configuration. Created once by
/// [`initialize`](crate::HelloToken::initialize).
pub struct Config {
    /// Program's owner.
    pub owner: Pubkey,
    /// Wormhole chain ID of the chain this program runs on.
    pub chain: u16,
    /// AKA consistency level. Confirmations required before the guardians
    /// attest an outbound transfer.
    pub finality: u8,
    /// Relayer fee attached to outbound transfers, relative to
    /// `relayer_fee_precision`.
    pub relayer_fee: u32,
    pub relayer_fee_precision: u32,
    /// Wrapped native token mint (e.g. wrapped SOL). Native currency is
    /// wrapped into, and unwrapped from, this mint.
    pub wrapped_native: Pubkey,
}

impl Config {
    pub const MAXIMUM_SIZE: usize = 8 // discriminator
        + 32 // owner
        + 2 // chain
        + 1 // finality
        + 4 // relayer_fee
        + 4 // relayer_fee_precision
        + 32 // wrapped_native
    ;

    pub fn is_owner(&self, caller: &Pubkey) -> bool {
        self.owner == *caller
    }

    pub fn is_wrapped_native(&self, mint: &Pubkey) -> bool {
        self.wrapped_native != Pubkey::default() && self.wrapped_native == *mint
    }
}
