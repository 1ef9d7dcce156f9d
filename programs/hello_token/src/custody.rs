use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

/// Token program and wrapped-native handling, from the point of view of the
/// program's custody account. Every token moved by the flows goes through
/// here.
pub trait TokenCustody {
    fn decimals(&self, mint: &Pubkey) -> Result<u8>;

    /// Pull `amount` of `mint` from `from` into custody.
    fn deposit(&mut self, from: &Pubkey, mint: &Pubkey, amount: u64) -> Result<()>;

    /// Pull `amount` of native currency from `from` and wrap it 1:1 into
    /// custody.
    fn wrap_native(&mut self, from: &Pubkey, amount: u64) -> Result<()>;

    /// Unwrap `amount` of wrapped native held in custody.
    fn unwrap_native(&mut self, amount: u64) -> Result<()>;

    /// Send `amount` of `mint` from custody to a token account.
    fn transfer(&mut self, mint: &Pubkey, to: &Pubkey, amount: u64) -> Result<()>;

    /// Send `amount` of (unwrapped) native currency from custody to a wallet.
    fn transfer_native(&mut self, to: &Pubkey, amount: u64) -> Result<()>;
}

/// Token account that holds `mint` for `wallet`.
pub fn token_account(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(wallet, mint)
}
