use anchor_lang::prelude::*;
use std::collections::HashMap;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
/// Associated token account that receives `token` on an account-model target
/// chain (Solana), where the recipient of a transfer is a token account
/// rather than a wallet.
pub struct ForeignTokenAccount {
    pub token: Pubkey,
    pub account: [u8; 32],
}

impl ForeignTokenAccount {
    pub const MAXIMUM_SIZE: usize = 8 // discriminator
        + 32 // token
        + 32 // account
    ;
}

#[derive(Default, Debug)]
pub struct ForeignTokenAccounts {
    by_token: HashMap<Pubkey, ForeignTokenAccount>,
}

impl ForeignTokenAccounts {
    /// Overwrites any account registered for `token`.
    pub fn insert(&mut self, token: Pubkey, account: [u8; 32]) {
        self.by_token
            .insert(token, ForeignTokenAccount { token, account });
    }

    pub fn get(&self, token: &Pubkey) -> Option<&ForeignTokenAccount> {
        self.by_token.get(token)
    }
}
