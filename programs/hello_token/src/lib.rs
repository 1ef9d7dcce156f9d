use anchor_lang::prelude::*;

pub use amounts::*;
pub use custody::*;
pub use error::*;
pub use instructions::*;
pub use message::*;
pub use state::*;

pub mod amounts;
pub mod custody;
pub mod error;
pub mod instructions;
pub mod message;
pub mod state;

#[cfg(test)]
mod testing;

// WARNING: This should be the pubkey of your program's keypair
declare_id!("GDch61JmJpTo9npwenypnk3KdofmozK1hNaTdbYRkNPb");

/// Hello Token program state: the config, the foreign contracts it trusts,
/// the Wormhole messages it already redeemed and the token accounts it
/// knows for account-model chains.
///
/// Mutating instructions take `&mut self` and so run one at a time.
/// Redemption takes `&self`; the received ledger makes concurrent redemptions
/// of the same message safe.
#[derive(Debug)]
pub struct HelloToken {
    config: Config,
    foreign_contracts: ForeignContracts,
    received: ReceivedLedger,
    token_accounts: ForeignTokenAccounts,
}

impl HelloToken {
    /// Universal address of this program, i.e. where inbound transfers must
    /// be sent.
    pub fn address() -> [u8; 32] {
        ID.to_bytes()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn owner(&self) -> Pubkey {
        self.config.owner
    }

    pub fn chain_id(&self) -> u16 {
        self.config.chain
    }

    pub fn wormhole_finality(&self) -> u8 {
        self.config.finality
    }

    pub fn relayer_fee(&self) -> u32 {
        self.config.relayer_fee
    }

    pub fn relayer_fee_precision(&self) -> u32 {
        self.config.relayer_fee_precision
    }

    pub fn registered_emitter(&self, chain: u16) -> Option<[u8; 32]> {
        self.foreign_contracts.get(chain).map(|c| c.address)
    }

    /// Token Bridge emitter trusted to attest transfers from `chain`.
    pub fn token_bridge_foreign_endpoint(&self, chain: u16) -> Option<[u8; 32]> {
        self.foreign_contracts
            .get(chain)
            .map(|c| c.token_bridge_foreign_endpoint)
    }

    pub fn token_account(&self, token: &Pubkey) -> Option<[u8; 32]> {
        self.token_accounts.get(token).map(|a| a.account)
    }

    pub fn is_message_consumed(&self, message_hash: &[u8; 32]) -> bool {
        self.received.is_consumed(message_hash)
    }

    pub fn received(&self, message_hash: &[u8; 32]) -> Option<Received> {
        self.received.get(message_hash)
    }
}
