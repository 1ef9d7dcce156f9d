use anchor_lang::prelude::*;
use std::collections::HashMap;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
/// Foreign contract account data.
pub struct ForeignContract {
    /// Contract's chain. Cannot equal the local chain ID.
    pub chain: u16,
    /// Contract's address. Cannot be zero address.
    pub address: [u8; 32],
    /// Token Bridge emitter on `chain`. Transfers sent by the contract are
    /// attested by this emitter.
    pub token_bridge_foreign_endpoint: [u8; 32],
}

impl ForeignContract {
    pub const MAXIMUM_SIZE: usize = 8 // discriminator
        + 2 // chain
        + 32 // address
        + 32 // token_bridge_foreign_endpoint
    ;

    /// Convenience method to check whether an address equals the one saved in
    /// this account.
    pub fn verify(&self, address: &[u8; 32]) -> bool {
        *address == self.address
    }
}

#[derive(Default, Debug)]
/// The one trusted contract per foreign chain. Absent means untrusted.
pub struct ForeignContracts {
    by_chain: HashMap<u16, ForeignContract>,
}

impl ForeignContracts {
    /// Overwrites any contract registered for `chain`.
    pub fn insert(
        &mut self,
        chain: u16,
        address: [u8; 32],
        token_bridge_foreign_endpoint: [u8; 32],
    ) {
        self.by_chain.insert(
            chain,
            ForeignContract {
                chain,
                address,
                token_bridge_foreign_endpoint,
            },
        );
    }

    pub fn get(&self, chain: u16) -> Option<&ForeignContract> {
        self.by_chain.get(&chain)
    }

    pub fn len(&self) -> usize {
        self.by_chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_chain.is_empty()
    }
}
