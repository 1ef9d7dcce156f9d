use anchor_lang::prelude::*;

use crate::{
    error::HelloTokenError,
    state::{Config, ForeignContracts, ForeignTokenAccounts, ReceivedLedger},
    HelloToken,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InitializeArgs {
    /// Wormhole chain ID of the chain this program runs on.
    pub chain: u16,
    pub finality: u8,
    pub relayer_fee: u32,
    pub relayer_fee_precision: u32,
    pub wrapped_native: Pubkey,
}

impl HelloToken {
    /// Create the program config. `owner` is the only account allowed to
    /// register foreign contracts and change the relayer fee afterwards.
    pub fn initialize(owner: Pubkey, args: InitializeArgs) -> Result<Self> {
        require!(owner != Pubkey::default(), HelloTokenError::NotOwner);
        require!(args.chain != 0, HelloTokenError::InvalidChainId);
        require!(args.finality > 0, HelloTokenError::InvalidFinality);
        require!(
            args.relayer_fee_precision > 0,
            HelloTokenError::InvalidRelayerFeePrecision
        );
        require!(
            args.relayer_fee <= args.relayer_fee_precision,
            HelloTokenError::InvalidRelayerFee
        );

        let config = Config {
            owner,
            chain: args.chain,
            finality: args.finality,
            relayer_fee: args.relayer_fee,
            relayer_fee_precision: args.relayer_fee_precision,
            wrapped_native: args.wrapped_native,
        };
        msg!(
            "Initialized: chain={}, finality={}, relayer_fee={}/{}",
            config.chain,
            config.finality,
            config.relayer_fee,
            config.relayer_fee_precision
        );

        Ok(HelloToken {
            config,
            foreign_contracts: ForeignContracts::default(),
            received: ReceivedLedger::default(),
            token_accounts: ForeignTokenAccounts::default(),
        })
    }
}
