use anchor_lang::prelude::*;

use crate::{error::HelloTokenError, HelloToken};

impl HelloToken {
    fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require!(self.config.is_owner(caller), HelloTokenError::NotOwner);
        Ok(())
    }

    /// Trust `address` as the Hello Token contract on `chain`, replacing any
    /// contract registered there before. Its transfers must be attested by
    /// `token_bridge_foreign_endpoint`, the Token Bridge emitter on `chain`.
    pub fn register_emitter(
        &mut self,
        caller: &Pubkey,
        chain: u16,
        address: [u8; 32],
        token_bridge_foreign_endpoint: [u8; 32],
    ) -> Result<()> {
        self.require_owner(caller)?;

        // The local chain is never a foreign chain.
        require!(
            chain > 0 && chain != self.config.chain,
            HelloTokenError::InvalidChainId
        );
        require!(
            address != [0; 32] && token_bridge_foreign_endpoint != [0; 32],
            HelloTokenError::InvalidEmitterAddress
        );

        self.foreign_contracts
            .insert(chain, address, token_bridge_foreign_endpoint);
        msg!("Registered foreign contract: chain={}", chain);

        Ok(())
    }

    pub fn update_relayer_fee(&mut self, caller: &Pubkey, relayer_fee: u32) -> Result<()> {
        self.require_owner(caller)?;
        require!(
            relayer_fee <= self.config.relayer_fee_precision,
            HelloTokenError::InvalidRelayerFee
        );

        self.config.relayer_fee = relayer_fee;
        msg!(
            "Updated relayer fee: {}/{}",
            relayer_fee,
            self.config.relayer_fee_precision
        );

        Ok(())
    }

    /// Record the account that holds `token` for transfers to an
    /// account-model chain.
    pub fn register_token_account(
        &mut self,
        caller: &Pubkey,
        token: Pubkey,
        account: [u8; 32],
    ) -> Result<()> {
        self.require_owner(caller)?;
        require!(token != Pubkey::default(), HelloTokenError::ZeroToken);
        require!(account != [0; 32], HelloTokenError::InvalidTokenAccount);

        self.token_accounts.insert(token, account);

        Ok(())
    }
}
