use anchor_lang::prelude::*;
use wormhole_anchor_sdk::token_bridge::{TokenBridge, TransferTokensWithPayload};

use crate::{
    amounts,
    custody::{token_account, TokenCustody},
    error::HelloTokenError,
    message::HelloTokenMessage,
    HelloToken,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SendTokensWithPayload {
    pub token: Pubkey,
    /// Amount in the token's local decimals. Dust below 8 decimals stays with
    /// the sender.
    pub amount: u64,
    pub target_chain: u16,
    /// AKA nonce. Zero opts out of batching.
    pub batch_id: u32,
    /// Universal address of the recipient on `target_chain`.
    pub target_recipient: [u8; 32],
    /// Ask the target contract to unwrap to native currency on delivery.
    pub is_native: bool,
    /// The sender pays in native currency, which is wrapped into `token`
    /// (must be the wrapped native mint) first.
    pub wrap_native: bool,
}

impl HelloToken {
    /// Bridge `args.amount` of `args.token` from `sender` to the registered
    /// Hello Token contract on `args.target_chain`, with a Hello message
    /// naming the final recipient. Returns the Wormhole sequence of the
    /// transfer.
    pub fn send_tokens_with_payload<B, C>(
        &self,
        token_bridge: &mut B,
        custody: &mut C,
        sender: &Pubkey,
        args: SendTokensWithPayload,
    ) -> Result<u64>
    where
        B: TokenBridge,
        C: TokenCustody,
    {
        require!(args.amount > 0, HelloTokenError::ZeroAmount);
        require!(
            args.target_recipient != [0; 32],
            HelloTokenError::ZeroRecipient
        );
        require!(args.token != Pubkey::default(), HelloTokenError::ZeroToken);

        // The recipient contract always comes from the registry.
        let foreign_contract = self
            .foreign_contracts
            .get(args.target_chain)
            .ok_or(HelloTokenError::UnregisteredTargetContract)?;

        if args.wrap_native {
            require!(
                self.config.is_wrapped_native(&args.token),
                HelloTokenError::InvalidNativeToken
            );
        }

        let decimals = custody.decimals(&args.token)?;
        let amount = amounts::truncate(args.amount, decimals)?;
        require!(amount > 0, HelloTokenError::ZeroAmount);

        let payload = HelloTokenMessage {
            target_recipient: args.target_recipient,
            relayer_fee: self.config.relayer_fee,
            is_native: args.is_native,
        }
        .encode();

        if args.wrap_native {
            custody.wrap_native(sender, amount)?;
        } else {
            custody.deposit(sender, &args.token, amount)?;
        }

        let dispatched = token_bridge.transfer_tokens_with_payload(TransferTokensWithPayload {
            token: args.token,
            amount,
            recipient_chain: args.target_chain,
            recipient: foreign_contract.address,
            batch_id: args.batch_id,
            payload,
            finality: self.config.finality,
        });
        let sequence = match dispatched {
            Ok(sequence) => sequence,
            Err(e) => {
                // The tokens never left custody. Hand them back.
                msg!("Token Bridge transfer failed, refunding {}: {}", amount, e);
                Self::refund(custody, sender, &args.token, amount, args.wrap_native)?;
                return Err(e);
            }
        };

        msg!(
            "Sent {} (truncated from {}) to chain {}, sequence={}",
            amount,
            args.amount,
            args.target_chain,
            sequence
        );

        Ok(sequence)
    }

    fn refund<C>(
        custody: &mut C,
        sender: &Pubkey,
        token: &Pubkey,
        amount: u64,
        native: bool,
    ) -> Result<()>
    where
        C: TokenCustody,
    {
        if native {
            custody.unwrap_native(amount)?;
            custody.transfer_native(sender, amount)
        } else {
            custody.transfer(token, &token_account(sender, token), amount)
        }
    }
}
