use anchor_lang::prelude::*;
use wormhole_anchor_sdk::{
    token_bridge::{self, TokenBridge, TransferWithPayload},
    wormhole::CoreBridge,
};

use crate::{
    amounts,
    custody::{token_account, TokenCustody},
    error::HelloTokenError,
    message::HelloTokenMessage,
    HelloToken,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of a successful redemption.
pub struct Redemption {
    /// Keccak256 hash of the redeemed Wormhole message.
    pub message_hash: [u8; 32],
    pub sequence: u64,
    pub emitter_chain: u16,
    /// Local mint released by the Token Bridge.
    pub mint: Pubkey,
    pub recipient: Pubkey,
    /// Amount delivered to the recipient, in the mint's decimals.
    pub amount: u64,
    /// Amount paid to the caller, in the mint's decimals.
    pub relayer_fee: u64,
    /// The recipient was paid in native currency.
    pub native: bool,
}

impl HelloToken {
    /// Redeem a Token Bridge transfer sent by a registered Hello Token
    /// contract and pay out its Hello message: the relayer fee to `caller`,
    /// the rest to the target recipient.
    ///
    /// Every check on the envelope and the transfer happens before the
    /// message is marked as consumed. Anything failing after that leaves the
    /// message consumed and is reported as `UndeliverableMessage`.
    pub fn redeem_transfer_with_payload<W, B, C>(
        &self,
        core_bridge: &W,
        token_bridge: &mut B,
        custody: &mut C,
        caller: &Pubkey,
        encoded_vaa: &[u8],
    ) -> Result<Redemption>
    where
        W: CoreBridge,
        B: TokenBridge,
        C: TokenCustody,
    {
        let vaa = core_bridge.parse_and_verify_vm(encoded_vaa).map_err(|e| {
            msg!("Rejected envelope: {}", e);
            error!(HelloTokenError::InvalidEnvelope)
        })?;

        let emitter_chain = vaa.emitter_chain();
        let foreign_contract = self.foreign_contracts.get(emitter_chain).ok_or_else(|| {
            msg!("No foreign contract registered for chain {}", emitter_chain);
            error!(HelloTokenError::UnknownSender)
        })?;
        if !vaa.verify_emitter(emitter_chain, &foreign_contract.token_bridge_foreign_endpoint) {
            msg!("Envelope not emitted by the Token Bridge on chain {}", emitter_chain);
            return err!(HelloTokenError::UnknownSender);
        }

        let transfer = token_bridge::parse_transfer_with_payload(vaa.payload())
            .map_err(|_| error!(HelloTokenError::InvalidTransferPayload))?;
        if !foreign_contract.verify(transfer.from_address()) {
            msg!("Transfer not sent by the contract registered for chain {}", emitter_chain);
            return err!(HelloTokenError::UnknownSender);
        }
        require!(
            transfer.to_chain() == self.config.chain,
            HelloTokenError::InvalidTransferToChain
        );
        require!(
            *transfer.to_address() == HelloToken::address(),
            HelloTokenError::InvalidTransferToAddress
        );

        let message_hash = vaa.message_hash();
        if let Err(e) = self
            .received
            .check_and_consume(&message_hash, vaa.batch_id())
        {
            msg!("Already redeemed: sequence={}", vaa.sequence());
            return Err(e);
        }

        // Point of no return.
        self.deliver(token_bridge, custody, caller, encoded_vaa, &transfer, &message_hash)
            .map(|(mint, recipient, amount, relayer_fee, native)| Redemption {
                message_hash,
                sequence: vaa.sequence(),
                emitter_chain,
                mint,
                recipient,
                amount,
                relayer_fee,
                native,
            })
            .map_err(|e| {
                msg!(
                    "FATAL: message {:?} consumed but not delivered: {}",
                    message_hash,
                    e
                );
                error!(HelloTokenError::UndeliverableMessage)
            })
    }

    fn deliver<B, C>(
        &self,
        token_bridge: &mut B,
        custody: &mut C,
        caller: &Pubkey,
        encoded_vaa: &[u8],
        transfer: &TransferWithPayload,
        message_hash: &[u8; 32],
    ) -> Result<(Pubkey, Pubkey, u64, u64, bool)>
    where
        B: TokenBridge,
        C: TokenCustody,
    {
        let message = HelloTokenMessage::decode(transfer.payload())?;
        self.received.record_body(message_hash, &message)?;
        require!(
            message.target_recipient != [0; 32],
            HelloTokenError::ZeroRecipient
        );
        let recipient = Pubkey::new_from_array(message.target_recipient);

        let mint = token_bridge.complete_transfer_with_payload(encoded_vaa, &crate::ID)?;
        let decimals = custody.decimals(&mint)?;
        let amount = amounts::denormalize(transfer.amount(), decimals)?;

        // Self-redemption pays no fee.
        let relayer_fee = if *caller == recipient {
            0
        } else {
            amounts::denormalize(
                amounts::relayer_cut(
                    transfer.amount(),
                    message.relayer_fee,
                    self.config.relayer_fee_precision,
                ),
                decimals,
            )?
        };
        let recipient_amount = amount
            .checked_sub(relayer_fee)
            .ok_or(HelloTokenError::AmountOverflow)?;

        if relayer_fee > 0 {
            custody.transfer(&mint, &token_account(caller, &mint), relayer_fee)?;
        }

        let native = message.is_native && self.config.is_wrapped_native(&mint);
        if native {
            custody.unwrap_native(recipient_amount)?;
            custody.transfer_native(&recipient, recipient_amount)?;
        } else {
            custody.transfer(&mint, &token_account(&recipient, &mint), recipient_amount)?;
        }

        msg!(
            "Redeemed {} to {} (relayer fee {}, native={})",
            recipient_amount,
            recipient,
            relayer_fee,
            native
        );

        Ok((mint, recipient, recipient_amount, relayer_fee, native))
    }
}
