use anchor_lang::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Arguments of a Token Bridge transfer with payload.
pub struct TransferTokensWithPayload {
    /// Local token being bridged.
    pub token: Pubkey,
    /// Amount in the token's local decimals. Must not carry precision below
    /// 8 decimals, the Token Bridge would keep it as dust.
    pub amount: u64,
    pub recipient_chain: u16,
    /// Contract on `recipient_chain` that redeems the transfer.
    pub recipient: [u8; 32],
    pub batch_id: u32,
    /// Application payload, delivered untouched to `recipient`.
    pub payload: Vec<u8>,
    /// Consistency level of the Wormhole message.
    pub finality: u8,
}

/// Token Bridge, seen from an integrating program.
pub trait TokenBridge {
    /// Lock (native) or burn (wrapped) `amount` of `token` held by the caller
    /// and emit a transfer with payload. Returns the Wormhole sequence.
    fn transfer_tokens_with_payload(&mut self, args: TransferTokensWithPayload) -> Result<u64>;

    /// Redeem a verified transfer with payload addressed to `redeemer`,
    /// releasing the tokens into the redeemer's custody. Returns the local
    /// mint of the released tokens.
    fn complete_transfer_with_payload(
        &mut self,
        encoded_vm: &[u8],
        redeemer: &Pubkey,
    ) -> Result<Pubkey>;
}
