use anchor_lang::prelude::error_code;

#[error_code]
pub enum HelloTokenError {
    #[msg("NotOwner")]
    /// Only the program's owner is permitted.
    NotOwner,

    #[msg("InvalidChainId")]
    /// Chain ID is zero or the local chain.
    InvalidChainId,

    #[msg("InvalidEmitterAddress")]
    /// Emitter address is the zero address.
    InvalidEmitterAddress,

    #[msg("InvalidFinality")]
    /// Wormhole finality must be nonzero.
    InvalidFinality,

    #[msg("InvalidRelayerFeePrecision")]
    /// Relayer fee precision must be nonzero.
    InvalidRelayerFeePrecision,

    #[msg("InvalidRelayerFee")]
    /// Relayer fee exceeds the configured precision.
    InvalidRelayerFee,

    #[msg("InvalidTokenAccount")]
    /// Associated token account is the zero address.
    InvalidTokenAccount,

    #[msg("ZeroAmount")]
    /// Nothing to transfer if amount is zero (after truncation).
    ZeroAmount,

    #[msg("ZeroRecipient")]
    ZeroRecipient,

    #[msg("ZeroToken")]
    ZeroToken,

    #[msg("UnregisteredTargetContract")]
    /// No foreign contract registered for the target chain.
    UnregisteredTargetContract,

    #[msg("InvalidNativeToken")]
    /// Native currency can only be wrapped into the wrapped native token.
    InvalidNativeToken,

    #[msg("AmountOverflow")]
    AmountOverflow,

    #[msg("InvalidPayloadId")]
    InvalidPayloadId,

    #[msg("InvalidPayloadLength")]
    InvalidPayloadLength,

    #[msg("InvalidNativeFlag")]
    /// Native flag byte is neither 0 nor 1.
    InvalidNativeFlag,

    #[msg("InvalidEnvelope")]
    /// Wormhole rejected the signed message.
    InvalidEnvelope,

    #[msg("UnknownSender")]
    /// Message did not originate from the registered foreign contract.
    UnknownSender,

    #[msg("InvalidTransferPayload")]
    /// Wormhole message does not carry a Token Bridge transfer with payload.
    InvalidTransferPayload,

    #[msg("InvalidTransferToChain")]
    InvalidTransferToChain,

    #[msg("InvalidTransferToAddress")]
    InvalidTransferToAddress,

    #[msg("MessageAlreadyConsumed")]
    MessageAlreadyConsumed,

    #[msg("MessageNotConsumed")]
    /// Archival write for a message that was never consumed.
    MessageNotConsumed,

    #[msg("UndeliverableMessage")]
    /// Message was consumed but could not be delivered. Needs manual
    /// reconciliation.
    UndeliverableMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How callers should react to an error.
pub enum ErrorClass {
    /// Bad input. Rejected before any side effect, retry with corrected input.
    Validation,
    /// Caller lacks the owner privilege.
    Authorization,
    /// Misconfiguration or an attack. Worth an operator's attention.
    Trust,
    /// Message already delivered. Expected under concurrent redelivery.
    Replay,
    /// Message consumed but undelivered.
    Integrity,
}

impl HelloTokenError {
    pub fn class(&self) -> ErrorClass {
        match self {
            HelloTokenError::NotOwner => ErrorClass::Authorization,
            HelloTokenError::InvalidEnvelope
            | HelloTokenError::UnknownSender
            | HelloTokenError::InvalidTransferPayload
            | HelloTokenError::InvalidTransferToChain
            | HelloTokenError::InvalidTransferToAddress => ErrorClass::Trust,
            HelloTokenError::MessageAlreadyConsumed => ErrorClass::Replay,
            HelloTokenError::MessageNotConsumed | HelloTokenError::UndeliverableMessage => {
                ErrorClass::Integrity
            }
            _ => ErrorClass::Validation,
        }
    }
}
