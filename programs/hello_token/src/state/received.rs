use anchor_lang::prelude::*;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

use crate::{error::HelloTokenError, message::HelloTokenMessage};

pub const MESSAGE_MAX_LENGTH: usize = HelloTokenMessage::LEN;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
/// Received account. Its existence marks a Wormhole message as consumed.
pub struct Received {
    /// AKA nonce.
    pub batch_id: u32,
    /// Keccak256 hash of verified Wormhole message.
    pub wormhole_message_hash: [u8; 32],
    /// Encoded [`HelloTokenMessage`], written once the message decodes.
    pub message: Vec<u8>,
}

impl Received {
    pub const MAXIMUM_SIZE: usize = 8 // discriminator
        + 4 // batch_id
        + 32 // wormhole_message_hash
        + 4 // Vec length
        + MESSAGE_MAX_LENGTH // message
    ;
}

#[derive(Default, Debug)]
/// Consumed Wormhole messages, keyed by message hash. Entries are never
/// removed.
pub struct ReceivedLedger {
    entries: Mutex<HashMap<[u8; 32], Received>>,
}

impl ReceivedLedger {
    fn entries(&self) -> MutexGuard<'_, HashMap<[u8; 32], Received>> {
        // Every write is a single insert, so a poisoned map is still sound.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark `message_hash` as consumed. Exactly one caller wins for a given
    /// hash; everyone else gets `MessageAlreadyConsumed`.
    pub fn check_and_consume(&self, message_hash: &[u8; 32], batch_id: u32) -> Result<()> {
        let mut entries = self.entries();
        require!(
            !entries.contains_key(message_hash),
            HelloTokenError::MessageAlreadyConsumed
        );
        entries.insert(
            *message_hash,
            Received {
                batch_id,
                wormhole_message_hash: *message_hash,
                message: Vec::new(),
            },
        );
        Ok(())
    }

    /// Archive the decoded message of a consumed hash. Only kept for
    /// observability.
    pub fn record_body(&self, message_hash: &[u8; 32], message: &HelloTokenMessage) -> Result<()> {
        let mut entries = self.entries();
        let received = entries
            .get_mut(message_hash)
            .ok_or(HelloTokenError::MessageNotConsumed)?;
        received.message = message.encode();
        Ok(())
    }

    pub fn is_consumed(&self, message_hash: &[u8; 32]) -> bool {
        self.entries().contains_key(message_hash)
    }

    pub fn get(&self, message_hash: &[u8; 32]) -> Option<Received> {
        self.entries().get(message_hash).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
