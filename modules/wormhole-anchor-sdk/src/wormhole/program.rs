use anchor_lang::prelude::*;

use super::MessageData;

/// Wormhole core bridge, seen from an integrating program. The core bridge is
/// trusted: a message it returns from
/// [`parse_and_verify_vm`](CoreBridge::parse_and_verify_vm) carries a quorum
/// of guardian signatures under the current guardian set.
pub trait CoreBridge {
    /// Parse a signed VAA and verify its signatures. Returns the attested
    /// body, or the core bridge's reason for rejecting it.
    fn parse_and_verify_vm(&self, encoded_vm: &[u8]) -> Result<MessageData>;

    /// Post a message as the calling emitter. Returns the sequence number
    /// assigned to it.
    fn publish_message(
        &mut self,
        batch_id: u32,
        payload: Vec<u8>,
        consistency_level: u8,
    ) -> Result<u64>;
}
