use anchor_lang::solana_program::keccak;
use std::io;
use wormhole_io::{Readable, Writeable};

use super::BODY_INDEX_PAYLOAD;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Body of an attested Wormhole message. This is the part of a VAA the
/// guardians sign, so it is also what identifies a message.
pub struct MessageData {
    /// Time the message was submitted
    pub timestamp: u32,

    /// Unique id for this message (a.k.a. batch ID)
    pub nonce: u32,

    /// Emitter of the message
    pub emitter_chain: u16,

    /// Emitter of the message
    pub emitter_address: [u8; 32],

    /// Sequence number of this message
    pub sequence: u64,

    /// Level of consistency requested by the emitter
    pub consistency_level: u8,

    /// Message payload
    pub payload: Vec<u8>,
}

impl MessageData {
    pub fn batch_id(&self) -> u32 {
        self.nonce
    }

    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    pub fn emitter_chain(&self) -> u16 {
        self.emitter_chain
    }

    pub fn emitter_address(&self) -> &[u8; 32] {
        &self.emitter_address
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Convenience method to check the emitter of this message.
    pub fn verify_emitter(&self, chain: u16, address: &[u8; 32]) -> bool {
        self.emitter_chain == chain && self.emitter_address == *address
    }

    /// Serialized body, i.e. the bytes the guardians sign over.
    pub fn body(&self) -> Vec<u8> {
        self.to_vec()
    }

    /// Keccak256 hash of the message body. Two VAAs carrying the same body
    /// (even with a different signature set) share this hash.
    pub fn message_hash(&self) -> [u8; 32] {
        keccak::hash(&self.body()).to_bytes()
    }
}

impl Writeable for MessageData {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(&self.timestamp.to_be_bytes())?;
        writer.write_all(&self.nonce.to_be_bytes())?;
        writer.write_all(&self.emitter_chain.to_be_bytes())?;
        writer.write_all(&self.emitter_address)?;
        writer.write_all(&self.sequence.to_be_bytes())?;
        writer.write_all(&[self.consistency_level])?;
        writer.write_all(&self.payload)?;

        Ok(())
    }

    fn written_size(&self) -> usize {
        BODY_INDEX_PAYLOAD + self.payload.len()
    }
}

impl Readable for MessageData {
    const SIZE: Option<usize> = None;

    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        let timestamp = {
            let mut buf = [0u8; 4];
            reader.read_exact(&mut buf)?;
            u32::from_be_bytes(buf)
        };

        let nonce = {
            let mut buf = [0u8; 4];
            reader.read_exact(&mut buf)?;
            u32::from_be_bytes(buf)
        };

        let emitter_chain = {
            let mut buf = [0u8; 2];
            reader.read_exact(&mut buf)?;
            u16::from_be_bytes(buf)
        };

        let mut emitter_address = [0u8; 32];
        reader.read_exact(&mut emitter_address)?;

        let sequence = {
            let mut buf = [0u8; 8];
            reader.read_exact(&mut buf)?;
            u64::from_be_bytes(buf)
        };

        let mut consistency_level = 0u8;
        reader.read_exact(std::slice::from_mut(&mut consistency_level))?;

        // The payload is whatever is left.
        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;

        Ok(MessageData {
            timestamp,
            nonce,
            emitter_chain,
            emitter_address,
            sequence,
            consistency_level,
            payload,
        })
    }
}
