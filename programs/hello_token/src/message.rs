use anchor_lang::prelude::*;
use std::io;
use wormhole_io::{Readable, Writeable};

use crate::error::HelloTokenError;

pub const PAYLOAD_ID_HELLO: u8 = 1;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Payload carried inside a Token Bridge transfer with payload. Its only
/// kind is the Hello message (payload ID == 1), emitted by
/// [`send_tokens_with_payload`](crate::HelloToken::send_tokens_with_payload).
///
/// Layout (big-endian):
/// ```text
/// 0   payload_id        u8 (== 1)
/// 1   target_recipient  [u8; 32]
/// 33  relayer_fee       u32
/// 37  is_native         u8 (0 or 1)
/// ```
pub struct HelloTokenMessage {
    /// Universal address of the final recipient on the target chain.
    pub target_recipient: [u8; 32],
    /// Relayer fee, relative to the relayer fee precision.
    pub relayer_fee: u32,
    /// Unwrap to the native currency on delivery.
    pub is_native: bool,
}

impl HelloTokenMessage {
    pub const LEN: usize = 1 // payload_id
        + 32 // target_recipient
        + 4 // relayer_fee
        + 1 // is_native
    ;

    pub fn payload_id(&self) -> u8 {
        PAYLOAD_ID_HELLO
    }

    pub fn encode(&self) -> Vec<u8> {
        self.to_vec()
    }

    /// Strict decode: the buffer must be exactly one Hello message.
    pub fn decode(buf: &[u8]) -> Result<Self> {
        let payload_id = *buf.first().ok_or(HelloTokenError::InvalidPayloadLength)?;
        require!(payload_id == PAYLOAD_ID_HELLO, HelloTokenError::InvalidPayloadId);
        require!(buf.len() == Self::LEN, HelloTokenError::InvalidPayloadLength);
        require!(buf[37] <= 1, HelloTokenError::InvalidNativeFlag);

        Self::read(&mut &buf[..]).map_err(|_| error!(HelloTokenError::InvalidPayloadLength))
    }
}

impl Writeable for HelloTokenMessage {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(&[PAYLOAD_ID_HELLO])?;
        writer.write_all(&self.target_recipient)?;
        writer.write_all(&self.relayer_fee.to_be_bytes())?;
        writer.write_all(&[u8::from(self.is_native)])?;

        Ok(())
    }

    fn written_size(&self) -> usize {
        Self::LEN
    }
}

impl Readable for HelloTokenMessage {
    const SIZE: Option<usize> = Some(HelloTokenMessage::LEN);

    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        let mut payload_id = 0u8;
        reader.read_exact(std::slice::from_mut(&mut payload_id))?;
        if payload_id != PAYLOAD_ID_HELLO {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "invalid payload ID"));
        }

        let mut target_recipient = [0u8; 32];
        reader.read_exact(&mut target_recipient)?;

        let relayer_fee = {
            let mut out = [0u8; 4];
            reader.read_exact(&mut out)?;
            u32::from_be_bytes(out)
        };

        let is_native = {
            let mut out = 0u8;
            reader.read_exact(std::slice::from_mut(&mut out))?;
            match out {
                0 => false,
                1 => true,
                _ => {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "invalid native flag"))
                }
            }
        };

        Ok(HelloTokenMessage {
            target_recipient,
            relayer_fee,
            is_native,
        })
    }
}
