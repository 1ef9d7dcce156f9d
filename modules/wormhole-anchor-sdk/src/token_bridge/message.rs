use anchor_lang::prelude::Pubkey;
use std::io;
use wormhole_io::{Readable, Writeable};

use crate::wormhole::CHAIN_ID_SOLANA;

pub const PAYLOAD_ID_TRANSFER: u8 = 1;
pub const PAYLOAD_ID_ASSET_META: u8 = 2;
pub const PAYLOAD_ID_TRANSFER_WITH_PAYLOAD: u8 = 3;

/// Fixed part of a transfer with payload, payload ID included.
pub const TRANSFER_HEADER_LEN: usize = 1 // payload_id
    + 32 // amount
    + 32 // token_address
    + 2 // token_chain
    + 32 // to_address
    + 2 // to_chain
    + 32 // from_address
;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferHeader {
    /// Amount being transferred (big-endian uint256 -> u64), 8 decimals max.
    pub amount: u64,
    /// Address of the token. Left-zero-padded if shorter than 32 bytes
    pub token_address: [u8; 32],
    /// Chain ID of the token
    pub token_chain: u16,
    /// Address of the recipient. Left-zero-padded if shorter than 32 bytes
    pub to_address: [u8; 32],
    /// Chain ID of the recipient
    pub to_chain: u16,
    /// Sender of the transfer, i.e. the contract that called the Token Bridge
    pub from_address: [u8; 32],
}

impl Writeable for TransferHeader {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(&[PAYLOAD_ID_TRANSFER_WITH_PAYLOAD])?;

        let mut amount = [0u8; 32];
        amount[24..].copy_from_slice(&self.amount.to_be_bytes());
        writer.write_all(&amount)?;

        writer.write_all(&self.token_address)?;
        writer.write_all(&self.token_chain.to_be_bytes())?;
        writer.write_all(&self.to_address)?;
        writer.write_all(&self.to_chain.to_be_bytes())?;
        writer.write_all(&self.from_address)?;

        Ok(())
    }

    fn written_size(&self) -> usize {
        TRANSFER_HEADER_LEN
    }
}

impl Readable for TransferHeader {
    const SIZE: Option<usize> = Some(TRANSFER_HEADER_LEN);

    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        let mut payload_id = 0u8;
        reader.read_exact(std::slice::from_mut(&mut payload_id))?;
        if payload_id != PAYLOAD_ID_TRANSFER_WITH_PAYLOAD {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid Token Bridge Transfer With Payload",
            ));
        }

        // Encoded amount must fit in the last 8 bytes of the uint256.
        let amount = {
            let mut buf = [0u8; 32];
            reader.read_exact(&mut buf)?;
            if buf[..24].iter().any(|b| *b != 0) {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "Token Bridge amount exceeds u64",
                ));
            }
            let mut out = [0u8; 8];
            out.copy_from_slice(&buf[24..]);
            u64::from_be_bytes(out)
        };

        let mut token_address = [0u8; 32];
        reader.read_exact(&mut token_address)?;

        let token_chain = {
            let mut buf = [0u8; 2];
            reader.read_exact(&mut buf)?;
            u16::from_be_bytes(buf)
        };

        let mut to_address = [0u8; 32];
        reader.read_exact(&mut to_address)?;

        let to_chain = {
            let mut buf = [0u8; 2];
            reader.read_exact(&mut buf)?;
            u16::from_be_bytes(buf)
        };

        let mut from_address = [0u8; 32];
        reader.read_exact(&mut from_address)?;

        Ok(TransferHeader {
            amount,
            token_address,
            token_chain,
            to_address,
            to_chain,
            from_address,
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Token Bridge Transfer With Payload data. This data is found as the payload
/// of a posted Wormhole message. The application payload is kept opaque.
pub struct TransferWithPayload {
    meta: TransferHeader,
    payload: Vec<u8>,
}

impl TransferWithPayload {
    pub fn new(meta: TransferHeader, payload: Vec<u8>) -> Self {
        Self { meta, payload }
    }

    pub fn amount(&self) -> u64 {
        self.meta.amount
    }

    pub fn token_address(&self) -> &[u8; 32] {
        &self.meta.token_address
    }

    /// Local mint of the transferred token, if the token is native to Solana.
    pub fn mint(&self) -> Option<Pubkey> {
        (self.token_chain() == CHAIN_ID_SOLANA)
            .then(|| Pubkey::new_from_array(*self.token_address()))
    }

    pub fn token_chain(&self) -> u16 {
        self.meta.token_chain
    }

    pub fn to_address(&self) -> &[u8; 32] {
        &self.meta.to_address
    }

    pub fn to_chain(&self) -> u16 {
        self.meta.to_chain
    }

    pub fn from_address(&self) -> &[u8; 32] {
        &self.meta.from_address
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn encode(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl Writeable for TransferWithPayload {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let Self { meta, payload } = self;

        meta.write(writer)?;
        writer.write_all(payload)?;

        Ok(())
    }

    fn written_size(&self) -> usize {
        let Self { meta, payload } = self;

        meta.written_size() + payload.len()
    }
}

impl Readable for TransferWithPayload {
    const SIZE: Option<usize> = None;

    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        let meta = TransferHeader::read(reader)?;
        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;

        Ok(TransferWithPayload { meta, payload })
    }
}

/// Parse the Token Bridge transfer carried by a verified Wormhole message.
pub fn parse_transfer_with_payload(mut buf: &[u8]) -> io::Result<TransferWithPayload> {
    TransferWithPayload::read(&mut buf)
}
