use std::io;
use wormhole_io::{Readable, Writeable};

use super::{MessageData, GUARDIAN_SIGNATURE_LEN, VAA_HEADER_LEN, VAA_VERSION};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Guardian signature over the body hash, prefixed with the guardian's
/// position in its guardian set.
pub struct GuardianSignature {
    pub index: u8,
    pub signature: [u8; 65],
}

impl Default for GuardianSignature {
    fn default() -> Self {
        Self {
            index: 0,
            signature: [0; 65],
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Signed envelope produced by the guardians. Parsing one does not verify
/// it; that is the core bridge's job (see [`CoreBridge`](super::CoreBridge)).
pub struct Vaa {
    pub version: u8,
    pub guardian_set_index: u32,
    pub signatures: Vec<GuardianSignature>,
    pub body: MessageData,
}

impl Vaa {
    pub fn parse(mut buf: &[u8]) -> io::Result<Self> {
        Self::read(&mut buf)
    }

    /// Fails if there are more signatures than the one-byte count can hold.
    pub fn encode(&self) -> io::Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.written_size());
        self.write(&mut buf)?;
        Ok(buf)
    }
}

impl Writeable for Vaa {
    fn write<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let num_signatures = u8::try_from(self.signatures.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many signatures"))?;

        writer.write_all(&[self.version])?;
        writer.write_all(&self.guardian_set_index.to_be_bytes())?;
        writer.write_all(&[num_signatures])?;
        for sig in &self.signatures {
            writer.write_all(&[sig.index])?;
            writer.write_all(&sig.signature)?;
        }
        self.body.write(writer)
    }

    fn written_size(&self) -> usize {
        VAA_HEADER_LEN
            + self.signatures.len() * GUARDIAN_SIGNATURE_LEN
            + self.body.written_size()
    }
}

impl Readable for Vaa {
    const SIZE: Option<usize> = None;

    fn read<R>(reader: &mut R) -> io::Result<Self>
    where
        Self: Sized,
        R: io::Read,
    {
        let mut version = 0u8;
        reader.read_exact(std::slice::from_mut(&mut version))?;
        if version != VAA_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Invalid VAA Version",
            ));
        }

        let guardian_set_index = {
            let mut buf = [0u8; 4];
            reader.read_exact(&mut buf)?;
            u32::from_be_bytes(buf)
        };

        let mut num_signatures = 0u8;
        reader.read_exact(std::slice::from_mut(&mut num_signatures))?;

        let mut signatures = Vec::with_capacity(num_signatures.into());
        for _ in 0..num_signatures {
            let mut index = 0u8;
            reader.read_exact(std::slice::from_mut(&mut index))?;
            let mut signature = [0u8; 65];
            reader.read_exact(&mut signature)?;
            signatures.push(GuardianSignature { index, signature });
        }

        Ok(Vaa {
            version,
            guardian_set_index,
            signatures,
            body: MessageData::read(reader)?,
        })
    }
}
