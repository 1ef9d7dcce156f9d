/// Wormhole chain ID of Solana.
pub const CHAIN_ID_SOLANA: u16 = 1;

/// Only VAA version the core bridge emits.
pub const VAA_VERSION: u8 = 1;

// vaa header
pub const VAA_HEADER_LEN: usize = 6; // version + guardian_set_index + num_signatures
pub const GUARDIAN_SIGNATURE_LEN: usize = 66; // index + (r, s, v)

// vaa body
pub const BODY_INDEX_TIMESTAMP: usize = 0;
pub const BODY_INDEX_NONCE: usize = 4;
pub const BODY_INDEX_EMITTER_CHAIN: usize = 8;
pub const BODY_INDEX_EMITTER_ADDRESS: usize = 10;
pub const BODY_INDEX_SEQUENCE: usize = 42;
pub const BODY_INDEX_CONSISTENCY_LEVEL: usize = 50;
pub const BODY_INDEX_PAYLOAD: usize = 51;
