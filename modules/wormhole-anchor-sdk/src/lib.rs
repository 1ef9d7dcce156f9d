//! Wire formats and narrow interfaces for the two Wormhole programs an
//! integrator talks to: the core bridge (attested messages) and the Token
//! Bridge (transfers with payload).

pub mod wormhole;

#[cfg(feature = "token-bridge")]
pub mod token_bridge;
