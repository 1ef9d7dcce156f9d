pub mod admin;
pub mod initialize;
pub mod redeem;
pub mod send;

pub use admin::*;
pub use initialize::*;
pub use redeem::*;
pub use send::*;
