pub use constants::*;
pub use message::*;
pub use program::*;
pub use vaa::*;

pub mod constants;
pub mod message;
pub mod program;
pub mod vaa;
