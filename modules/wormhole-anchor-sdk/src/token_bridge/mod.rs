pub use message::*;
pub use program::*;

pub mod message;
pub mod program;
