pub use config::*;
pub use foreign_contract::*;
pub use received::*;
pub use token_account::*;

pub mod config;
pub mod foreign_contract;
pub mod received;
pub mod token_account;
