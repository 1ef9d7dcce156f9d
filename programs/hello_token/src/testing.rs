//! In-memory collaborators for unit tests.

use anchor_lang::prelude::*;
use std::collections::{HashMap, HashSet};
use wormhole_anchor_sdk::{
    token_bridge::{
        self, TokenBridge, TransferHeader, TransferTokensWithPayload, TransferWithPayload,
    },
    wormhole::{self, CoreBridge, GuardianSignature, MessageData, Vaa},
};

use crate::{
    custody::{token_account, TokenCustody},
    instructions::InitializeArgs,
    message::HelloTokenMessage,
    HelloToken,
};

pub const LOCAL_CHAIN: u16 = wormhole::CHAIN_ID_SOLANA;
pub const FOREIGN_CHAIN: u16 = 2;
/// Hello Token contract on `FOREIGN_CHAIN`.
pub const FOREIGN_EMITTER: [u8; 32] = [0xee; 32];
/// Token Bridge on `FOREIGN_CHAIN`, i.e. the emitter of its transfers.
pub const FOREIGN_TOKEN_BRIDGE: [u8; 32] = [0xbb; 32];
/// Token Bridge on `LOCAL_CHAIN`.
pub const LOCAL_TOKEN_BRIDGE: [u8; 32] = [0xba; 32];

fn init_args(chain: u16) -> InitializeArgs {
    InitializeArgs {
        chain,
        finality: 1,
        relayer_fee: 10_000,
        relayer_fee_precision: 1_000_000,
        wrapped_native: Pubkey::new_unique(),
    }
}

/// Program on `LOCAL_CHAIN` trusting `FOREIGN_EMITTER` on `FOREIGN_CHAIN`.
pub fn program() -> Result<(HelloToken, Pubkey)> {
    let owner = Pubkey::new_unique();
    let mut program = HelloToken::initialize(owner, init_args(LOCAL_CHAIN))?;
    program.register_emitter(&owner, FOREIGN_CHAIN, FOREIGN_EMITTER, FOREIGN_TOKEN_BRIDGE)?;
    Ok((program, owner))
}

/// Program on `FOREIGN_CHAIN` trusting this program on `LOCAL_CHAIN`.
pub fn foreign_program() -> Result<(HelloToken, Pubkey)> {
    let owner = Pubkey::new_unique();
    let mut program = HelloToken::initialize(owner, init_args(FOREIGN_CHAIN))?;
    program.register_emitter(
        &owner,
        LOCAL_CHAIN,
        HelloToken::address(),
        LOCAL_TOKEN_BRIDGE,
    )?;
    Ok((program, owner))
}

#[derive(Debug, Default)]
/// Core bridge with a single guardian set. Any signature from it verifies.
pub struct MockCoreBridge {
    pub guardian_set_index: u32,
    pub sequence: u64,
    pub published: Vec<(u32, Vec<u8>, u8)>,
}

impl CoreBridge for MockCoreBridge {
    fn parse_and_verify_vm(&self, encoded_vm: &[u8]) -> Result<MessageData> {
        let vaa = Vaa::parse(encoded_vm).map_err(|_| ProgramError::InvalidInstructionData)?;
        if vaa.guardian_set_index != self.guardian_set_index || vaa.signatures.is_empty() {
            return Err(ProgramError::InvalidArgument.into());
        }
        Ok(vaa.body)
    }

    fn publish_message(
        &mut self,
        batch_id: u32,
        payload: Vec<u8>,
        consistency_level: u8,
    ) -> Result<u64> {
        let sequence = self.sequence;
        self.sequence += 1;
        self.published.push((batch_id, payload, consistency_level));
        Ok(sequence)
    }
}

#[derive(Debug, Default)]
pub struct MockTokenBridge {
    pub core_bridge: MockCoreBridge,
    pub transfers: Vec<TransferTokensWithPayload>,
    pub redeemed: HashSet<[u8; 32]>,
    /// Local wrapped mint of each foreign token, keyed by (token chain, token
    /// address).
    pub wrapped_mints: HashMap<(u16, [u8; 32]), Pubkey>,
    /// Reject every outbound transfer.
    pub paused: bool,
}

impl MockTokenBridge {
    pub fn attest(&mut self, token_chain: u16, token_address: [u8; 32]) -> Pubkey {
        *self
            .wrapped_mints
            .entry((token_chain, token_address))
            .or_insert_with(Pubkey::new_unique)
    }
}

impl TokenBridge for MockTokenBridge {
    fn transfer_tokens_with_payload(&mut self, args: TransferTokensWithPayload) -> Result<u64> {
        if self.paused {
            return Err(ProgramError::Custom(1).into());
        }
        let message = TransferWithPayload::new(
            TransferHeader {
                amount: args.amount,
                token_address: args.token.to_bytes(),
                token_chain: LOCAL_CHAIN,
                to_address: args.recipient,
                to_chain: args.recipient_chain,
                from_address: HelloToken::address(),
            },
            args.payload.clone(),
        );
        let sequence =
            self.core_bridge
                .publish_message(args.batch_id, message.encode(), args.finality)?;
        self.transfers.push(args);
        Ok(sequence)
    }

    fn complete_transfer_with_payload(
        &mut self,
        encoded_vm: &[u8],
        redeemer: &Pubkey,
    ) -> Result<Pubkey> {
        let vaa = Vaa::parse(encoded_vm).map_err(|_| ProgramError::InvalidInstructionData)?;
        let transfer = token_bridge::parse_transfer_with_payload(vaa.body.payload())
            .map_err(|_| ProgramError::InvalidInstructionData)?;
        if *transfer.to_address() != redeemer.to_bytes() {
            return Err(ProgramError::IllegalOwner.into());
        }
        if !self.redeemed.insert(vaa.body.message_hash()) {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }
        transfer
            .mint()
            .or_else(|| {
                self.wrapped_mints
                    .get(&(transfer.token_chain(), *transfer.token_address()))
                    .copied()
            })
            .ok_or_else(|| ProgramError::InvalidAccountData.into())
    }
}

#[derive(Debug)]
/// Token program and custody account in one. Token balances are keyed by
/// token account, so wallets are only ever credited through their associated
/// token account.
pub struct MockCustody {
    pub wrapped_native: Pubkey,
    /// Fail every outbound transfer.
    pub frozen: bool,
    decimals: HashMap<Pubkey, u8>,
    balances: HashMap<(Pubkey, Pubkey), u64>,
    native: HashMap<Pubkey, u64>,
    vault: HashMap<Pubkey, u64>,
    unwrapped: u64,
}

impl MockCustody {
    pub fn new(wrapped_native: Pubkey) -> Self {
        Self {
            wrapped_native,
            frozen: false,
            decimals: HashMap::new(),
            balances: HashMap::new(),
            native: HashMap::new(),
            vault: HashMap::new(),
            unwrapped: 0,
        }
    }

    pub fn set_decimals(&mut self, mint: Pubkey, decimals: u8) {
        self.decimals.insert(mint, decimals);
    }

    pub fn credit(&mut self, wallet: &Pubkey, mint: &Pubkey, amount: u64) {
        *self
            .balances
            .entry((token_account(wallet, mint), *mint))
            .or_default() += amount;
    }

    pub fn credit_native(&mut self, wallet: &Pubkey, amount: u64) {
        *self.native.entry(*wallet).or_default() += amount;
    }

    /// Tokens released into custody by the Token Bridge.
    pub fn fund_vault(&mut self, mint: &Pubkey, amount: u64) {
        *self.vault.entry(*mint).or_default() += amount;
    }

    pub fn balance(&self, wallet: &Pubkey, mint: &Pubkey) -> u64 {
        self.balances
            .get(&(token_account(wallet, mint), *mint))
            .copied()
            .unwrap_or_default()
    }

    pub fn native_balance(&self, wallet: &Pubkey) -> u64 {
        self.native.get(wallet).copied().unwrap_or_default()
    }

    pub fn vault_balance(&self, mint: &Pubkey) -> u64 {
        self.vault.get(mint).copied().unwrap_or_default()
    }

    fn debit(balance: &mut u64, amount: u64) -> Result<()> {
        *balance = balance
            .checked_sub(amount)
            .ok_or(ProgramError::InsufficientFunds)?;
        Ok(())
    }
}

impl TokenCustody for MockCustody {
    fn decimals(&self, mint: &Pubkey) -> Result<u8> {
        self.decimals
            .get(mint)
            .copied()
            .ok_or_else(|| ProgramError::UninitializedAccount.into())
    }

    fn deposit(&mut self, from: &Pubkey, mint: &Pubkey, amount: u64) -> Result<()> {
        let from = self
            .balances
            .entry((token_account(from, mint), *mint))
            .or_default();
        Self::debit(from, amount)?;
        self.fund_vault(mint, amount);
        Ok(())
    }

    fn wrap_native(&mut self, from: &Pubkey, amount: u64) -> Result<()> {
        Self::debit(self.native.entry(*from).or_default(), amount)?;
        let wrapped_native = self.wrapped_native;
        self.fund_vault(&wrapped_native, amount);
        Ok(())
    }

    fn unwrap_native(&mut self, amount: u64) -> Result<()> {
        Self::debit(self.vault.entry(self.wrapped_native).or_default(), amount)?;
        self.unwrapped += amount;
        Ok(())
    }

    fn transfer(&mut self, mint: &Pubkey, to: &Pubkey, amount: u64) -> Result<()> {
        if self.frozen {
            return Err(ProgramError::Custom(17).into());
        }
        Self::debit(self.vault.entry(*mint).or_default(), amount)?;
        *self.balances.entry((*to, *mint)).or_default() += amount;
        Ok(())
    }

    fn transfer_native(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        if self.frozen {
            return Err(ProgramError::Custom(17).into());
        }
        Self::debit(&mut self.unwrapped, amount)?;
        self.credit_native(to, amount);
        Ok(())
    }
}

#[derive(Debug, Clone)]
/// Signed Token Bridge transfer with payload, as delivered to this program.
pub struct TransferVaa {
    pub guardian_set_index: u32,
    pub sequence: u64,
    pub emitter_chain: u16,
    pub emitter_address: [u8; 32],
    pub amount: u64,
    pub token_address: [u8; 32],
    pub token_chain: u16,
    pub to_address: [u8; 32],
    pub to_chain: u16,
    pub from_address: [u8; 32],
    /// Hello message.
    pub payload: Vec<u8>,
    /// Replaces the whole Token Bridge message when set.
    pub raw_payload: Option<Vec<u8>>,
}

impl Default for TransferVaa {
    fn default() -> Self {
        Self {
            guardian_set_index: 0,
            sequence: 0,
            emitter_chain: FOREIGN_CHAIN,
            emitter_address: FOREIGN_TOKEN_BRIDGE,
            amount: 0,
            token_address: [0; 32],
            token_chain: LOCAL_CHAIN,
            to_address: HelloToken::address(),
            to_chain: LOCAL_CHAIN,
            from_address: FOREIGN_EMITTER,
            payload: HelloTokenMessage {
                target_recipient: [0x99; 32],
                relayer_fee: 10_000,
                is_native: false,
            }
            .encode(),
            raw_payload: None,
        }
    }
}

impl TransferVaa {
    pub fn body(&self) -> MessageData {
        let payload = match &self.raw_payload {
            Some(raw) => raw.clone(),
            None => TransferWithPayload::new(
                TransferHeader {
                    amount: self.amount,
                    token_address: self.token_address,
                    token_chain: self.token_chain,
                    to_address: self.to_address,
                    to_chain: self.to_chain,
                    from_address: self.from_address,
                },
                self.payload.clone(),
            )
            .encode(),
        };

        MessageData {
            timestamp: 1_700_000_000,
            nonce: 0,
            emitter_chain: self.emitter_chain,
            emitter_address: self.emitter_address,
            sequence: self.sequence,
            consistency_level: 1,
            payload,
        }
    }

    pub fn message_hash(&self) -> [u8; 32] {
        self.body().message_hash()
    }

    pub fn encode_with_signature(&self, signature: [u8; 65]) -> Vec<u8> {
        Vaa {
            version: 1,
            guardian_set_index: self.guardian_set_index,
            signatures: vec![GuardianSignature {
                index: 0,
                signature,
            }],
            body: self.body(),
        }
        .encode()
        .expect("vaa should encode")
    }

    pub fn encode(&self) -> Vec<u8> {
        self.encode_with_signature([1u8; 65])
    }
}
