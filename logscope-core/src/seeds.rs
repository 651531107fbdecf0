//! # Seed Encoding
//!
//! Program derived addresses are computed from raw byte seeds. Callers however
//! tend to think in terms of strings, public keys and counters, so this module
//! defines a [`Seed`] value for each of those shapes and a single canonical
//! encoding for it. The encoding has to be bit-exact: any other client that
//! derives the same address must produce the same bytes.
//!
//! | Variant   | Encoding |
//! |-----------|----------|
//! | `Bytes`   | unchanged |
//! | `Text`    | 32 address bytes if the text is a valid base58 address, UTF-8 otherwise |
//! | `Address` | 32 address bytes |
//! | `U32`     | little-endian in 1, 2 or 4 bytes, the smallest that holds the value |
//! | `U64`     | little-endian in exactly 8 bytes |

use crate::error::SeedError;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Upper bound of the bounded integer seed.
const U32_SEED_MAX: i64 = u32::MAX as i64;
/// Upper bound of the large integer seed.
const U64_SEED_MAX: i128 = u64::MAX as i128;

/// A single value contributing bytes to a derived address.
///
/// The integer variants carry wider signed values than their encoded width so
/// that out-of-domain input coming from untyped sources (JSON, CLI arguments)
/// can be represented and rejected by [`encode`] instead of being truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    Bytes(Vec<u8>),
    Text(String),
    Address(Pubkey),
    U32(i64),
    U64(i128),
}

impl Seed {
    /// Builds an address seed from a base58 string.
    pub fn address_str(address: &str) -> Result<Self, SeedError> {
        Ok(Seed::Address(Pubkey::from_str(address)?))
    }

    /// Builds an address seed from a raw 32-byte slice.
    pub fn address_bytes(bytes: &[u8]) -> Result<Self, SeedError> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            SeedError::InvalidAddress(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Seed::Address(Pubkey::new_from_array(array)))
    }

    /// Encodes this seed. See [`encode`].
    pub fn encode(&self) -> Result<Vec<u8>, SeedError> {
        encode(self)
    }
}

/// Encodes a seed into the byte sequence handed to address derivation.
pub fn encode(seed: &Seed) -> Result<Vec<u8>, SeedError> {
    match seed {
        Seed::Bytes(raw) => Ok(raw.clone()),
        Seed::Text(text) => match Pubkey::from_str(text) {
            Ok(address) => Ok(address.to_bytes().to_vec()),
            Err(_) => Ok(text.as_bytes().to_vec()),
        },
        Seed::Address(address) => Ok(address.to_bytes().to_vec()),
        Seed::U32(value) => encode_u32(*value),
        Seed::U64(value) => encode_u64(*value),
    }
}

/// Encodes a list of seeds in order. The first failing seed aborts the whole list.
pub fn encode_all(seeds: &[Seed]) -> Result<Vec<Vec<u8>>, SeedError> {
    seeds.iter().map(encode).collect()
}

fn encode_u32(value: i64) -> Result<Vec<u8>, SeedError> {
    if !(0..=U32_SEED_MAX).contains(&value) {
        return Err(SeedError::OutOfRange(value));
    }
    let bytes = (value as u32).to_le_bytes();
    let width = if value <= u8::MAX as i64 {
        1
    } else if value <= u16::MAX as i64 {
        2
    } else {
        4
    };
    Ok(bytes[..width].to_vec())
}

fn encode_u64(value: i128) -> Result<Vec<u8>, SeedError> {
    if value < 0 {
        return Err(SeedError::NegativeNotSupported(value));
    }
    if value > U64_SEED_MAX {
        return Err(SeedError::TooLarge(value));
    }
    Ok((value as u64).to_le_bytes().to_vec())
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

impl From<&[u8]> for Seed {
    fn from(value: &[u8]) -> Self {
        Seed::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for Seed {
    fn from(value: Vec<u8>) -> Self {
        Seed::Bytes(value)
    }
}

impl From<Pubkey> for Seed {
    fn from(value: Pubkey) -> Self {
        Seed::Address(value)
    }
}

impl From<[u8; 32]> for Seed {
    fn from(value: [u8; 32]) -> Self {
        Seed::Address(Pubkey::new_from_array(value))
    }
}

impl From<u8> for Seed {
    fn from(value: u8) -> Self {
        Seed::U32(value.into())
    }
}

impl From<u16> for Seed {
    fn from(value: u16) -> Self {
        Seed::U32(value.into())
    }
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed::U32(value.into())
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::U64(value.into())
    }
}
