use solana_sdk::pubkey::ParsePubkeyError;
use thiserror::Error;

/// Failures produced while turning seed values into bytes or deriving an address from them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("Integer seed {0} is outside the range 0..=4294967295")]
    OutOfRange(i64),

    #[error("Integer seed {0} does not fit into 64 bits")]
    TooLarge(i128),

    #[error("Negative value {0} is not supported for a 64-bit seed")]
    NegativeNotSupported(i128),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Seed #{index} is {len} bytes long, the maximum is 32")]
    SeedTooLong { index: usize, len: usize },

    #[error("Too many seeds: {0} given, at most 15 are allowed next to the bump")]
    TooManySeeds(usize),

    #[error("Unable to find a viable program address bump seed")]
    NoViableBump,
}

impl From<ParsePubkeyError> for SeedError {
    fn from(err: ParsePubkeyError) -> Self {
        SeedError::InvalidAddress(err.to_string())
    }
}
