//! Program derived address computation over [`Seed`] values.

use crate::{
    error::SeedError,
    seeds::{encode_all, Seed},
};
use solana_sdk::pubkey::Pubkey;

/// Maximum length of a single encoded seed accepted by the runtime.
pub const MAX_SEED_LEN: usize = 32;
/// Maximum number of seeds accepted by the runtime, including the bump seed.
pub const MAX_SEEDS: usize = 16;

/// Encodes `seeds` and finds the canonical program address and bump for `program_id`.
///
/// Seeds are checked against the runtime limits before the search starts so that
/// callers get a typed error instead of the runtime's silent `None`.
pub fn derive_address(program_id: &Pubkey, seeds: &[Seed]) -> Result<(Pubkey, u8), SeedError> {
    if seeds.len() > MAX_SEEDS - 1 {
        return Err(SeedError::TooManySeeds(seeds.len()));
    }

    let encoded = encode_all(seeds)?;
    if let Some((index, seed)) = encoded
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(SeedError::SeedTooLong {
            index,
            len: seed.len(),
        });
    }

    let slices: Vec<&[u8]> = encoded.iter().map(Vec::as_slice).collect();
    let (address, bump) =
        Pubkey::try_find_program_address(&slices, program_id).ok_or(SeedError::NoViableBump)?;

    tracing::debug!(%program_id, %address, bump, "Derived program address");
    Ok((address, bump))
}
