use logscope_core::{
    derive::{MAX_SEEDS, MAX_SEED_LEN},
    derive_address, encode, encode_all, Seed, SeedError,
};
use solana_sdk::pubkey::Pubkey;

const SYSTEM_PROGRAM: &str = "11111111111111111111111111111111";

/// Reverses the little-endian integer encoding, the way an on-chain verifier would.
fn decode_le(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .rev()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
}

#[test]
fn test_u32_seed_round_trips_at_every_width_boundary() {
    let cases: [(i64, &[u8]); 6] = [
        (0, &[0x00]),
        (255, &[0xFF]),
        (256, &[0x00, 0x01]),
        (65535, &[0xFF, 0xFF]),
        (65536, &[0x00, 0x00, 0x01, 0x00]),
        (4_294_967_295, &[0xFF, 0xFF, 0xFF, 0xFF]),
    ];

    for (value, expected) in cases {
        let encoded = encode(&Seed::U32(value)).unwrap();
        assert_eq!(encoded, expected, "encoding of {}", value);
        assert_eq!(decode_le(&encoded), value as u64);
    }
}

#[test]
fn test_u32_seed_rejects_values_outside_domain() {
    assert_eq!(encode(&Seed::U32(-1)), Err(SeedError::OutOfRange(-1)));
    assert_eq!(
        encode(&Seed::U32(4_294_967_296)),
        Err(SeedError::OutOfRange(4_294_967_296))
    );
}

#[test]
fn test_u64_seed_boundaries() {
    assert_eq!(
        encode(&Seed::U64(-5)),
        Err(SeedError::NegativeNotSupported(-5))
    );
    let too_large = u64::MAX as i128 + 1;
    assert_eq!(
        encode(&Seed::U64(too_large)),
        Err(SeedError::TooLarge(too_large))
    );

    let encoded = encode(&Seed::from(0x0102_0304_0506_0708u64)).unwrap();
    assert_eq!(encoded, vec![8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(decode_le(&encoded), 0x0102_0304_0506_0708);
}

#[test]
fn test_text_seed_that_is_an_address_encodes_as_address() {
    let key = Pubkey::new_unique();
    let as_text = encode(&Seed::from(key.to_string())).unwrap();
    let as_address = encode(&Seed::Address(key)).unwrap();

    assert_eq!(as_text, key.to_bytes().to_vec());
    assert_eq!(as_text, as_address);
    assert_eq!(
        encode(&Seed::from(SYSTEM_PROGRAM)).unwrap(),
        vec![0u8; 32]
    );
}

#[test]
fn test_plain_text_seed_is_utf8() {
    assert_eq!(encode(&Seed::from("vault")).unwrap(), b"vault".to_vec());
    assert_eq!(encode(&Seed::from("ключ")).unwrap(), "ключ".as_bytes().to_vec());
}

#[test]
fn test_bytes_seed_is_unchanged() {
    let raw = vec![0xde, 0xad, 0xbe, 0xef];
    assert_eq!(encode(&Seed::from(raw.clone())).unwrap(), raw);
}

#[test]
fn test_invalid_address_string_is_rejected() {
    assert!(matches!(
        Seed::address_str("not-an-address"),
        Err(SeedError::InvalidAddress(_))
    ));
    assert_eq!(
        Seed::address_str(SYSTEM_PROGRAM).unwrap(),
        Seed::Address(Pubkey::default())
    );
}

#[test]
fn test_encode_all_stops_at_first_failure() {
    let seeds = [Seed::from("ok"), Seed::U32(-1), Seed::U64(-1)];
    assert_eq!(encode_all(&seeds), Err(SeedError::OutOfRange(-1)));
}

#[test]
fn test_derive_address_matches_runtime_derivation() {
    let program_id = Pubkey::new_unique();
    let authority = Pubkey::new_unique();
    let seeds = [
        Seed::from("admin"),
        Seed::from(authority),
        Seed::from(7u32),
        Seed::from(42u64),
    ];

    let (address, bump) = derive_address(&program_id, &seeds).unwrap();
    let counter = 42u64.to_le_bytes();
    let expected = Pubkey::find_program_address(
        &[b"admin".as_ref(), authority.as_ref(), &[7u8], &counter],
        &program_id,
    );
    assert_eq!((address, bump), expected);
}

#[test]
fn test_derive_address_rejects_oversized_seed() {
    let program_id = Pubkey::new_unique();
    let seeds = [Seed::from("a"), Seed::Bytes(vec![1; MAX_SEED_LEN + 1])];
    assert_eq!(
        derive_address(&program_id, &seeds),
        Err(SeedError::SeedTooLong {
            index: 1,
            len: MAX_SEED_LEN + 1
        })
    );
}

#[test]
fn test_derive_address_rejects_too_many_seeds() {
    let program_id = Pubkey::new_unique();
    let seeds: Vec<Seed> = (0..MAX_SEEDS).map(|i| Seed::from(i as u8)).collect();
    assert_eq!(
        derive_address(&program_id, &seeds),
        Err(SeedError::TooManySeeds(MAX_SEEDS))
    );
}
