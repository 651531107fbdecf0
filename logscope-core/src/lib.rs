//! Core building blocks for reading Solana transaction logs and deriving
//! program addresses.
//!
//! Nothing in this crate performs I/O. Callers hand over log lines they already
//! fetched (from RPC, a file, a test harness) and get back typed results.
//!
//! # Key Components
//!
//! *   [`seeds`]: Canonical byte encoding for heterogeneous PDA seeds.
//! *   [`derive`](mod@derive): Address derivation on top of the encoded seeds.
//! *   [`discriminator`]: The 8-byte event tag (`sha256("event:<Name>")[..8]`) and
//!     its per-instance cache.
//! *   [`logs`]: Classification of raw log lines and `Program data:` payload extraction.
//! *   [`events`]: Matching data lines against caller-supplied event decoders.
//! *   [`scopes`]: Filtering and grouping log lines by program invocation scope.
pub mod derive;
pub mod discriminator;
/// Error types returned by seed encoding and address derivation.
pub mod error;
pub mod events;
/// The "skip and continue" policy applied to malformed log input.
pub mod lenient;
pub mod logs;
pub mod scopes;
pub mod seeds;

pub use derive::derive_address;
pub use discriminator::{compute_discriminator, DiscriminatorCache, EventDiscriminator};
pub use error::SeedError;
pub use events::{extract_events, EventConfig, EventExtractor, ExtractedEvent};
pub use lenient::skip_on_error;
pub use logs::{parse_log_data, try_parse_log_data, LogLine};
pub use scopes::{filter_logs_by_program, group_logs_by_program, ParsedLogEntry};
pub use seeds::{encode, encode_all, Seed};
