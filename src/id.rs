//! Time-ordered test identifiers
//!
//! UUIDv7-format identifiers whose lexical order tracks generation time at
//! millisecond granularity, with randomness only breaking ties within a
//! millisecond. Tests use these wherever the dashboard expects a unique,
//! sortable ID without coordinating across test cases.

use chrono::Utc;
use nutype::nutype;
use rand::RngCore;

/// A canonical 36-character UUIDv7 string
///
/// Invariants: 8-4-4-4-12 hyphenated lowercase hex grouping, version nibble
/// `7` at offset 14, variant nibble in `[89ab]` at offset 19.
#[nutype(
    derive(Clone, Debug, Display, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, TryFrom, AsRef),
    validate(regex = r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$"),
)]
pub struct Uuid7(String);

impl Uuid7 {
    /// Generate an identifier from the current system clock.
    ///
    /// Identifiers from strictly increasing millisecond readings sort
    /// lexicographically in generation order. Within one millisecond the
    /// order is unspecified; only the random tail differs.
    pub fn generate() -> Self {
        let unix_ms = Utc::now().timestamp_millis().unsigned_abs();
        Self::at_millis(unix_ms)
    }

    /// Generate an identifier for a pinned millisecond timestamp.
    ///
    /// The timestamp part is deterministic; the tail is still random. Lets
    /// tests exercise ordering without sleeping between calls.
    pub fn at_millis(unix_ms: u64) -> Self {
        // 60-bit timestamp, 15 zero-padded hex digits split 8/4/3
        let ts_hex = format!("{:015x}", unix_ms & 0x0fff_ffff_ffff_ffff);
        let (time_high, rest) = ts_hex.split_at(8);
        let (time_mid, time_low) = rest.split_at(4);

        let mut random = [0u8; 10];
        rand::thread_rng().fill_bytes(&mut random);
        let rand_hex = hex::encode(random);

        // Variant digit 8 plus the first 3 random hex digits form the fourth
        // group; the next 12 random hex digits form the fifth.
        let assembled = format!(
            "{time_high}-{time_mid}-7{time_low}-8{}-{}",
            &rand_hex[..3],
            &rand_hex[3..15]
        );
        Self::try_new(assembled).expect("assembled identifier is canonical v7")
    }
}
