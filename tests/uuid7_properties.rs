//! Property-based tests for the time-ordered identifier generator
//!
//! Verifies the fixed-format and ordering invariants across the full
//! 60-bit timestamp range using pinned clock readings.

use proptest::prelude::*;

use dashboard_testkit::Uuid7;

const MAX_TIMESTAMP_MS: u64 = (1 << 60) - 1;

proptest! {
    #[test]
    fn identifier_shape_holds_for_any_timestamp(unix_ms in 0u64..=MAX_TIMESTAMP_MS) {
        let id = Uuid7::at_millis(unix_ms);
        let s = id.as_ref();
        prop_assert_eq!(s.len(), 36);
        prop_assert_eq!(s.as_bytes()[14], b'7');
        prop_assert_eq!(s.as_bytes()[19], b'8');
        for offset in [8usize, 13, 18, 23] {
            prop_assert_eq!(s.as_bytes()[offset], b'-');
        }
    }

    #[test]
    fn distinct_milliseconds_sort_in_clock_order(
        earlier_ms in 0u64..MAX_TIMESTAMP_MS,
        gap in 1u64..1_000_000,
    ) {
        let later_ms = earlier_ms.saturating_add(gap).min(MAX_TIMESTAMP_MS);
        prop_assume!(later_ms > earlier_ms);

        let earlier = Uuid7::at_millis(earlier_ms);
        let later = Uuid7::at_millis(later_ms);
        prop_assert!(earlier.as_ref() < later.as_ref());
    }

    #[test]
    fn timestamp_prefix_is_deterministic(unix_ms in 0u64..=MAX_TIMESTAMP_MS) {
        let first = Uuid7::at_millis(unix_ms);
        let second = Uuid7::at_millis(unix_ms);
        // first 18 chars carry the timestamp and version; tails are random
        prop_assert_eq!(&first.as_ref()[..18], &second.as_ref()[..18]);
    }
}

#[test]
fn generate_uses_a_current_clock_reading() {
    let before_ms = chrono::Utc::now().timestamp_millis().unsigned_abs();
    let id = Uuid7::generate();
    let after_ms = chrono::Utc::now().timestamp_millis().unsigned_abs();

    // strip hyphens and the version nibble to recover the 15-digit timestamp
    let compact: String = id.as_ref()[..18].chars().filter(|c| *c != '-').collect();
    let ts_hex = format!("{}{}", &compact[..12], &compact[13..16]);
    let embedded_ms = u64::from_str_radix(&ts_hex, 16).expect("timestamp prefix is hex");
    assert!(embedded_ms >= before_ms && embedded_ms <= after_ms);
}

#[test]
fn consecutive_generates_are_unique() {
    let ids: Vec<Uuid7> = (0..64).map(|_| Uuid7::generate()).collect();
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}
