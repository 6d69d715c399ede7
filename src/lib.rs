//! Dashboard Testkit - shared test-support utilities for the portfolio dashboard
//!
//! Three independent components, composed only by the test code that calls
//! them: a fixture loader that decodes on-disk encodings into typed values, a
//! time-ordered unique-identifier generator, and in-memory simulators
//! standing in for the cache store and the persistent record store during a
//! test run.

pub mod config;
pub mod error;
pub mod fixture;
pub mod id;
pub mod state;

pub use config::Settings;
pub use error::{DecodeError, Error, Result};
pub use fixture::{FixtureEncoding, FixtureLoader, FixturePath, FixtureValue};
pub use id::Uuid7;
pub use state::{cache_state, record_state, CacheState, CacheStore};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for a test binary.
///
/// Honors `RUST_LOG`; safe to call from every test, only the first call
/// installs the subscriber.
pub fn init_test_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
