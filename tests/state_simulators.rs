//! Integration tests for the in-memory state simulators
//!
//! Exercises the simulators the way a dashboard test would: seeded from
//! loaded fixtures, mutated during the test, and discarded afterwards.

use serde_json::json;
use std::path::PathBuf;

use dashboard_testkit::{cache_state, record_state, CacheStore, FixtureLoader};

fn loader() -> FixtureLoader {
    FixtureLoader::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

#[test]
fn cache_simulator_supports_the_documented_surface() {
    let mut cache = cache_state([("a", "1")]);
    assert_eq!(cache.get("a"), Some("1"));

    cache.set("b", "2");
    assert_eq!(cache.get("b"), Some("2"));
}

#[test]
fn record_simulator_copies_the_fixture_shape() {
    let fixture = json!({ "records": [] });
    let db = record_state(&fixture);
    assert_eq!(db["records"], json!([]));
}

#[test]
fn record_mutation_leaves_the_fixture_untouched() {
    let fixture = json!({ "records": [], "total": 0 });
    let mut db = record_state(&fixture);

    db["records"] = json!([{ "asset": "BTC", "amount": "0.5" }]);
    db["total"] = json!(1);

    assert_eq!(fixture, json!({ "records": [], "total": 0 }));
}

#[test]
fn simulators_compose_with_loaded_fixtures() {
    let body = loader()
        .load("providers/etherscan_rate_limit.json")
        .expect("fixture exists")
        .into_json()
        .expect("json fixture");

    // Stand in for the provider-response cache during a rate-limit test
    let mut cache = cache_state([(
        "etherscan:last_response",
        body["message"].as_str().expect("message is a string"),
    )]);
    assert_eq!(cache.get("etherscan:last_response"), Some("NOTOK"));

    assert!(cache.delete("etherscan:last_response"));
    assert_eq!(cache.get("etherscan:last_response"), None);

    // And a record store seeded from the same fixture
    let db = record_state(&json!({ "records": [body] }));
    assert_eq!(db["records"][0]["message"], "NOTOK");
}
