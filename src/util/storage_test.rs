#![cfg(not(feature = "hydrate"))]

use super::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Sample {
    name: String,
    count: u32,
}

// ===== encode / decode =====

#[test]
fn encode_then_decode_round_trips() {
    let sample = Sample { name: "cement".to_owned(), count: 40 };
    let encoded = encode(&sample).unwrap();
    let decoded: Sample = decode("k", &encoded).unwrap();
    assert_eq!(decoded, sample);
}

#[test]
fn decode_rejects_malformed_text() {
    assert_eq!(decode::<Sample>("k", "not json"), None);
}

#[test]
fn decode_rejects_mismatched_shapes() {
    assert_eq!(decode::<Sample>("k", r#"{"name":"cement"}"#), None);
    assert_eq!(decode::<Sample>("k", "[1,2,3]"), None);
}

// ===== browser fallbacks =====

#[test]
fn load_json_is_none_without_a_browser() {
    assert_eq!(load_json::<Sample>("missing-key"), None);
}

#[test]
fn save_json_is_a_callable_noop_without_a_browser() {
    save_json("k", &Sample { name: "sand".to_owned(), count: 1 });
}

#[test]
fn remove_is_a_callable_noop_without_a_browser() {
    remove("k");
}
