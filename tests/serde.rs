//! JSON shape of the record types.

#![cfg(feature = "serde")]

use ethereum_uri::{EthereumUri, Parameters, Target, parse};
use serde_json::json;

#[test]
fn record_serializes_with_scheme_tag() {
    let uri = parse(
        "ethereum:pay-0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359@137?value=1e18&gas=21000",
    )
    .unwrap();

    let value = serde_json::to_value(&uri).unwrap();
    assert_eq!(
        value,
        json!({
            "scheme": "ethereum",
            "prefix": "pay",
            "target_address": "0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359",
            "chain_id": "137",
            "parameters": { "gas": "21000", "value": "1000000000000000000" },
        })
    );
}

#[test]
fn arguments_serialize_as_pairs_in_order() {
    let uri = parse(
        "ethereum:0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359/transfer?address=0x8e23ee67d1332ad560396262c48ffbb01f93d052&uint256=1",
    )
    .unwrap();

    let value = serde_json::to_value(&uri).unwrap();
    assert_eq!(value["function_name"], "transfer");
    assert_eq!(
        value["arguments"],
        json!([
            ["address", "0x8e23ee67d1332ad560396262c48ffbb01f93d052"],
            ["uint256", "1"],
        ])
    );
    assert!(value.get("parameters").is_none());
}

#[test]
fn record_roundtrips_through_json() {
    let uri = parse("ethereum:alice.eth@1/deposit?value=2.5e18&uint8=3").unwrap();
    let text = serde_json::to_string(&uri).unwrap();
    let back: EthereumUri = serde_json::from_str(&text).unwrap();
    assert_eq!(back, uri);
}

#[test]
fn invalid_target_is_rejected_on_deserialize() {
    let result: Result<Target, _> = serde_json::from_str("\"0x1234\"");
    assert!(result.is_err());

    let result: Result<EthereumUri, _> = serde_json::from_value(json!({
        "scheme": "ethereum",
        "target_address": "not a target",
    }));
    assert!(result.is_err());
}

#[test]
fn parameters_are_a_plain_map() {
    let params: Parameters = serde_json::from_value(json!({ "gas": "21000" })).unwrap();
    assert_eq!(params.gas(), Some("21000"));
}
