//! Outcome envelope wire-shape and round-trip tests.
// market-gate-core/tests/outcome.rs
// =============================================================================
// Module: Outcome Envelope Tests
// Description: Validate the success/failure envelope wire contract.
// Purpose: Ensure exactly one payload is ever representable or accepted.
// =============================================================================

use market_gate_core::Outcome;
use serde_json::json;

type TestResult = Result<(), String>;

fn assert_rejected(payload: serde_json::Value, label: &str) -> TestResult {
    match serde_json::from_value::<Outcome<u64, String>>(payload) {
        Err(_) => Ok(()),
        Ok(outcome) => Err(format!("{label}: expected rejection, got {outcome:?}")),
    }
}

#[test]
fn success_round_trip_preserves_value() -> TestResult {
    let outcome: Outcome<u64, String> = Outcome::success(42);
    if !outcome.is_success() || outcome.is_failure() {
        return Err("success outcome misreported its tag".to_string());
    }
    if outcome.value() != Some(&42) {
        return Err(format!("unexpected value {:?}", outcome.value()));
    }
    if outcome.error().is_some() {
        return Err("success outcome reported an error".to_string());
    }
    let encoded = serde_json::to_value(&outcome).map_err(|err| err.to_string())?;
    if encoded != json!({"success": true, "value": 42}) {
        return Err(format!("unexpected wire shape {encoded}"));
    }
    let decoded: Outcome<u64, String> =
        serde_json::from_value(encoded).map_err(|err| err.to_string())?;
    if decoded != outcome {
        return Err(format!("round trip changed outcome: {decoded:?}"));
    }
    Ok(())
}

#[test]
fn failure_round_trip_preserves_error() -> TestResult {
    let outcome: Outcome<u64, String> = Outcome::failure("market closed".to_string());
    if outcome.is_success() || !outcome.is_failure() {
        return Err("failure outcome misreported its tag".to_string());
    }
    if outcome.error().map(String::as_str) != Some("market closed") {
        return Err(format!("unexpected error {:?}", outcome.error()));
    }
    if outcome.value().is_some() {
        return Err("failure outcome reported a value".to_string());
    }
    let encoded = serde_json::to_value(&outcome).map_err(|err| err.to_string())?;
    if encoded != json!({"success": false, "error": "market closed"}) {
        return Err(format!("unexpected wire shape {encoded}"));
    }
    let decoded: Outcome<u64, String> =
        serde_json::from_value(encoded).map_err(|err| err.to_string())?;
    if decoded != outcome {
        return Err(format!("round trip changed outcome: {decoded:?}"));
    }
    Ok(())
}

#[test]
fn mixed_payloads_are_rejected() -> TestResult {
    assert_rejected(json!({"success": true, "error": "boom"}), "success with error")?;
    assert_rejected(json!({"success": false, "value": 1}), "failure with value")?;
    assert_rejected(
        json!({"success": true, "value": 1, "error": "boom"}),
        "both payloads present",
    )?;
    assert_rejected(json!({"success": true}), "success without value")?;
    assert_rejected(json!({"success": false}), "failure without error")?;
    assert_rejected(json!({"value": 1}), "missing tag")?;
    Ok(())
}

#[test]
fn unknown_fields_are_rejected() -> TestResult {
    assert_rejected(json!({"success": true, "value": 1, "debug": true}), "extra field")?;
    Ok(())
}

#[test]
fn result_conversions_are_lossless() -> TestResult {
    let ok: Result<u64, String> = Ok(7);
    let outcome = Outcome::from(ok);
    if outcome.into_result() != Ok(7) {
        return Err("ok result did not round trip".to_string());
    }
    let err: Result<u64, String> = Err("nope".to_string());
    let outcome = Outcome::from(err);
    if outcome.into_result() != Err("nope".to_string()) {
        return Err("err result did not round trip".to_string());
    }
    Ok(())
}
