//! Audit event construction and serialization tests.
// market-gate-core/tests/audit.rs
// =============================================================================
// Module: Gate Audit Tests
// Description: Validate allow/deny audit payloads for gate decisions.
// Purpose: Ensure audit records carry tier, subject, and denial classification.
// =============================================================================

use market_gate_core::AccessTier;
use market_gate_core::AuthzError;
use market_gate_core::GateAuditEvent;
use market_gate_core::GateAuditSink;
use market_gate_core::IdentityContext;
use market_gate_core::NoopAuditSink;
use market_gate_core::require_user;

type TestResult = Result<(), String>;

#[test]
fn allow_event_carries_subject_and_tier() -> TestResult {
    let context = IdentityContext::user("t2_alice");
    let grant = require_user(Some(&context)).map_err(|err| err.to_string())?;
    let event = GateAuditEvent::allowed(&grant);
    let payload = serde_json::to_value(&event).map_err(|err| err.to_string())?;
    if payload["decision"] != "allow" || payload["event"] != "route_authz" {
        return Err(format!("unexpected allow payload {payload}"));
    }
    if payload["tier"] != "user" || payload["subject"] != "t2_alice" {
        return Err(format!("unexpected allow payload {payload}"));
    }
    Ok(())
}

#[test]
fn deny_event_carries_kind_and_reason() -> TestResult {
    let event = GateAuditEvent::denied(AccessTier::Moderator, AuthzError::Forbidden);
    let payload = serde_json::to_value(&event).map_err(|err| err.to_string())?;
    if payload["decision"] != "deny" || payload["tier"] != "moderator" {
        return Err(format!("unexpected deny payload {payload}"));
    }
    if payload["kind"] != "forbidden" || payload["reason"] != "Moderator privileges required." {
        return Err(format!("unexpected deny payload {payload}"));
    }
    Ok(())
}

#[test]
fn noop_sink_accepts_events() -> TestResult {
    let sink = NoopAuditSink;
    sink.record(&GateAuditEvent::denied(AccessTier::User, AuthzError::Unauthorized));
    Ok(())
}
