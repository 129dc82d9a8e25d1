// market-gate-core/src/runtime/audit.rs
// ============================================================================
// Module: Authorization Audit Events
// Description: Structured allow/deny records for gate decisions.
// Purpose: Emit auditable JSON lines for every authorization decision.
// Dependencies: crate::core, serde, serde_json
// ============================================================================

//! ## Overview
//! Every gate decision can be recorded as a structured audit event. Hosts pick
//! a sink: JSON lines on stderr for deployed servers, or the no-op sink for
//! tests. Events carry the tier, the caller subject when known, and the
//! classified reason for denials.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::authz::AccessTier;
use crate::core::authz::AuthzError;
use crate::core::authz::AuthzGrant;
use crate::interfaces::GateAuditSink;

// ============================================================================
// SECTION: Audit Events
// ============================================================================

/// Authorization audit event payload.
#[derive(Debug, Serialize)]
pub struct GateAuditEvent {
    /// Event identifier.
    event: &'static str,
    /// Decision outcome.
    decision: &'static str,
    /// Tier label for the evaluated gate.
    tier: &'static str,
    /// Caller subject (for allow events).
    subject: Option<String>,
    /// Failure kind label (for deny events).
    kind: Option<&'static str>,
    /// Failure message (for deny events).
    reason: Option<&'static str>,
}

impl GateAuditEvent {
    /// Builds an allow event.
    #[must_use]
    pub fn allowed(grant: &AuthzGrant) -> Self {
        Self {
            event: "route_authz",
            decision: "allow",
            tier: grant.tier.label(),
            subject: Some(grant.user_id.as_str().to_string()),
            kind: None,
            reason: None,
        }
    }

    /// Builds a deny event.
    #[must_use]
    pub const fn denied(tier: AccessTier, error: AuthzError) -> Self {
        Self {
            event: "route_authz",
            decision: "deny",
            tier: tier.label(),
            subject: None,
            kind: Some(error.kind()),
            reason: Some(error.message()),
        }
    }

    /// Returns the decision label.
    #[must_use]
    pub const fn decision(&self) -> &'static str {
        self.decision
    }
}

// ============================================================================
// SECTION: Sinks
// ============================================================================

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl GateAuditSink for StderrAuditSink {
    #[allow(clippy::print_stderr, reason = "audit sink contract is JSON lines on stderr")]
    fn record(&self, event: &GateAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            eprintln!("{payload}");
        }
    }
}

/// No-op audit sink for tests.
pub struct NoopAuditSink;

impl GateAuditSink for NoopAuditSink {
    fn record(&self, _event: &GateAuditEvent) {}
}
