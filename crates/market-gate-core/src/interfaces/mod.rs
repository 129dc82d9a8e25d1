// market-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Market Gate Interfaces
// Description: Framework-agnostic interfaces for authorization and auditing.
// Purpose: Define the contract surfaces used by routing hosts.
// Dependencies: crate::core, crate::runtime
// ============================================================================

//! ## Overview
//! Interfaces define how the routing host integrates the gate without
//! embedding framework details. Implementations must be deterministic and
//! fail closed: a request that cannot be classified as allowed is denied.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::authz::AccessTier;
use crate::core::authz::AuthzError;
use crate::core::authz::AuthzGrant;
use crate::core::context::IdentityContext;
use crate::runtime::audit::GateAuditEvent;

// ============================================================================
// SECTION: Authorization
// ============================================================================

/// Authorization interface for request pipelines.
pub trait RouteAuthz: Send + Sync {
    /// Authorize a request for a tier. Returns a grant on success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError`] carrying the classified failure when the caller
    /// does not satisfy the tier.
    fn authorize(
        &self,
        context: Option<&IdentityContext>,
        tier: AccessTier,
    ) -> Result<AuthzGrant, AuthzError>;
}

// ============================================================================
// SECTION: Auditing
// ============================================================================

/// Audit sink for authorization decisions.
pub trait GateAuditSink: Send + Sync {
    /// Record an authorization audit event.
    fn record(&self, event: &GateAuditEvent);
}
