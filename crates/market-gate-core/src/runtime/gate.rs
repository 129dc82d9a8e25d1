// market-gate-core/src/runtime/gate.rs
// ============================================================================
// Module: Authorization Gate Evaluation
// Description: Ordered-check gate evaluation and trace collection.
// Purpose: Evaluate access tiers against identity snapshots deterministically.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! A gate is an ordered chain of access checks evaluated against one request's
//! identity snapshot. Evaluation advances an explicit state machine
//! (`Pending` → `Authenticated` → `Authorized`) and stops at the first failed
//! check, which classifies the rejection. Identity presence is always checked
//! before any privilege check; new privilege tiers append checks to the chain
//! and never reorder existing ones.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::authz::AccessTier;
use crate::core::authz::AuthzError;
use crate::core::authz::AuthzGrant;
use crate::core::context::IdentityContext;
use crate::interfaces::RouteAuthz;

// ============================================================================
// SECTION: Access Checks
// ============================================================================

/// Single predicate in a gate chain.
///
/// # Invariants
/// - `IdentityPresent` must precede privilege checks in every chain; privilege
///   checks assume an authenticated caller and classify failures as
///   `Forbidden`, never `Unauthorized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessCheck {
    /// Caller carries a non-empty resolved identity.
    IdentityPresent,
    /// Caller holds the moderator flag.
    ModeratorFlag,
}

impl AccessCheck {
    /// Returns the lowercase label for trace and audit records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::IdentityPresent => "identity_present",
            Self::ModeratorFlag => "moderator_flag",
        }
    }

    /// Applies the check to an identity snapshot.
    fn apply(self, context: Option<&IdentityContext>) -> Result<(), AuthzError> {
        match self {
            Self::IdentityPresent => {
                if context.is_some_and(IdentityContext::has_identity) {
                    Ok(())
                } else {
                    Err(AuthzError::Unauthorized)
                }
            }
            Self::ModeratorFlag => {
                if context.is_some_and(|ctx| ctx.is_moderator) {
                    Ok(())
                } else {
                    Err(AuthzError::Forbidden)
                }
            }
        }
    }

    /// Returns the state reached after this check passes.
    const fn passed_state(self) -> GateState {
        match self {
            Self::IdentityPresent => GateState::Authenticated,
            Self::ModeratorFlag => GateState::Authorized,
        }
    }
}

// ============================================================================
// SECTION: Gate States
// ============================================================================

/// Evaluation state of a gate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// No check has been evaluated yet.
    Pending,
    /// Identity presence confirmed; terminal for the user tier.
    Authenticated,
    /// Privilege confirmed; terminal for the moderator tier.
    Authorized,
    /// A check failed; terminal with the classified failure.
    Rejected(AuthzError),
}

impl GateState {
    /// Returns the classified failure for rejected evaluations.
    #[must_use]
    pub const fn rejection(self) -> Option<AuthzError> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Pending | Self::Authenticated | Self::Authorized => None,
        }
    }
}

// ============================================================================
// SECTION: Evaluation Results
// ============================================================================

/// Trace entry for one evaluated check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateTraceEntry {
    /// Check that was evaluated.
    pub check: AccessCheck,
    /// Whether the check passed.
    pub passed: bool,
}

/// Result of evaluating a gate against one identity snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateEvaluation {
    /// Terminal state reached by the chain.
    pub state: GateState,
    /// Ordered trace of evaluated checks.
    pub trace: Vec<GateTraceEntry>,
}

// ============================================================================
// SECTION: Gate
// ============================================================================

/// Ordered chain of access checks for one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    /// Tier this chain enforces.
    tier: AccessTier,
    /// Checks in evaluation order.
    checks: Vec<AccessCheck>,
}

impl Gate {
    /// Builds the gate chain for a tier.
    #[must_use]
    pub fn for_tier(tier: AccessTier) -> Self {
        let checks = match tier {
            AccessTier::User => vec![AccessCheck::IdentityPresent],
            AccessTier::Moderator => {
                vec![AccessCheck::IdentityPresent, AccessCheck::ModeratorFlag]
            }
        };
        Self {
            tier,
            checks,
        }
    }

    /// Builds the gate requiring any logged-in caller.
    #[must_use]
    pub fn user() -> Self {
        Self::for_tier(AccessTier::User)
    }

    /// Builds the gate requiring a moderator.
    #[must_use]
    pub fn moderator() -> Self {
        Self::for_tier(AccessTier::Moderator)
    }

    /// Returns the tier this gate enforces.
    #[must_use]
    pub const fn tier(&self) -> AccessTier {
        self.tier
    }

    /// Returns the checks in evaluation order.
    #[must_use]
    pub fn checks(&self) -> &[AccessCheck] {
        &self.checks
    }

    /// Evaluates the chain against an identity snapshot.
    ///
    /// Evaluation is pure: the snapshot is read-only and no external state is
    /// touched. The first failing check terminates the chain.
    #[must_use]
    pub fn evaluate(&self, context: Option<&IdentityContext>) -> GateEvaluation {
        let mut trace = Vec::with_capacity(self.checks.len());
        let mut state = GateState::Pending;
        for check in &self.checks {
            match check.apply(context) {
                Ok(()) => {
                    trace.push(GateTraceEntry {
                        check: *check,
                        passed: true,
                    });
                    state = check.passed_state();
                }
                Err(error) => {
                    trace.push(GateTraceEntry {
                        check: *check,
                        passed: false,
                    });
                    return GateEvaluation {
                        state: GateState::Rejected(error),
                        trace,
                    };
                }
            }
        }
        GateEvaluation {
            state,
            trace,
        }
    }

    /// Authorizes a request, yielding a grant or a classified failure.
    ///
    /// # Errors
    ///
    /// Returns [`AuthzError`] when any check in the chain fails.
    pub fn authorize(&self, context: Option<&IdentityContext>) -> Result<AuthzGrant, AuthzError> {
        let evaluation = self.evaluate(context);
        if let Some(error) = evaluation.state.rejection() {
            return Err(error);
        }
        let user_id = context
            .and_then(|ctx| ctx.user_id.clone())
            .ok_or(AuthzError::Unauthorized)?;
        Ok(AuthzGrant {
            tier: self.tier,
            user_id,
        })
    }
}

// ============================================================================
// SECTION: Gate Operations
// ============================================================================

/// Requires a logged-in caller.
///
/// # Errors
///
/// Returns [`AuthzError::Unauthorized`] when the context is absent or carries
/// no non-empty identity.
pub fn require_user(context: Option<&IdentityContext>) -> Result<AuthzGrant, AuthzError> {
    Gate::user().authorize(context)
}

/// Requires a logged-in moderator.
///
/// # Errors
///
/// Returns [`AuthzError::Unauthorized`] when no identity is present, or
/// [`AuthzError::Forbidden`] when an identity is present without the moderator
/// flag. The identity check always runs first.
pub fn require_moderator(context: Option<&IdentityContext>) -> Result<AuthzGrant, AuthzError> {
    Gate::moderator().authorize(context)
}

// ============================================================================
// SECTION: Default Authorizer
// ============================================================================

/// Chain-backed [`RouteAuthz`] implementation.
pub struct ChainRouteAuthz;

impl RouteAuthz for ChainRouteAuthz {
    fn authorize(
        &self,
        context: Option<&IdentityContext>,
        tier: AccessTier,
    ) -> Result<AuthzGrant, AuthzError> {
        Gate::for_tier(tier).authorize(context)
    }
}
