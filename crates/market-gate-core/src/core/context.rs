// market-gate-core/src/core/context.rs
// ============================================================================
// Module: Request Identity Context
// Description: Per-request identity snapshot consumed by the gate.
// Purpose: Carry resolved caller identity explicitly through authorization.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! The host platform resolves caller identity per request and hands the gate a
//! single immutable snapshot. The gate never reads ambient framework state and
//! never mutates the snapshot; a request with no resolved session passes no
//! context at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Identity Context
// ============================================================================

/// Per-request identity snapshot used for authorization decisions.
///
/// # Invariants
/// - One snapshot per request; the gate treats it as read-only.
/// - `is_moderator` is meaningful only when `user_id` carries an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    /// Resolved user identity, present iff the caller is logged in.
    pub user_id: Option<UserId>,
    /// Elevated-privilege flag asserted by the host platform.
    pub is_moderator: bool,
}

impl IdentityContext {
    /// Builds a context for a caller with no resolved identity.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self {
            user_id: None,
            is_moderator: false,
        }
    }

    /// Builds a context for a logged-in, non-moderator caller.
    #[must_use]
    pub fn user(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            is_moderator: false,
        }
    }

    /// Builds a context for a logged-in moderator.
    #[must_use]
    pub fn moderator(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            is_moderator: true,
        }
    }

    /// Returns true when the caller carries a non-empty resolved identity.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.user_id.as_ref().is_some_and(|id| !id.as_str().is_empty())
    }
}
