// market-gate-core/src/core/authz.rs
// ============================================================================
// Module: Authorization Model
// Description: Access tiers, classified failures, and authorization grants.
// Purpose: Provide the canonical data model for gate decisions.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Authorization outcomes are data, never control-flow exceptions. A denied
//! request carries a classified failure kind plus a fixed user-presentable
//! message; the surrounding framework owns translating kinds into
//! protocol-level responses.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Access Tiers
// ============================================================================

/// Access tiers enforced by the gate, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    /// Any logged-in caller.
    User,
    /// Logged-in caller holding the moderator flag.
    Moderator,
}

impl AccessTier {
    /// Returns the lowercase label for audit records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Moderator => "moderator",
        }
    }
}

// ============================================================================
// SECTION: Classified Failures
// ============================================================================

/// Classified authorization failures.
///
/// # Invariants
/// - Absence of identity always maps to `Unauthorized`.
/// - Presence of identity without privilege always maps to `Forbidden`.
/// - Messages are fixed and user-presentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthzError {
    /// No verified identity on the request.
    #[error("User authentication required.")]
    Unauthorized,
    /// Verified identity lacking the required privilege.
    #[error("Moderator privileges required.")]
    Forbidden,
}

impl AuthzError {
    /// Returns the failure kind label for downstream responders.
    #[must_use]
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
        }
    }

    /// Returns the fixed user-presentable message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unauthorized => "User authentication required.",
            Self::Forbidden => "Moderator privileges required.",
        }
    }
}

// ============================================================================
// SECTION: Grants
// ============================================================================

/// Successful authorization result for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthzGrant {
    /// Tier the caller satisfied.
    pub tier: AccessTier,
    /// Identity of the authorized caller.
    pub user_id: UserId,
}
