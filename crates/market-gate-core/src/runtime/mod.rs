// market-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Market Gate Runtime
// Description: Gate evaluation runtime and audit sinks.
// Purpose: Execute ordered authorization checks against identity snapshots.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement gate evaluation and decision auditing. All
//! external authorization surfaces must call into the same chain logic so the
//! Unauthorized/Forbidden classification stays invariant across entry points.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod audit;
pub mod gate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::GateAuditEvent;
pub use audit::NoopAuditSink;
pub use audit::StderrAuditSink;
pub use gate::AccessCheck;
pub use gate::ChainRouteAuthz;
pub use gate::Gate;
pub use gate::GateEvaluation;
pub use gate::GateState;
pub use gate::GateTraceEntry;
pub use gate::require_moderator;
pub use gate::require_user;
