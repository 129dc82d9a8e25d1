// market-gate-config/src/lib.rs
// ============================================================================
// Module: Market Gate Config Library
// Description: Canonical config model, validation, and schema artifacts.
// Purpose: Single source of truth for per-subreddit application settings.
// Dependencies: market-gate-core, jsonschema, serde, serde_json, time
// ============================================================================

//! ## Overview
//! `market-gate-config` defines the canonical configuration model for the
//! prediction-market application. It provides strict, fail-closed validation
//! against a declarative JSON Schema, default substitution for absent optional
//! fields, and immutable timestamped snapshots tied to one subreddit install.
//!
//! Security posture: config inputs are untrusted; validation rejects unknown
//! keys at every nesting level and never yields a partially valid object.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod examples;
pub mod schema;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use examples::snapshot_json_example;
pub use schema::app_config_schema;
pub use schema::feature_flags_schema;
pub use schema::snapshot_schema;
pub use validate::ConfigViolation;
pub use validate::ValidationReport;
pub use validate::validate_config_value;
pub use validate::validate_snapshot_value;
